//! Format-preserving encryption
//!
//! An implementation of NIST SP 800-38G's FF1 mode: a length- and
//! alphabet-preserving permutation over numeral sequences in an arbitrary
//! radix, built from AES-128 and a ten-round Feistel construction.
//!
//! The lowest-level API, [`encrypt`]/[`decrypt`], works directly on numeral
//! sequences (each numeral a `u16` in `[0, radix)`). [`FF1`] is a higher
//! level, string-based convenience wrapper that holds a key, a default
//! tweak, and an alphabet for repeated use.
//!
//! # Example
//! ```rust
//! let ff1 = ff1fpe::FF1::new(
//!     &[
//!         0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!         0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
//!     ],  // the encryption key
//!     None, // no default tweak
//!     10,   // radix: decimal numerals
//!     None, // use (the first 10 characters of) the default alphabet
//! ).unwrap();
//!
//! // from the first NIST-specified test vector for FF1
//! let pt = "0123456789";
//! let ct = "2433477484";
//!
//! let out = ff1.encrypt(pt, None).unwrap();
//! assert_eq!(out, ct);
//!
//! let out = ff1.decrypt(&ct, None).unwrap();
//! assert_eq!(out, pt);
//! ```

pub(crate) mod aes128;
pub(crate) mod alphabet;
pub mod error;
mod expand;
pub mod feistel;
pub mod ff1;
pub(crate) mod prf;
pub(crate) mod radix;

pub use error::Error;
pub use feistel::{decrypt, encrypt};
pub use ff1::FF1;

/// Results returned by the FF1 core.
pub mod result {
    pub type Result<T> = std::result::Result<T, crate::error::Error>;
}
