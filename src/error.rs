//! Errors returned by the FF1 core.

use std::fmt;

/// Structure used by the library to convey errors.
#[derive(Debug)]
pub enum Error {
    /// `radix` fell outside the supported range `[2, 2^16]`.
    InvalidRadix { radix: u32 },
    /// The numeral sequence length didn't satisfy the minimum-domain rule
    /// (`radix^length >= 10^6`) or exceeded the configured maximum.
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },
    /// A numeral at `index` was not in `[0, radix)`.
    InvalidNumeral { value: u32, radix: u32, index: usize },
    /// The supplied key was not exactly 16 bytes (FF1 here is AES-128 only).
    InvalidKeyLength { length: usize },
    /// A character passed to the alphabet-based convenience API isn't a
    /// member of the configured alphabet.
    InvalidCharacter { ch: char },
    /// The big-integer backend could not complete an operation.
    InternalArithmetic(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRadix { radix } => {
                write!(f, "invalid radix {radix}; must be in [2, 65536]")
            }
            Error::InvalidLength { length, min, max } => write!(
                f,
                "invalid numeral sequence length {length}; expected between {min} and {max}"
            ),
            Error::InvalidNumeral {
                value,
                radix,
                index,
            } => write!(
                f,
                "numeral {value} at index {index} is not in [0, {radix})"
            ),
            Error::InvalidKeyLength { length } => write!(
                f,
                "invalid key length {length}; FF1 here requires a 16-byte (AES-128) key"
            ),
            Error::InvalidCharacter { ch } => {
                write!(f, "'{ch}' is not a member of the alphabet")
            }
            Error::InternalArithmetic(why) => write!(f, "internal arithmetic error: {why}"),
        }
    }
}

impl std::error::Error for Error {}
