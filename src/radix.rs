//! Conversion between big-endian numeral sequences and arbitrary-precision
//! integers.
//!
//! `num-bigint`'s own `from_radix_be`/`to_radix_be` store each digit in a
//! `u8`, which only covers radices up to 256 — too small for FF1's supported
//! range of `[2, 2^16]`. `str2num`/`num2str` instead do the multiply-add and
//! divide-mod accumulation directly, the way the reference big-number
//! implementation does.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// `N = sum(X[i] * radix^(len-1-i))`. Every `X[i]` must be `< radix`; the
/// caller validates this ahead of time. Returns 0 for an empty sequence.
pub(crate) fn str2num(x: &[u16], radix: u32) -> BigUint {
    let r = BigUint::from(radix);
    let mut acc = BigUint::zero();
    for &digit in x {
        acc = acc * &r + BigUint::from(digit as u32);
    }
    acc
}

/// The length-`len` big-endian numeral representation of `n` in `radix`,
/// left-padded with zero numerals. `n` must be `< radix^len`.
pub(crate) fn num2str(mut n: BigUint, radix: u32, len: usize) -> Vec<u16> {
    let r = BigUint::from(radix);
    let mut out = vec![0u16; len];
    for slot in out.iter_mut().rev() {
        let rem = &n % &r;
        n = &n / &r;
        *slot = rem.to_u32().expect("remainder is < radix, fits in u32") as u16;
    }
    out
}
