//! The ten-round Feistel construction that drives FF1 encryption and
//! decryption.
//!
//! Operates directly on numeral sequences (each numeral an integer in
//! `[0, radix)`); [`crate::ff1`] layers a string/alphabet convenience API on
//! top of this.

use crate::aes128::Cipher;
use crate::error::Error;
use crate::expand;
use crate::prf;
use crate::radix;
use crate::result::Result;

use byteorder::{BigEndian, ByteOrder};
use num_bigint::{BigInt, BigUint, ToBigInt, ToBigUint};
use num_traits::Euclid;

const ROUNDS: u8 = 10;
const MIN_RADIX: u32 = 2;
const MAX_RADIX: u32 = 1 << 16;
const MIN_DOMAIN: u128 = 1_000_000;
/// Recommended ceiling from SP 800-38G: the maximum input length is
/// `2^32 - 1`.
const MAX_LENGTH: u64 = (1u64 << 32) - 1;

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Smallest `L` such that `radix^L >= 10^6`, per the minimum-domain rule.
/// Computed by repeated multiplication rather than `log`/`log10` so it can't
/// drift across a power-of-radix boundary the way a floating point
/// computation can.
fn min_length_for_radix(radix: u32) -> usize {
    let mut len = 0usize;
    let mut pow: u128 = 1;
    while pow < MIN_DOMAIN {
        pow *= radix as u128;
        len += 1;
    }
    len.max(2)
}

/// `ceil(log2(radix))`: the number of bits needed to distinguish the
/// `radix` possible numeral values.
fn numeral_bits(radix: u32) -> u64 {
    (u32::BITS - (radix - 1).leading_zeros()) as u64
}

fn validate(radix: u32, x: &[u16]) -> Result<()> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::InvalidRadix { radix });
    }

    let min = min_length_for_radix(radix);
    let len = x.len();
    if len < min || len as u64 > MAX_LENGTH {
        return Err(Error::InvalidLength {
            length: len,
            min,
            max: MAX_LENGTH as usize,
        });
    }

    for (index, &numeral) in x.iter().enumerate() {
        if numeral as u32 >= radix {
            return Err(Error::InvalidNumeral {
                value: numeral as u32,
                radix,
                index,
            });
        }
    }

    Ok(())
}

/// Encrypts a numeral sequence under FF1. `key` must be exactly 16 bytes;
/// `tweak` may be any length, including empty; `radix` must be in
/// `[2, 2^16]`; every numeral in `x` must be `< radix`.
pub fn encrypt(key: &[u8], tweak: &[u8], radix: u32, x: &[u16]) -> Result<Vec<u16>> {
    cipher(key, tweak, radix, x, Direction::Encrypt)
}

/// The inverse of [`encrypt`]: `decrypt(key, tweak, radix, encrypt(key,
/// tweak, radix, x)) == x` for every valid `x`.
pub fn decrypt(key: &[u8], tweak: &[u8], radix: u32, x: &[u16]) -> Result<Vec<u16>> {
    cipher(key, tweak, radix, x, Direction::Decrypt)
}

fn cipher(key: &[u8], tweak: &[u8], radix: u32, x: &[u16], dir: Direction) -> Result<Vec<u16>> {
    validate(radix, x)?;
    let aes = Cipher::new(key)?;

    let n = x.len();
    let u = n / 2;
    let v = n - u;
    let t = tweak.len();

    // (step 3) b is fixed for the whole call: it depends only on v, never
    // on which half is being updated this round.
    let b = ((v as u64 * numeral_bits(radix) + 7) / 8) as usize;
    // (step 4)
    let d = 4 * ((b + 3) / 4) + 4;
    let pad = (-(t as i64) - (b as i64) - 1).rem_euclid(16) as usize;

    // buf = P (16 bytes) || Q (t + pad + 1 + b bytes); Q's round-index byte
    // and mixed-in integer are rewritten every round, everything else is
    // fixed by setup.
    let q_len = t + pad + 1 + b;
    let mut buf = vec![0u8; 16 + q_len];

    // (step 5) fixed block P, laid out bit-exactly per the wire contract
    buf[0] = 0x01;
    buf[1] = 0x02;
    buf[2] = 0x01;
    BigEndian::write_u32(&mut buf[2..6], radix);
    buf[2] = 0x01; // the low 3 bytes of the write above are what we want
    buf[6] = ROUNDS;
    buf[7] = (u % 256) as u8;
    BigEndian::write_u32(&mut buf[8..12], n as u32);
    BigEndian::write_u32(&mut buf[12..16], t as u32);

    // variable block Q: tweak bytes, then zero padding; the round index and
    // mixed-in half are filled in on each iteration below
    buf[16..16 + t].copy_from_slice(tweak);

    let qpow_u: BigInt = BigUint::from(radix).pow(u as u32).to_bigint().unwrap();
    let qpow_v: BigInt = if u == v {
        qpow_u.clone()
    } else {
        &qpow_u * radix
    };

    let mut na = radix::str2num(&x[..u], radix).to_bigint().unwrap();
    let mut nb = radix::str2num(&x[u..], radix).to_bigint().unwrap();
    let mut mu = qpow_u;
    let mut mv = qpow_v;

    // decryption runs the same round body as encryption, just starting from
    // the swapped halves/moduli and walking the round index backwards
    if let Direction::Decrypt = dir {
        std::mem::swap(&mut na, &mut nb);
        std::mem::swap(&mut mu, &mut mv);
    }

    for i in 0..ROUNDS {
        let round_index = match dir {
            Direction::Encrypt => i,
            Direction::Decrypt => ROUNDS - 1 - i,
        };

        {
            let q = &mut buf[16..];
            q[q_len - b - 1] = round_index;

            // to_bytes_be returns the minimal-length magnitude; left-pad to
            // the fixed b-byte field Q reserves for it
            let (_, be_bytes) = nb.to_bytes_be();
            let field = &mut q[q_len - b..];
            field.fill(0);
            let start = b.saturating_sub(be_bytes.len());
            field[start..].copy_from_slice(&be_bytes[be_bytes.len().saturating_sub(b)..]);
        }

        // (step 6ii, 6iii)
        let r = prf::mac(&aes, &buf);
        let s = expand::expand(&aes, &r, d);
        // (step 6iv)
        let y = BigUint::from_bytes_be(&s[..d]).to_bigint().unwrap();

        // (step 6vi)
        let mut c = match dir {
            Direction::Encrypt => &na + &y,
            Direction::Decrypt => &na - &y,
        };
        c = c.rem_euclid(&mu);
        na = c;

        // (step 6v, 6viii, 6ix)
        std::mem::swap(&mut mu, &mut mv);
        std::mem::swap(&mut na, &mut nb);
    }

    if let Direction::Decrypt = dir {
        std::mem::swap(&mut na, &mut nb);
    }

    // (step 7)
    let mut out = radix::num2str(na.to_biguint().expect("na is nonnegative"), radix, u);
    out.extend(radix::num2str(
        nb.to_biguint().expect("nb is nonnegative"),
        radix,
        v,
    ));
    Ok(out)
}
