//! Expands a single PRF output block into a `d`-byte string.
//!
//! `S = R || AES_K(R ^ J_1) || AES_K(R ^ J_2) || ...`, truncated to `d`
//! bytes, where `J_j` is the 16-byte big-endian encoding of `j` (12 zero
//! bytes followed by a 4-byte big-endian word). `d` is always at least 16,
//! so `R` alone already covers the `d <= 16` case.

use crate::aes128::{Cipher, BLOCK_SIZE};
use crate::prf;

use byteorder::{BigEndian, ByteOrder};

pub(crate) fn expand(cipher: &Cipher, r: &[u8; BLOCK_SIZE], d: usize) -> Vec<u8> {
    let cnt = (d + BLOCK_SIZE - 1) / BLOCK_SIZE - 1;

    let mut s = Vec::with_capacity((cnt + 1) * BLOCK_SIZE);
    s.extend_from_slice(r);

    for j in 1..=cnt {
        let mut block = *r;
        let w = BigEndian::read_u32(&block[BLOCK_SIZE - 4..]);
        BigEndian::write_u32(&mut block[BLOCK_SIZE - 4..], w ^ j as u32);
        s.extend_from_slice(&prf::ciph(cipher, &block));
    }

    s.truncate(d);
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d_of_16_is_just_r() {
        let cipher = Cipher::new(&[0u8; 16]).unwrap();
        let r = [7u8; BLOCK_SIZE];
        assert_eq!(expand(&cipher, &r, 16), r.to_vec());
    }

    #[test]
    fn truncates_to_requested_length() {
        let cipher = Cipher::new(&[0u8; 16]).unwrap();
        let r = [3u8; BLOCK_SIZE];
        let s = expand(&cipher, &r, 20);
        assert_eq!(s.len(), 20);
        assert_eq!(&s[..16], &r[..]);
    }

    #[test]
    fn larger_d_pulls_in_more_blocks() {
        let cipher = Cipher::new(&[0u8; 16]).unwrap();
        let r = [9u8; BLOCK_SIZE];
        let s = expand(&cipher, &r, 48);
        assert_eq!(s.len(), 48);
        // the two expansion blocks must differ (distinct counters)
        assert_ne!(&s[16..32], &s[32..48]);
    }
}
