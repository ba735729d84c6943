//! The keyed pseudo-random function FF1 mixes into each Feistel round.
//!
//! `mac` is AES-128-CBC-MAC with an implicit zero IV: the message is chained
//! through CBC encryption and only the final ciphertext block is kept. `ciph`
//! is the single-block special case used by [`crate::expand`] to produce the
//! counter-mode-style expansion blocks.

use crate::aes128::{Cipher, BLOCK_SIZE};

/// Computes AES-128-CBC-MAC(key, message). `message.len()` must be a
/// positive multiple of 16; the key schedule is cloned once and chained
/// across every block, so the cost is one AES encryption per block.
pub(crate) fn mac(cipher: &Cipher, message: &[u8]) -> [u8; BLOCK_SIZE] {
    debug_assert!(!message.is_empty() && message.len() % BLOCK_SIZE == 0);

    let mut c = cipher.clone();
    let mut out = [0u8; BLOCK_SIZE];
    for block in message.chunks_exact(BLOCK_SIZE) {
        c.encrypt_block(block, &mut out);
    }
    out
}

/// A single AES-128 encryption under the FF1 key, i.e. CBC-MAC of one block.
pub(crate) fn ciph(cipher: &Cipher, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    mac(cipher, block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_and_reused_schedule() {
        let cipher = Cipher::new(&[0u8; 16]).unwrap();
        let block = [0u8; BLOCK_SIZE];

        let r1 = ciph(&cipher, &block);
        let r2 = ciph(&cipher, &block);
        assert_eq!(r1, r2);
    }

    #[test]
    fn mac_of_multiple_blocks_chains() {
        let cipher = Cipher::new(&[0u8; 16]).unwrap();
        let one_block = [0u8; BLOCK_SIZE];
        let two_blocks = [0u8; BLOCK_SIZE * 2];

        assert_ne!(mac(&cipher, &one_block), mac(&cipher, &two_blocks));
    }
}
