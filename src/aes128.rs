//! A reusable AES-128 key schedule, chained as CBC with a zero IV.
//!
//! FF1 only ever needs AES-128 (the variable key sizes the standard allows
//! for other FFX modes are out of scope here). Cloning a [`Cipher`] gives an
//! independent CBC chain starting fresh at the zero IV without recomputing
//! the key schedule.

use crate::error::Error;

use aes::cipher::{BlockEncryptMut, KeyIvInit};

pub(crate) const BLOCK_SIZE: usize = 16;

#[derive(Clone)]
pub(crate) struct Cipher {
    enc: cbc::Encryptor<aes::Aes128>,
}

impl Cipher {
    pub(crate) fn new(key: &[u8]) -> Result<Self, Error> {
        if key.len() != 16 {
            return Err(Error::InvalidKeyLength { length: key.len() });
        }

        const IV: &[u8] = &[0u8; BLOCK_SIZE];

        Ok(Cipher {
            enc: cbc::Encryptor::<aes::Aes128>::new(key.into(), IV.into()),
        })
    }

    pub(crate) fn encrypt_block(&mut self, src: &[u8], dst: &mut [u8]) {
        self.enc.encrypt_block_b2b_mut(src.into(), dst.into())
    }
}
