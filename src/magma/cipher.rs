//! Magma Feistel network and ECB-style buffer processing.

use log::trace;

use super::key::{RoundKeySchedule, SymmetricKey};
use super::padding::{pad, unpad};
use super::sbox::substitute;
use super::BLOCK_SIZE;
use crate::error::Result;

/// Round function: add the round key mod 2^32, substitute, rotate left by 11.
#[inline]
pub fn round_function(half: u32, round_key: u32) -> u32 {
    substitute(half.wrapping_add(round_key)).rotate_left(11)
}

/// Runs the 32 Feistel rounds of `schedule` over one 64-bit block.
///
/// The high half is the left half. The halves are swapped after every round
/// and the output is `right || left`, which undoes the swap of the last round.
pub fn transform_block(block: u64, schedule: &RoundKeySchedule) -> u64 {
    let mut left = (block >> 32) as u32;
    let mut right = block as u32;

    for &round_key in schedule.iter() {
        let next = left ^ round_function(right, round_key);
        left = right;
        right = next;
    }

    ((right as u64) << 32) | left as u64
}

/// A keyed Magma engine with both round-key schedules precomputed.
///
/// # Examples
///
/// ```
/// use magma_rsa::magma::Magma;
///
/// let key = "ffeeddccbbaa99887766554433221100f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";
/// let magma = Magma::from_hex(key).unwrap();
///
/// assert_eq!(magma.encrypt_block(0xfedcba9876543210), 0x4ee901e5c2d8ca3d);
/// assert_eq!(magma.decrypt_block(0x4ee901e5c2d8ca3d), 0xfedcba9876543210);
/// ```
#[derive(Debug, Clone)]
pub struct Magma {
    encrypt_keys: RoundKeySchedule,
    decrypt_keys: RoundKeySchedule,
}

impl Magma {
    pub fn new(key: &SymmetricKey) -> Self {
        Self {
            encrypt_keys: key.encryption_schedule(),
            decrypt_keys: key.decryption_schedule(),
        }
    }

    /// Builds an engine from a 64-character hexadecimal key.
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidKey`](crate::error::CryptoError::InvalidKey)
    /// for a malformed key.
    pub fn from_hex(key: &str) -> Result<Self> {
        Ok(Self::new(&SymmetricKey::from_hex(key)?))
    }

    pub fn encrypt_block(&self, block: u64) -> u64 {
        transform_block(block, &self.encrypt_keys)
    }

    pub fn decrypt_block(&self, block: u64) -> u64 {
        transform_block(block, &self.decrypt_keys)
    }

    /// Pads `data` and encrypts every 8-byte block independently.
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        self.apply(data, &self.encrypt_keys)
    }

    /// Decrypts every 8-byte block independently and strips trailing padding.
    pub fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        let mut out = self.apply(data, &self.decrypt_keys);
        unpad(&mut out);
        out
    }

    fn apply(&self, data: &[u8], schedule: &RoundKeySchedule) -> Vec<u8> {
        let padded = pad(data);
        trace!("processing {} Magma block(s)", padded.len() / BLOCK_SIZE);

        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let result = transform_block(u64::from_be_bytes(block), schedule);
            out.extend_from_slice(&result.to_be_bytes());
        }
        out
    }
}

/// Encrypts (`decrypt == false`) or decrypts `data` under a hexadecimal key.
///
/// Empty input produces empty output in both directions.
///
/// # Errors
/// Returns [`CryptoError::InvalidKey`](crate::error::CryptoError::InvalidKey)
/// if `key` is not 64 hexadecimal characters.
pub fn process(data: &[u8], key: &str, decrypt: bool) -> Result<Vec<u8>> {
    let magma = Magma::from_hex(key)?;
    Ok(if decrypt {
        magma.decrypt(data)
    } else {
        magma.encrypt(data)
    })
}
