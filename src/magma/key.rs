//! 256-bit Magma key and its round-key schedules.

use std::str::FromStr;

use crate::error::{CryptoError, Result};

/// Length of a key in hexadecimal characters.
pub const KEY_HEX_LEN: usize = 64;

/// Number of Feistel rounds, one round key each.
pub const ROUNDS: usize = 32;

/// Ordered round keys for one direction.
pub type RoundKeySchedule = [u32; ROUNDS];

/// A Magma key as eight big-endian 32-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricKey {
    words: [u32; 8],
}

impl SymmetricKey {
    pub fn from_words(words: [u32; 8]) -> Self {
        Self { words }
    }

    /// Parses a 64-character hexadecimal key (case-insensitive).
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidKey`] if the string is not exactly 64
    /// characters long or contains a non-hexadecimal character.
    pub fn from_hex(text: &str) -> Result<Self> {
        if text.len() != KEY_HEX_LEN {
            return Err(CryptoError::InvalidKey(format!(
                "expected {} hex characters, got {}",
                KEY_HEX_LEN,
                text.len()
            )));
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(text, &mut bytes)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;

        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Ok(Self { words })
    }

    pub fn words(&self) -> &[u32; 8] {
        &self.words
    }

    /// Key words 0..7 three times, then 7..0.
    pub fn encryption_schedule(&self) -> RoundKeySchedule {
        let mut schedule = [0u32; ROUNDS];
        for (round, slot) in schedule.iter_mut().enumerate() {
            *slot = if round < 24 {
                self.words[round % 8]
            } else {
                self.words[31 - round]
            };
        }
        schedule
    }

    /// The encryption schedule reversed.
    pub fn decryption_schedule(&self) -> RoundKeySchedule {
        let mut schedule = self.encryption_schedule();
        schedule.reverse();
        schedule
    }
}

impl FromStr for SymmetricKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
