//! Magma, the 64-bit block cipher of GOST R 34.12-2015.
//!
//! Blocks are processed independently (ECB-style) under a 256-bit key
//! given as 64 hexadecimal characters.
//!
//! ```text
//! SymmetricKey  (8 × u32, from hex)
//!     ↓ encryption_schedule / decryption_schedule
//! transform_block  (32 Feistel rounds, g = rotl11(S(x + k)))
//!     ↓ per 8-byte block
//! Magma::encrypt / Magma::decrypt  (trailing-byte padding)
//! ```

pub mod cipher;
pub mod key;
pub mod padding;
pub mod sbox;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

pub use cipher::{process, round_function, transform_block, Magma};
pub use key::{RoundKeySchedule, SymmetricKey};
pub use sbox::substitute;
