//! Magma block cipher and textbook RSA engines.
//!
//! Both engines turn a byte buffer plus key material into a new byte buffer.
//! Reading files and collecting keys from a user are left to the caller.
//!
//! # Examples
//!
//! Symmetric round trip:
//!
//! ```
//! use magma_rsa::magma;
//!
//! let key = "FFEEDDCCBBAA99887766554433221100F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF";
//! let ciphertext = magma::process(&[1, 2, 3, 4], key, false).unwrap();
//! assert_eq!(ciphertext.len(), 8);
//! assert_eq!(magma::process(&ciphertext, key, true).unwrap(), vec![1, 2, 3, 4]);
//! ```
//!
//! Asymmetric round trip with a freshly generated key pair:
//!
//! ```
//! use magma_rsa::rsa::{generate_keypair, RsaBigInt};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let keypair = generate_keypair(128, &RsaBigInt::from(65537u32), &mut rng).unwrap();
//!
//! let ciphertext = keypair.public_key().encrypt(b"hello").unwrap();
//! assert_eq!(keypair.private_key().decrypt(&ciphertext).unwrap(), b"hello");
//! ```

pub mod config;
pub mod error;
pub mod magma;
pub mod rsa;

pub use error::{CryptoError, Result};
