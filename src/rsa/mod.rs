//! Textbook RSA over arbitrary-precision integers.
//!
//! ```text
//! is_probable_prime  (Miller-Rabin, injected RNG)
//!     ↓
//! generate_prime     (trial division + Miller-Rabin, bounded retries)
//!     ↓
//! KeyPair            (N = p·q, d = e⁻¹ mod φ)
//!     ↓
//! encrypt_bytes / decrypt_bytes  (fixed-stride blocks, m^e mod N)
//! ```

pub mod bigint;
pub mod prime;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;

pub use bigint::{mod_inverse, mod_pow, RsaBigInt};
pub use prime::{generate_prime, generate_prime_with, is_probable_prime};
pub use keygen::{
    generate_default_keypair, generate_keypair, generate_keypair_with, KeyPair, RsaPrivateKey,
    RsaPublicKey,
};
pub use encrypt::{block_sizes, encrypt_bytes, encrypt_string};
pub use decrypt::{decrypt_bytes, decrypt_to_string};
