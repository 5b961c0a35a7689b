//! RSA key generation: composes two random primes into an (N, e, d) key pair.

use log::debug;
use num_traits::One;
use rand::rngs::OsRng;
use rand::Rng;

use super::bigint::{byte_length, gcd, mod_inverse, parse_decimal, RsaBigInt};
use super::prime::generate_prime_with;
use crate::config::{KeyGenConfig, PrimeSearchConfig, MAX_KEY_BITS, MIN_KEY_BITS};
use crate::error::{CryptoError, Result};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

/// RSA key pair. The prime factors and totient are discarded once `d` is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    n: RsaBigInt,
    e: RsaBigInt,
    d: RsaBigInt,
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a buffer block by block under this key
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        super::encrypt::encrypt_bytes(plaintext, &self.e, &self.n)
    }
}

impl RsaPrivateKey {
    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a buffer produced by the matching public key
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        super::decrypt::decrypt_bytes(ciphertext, &self.d, &self.n)
    }
}

impl KeyPair {
    /// Build a key pair from two distinct primes and a public exponent.
    ///
    /// Fails if `e` is not in (1, φ) or shares a factor with φ.
    pub fn from_primes(p: &RsaBigInt, q: &RsaBigInt, e: &RsaBigInt) -> Result<Self> {
        if p == q {
            return Err(CryptoError::InvalidKey("p and q must be distinct".to_string()));
        }

        let one = RsaBigInt::one();
        if p <= &one || q <= &one {
            return Err(CryptoError::InvalidKey("prime factors must exceed 1".to_string()));
        }

        let n = p * q;
        let phi_n = (p - 1u8) * (q - 1u8);

        if e <= &one || e >= &phi_n {
            return Err(CryptoError::InvalidExponent(format!(
                "e={} must satisfy 1 < e < φ(n)",
                e
            )));
        }

        if !gcd(e, &phi_n).is_one() {
            return Err(CryptoError::InvalidExponent(format!(
                "e={} is not coprime with φ(n)",
                e
            )));
        }

        let d = mod_inverse(e, &phi_n)?;

        Ok(Self { n, e: e.clone(), d })
    }

    /// Rebuild a key pair from the decimal text form of (N, e, d).
    pub fn from_decimal(n: &str, e: &str, d: &str) -> Result<Self> {
        let n = parse_decimal(n)?;
        let e = parse_decimal(e)?;
        let d = parse_decimal(d)?;

        let one = RsaBigInt::one();
        if n <= one {
            return Err(CryptoError::InvalidModulus);
        }
        if e <= one || e >= n {
            return Err(CryptoError::InvalidExponent(format!(
                "e={} must satisfy 1 < e < n",
                e
            )));
        }
        if d <= one || d >= n {
            return Err(CryptoError::InvalidExponent(format!(
                "d={} must satisfy 1 < d < n",
                d
            )));
        }

        Ok(Self { n, e, d })
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    pub fn private_key(&self) -> RsaPrivateKey {
        RsaPrivateKey {
            n: self.n.clone(),
            d: self.d.clone(),
        }
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Byte length of the modulus
    pub fn modulus_len(&self) -> usize {
        byte_length(&self.n)
    }
}

/// Generate an RSA key pair whose prime factors are `bit_size` bits each.
pub fn generate_keypair<R: Rng + ?Sized>(
    bit_size: u32,
    e: &RsaBigInt,
    rng: &mut R,
) -> Result<KeyPair> {
    let config = KeyGenConfig::default()
        .with_bit_size(bit_size)
        .with_public_exponent(e.clone());
    generate_keypair_with(&config, rng)
}

/// Generate an RSA key pair from a full configuration.
pub fn generate_keypair_with<R: Rng + ?Sized>(config: &KeyGenConfig, rng: &mut R) -> Result<KeyPair> {
    let bits = config.bit_size;
    if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) {
        return Err(CryptoError::InvalidBitSize {
            bits,
            min: MIN_KEY_BITS,
            max: MAX_KEY_BITS,
        });
    }

    debug!("generating RSA key pair with {}-bit primes", bits);

    let search: &PrimeSearchConfig = &config.prime_search;
    let p = generate_prime_with(bits, search, rng)?;
    let mut q = generate_prime_with(bits, search, rng)?;
    while q == p {
        q = generate_prime_with(bits, search, rng)?;
    }

    let keypair = KeyPair::from_primes(&p, &q, &config.public_exponent)?;
    debug!("generated {}-bit modulus", keypair.bit_length());

    Ok(keypair)
}

/// Generate RSA key pair with default settings (1024-bit primes, e=65537)
/// using the operating system's randomness source.
pub fn generate_default_keypair() -> Result<KeyPair> {
    generate_keypair_with(&KeyGenConfig::default(), &mut OsRng)
}
