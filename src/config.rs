//! Tunable parameters for prime search and RSA key generation.

use num_bigint::BigUint;

/// Smallest prime size accepted by the prime generator.
pub const MIN_PRIME_BITS: u32 = 8;
/// Largest prime size accepted by the prime generator.
pub const MAX_PRIME_BITS: u32 = 4096;

/// Accepted range for `KeyGenConfig::bit_size` (size of each prime factor).
pub const MIN_KEY_BITS: u32 = 128;
pub const MAX_KEY_BITS: u32 = 4096;

pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Primes used to cheaply reject candidates before Miller-Rabin.
pub const SMALL_PRIMES: [u32; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Configuration for the random prime search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeSearchConfig {
    /// Candidates drawn before giving up.
    pub max_attempts: u32,
    /// Miller-Rabin rounds per candidate.
    pub certainty: u32,
}

impl Default for PrimeSearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1000,
            certainty: 20,
        }
    }
}

impl PrimeSearchConfig {
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_certainty(mut self, rounds: u32) -> Self {
        self.certainty = rounds;
        self
    }
}

/// Configuration for RSA key pair generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Bit size of each prime factor.
    pub bit_size: u32,
    pub public_exponent: BigUint,
    pub prime_search: PrimeSearchConfig,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            bit_size: 1024,
            public_exponent: BigUint::from(DEFAULT_PUBLIC_EXPONENT),
            prime_search: PrimeSearchConfig::default(),
        }
    }
}

impl KeyGenConfig {
    pub fn with_bit_size(mut self, bits: u32) -> Self {
        self.bit_size = bits;
        self
    }

    pub fn with_public_exponent(mut self, e: BigUint) -> Self {
        self.public_exponent = e;
        self
    }

    pub fn with_prime_search(mut self, search: PrimeSearchConfig) -> Self {
        self.prime_search = search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KeyGenConfig::default();
        assert_eq!(config.bit_size, 1024);
        assert_eq!(config.public_exponent, BigUint::from(65537u32));
        assert_eq!(config.prime_search.max_attempts, 1000);
        assert_eq!(config.prime_search.certainty, 20);
    }

    #[test]
    fn test_builders() {
        let config = KeyGenConfig::default()
            .with_bit_size(256)
            .with_public_exponent(BigUint::from(17u32))
            .with_prime_search(PrimeSearchConfig::default().with_certainty(5).with_max_attempts(10));

        assert_eq!(config.bit_size, 256);
        assert_eq!(config.public_exponent, BigUint::from(17u32));
        assert_eq!(
            config.prime_search,
            PrimeSearchConfig {
                max_attempts: 10,
                certainty: 5
            }
        );
    }
}
