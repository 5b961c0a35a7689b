//! Miller-Rabin primality testing and random prime generation.

use log::{debug, trace};
use num_bigint::RandBigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use super::bigint::{mod_pow, RsaBigInt};
use crate::config::{PrimeSearchConfig, MAX_PRIME_BITS, MIN_PRIME_BITS, SMALL_PRIMES};
use crate::error::{CryptoError, Result};

/// Miller-Rabin primality test with `certainty` random witnesses.
///
/// A composite passes with probability at most 4^(-certainty).
pub fn is_probable_prime<R: Rng + ?Sized>(n: &RsaBigInt, certainty: u32, rng: &mut R) -> bool {
    let two = RsaBigInt::from(2u8);
    let three = RsaBigInt::from(3u8);

    if n == &two || n == &three {
        return true;
    }
    if n < &two || n.is_even() {
        return false;
    }

    let n_minus_one = n - 1u8;

    // Write n-1 as d * 2^s with d odd
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    for _ in 0..certainty {
        // Witness a in [2, n-2]; the upper bound of the range is exclusive
        let a = rng.gen_biguint_range(&two, &n_minus_one);

        let mut x = match mod_pow(&a, &d, n) {
            Ok(x) => x,
            Err(_) => return false,
        };

        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut reached_minus_one = false;
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                reached_minus_one = true;
                break;
            }
            if x.is_one() {
                // Non-trivial square root of 1
                return false;
            }
        }

        if !reached_minus_one {
            return false;
        }
    }

    true
}

/// Whether `n` is divisible by one of the small primes (and is not that prime).
fn has_small_factor(n: &RsaBigInt) -> bool {
    SMALL_PRIMES.iter().any(|&p| {
        let p = RsaBigInt::from(p);
        n != &p && (n % &p).is_zero()
    })
}

/// Draw a random odd candidate of exactly `bits` bits.
fn random_candidate<R: Rng + ?Sized>(bits: u32, rng: &mut R) -> RsaBigInt {
    let len = ((bits + 7) / 8) as usize;
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);

    // Clear bits above the requested length, then pin the top and bottom bits
    let excess = len as u32 * 8 - bits;
    bytes[0] &= 0xFFu8 >> excess;
    bytes[0] |= 0x80u8 >> excess;
    bytes[len - 1] |= 1;

    RsaBigInt::from_bytes_be(&bytes)
}

/// Generate a random prime of exactly `bits` bits with the default search settings.
pub fn generate_prime<R: Rng + ?Sized>(bits: u32, rng: &mut R) -> Result<RsaBigInt> {
    generate_prime_with(bits, &PrimeSearchConfig::default(), rng)
}

/// Generate a random prime of exactly `bits` bits.
///
/// Each candidate is screened by trial division against the small primes,
/// then by Miller-Rabin. Fails once `config.max_attempts` candidates have
/// been rejected.
pub fn generate_prime_with<R: Rng + ?Sized>(
    bits: u32,
    config: &PrimeSearchConfig,
    rng: &mut R,
) -> Result<RsaBigInt> {
    if !(MIN_PRIME_BITS..=MAX_PRIME_BITS).contains(&bits) {
        return Err(CryptoError::InvalidBitSize {
            bits,
            min: MIN_PRIME_BITS,
            max: MAX_PRIME_BITS,
        });
    }

    for attempt in 1..=config.max_attempts {
        let candidate = random_candidate(bits, rng);

        if has_small_factor(&candidate) {
            trace!("candidate {} rejected by trial division", attempt);
            continue;
        }

        if is_probable_prime(&candidate, config.certainty, rng) {
            debug!("found {}-bit prime after {} attempts", bits, attempt);
            return Ok(candidate);
        }
        trace!("candidate {} rejected by Miller-Rabin", attempt);
    }

    Err(CryptoError::PrimeSearchExhausted {
        bits,
        attempts: config.max_attempts,
    })
}
