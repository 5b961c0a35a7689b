//! Big-endian byte codec and modular arithmetic on top of num-bigint.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{CryptoError, Result};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (unsigned, big-endian).
/// An empty slice decodes to zero.
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to minimal big-endian bytes.
/// Zero encodes as a single `0x00` byte.
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Big-endian bytes left-padded with zeros to `width`.
/// Values wider than `width` are returned unpadded.
pub fn to_bytes_padded(n: &RsaBigInt, width: usize) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    if bytes.len() >= width {
        return bytes;
    }
    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

/// Number of bytes in the minimal encoding of `n` (zero for zero).
pub fn byte_length(n: &RsaBigInt) -> usize {
    ((n.bits() + 7) / 8) as usize
}

/// Parse a decimal string, ignoring surrounding whitespace.
pub fn parse_decimal(text: &str) -> Result<RsaBigInt> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CryptoError::EmptyInput("decimal integer"));
    }
    RsaBigInt::parse_bytes(trimmed.as_bytes(), 10).ok_or_else(|| {
        CryptoError::InvalidKey(format!("'{}' is not a decimal integer", trimmed))
    })
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> Result<RsaBigInt> {
    if modulus <= &RsaBigInt::one() {
        return Err(CryptoError::InvalidModulus);
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    Ok(result)
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = std::mem::replace(&mut r, rem);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Compute modular inverse: a^(-1) mod m, normalized into [0, m)
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Result<RsaBigInt> {
    if m <= &RsaBigInt::one() {
        return Err(CryptoError::InvalidModulus);
    }
    if a.is_zero() {
        return Err(CryptoError::NoInverse("zero has no inverse".to_string()));
    }

    let a_int = BigInt::from_biguint(Sign::Plus, a.clone());
    let m_int = BigInt::from_biguint(Sign::Plus, m.clone());
    let (gcd, x, _) = extended_gcd(&a_int, &m_int);

    if !gcd.is_one() {
        return Err(CryptoError::NoInverse(format!(
            "gcd({}, {}) = {}",
            a, m, gcd
        )));
    }

    let mut result = x % &m_int;
    if result.is_negative() {
        result += &m_int;
    }

    // result is in [0, m) here, so the magnitude is the value
    Ok(result.magnitude().clone())
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}
