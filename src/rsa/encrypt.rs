//! RSA block encryption: textbook RSA applied independently to
//! fixed-size plaintext blocks.

use log::trace;
use num_traits::{One, Zero};

use super::bigint::{byte_length, from_bytes, mod_pow, to_bytes_padded, RsaBigInt};
use crate::error::{CryptoError, Result};

/// Plaintext and ciphertext block sizes for modulus `n`.
///
/// Plaintext blocks are one byte shorter than the modulus so every block
/// decodes to an integer below `n`; ciphertext blocks are the full modulus
/// length. Moduli below 256 leave no room for a plaintext byte and are
/// rejected.
pub fn block_sizes(n: &RsaBigInt) -> Result<(usize, usize)> {
    if n <= &RsaBigInt::one() {
        return Err(CryptoError::InvalidModulus);
    }
    let cipher_len = byte_length(n);
    if cipher_len < 2 {
        return Err(CryptoError::InvalidModulus);
    }
    Ok((cipher_len - 1, cipher_len))
}

/// Encrypt a single integer block: c = m^e mod n
pub fn encrypt_block(m: &RsaBigInt, e: &RsaBigInt, n: &RsaBigInt) -> Result<RsaBigInt> {
    if m >= n {
        return Err(CryptoError::ValueOutOfRange);
    }
    mod_pow(m, e, n)
}

/// Encrypt bytes with the public exponent `e` and modulus `n`.
///
/// Each ciphertext block is written at the full modulus width so the
/// decoder can split the stream with a fixed stride. Empty input yields
/// empty output.
pub fn encrypt_bytes(plaintext: &[u8], e: &RsaBigInt, n: &RsaBigInt) -> Result<Vec<u8>> {
    if plaintext.is_empty() {
        return Ok(Vec::new());
    }
    if e.is_zero() {
        return Err(CryptoError::InvalidExponent("public exponent is zero".to_string()));
    }

    let (plain_len, cipher_len) = block_sizes(n)?;
    let blocks = plaintext.chunks(plain_len);
    trace!("encrypting {} block(s) of up to {} bytes", blocks.len(), plain_len);

    let mut ciphertext = Vec::with_capacity(blocks.len() * cipher_len);
    for (index, chunk) in blocks.enumerate() {
        let m = from_bytes(chunk);
        let c = encrypt_block(&m, e, n).map_err(|err| CryptoError::block(index, err))?;
        ciphertext.extend_from_slice(&to_bytes_padded(&c, cipher_len));
    }

    Ok(ciphertext)
}

/// Encrypt a string using RSA public key
pub fn encrypt_string(plaintext: &str, e: &RsaBigInt, n: &RsaBigInt) -> Result<Vec<u8>> {
    encrypt_bytes(plaintext.as_bytes(), e, n)
}
