//! RSA block decryption: splits ciphertext at the modulus width and
//! inverts each block.

use log::trace;
use num_traits::Zero;

use super::bigint::{from_bytes, mod_pow, to_bytes, to_bytes_padded, RsaBigInt};
use super::encrypt::block_sizes;
use crate::error::{CryptoError, Result};

/// Decrypt a single integer block: m = c^d mod n
pub fn decrypt_block(c: &RsaBigInt, d: &RsaBigInt, n: &RsaBigInt) -> Result<RsaBigInt> {
    if c >= n {
        return Err(CryptoError::ValueOutOfRange);
    }
    mod_pow(c, d, n)
}

/// Decrypt ciphertext bytes with the private exponent `d` and modulus `n`.
///
/// Every block except the last is restored to the full plaintext block
/// width. The last block is emitted in its minimal encoding, so leading zero
/// bytes of the final plaintext block are not recovered.
pub fn decrypt_bytes(ciphertext: &[u8], d: &RsaBigInt, n: &RsaBigInt) -> Result<Vec<u8>> {
    if ciphertext.is_empty() {
        return Ok(Vec::new());
    }
    if d.is_zero() {
        return Err(CryptoError::InvalidExponent("private exponent is zero".to_string()));
    }

    let (plain_len, cipher_len) = block_sizes(n)?;
    let blocks = ciphertext.chunks(cipher_len);
    let last = blocks.len() - 1;
    trace!("decrypting {} block(s) of {} bytes", blocks.len(), cipher_len);

    let mut plaintext = Vec::with_capacity(blocks.len() * plain_len);
    for (index, chunk) in blocks.enumerate() {
        let c = from_bytes(chunk);
        let m = decrypt_block(&c, d, n).map_err(|err| CryptoError::block(index, err))?;
        if index == last {
            plaintext.extend_from_slice(&to_bytes(&m));
        } else {
            plaintext.extend_from_slice(&to_bytes_padded(&m, plain_len));
        }
    }

    Ok(plaintext)
}

/// Decrypt ciphertext to a string
pub fn decrypt_to_string(ciphertext: &[u8], d: &RsaBigInt, n: &RsaBigInt) -> Result<String> {
    let plaintext = decrypt_bytes(ciphertext, d, n)?;
    Ok(String::from_utf8(plaintext)?)
}
