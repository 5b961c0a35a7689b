//! Error types shared by the Magma and RSA engines.

use thiserror::Error;

/// Errors produced by the cipher engines.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Symmetric key is not 64 hexadecimal characters.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Modulus must be greater than one.
    #[error("modulus must be greater than 1")]
    InvalidModulus,

    /// An integer block is not strictly below the modulus.
    #[error("value is not smaller than the modulus")]
    ValueOutOfRange,

    /// Public exponent is outside (1, φ) or shares a factor with φ.
    #[error("invalid exponent: {0}")]
    InvalidExponent(String),

    /// Requested bit size is outside the accepted range.
    #[error("bit size {bits} outside [{min}, {max}]")]
    InvalidBitSize { bits: u32, min: u32, max: u32 },

    /// A buffer or integer that must be non-empty was empty.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// No modular inverse exists for the given operands.
    #[error("no modular inverse: {0}")]
    NoInverse(String),

    /// Prime search ran out of attempts.
    #[error("no {bits}-bit prime found after {attempts} attempts")]
    PrimeSearchExhausted { bits: u32, attempts: u32 },

    /// Decrypted bytes were requested as text but are not valid UTF-8.
    #[error("decrypted data is not UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A per-block RSA operation failed; `source` is the underlying cause.
    #[error("block {index} operation failed")]
    BlockOperation {
        index: usize,
        #[source]
        source: Box<CryptoError>,
    },
}

impl CryptoError {
    /// Whether the error stems from malformed caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidKey(_)
                | CryptoError::InvalidModulus
                | CryptoError::ValueOutOfRange
                | CryptoError::InvalidExponent(_)
                | CryptoError::InvalidBitSize { .. }
                | CryptoError::EmptyInput(_)
        )
    }

    pub(crate) fn block(index: usize, cause: CryptoError) -> Self {
        CryptoError::BlockOperation {
            index,
            source: Box::new(cause),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CryptoError>;
