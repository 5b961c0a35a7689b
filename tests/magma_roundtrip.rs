//! Round-trip and vector tests for the public Magma API.

use magma_rsa::magma::{self, Magma, SymmetricKey, BLOCK_SIZE};
use magma_rsa::CryptoError;
use proptest::prelude::*;

const KEY: &str = "FFEEDDCCBBAA99887766554433221100F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF";

/// Aligned buffers ending in 0x01..=0x08 are indistinguishable from padding.
fn survives_unpadding(data: &[u8]) -> bool {
    data.len() % BLOCK_SIZE != 0 || !matches!(data.last(), Some(1..=8))
}

#[test]
fn roundtrip_reference_lengths() -> anyhow::Result<()> {
    for len in [0usize, 1, 7, 8, 9, 64] {
        // 0xA0.. keeps aligned buffers from ending in a padding-like byte
        let data: Vec<u8> = (0..len).map(|i| 0xA0u8.wrapping_add(i as u8)).collect();
        let ciphertext = magma::process(&data, KEY, false)?;
        assert_eq!(ciphertext.len() % BLOCK_SIZE, 0, "len {}", len);
        assert_eq!(magma::process(&ciphertext, KEY, true)?, data, "len {}", len);
    }
    Ok(())
}

#[test]
fn scenario_four_bytes() -> anyhow::Result<()> {
    let ciphertext = magma::process(&[0x01, 0x02, 0x03, 0x04], KEY, false)?;
    assert_eq!(magma::process(&ciphertext, KEY, true)?, vec![0x01, 0x02, 0x03, 0x04]);
    Ok(())
}

#[test]
fn rfc_8891_block() -> anyhow::Result<()> {
    let input = 0xfedcba9876543210u64.to_be_bytes();
    let ciphertext = magma::process(&input, &KEY.to_lowercase(), false)?;
    assert_eq!(ciphertext, 0x4ee901e5c2d8ca3du64.to_be_bytes());
    Ok(())
}

#[test]
fn aligned_data_ending_in_padding_byte_is_truncated() -> anyhow::Result<()> {
    let data = [0xEE, 0xEE, 0xEE, 0xEE, 0xEE, 0xEE, 0xEE, 0x03];
    let ciphertext = magma::process(&data, KEY, false)?;
    assert_eq!(magma::process(&ciphertext, KEY, true)?, data[..5].to_vec());
    Ok(())
}

#[test]
fn malformed_keys_are_rejected() {
    let non_hex = format!("{}Z", &KEY[1..]);
    for key in ["", "FFEE", &KEY[1..], non_hex.as_str()] {
        let err = magma::process(b"data", key, false).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidKey(_)), "key {:?}", key);
        assert!(err.is_validation());
    }
}

proptest! {
    #[test]
    fn roundtrip_any_buffer(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        key in proptest::array::uniform32(any::<u8>()),
    ) {
        prop_assume!(survives_unpadding(&data));
        let key = hex::encode(key);
        let ciphertext = magma::process(&data, &key, false).unwrap();
        prop_assert_eq!(ciphertext.len() % BLOCK_SIZE, 0);
        prop_assert_eq!(magma::process(&ciphertext, &key, true).unwrap(), data);
    }

    #[test]
    fn blocks_are_independent(block in any::<u64>(), copies in 1usize..6) {
        let magma = Magma::new(&SymmetricKey::from_hex(KEY).unwrap());
        let data: Vec<u8> = std::iter::repeat(block.to_be_bytes()).take(copies).flatten().collect();
        let ciphertext = magma.encrypt(&data);
        let expected = magma.encrypt_block(block).to_be_bytes();
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            prop_assert_eq!(chunk, &expected[..]);
        }
    }

    #[test]
    fn block_transform_inverts(block in any::<u64>(), words in proptest::array::uniform8(any::<u32>())) {
        let magma = Magma::new(&SymmetricKey::from_words(words));
        prop_assert_eq!(magma.decrypt_block(magma.encrypt_block(block)), block);
    }
}
