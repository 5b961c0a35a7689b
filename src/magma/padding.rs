//! Trailing-byte padding for the 8-byte Magma block.
//!
//! Unlike PKCS#7, input that is already block-aligned gets no padding block,
//! so `unpad` cannot distinguish padding from data ending in 0x01..=0x08.

use super::BLOCK_SIZE;

/// Number of padding bytes `pad` appends to a buffer of `len` bytes.
pub fn pad_len(len: usize) -> usize {
    (BLOCK_SIZE - len % BLOCK_SIZE) % BLOCK_SIZE
}

/// Appends `L` copies of the byte `L`, where `L = pad_len(data.len())`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let len = pad_len(data.len());
    let mut padded = Vec::with_capacity(data.len() + len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + len, len as u8);
    padded
}

/// Drops `L` trailing bytes when the last byte `L` is in `1..=8`.
pub fn unpad(data: &mut Vec<u8>) {
    if let Some(&last) = data.last() {
        let len = last as usize;
        if (1..=BLOCK_SIZE).contains(&len) && len <= data.len() {
            data.truncate(data.len() - len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_len() {
        assert_eq!(pad_len(0), 0);
        assert_eq!(pad_len(1), 7);
        assert_eq!(pad_len(7), 1);
        assert_eq!(pad_len(8), 0);
        assert_eq!(pad_len(9), 7);
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(&[1, 2, 3, 4]), vec![1, 2, 3, 4, 4, 4, 4, 4]);
        assert_eq!(pad(&[0xAA; 8]), vec![0xAA; 8]);
        assert!(pad(&[]).is_empty());
    }

    #[test]
    fn test_unpad() {
        let mut data = vec![1, 2, 3, 4, 4, 4, 4, 4];
        unpad(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4]);

        let mut data = vec![0xAA; 8];
        unpad(&mut data);
        assert_eq!(data, vec![0xAA; 8]);

        let mut data = vec![9; 8];
        unpad(&mut data);
        assert_eq!(data, vec![9; 8]);
    }

    #[test]
    fn test_unpad_ambiguous_tail() {
        // aligned data ending in 0x02 loses two bytes
        let mut data = vec![0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x02];
        unpad(&mut data);
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn test_unpad_short_buffer() {
        let mut data = vec![8, 8];
        unpad(&mut data);
        assert_eq!(data, vec![8, 8]);

        let mut empty: Vec<u8> = Vec::new();
        unpad(&mut empty);
        assert!(empty.is_empty());
    }
}
