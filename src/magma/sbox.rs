//! Magma substitution layer.
//!
//! The eight 4-bit S-boxes of GOST R 34.12-2015. The tables are stored in
//! reverse order (`SBOX[0]` is the standard's π7), so nibble `i` of a word,
//! counted from the least significant end, goes through `SBOX[7 - i]`.

/// S-box tables, `SBOX[7 - i]` substitutes nibble `i`.
pub const SBOX: [[u8; 16]; 8] = [
    [1, 7, 14, 13, 0, 5, 8, 3, 4, 15, 10, 6, 9, 12, 11, 2],
    [8, 14, 2, 5, 6, 9, 1, 12, 15, 4, 11, 0, 13, 10, 3, 7],
    [5, 13, 15, 6, 9, 2, 12, 10, 11, 7, 8, 1, 4, 3, 14, 0],
    [7, 15, 5, 10, 8, 1, 6, 13, 0, 9, 3, 14, 11, 4, 2, 12],
    [12, 8, 2, 1, 13, 4, 15, 6, 7, 0, 10, 5, 3, 14, 9, 11],
    [11, 3, 5, 8, 2, 15, 10, 13, 14, 1, 7, 4, 12, 9, 6, 0],
    [6, 8, 2, 3, 9, 10, 5, 12, 1, 14, 4, 7, 11, 13, 0, 15],
    [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
];

/// Replaces each nibble of `word` through its S-box, keeping nibble positions.
#[inline]
pub fn substitute(word: u32) -> u32 {
    let mut out = 0u32;
    for i in 0..8 {
        let shift = 4 * i;
        let nibble = ((word >> shift) & 0xF) as usize;
        out |= (SBOX[7 - i][nibble] as u32) << shift;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_permutations() {
        for table in SBOX.iter() {
            let mut seen = [false; 16];
            for &v in table.iter() {
                assert!(v < 16);
                assert!(!seen[v as usize], "duplicate value {}", v);
                seen[v as usize] = true;
            }
        }
    }

    #[test]
    fn test_t_transform_vectors() {
        // successive applications from GOST R 34.12-2015, A.2.1
        assert_eq!(substitute(0xfdb97531), 0x2a196f34);
        assert_eq!(substitute(0x2a196f34), 0xebd9f03a);
        assert_eq!(substitute(0xebd9f03a), 0xb039bb3d);
        assert_eq!(substitute(0xb039bb3d), 0x68695433);
    }

    #[test]
    fn test_low_nibble_uses_last_table() {
        // only nibble 0 set to 0x1; others are 0
        let out = substitute(0x0000_0001);
        assert_eq!(out & 0xF, SBOX[7][1] as u32);
        assert_eq!((out >> 28) & 0xF, SBOX[0][0] as u32);
    }
}
