/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process blocks in parallel if input size gt 4 KiB

/// Reads an 8-byte chunk as a `(v0, v1)` pair of big-endian words.
#[inline(always)]
pub(crate) fn read_block(chunk: &[u8]) -> (u32, u32) {
    debug_assert_eq!(chunk.len(), BLOCK_SIZE);
    (
        u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
        u32::from_be_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]),
    )
}

/// Writes a `(v0, v1)` pair into an 8-byte chunk as big-endian words.
#[inline(always)]
pub(crate) fn write_block(chunk: &mut [u8], (v0, v1): (u32, u32)) {
    debug_assert_eq!(chunk.len(), BLOCK_SIZE);
    chunk[..4].copy_from_slice(&v0.to_be_bytes());
    chunk[4..].copy_from_slice(&v1.to_be_bytes());
}

/// Zero padding to the next 8-byte boundary. An empty message still produces one block.
pub(crate) fn zero_pad(plaintext: &[u8]) -> Vec<u8> {
    let blocks = plaintext.len().div_ceil(BLOCK_SIZE).max(1);
    let mut out = vec![0u8; blocks * BLOCK_SIZE];
    out[..plaintext.len()].copy_from_slice(plaintext);
    out
}

/// Removes every trailing zero byte, padding or not.
pub fn strip_trailing_zeros(input: &mut Vec<u8>) {
    let end = input.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    input.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_rounds_up_to_block() {
        assert_eq!(zero_pad(b""), vec![0u8; 8]);
        assert_eq!(zero_pad(b"abc"), b"abc\0\0\0\0\0".to_vec());
        assert_eq!(zero_pad(b"12345678"), b"12345678".to_vec());
        assert_eq!(zero_pad(b"123456789").len(), 16);
    }

    #[test]
    fn strip_removes_all_trailing_zeros() {
        let mut v = b"ab\0c\0\0\0".to_vec();
        strip_trailing_zeros(&mut v);
        assert_eq!(v, b"ab\0c".to_vec());

        let mut v = vec![0u8; 16];
        strip_trailing_zeros(&mut v);
        assert!(v.is_empty());

        let mut v = b"no zeros".to_vec();
        strip_trailing_zeros(&mut v);
        assert_eq!(v, b"no zeros".to_vec());
    }

    #[test]
    fn block_words_are_big_endian() {
        let bytes = [0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48];
        assert_eq!(read_block(&bytes), (0x41424344, 0x45464748));

        let mut out = [0u8; 8];
        write_block(&mut out, (0x497df3d0, 0x72612cb5));
        assert_eq!(out, [0x49, 0x7d, 0xf3, 0xd0, 0x72, 0x61, 0x2c, 0xb5]);
    }
}
