/// Key schedule constant, derived from the golden ratio.
pub const DELTA: u32 = 0x9E37_79B9;

/// Number of rounds used unless a caller asks for something else.
pub const DEFAULT_ROUNDS: u32 = 32;

// used for both encryption and decryption.
// (v << 4 ^ v >> 5) + v, xor'd with sum + key word. all arithmetic wraps at 32 bits
#[inline(always)]
pub(crate) fn mix(v: u32, sum: u32, key_word: u32) -> u32 {
    (((v << 4) ^ (v >> 5)).wrapping_add(v)) ^ sum.wrapping_add(key_word)
}

/// Key word mixed into the v0 half-round.
#[inline(always)]
pub(crate) fn low_key(key: &[u32; 4], sum: u32) -> u32 {
    key[(sum & 3) as usize]
}

/// Key word mixed into the v1 half-round.
#[inline(always)]
pub(crate) fn high_key(key: &[u32; 4], sum: u32) -> u32 {
    key[((sum >> 11) & 3) as usize]
}
