use super::util::{DELTA, high_key, low_key, mix};

/// Core TEA encryption function. Encrypts the block `(v0, v1)` with `rounds` rounds.
///
/// ```
/// use tinytea::{encrypt_block, DEFAULT_ROUNDS};
///
/// let key = [0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f];
/// let ct = encrypt_block(0x41424344, 0x45464748, &key, DEFAULT_ROUNDS);
/// assert_eq!(ct, (0x497df3d0, 0x72612cb5));
/// ```
#[inline(always)]
pub fn encrypt_block(v0: u32, v1: u32, key: &[u32; 4], rounds: u32) -> (u32, u32) {
    let (mut v0, mut v1) = (v0, v1);
    let mut sum: u32 = 0;

    for _ in 0..rounds {
        v0 = v0.wrapping_add(mix(v1, sum, low_key(key, sum)));
        sum = sum.wrapping_add(DELTA);
        v1 = v1.wrapping_add(mix(v0, sum, high_key(key, sum)));
    }

    (v0, v1)
}
