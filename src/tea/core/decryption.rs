use super::util::{DELTA, high_key, low_key, mix};

/// Core TEA decryption function. Undoes [`encrypt_block`](super::encrypt_block) for the same
/// key and round count.
#[inline(always)]
pub fn decrypt_block(v0: u32, v1: u32, key: &[u32; 4], rounds: u32) -> (u32, u32) {
    let (mut v0, mut v1) = (v0, v1);
    let mut sum = DELTA.wrapping_mul(rounds);

    // half-rounds run in reverse: v1 first, against the current v0
    for _ in 0..rounds {
        v1 = v1.wrapping_sub(mix(v0, sum, high_key(key, sum)));
        sum = sum.wrapping_sub(DELTA);
        v0 = v0.wrapping_sub(mix(v1, sum, low_key(key, sum)));
    }

    (v0, v1)
}
