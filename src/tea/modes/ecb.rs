use rayon::prelude::*;

use crate::tea::core::{decrypt_block, encrypt_block};
use crate::tea::error::*;
use crate::tea::modes::util::{BLOCK_SIZE, PARALLEL_THRESHOLD, read_block, write_block, zero_pad};

/// Core ECB encryption algorithm. Zero pads plaintext to a whole number of 8-byte blocks
/// and encrypts each block independently. Runs in parallel above [`PARALLEL_THRESHOLD`].
pub fn ecb_core_enc(plaintext: &[u8], key: &[u32; 4], rounds: u32) -> Vec<u8> {
    let mut buf = zero_pad(plaintext);
    if buf.len() > PARALLEL_THRESHOLD {
        ecb_enc_parallel(&mut buf, key, rounds);
    } else {
        ecb_enc_serial(&mut buf, key, rounds);
    }
    buf
}

/// Core ECB decryption algorithm. Decrypts each 8-byte block independently and returns a
/// buffer of exactly the ciphertext's length (no padding is removed).
pub fn ecb_core_dec(ciphertext: &[u8], key: &[u32; 4], rounds: u32) -> Result<Vec<u8>> {
    // ECB ciphertext should (and must) always be a multiple of 8 bytes.
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength {
            len: ciphertext.len(),
        });
    }

    let mut buf = ciphertext.to_vec();
    if buf.len() > PARALLEL_THRESHOLD {
        ecb_dec_parallel(&mut buf, key, rounds);
    } else {
        ecb_dec_serial(&mut buf, key, rounds);
    }
    Ok(buf)
}

// in-place block transforms. callers guarantee buf.len() % 8 == 0

fn ecb_enc_serial(buf: &mut [u8], key: &[u32; 4], rounds: u32) {
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        let (v0, v1) = read_block(chunk);
        write_block(chunk, encrypt_block(v0, v1, key, rounds));
    }
}

fn ecb_enc_parallel(buf: &mut [u8], key: &[u32; 4], rounds: u32) {
    buf.par_chunks_exact_mut(BLOCK_SIZE).for_each(|chunk| {
        let (v0, v1) = read_block(chunk);
        write_block(chunk, encrypt_block(v0, v1, key, rounds));
    });
}

fn ecb_dec_serial(buf: &mut [u8], key: &[u32; 4], rounds: u32) {
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        let (v0, v1) = read_block(chunk);
        write_block(chunk, decrypt_block(v0, v1, key, rounds));
    }
}

fn ecb_dec_parallel(buf: &mut [u8], key: &[u32; 4], rounds: u32) {
    buf.par_chunks_exact_mut(BLOCK_SIZE).for_each(|chunk| {
        let (v0, v1) = read_block(chunk);
        write_block(chunk, decrypt_block(v0, v1, key, rounds));
    });
}
