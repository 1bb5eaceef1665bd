//! The Tiny Encryption Algorithm: a 64-bit block cipher with a 128-bit key, plus a zero-padded
//! ECB mode for byte messages of any length.
//!
//! Words are read from and written to bytes in big-endian order, for both keys and blocks.
//! Zero padding is stripped greedily on decode, so messages must not end in null bytes.
//! There is no authentication; do not use this for anything that matters.

mod tea;

pub use tea::{
    BLOCK_SIZE, Cipher, DEFAULT_ROUNDS, DELTA, Error, KEY_SIZE, Key, Result, decode, decode_raw,
    decrypt_block, encode, encrypt_block,
};
