//! Core TEA implementation for encryption and decryption of a single 64-bit block. Exports encrypt_block and decrypt_block.

mod decryption;
mod encryption;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use util::{DEFAULT_ROUNDS, DELTA};
