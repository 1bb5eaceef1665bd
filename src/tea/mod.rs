mod cipher;
mod core;
mod error;
mod interface;
mod key;
mod modes;

pub use cipher::Cipher;
pub use self::core::{DEFAULT_ROUNDS, DELTA, decrypt_block, encrypt_block};
pub use error::{Error, Result};
pub use interface::{decode, decode_raw, encode};
pub use key::{KEY_SIZE, Key};
pub use modes::BLOCK_SIZE;
