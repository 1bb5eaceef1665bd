//! Free-function entry points over a key, for callers that do not keep a [Cipher] around.

use crate::tea::cipher::Cipher;
use crate::tea::error::Result;
use crate::tea::key::Key;

/// Zero pads and encrypts `message` block by block with 32 rounds. See [Cipher::encode].
pub fn encode(message: &[u8], key: &Key) -> Vec<u8> {
    Cipher::new(key).encode(message)
}

/// Decrypts `ciphertext` and strips trailing zero bytes. See [Cipher::decode].
///
/// ```
/// # fn main() -> tinytea::Result<()> {
/// use tinytea::{decode, encode, Key};
///
/// let key = Key::new([0xdeadbeef, 0xfeedface, 0x01234567, 0x89abcdef]);
/// let ct = encode(b"plain text", &key);
/// assert_eq!(decode(&ct, &key)?, b"plain text");
/// # Ok(())
/// # }
/// ```
pub fn decode(ciphertext: &[u8], key: &Key) -> Result<Vec<u8>> {
    Cipher::new(key).decode(ciphertext)
}

/// Decrypts `ciphertext` without stripping anything. See [Cipher::decode_raw].
pub fn decode_raw(ciphertext: &[u8], key: &Key) -> Result<Vec<u8>> {
    Cipher::new(key).decode_raw(ciphertext)
}
