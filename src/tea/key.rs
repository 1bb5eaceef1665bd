//! Defines the [`Key`] struct, which holds a valid 128-bit TEA key as four 32-bit words.
//! Keys can be randomly generated or constructed from 16 raw bytes or a slice of words.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::tea::error::{Error, Result};

/// Key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of 32-bit words in a key.
const KEY_WORDS: usize = 4;

/// Contains a valid TEA key. Can be instantiated with a random key, or built from a slice
/// of exactly 16 bytes or exactly 4 words.
///
/// Bytes are read as big-endian words, the same byte order used for message blocks, so
/// `Key::try_from_slice(&key.to_bytes())` always returns the original key.
///
/// ## Examples
/// ```
/// # fn main() -> tinytea::Result<()> {
/// use tinytea::Key;
///
/// // Instantiate a random key:
/// let rk = Key::rand_key()?;
/// assert_eq!(Key::try_from_slice(&rk.to_bytes())?, rk);
///
/// // Instantiate a key from a slice:
/// let key_bytes: [u8; 16] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
///                            0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f];
/// let my_key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(my_key.as_words(), &[0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]);
///
/// // Anything other than 16 bytes returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..15]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
    words: [u32; 4],
}

impl Key {
    /// Builds a key directly from four words.
    pub const fn new(words: [u32; 4]) -> Self {
        Self { words }
    }

    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key() -> Result<Self> {
        let mut k = [0u8; KEY_SIZE];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self::from_bytes(&k))
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            len: bytes.len(),
            unit: "bytes",
            expected: KEY_SIZE,
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Attempts to build a key from a slice of words. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 4 words long.
    pub fn try_from_words(words: &[u32]) -> Result<Self> {
        let words: [u32; KEY_WORDS] = words.try_into().map_err(|_| Error::InvalidKeyLength {
            len: words.len(),
            unit: "words",
            expected: KEY_WORDS,
        })?;
        Ok(Self { words })
    }

    /// Returns a reference to the key schedule words.
    pub fn as_words(&self) -> &[u32; 4] {
        &self.words
    }

    /// Serializes the key to 16 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        let mut out = [0u8; KEY_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Builds a key from exactly 16 bytes.
    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Self {
        let mut words = [0u32; KEY_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }
}

impl From<[u32; 4]> for Key {
    fn from(words: [u32; 4]) -> Self {
        Self::new(words)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_read_big_endian() -> Result<()> {
        let key = Key::try_from_slice(&[
            0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x01, //
            0x80, 0x00, 0x00, 0x00, 0x12, 0x34, 0x56, 0x78, //
        ])?;
        assert_eq!(key.as_words(), &[0xdeadbeef, 0x00000001, 0x80000000, 0x12345678]);
        Ok(())
    }

    #[test]
    fn to_bytes_inverts_try_from_slice() -> Result<()> {
        let key = Key::new([0x01234567, 0x89abcdef, 0xfedcba98, 0x76543210]);
        assert_eq!(Key::try_from_slice(&key.to_bytes())?, key);
        Ok(())
    }

    #[test]
    fn rejects_wrong_byte_lengths() {
        let bytes = [0u8; 32];
        for len in [0, 8, 15, 17, 24, 32] {
            match Key::try_from_slice(&bytes[..len]) {
                Err(Error::InvalidKeyLength { len: got, .. }) => assert_eq!(got, len),
                other => panic!("expected InvalidKeyLength for {len} bytes, got {other:?}"),
            }
        }
        assert!(Key::try_from_slice(&bytes[..16]).is_ok());
    }

    #[test]
    fn rejects_wrong_word_lengths() {
        assert!(matches!(
            Key::try_from_words(&[1, 2, 3]),
            Err(Error::InvalidKeyLength { len: 3, .. })
        ));
        assert!(matches!(
            Key::try_from_words(&[1, 2, 3, 4, 5]),
            Err(Error::InvalidKeyLength { len: 5, .. })
        ));
        assert_eq!(
            Key::try_from_words(&[1, 2, 3, 4]).ok(),
            Some(Key::new([1, 2, 3, 4]))
        );
    }

    #[test]
    fn random_keys_differ() -> Result<()> {
        let a = Key::rand_key()?;
        let b = Key::rand_key()?;
        assert_ne!(a, b);
        Ok(())
    }
}
