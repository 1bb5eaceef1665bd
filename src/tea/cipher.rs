use crate::tea::core::{DEFAULT_ROUNDS, decrypt_block, encrypt_block};
use crate::tea::error::Result;
use crate::tea::key::Key;
use crate::tea::modes::*;

/// Provides block and message level encryption and decryption for TEA.
/// Instantiated with a [Key] and a round count (32 unless set with [with_rounds](Cipher::with_rounds)).
///
/// ```
/// # fn main() -> tinytea::Result<()> {
/// use tinytea::{Cipher, Key};
///
/// let cipher = Cipher::new(&Key::rand_key()?);
/// let ciphertext = cipher.encode(b"Hello, World!");
/// assert_eq!(ciphertext.len(), 16);
/// assert_eq!(cipher.decode(&ciphertext)?, b"Hello, World!");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cipher {
    key: Key,
    rounds: u32,
}

impl Cipher {
    /// Stores the key with the default 32 rounds.
    pub fn new(key: &Key) -> Self {
        Self::with_rounds(key, DEFAULT_ROUNDS)
    }

    /// Stores the key with a caller-chosen round count. Decryption must use the same count.
    pub fn with_rounds(key: &Key, rounds: u32) -> Self {
        Self { key: *key, rounds }
    }

    /// The key this cipher was built with.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Number of rounds applied to each block.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Encrypts a single block.
    pub fn encrypt_block(&self, v0: u32, v1: u32) -> (u32, u32) {
        encrypt_block(v0, v1, self.key.as_words(), self.rounds)
    }

    /// Decrypts a single block.
    pub fn decrypt_block(&self, v0: u32, v1: u32) -> (u32, u32) {
        decrypt_block(v0, v1, self.key.as_words(), self.rounds)
    }

    /// **Electronic codebook** encryption with zero padding.
    ///
    /// Right-pads the message with zero bytes to a multiple of 8 (an empty message becomes one
    /// zero block) and encrypts each 8-byte block entirely independently.
    /// **Vulnerable to pattern emergence in the ciphertext.**
    ///
    /// A message that itself ends in zero bytes will lose them in [decode](Cipher::decode).
    pub fn encode(&self, message: &[u8]) -> Vec<u8> {
        ecb_core_enc(message, self.key.as_words(), self.rounds)
    }

    /// **Electronic codebook** decryption without unpadding.
    ///
    /// Returns [InvalidCiphertextLength](crate::Error::InvalidCiphertextLength) if the
    /// ciphertext is not a multiple of 8 bytes. The output is always as long as the input.
    pub fn decode_raw(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecb_core_dec(ciphertext, self.key.as_words(), self.rounds)
    }

    /// **Electronic codebook** decryption. Strips every trailing zero byte from the result.
    pub fn decode(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut plaintext = self.decode_raw(ciphertext)?;
        strip_trailing_zeros(&mut plaintext);
        Ok(plaintext)
    }
}
