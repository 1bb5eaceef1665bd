use rand::rand_core;
use thiserror::Error;

/// TEA Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// TEA Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build a key from anything other than 16 bytes (or 4 words).
    #[error("invalid key length: {len} {unit} (expected {expected})")]
    InvalidKeyLength {
        len: usize,
        unit: &'static str,
        expected: usize,
    },

    /// Ciphertext passed to decode was not a whole number of 8-byte blocks.
    #[error("invalid ciphertext length: {len} bytes (expected a multiple of 8)")]
    InvalidCiphertextLength { len: usize },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_length() {
        let e = Error::InvalidKeyLength {
            len: 15,
            unit: "bytes",
            expected: 16,
        };
        assert_eq!(e.to_string(), "invalid key length: 15 bytes (expected 16)");

        let e = Error::InvalidCiphertextLength { len: 9 };
        assert_eq!(
            e.to_string(),
            "invalid ciphertext length: 9 bytes (expected a multiple of 8)"
        );
    }
}
