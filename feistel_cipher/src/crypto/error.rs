use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid key: expected {expected} bits, got {actual}")]
    InvalidKey { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid block: expected {expected} bits, got {actual}")]
    InvalidBlock { expected: usize, actual: usize },

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("decrypted length {actual_bits} does not match the padded length of a {original_bits}-bit message")]
    PaddingMismatch {
        original_bits: usize,
        actual_bits: usize,
    },
}
