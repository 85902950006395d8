use crate::crypto::bit_sequence::BitSequence;
use crate::crypto::cipher_types::{CipherInput, Key};
use crate::crypto::error::CipherError;

/// Shared surface of the single-key and cascade ciphers.
pub trait CipherAlgorithm {
    fn encrypt(&self, input: CipherInput, key: &Key) -> Result<BitSequence, CipherError>;
    fn decrypt(&self, input: CipherInput, key: &Key) -> Result<BitSequence, CipherError>;
    fn block_size(&self) -> usize;
    /// Removes the front padding of the last block of a decrypted message.
    fn strip_padding(&self, decrypted: &BitSequence, original_bits: usize) -> Result<BitSequence, CipherError>;
}
