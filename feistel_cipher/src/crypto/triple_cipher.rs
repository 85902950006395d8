use crate::crypto::bit_sequence::BitSequence;
use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::cipher_types::{CipherConfiguration, CipherDirection, CipherInput, Key};
use crate::crypto::error::CipherError;
use crate::crypto::feistel_cipher::FeistelCipher;
use crate::crypto::tables::CipherTables;
use std::sync::Arc;

/// Three independent single-key passes chained output to input.
///
/// Encryption runs `k1`, `k2`, `k3` forward; decryption runs `k3`, `k2`, `k1`
/// backward. Stages hand each other bit sequences, never text.
pub struct TripleFeistelCipher {
    cipher: FeistelCipher,
}

impl TripleFeistelCipher {
    /// `config` describes one stage; the wide key is three `key_size` keys.
    pub fn new(config: CipherConfiguration) -> Result<Self, CipherError> {
        Ok(Self {
            cipher: FeistelCipher::new(config)?,
        })
    }

    pub fn with_tables(config: CipherConfiguration, tables: Arc<CipherTables>) -> Result<Self, CipherError> {
        Ok(Self {
            cipher: FeistelCipher::with_tables(config, tables)?,
        })
    }

    pub fn from_cipher(cipher: FeistelCipher) -> Self {
        Self { cipher }
    }

    pub fn stage_cipher(&self) -> &FeistelCipher {
        &self.cipher
    }

    pub fn wide_key_size(&self) -> usize {
        3 * self.cipher.config().key_size
    }

    pub fn split_key(&self, key: &Key) -> Result<[Key; 3], CipherError> {
        let expected = self.wide_key_size();
        if key.len() != expected {
            return Err(CipherError::InvalidKey {
                expected,
                actual: key.len(),
            });
        }

        let width = self.cipher.config().key_size;
        let segment = |i: usize| Key::from_bits(key.bits().slice(i * width..(i + 1) * width));
        Ok([segment(0), segment(1), segment(2)])
    }

    pub fn triple_process(
        &self,
        input: &BitSequence,
        key: &Key,
        direction: CipherDirection,
    ) -> Result<BitSequence, CipherError> {
        let [k1, k2, k3] = self.split_key(key)?;
        let stages = match direction {
            CipherDirection::Encrypt => [k1, k2, k3],
            CipherDirection::Decrypt => [k3, k2, k1],
        };

        let mut bits = input.clone();
        for (stage, stage_key) in stages.iter().enumerate() {
            log::debug!("{:?} cascade stage {}", direction, stage + 1);
            bits = self.cipher.process(&bits, stage_key, direction)?;
        }
        Ok(bits)
    }

    pub fn triple_encrypt(&self, input: impl Into<CipherInput>, key: &Key) -> Result<BitSequence, CipherError> {
        self.triple_process(&input.into().encode(), key, CipherDirection::Encrypt)
    }

    pub fn triple_decrypt(&self, input: impl Into<CipherInput>, key: &Key) -> Result<BitSequence, CipherError> {
        self.triple_process(&input.into().encode(), key, CipherDirection::Decrypt)
    }

    pub fn strip_padding(&self, decrypted: &BitSequence, original_bits: usize) -> Result<BitSequence, CipherError> {
        self.cipher.strip_padding(decrypted, original_bits)
    }
}

impl CipherAlgorithm for TripleFeistelCipher {
    fn encrypt(&self, input: CipherInput, key: &Key) -> Result<BitSequence, CipherError> {
        self.triple_encrypt(input, key)
    }

    fn decrypt(&self, input: CipherInput, key: &Key) -> Result<BitSequence, CipherError> {
        self.triple_decrypt(input, key)
    }

    fn block_size(&self) -> usize {
        self.cipher.config().block_size
    }

    fn strip_padding(&self, decrypted: &BitSequence, original_bits: usize) -> Result<BitSequence, CipherError> {
        self.cipher.strip_padding(decrypted, original_bits)
    }
}
