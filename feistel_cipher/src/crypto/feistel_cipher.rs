use crate::crypto::bit_sequence::BitSequence;
use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::cipher_types::{CipherConfiguration, CipherDirection, CipherInput, Key, SubKeyList};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::tables::CipherTables;
use rayon::prelude::*;
use std::sync::Arc;

/// Single-key block cipher: chunking, key schedule, optional initial
/// permutation, the Feistel rounds and reassembly.
///
/// Encryption and decryption share one code path. The only difference is the
/// order in which the round subkeys are consumed.
pub struct FeistelCipher {
    config: CipherConfiguration,
    tables: Arc<CipherTables>,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    feistel_network: FeistelNetwork,
}

impl FeistelCipher {
    /// Uses the standard DES tables.
    pub fn new(config: CipherConfiguration) -> Result<Self, CipherError> {
        Self::with_tables(config, Arc::new(CipherTables::standard()))
    }

    pub fn with_tables(config: CipherConfiguration, tables: Arc<CipherTables>) -> Result<Self, CipherError> {
        let key_expansion = Arc::new(DesKeyExpansion::new(config, tables.clone())?);
        let transformation = Arc::new(DesTransformation::new(tables.clone()));
        Self::with_components(config, tables, key_expansion, transformation)
    }

    pub fn with_components(
        config: CipherConfiguration,
        tables: Arc<CipherTables>,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Result<Self, CipherError> {
        config.validate(&tables)?;

        let feistel_network = FeistelNetwork::new(config.number_of_rounds, transformation);

        Ok(FeistelCipher {
            config,
            tables,
            key_expansion,
            feistel_network,
        })
    }

    pub fn config(&self) -> &CipherConfiguration {
        &self.config
    }

    pub fn tables(&self) -> &CipherTables {
        &self.tables
    }

    pub fn generate_sub_keys(&self, key: &Key) -> Result<SubKeyList, CipherError> {
        let sub_keys = self.key_expansion.generate_round_keys(key)?;
        if sub_keys.len() != self.config.number_of_rounds {
            return Err(CipherError::InvalidConfiguration(format!(
                "key expansion produced {} subkeys for {} rounds",
                sub_keys.len(),
                self.config.number_of_rounds
            )));
        }
        Ok(sub_keys)
    }

    /// Splits `bits` into blocks; a short last block gets leading zeros.
    pub fn chunk(&self, bits: &BitSequence) -> Vec<BitSequence> {
        bits.chunks_front_padded(self.config.block_size)
    }

    /// One block through the optional initial permutation and the rounds.
    /// The block must be exactly `block_size` bits and `sub_keys` must hold
    /// one key per round.
    pub fn process_block(
        &self,
        block: &BitSequence,
        sub_keys: &SubKeyList,
        direction: CipherDirection,
    ) -> Result<BitSequence, CipherError> {
        if block.len() != self.config.block_size {
            return Err(CipherError::InvalidBlock {
                expected: self.config.block_size,
                actual: block.len(),
            });
        }

        let permuted = match &self.tables.initial_permutation {
            Some(initial) => initial.forward.apply(block),
            None => block.clone(),
        };

        let result = match direction {
            CipherDirection::Encrypt => self.feistel_network.encrypt_with_round_keys(&permuted, sub_keys)?,
            CipherDirection::Decrypt => self.feistel_network.decrypt_with_round_keys(&permuted, sub_keys)?,
        };

        Ok(match &self.tables.initial_permutation {
            Some(initial) => initial.inverse.apply(&result),
            None => result,
        })
    }

    pub fn process(
        &self,
        input: &BitSequence,
        key: &Key,
        direction: CipherDirection,
    ) -> Result<BitSequence, CipherError> {
        let sub_keys = self.generate_sub_keys(key)?;
        self.process_with_sub_keys(input, &sub_keys, direction)
    }

    /// Runs `process` over independent messages on the rayon pool. Results
    /// keep the order of `inputs`.
    pub fn process_batch(
        &self,
        inputs: &[BitSequence],
        key: &Key,
        direction: CipherDirection,
    ) -> Result<Vec<BitSequence>, CipherError> {
        let sub_keys = self.generate_sub_keys(key)?;
        log::debug!("{:?} batch of {} messages", direction, inputs.len());

        inputs
            .par_iter()
            .map(|input| self.process_with_sub_keys(input, &sub_keys, direction))
            .collect()
    }

    fn process_with_sub_keys(
        &self,
        input: &BitSequence,
        sub_keys: &SubKeyList,
        direction: CipherDirection,
    ) -> Result<BitSequence, CipherError> {
        let blocks = self.chunk(input);
        log::debug!(
            "{:?} {} bits as {} blocks of {}",
            direction,
            input.len(),
            blocks.len(),
            self.config.block_size
        );

        let processed = blocks
            .iter()
            .map(|block| self.process_block(block, sub_keys, direction))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(processed.iter().flat_map(|block| block.iter()).collect())
    }

    pub fn encrypt(&self, input: impl Into<CipherInput>, key: &Key) -> Result<BitSequence, CipherError> {
        self.process(&input.into().encode(), key, CipherDirection::Encrypt)
    }

    pub fn decrypt(&self, input: impl Into<CipherInput>, key: &Key) -> Result<BitSequence, CipherError> {
        self.process(&input.into().encode(), key, CipherDirection::Decrypt)
    }

    /// Length of the ciphertext for an `original_bits`-bit message.
    pub fn padded_len(&self, original_bits: usize) -> usize {
        original_bits.div_ceil(self.config.block_size) * self.config.block_size
    }

    /// Drops the leading zeros chunking put in front of the last block. The
    /// original length is not recorded in the ciphertext, so the caller has to
    /// supply it.
    pub fn strip_padding(&self, decrypted: &BitSequence, original_bits: usize) -> Result<BitSequence, CipherError> {
        if decrypted.len() != self.padded_len(original_bits) {
            return Err(CipherError::PaddingMismatch {
                original_bits,
                actual_bits: decrypted.len(),
            });
        }

        let tail = original_bits % self.config.block_size;
        if tail == 0 {
            return Ok(decrypted.clone());
        }

        let full = original_bits - tail;
        let last_block_data = decrypted.slice(decrypted.len() - tail..decrypted.len());
        Ok(decrypted.slice(0..full).concat(&last_block_data))
    }
}

impl CipherAlgorithm for FeistelCipher {
    fn encrypt(&self, input: CipherInput, key: &Key) -> Result<BitSequence, CipherError> {
        FeistelCipher::encrypt(self, input, key)
    }

    fn decrypt(&self, input: CipherInput, key: &Key) -> Result<BitSequence, CipherError> {
        FeistelCipher::decrypt(self, input, key)
    }

    fn block_size(&self) -> usize {
        self.config.block_size
    }

    fn strip_padding(&self, decrypted: &BitSequence, original_bits: usize) -> Result<BitSequence, CipherError> {
        FeistelCipher::strip_padding(self, decrypted, original_bits)
    }
}
