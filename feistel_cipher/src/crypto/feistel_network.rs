use crate::crypto::bit_sequence::BitSequence;
use crate::crypto::cipher_types::SubKeyList;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use std::sync::Arc;

pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(num_round: usize, transformation: Arc<dyn EncryptionTransformation + Send + Sync>) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    /// `L ++ R` becomes `R ++ (L xor F(R, k))`.
    pub fn round(&self, block: &BitSequence, round_key: &BitSequence) -> Result<BitSequence, CipherError> {
        if block.is_empty() || block.len() % 2 != 0 {
            return Err(CipherError::InvalidConfiguration(format!(
                "a {}-bit block has no equal halves",
                block.len()
            )));
        }

        let (left, right) = block.split_in_half();
        let feistel_out = self.transformation.transform(&right, round_key);
        if feistel_out.len() != left.len() {
            return Err(CipherError::InvalidConfiguration(format!(
                "round function yields {} bits for a {}-bit half block",
                feistel_out.len(),
                left.len()
            )));
        }

        let new_right = left.xor(&feistel_out);
        Ok(right.concat(&new_right))
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &BitSequence,
        round_keys: &SubKeyList,
    ) -> Result<BitSequence, CipherError> {
        self.check_round_keys(round_keys)?;
        self.run(block, round_keys.iter())
    }

    /// Same rounds as encryption, subkeys consumed back to front.
    pub fn decrypt_with_round_keys(
        &self,
        block: &BitSequence,
        round_keys: &SubKeyList,
    ) -> Result<BitSequence, CipherError> {
        self.check_round_keys(round_keys)?;
        self.run(block, round_keys.iter().rev())
    }

    fn check_round_keys(&self, round_keys: &SubKeyList) -> Result<(), CipherError> {
        if round_keys.len() != self.num_round {
            return Err(CipherError::InvalidConfiguration(format!(
                "{} subkeys for {} rounds",
                round_keys.len(),
                self.num_round
            )));
        }
        Ok(())
    }

    fn run<'a>(
        &self,
        block: &BitSequence,
        round_keys: impl Iterator<Item = &'a BitSequence>,
    ) -> Result<BitSequence, CipherError> {
        let mut block = block.clone();
        for (round, round_key) in round_keys.enumerate() {
            block = self.round(&block, round_key)?;
            log::trace!("round {}: {block}", round + 1);
        }

        // undo the swap of the last round
        Ok(block.swap_halves())
    }
}
