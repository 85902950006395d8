use crate::crypto::bit_sequence::BitSequence;

/// The keyed round function of a Feistel network. Output width must equal
/// the width of `half_block`.
pub trait EncryptionTransformation {
    fn transform(&self, half_block: &BitSequence, round_key: &BitSequence) -> BitSequence;
}
