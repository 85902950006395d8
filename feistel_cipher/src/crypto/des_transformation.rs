use crate::crypto::bit_sequence::BitSequence;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::tables::{CipherTables, SubstitutionTable};
use std::sync::Arc;

const SBOX_INPUT_BITS: usize = 6;
const SBOX_OUTPUT_BITS: usize = 4;

pub struct DesTransformation {
    tables: Arc<CipherTables>,
}

impl DesTransformation {
    pub fn new(tables: Arc<CipherTables>) -> Self {
        Self { tables }
    }
}

fn bit_at(bits: &BitSequence, index: usize) -> usize {
    bits.get(index).map_or(0, usize::from)
}

/// Replaces every 6-bit group with its S-box entry. The outer bits pick the
/// row and the inner four the column, both read as plain unsigned binary.
pub fn substitute(bits: &BitSequence, substitution: &SubstitutionTable) -> BitSequence {
    let mut output = BitSequence::new();

    for box_i in 0..substitution.len() {
        let start = box_i * SBOX_INPUT_BITS;
        let group = bits.slice(start..start + SBOX_INPUT_BITS);

        let row = (bit_at(&group, 0) << 1) | bit_at(&group, SBOX_INPUT_BITS - 1);
        let col = group.slice(1..5).to_usize();

        let s_val = substitution.lookup(box_i, row, col);
        output = output.concat(&BitSequence::from_value(s_val as usize, SBOX_OUTPUT_BITS));
    }

    output
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, r_block: &BitSequence, round_key: &BitSequence) -> BitSequence {
        // 1. Expansion
        let expanded = self.tables.expansion.apply(r_block);

        // 2. XOR
        let mixed = expanded.xor(round_key);

        // 3. S-boxes
        let s_result = substitute(&mixed, &self.tables.substitution);

        // 4. P-permutation
        self.tables.round_permutation.apply(&s_result)
    }
}
