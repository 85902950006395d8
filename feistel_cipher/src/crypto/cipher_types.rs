use crate::crypto::bit_sequence::{is_bit_literal, BitSequence};
use crate::crypto::error::CipherError;
use crate::crypto::tables::CipherTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherConfiguration {
    pub number_of_rounds: usize,
    pub block_size: usize,
    pub key_size: usize,
}

impl CipherConfiguration {
    pub fn new(number_of_rounds: usize, block_size: usize, key_size: usize) -> Self {
        Self {
            number_of_rounds,
            block_size,
            key_size,
        }
    }

    /// Per-stage settings for cascade mode: three 56-bit keys that skip the
    /// key reduction step.
    pub fn triple() -> Self {
        Self::new(16, 64, 56)
    }

    pub fn half_block(&self) -> usize {
        self.block_size / 2
    }

    /// Checks that these settings and `tables` fit together, so the pipeline
    /// never has to.
    pub fn validate(&self, tables: &CipherTables) -> Result<(), CipherError> {
        let invalid = |message: String| -> Result<(), CipherError> {
            Err(CipherError::InvalidConfiguration(message))
        };

        if self.number_of_rounds == 0 {
            return invalid("number of rounds must be positive".into());
        }
        if self.block_size == 0 || self.block_size % 2 != 0 {
            return invalid(format!(
                "block size must be a positive even number, got {}",
                self.block_size
            ));
        }
        if tables.rotation_schedule.len() < self.number_of_rounds {
            return invalid(format!(
                "rotation schedule covers {} rounds, {} configured",
                tables.rotation_schedule.len(),
                self.number_of_rounds
            ));
        }

        let half = self.half_block();
        if tables.round_permutation.len() != half {
            return invalid(format!(
                "round function yields {} bits, half block is {half}",
                tables.round_permutation.len()
            ));
        }
        if tables.expansion.source_width() > half {
            return invalid(format!(
                "expansion reads bit {} of a {half}-bit half block",
                tables.expansion.source_width()
            ));
        }
        if tables.expansion.len() != tables.sub_key_width() {
            return invalid(format!(
                "expansion yields {} bits, subkeys have {}",
                tables.expansion.len(),
                tables.sub_key_width()
            ));
        }
        if tables.expansion.len() != 6 * tables.substitution.len() {
            return invalid(format!(
                "{} substitution boxes need {} expanded bits, got {}",
                tables.substitution.len(),
                6 * tables.substitution.len(),
                tables.expansion.len()
            ));
        }
        if tables.round_permutation.source_width() > 4 * tables.substitution.len() {
            return invalid(format!(
                "round permutation reads bit {} of a {}-bit substitution output",
                tables.round_permutation.source_width(),
                4 * tables.substitution.len()
            ));
        }

        let internal = tables.internal_key_width();
        if internal % 2 != 0 {
            return invalid(format!("internal key width {internal} is odd"));
        }
        if self.key_size != internal && self.key_size < tables.key_reduction.source_width() {
            return invalid(format!(
                "key size {} is neither the internal width {internal} nor wide enough for the key reduction ({} bits)",
                self.key_size,
                tables.key_reduction.source_width()
            ));
        }
        if tables.sub_key_selection.source_width() > internal {
            return invalid(format!(
                "subkey selection reads bit {} of a {internal}-bit working key",
                tables.sub_key_selection.source_width()
            ));
        }

        if let Some(initial) = &tables.initial_permutation {
            for table in [&initial.forward, &initial.inverse] {
                if table.len() != self.block_size || table.source_width() > self.block_size {
                    return invalid(format!(
                        "initial permutation must map {0} bits to {0} bits",
                        self.block_size
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for CipherConfiguration {
    fn default() -> Self {
        Self::new(16, 64, 64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherDirection {
    Encrypt,
    Decrypt,
}

impl CipherDirection {
    pub fn is_forward(self) -> bool {
        matches!(self, CipherDirection::Encrypt)
    }
}

/// Data handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherInput {
    /// A `'0'`/`'1'` literal is read bit by bit; anything else is read as
    /// its UTF-8 bytes.
    Text(String),
    Bytes(Vec<u8>),
    Bits(BitSequence),
}

impl CipherInput {
    pub fn encode(&self) -> BitSequence {
        match self {
            CipherInput::Text(text) => encode_text(text),
            CipherInput::Bytes(bytes) => BitSequence::from_bytes(bytes),
            CipherInput::Bits(bits) => bits.clone(),
        }
    }
}

fn encode_text(text: &str) -> BitSequence {
    if is_bit_literal(text) {
        text.bytes().map(|b| b == b'1').collect()
    } else {
        BitSequence::from_bytes(text.as_bytes())
    }
}

impl From<&str> for CipherInput {
    fn from(text: &str) -> Self {
        CipherInput::Text(text.to_owned())
    }
}

impl From<String> for CipherInput {
    fn from(text: String) -> Self {
        CipherInput::Text(text)
    }
}

impl From<&[u8]> for CipherInput {
    fn from(bytes: &[u8]) -> Self {
        CipherInput::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for CipherInput {
    fn from(bytes: Vec<u8>) -> Self {
        CipherInput::Bytes(bytes)
    }
}

impl From<BitSequence> for CipherInput {
    fn from(bits: BitSequence) -> Self {
        CipherInput::Bits(bits)
    }
}

impl From<&BitSequence> for CipherInput {
    fn from(bits: &BitSequence) -> Self {
        CipherInput::Bits(bits.clone())
    }
}

/// Master key material. Its width is checked against the configuration when
/// the schedule is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    bits: BitSequence,
}

impl Key {
    /// Same detection as text input: a `'0'`/`'1'` literal is taken bit by
    /// bit, other text by its bytes.
    pub fn parse(text: &str) -> Self {
        Self {
            bits: encode_text(text),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: BitSequence::from_bytes(bytes),
        }
    }

    pub fn from_bits(bits: BitSequence) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &BitSequence {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// Round subkeys in encryption order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubKeyList {
    keys: Vec<BitSequence>,
}

impl SubKeyList {
    pub fn new(keys: Vec<BitSequence>) -> Self {
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, round: usize) -> Option<&BitSequence> {
        self.keys.get(round)
    }

    pub fn as_slice(&self) -> &[BitSequence] {
        &self.keys
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &BitSequence> + '_ {
        self.keys.iter()
    }

    pub fn reversed(&self) -> Self {
        Self {
            keys: self.keys.iter().rev().cloned().collect(),
        }
    }
}
