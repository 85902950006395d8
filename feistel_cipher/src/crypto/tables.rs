use crate::crypto::bit_sequence::BitSequence;
use crate::crypto::des_tables::{E, FP, IP, P, PC1, PC2, SHIFT_BITS, S_BOXES};
use crate::crypto::error::CipherError;

/// Ordered 1-based source indices: `output[i] = input[table[i] - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    indices: Vec<usize>,
    source_width: usize,
}

impl PermutationTable {
    pub fn new(indices: Vec<usize>) -> Result<Self, CipherError> {
        if indices.is_empty() {
            return Err(CipherError::InvalidTable(
                "permutation table is empty".into(),
            ));
        }
        if let Some(position) = indices.iter().position(|&index| index == 0) {
            return Err(CipherError::InvalidTable(format!(
                "permutation entry {position} is 0, entries are 1-based"
            )));
        }
        Ok(Self::from_constant(&indices))
    }

    fn from_constant(indices: &[usize]) -> Self {
        Self {
            indices: indices.to_vec(),
            source_width: indices.iter().copied().max().unwrap_or(0),
        }
    }

    /// Output width.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// 1-based source position for output position `i`.
    pub fn lookup(&self, i: usize) -> Option<usize> {
        self.indices.get(i).copied()
    }

    /// The shortest input this table can read from.
    pub fn source_width(&self) -> usize {
        self.source_width
    }

    /// The caller guarantees `input.len() >= self.source_width()`; cipher
    /// construction checks this for every table it owns.
    pub fn apply(&self, input: &BitSequence) -> BitSequence {
        self.indices
            .iter()
            .map(|&index| input.get(index - 1).unwrap_or(false))
            .collect()
    }
}

/// A set of S-boxes, each 4 rows by 16 columns of 4-bit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    boxes: Vec<[[u8; 16]; 4]>,
}

impl SubstitutionTable {
    pub fn new(boxes: Vec<[[u8; 16]; 4]>) -> Result<Self, CipherError> {
        if boxes.is_empty() {
            return Err(CipherError::InvalidTable("no substitution boxes".into()));
        }
        for (box_index, matrix) in boxes.iter().enumerate() {
            if matrix.iter().flatten().any(|&value| value > 0x0F) {
                return Err(CipherError::InvalidTable(format!(
                    "substitution box {box_index} holds a value wider than 4 bits"
                )));
            }
        }
        Ok(Self { boxes })
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn lookup(&self, box_index: usize, row: usize, col: usize) -> u8 {
        self.boxes[box_index][row][col]
    }
}

/// Per-round left-rotation amounts for the key schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSchedule {
    shifts: Vec<usize>,
}

impl RotationSchedule {
    pub fn new(shifts: Vec<usize>) -> Self {
        Self { shifts }
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn get(&self, round: usize) -> Option<usize> {
        self.shifts.get(round).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.shifts.iter().copied()
    }
}

/// A fixed block permutation applied before the rounds, with the inverse
/// applied after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialPermutation {
    pub forward: PermutationTable,
    pub inverse: PermutationTable,
}

/// Every constant the cipher reads. Built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherTables {
    pub initial_permutation: Option<InitialPermutation>,
    /// Half block -> subkey width.
    pub expansion: PermutationTable,
    /// S-box output -> half block.
    pub round_permutation: PermutationTable,
    pub substitution: SubstitutionTable,
    /// Raw key -> internal schedule width.
    pub key_reduction: PermutationTable,
    /// Rotated halves -> round subkey.
    pub sub_key_selection: PermutationTable,
    pub rotation_schedule: RotationSchedule,
}

impl CipherTables {
    pub fn standard() -> Self {
        Self {
            initial_permutation: Some(InitialPermutation {
                forward: PermutationTable::from_constant(&IP),
                inverse: PermutationTable::from_constant(&FP),
            }),
            expansion: PermutationTable::from_constant(&E),
            round_permutation: PermutationTable::from_constant(&P),
            substitution: SubstitutionTable {
                boxes: S_BOXES.to_vec(),
            },
            key_reduction: PermutationTable::from_constant(&PC1),
            sub_key_selection: PermutationTable::from_constant(&PC2),
            rotation_schedule: RotationSchedule::new(SHIFT_BITS.to_vec()),
        }
    }

    pub fn without_initial_permutation(mut self) -> Self {
        self.initial_permutation = None;
        self
    }

    /// Width of the working key the rotation halves are cut from.
    pub fn internal_key_width(&self) -> usize {
        self.key_reduction.len()
    }

    /// Width of each round subkey.
    pub fn sub_key_width(&self) -> usize {
        self.sub_key_selection.len()
    }
}

impl Default for CipherTables {
    fn default() -> Self {
        Self::standard()
    }
}
