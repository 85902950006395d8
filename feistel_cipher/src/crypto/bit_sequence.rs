use bitvec::prelude::{BitVec, Msb0};
use std::fmt;
use std::ops::{BitXor, Range};

/// An ordered, immutable run of bits.
///
/// Every transformation returns a fresh sequence, so a value handed to one
/// round or cascade stage can never be changed underneath another.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: BitVec<u8, Msb0>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zeros(len: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, len),
        }
    }

    /// Eight bits per byte, most significant bit first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(bytes),
        }
    }

    /// Parses a literal made only of `'0'` and `'1'`. Returns `None` if any
    /// other character is present.
    pub fn from_bit_str(literal: &str) -> Option<Self> {
        if !is_bit_literal(literal) {
            return None;
        }
        Some(literal.bytes().map(|b| b == b'1').collect())
    }

    /// The `width` low bits of `value`, most significant first.
    pub fn from_value(value: usize, width: usize) -> Self {
        (0..width).rev().map(|i| (value >> i) & 1 == 1).collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            bits: self.bits[range].to_bitvec(),
        }
    }

    pub fn concat(&self, other: &BitSequence) -> Self {
        let mut bits = BitVec::with_capacity(self.len() + other.len());
        bits.extend_from_bitslice(self.bits.as_bitslice());
        bits.extend_from_bitslice(other.bits.as_bitslice());
        Self { bits }
    }

    /// Bitwise XOR. Both operands must have the same length.
    pub fn xor(&self, other: &BitSequence) -> Self {
        debug_assert_eq!(self.len(), other.len(), "XOR operands differ in length");
        self.iter().zip(other.iter()).map(|(a, b)| a ^ b).collect()
    }

    /// Positive `places` rotates right, negative rotates left.
    pub fn rotate(&self, places: isize) -> Self {
        if places >= 0 {
            self.rotate_right(places.unsigned_abs())
        } else {
            self.rotate_left(places.unsigned_abs())
        }
    }

    pub fn rotate_left(&self, places: usize) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let split = places % self.len();
        self.splice_at(split)
    }

    pub fn rotate_right(&self, places: usize) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let split = (self.len() - places % self.len()) % self.len();
        self.splice_at(split)
    }

    fn splice_at(&self, split: usize) -> Self {
        let mut bits = BitVec::with_capacity(self.len());
        bits.extend_from_bitslice(&self.bits[split..]);
        bits.extend_from_bitslice(&self.bits[..split]);
        Self { bits }
    }

    /// Splits at `len / 2`. Only meaningful for even lengths.
    pub fn split_in_half(&self) -> (Self, Self) {
        let half = self.len() / 2;
        (self.slice(0..half), self.slice(half..self.len()))
    }

    pub fn swap_halves(&self) -> Self {
        let (left, right) = self.split_in_half();
        right.concat(&left)
    }

    /// Consecutive chunks of `size` bits. A short final chunk is padded with
    /// leading zeros, so its data bits occupy the trailing positions.
    pub fn chunks_front_padded(&self, size: usize) -> Vec<Self> {
        self.bits
            .chunks(size)
            .map(|chunk| {
                let mut bits = BitVec::with_capacity(size);
                bits.extend(std::iter::repeat(false).take(size - chunk.len()));
                bits.extend_from_bitslice(chunk);
                Self { bits }
            })
            .collect()
    }

    /// Unsigned binary value, first bit most significant.
    pub fn to_usize(&self) -> usize {
        self.iter().fold(0, |acc, bit| (acc << 1) | bit as usize)
    }

    pub fn count_differences(&self, other: &BitSequence) -> usize {
        let common = self.iter().zip(other.iter()).filter(|(a, b)| a != b).count();
        common + self.len().abs_diff(other.len())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len().div_ceil(8));

        for chunk in self.bits.chunks(8) {
            let mut byte = 0;
            for (i, bit) in chunk.iter().enumerate() {
                if *bit {
                    byte |= 1 << (7 - i);
                }
            }
            bytes.push(byte);
        }
        bytes
    }

    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

/// True when every character is `'0'` or `'1'`. A single scan decides for the
/// whole input.
pub fn is_bit_literal(input: &str) -> bool {
    input.bytes().all(|b| b == b'0' || b == b'1')
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl BitXor for &BitSequence {
    type Output = BitSequence;

    fn bitxor(self, rhs: Self) -> BitSequence {
        self.xor(rhs)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence({})", self.to_bit_string())
    }
}
