//! Slot-word cursors: the single-field encode/decode engine.
//!
//! A [`SlotWriter`] shifts masked values into position at a running bit
//! offset; a [`SlotReader`] extracts them at the same offsets. Both
//! enforce the no-split rule: a field whose width would cross the word
//! boundary is placed at bit 0 of the next word, leaving the remainder of
//! the previous word zero.

use crate::error::CodecError;
use crate::field::{mask, WORD_BITS};
use alloy_primitives::U256;

/// Appends fields to a growing sequence of slot words.
#[derive(Debug)]
pub struct SlotWriter {
    words: Vec<U256>,
    bit: usize,
}

impl SlotWriter {
    /// Start a fresh record at slot 0, bit 0.
    pub fn new() -> Self {
        Self {
            words: vec![U256::ZERO],
            bit: 0,
        }
    }

    /// Mask `value` to `bits` and place it at the current offset,
    /// advancing to the next word first if it would not fit whole.
    pub fn put(&mut self, bits: usize, value: U256) {
        debug_assert!(bits >= 1 && bits <= WORD_BITS);
        if self.bit + bits > WORD_BITS {
            self.words.push(U256::ZERO);
            self.bit = 0;
        }
        let value = value & mask(bits);
        if let Some(word) = self.words.last_mut() {
            *word |= value << self.bit;
        }
        self.bit += bits;
    }

    /// The packed slot words, in slot-index order.
    pub fn finish(self) -> Vec<U256> {
        self.words
    }
}

impl Default for SlotWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks a slot-word sequence at the offsets [`SlotWriter`] produced.
#[derive(Debug)]
pub struct SlotReader<'a> {
    words: &'a [U256],
    index: usize,
    bit: usize,
}

impl<'a> SlotReader<'a> {
    /// Start reading at slot 0, bit 0.
    pub fn new(words: &'a [U256]) -> Self {
        Self {
            words,
            index: 0,
            bit: 0,
        }
    }

    /// Extract the next `bits`-wide value, honoring the no-split rule.
    pub fn take(&mut self, bits: usize) -> Result<U256, CodecError> {
        debug_assert!(bits >= 1 && bits <= WORD_BITS);
        if self.bit + bits > WORD_BITS {
            self.index += 1;
            self.bit = 0;
        }
        let word = self.words.get(self.index).ok_or(CodecError::Truncated {
            needed: self.index + 1,
            provided: self.words.len(),
        })?;
        let value = (*word >> self.bit) & mask(bits);
        self.bit += bits;
        Ok(value)
    }
}
