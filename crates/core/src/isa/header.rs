//! Instruction header word codec.
//!
//! Every SPIR-V instruction starts with a header word laid out as
//! `word_count[31:16] | opcode[15:0]`, where the word count includes the header itself.

use crate::common::constants::{OPCODE_MASK, WORD_COUNT_MASK, WORD_COUNT_SHIFT};
use crate::isa::opcode::Opcode;

/// Trait for extracting header fields from an instruction header word.
///
/// Either field can be read on its own; [`split_header`] returns both.
pub trait HeaderBits {
    /// Extracts the word count field (bits 16-31).
    fn word_count(&self) -> u16;

    /// Extracts the raw opcode field (bits 0-15).
    ///
    /// The value is not checked against [`Opcode`]; see [`Opcode::try_from`].
    fn opcode_bits(&self) -> u16;
}

impl HeaderBits for u32 {
    #[inline(always)]
    fn word_count(&self) -> u16 {
        ((self >> WORD_COUNT_SHIFT) & WORD_COUNT_MASK) as u16
    }

    #[inline(always)]
    fn opcode_bits(&self) -> u16 {
        (self & OPCODE_MASK) as u16
    }
}

/// Builds a header word from a word count and an opcode.
///
/// # Arguments
///
/// * `word_count` - Total words in the instruction, header included.
/// * `opcode` - The instruction's opcode.
#[inline(always)]
pub const fn make_header(word_count: u16, opcode: Opcode) -> u32 {
    make_header_raw(word_count, opcode as u16)
}

/// Builds a header word from a word count and a raw opcode value.
#[inline(always)]
pub const fn make_header_raw(word_count: u16, opcode: u16) -> u32 {
    (opcode as u32) | ((word_count as u32) << WORD_COUNT_SHIFT)
}

/// Splits a header word into `(word_count, opcode)`.
///
/// Pure bit extraction: neither field is validated.
#[inline(always)]
pub fn split_header(word: u32) -> (u16, u16) {
    (word.word_count(), word.opcode_bits())
}
