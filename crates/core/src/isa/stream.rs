//! Header-driven instruction iteration.
//!
//! Walks a word slice one instruction at a time: correct the header word, split it,
//! check the declared size against what is left, then hand the run to
//! [`copy_instruction`]. Operands are not inspected.

use tracing::debug;

use crate::common::endian::{Endianness, fix_word};
use crate::common::error::{Error, Result};
use crate::isa::header::split_header;
use crate::isa::instruction::{Instruction, copy_instruction};
use crate::isa::opcode::Opcode;

/// Iterator over the instructions in a word slice.
///
/// Yields `Err` at most once; iteration ends after the first error.
#[derive(Clone, Debug)]
pub struct InstructionStream<'a> {
    words: &'a [u32],
    endian: Endianness,
    offset: usize,
    failed: bool,
}

impl<'a> InstructionStream<'a> {
    /// Creates a stream over `words`, which must start at an instruction boundary.
    pub const fn new(words: &'a [u32], endian: Endianness) -> Self {
        Self {
            words,
            endian,
            offset: 0,
            failed: false,
        }
    }

    /// Creates a stream starting `offset` words into `words`.
    pub const fn with_offset(words: &'a [u32], endian: Endianness, offset: usize) -> Self {
        Self {
            words,
            endian,
            offset,
            failed: false,
        }
    }

    /// Word offset of the next instruction.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    fn decode_next(&mut self) -> Result<Instruction> {
        let offset = self.offset;
        let rest = &self.words[offset..];
        let (word_count, opcode) = split_header(fix_word(rest[0], self.endian));

        if word_count == 0 {
            return Err(Error::WordCountZero { offset });
        }
        let needed = usize::from(word_count);
        if needed > rest.len() {
            return Err(Error::Truncated {
                offset,
                needed,
                available: rest.len(),
            });
        }
        let opcode = Opcode::try_from(opcode)?;

        let inst = copy_instruction(rest, opcode, word_count, self.endian)?;
        self.offset += needed;
        Ok(inst)
    }
}

impl Iterator for InstructionStream<'_> {
    type Item = Result<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.words.len() {
            return None;
        }
        let result = self.decode_next();
        if let Err(err) = &result {
            debug!(offset = self.offset, %err, "instruction stream stopped");
            self.failed = true;
        }
        Some(result)
    }
}

/// Collects every instruction in `words`, stopping at the first error.
pub fn decode_all(words: &[u32], endian: Endianness) -> Result<Vec<Instruction>> {
    InstructionStream::new(words, endian).collect()
}
