//! Word stream builder.

use spvword_core::common::MAGIC_NUMBER;
use spvword_core::isa::header::make_header;
use spvword_core::{Endianness, Opcode};

/// Builds a word stream one instruction at a time, in host order.
#[derive(Debug, Default)]
pub struct StreamBuilder {
    words: Vec<u32>,
}

impl StreamBuilder {
    /// An empty bare instruction stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stream that starts with a module header (version 1.5, the given generator and bound).
    pub fn module(generator: u32, bound: u32) -> Self {
        Self {
            words: vec![MAGIC_NUMBER, 0x0001_0500, generator, bound, 0],
        }
    }

    /// Appends an instruction with the given operands; the header is computed.
    pub fn inst(mut self, opcode: Opcode, operands: &[u32]) -> Self {
        let word_count = u16::try_from(operands.len() + 1).unwrap();
        self.words.push(make_header(word_count, opcode));
        self.words.extend_from_slice(operands);
        self
    }

    /// Appends raw words verbatim.
    pub fn raw(mut self, words: &[u32]) -> Self {
        self.words.extend_from_slice(words);
        self
    }

    /// The words in host order.
    pub fn build(self) -> Vec<u32> {
        self.words
    }

    /// The words as they would sit in memory if written in `endian` order.
    pub fn build_as(self, endian: Endianness) -> Vec<u32> {
        if endian.needs_swap() {
            self.words.iter().map(|w| w.swap_bytes()).collect()
        } else {
            self.words
        }
    }
}
