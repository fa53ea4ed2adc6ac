//! Instruction records and the word copier.
//!
//! [`copy_instruction`] materialises an [`Instruction`] from a run of raw words,
//! correcting each word into host byte order and then checking that the corrected
//! header agrees with what the caller declared.

use tracing::trace;

use crate::common::endian::{Endianness, fix_word};
use crate::common::error::{InternalError, Result, report_internal};
use crate::isa::header::split_header;
use crate::isa::opcode::Opcode;

/// A decoded instruction: its opcode and host-order words, header included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    opcode: Opcode,
    words: Vec<u32>,
}

impl Instruction {
    /// The instruction's opcode.
    #[inline]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Number of words, header included.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// All words in host order; `words()[0]` is the header.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// The words following the header.
    #[inline]
    pub fn operands(&self) -> &[u32] {
        self.words.get(1..).unwrap_or(&[])
    }

    /// Returns the operand at `index`, counted from the first word after the header.
    #[inline]
    pub fn operand(&self, index: usize) -> Option<u32> {
        self.operands().get(index).copied()
    }

    /// Consumes the record, returning its words.
    pub fn into_words(self) -> Vec<u32> {
        self.words
    }
}

/// Copies `word_count` raw words into a new [`Instruction`], fixing byte order.
///
/// The caller has already split the header and declares the opcode and word count it
/// found. After correcting word 0 the header is split again and compared with those
/// declarations. A disagreement means the endianness tag or the declared header is
/// wrong, which is a programming defect rather than bad input: debug builds abort and
/// release builds return [`InternalError::HeaderMismatch`].
///
/// # Arguments
///
/// * `words` - Raw in-memory words; at least `word_count` long.
/// * `opcode` - Opcode the caller decoded from the header.
/// * `word_count` - Word count the caller decoded from the header.
/// * `endian` - Byte order of `words`.
pub fn copy_instruction(
    words: &[u32],
    opcode: Opcode,
    word_count: u16,
    endian: Endianness,
) -> Result<Instruction> {
    let count = usize::from(word_count);
    let Some(source) = words.get(..count) else {
        let err = InternalError::ShortInput {
            declared: word_count,
            available: words.len(),
        };
        report_internal(&err);
        return Err(err.into());
    };

    let mut fixed = Vec::with_capacity(count);
    fixed.extend(source.iter().map(|&word| fix_word(word, endian)));

    if let Some(&header) = fixed.first() {
        let (found_word_count, found_opcode) = split_header(header);
        if found_opcode != opcode.code() || found_word_count != word_count {
            let err = InternalError::HeaderMismatch {
                expected_opcode: opcode.code(),
                expected_word_count: word_count,
                found_opcode,
                found_word_count,
            };
            report_internal(&err);
            return Err(err.into());
        }
    }

    trace!(%opcode, word_count, ?endian, "copied instruction");
    Ok(Instruction {
        opcode,
        words: fixed,
    })
}
