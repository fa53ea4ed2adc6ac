//! Error definitions.
//!
//! Two classes of failure exist in this crate:
//! 1. **Data errors:** Malformed or foreign input (unknown opcode values, truncated
//!    streams, a bad magic number). These are ordinary [`Error`] variants.
//! 2. **Internal-consistency violations:** A broken invariant between the opcode
//!    enumeration and its tables, or a caller passing a wrong endianness/length for
//!    input it claims to have validated. These are wrapped in [`Error::Internal`]; in
//!    debug builds they abort before an error value is ever produced.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the codec, resolvers and stream walker.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A 16-bit opcode value that no [`crate::Opcode`] variant carries.
    #[error("unknown opcode {0}")]
    UnknownOpcode(u32),

    /// An instruction header declaring zero words.
    #[error("instruction at word {offset} has a word count of zero")]
    WordCountZero {
        /// Word offset of the offending header.
        offset: usize,
    },

    /// An instruction whose declared word count runs past the end of the stream.
    #[error("instruction at word {offset} needs {needed} words but only {available} remain")]
    Truncated {
        /// Word offset of the offending header.
        offset: usize,
        /// Declared word count.
        needed: usize,
        /// Words left in the stream, header included.
        available: usize,
    },

    /// The first module word is not the SPIR-V magic number in the expected byte order.
    #[error("invalid magic number {0:#010x}")]
    BadMagic(u32),

    /// Fewer words than the five-word module header.
    #[error("module header needs 5 words, found {0}")]
    ShortHeader(usize),

    /// A byte buffer whose length is not a multiple of four.
    #[error("binary length {0} is not a multiple of 4")]
    UnalignedLength(usize),

    /// Malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A broken internal invariant; see [`InternalError`].
    #[error("internal consistency failure: {0}")]
    Internal(#[from] InternalError),
}

/// Internal-consistency violations.
///
/// These never describe bad user input. They are raised when the crate's own tables
/// disagree, or when a caller hands the word copier a header that does not match the
/// bytes it points at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InternalError {
    /// The re-split header disagrees with the caller-declared opcode or word count.
    #[error(
        "header mismatch: expected opcode {expected_opcode} with {expected_word_count} words, \
         found opcode {found_opcode} with {found_word_count} words"
    )]
    HeaderMismatch {
        /// Opcode the caller declared.
        expected_opcode: u16,
        /// Word count the caller declared.
        expected_word_count: u16,
        /// Opcode recovered from the corrected header.
        found_opcode: u16,
        /// Word count recovered from the corrected header.
        found_word_count: u16,
    },

    /// The source slice holds fewer words than the caller-declared word count.
    #[error("short input: {declared} words declared, {available} available")]
    ShortInput {
        /// Word count the caller declared.
        declared: u16,
        /// Length of the source slice.
        available: usize,
    },

    /// An opcode with no entry in the instruction descriptor table.
    #[error("opcode {0} has no instruction descriptor")]
    MissingDescriptor(u32),
}

impl Error {
    /// Returns `true` for internal-consistency violations.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

/// Reports an internal-consistency violation.
///
/// The violation is always logged. Debug builds then abort; release builds return so the
/// caller can take its deterministic degraded path.
#[track_caller]
pub(crate) fn report_internal(err: &InternalError) {
    tracing::error!(%err, "internal consistency failure");
    if cfg!(debug_assertions) {
        panic!("internal consistency failure: {err}");
    }
}
