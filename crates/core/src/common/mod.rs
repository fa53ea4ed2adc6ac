//! Common utilities and types used throughout the codec.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Header layout masks, the module magic number and header size.
//! 2. **Endianness:** Source byte-order tags and the per-word correction transform.
//! 3. **Error Handling:** Data errors and internal-consistency violations.

/// Header layout and module-level constants.
pub mod constants;

/// Byte-order tags and word correction.
pub mod endian;

/// Error types.
pub mod error;

pub use constants::{MAGIC_NUMBER, MODULE_HEADER_WORDS, OPCODE_MASK, WORD_COUNT_SHIFT};
pub use endian::{Endianness, fix_word};
pub use error::{Error, InternalError, Result};
