//! SPIR-V instruction-word codec and opcode classification library.
//!
//! This crate implements the layer every SPIR-V consumer starts from:
//! 1. **Word Codec:** Packing and splitting the 32-bit `word_count | opcode` header.
//! 2. **Word Copier:** Endian-correcting a run of raw words into an [`Instruction`] record.
//! 3. **Classifier:** Total predicates over [`Opcode`] grouped by semantic category, plus the
//!    memory-semantics operand table.
//! 4. **Resolvers:** Opcode mnemonics and generator (vendor/tool) names.
//! 5. **Streams:** Module header parsing and a header-driven instruction iterator.

/// Common types (endianness, constants, errors).
pub mod common;
/// Workspace configuration (stream endianness, module header handling).
pub mod config;
/// Instruction set (opcodes, descriptor table, codec, copier, classifier).
pub mod isa;
/// Generator id registry (vendor and tool names).
pub mod vendor;

/// Crate-wide error type; internal-consistency failures live under [`common::InternalError`].
pub use crate::common::{Endianness, Error, Result};
/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
/// Decoded instruction record produced by [`isa::instruction::copy_instruction`].
pub use crate::isa::instruction::Instruction;
/// Closed enumeration of SPIR-V opcodes.
pub use crate::isa::opcode::Opcode;
