//! SPIR-V instruction set definitions.
//!
//! Contains the opcode enumeration, the instruction descriptor table, the header
//! word codec and the opcode classifier.
//!
//! # Layout
//!
//! * `opcode` / `grammar`: The closed opcode set and its mnemonics.
//! * `header` / `instruction`: Header packing and the endian-correcting word copier.
//! * `classify` / `memory` / `category`: Semantic predicates and the tables built on them.
//! * `module` / `stream`: Module header parsing and instruction iteration.

/// Per-opcode category bitsets built from the classifier.
pub mod category;

/// Opcode classification predicates.
pub mod classify;

/// Instruction descriptor table and mnemonic lookup.
pub mod grammar;

/// Instruction header word codec.
pub mod header;

/// Instruction records and the word copier.
pub mod instruction;

/// Memory-semantics operand positions.
pub mod memory;

/// Five-word module header.
pub mod module;

/// Opcode enumeration.
pub mod opcode;

/// Instruction iteration over word slices.
pub mod stream;

pub use category::{Categories, Category, categories};
pub use grammar::{InstructionDesc, lookup_opcode, opcode_name, opcode_name_raw};
pub use header::{HeaderBits, make_header, split_header};
pub use instruction::{Instruction, copy_instruction};
pub use memory::memory_semantics_operand_indices;
pub use module::ModuleHeader;
pub use opcode::Opcode;
pub use stream::InstructionStream;
