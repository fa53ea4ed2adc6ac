//! Binary layout constants.
//!
//! Values shared by the word codec, the module header parser and the
//! instruction stream.

/// Bit mask for the opcode field of an instruction header (bits 0-15).
pub const OPCODE_MASK: u32 = 0x0000_FFFF;

/// Bit mask for the word count field once shifted down (16 bits).
pub const WORD_COUNT_MASK: u32 = 0x0000_FFFF;

/// Shift of the word count field inside an instruction header (bits 16-31).
pub const WORD_COUNT_SHIFT: u32 = 16;

/// SPIR-V module magic number, as read in the module's own byte order.
pub const MAGIC_NUMBER: u32 = 0x0723_0203;

/// Number of words in the module header (magic, version, generator, bound, schema).
pub const MODULE_HEADER_WORDS: usize = 5;

/// Shift of the tool id inside the generator word (bits 16-31).
pub const GENERATOR_TOOL_SHIFT: u32 = 16;

/// Bit mask for the tool-specific version inside the generator word (bits 0-15).
pub const GENERATOR_VERSION_MASK: u32 = 0x0000_FFFF;

/// Display string returned for generator ids absent from the registry.
pub const UNKNOWN_GENERATOR: &str = "Unknown";

/// Placeholder mnemonic returned when the descriptor table has no entry (release builds only).
pub const UNKNOWN_OPCODE_NAME: &str = "unknown";
