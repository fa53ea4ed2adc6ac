//! Instruction descriptor table and opcode name resolution.
//!
//! Every [`Opcode`] variant owns exactly one [`InstructionDesc`]. The table is a
//! static slice generated alongside the enumeration and sorted by opcode value, so
//! lookups are a binary search with no initialisation step.

use crate::common::constants::UNKNOWN_OPCODE_NAME;
use crate::common::error::{Error, InternalError, Result, report_internal};
use crate::isa::opcode::{INSTRUCTION_TABLE, Opcode};

/// Static metadata for one instruction kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionDesc {
    opcode: Opcode,
    name: &'static str,
}

impl InstructionDesc {
    pub(crate) const fn new(opcode: Opcode, name: &'static str) -> Self {
        Self { opcode, name }
    }

    /// The opcode this descriptor belongs to.
    #[inline]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// The instruction mnemonic, including the `Op` prefix.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Returns the full descriptor table, sorted by opcode value.
pub fn instruction_table() -> &'static [InstructionDesc] {
    INSTRUCTION_TABLE
}

/// Looks up the descriptor for a raw opcode value.
///
/// # Returns
///
/// The descriptor, or [`Error::UnknownOpcode`] if the value has none.
pub fn lookup_opcode(opcode: u32) -> Result<&'static InstructionDesc> {
    INSTRUCTION_TABLE
        .binary_search_by_key(&opcode, |desc| u32::from(desc.opcode))
        .map(|index| &INSTRUCTION_TABLE[index])
        .map_err(|_| Error::UnknownOpcode(opcode))
}

/// Looks up a descriptor by its canonical mnemonic (`"OpTypeInt"`).
pub fn lookup_opcode_by_name(name: &str) -> Option<&'static InstructionDesc> {
    INSTRUCTION_TABLE.iter().find(|desc| desc.name == name)
}

/// Resolves a raw opcode value to its mnemonic, treating a missing descriptor as an
/// internal-consistency failure.
pub fn try_opcode_name(opcode: u32) -> Result<&'static str> {
    lookup_opcode(opcode)
        .map(InstructionDesc::name)
        .map_err(|_| InternalError::MissingDescriptor(opcode).into())
}

/// Resolves a raw opcode value to its mnemonic.
///
/// Every defined opcode has a descriptor, so a miss means the caller passed a value
/// that was never validated against [`Opcode`]. Debug builds abort; release builds
/// return the `"unknown"` placeholder.
pub fn opcode_name_raw(opcode: u32) -> &'static str {
    match try_opcode_name(opcode) {
        Ok(name) => name,
        Err(_) => {
            report_internal(&InternalError::MissingDescriptor(opcode));
            UNKNOWN_OPCODE_NAME
        }
    }
}

/// Resolves an opcode to its mnemonic.
#[inline]
pub fn opcode_name(opcode: Opcode) -> &'static str {
    opcode_name_raw(u32::from(opcode))
}
