//! Memory-semantics operand positions.
//!
//! Positions index the instruction's operand list (the words after the header), with
//! result type and result id counted where the instruction has them. For example
//! `OpAtomicLoad` is `<result type> <result id> <pointer> <scope> <semantics>`, so its
//! semantics operand sits at position 4.

use crate::isa::opcode::Opcode;
use crate::isa::opcode::Opcode as Op;

/// `OpMemoryBarrier <scope> <semantics>`.
const BARRIER: &[u32] = &[1];
/// Stores, control barriers and flag clears: no result, semantics third.
const NO_RESULT: &[u32] = &[2];
/// Value-returning atomics: semantics after result type, id, pointer and scope.
const WITH_RESULT: &[u32] = &[4];
/// Compare-exchange: the `Equal` then `Unequal` semantics.
const COMPARE_EXCHANGE: &[u32] = &[4, 5];
const NONE: &[u32] = &[];

/// Returns the operand positions holding a memory-semantics id, in operand order.
///
/// Barriers and single-order atomics yield one position, compare-exchange yields the
/// success and failure orders, and every other opcode yields an empty slice.
pub const fn memory_semantics_operand_indices(op: Opcode) -> &'static [u32] {
    match op {
        Op::MemoryBarrier => BARRIER,
        Op::AtomicStore | Op::ControlBarrier | Op::AtomicFlagClear | Op::MemoryNamedBarrier => {
            NO_RESULT
        }
        // The float min/max atomics share the integer forms' layout. Some registry
        // tables leave them out and report no semantics operand.
        Op::AtomicLoad
        | Op::AtomicExchange
        | Op::AtomicIIncrement
        | Op::AtomicIDecrement
        | Op::AtomicIAdd
        | Op::AtomicFAddEXT
        | Op::AtomicISub
        | Op::AtomicSMin
        | Op::AtomicUMin
        | Op::AtomicFMinEXT
        | Op::AtomicSMax
        | Op::AtomicUMax
        | Op::AtomicFMaxEXT
        | Op::AtomicAnd
        | Op::AtomicOr
        | Op::AtomicXor
        | Op::AtomicFlagTestAndSet => WITH_RESULT,
        Op::AtomicCompareExchange | Op::AtomicCompareExchangeWeak => COMPARE_EXCHANGE,
        _ => NONE,
    }
}

impl Opcode {
    /// Method form of [`memory_semantics_operand_indices`].
    #[inline]
    pub const fn memory_semantics_operand_indices(self) -> &'static [u32] {
        memory_semantics_operand_indices(self)
    }
}
