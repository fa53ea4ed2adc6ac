//! # Memory-Semantics Operand Tests
//!
//! Verifies operand positions for barriers and atomics and the empty result
//! for everything else.

use rstest::rstest;
use spvword_core::Opcode;
use spvword_core::isa::memory::memory_semantics_operand_indices;

#[rstest]
#[case(Opcode::MemoryBarrier, &[1])]
#[case(Opcode::ControlBarrier, &[2])]
#[case(Opcode::AtomicStore, &[2])]
#[case(Opcode::AtomicFlagClear, &[2])]
#[case(Opcode::MemoryNamedBarrier, &[2])]
#[case(Opcode::AtomicLoad, &[4])]
#[case(Opcode::AtomicIAdd, &[4])]
#[case(Opcode::AtomicFlagTestAndSet, &[4])]
#[case(Opcode::AtomicFMinEXT, &[4])]
#[case(Opcode::AtomicFMaxEXT, &[4])]
#[case(Opcode::AtomicCompareExchange, &[4, 5])]
#[case(Opcode::AtomicCompareExchangeWeak, &[4, 5])]
fn semantics_positions(#[case] op: Opcode, #[case] expected: &[u32]) {
    assert_eq!(memory_semantics_operand_indices(op), expected);
    assert_eq!(op.memory_semantics_operand_indices(), expected);
}

#[rstest]
#[case(Opcode::IAdd)]
#[case(Opcode::Load)]
#[case(Opcode::Store)]
#[case(Opcode::TypeInt)]
fn unrelated_opcodes_have_none(#[case] op: Opcode) {
    assert!(memory_semantics_operand_indices(op).is_empty());
}

#[test]
fn every_atomic_has_semantics() {
    for &op in Opcode::ALL {
        if op.is_atomic_op() {
            assert!(!memory_semantics_operand_indices(op).is_empty(), "{op}");
        }
    }
}

#[test]
fn positions_are_ascending() {
    for &op in Opcode::ALL {
        let positions = memory_semantics_operand_indices(op);
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{op}");
    }
}
