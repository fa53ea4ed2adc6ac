//! # Descriptor Table Tests
//!
//! Verifies the instruction descriptor table and mnemonic resolution.

use rstest::rstest;
use spvword_core::isa::grammar::{
    instruction_table, lookup_opcode, lookup_opcode_by_name, opcode_name, opcode_name_raw,
    try_opcode_name,
};
use spvword_core::{Error, Opcode};

#[test]
fn table_is_strictly_ascending() {
    let table = instruction_table();
    assert!(table.windows(2).all(|w| w[0].opcode() < w[1].opcode()));
}

#[test]
fn every_opcode_has_exactly_one_descriptor() {
    assert_eq!(instruction_table().len(), Opcode::ALL.len());
    for &op in Opcode::ALL {
        let desc = lookup_opcode(u32::from(op)).unwrap();
        assert_eq!(desc.opcode(), op);
        assert!(desc.name().starts_with("Op"), "{}", desc.name());
    }
}

#[rstest]
#[case(Opcode::Nop, "OpNop")]
#[case(Opcode::TypeInt, "OpTypeInt")]
#[case(Opcode::Branch, "OpBranch")]
#[case(Opcode::AtomicCompareExchangeWeak, "OpAtomicCompareExchangeWeak")]
#[case(Opcode::DecorateString, "OpDecorateString")]
fn resolves_mnemonic(#[case] op: Opcode, #[case] expected: &str) {
    assert_eq!(opcode_name(op), expected);
    assert_eq!(opcode_name_raw(u32::from(op)), expected);
}

#[test]
fn lookup_of_unassigned_value_fails() {
    assert_eq!(lookup_opcode(9), Err(Error::UnknownOpcode(9)));
    assert_eq!(lookup_opcode(0x1_0000), Err(Error::UnknownOpcode(0x1_0000)));
}

#[test]
fn lookup_by_name_uses_canonical_spelling() {
    assert_eq!(
        lookup_opcode_by_name("OpTypeInt").map(|d| d.opcode()),
        Some(Opcode::TypeInt)
    );
    assert!(lookup_opcode_by_name("TypeInt").is_none());
    assert!(lookup_opcode_by_name("OpDecorateStringGOOGLE").is_none());
}

#[test]
fn try_name_reports_missing_descriptor() {
    let err = try_opcode_name(9).unwrap_err();
    assert!(err.is_internal());
    assert_eq!(err.to_string(), "internal consistency failure: opcode 9 has no instruction descriptor");
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "no instruction descriptor"))]
fn raw_name_of_unassigned_value_degrades_to_placeholder() {
    assert_eq!(opcode_name_raw(9), "unknown");
}
