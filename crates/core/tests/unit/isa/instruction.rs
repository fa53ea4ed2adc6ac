//! # Word Copier Tests
//!
//! Verifies endian correction, header re-validation and the internal-consistency
//! failure paths of `copy_instruction`.

use pretty_assertions::assert_eq;
use spvword_core::common::error::InternalError;
use spvword_core::isa::header::make_header;
use spvword_core::isa::instruction::copy_instruction;
use spvword_core::{Endianness, Error, Opcode};

#[test]
fn swaps_words_from_foreign_order() {
    let foreign = Endianness::host().swapped();
    let raw = [
        make_header(2, Opcode::Branch).swap_bytes(),
        0x0000_002A_u32.swap_bytes(),
    ];

    let inst = copy_instruction(&raw, Opcode::Branch, 2, foreign).unwrap();
    assert_eq!(inst.opcode(), Opcode::Branch);
    assert_eq!(inst.words(), &[0x0002_00F9, 0x0000_002A]);
}

#[test]
fn foreign_order_matches_byte_swapped_scenario_words() {
    let source = Endianness::host().swapped();
    let raw = [0x0002_00F9_u32.swap_bytes(), 0x0000_002A_u32.swap_bytes()];
    assert_eq!(raw, [0xF900_0200, 0x2A00_0000]);
    let inst = copy_instruction(&raw, Opcode::Branch, 2, source).unwrap();
    assert_eq!(inst.words(), &[0x0002_00F9, 0x0000_002A]);
}

#[test]
fn host_order_copies_verbatim() {
    let raw = [make_header(4, Opcode::TypeInt), 1, 32, 1];
    let inst = copy_instruction(&raw, Opcode::TypeInt, 4, Endianness::host()).unwrap();
    assert_eq!(inst.words(), &raw[..]);
    assert_eq!(inst.word_count(), 4);
    assert_eq!(inst.operands(), &[1, 32, 1]);
    assert_eq!(inst.operand(1), Some(32));
    assert_eq!(inst.operand(3), None);
}

#[test]
fn copies_only_the_declared_run() {
    let raw = [make_header(2, Opcode::Branch), 7, make_header(1, Opcode::Return)];
    let inst = copy_instruction(&raw, Opcode::Branch, 2, Endianness::host()).unwrap();
    assert_eq!(inst.into_words(), vec![make_header(2, Opcode::Branch), 7]);
}

#[test]
fn zero_word_count_yields_empty_record() {
    let inst = copy_instruction(&[], Opcode::Nop, 0, Endianness::host()).unwrap();
    assert!(inst.words().is_empty());
    assert!(inst.operands().is_empty());
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "header mismatch"))]
fn header_mismatch_is_internal_error() {
    let raw = [make_header(2, Opcode::Branch), 7];
    let result = copy_instruction(&raw, Opcode::Return, 2, Endianness::host());
    assert_eq!(
        result,
        Err(Error::Internal(InternalError::HeaderMismatch {
            expected_opcode: 253,
            expected_word_count: 2,
            found_opcode: 249,
            found_word_count: 2,
        }))
    );
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "header mismatch"))]
fn wrong_byte_order_tag_is_detected() {
    let raw = [make_header(2, Opcode::Branch), 7];
    let result = copy_instruction(&raw, Opcode::Branch, 2, Endianness::host().swapped());
    assert!(result.as_ref().is_err_and(Error::is_internal), "got {result:?}");
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "short input"))]
fn short_input_is_internal_error() {
    let raw = [make_header(4, Opcode::TypeInt), 1];
    let result = copy_instruction(&raw, Opcode::TypeInt, 4, Endianness::host());
    assert_eq!(
        result,
        Err(Error::Internal(InternalError::ShortInput {
            declared: 4,
            available: 2,
        }))
    );
}
