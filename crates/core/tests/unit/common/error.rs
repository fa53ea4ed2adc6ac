//! # Error Tests
//!
//! Checks error display text and the data/internal split.

use spvword_core::Error;
use spvword_core::common::InternalError;

#[test]
fn unknown_opcode_display() {
    assert_eq!(Error::UnknownOpcode(9).to_string(), "unknown opcode 9");
}

#[test]
fn truncated_display_names_all_counts() {
    let err = Error::Truncated {
        offset: 5,
        needed: 4,
        available: 2,
    };
    let text = err.to_string();
    assert!(text.contains("word 5"), "got '{text}'");
    assert!(text.contains("needs 4"), "got '{text}'");
    assert!(text.contains("2 remain"), "got '{text}'");
}

#[test]
fn bad_magic_display_is_hex() {
    assert_eq!(
        Error::BadMagic(0x0302_2307).to_string(),
        "invalid magic number 0x03022307"
    );
}

#[test]
fn internal_errors_are_flagged() {
    let err: Error = InternalError::MissingDescriptor(2).into();
    assert!(err.is_internal());
    assert!(err.to_string().contains("no instruction descriptor"));
    assert!(!Error::WordCountZero { offset: 0 }.is_internal());
}

#[test]
fn header_mismatch_display() {
    let err = InternalError::HeaderMismatch {
        expected_opcode: 21,
        expected_word_count: 4,
        found_opcode: 5376,
        found_word_count: 1024,
    };
    let text = err.to_string();
    assert!(text.contains("expected opcode 21 with 4 words"), "got '{text}'");
    assert!(text.contains("found opcode 5376 with 1024 words"), "got '{text}'");
}
