//! # Endianness Tests
//!
//! Verifies byte-order tags, the per-word correction transform and raw
//! byte buffer conversion.

use rstest::rstest;
use spvword_core::Error;
use spvword_core::common::endian::{Endianness, fix_word, raw_words};

#[test]
fn host_order_is_identity() {
    let host = Endianness::host();
    assert_eq!(fix_word(0x0723_0203, host), 0x0723_0203);
    assert!(!host.needs_swap());
}

#[test]
fn foreign_order_is_byte_swapped() {
    let foreign = Endianness::host().swapped();
    assert!(foreign.needs_swap());
    assert_eq!(fix_word(0x0302_2307, foreign), 0x0723_0203);
    assert_eq!(fix_word(0x1122_3344, foreign), 0x4433_2211);
}

#[test]
fn swapped_is_an_involution() {
    assert_eq!(Endianness::Little.swapped(), Endianness::Big);
    assert_eq!(Endianness::Big.swapped().swapped(), Endianness::Big);
}

#[rstest]
#[case("little", Endianness::Little)]
#[case("LE", Endianness::Little)]
#[case("big", Endianness::Big)]
#[case("Be", Endianness::Big)]
fn parses_endianness_names(#[case] text: &str, #[case] expected: Endianness) {
    assert_eq!(text.parse::<Endianness>(), Ok(expected));
}

#[test]
fn rejects_unknown_endianness_name() {
    assert!(matches!("middle".parse::<Endianness>(), Err(Error::Config(_))));
}

#[test]
fn raw_words_keeps_memory_order() {
    let bytes = [0x03, 0x02, 0x23, 0x07, 0xAA, 0xBB, 0xCC, 0xDD];
    let words = raw_words(&bytes).unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0], u32::from_ne_bytes([0x03, 0x02, 0x23, 0x07]));
    assert_eq!(fix_word(words[0], Endianness::Little), 0x0723_0203);
    assert_eq!(fix_word(words[1], Endianness::Big), 0xAABB_CCDD);
}

#[test]
fn raw_words_rejects_partial_word() {
    assert_eq!(raw_words(&[1, 2, 3, 4, 5]), Err(Error::UnalignedLength(5)));
}
