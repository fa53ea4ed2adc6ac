//! # Instruction Stream Tests
//!
//! Verifies header-driven iteration and the stream's error reporting.

use pretty_assertions::assert_eq;
use spvword_core::isa::header::{make_header, make_header_raw};
use spvword_core::isa::stream::{InstructionStream, decode_all};
use spvword_core::{Endianness, Error, Opcode};

use crate::common::builder::StreamBuilder;
use crate::common::harness::init_tracing;

fn sample() -> StreamBuilder {
    StreamBuilder::new()
        .inst(Opcode::TypeInt, &[1, 32, 0])
        .inst(Opcode::Label, &[2])
        .inst(Opcode::Branch, &[3])
        .inst(Opcode::Return, &[])
}

#[test]
fn decodes_every_instruction() {
    init_tracing();
    let insts = decode_all(&sample().build(), Endianness::host()).unwrap();
    let ops: Vec<Opcode> = insts.iter().map(|i| i.opcode()).collect();
    assert_eq!(
        ops,
        vec![Opcode::TypeInt, Opcode::Label, Opcode::Branch, Opcode::Return]
    );
    assert_eq!(insts[0].operands(), &[1, 32, 0]);
}

#[test]
fn decodes_foreign_order_stream() {
    init_tracing();
    let foreign = Endianness::host().swapped();
    let insts = decode_all(&sample().build_as(foreign), foreign).unwrap();
    assert_eq!(insts.len(), 4);
    assert_eq!(insts[2].words(), &[make_header(2, Opcode::Branch), 3]);
}

#[test]
fn offset_tracks_progress() {
    let words = sample().build();
    let mut stream = InstructionStream::new(&words, Endianness::host());
    assert_eq!(stream.offset(), 0);
    assert!(stream.next().is_some_and(|r| r.is_ok()));
    assert_eq!(stream.offset(), 4);
    assert!(stream.next().is_some_and(|r| r.is_ok()));
    assert_eq!(stream.offset(), 6);
}

#[test]
fn starts_at_given_offset() {
    let words = sample().build();
    let stream = InstructionStream::with_offset(&words, Endianness::host(), 6);
    assert_eq!(stream.count(), 2);
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(decode_all(&[], Endianness::host()), Ok(vec![]));
}

#[test]
fn zero_word_count_stops_stream() {
    init_tracing();
    let words = StreamBuilder::new()
        .inst(Opcode::Nop, &[])
        .raw(&[0])
        .inst(Opcode::Nop, &[])
        .build();
    let results: Vec<_> = InstructionStream::new(&words, Endianness::host()).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1], Err(Error::WordCountZero { offset: 1 }));
}

#[test]
fn truncated_instruction_is_reported() {
    let words = StreamBuilder::new()
        .raw(&[make_header(4, Opcode::TypeInt), 1])
        .build();
    assert_eq!(
        decode_all(&words, Endianness::host()),
        Err(Error::Truncated {
            offset: 0,
            needed: 4,
            available: 2,
        })
    );
}

#[test]
fn unknown_opcode_is_reported() {
    let words = [make_header_raw(1, 9)];
    assert_eq!(
        decode_all(&words, Endianness::host()),
        Err(Error::UnknownOpcode(9))
    );
}

#[test]
fn module_body_starts_after_header() {
    let words = StreamBuilder::module(0x0008_000B, 4)
        .inst(Opcode::Capability, &[1])
        .build();
    let insts: Vec<_> = InstructionStream::with_offset(&words, Endianness::host(), 5)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(insts.len(), 1);
    assert_eq!(insts[0].opcode(), Opcode::Capability);
}
