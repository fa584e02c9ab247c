//! End-to-end decoding through the public API.

use mcs96_disasm::decoder::parse;
use mcs96_disasm::displacement::short_offset;
use mcs96_disasm::flow::{ControlFlow, Edge};
use mcs96_disasm::mnemonic::Mnemonic;
use mcs96_disasm::operand::AddressingMode;
use mcs96_disasm::{DecodeError, Decoder, Mcs96Decoder};
use rstest::rstest;

#[test]
fn test_short_jump_scenario() {
    let insn = parse(&[0x20, 0x05], 0x100).unwrap();

    assert_eq!(insn.to_string(), "SJMP 0x107");
    let edges = &insn.flow.jumps[&0x107];
    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].from, edges[0].to), (0x100, 0x107));
}

#[test]
fn test_push_scenario() {
    for address in [0, 0x2000, 0xFFFE] {
        let insn = parse(&[0xC8, 0x10], address).unwrap();
        assert_eq!(insn.vars.len(), 1);
        assert_eq!(insn.operand_text(), "R_10");
        assert_eq!(insn.flow.xrefs[&0x10][0].from, address);
    }
}

#[rstest]
#[case(0x20, 0x00, 0)]
#[case(0x23, 0xFF, 1023)]
#[case(0x24, 0x00, -1024)]
#[case(0x27, 0xFF, -1)]
fn test_short_displacement_range(#[case] opcode: u8, #[case] low: u8, #[case] expected: i32) {
    assert_eq!(short_offset(opcode, low), expected);
}

#[test]
fn test_signed_prefix_scenario() {
    let signed = parse(&[0xFE, 0x4C, 0x30, 0x32, 0x34], 0).unwrap();
    let unsigned = parse(&[0x4C, 0x30, 0x32, 0x34], 0).unwrap();

    assert_eq!(signed.mnemonic, Mnemonic::Mul);
    assert_eq!(unsigned.mnemonic, Mnemonic::Mulu);
    assert_eq!(signed.byte_length, unsigned.byte_length + 1);
    assert!(signed.to_string().starts_with("SGN MUL "));
}

#[test]
fn test_unknown_opcode_scenario() {
    let err = Mcs96Decoder::new().decode(&[0xFE, 0x00, 0x00], 0).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownOpcode { opcode: 0x00, signed: true }));
    assert_eq!(err.byte_length(), 1);
}

#[test]
fn test_indexed_length_round_trip() {
    // ADDB R_34, R_32, 0x10[R_20] and its long form
    let short = parse(&[0x57, 0x20, 0x10, 0x32, 0x34], 0).unwrap();
    let long = parse(&[0x57, 0x21, 0x10, 0x00, 0x32, 0x34], 0).unwrap();

    assert_eq!(short.mode, AddressingMode::ShortIndexed);
    assert_eq!(long.mode, AddressingMode::LongIndexed);
    assert_eq!(long.byte_length, short.byte_length + 1);
}

#[test]
fn test_xref_deduplication() {
    let edge = |from| Edge {
        text: "R_30".to_string(),
        mnemonic: "LD".to_string(),
        from,
        to: 0x30,
    };
    let mut flow = ControlFlow::new();
    flow.xref(edge(0x2000));
    flow.xref(edge(0x2000));
    assert_eq!(flow.xrefs[&0x30].len(), 1);
    flow.xref(edge(0x2004));
    assert_eq!(flow.xrefs[&0x30].len(), 2);
}

#[test]
fn test_decoding_is_deterministic() {
    let decoder = Mcs96Decoder::new().with_register_names(true);
    let samples: [&[u8]; 5] = [
        &[0x47, 0x21, 0x34, 0x12, 0x32, 0x30],
        &[0xFE, 0x6C, 0x18, 0x30],
        &[0xE2, 0x30, 0x7F, 0x32],
        &[0xF1, 0x00, 0x10, 0x00],
        &[0x3B, 0x24, 0x10],
    ];
    for bytes in samples {
        let first = decoder.decode(bytes, 0x4000).unwrap();
        let second = decoder.decode(bytes, 0x4000).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_truncated_input_fails_fast() {
    let err = parse(&[0xEF, 0x00], 0).unwrap_err();
    assert_eq!(err, DecodeError::Truncated { needed: 3, available: 2 });
}

#[test]
fn test_extended_call_masked() {
    // ECALL -5 from 0: wraps below zero into the top of the 21-bit space
    let insn = parse(&[0xF1, 0xFB, 0xFF, 0xFF], 0).unwrap();
    assert_eq!(insn.mnemonic, Mnemonic::Ecall);
    assert!(insn.flow.calls.contains_key(&0x1F_FFFF));
}
