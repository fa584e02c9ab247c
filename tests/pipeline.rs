//! Image walkers and formatters driven through `disassemble_file`.

use std::io::Write;

use mcs96_disasm::config::DisasmConfig;
use mcs96_disasm::format::OutputFormat;
use mcs96_disasm::strategy::Strategy;
use mcs96_disasm::{disassemble, disassemble_file, Address, Disassembly, DisassemblyError};
use rstest::rstest;

// 0x2000: LD R_30, #0010
// 0x2004: LCALL 0x200C
// 0x2007: DJNZ R_30, 0x2004
// 0x200A: SJMP 0x200A
// 0x200C: CLR R_32
// 0x200E: RET
const PROGRAM: [u8; 15] = [
    0xA1, 0x10, 0x00, 0x30, // LD
    0xEF, 0x05, 0x00, // LCALL +5
    0xE0, 0x30, 0xFA, // DJNZ -6
    0x27, 0xFE, // SJMP -2
    0x01, 0x32, // CLR
    0xF0, // RET
];

const PROGRAM_INSTRUCTIONS: usize = 6;

fn write_image(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

fn config(strategy: Strategy) -> DisasmConfig {
    DisasmConfig {
        base_address: 0x2000,
        strategy,
        ..Default::default()
    }
}

#[test]
fn test_linear_listing() {
    let image = write_image(&PROGRAM);
    let disassembly = disassemble_file(image.path(), &config(Strategy::Linear)).unwrap();

    let text: Vec<String> = disassembly
        .all_instructions()
        .iter()
        .map(|i| i.to_string())
        .collect();
    assert_eq!(
        text,
        vec![
            "LD R_30, #0010",
            "LCALL 0x200C",
            "DJNZ R_30, 0x2004",
            "SJMP 0x200A",
            "CLR R_32",
            "RET",
        ]
    );
}

#[test]
fn test_recursive_blocks() {
    let disassembly = disassemble(&PROGRAM, &config(Strategy::Recursive)).unwrap();
    let blocks = match &disassembly {
        Disassembly::Cfg(blocks) => blocks,
        Disassembly::Stream(_) => panic!("Expected CFG disassembly"),
    };

    let starts: Vec<Address> = blocks.iter().map(|b| b.start).collect();
    assert_eq!(starts, vec![0x2000, 0x2004, 0x2007, 0x200A, 0x200C]);
    // The loop back to the LCALL splits the entry block
    assert_eq!(blocks[0].insns.len(), 1);
    assert_eq!(blocks[0].succs, vec![0x2004]);
    assert_eq!(blocks[1].succs, vec![0x200C, 0x2007]);
    assert_eq!(blocks[2].succs, vec![0x2004, 0x200A]);
    assert_eq!(blocks[3].succs, vec![0x200A]);
    assert!(blocks[4].succs.is_empty());
    assert_eq!(disassembly.instruction_count(), PROGRAM_INSTRUCTIONS);

    let flow = disassembly.control_flow();
    assert_eq!(flow.calls[&0x200C].len(), 1);
    assert_eq!(flow.branch_targets(), vec![0x2004, 0x200A, 0x200C]);
}

#[test]
fn test_superset_agrees_with_linear() {
    let linear = disassemble(&PROGRAM, &config(Strategy::Linear)).unwrap();
    let superset = disassemble(&PROGRAM, &config(Strategy::Superset)).unwrap();

    let candidates = superset.all_instructions();
    for insn in linear.all_instructions() {
        assert!(candidates.contains(&insn), "missing 0x{:X}", insn.address);
    }
}

#[rstest]
#[case(OutputFormat::Text, "LCALL")]
#[case(OutputFormat::Json, "\"mnemonic\": \"LCALL\"")]
#[case(OutputFormat::JsonLines, "\"mnemonic\":\"LCALL\"")]
#[case(OutputFormat::Csv, "0x2004,ef 05 00,LCALL,0x200C")]
fn test_formats(#[case] format: OutputFormat, #[case] needle: &str) {
    for strategy in Strategy::all() {
        let disassembly = disassemble(&PROGRAM, &config(*strategy)).unwrap();
        let output = format.get_formatter().format(&disassembly, 0x2000).unwrap();
        assert!(output.contains(needle), "{} / {}:\n{}", strategy, format, output);
    }
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.json");
    std::fs::write(
        &path,
        r#"{ "base_address": 8192, "entry_point": 8204, "strategy": "recursive" }"#,
    )
    .unwrap();

    let config = DisasmConfig::load(&path).unwrap();
    let disassembly = disassemble(&PROGRAM, &config).unwrap();
    // Only the subroutine is reachable from 0x200C
    assert_eq!(disassembly.instruction_count(), 2);
}

#[test]
fn test_register_names_flow_through() {
    // PUSH R_18
    let config = DisasmConfig {
        register_names: true,
        ..Default::default()
    };
    let disassembly = disassemble(&[0xC8, 0x18], &config).unwrap();
    assert_eq!(
        disassembly.all_instructions()[0].operand_text(),
        "R_18 ~(Stack Pointer)"
    );
}

#[test]
fn test_invalid_entry_rejected() {
    let config = DisasmConfig {
        base_address: 0x2000,
        entry_point: Some(0x100),
        strategy: Strategy::Recursive,
        ..Default::default()
    };
    assert!(matches!(
        disassemble(&PROGRAM, &config),
        Err(DisassemblyError::Config(_))
    ));
}
