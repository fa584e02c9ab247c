//! MCS-96 instruction decoder.

use std::collections::BTreeMap;

use crate::flow::ControlFlow;
use crate::instruction::Instruction;
use crate::opcodes::{self, SIGNED_PREFIX};
use crate::operand::AddressingMode;
use crate::pseudo;
use crate::registers::{Mcs96Registers, PlainRegisters, RegisterNames};
use crate::resolve::Resolver;
use crate::{Address, Decoder};

/// Errors that can occur while decoding a single instruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// No template exists for the opcode
    #[error("unknown opcode 0x{opcode:02X} (signed: {signed})")]
    UnknownOpcode { opcode: u8, signed: bool },

    /// The input ends before the instruction does
    #[error("truncated instruction: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },
}

impl DecodeError {
    /// Number of bytes a caller scanning a stream should skip to resynchronize.
    pub fn byte_length(&self) -> usize {
        1
    }
}

/// Decodes the instruction at the start of `bytes`, located at `address`,
/// with plain numeric register formatting.
pub fn parse(bytes: &[u8], address: Address) -> Result<Instruction, DecodeError> {
    parse_with(bytes, address, &PlainRegisters)
}

/// Decodes the instruction at the start of `bytes` using `names` to format
/// registers and addresses.
///
/// Bytes past the end of the instruction are ignored. Input shorter than
/// the instruction is rejected with [`DecodeError::Truncated`].
pub fn parse_with(
    bytes: &[u8],
    address: Address,
    names: &dyn RegisterNames,
) -> Result<Instruction, DecodeError> {
    let first = *bytes.first().ok_or(DecodeError::Truncated {
        needed: 1,
        available: 0,
    })?;

    let signed = first == SIGNED_PREFIX;
    let opcode = if signed {
        *bytes.get(1).ok_or(DecodeError::Truncated {
            needed: 2,
            available: bytes.len(),
        })?
    } else {
        first
    };

    let template =
        opcodes::lookup(opcode, signed).ok_or(DecodeError::UnknownOpcode { opcode, signed })?;

    let operand_start = if signed { 2 } else { 1 };
    let mut length = usize::from(template.byte_length) + usize::from(signed);
    check_length(bytes, length)?;

    let mut mode = template.mode;
    let mut auto_increment = false;
    // Bit 0 of the first operand byte refines the generic indexed and
    // indirect modes. For signed forms that is the byte after the opcode,
    // not the opcode itself: bit 0 of the opcode is part of the opcode.
    if length > operand_start {
        let flag = bytes[operand_start] & 0x01 != 0;
        match mode {
            AddressingMode::Indexed if template.variable_length => {
                if flag {
                    mode = AddressingMode::LongIndexed;
                    length += 1;
                } else {
                    mode = AddressingMode::ShortIndexed;
                }
            }
            AddressingMode::Indirect if flag => {
                mode = AddressingMode::IndirectAutoInc;
                auto_increment = true;
            }
            _ => {}
        }
    }
    check_length(bytes, length)?;

    let mut insn = Instruction {
        opcode,
        address,
        signed,
        raw: bytes[..length].to_vec(),
        mnemonic: template.mnemonic,
        mode,
        byte_length: length,
        var_count: template.var_count,
        operands: template.operands.to_vec(),
        vars: BTreeMap::new(),
        pseudo_code: String::new(),
        description: template.description,
        long_description: template.long_description,
        variable_length: template.variable_length,
        auto_increment,
        ignore: template.ignore,
        reserved: template.reserved,
        checked: false,
        flow: ControlFlow::new(),
    };

    if template.var_count == 0 {
        insn.checked = true;
        return Ok(insn);
    }

    Resolver::new(&mut insn, names).resolve();
    insn.pseudo_code = pseudo::synthesize(&insn);
    Ok(insn)
}

fn check_length(bytes: &[u8], needed: usize) -> Result<(), DecodeError> {
    if bytes.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            available: bytes.len(),
        });
    }
    Ok(())
}

/// [`Decoder`] for the MCS-96 family.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mcs96Decoder {
    register_names: bool,
}

impl Mcs96Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotate special-function registers, e.g. `R_18 ~(Stack Pointer)`.
    pub fn with_register_names(mut self, enabled: bool) -> Self {
        self.register_names = enabled;
        self
    }
}

impl Decoder for Mcs96Decoder {
    fn decode(&self, bytes: &[u8], address: Address) -> Result<Instruction, DecodeError> {
        if self.register_names {
            parse_with(bytes, address, &Mcs96Registers)
        } else {
            parse(bytes, address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::Mnemonic;
    use crate::operand::OperandKind;
    use rstest::rstest;

    #[test]
    fn test_short_jump() {
        let insn = parse(&[0x20, 0x05], 0x100).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Sjmp);
        assert_eq!(insn.byte_length, 2);
        assert_eq!(insn.variable(OperandKind::Cadd).unwrap().value, "0x107");
        let edges = &insn.flow.jumps[&0x107];
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, 0x100);
        assert!(insn.flow.calls.is_empty());
        assert_eq!(insn.pseudo_code, "JUMP TO: 0x107");
    }

    #[test]
    fn test_short_call_backwards() {
        // SCALL with displacement -4
        let insn = parse(&[0x2F, 0xFC], 0x2000).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Scall);
        assert!(insn.flow.calls.contains_key(&0x1FFE));
        assert!(insn.flow.jumps.is_empty());
        assert_eq!(insn.pseudo_code, "CALL SUB_ 0x1FFE");
    }

    #[test]
    fn test_push_direct() {
        let insn = parse(&[0xC8, 0x10], 0x2000).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Push);
        assert_eq!(insn.vars.len(), 1);
        assert_eq!(insn.variable(OperandKind::Waop).unwrap().value, "R_10");
        assert_eq!(insn.flow.xrefs[&0x10][0].from, 0x2000);
        assert_eq!(insn.pseudo_code, "PUSH $r_10 ONTO THE STACK");
        assert!(insn.checked);
    }

    #[test]
    fn test_signed_multiply() {
        let insn = parse(&[0xFE, 0x4C, 0x30, 0x32, 0x34], 0).unwrap();
        assert!(insn.signed);
        assert_eq!(insn.opcode, 0x4C);
        assert_eq!(insn.mnemonic, Mnemonic::Mul);
        assert_eq!(insn.mnemonic_text(), "SGN MUL");
        assert_eq!(insn.byte_length, 5);
        assert_eq!(insn.raw_ops(), &[0x30, 0x32, 0x34]);
        assert_eq!(insn.operand_text(), "R_34, R_32, R_30");

        let unsigned = parse(&[0x4C, 0x30, 0x32, 0x34], 0).unwrap();
        assert_eq!(unsigned.mnemonic, Mnemonic::Mulu);
        assert_eq!(insn.byte_length, unsigned.byte_length + 1);
    }

    #[test]
    fn test_unknown_signed_opcode() {
        let err = parse(&[0xFE, 0x00, 0x00], 0).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownOpcode {
                opcode: 0x00,
                signed: true
            }
        );
        assert_eq!(err.byte_length(), 1);
    }

    #[rstest]
    #[case(&[], 1, 0)]
    #[case(&[0xFE], 2, 1)]
    #[case(&[0x44, 0x10], 4, 2)]
    #[case(&[0x47, 0x21, 0x34, 0x12, 0x32], 6, 5)]
    fn test_truncated(#[case] bytes: &[u8], #[case] needed: usize, #[case] available: usize) {
        assert_eq!(
            parse(bytes, 0).unwrap_err(),
            DecodeError::Truncated { needed, available }
        );
    }

    #[test]
    fn test_indexed_short_and_long() {
        // ADD R_34, R_32, 0x10[R_20]
        let short = parse(&[0x47, 0x20, 0x10, 0x32, 0x34], 0).unwrap();
        assert_eq!(short.mode, AddressingMode::ShortIndexed);
        assert_eq!(short.byte_length, 5);
        assert_eq!(short.operand_text(), "R_34, R_32, 0x10[R_20]");

        let long = parse(&[0x47, 0x21, 0x34, 0x12, 0x32, 0x30], 0).unwrap();
        assert_eq!(long.mode, AddressingMode::LongIndexed);
        assert_eq!(long.byte_length, short.byte_length + 1);
        assert_eq!(long.operand_text(), "R_30, R_32, 0x1234[R_20]");
        assert!(long.flow.xrefs.contains_key(&0x1234));
    }

    #[test]
    fn test_indirect_auto_increment() {
        // LD R_30, [R_20]+
        let insn = parse(&[0xA2, 0x21, 0x30], 0).unwrap();
        assert_eq!(insn.mode, AddressingMode::IndirectAutoInc);
        assert!(insn.auto_increment);
        assert_eq!(insn.operand_text(), "R_30, [R_20]+");

        let plain = parse(&[0xA2, 0x20, 0x30], 0).unwrap();
        assert_eq!(plain.mode, AddressingMode::Indirect);
        assert_eq!(plain.operand_text(), "R_30, [R_20]");
    }

    #[test]
    fn test_immediate_word_and_byte() {
        // LD R_30, #1234
        let word = parse(&[0xA1, 0x34, 0x12, 0x30], 0).unwrap();
        assert_eq!(word.operand_text(), "R_30, #1234");
        assert_eq!(word.pseudo_code, "$r_30 = 0x1234");
        assert!(!word.flow.xrefs.contains_key(&0x34));

        // LDB R_31, #7F
        let byte = parse(&[0xB1, 0x7F, 0x31], 0).unwrap();
        assert_eq!(byte.operand_text(), "R_31, #7F");
    }

    #[test]
    fn test_shift_count() {
        let imm = parse(&[0x08, 0x04, 0x30], 0).unwrap();
        assert_eq!(imm.operand_text(), "R_30, #04");
        let reg = parse(&[0x08, 0x40, 0x30], 0).unwrap();
        assert_eq!(reg.operand_text(), "R_30, R_40");
    }

    #[test]
    fn test_bit_test_jump() {
        // JBS R_24, 3, +0x10
        let insn = parse(&[0x3B, 0x24, 0x10], 0x2000).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Jbs);
        assert_eq!(insn.operand_text(), "R_24, 3, 0x2013");
        assert!(insn.flow.jumps.contains_key(&0x2013));
        assert_eq!(
            insn.pseudo_code,
            "if bitno: (3) of $r_24 is set { JUMP TO: 0x2013 }"
        );
    }

    #[test]
    fn test_djnz() {
        let insn = parse(&[0xE0, 0x30, 0xFD], 0x2000).unwrap();
        assert_eq!(insn.operand_text(), "R_30, 0x2000");
        assert_eq!(insn.pseudo_code, "R_30--; if ( R_30 != 0 ) { JUMP TO: 0x2000 }");
    }

    #[test]
    fn test_long_jump_and_call() {
        let jump = parse(&[0xE7, 0x00, 0x10], 0x2000).unwrap();
        assert!(jump.flow.jumps.contains_key(&0x3003));
        let call = parse(&[0xEF, 0xFD, 0xFF], 0x2000).unwrap();
        assert!(call.flow.calls.contains_key(&0x2000));
    }

    #[test]
    fn test_extended_jump_is_masked() {
        let insn = parse(&[0xE6, 0x00, 0x00, 0x20], 0x1000).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Ejmp);
        // 0x1004 + 0x200000 wraps out of the 21-bit space
        assert!(insn.flow.jumps.contains_key(&0x1004));
    }

    #[test]
    fn test_br_rewrite() {
        let br = parse(&[0xE3, 0x30], 0).unwrap();
        assert_eq!(br.mnemonic, Mnemonic::Br);
        assert_eq!(br.mode, AddressingMode::Indirect);
        assert_eq!(br.operand_text(), "[R_30]");
        assert!(br.flow.jumps.contains_key(&0x30));
        assert!(br.flow.xrefs.contains_key(&0x30));

        let ebr = parse(&[0xE3, 0x31], 0).unwrap();
        assert_eq!(ebr.mnemonic, Mnemonic::Ebr);
        assert_eq!(ebr.mode, AddressingMode::ExtendedIndirect);
        assert_eq!(ebr.operand_text(), "[R_30]");
    }

    #[test]
    fn test_extended_load() {
        let indexed = parse(&[0xE9, 0x20, 0x56, 0x34, 0x12, 0x30], 0).unwrap();
        assert_eq!(indexed.operand_text(), "R_30, 0x123456[R_20]");
        let indirect = parse(&[0xE8, 0x20, 0x30], 0).unwrap();
        assert_eq!(indirect.operand_text(), "R_30, [R_20]");
        assert_eq!(indirect.pseudo_code, "$r_30 = [$r_20]");
    }

    #[test]
    fn test_table_jump() {
        let insn = parse(&[0xE2, 0x30, 0x7F, 0x32], 0).unwrap();
        assert_eq!(insn.operand_text(), "R_32, [R_30], #7F");
        assert!(insn.flow.jumps.is_empty());
        assert!(insn.pseudo_code.starts_with("???"));
    }

    #[test]
    fn test_no_operands() {
        let insn = parse(&[0xF0], 0x2000).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Ret);
        assert!(insn.checked);
        assert!(insn.pseudo_code.is_empty());
        assert!(!insn.auto_increment);
    }

    #[test]
    fn test_register_names() {
        let decoder = Mcs96Decoder::new().with_register_names(true);
        let insn = decoder.decode(&[0xC8, 0x18], 0).unwrap();
        assert_eq!(insn.operand_text(), "R_18 ~(Stack Pointer)");
        assert_eq!(insn.pseudo_code, "PUSH $r_18 (Stack Pointer) ONTO THE STACK");
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let insn = parse(&[0x01, 0x30, 0xFF, 0xFF], 0).unwrap();
        assert_eq!(insn.raw, vec![0x01, 0x30]);
        assert_eq!(insn.pseudo_code, "$r_30 = 0x00");
    }

    #[rstest]
    #[case::extended_store_word(&[0x1D, 0x20, 0x56, 0x34, 0x12, 0x30], Mnemonic::Est)]
    #[case::extended_store_byte(&[0x1F, 0x20, 0x56, 0x34, 0x12, 0x30], Mnemonic::Estb)]
    fn test_extended_store(#[case] bytes: &[u8], #[case] mnemonic: Mnemonic) {
        let insn = parse(bytes, 0).unwrap();
        assert_eq!(insn.mnemonic, mnemonic);
        assert_eq!(insn.operand_text(), "R_30, 0x123456[R_20]");
        assert_eq!(insn.mode, AddressingMode::ExtendedIndexed);
        assert_eq!(insn.mode.to_string(), "extended-indexed");
        assert_eq!(insn.byte_length, 6);
        assert!(insn.flow.xrefs.contains_key(&0x123456));
        assert!(insn.checked);
    }

    #[rstest]
    #[case::shift_count_immediate(&[0x09, 0x05, 0x30], "R_30, #05")]
    #[case::shift_count_register(&[0x09, 0x40, 0x30], "R_30, R_40")]
    #[case::normalize_is_never_immediate(&[0x0F, 0x05, 0x30], "R_30, R_05")]
    fn test_low_group_shift_count(#[case] bytes: &[u8], #[case] operands: &str) {
        assert_eq!(parse(bytes, 0).unwrap().operand_text(), operands);
    }

    #[rstest]
    #[case::block_move(&[0xC1, 0x30, 0x34], Mnemonic::Bmov)]
    #[case::compare_long(&[0xC5, 0x30, 0x34], Mnemonic::Cmpl)]
    #[case::interruptible_block_move(&[0xCD, 0x30, 0x34], Mnemonic::Bmovi)]
    fn test_c_group_reversed_registers(#[case] bytes: &[u8], #[case] mnemonic: Mnemonic) {
        let insn = parse(bytes, 0).unwrap();
        assert_eq!(insn.mnemonic, mnemonic);
        assert_eq!(insn.operand_text(), "R_34, R_30");
        assert!(insn.flow.xrefs.contains_key(&0x30));
        assert!(insn.flow.xrefs.contains_key(&0x34));
    }

    #[test]
    fn test_block_move_pseudo_code() {
        let insn = parse(&[0xC1, 0x30, 0x34], 0).unwrap();
        assert_eq!(insn.pseudo_code, "BMOV $r_34 count($r_30)");
    }

    #[rstest]
    #[case::short(&[0xFE, 0x4F, 0x20, 0x10, 0x32, 0x34], AddressingMode::ShortIndexed, 6)]
    #[case::long(&[0xFE, 0x4F, 0x21, 0x34, 0x12, 0x32, 0x30], AddressingMode::LongIndexed, 7)]
    fn test_signed_mode_flag_in_operand_byte(
        #[case] bytes: &[u8],
        #[case] mode: AddressingMode,
        #[case] length: usize,
    ) {
        // The opcode byte 0x4F has bit 0 set in both cases
        let insn = parse(bytes, 0).unwrap();
        assert!(insn.signed);
        assert_eq!(insn.mnemonic, Mnemonic::Mul);
        assert_eq!(insn.mode, mode);
        assert_eq!(insn.byte_length, length);
    }
}
