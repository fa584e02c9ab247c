//! Operand resolution.
//!
//! Each opcode group has its own rules for turning operand bytes into
//! operand text and control-flow edges. Unless noted otherwise operands are
//! read back to front: the last operand byte belongs to the first operand
//! in manual order.

use crate::displacement::{
    extended_target, offset16, offset24, offset8, relative_target, short_offset,
};
use crate::flow::{Edge, EdgeKind};
use crate::instruction::Instruction;
use crate::mnemonic::Mnemonic;
use crate::operand::{AddressingMode, Operand, OperandKind, Variable};
use crate::registers::{Format, RegisterNames};
use crate::Address;

/// Opcode group, selected by bit pattern in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    ShortJump,
    ShortCall,
    JumpBitClear,
    JumpBitSet,
    ConditionalJump,
    F,
    E,
    C,
    Low,
    Middle,
}

impl Group {
    pub fn of(opcode: u8) -> Self {
        match opcode {
            op if op & 0xF8 == 0x20 => Group::ShortJump,
            op if op & 0xF8 == 0x28 => Group::ShortCall,
            op if op & 0xF8 == 0x30 => Group::JumpBitClear,
            op if op & 0xF8 == 0x38 => Group::JumpBitSet,
            op if op & 0xF0 == 0xD0 => Group::ConditionalJump,
            op if op & 0xF0 == 0xF0 => Group::F,
            op if op & 0xF0 == 0xE0 => Group::E,
            op if op & 0xF0 == 0xC0 => Group::C,
            op if op & 0xE0 == 0x00 => Group::Low,
            _ => Group::Middle,
        }
    }
}

/// Fills in the operands and edges of a freshly parsed instruction.
///
/// The caller guarantees `insn.raw` holds the full instruction.
pub(crate) struct Resolver<'a> {
    insn: &'a mut Instruction,
    names: &'a dyn RegisterNames,
    ops: Vec<u8>,
}

impl<'a> Resolver<'a> {
    pub fn new(insn: &'a mut Instruction, names: &'a dyn RegisterNames) -> Self {
        let ops = insn.raw_ops().to_vec();
        Self { insn, names, ops }
    }

    pub fn resolve(mut self) {
        match Group::of(self.insn.opcode) {
            Group::ShortJump => self.short_branch(EdgeKind::Jump),
            Group::ShortCall => self.short_branch(EdgeKind::Call),
            Group::JumpBitClear | Group::JumpBitSet => self.bit_test(),
            Group::ConditionalJump => self.conditional_jump(),
            Group::F => self.group_f(),
            Group::E => self.group_e(),
            Group::C => self.group_c(),
            Group::Low => self.group_low(),
            Group::Middle => self.by_mode(),
        }
    }

    fn set(&mut self, index: usize, value: String) {
        if let Some(&operand) = self.insn.operands.get(index) {
            self.insn.vars.insert(operand.kind, Variable::new(operand, value));
        }
    }

    fn edge(&self, text: &str, to: Address) -> Edge {
        Edge {
            text: text.to_string(),
            mnemonic: self.insn.mnemonic_text(),
            from: self.insn.address,
            to,
        }
    }

    /// Formats `value` and records it as a cross-reference.
    fn xref(&mut self, format: Format, value: u8) -> String {
        let text = self.names.format_register(format, u32::from(value));
        let edge = self.edge(&text, Address::from(value));
        self.insn.flow.xref(edge);
        text
    }

    fn plain(&self, format: Format, value: u32) -> String {
        self.names.format_register(format, value)
    }

    /// Formats a code address and records it as a jump, call or xref.
    fn branch(&mut self, kind: EdgeKind, target: Address) -> String {
        let text = self.plain(Format::Hex, target);
        let edge = self.edge(&text, target);
        self.insn.flow.record(kind, edge);
        text
    }

    fn relative(&self, offset: i32) -> Address {
        relative_target(self.insn.address, self.insn.byte_length, offset)
    }

    fn extended(&self, offset: i32) -> Address {
        extended_target(self.insn.address, self.insn.byte_length, offset)
    }

    fn operand_count(&self) -> usize {
        self.insn.operands.len()
    }

    /// Byte index of operand `i` in a back-to-front layout.
    fn back(&self, i: usize) -> usize {
        self.ops.len() - 1 - i
    }

    fn short_branch(&mut self, kind: EdgeKind) {
        let offset = short_offset(self.insn.opcode, self.ops[0]);
        let target = self.relative(offset);
        let text = self.branch(kind, target);
        self.set(0, text);
        self.insn.checked = true;
    }

    /// `JBC`/`JBS breg, bitno, cadd`; the bit number lives in the opcode.
    fn bit_test(&mut self) {
        let reg = self.xref(Format::Reg, self.ops[0]);
        self.set(0, reg);
        let bit = self.plain(Format::Dec, u32::from(self.insn.opcode & 0x07));
        self.set(1, bit);
        let target = self.relative(offset8(self.ops[1]));
        let text = self.branch(EdgeKind::Jump, target);
        self.set(2, text);
        self.insn.checked = true;
    }

    fn conditional_jump(&mut self) {
        let target = self.relative(offset8(self.ops[0]));
        let text = self.branch(EdgeKind::Jump, target);
        self.set(0, text);
        self.insn.checked = true;
    }

    fn group_f(&mut self) {
        let offset = offset24([self.ops[0], self.ops[1], self.ops[2]]);
        let target = self.extended(offset);
        let kind = if self.insn.mnemonic == Mnemonic::Ecall {
            EdgeKind::Call
        } else {
            EdgeKind::XRef
        };
        let text = self.branch(kind, target);
        self.set(0, text);
        self.insn.checked = true;
    }

    fn group_e(&mut self) {
        match self.insn.opcode {
            // DJNZ, DJNZW
            0xE0 | 0xE1 => {
                let reg = self.xref(Format::Reg, self.ops[0]);
                self.set(0, reg);
                let target = self.relative(offset8(self.ops[1]));
                let text = self.branch(EdgeKind::Jump, target);
                self.set(1, text);
                self.insn.checked = true;
            }
            // TIJMP TBASE, [INDEX], #MASK is encoded as E2 INDEX MASK TBASE.
            0xE2 => {
                let index = self.xref(Format::Ptr, self.ops[0]);
                let mask = self.plain(Format::Imm2, u32::from(self.ops[1]));
                let base = self.xref(Format::Reg, self.ops[2]);
                self.set(0, base);
                self.set(1, index);
                self.set(2, mask);
                self.insn.checked = true;
            }
            0xE3 => self.branch_indirect(),
            // EBMOVI
            0xE4 => self.registers_reversed(),
            // EJMP
            0xE6 => {
                let target = self.extended(offset24([self.ops[0], self.ops[1], self.ops[2]]));
                let text = self.branch(EdgeKind::Jump, target);
                self.set(0, text);
                self.insn.checked = true;
            }
            // LJMP, LCALL
            0xE7 | 0xEF => {
                let target = self.relative(offset16([self.ops[0], self.ops[1]]));
                let kind = if self.insn.mnemonic == Mnemonic::Lcall {
                    EdgeKind::Call
                } else {
                    EdgeKind::Jump
                };
                let text = self.branch(kind, target);
                self.set(0, text);
                self.insn.checked = true;
            }
            // ELD, ELDB
            0xE8..=0xEB => self.extended_load_store(),
            _ => {}
        }
    }

    /// `BR [wreg]` and `EBR [treg]` share opcode 0xE3; the low bit of the
    /// register byte selects the extended form.
    fn branch_indirect(&mut self) {
        let mut value = self.ops[0];
        if value & 0x01 == 0 {
            self.insn.mnemonic = Mnemonic::Br;
            self.insn.mode = AddressingMode::Indirect;
            self.insn.description = "BRANCH INDIRECT.";
            if let Some(first) = self.insn.operands.first_mut() {
                *first = Operand::new(OperandKind::Wreg, first.role);
            }
        } else {
            value &= 0xFE;
        }
        let text = self.plain(Format::Ptr, u32::from(value));
        let edge = self.edge(&text, Address::from(value));
        self.insn.flow.jump(edge.clone());
        self.insn.flow.xref(edge);
        self.set(0, text);
        self.insn.checked = true;
    }

    fn group_c(&mut self) {
        let op = self.insn.opcode;
        if matches!(op, 0xC1 | 0xC5 | 0xCD) || self.insn.mode == AddressingMode::Direct {
            self.registers_reversed();
        } else {
            self.by_mode();
        }
    }

    fn group_low(&mut self) {
        let mode = self.insn.mode;
        if mode.is_extended() {
            self.extended_load_store();
        } else if mode.is_short_or_long_indexed() {
            self.by_mode();
        } else {
            self.low_registers();
        }
    }

    /// Register walk of the 0x00-0x1F group. The shift instructions take
    /// their count either as an immediate below 0x10 or as a register.
    fn low_registers(&mut self) {
        let op = self.insn.opcode;
        for i in 0..self.operand_count() {
            let b = self.back(i);
            let value = self.ops[b];
            let text = if op & 0x08 != 0 && b == 0 && op != 0x0F && value < 0x10 {
                self.plain(Format::Imm2, u32::from(value))
            } else {
                self.xref(Format::Reg, value)
            };
            self.set(i, text);
        }
        self.insn.checked = true;
    }

    fn by_mode(&mut self) {
        match self.insn.mode {
            AddressingMode::Direct => self.registers_reversed(),
            AddressingMode::Immediate => self.immediate(),
            AddressingMode::Indirect | AddressingMode::IndirectAutoInc => self.indirect(),
            AddressingMode::ShortIndexed => self.short_indexed(),
            AddressingMode::LongIndexed => self.long_indexed(),
            _ => {}
        }
    }

    /// Every operand is a register, read back to front.
    fn registers_reversed(&mut self) {
        for i in 0..self.operand_count() {
            let text = self.xref(Format::Reg, self.ops[self.back(i)]);
            self.set(i, text);
        }
        self.insn.checked = true;
    }

    /// The last operand is a constant at the front of the operand bytes,
    /// one byte for byte operands and two (little endian) for words.
    fn immediate(&mut self) {
        let count = self.operand_count();
        let Some(last) = count.checked_sub(1) else {
            return;
        };
        for i in 0..last {
            let text = self.xref(Format::Reg, self.ops[self.back(i)]);
            self.set(i, text);
        }
        let constant = match self.insn.operands[last].kind {
            OperandKind::Waop => {
                let value = u16::from_le_bytes([self.ops[0], self.ops[1]]);
                self.plain(Format::Imm4, u32::from(value))
            }
            _ => self.plain(Format::Imm2, u32::from(self.ops[0])),
        };
        self.set(last, constant);
        self.insn.checked = true;
    }

    /// The last operand is a pointer register, `[R_xx]` or `[R_xx]+`. Bit 0
    /// of the pointer byte is the auto-increment flag, not part of the
    /// register number.
    fn indirect(&mut self) {
        let count = self.operand_count();
        for i in 0..count {
            let b = self.back(i);
            let text = if i + 1 == count {
                let format = if self.insn.auto_increment {
                    Format::PtrInc
                } else {
                    Format::Ptr
                };
                self.xref(format, self.ops[b] & 0xFE)
            } else {
                self.xref(Format::Reg, self.ops[b])
            };
            self.set(i, text);
        }
        self.insn.checked = true;
    }

    /// The last operand is `offset[base]` with a one byte offset.
    fn short_indexed(&mut self) {
        let count = self.operand_count();
        for i in 0..count {
            let b = self.back(i);
            let text = if i + 1 == count {
                let offset = self.ops[b];
                let offset_text = self.xref(Format::Hex2, offset);
                let base = self.xref(Format::Ptr, self.ops[b - 1] & 0xFE);
                format!("{offset_text}{base}")
            } else {
                self.xref(Format::Reg, self.ops[b])
            };
            self.set(i, text);
        }
        self.insn.checked = true;
    }

    /// The last operand is `offset[base]` with a little endian word offset.
    fn long_indexed(&mut self) {
        let count = self.operand_count();
        for i in 0..count {
            let b = self.back(i);
            let text = if i + 1 == count {
                let offset = u16::from_le_bytes([self.ops[b - 1], self.ops[b]]);
                let offset_text = self.plain(Format::Hex4, u32::from(offset));
                let edge = self.edge(&offset_text, Address::from(offset));
                self.insn.flow.xref(edge);
                let base = self.xref(Format::Ptr, self.ops[b - 2] & 0xFE);
                format!("{offset_text}{base}")
            } else {
                self.xref(Format::Reg, self.ops[b])
            };
            self.set(i, text);
        }
        self.insn.checked = true;
    }

    /// `ELD`/`ELDB`/`EST`/`ESTB` with a 24-bit pointer register, optionally
    /// displaced by a 24-bit offset. The register operand is always first
    /// in manual order and the pointer second.
    fn extended_load_store(&mut self) {
        let pointer = self.ops[0] & 0xFE;
        match self.insn.mode {
            AddressingMode::ExtendedIndexed => {
                let offset = u32::from_le_bytes([self.ops[1], self.ops[2], self.ops[3], 0]);
                let offset_text = self.plain(Format::Hex6, offset);
                let edge = self.edge(&offset_text, offset);
                self.insn.flow.xref(edge);
                let base = self.xref(Format::Ptr, pointer);
                self.set(1, format!("{offset_text}{base}"));
                let reg = self.xref(Format::Reg, self.ops[4]);
                self.set(0, reg);
            }
            AddressingMode::ExtendedIndirect => {
                let base = self.xref(Format::Ptr, pointer);
                self.set(1, base);
                let reg = self.xref(Format::Reg, self.ops[1]);
                self.set(0, reg);
            }
            _ => return,
        }
        self.insn.checked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x20, Group::ShortJump)]
    #[case(0x2F, Group::ShortCall)]
    #[case(0x30, Group::JumpBitClear)]
    #[case(0x3F, Group::JumpBitSet)]
    #[case(0xD7, Group::ConditionalJump)]
    #[case(0xF1, Group::F)]
    #[case(0xE3, Group::E)]
    #[case(0xC8, Group::C)]
    #[case(0x1D, Group::Low)]
    #[case(0x40, Group::Middle)]
    #[case(0xBF, Group::Middle)]
    fn test_group_of(#[case] opcode: u8, #[case] group: Group) {
        assert_eq!(Group::of(opcode), group);
    }
}
