//! The decoded instruction record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::flow::ControlFlow;
use crate::mnemonic::Mnemonic;
use crate::operand::{AddressingMode, Operand, OperandKind, Variable};
use crate::Address;

/// One decoded MCS-96 instruction.
///
/// Built fresh by every call to [`crate::decoder::parse`]; nothing in it is
/// shared with the opcode tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Opcode byte. For signed instructions this is the byte after the prefix.
    pub opcode: u8,
    pub address: Address,
    pub signed: bool,
    /// Every byte consumed, prefix included.
    #[serde(serialize_with = "serialize_hex")]
    pub raw: Vec<u8>,
    pub mnemonic: Mnemonic,
    #[serde(rename = "addressing_mode")]
    pub mode: AddressingMode,
    pub byte_length: usize,
    pub var_count: u8,
    pub operands: Vec<Operand>,
    pub vars: BTreeMap<OperandKind, Variable>,
    pub pseudo_code: String,
    pub description: &'static str,
    pub long_description: &'static str,
    pub variable_length: bool,
    pub auto_increment: bool,
    pub ignore: bool,
    pub reserved: bool,
    /// Set once the operand resolver has handled every operand. A hint for
    /// finding gaps in the resolvers, not a guarantee of correctness.
    pub checked: bool,
    pub flow: ControlFlow,
}

impl Instruction {
    /// Bytes before the first operand: the opcode, plus the prefix when
    /// signed.
    pub fn opcode_width(&self) -> usize {
        if self.signed {
            2
        } else {
            1
        }
    }

    /// Operand bytes only.
    pub fn raw_ops(&self) -> &[u8] {
        self.raw.get(self.opcode_width()..).unwrap_or(&[])
    }

    /// Mnemonic as printed, with the `SGN ` marker on signed forms.
    pub fn mnemonic_text(&self) -> String {
        if self.signed {
            format!("SGN {}", self.mnemonic)
        } else {
            self.mnemonic.to_string()
        }
    }

    pub fn variable(&self, kind: OperandKind) -> Option<&Variable> {
        self.vars.get(&kind)
    }

    /// Resolved operand values in manual order, comma separated.
    pub fn operand_text(&self) -> String {
        self.operands
            .iter()
            .filter_map(|op| self.vars.get(&op.kind))
            .map(|var| var.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Address of the next sequential instruction.
    pub fn next_address(&self) -> Address {
        self.address.wrapping_add(self.byte_length as Address)
    }

    /// Raw bytes as space separated lowercase hex.
    pub fn hex_bytes(&self) -> String {
        self.raw
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = self.operand_text();
        if operands.is_empty() {
            write!(f, "{}", self.mnemonic_text())
        } else {
            write!(f, "{} {}", self.mnemonic_text(), operands)
        }
    }
}

fn serialize_hex<S: Serializer>(raw: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    let text = raw
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<String>();
    serializer.serialize_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::VarType;

    fn sample() -> Instruction {
        let dest = Operand::new(OperandKind::Wreg, VarType::Dest);
        let mut vars = BTreeMap::new();
        vars.insert(OperandKind::Wreg, Variable::new(dest, "R_1C".to_string()));
        Instruction {
            opcode: 0x01,
            address: 0x2080,
            signed: false,
            raw: vec![0x01, 0x1C],
            mnemonic: Mnemonic::Clr,
            mode: AddressingMode::Direct,
            byte_length: 2,
            var_count: 1,
            operands: vec![dest],
            vars,
            pseudo_code: "$r_1C = 0x00".to_string(),
            description: "CLEAR WORD.",
            long_description: "",
            variable_length: false,
            auto_increment: false,
            ignore: false,
            reserved: false,
            checked: true,
            flow: ControlFlow::default(),
        }
    }

    #[test]
    fn test_display_and_text() {
        let insn = sample();
        assert_eq!(insn.to_string(), "CLR R_1C");
        assert_eq!(insn.raw_ops(), &[0x1C]);
        assert_eq!(insn.next_address(), 0x2082);
        assert_eq!(insn.hex_bytes(), "01 1c");
    }

    #[test]
    fn test_signed_text() {
        let mut insn = sample();
        insn.signed = true;
        insn.raw = vec![0xFE, 0x01, 0x1C];
        assert_eq!(insn.mnemonic_text(), "SGN CLR");
        assert_eq!(insn.raw_ops(), &[0x1C]);
    }

    #[test]
    fn test_serialize() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["raw"], "011C");
        assert_eq!(value["mnemonic"], "CLR");
        assert_eq!(value["addressing_mode"], "direct");
        assert_eq!(value["vars"]["wreg"]["value"], "R_1C");
        assert_eq!(value["vars"]["wreg"]["type"], "DEST");
    }
}
