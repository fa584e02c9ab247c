//! Operand kinds, roles and addressing modes.
//!
//! An opcode template lists its operands as `(kind, role)` pairs. The kind
//! says what sort of storage the operand names (a byte register, a code
//! address, an "any addressing mode" word operand, ...). The role says what
//! the instruction does with it and drives the pseudo-code rendering.

use std::fmt;

use serde::{Serialize, Serializer};

/// Storage class of an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandKind {
    Breg,
    Wreg,
    Lreg,
    Waop,
    Baop,
    Dwreg,
    Swreg,
    Dbreg,
    Sbreg,
    Dlreg,
    Slreg,
    Treg,
    Cadd,
    Bitno,
    /// Shift count: an immediate below 0x10 or a byte register.
    Count,
    Ptr2Reg,
    Tbase,
    Index,
    Mask,
}

impl OperandKind {
    /// Manual-style operand name, e.g. `waop` or `breg/#count`.
    pub fn name(self) -> &'static str {
        use OperandKind::*;
        match self {
            Breg => "breg",
            Wreg => "wreg",
            Lreg => "lreg",
            Waop => "waop",
            Baop => "baop",
            Dwreg => "Dwreg",
            Swreg => "Swreg",
            Dbreg => "Dbreg",
            Sbreg => "Sbreg",
            Dlreg => "Dlreg",
            Slreg => "Slreg",
            Treg => "treg",
            Cadd => "cadd",
            Bitno => "bitno",
            Count => "breg/#count",
            Ptr2Reg => "ptr2_reg",
            Tbase => "TBASE",
            Index => "INDEX",
            Mask => "#MASK",
        }
    }

    pub fn description(self) -> &'static str {
        use OperandKind::*;
        match self {
            Breg => "A byte register in the internal register file. When it could be unclear whether this variable refers to a source or a destination register, it is prefixed with an S or a D. The value must be in the range of 00-FFH.",
            Wreg => "A word register in the lower register file. When it could be unclear whether this variable refers to a source or a destination register, it is prefixed with an S or a D. Must be aligned on an address that is evenly divisible by 2. The value must be in the range of 00-FEH.",
            Lreg => "A 32-bit register in the lower register file. Must be aligned on an address that is evenly divisible by 4. The value must be in the range of 00-FCH.",
            Waop => "A word operand that is addressed by any addressing mode.",
            Baop => "A byte operand that is addressed by any addressing mode.",
            Dwreg => "A word register in the lower register file that serves as the destination of the instruction operation. Must be aligned on an address that is evenly divisible by 2. The value must be in the range of 00-FEH.",
            Swreg => "A word register in the lower register file that serves as the source of the instruction operation. Must be aligned on an address that is evenly divisible by 2. The value must be in the range of 00-FEH.",
            Dbreg => "A byte register in the lower register file that serves as the destination of the instruction operation.",
            Sbreg => "A byte register in the lower register file that serves as the source of the instruction operation.",
            Dlreg => "A 32-bit register in the lower register file that serves as the destination of the instruction operation. Must be aligned on an address that is evenly divisible by 4. The value must be in the range of 00-FCH.",
            Slreg => "A 32-bit register in the lower register file that serves as the source of the instruction operation. Must be aligned on an address that is evenly divisible by 4. The value must be in the range of 00-FCH.",
            Treg => "A 24-bit register in the lower register file. Must be aligned on an address that is evenly divisible by 4. The value must be in the range of 00-FCH.",
            Cadd => "An address in the program code",
            Bitno => "A 3-bit field within an opcode that selects one of the eight bits in a byte.",
            Count => "A shift count: an immediate value below 10H, or a byte register holding the count.",
            Ptr2Reg => "A double-pointer register, used with the EBMOVI instruction. Must be aligned on an address that is evenly divisible by 8. The value must be in the range of 00-F8H.",
            Tbase => "A word register holding the base address of a jump table.",
            Index => "A word register whose value, masked, selects an entry of the jump table.",
            Mask => "An immediate mask applied to the index before the table lookup.",
        }
    }

    /// Width in bits of the encoded field. Zero when the width varies with
    /// the instruction (code addresses, plain word registers).
    pub fn bits(self) -> u8 {
        use OperandKind::*;
        match self {
            Cadd | Wreg => 0,
            Bitno => 3,
            Waop => 16,
            _ => 8,
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the instruction does with an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Dest,
    Src,
    Src1,
    Src2,
    Count,
    Addr,
    ByteReg,
    BitNo,
    Ptrs,
    CntReg,
    Breg,
    Wreg,
    TBase,
    Index,
    Mask,
}

impl VarType {
    pub fn as_str(self) -> &'static str {
        use VarType::*;
        match self {
            Dest => "DEST",
            Src => "SRC",
            Src1 => "SRC1",
            Src2 => "SRC2",
            Count => "COUNT",
            Addr => "ADDR",
            ByteReg => "BYTEREG",
            BitNo => "BITNO",
            Ptrs => "PTRS",
            CntReg => "CNTREG",
            Breg => "BREG",
            Wreg => "WREG",
            TBase => "TBASE",
            Index => "INDEX",
            Mask => "#MASK",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VarType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One `(kind, role)` slot of an opcode template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operand {
    pub kind: OperandKind,
    pub role: VarType,
}

impl Operand {
    pub const fn new(kind: OperandKind, role: VarType) -> Self {
        Self { kind, role }
    }
}

/// A resolved operand of one decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub kind: OperandKind,
    #[serde(rename = "type")]
    pub var_type: VarType,
    /// Display text, e.g. `R_04`, `[R_10]+`, `#12` or `0x001234[R_20]`.
    pub value: String,
    pub description: &'static str,
    pub bits: u8,
}

impl Variable {
    pub fn new(operand: Operand, value: String) -> Self {
        Self {
            kind: operand.kind,
            var_type: operand.role,
            value,
            description: operand.kind.description(),
            bits: operand.kind.bits(),
        }
    }
}

/// Addressing mode of a decoded instruction.
///
/// The table only stores the coarse modes; `IndirectAutoInc`,
/// `ShortIndexed` and `LongIndexed` are produced by the decoder once it has
/// looked at the first operand byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressingMode {
    #[default]
    Unspecified,
    Direct,
    Immediate,
    Indirect,
    IndirectAutoInc,
    Indexed,
    ShortIndexed,
    LongIndexed,
    ExtendedIndirect,
    ExtendedIndexed,
}

impl AddressingMode {
    pub fn as_str(self) -> &'static str {
        use AddressingMode::*;
        match self {
            Unspecified => "",
            Direct => "direct",
            Immediate => "immediate",
            Indirect => "indirect",
            IndirectAutoInc => "indirect+",
            Indexed => "indexed",
            ShortIndexed => "short-indexed",
            LongIndexed => "long-indexed",
            ExtendedIndirect => "extended-indirect",
            ExtendedIndexed => "extended-indexed",
        }
    }

    /// True for both the plain and the auto-increment indirect forms.
    pub fn is_indirect(self) -> bool {
        matches!(self, AddressingMode::Indirect | AddressingMode::IndirectAutoInc)
    }

    /// True for every indexed form that is resolved through a base register
    /// in the lower register file.
    pub fn is_short_or_long_indexed(self) -> bool {
        matches!(self, AddressingMode::ShortIndexed | AddressingMode::LongIndexed)
    }

    pub fn is_extended(self) -> bool {
        matches!(
            self,
            AddressingMode::ExtendedIndirect | AddressingMode::ExtendedIndexed
        )
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AddressingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings() {
        assert_eq!(AddressingMode::IndirectAutoInc.to_string(), "indirect+");
        assert_eq!(AddressingMode::LongIndexed.to_string(), "long-indexed");
        assert_eq!(AddressingMode::Unspecified.to_string(), "");
        assert!(AddressingMode::IndirectAutoInc.is_indirect());
        assert!(!AddressingMode::Indexed.is_short_or_long_indexed());
    }

    #[test]
    fn test_operand_kind_metadata() {
        assert_eq!(OperandKind::Count.name(), "breg/#count");
        assert_eq!(OperandKind::Waop.bits(), 16);
        assert_eq!(OperandKind::Bitno.bits(), 3);
        assert!(OperandKind::Cadd.description().contains("program code"));
    }
}
