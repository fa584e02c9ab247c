//! Static opcode tables for the MCS-96 instruction set.
//!
//! Two tables exist: the unsigned table is indexed directly by the opcode
//! byte and covers all 256 values (undefined encodings are marked
//! `reserved`); the signed table holds the handful of multiply/divide
//! opcodes that have a distinct meaning after the 0xFE prefix byte.

use crate::mnemonic::Mnemonic;
use crate::operand::{AddressingMode, Operand, OperandKind as K, VarType as T};

/// Opcode byte that selects the signed table for the following byte.
pub const SIGNED_PREFIX: u8 = 0xFE;

/// Immutable per-opcode description.
///
/// `byte_length` is the nominal length as listed in the manual. It does not
/// include the signed prefix byte nor the extra byte of a long-indexed
/// operand; the decoder adds those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeTemplate {
    pub mnemonic: Mnemonic,
    pub byte_length: u8,
    pub var_count: u8,
    /// Operands in manual order, e.g. `DEST, SRC1, SRC2`.
    pub operands: &'static [Operand],
    pub mode: AddressingMode,
    pub description: &'static str,
    pub long_description: &'static str,
    /// The generic indexed mode is refined to short or long indexed by bit 0
    /// of the first operand byte.
    pub variable_length: bool,
    /// Filler encodings such as `SKIP`.
    pub ignore: bool,
    pub reserved: bool,
}

const BLANK: OpcodeTemplate = OpcodeTemplate {
    mnemonic: Mnemonic::Reserved,
    byte_length: 1,
    var_count: 0,
    operands: NONE,
    mode: AddressingMode::Unspecified,
    description: "",
    long_description: "",
    variable_length: false,
    ignore: false,
    reserved: false,
};

const NONE: &[Operand] = &[];

const SKIP_OPERANDS: &[Operand] = &[Operand::new(K::Breg, T::ByteReg)];
const WREG_DST: &[Operand] = &[Operand::new(K::Wreg, T::Dest)];
const WREG_WAOP: &[Operand] = &[Operand::new(K::Wreg, T::Dest), Operand::new(K::Waop, T::Src)];
const LREG_DST: &[Operand] = &[Operand::new(K::Lreg, T::Dest)];
const WREG_COUNT: &[Operand] = &[Operand::new(K::Wreg, T::Dest), Operand::new(K::Count, T::Count)];
const LREG_COUNT: &[Operand] = &[Operand::new(K::Lreg, T::Dest), Operand::new(K::Count, T::Count)];
const NORML_OPERANDS: &[Operand] = &[Operand::new(K::Lreg, T::Src), Operand::new(K::Breg, T::Dest)];
const BREG_DST: &[Operand] = &[Operand::new(K::Breg, T::Dest)];
const BREG_BAOP: &[Operand] = &[Operand::new(K::Breg, T::Dest), Operand::new(K::Baop, T::Src)];
const BREG_COUNT: &[Operand] = &[Operand::new(K::Breg, T::Dest), Operand::new(K::Count, T::Count)];
const EST_OPERANDS: &[Operand] = &[Operand::new(K::Wreg, T::Src), Operand::new(K::Treg, T::Dest)];
const ESTB_OPERANDS: &[Operand] = &[Operand::new(K::Breg, T::Src), Operand::new(K::Treg, T::Dest)];
const CODE_ADDR: &[Operand] = &[Operand::new(K::Cadd, T::Addr)];
const BIT_TEST: &[Operand] = &[
    Operand::new(K::Breg, T::ByteReg),
    Operand::new(K::Bitno, T::BitNo),
    Operand::new(K::Cadd, T::Addr),
];
const WORD_3OP: &[Operand] = &[
    Operand::new(K::Dwreg, T::Dest),
    Operand::new(K::Swreg, T::Src1),
    Operand::new(K::Waop, T::Src2),
];
const MUL_3OP: &[Operand] = &[
    Operand::new(K::Lreg, T::Dest),
    Operand::new(K::Wreg, T::Src1),
    Operand::new(K::Waop, T::Src2),
];
const BYTE_3OP: &[Operand] = &[
    Operand::new(K::Dbreg, T::Dest),
    Operand::new(K::Sbreg, T::Src1),
    Operand::new(K::Baop, T::Src2),
];
const MULB_3OP: &[Operand] = &[
    Operand::new(K::Wreg, T::Dest),
    Operand::new(K::Breg, T::Src1),
    Operand::new(K::Baop, T::Src2),
];
const LREG_WAOP: &[Operand] = &[Operand::new(K::Lreg, T::Dest), Operand::new(K::Waop, T::Src)];
const WREG_BAOP: &[Operand] = &[Operand::new(K::Wreg, T::Dest), Operand::new(K::Baop, T::Src)];
const ST_OPERANDS: &[Operand] = &[Operand::new(K::Wreg, T::Src), Operand::new(K::Waop, T::Dest)];
const BLOCK_MOVE: &[Operand] = &[Operand::new(K::Lreg, T::Ptrs), Operand::new(K::Wreg, T::CntReg)];
const STB_OPERANDS: &[Operand] = &[Operand::new(K::Breg, T::Src), Operand::new(K::Baop, T::Dest)];
const CMPL_OPERANDS: &[Operand] = &[
    Operand::new(K::Dlreg, T::Dest),
    Operand::new(K::Slreg, T::Src),
];
const PUSH_OPERANDS: &[Operand] = &[Operand::new(K::Waop, T::Src)];
const POP_OPERANDS: &[Operand] = &[Operand::new(K::Waop, T::Dest)];
const DJNZ_OPERANDS: &[Operand] = &[Operand::new(K::Breg, T::Breg), Operand::new(K::Cadd, T::Addr)];
const DJNZW_OPERANDS: &[Operand] = &[
    Operand::new(K::Wreg, T::Wreg),
    Operand::new(K::Cadd, T::Addr),
];
const TIJMP_OPERANDS: &[Operand] = &[
    Operand::new(K::Tbase, T::TBase),
    Operand::new(K::Index, T::Index),
    Operand::new(K::Mask, T::Mask),
];
const EBMOVI_OPERANDS: &[Operand] = &[
    Operand::new(K::Ptr2Reg, T::Ptrs),
    Operand::new(K::Wreg, T::CntReg),
];
const ELD_OPERANDS: &[Operand] = &[Operand::new(K::Wreg, T::Dest), Operand::new(K::Treg, T::Src)];
const ELDB_OPERANDS: &[Operand] = &[Operand::new(K::Breg, T::Dest), Operand::new(K::Treg, T::Src)];

/// Templates indexed by opcode byte.
pub static UNSIGNED_OPCODES: [OpcodeTemplate; 256] = [
    // 0x00
    OpcodeTemplate {
        mnemonic: Mnemonic::Skip,
        byte_length: 2,
        var_count: 0,
        operands: SKIP_OPERANDS,
        mode: AddressingMode::Direct,
        description: "TWO BYTE NO-OPERATION.",
        long_description: "Does nothing. Control passes to the next sequentia instruction. This is actually a two-byte NOP i which the second byte can be any value an is simply ignored.",
        ignore: true,
        ..BLANK
    },
    // 0x01
    OpcodeTemplate {
        mnemonic: Mnemonic::Clr,
        byte_length: 2,
        var_count: 1,
        operands: WREG_DST,
        mode: AddressingMode::Direct,
        description: "CLEAR WORD.",
        long_description: "Clears the value of the operand.",
        ..BLANK
    },
    // 0x02
    OpcodeTemplate {
        mnemonic: Mnemonic::Not,
        byte_length: 2,
        var_count: 1,
        operands: WREG_DST,
        mode: AddressingMode::Direct,
        description: "COMPLEMENT WORD.",
        long_description: "Complements the value of the word operand (replaces each “1” with a “0” and each “0” with a “1”).",
        ..BLANK
    },
    // 0x03
    OpcodeTemplate {
        mnemonic: Mnemonic::Neg,
        byte_length: 2,
        var_count: 1,
        operands: WREG_DST,
        mode: AddressingMode::Direct,
        description: "NEGATE INTEGER.",
        long_description: "Negates the value of the integer operand.",
        ..BLANK
    },
    // 0x04
    OpcodeTemplate {
        mnemonic: Mnemonic::Xch,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "EXCHANGE WORD.",
        long_description: "Exchanges the value of the source word operand with that of the destination word operand.",
        ..BLANK
    },
    // 0x05
    OpcodeTemplate {
        mnemonic: Mnemonic::Dec,
        byte_length: 2,
        var_count: 1,
        operands: WREG_DST,
        mode: AddressingMode::Direct,
        description: "DECREMENT WORD.",
        long_description: "Decrements the value of the operand by one.",
        ..BLANK
    },
    // 0x06
    OpcodeTemplate {
        mnemonic: Mnemonic::Ext,
        byte_length: 2,
        var_count: 1,
        operands: LREG_DST,
        mode: AddressingMode::Direct,
        description: "SIGN-EXTEND INTEGER INTO LONGINTEGER.",
        long_description: "Sign-extends the low-order word of the operand throughout the high-order word of the operand.",
        ..BLANK
    },
    // 0x07
    OpcodeTemplate {
        mnemonic: Mnemonic::Inc,
        byte_length: 2,
        var_count: 1,
        operands: WREG_DST,
        mode: AddressingMode::Direct,
        description: "INCREMENT WORD.",
        long_description: "Increments the value of the word operand by 1.",
        ..BLANK
    },
    // 0x08
    OpcodeTemplate {
        mnemonic: Mnemonic::Shr,
        byte_length: 3,
        var_count: 2,
        operands: WREG_COUNT,
        mode: AddressingMode::Direct,
        description: "LOGICAL RIGHT SHIFT WORD.",
        long_description: "Shifts the destination word operand to the right as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. The left bits of the result are filled with zeros. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x09
    OpcodeTemplate {
        mnemonic: Mnemonic::Shl,
        byte_length: 3,
        var_count: 2,
        operands: WREG_COUNT,
        mode: AddressingMode::Direct,
        description: "SHIFT WORD LEFT.",
        long_description: "Shifts the destination word operand to the left as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. The right bits of the result are filled with zeros. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x0A
    OpcodeTemplate {
        mnemonic: Mnemonic::Shra,
        byte_length: 3,
        var_count: 2,
        operands: WREG_COUNT,
        mode: AddressingMode::Direct,
        description: "ARITHMETIC RIGHT SHIFT WORD.",
        long_description: "Shifts the destination word operand to the right as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. If the original high order bit value was “0,” zeros are shifted in. If the value was “1,” ones are shifted in. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x0B
    OpcodeTemplate {
        mnemonic: Mnemonic::Xch,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "EXCHANGE WORD",
        long_description: "Exchanges the value of the source word operand with that of the destination word operand.",
        variable_length: true,
        ..BLANK
    },
    // 0x0C
    OpcodeTemplate {
        mnemonic: Mnemonic::Shrl,
        byte_length: 3,
        var_count: 2,
        operands: LREG_COUNT,
        mode: AddressingMode::Direct,
        description: "LOGICAL RIGHT SHIFT DOUBLE-WORD.",
        long_description: "Shifts the destination double-word operand to the right as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. The left bits of the result are filled with zeros. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x0D
    OpcodeTemplate {
        mnemonic: Mnemonic::Shll,
        byte_length: 3,
        var_count: 2,
        operands: LREG_COUNT,
        mode: AddressingMode::Direct,
        description: "SHIFT DOUBLE-WORD LEFT.",
        long_description: "Shifts the destination double-word operand to the left as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. The right bits of the result are filled with zeros. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x0E
    OpcodeTemplate {
        mnemonic: Mnemonic::Shral,
        byte_length: 3,
        var_count: 2,
        operands: LREG_COUNT,
        mode: AddressingMode::Direct,
        description: "ARITHMETIC RIGHT SHIFT DOUBLEWORD.",
        long_description: "Shifts the destination double-word operand to the right as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. If the original high order bit value was “0,” zeros are shifted in. If the value was “1,” ones are shifted in.",
        ..BLANK
    },
    // 0x0F
    OpcodeTemplate {
        mnemonic: Mnemonic::Norml,
        byte_length: 3,
        var_count: 2,
        operands: NORML_OPERANDS,
        mode: AddressingMode::Direct,
        description: "NORMALIZE LONG-INTEGER.",
        long_description: "Normalizes the source (leftmost) long-integer operand. (That is, it shifts the operand to the left until its most significant bit is “1” or until it has performed 31 shifts). If the most significant bit is still “0” after 31 shifts, the instruction stops the process and sets the zero flag. The instruction stores the actual number of shifts performed in the destination (rightmost) operand.",
        ..BLANK
    },
    // 0x10
    OpcodeTemplate {
        mnemonic: Mnemonic::Reserved,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Unspecified,
        description: "RESERVED.",
        long_description: "",
        reserved: true,
        ..BLANK
    },
    // 0x11
    OpcodeTemplate {
        mnemonic: Mnemonic::Clrb,
        byte_length: 2,
        var_count: 1,
        operands: BREG_DST,
        mode: AddressingMode::Direct,
        description: "CLEAR BYTE.",
        long_description: "Clears the value of the operand.",
        ..BLANK
    },
    // 0x12
    OpcodeTemplate {
        mnemonic: Mnemonic::Notb,
        byte_length: 2,
        var_count: 1,
        operands: BREG_DST,
        mode: AddressingMode::Direct,
        description: "COMPLEMENT BYTE.",
        long_description: "Complements the value of the byte operand (replaces each “1” with a “0” and each “0” with a “1”).",
        ..BLANK
    },
    // 0x13
    OpcodeTemplate {
        mnemonic: Mnemonic::Negb,
        byte_length: 2,
        var_count: 1,
        operands: BREG_DST,
        mode: AddressingMode::Direct,
        description: "NEGATE SHORT-INTEGER.",
        long_description: "Negates the value of the short-integer operand.",
        ..BLANK
    },
    // 0x14
    OpcodeTemplate {
        mnemonic: Mnemonic::Xchb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "EXCHANGE BYTE.",
        long_description: "Exchanges the value of the source byte operand with that of the destination byte operand.",
        ..BLANK
    },
    // 0x15
    OpcodeTemplate {
        mnemonic: Mnemonic::Decb,
        byte_length: 2,
        var_count: 1,
        operands: BREG_DST,
        mode: AddressingMode::Direct,
        description: "DECREMENT BYTE.",
        long_description: "Decrements the value of the operand by one.",
        ..BLANK
    },
    // 0x16
    OpcodeTemplate {
        mnemonic: Mnemonic::Extb,
        byte_length: 2,
        var_count: 1,
        operands: WREG_DST,
        mode: AddressingMode::Direct,
        description: "SIGN-EXTEND SHORT-INTEGER INTO INTEGER.",
        long_description: "Sign-extends the low-order byte of the operand throughout the high-order byte of the operand.",
        ..BLANK
    },
    // 0x17
    OpcodeTemplate {
        mnemonic: Mnemonic::Incb,
        byte_length: 2,
        var_count: 1,
        operands: BREG_DST,
        mode: AddressingMode::Direct,
        description: "INCREMENT BYTE.",
        long_description: "Increments the value of the byte operand by 1.",
        ..BLANK
    },
    // 0x18
    OpcodeTemplate {
        mnemonic: Mnemonic::Shrb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_COUNT,
        mode: AddressingMode::Direct,
        description: "LOGICAL RIGHT SHIFT BYTE.",
        long_description: "Shifts the destination byte operand to the right as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. The left bits of the result are filled with zeros. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x19
    OpcodeTemplate {
        mnemonic: Mnemonic::Shlb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_COUNT,
        mode: AddressingMode::Direct,
        description: "SHIFT BYTE LEFT.",
        long_description: "Shifts the destination byte operand to the left as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. The right bits of the result are filled with zeros. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x1A
    OpcodeTemplate {
        mnemonic: Mnemonic::Shrab,
        byte_length: 3,
        var_count: 2,
        operands: BREG_COUNT,
        mode: AddressingMode::Direct,
        description: "ARITHMETIC RIGHT SHIFT BYTE.",
        long_description: "Shifts the destination byte operand to the right as many times as specified by the count operand. The count may be specified either as an immediate value in the range of 0 to 15 (0FH), inclusive, or as the content of any register (10–0FFH) with a value in the range of 0 to 31 (1FH), inclusive. If the original high order bit value was “0,” zeros are shifted in. If the value was “1,” ones are shifted in. The last bit shifted out is saved in the carry flag.",
        ..BLANK
    },
    // 0x1B
    OpcodeTemplate {
        mnemonic: Mnemonic::Xchb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "EXCHANGE BYTE.",
        long_description: "Exchanges the value of the source byte operand with that of the destination byte operand.",
        variable_length: true,
        ..BLANK
    },
    // 0x1C
    OpcodeTemplate {
        mnemonic: Mnemonic::Est,
        byte_length: 3,
        var_count: 2,
        operands: EST_OPERANDS,
        mode: AddressingMode::ExtendedIndirect,
        description: "EXTENDED STORE WORD.",
        long_description: "Stores the value of the source (leftmost) word operand into the destination (rightmost) operand. This instruction allows you to move data from the lower register file to anywhere in the 16-Mbyte address space.",
        ..BLANK
    },
    // 0x1D
    OpcodeTemplate {
        mnemonic: Mnemonic::Est,
        byte_length: 6,
        var_count: 2,
        operands: EST_OPERANDS,
        mode: AddressingMode::ExtendedIndexed,
        description: "EXTENDED STORE WORD.",
        long_description: "Stores the value of the source (leftmost) word operand into the destination (rightmost) operand. This instruction allows you to move data from the lower register file to anywhere in the 16-Mbyte address space.",
        ..BLANK
    },
    // 0x1E
    OpcodeTemplate {
        mnemonic: Mnemonic::Estb,
        byte_length: 3,
        var_count: 2,
        operands: ESTB_OPERANDS,
        mode: AddressingMode::ExtendedIndirect,
        description: "EXTENDED STORE BYTE.",
        long_description: "Stores the value of the source (leftmost) byte operand into the destination (rightmost) operand. This instruction allows you to move data from the lower register file to anywhere in the 16- Mbyte address space.",
        ..BLANK
    },
    // 0x1F
    OpcodeTemplate {
        mnemonic: Mnemonic::Estb,
        byte_length: 6,
        var_count: 2,
        operands: ESTB_OPERANDS,
        mode: AddressingMode::ExtendedIndexed,
        description: "EXTENDED STORE BYTE.",
        long_description: "Stores the value of the source (leftmost) byte operand into the destination (rightmost) operand. This instruction allows you to move data from the lower register file to anywhere in the 16- Mbyte address space.",
        ..BLANK
    },
    // 0x20
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x21
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x22
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x23
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x24
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x25
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x26
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x27
    OpcodeTemplate {
        mnemonic: Mnemonic::Sjmp,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –1024 to +1023, inclusive.",
        ..BLANK
    },
    // 0x28
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x29
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x2A
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x2B
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x2C
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x2D
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x2E
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x2F
    OpcodeTemplate {
        mnemonic: Mnemonic::Scall,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "SHORT CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –1024 to +1023.",
        ..BLANK
    },
    // 0x30
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x31
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x32
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x33
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x34
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x35
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x36
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x37
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbc,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS CLEAR.",
        long_description: "Tests the specified bit. If the bit is set, control passes to the next sequential instruction. If the bit is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x38
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x39
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x3A
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x3B
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x3C
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x3D
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x3E
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x3F
    OpcodeTemplate {
        mnemonic: Mnemonic::Jbs,
        byte_length: 3,
        var_count: 3,
        operands: BIT_TEST,
        mode: AddressingMode::Indexed,
        description: "JUMP IF BIT IS SET.",
        long_description: "Tests the specified bit. If the bit is clear, control passes to the next sequential instruction. If the bit is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0x40
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 4,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Direct,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the two source word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x41
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 5,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the two source word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x42
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 4,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the two source word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x43
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 5,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the two source word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        variable_length: true,
        ..BLANK
    },
    // 0x44
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 4,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Direct,
        description: "ADD WORDS.",
        long_description: "Adds the two source word operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x45
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 5,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Immediate,
        description: "ADD WORDS.",
        long_description: "Adds the two source word operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x46
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 4,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Indirect,
        description: "ADD WORDS.",
        long_description: "Adds the two source word operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x47
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 5,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Indexed,
        description: "ADD WORDS.",
        long_description: "Adds the two source word operands and stores the sum into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0x48
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 4,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Direct,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the first source word operand from the second, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x49
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 5,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Immediate,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the first source word operand from the second, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x4A
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 4,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Indirect,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the first source word operand from the second, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x4B
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 5,
        var_count: 3,
        operands: WORD_3OP,
        mode: AddressingMode::Indexed,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the first source word operand from the second, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        variable_length: true,
        ..BLANK
    },
    // 0x4C
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 4,
        var_count: 3,
        operands: MUL_3OP,
        mode: AddressingMode::Direct,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the two source word operands, using unsigned arithmetic, and stores the 32-bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x4D
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 5,
        var_count: 3,
        operands: MUL_3OP,
        mode: AddressingMode::Immediate,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the two source word operands, using unsigned arithmetic, and stores the 32-bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x4E
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 4,
        var_count: 3,
        operands: MUL_3OP,
        mode: AddressingMode::Indirect,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the two source word operands, using unsigned arithmetic, and stores the 32-bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x4F
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 5,
        var_count: 3,
        operands: MUL_3OP,
        mode: AddressingMode::Indexed,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the two source word operands, using unsigned arithmetic, and stores the 32-bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        variable_length: true,
        ..BLANK
    },
    // 0x50
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Direct,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the two source byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x51
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the two source byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x52
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the two source byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x53
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 5,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the two source byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        variable_length: true,
        ..BLANK
    },
    // 0x54
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Direct,
        description: "ADD BYTES.",
        long_description: "Adds the two source byte operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x55
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Immediate,
        description: "ADD BYTES.",
        long_description: "Adds the two source byte operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x56
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Indirect,
        description: "ADD BYTES.",
        long_description: "Adds the two source byte operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x57
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 5,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Indexed,
        description: "ADD BYTES.",
        long_description: "Adds the two source byte operands and stores the sum into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0x58
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Direct,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the second source byte operand from the first, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x59
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Immediate,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the second source byte operand from the first, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x5A
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 4,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Indirect,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the second source byte operand from the first, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x5B
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 5,
        var_count: 3,
        operands: BYTE_3OP,
        mode: AddressingMode::Indexed,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the second source byte operand from the first, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        variable_length: true,
        ..BLANK
    },
    // 0x5C
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 4,
        var_count: 3,
        operands: MULB_3OP,
        mode: AddressingMode::Direct,
        description: "MULTIPLY BYTES, UNSIGNED.",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x5D
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 4,
        var_count: 3,
        operands: MULB_3OP,
        mode: AddressingMode::Immediate,
        description: "MULTIPLY BYTES, UNSIGNED.",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x5E
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 4,
        var_count: 3,
        operands: MULB_3OP,
        mode: AddressingMode::Indirect,
        description: "MULTIPLY BYTES, UNSIGNED.",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x5F
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 5,
        var_count: 3,
        operands: MULB_3OP,
        mode: AddressingMode::Indexed,
        description: "MULTIPLY BYTES, UNSIGNED.",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        variable_length: true,
        ..BLANK
    },
    // 0x60
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the source and destination word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x61
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the source and destination word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x62
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the source and destination word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x63
    OpcodeTemplate {
        mnemonic: Mnemonic::And,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL AND WORDS.",
        long_description: "ANDs the source and destination word operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        variable_length: true,
        ..BLANK
    },
    // 0x64
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "ADD WORDS.",
        long_description: "Adds the source and destination word operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x65
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "ADD WORDS.",
        long_description: "Adds the source and destination word operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x66
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "ADD WORDS.",
        long_description: "Adds the source and destination word operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x67
    OpcodeTemplate {
        mnemonic: Mnemonic::Add,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "ADD WORDS.",
        long_description: "Adds the source and destination word operands and stores the sum into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0x68
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x69
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x6A
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x6B
    OpcodeTemplate {
        mnemonic: Mnemonic::Sub,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "SUBTRACT WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        variable_length: true,
        ..BLANK
    },
    // 0x6C
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 3,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Direct,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the source and destination word operands, using unsigned arithmetic, and stores the 32- bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x6D
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 4,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the source and destination word operands, using unsigned arithmetic, and stores the 32- bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x6E
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 3,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the source and destination word operands, using unsigned arithmetic, and stores the 32- bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x6F
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulu,
        byte_length: 4,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "MULTIPLY WORDS, UNSIGNED.",
        long_description: "Multiplies the source and destination word operands, using unsigned arithmetic, and stores the 32- bit result into the destination double-word operand. The sticky bit flag is undefined after the instruction is executed.",
        variable_length: true,
        ..BLANK
    },
    // 0x70
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the source and destination byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x71
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the source and destination byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x72
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the source and destination byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x73
    OpcodeTemplate {
        mnemonic: Mnemonic::Andb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL AND BYTES.",
        long_description: "ANDs the source and destination byte operands and stores the result into the destination operand. The result has ones in only the bit positions in which both operands had a “1” and zeros in all other bit positions.",
        variable_length: true,
        ..BLANK
    },
    // 0x74
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "ADD BYTES.",
        long_description: "Adds the source and destination byte operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x75
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "ADD BYTES.",
        long_description: "Adds the source and destination byte operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x76
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "ADD BYTES.",
        long_description: "Adds the source and destination byte operands and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0x77
    OpcodeTemplate {
        mnemonic: Mnemonic::Addb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "ADD BYTES.",
        long_description: "Adds the source and destination byte operands and stores the sum into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0x78
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x79
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x7A
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0x7B
    OpcodeTemplate {
        mnemonic: Mnemonic::Subb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "SUBTRACT BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand, stores the result in the destination operand, and sets the carry flag as the complement of borrow.",
        variable_length: true,
        ..BLANK
    },
    // 0x7C
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Direct,
        description: "MULTIPLY BYTES",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x7D
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "MULTIPLY BYTES",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x7E
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "MULTIPLY BYTES",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        ..BLANK
    },
    // 0x7F
    OpcodeTemplate {
        mnemonic: Mnemonic::Mulub,
        byte_length: 4,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "MULTIPLY BYTES",
        long_description: "Multiplies the source and destination operands, using unsigned arithmetic, and stores the word result into the destination operand. The sticky bit flag is undefined after the instruction is executed.",
        variable_length: true,
        ..BLANK
    },
    // 0x80
    OpcodeTemplate {
        mnemonic: Mnemonic::Or,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "LOGICAL OR WORDS.",
        long_description: "ORs the source word operand with the destination word operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        ..BLANK
    },
    // 0x81
    OpcodeTemplate {
        mnemonic: Mnemonic::Or,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL OR WORDS.",
        long_description: "ORs the source word operand with the destination word operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        ..BLANK
    },
    // 0x82
    OpcodeTemplate {
        mnemonic: Mnemonic::Or,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL OR WORDS.",
        long_description: "ORs the source word operand with the destination word operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        ..BLANK
    },
    // 0x83
    OpcodeTemplate {
        mnemonic: Mnemonic::Or,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL OR WORDS.",
        long_description: "ORs the source word operand with the destination word operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        variable_length: true,
        ..BLANK
    },
    // 0x84
    OpcodeTemplate {
        mnemonic: Mnemonic::Xor,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "LOGICAL EXCLUSIVE-OR WORDS",
        long_description: "XORs the source word operand with the destination word operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x85
    OpcodeTemplate {
        mnemonic: Mnemonic::Xor,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL EXCLUSIVE-OR WORDS",
        long_description: "XORs the source word operand with the destination word operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x86
    OpcodeTemplate {
        mnemonic: Mnemonic::Xor,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL EXCLUSIVE-OR WORDS",
        long_description: "XORs the source word operand with the destination word operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x87
    OpcodeTemplate {
        mnemonic: Mnemonic::Xor,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL EXCLUSIVE-OR WORDS",
        long_description: "XORs the source word operand with the destination word operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        variable_length: true,
        ..BLANK
    },
    // 0x88
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmp,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "COMPARE WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        ..BLANK
    },
    // 0x89
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmp,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "COMPARE WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        ..BLANK
    },
    // 0x8A
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmp,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "COMPARE WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        ..BLANK
    },
    // 0x8B
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmp,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "COMPARE WORDS.",
        long_description: "Subtracts the source word operand from the destination word operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        variable_length: true,
        ..BLANK
    },
    // 0x8C
    OpcodeTemplate {
        mnemonic: Mnemonic::Divu,
        byte_length: 3,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Direct,
        description: "DIVIDE WORDS, UNSIGNED.",
        long_description: "Divides the contents of the destination double-word operand by the contents of the source word operand, using unsigned arithmetic. It stores the quotient into the low-order word (i.e., the word with the lower address) of the destination operand and the remainder into the high-order word. The following two statements are performed concurrently.",
        ..BLANK
    },
    // 0x8D
    OpcodeTemplate {
        mnemonic: Mnemonic::Divu,
        byte_length: 4,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "DIVIDE WORDS, UNSIGNED.",
        long_description: "Divides the contents of the destination double-word operand by the contents of the source word operand, using unsigned arithmetic. It stores the quotient into the low-order word (i.e., the word with the lower address) of the destination operand and the remainder into the high-order word. The following two statements are performed concurrently.",
        ..BLANK
    },
    // 0x8E
    OpcodeTemplate {
        mnemonic: Mnemonic::Divu,
        byte_length: 3,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "DIVIDE WORDS, UNSIGNED.",
        long_description: "Divides the contents of the destination double-word operand by the contents of the source word operand, using unsigned arithmetic. It stores the quotient into the low-order word (i.e., the word with the lower address) of the destination operand and the remainder into the high-order word. The following two statements are performed concurrently.",
        ..BLANK
    },
    // 0x8F
    OpcodeTemplate {
        mnemonic: Mnemonic::Divu,
        byte_length: 4,
        var_count: 2,
        operands: LREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "DIVIDE WORDS, UNSIGNED.",
        long_description: "Divides the contents of the destination double-word operand by the contents of the source word operand, using unsigned arithmetic. It stores the quotient into the low-order word (i.e., the word with the lower address) of the destination operand and the remainder into the high-order word. The following two statements are performed concurrently.",
        variable_length: true,
        ..BLANK
    },
    // 0x90
    OpcodeTemplate {
        mnemonic: Mnemonic::Orb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "LOGICAL OR BYTES.",
        long_description: "ORs the source byte operand with the destination byte operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        ..BLANK
    },
    // 0x91
    OpcodeTemplate {
        mnemonic: Mnemonic::Orb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL OR BYTES.",
        long_description: "ORs the source byte operand with the destination byte operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        ..BLANK
    },
    // 0x92
    OpcodeTemplate {
        mnemonic: Mnemonic::Orb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL OR BYTES.",
        long_description: "ORs the source byte operand with the destination byte operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        ..BLANK
    },
    // 0x93
    OpcodeTemplate {
        mnemonic: Mnemonic::Orb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL OR BYTES.",
        long_description: "ORs the source byte operand with the destination byte operand and replaces the original destination operand with the result. The result has a “1” in each bit position in which either the source or destination operand had a “1”.",
        variable_length: true,
        ..BLANK
    },
    // 0x94
    OpcodeTemplate {
        mnemonic: Mnemonic::Xorb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "LOGICAL EXCLUSIVE-OR BYTES.",
        long_description: "XORs the source byte operand with the destination byte operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x95
    OpcodeTemplate {
        mnemonic: Mnemonic::Xorb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "LOGICAL EXCLUSIVE-OR BYTES.",
        long_description: "XORs the source byte operand with the destination byte operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x96
    OpcodeTemplate {
        mnemonic: Mnemonic::Xorb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "LOGICAL EXCLUSIVE-OR BYTES.",
        long_description: "XORs the source byte operand with the destination byte operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        ..BLANK
    },
    // 0x97
    OpcodeTemplate {
        mnemonic: Mnemonic::Xorb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "LOGICAL EXCLUSIVE-OR BYTES.",
        long_description: "XORs the source byte operand with the destination byte operand and stores the result in the destination operand. The result has ones in the bit positions in which either operand (but not both) had a “1” and zeros in all other bit positions.",
        variable_length: true,
        ..BLANK
    },
    // 0x98
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmpb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "COMPARE BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        ..BLANK
    },
    // 0x99
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmpb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "COMPARE BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        ..BLANK
    },
    // 0x9A
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmpb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "COMPARE BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        ..BLANK
    },
    // 0x9B
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmpb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "COMPARE BYTES.",
        long_description: "Subtracts the source byte operand from the destination byte operand. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        variable_length: true,
        ..BLANK
    },
    // 0x9C
    OpcodeTemplate {
        mnemonic: Mnemonic::Divub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Direct,
        description: "DIVIDE BYTES, UNSIGNED.",
        long_description: "This instruction divides the contents of the destination word operand by the contents of the source byte operand, using unsigned arithmetic. It stores the quotient into the low-order byte (i.e., the byte with the lower address) of the destination operand and the remainder into the high-order byte. The following two statements are performed concurrently.",
        ..BLANK
    },
    // 0x9D
    OpcodeTemplate {
        mnemonic: Mnemonic::Divub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "DIVIDE BYTES, UNSIGNED.",
        long_description: "This instruction divides the contents of the destination word operand by the contents of the source byte operand, using unsigned arithmetic. It stores the quotient into the low-order byte (i.e., the byte with the lower address) of the destination operand and the remainder into the high-order byte. The following two statements are performed concurrently.",
        ..BLANK
    },
    // 0x9E
    OpcodeTemplate {
        mnemonic: Mnemonic::Divub,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "DIVIDE BYTES, UNSIGNED.",
        long_description: "This instruction divides the contents of the destination word operand by the contents of the source byte operand, using unsigned arithmetic. It stores the quotient into the low-order byte (i.e., the byte with the lower address) of the destination operand and the remainder into the high-order byte. The following two statements are performed concurrently.",
        ..BLANK
    },
    // 0x9F
    OpcodeTemplate {
        mnemonic: Mnemonic::Divub,
        byte_length: 4,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "DIVIDE BYTES, UNSIGNED.",
        long_description: "This instruction divides the contents of the destination word operand by the contents of the source byte operand, using unsigned arithmetic. It stores the quotient into the low-order byte (i.e., the byte with the lower address) of the destination operand and the remainder into the high-order byte. The following two statements are performed concurrently.",
        variable_length: true,
        ..BLANK
    },
    // 0xA0
    OpcodeTemplate {
        mnemonic: Mnemonic::Ld,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "LOAD WORD.",
        long_description: "Loads the value of the source word operand into the destination operand.",
        ..BLANK
    },
    // 0xA1
    OpcodeTemplate {
        mnemonic: Mnemonic::Ld,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "LOAD WORD.",
        long_description: "Loads the value of the source word operand into the destination operand.",
        ..BLANK
    },
    // 0xA2
    OpcodeTemplate {
        mnemonic: Mnemonic::Ld,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "LOAD WORD.",
        long_description: "Loads the value of the source word operand into the destination operand.",
        ..BLANK
    },
    // 0xA3
    OpcodeTemplate {
        mnemonic: Mnemonic::Ld,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "LOAD WORD.",
        long_description: "Loads the value of the source word operand into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xA4
    OpcodeTemplate {
        mnemonic: Mnemonic::Addc,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "ADD WORDS WITH CARRY.",
        long_description: "Adds the source and destination word operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0xA5
    OpcodeTemplate {
        mnemonic: Mnemonic::Addc,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "ADD WORDS WITH CARRY.",
        long_description: "Adds the source and destination word operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0xA6
    OpcodeTemplate {
        mnemonic: Mnemonic::Addc,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "ADD WORDS WITH CARRY.",
        long_description: "Adds the source and destination word operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0xA7
    OpcodeTemplate {
        mnemonic: Mnemonic::Addc,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "ADD WORDS WITH CARRY.",
        long_description: "Adds the source and destination word operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xA8
    OpcodeTemplate {
        mnemonic: Mnemonic::Subc,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Direct,
        description: "SUBTRACT WORDS WITH BORROW.",
        long_description: "Subtracts the source word operand from the destination word operand. If the carry flag was clear, SUBC subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0xA9
    OpcodeTemplate {
        mnemonic: Mnemonic::Subc,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Immediate,
        description: "SUBTRACT WORDS WITH BORROW.",
        long_description: "Subtracts the source word operand from the destination word operand. If the carry flag was clear, SUBC subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0xAA
    OpcodeTemplate {
        mnemonic: Mnemonic::Subc,
        byte_length: 3,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indirect,
        description: "SUBTRACT WORDS WITH BORROW.",
        long_description: "Subtracts the source word operand from the destination word operand. If the carry flag was clear, SUBC subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0xAB
    OpcodeTemplate {
        mnemonic: Mnemonic::Subc,
        byte_length: 4,
        var_count: 2,
        operands: WREG_WAOP,
        mode: AddressingMode::Indexed,
        description: "SUBTRACT WORDS WITH BORROW.",
        long_description: "Subtracts the source word operand from the destination word operand. If the carry flag was clear, SUBC subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        variable_length: true,
        ..BLANK
    },
    // 0xAC
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbze,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Direct,
        description: "LOAD BYTE ZERO-EXTENDED.",
        long_description: "Zeroextends the value of the source byte operand and loads it into the destination word operand.",
        ..BLANK
    },
    // 0xAD
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbze,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "LOAD BYTE ZERO-EXTENDED.",
        long_description: "Zeroextends the value of the source byte operand and loads it into the destination word operand.",
        ..BLANK
    },
    // 0xAE
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbze,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "LOAD BYTE ZERO-EXTENDED.",
        long_description: "Zeroextends the value of the source byte operand and loads it into the destination word operand.",
        ..BLANK
    },
    // 0xAF
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbze,
        byte_length: 4,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "LOAD BYTE ZERO-EXTENDED.",
        long_description: "Zeroextends the value of the source byte operand and loads it into the destination word operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xB0
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "LOAD BYTE.",
        long_description: "Loads the value of the source byte operand into the destination operand.",
        ..BLANK
    },
    // 0xB1
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "LOAD BYTE.",
        long_description: "Loads the value of the source byte operand into the destination operand.",
        ..BLANK
    },
    // 0xB2
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "LOAD BYTE.",
        long_description: "Loads the value of the source byte operand into the destination operand.",
        ..BLANK
    },
    // 0xB3
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "LOAD BYTE.",
        long_description: "Loads the value of the source byte operand into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xB4
    OpcodeTemplate {
        mnemonic: Mnemonic::Addcb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "ADD BYTES WITH CARRY.",
        long_description: "Adds the source and destination byte operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0xB5
    OpcodeTemplate {
        mnemonic: Mnemonic::Addcb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "ADD BYTES WITH CARRY.",
        long_description: "Adds the source and destination byte operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0xB6
    OpcodeTemplate {
        mnemonic: Mnemonic::Addcb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "ADD BYTES WITH CARRY.",
        long_description: "Adds the source and destination byte operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        ..BLANK
    },
    // 0xB7
    OpcodeTemplate {
        mnemonic: Mnemonic::Addcb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "ADD BYTES WITH CARRY.",
        long_description: "Adds the source and destination byte operands and the carry flag (0 or 1) and stores the sum into the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xB8
    OpcodeTemplate {
        mnemonic: Mnemonic::Subcb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Direct,
        description: "SUBTRACT BYTES WITH BORROW.",
        long_description: "Subtracts the source byte operand from the destination byte operand. If the carry flag was clear, SUBCB subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0xB9
    OpcodeTemplate {
        mnemonic: Mnemonic::Subcb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "SUBTRACT BYTES WITH BORROW.",
        long_description: "Subtracts the source byte operand from the destination byte operand. If the carry flag was clear, SUBCB subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0xBA
    OpcodeTemplate {
        mnemonic: Mnemonic::Subcb,
        byte_length: 3,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "SUBTRACT BYTES WITH BORROW.",
        long_description: "Subtracts the source byte operand from the destination byte operand. If the carry flag was clear, SUBCB subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        ..BLANK
    },
    // 0xBB
    OpcodeTemplate {
        mnemonic: Mnemonic::Subcb,
        byte_length: 4,
        var_count: 2,
        operands: BREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "SUBTRACT BYTES WITH BORROW.",
        long_description: "Subtracts the source byte operand from the destination byte operand. If the carry flag was clear, SUBCB subtracts 1 from the result. It stores the result in the destination operand and sets the carry flag as the complement of borrow.",
        variable_length: true,
        ..BLANK
    },
    // 0xBC
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbse,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Direct,
        description: "LOAD BYTE SIGN-EXTENDED.",
        long_description: "Signextends the value of the source shortinteger operand and loads it into the destination integer operand.",
        ..BLANK
    },
    // 0xBD
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbse,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Immediate,
        description: "LOAD BYTE SIGN-EXTENDED.",
        long_description: "Signextends the value of the source shortinteger operand and loads it into the destination integer operand.",
        ..BLANK
    },
    // 0xBE
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbse,
        byte_length: 3,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indirect,
        description: "LOAD BYTE SIGN-EXTENDED.",
        long_description: "Signextends the value of the source shortinteger operand and loads it into the destination integer operand.",
        ..BLANK
    },
    // 0xBF
    OpcodeTemplate {
        mnemonic: Mnemonic::Ldbse,
        byte_length: 4,
        var_count: 2,
        operands: WREG_BAOP,
        mode: AddressingMode::Indexed,
        description: "LOAD BYTE SIGN-EXTENDED.",
        long_description: "Signextends the value of the source shortinteger operand and loads it into the destination integer operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xC0
    OpcodeTemplate {
        mnemonic: Mnemonic::St,
        byte_length: 3,
        var_count: 2,
        operands: ST_OPERANDS,
        mode: AddressingMode::Direct,
        description: "STORE WORD.",
        long_description: "Stores the value of the source (leftmost) word operand into the destination (rightmost) operand.",
        ..BLANK
    },
    // 0xC1
    OpcodeTemplate {
        mnemonic: Mnemonic::Bmov,
        byte_length: 3,
        var_count: 2,
        operands: BLOCK_MOVE,
        mode: AddressingMode::Unspecified,
        description: "BLOCK MOVE.",
        long_description: "Moves a block of word data from one location in memory to another. The source and destination addresses are calculated using indirect addressing with autoincrement.\n A long register (PTRS) addresses the source and destination pointers, which are stored in adjacent word registers. The source pointer (SRCPTR) is the low word and the destination pointer (DSTPTR) is the high word of PTRS.\n A word register (CNTREG) specifies thenumber of transfers. CNTREG must reside in the lower register file; it cannot be windowed. The blocks of word data can be located anywhere in page 00H, but should not overlap. Because the source (SRCPTR) and destination (DSTPTR) pointers are 16 bits wide, this instruction uses nonextended data moves. It cannot operate across page boundaries.",
        ..BLANK
    },
    // 0xC2
    OpcodeTemplate {
        mnemonic: Mnemonic::St,
        byte_length: 3,
        var_count: 2,
        operands: ST_OPERANDS,
        mode: AddressingMode::Indirect,
        description: "STORE WORD.",
        long_description: "Stores the value of the source (leftmost) word operand into the destination (rightmost) operand.",
        ..BLANK
    },
    // 0xC3
    OpcodeTemplate {
        mnemonic: Mnemonic::St,
        byte_length: 4,
        var_count: 2,
        operands: ST_OPERANDS,
        mode: AddressingMode::Indexed,
        description: "STORE WORD.",
        long_description: "Stores the value of the source (leftmost) word operand into the destination (rightmost) operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xC4
    OpcodeTemplate {
        mnemonic: Mnemonic::Stb,
        byte_length: 3,
        var_count: 2,
        operands: STB_OPERANDS,
        mode: AddressingMode::Direct,
        description: "STORE BYTE.",
        long_description: "Stores the value of the source (leftmost) byte operand into the destination (rightmost) operand.",
        ..BLANK
    },
    // 0xC5
    OpcodeTemplate {
        mnemonic: Mnemonic::Cmpl,
        byte_length: 3,
        var_count: 2,
        operands: CMPL_OPERANDS,
        mode: AddressingMode::Direct,
        description: "COMPARE LONG.",
        long_description: "Compares the magnitudes of two double-word (long) operands. The operands are specified using the direct addressing mode. The flags are altered, but the operands remain unaffected. If a borrow occurs, the carry flag is cleared; otherwise, it is set.",
        ..BLANK
    },
    // 0xC6
    OpcodeTemplate {
        mnemonic: Mnemonic::Stb,
        byte_length: 3,
        var_count: 2,
        operands: STB_OPERANDS,
        mode: AddressingMode::Indirect,
        description: "STORE BYTE.",
        long_description: "Stores the value of the source (leftmost) byte operand into the destination (rightmost) operand.",
        ..BLANK
    },
    // 0xC7
    OpcodeTemplate {
        mnemonic: Mnemonic::Stb,
        byte_length: 4,
        var_count: 2,
        operands: STB_OPERANDS,
        mode: AddressingMode::Indexed,
        description: "STORE BYTE.",
        long_description: "Stores the value of the source (leftmost) byte operand into the destination (rightmost) operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xC8
    OpcodeTemplate {
        mnemonic: Mnemonic::Push,
        byte_length: 2,
        var_count: 1,
        operands: PUSH_OPERANDS,
        mode: AddressingMode::Direct,
        description: "PUSH WORD.",
        long_description: "Pushes the word operand onto the stack.",
        ..BLANK
    },
    // 0xC9
    OpcodeTemplate {
        mnemonic: Mnemonic::Push,
        byte_length: 3,
        var_count: 1,
        operands: PUSH_OPERANDS,
        mode: AddressingMode::Immediate,
        description: "PUSH WORD.",
        long_description: "Pushes the word operand onto the stack.",
        ..BLANK
    },
    // 0xCA
    OpcodeTemplate {
        mnemonic: Mnemonic::Push,
        byte_length: 2,
        var_count: 1,
        operands: PUSH_OPERANDS,
        mode: AddressingMode::Indirect,
        description: "PUSH WORD.",
        long_description: "Pushes the word operand onto the stack.",
        ..BLANK
    },
    // 0xCB
    OpcodeTemplate {
        mnemonic: Mnemonic::Push,
        byte_length: 3,
        var_count: 1,
        operands: PUSH_OPERANDS,
        mode: AddressingMode::Indexed,
        description: "PUSH WORD.",
        long_description: "Pushes the word operand onto the stack.",
        variable_length: true,
        ..BLANK
    },
    // 0xCC
    OpcodeTemplate {
        mnemonic: Mnemonic::Pop,
        byte_length: 2,
        var_count: 1,
        operands: POP_OPERANDS,
        mode: AddressingMode::Direct,
        description: "POP WORD.",
        long_description: "Pops the word on top of the stack and places it at the destination operand.",
        ..BLANK
    },
    // 0xCD
    OpcodeTemplate {
        mnemonic: Mnemonic::Bmovi,
        byte_length: 3,
        var_count: 2,
        operands: BLOCK_MOVE,
        mode: AddressingMode::Indirect,
        description: "INTERRUPTIBLE BLOCK MOVE.",
        long_description: "Moves a block of word data from one location in memory to another. The instruction is identical to BMOV, except that BMOVI is interruptible. The source and destination addresses are calculated using indirect addressing with autoincrement.\n A long register (PTRS) addresses the source and destination pointers, which are stored in adjacent word registers. The source pointer (SRCPTR) is the low word and the destination pointer (DSTPTR) is the high word of PTRS.\n A word register (CNTREG) specifies the number of transfers. CNTREG must reside in the lower register file; it cannot be windowed. The blocks of word data can be located anywhere in page 00H, but should not overlap. Because the source (SRCPTR) and destination (DSTPTR) pointers are 16 bits wide, this instruction uses nonexteneded data moves. It cannot operate across page boundaries. (If you need to cross page boundaries, use the EBMOVI instruction.)",
        ..BLANK
    },
    // 0xCE
    OpcodeTemplate {
        mnemonic: Mnemonic::Pop,
        byte_length: 2,
        var_count: 1,
        operands: POP_OPERANDS,
        mode: AddressingMode::Indirect,
        description: "POP WORD.",
        long_description: "Pops the word on top of the stack and places it at the destination operand.",
        ..BLANK
    },
    // 0xCF
    OpcodeTemplate {
        mnemonic: Mnemonic::Pop,
        byte_length: 3,
        var_count: 1,
        operands: POP_OPERANDS,
        mode: AddressingMode::Indexed,
        description: "POP WORD.",
        long_description: "Pops the word on top of the stack and places it at the destination operand.",
        variable_length: true,
        ..BLANK
    },
    // 0xD0
    OpcodeTemplate {
        mnemonic: Mnemonic::Jnst,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF STICKY BIT FLAG IS CLEAR.",
        long_description: "Tests the sticky bit flag. If the flag is set, control passes to the next sequential instruction. If the sticky bit flag is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xD1
    OpcodeTemplate {
        mnemonic: Mnemonic::Jnh,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF NOT HIGHER (UNSIGNED).",
        long_description: "Tests both the zero flag and the carry flag. If the carry flag is set and the zero flag is clear, control passes to the next sequential instruction. If either the carry flag is clear or the zero flag is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xD2
    OpcodeTemplate {
        mnemonic: Mnemonic::Jgt,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF SIGNED GREATER THAN.",
        long_description: "Tests both the zero flag and the negative flag. If either flag is set, control passes to the next sequential instruction. If both flags are clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xD3
    OpcodeTemplate {
        mnemonic: Mnemonic::Jnc,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF CARRY FLAG IS CLEAR.",
        long_description: "Tests the carry flag. If the flag is set, control passes to the next sequential instruction. If the carry flag is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xD4
    OpcodeTemplate {
        mnemonic: Mnemonic::Jnvt,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF OVERFLOW-TRAP FLAG IS CLEAR.",
        long_description: "Tests the overflow-trap flag. If the flag is set, this instruction clears the flag and passes control to the next sequential instruction. If the overflow-trap flag is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xD5
    OpcodeTemplate {
        mnemonic: Mnemonic::Jnv,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF OVERFLOW FLAG IS CLEAR.",
        long_description: "Tests the overflow flag. If the flag is set, control passes to the next sequential instruction. If the overflow flag is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xD6
    OpcodeTemplate {
        mnemonic: Mnemonic::Jge,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF SIGNED GREATER THAN OR EQUAL.",
        long_description: "Tests the negative flag. If the negative flag is set, control passes to the next sequential instruction. If the negative flag is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xD7
    OpcodeTemplate {
        mnemonic: Mnemonic::Jne,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF NOT EQUAL.",
        long_description: "Tests the zero flag. If the flag is set, control passes to the next sequential instruction. If the zero flag is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xD8
    OpcodeTemplate {
        mnemonic: Mnemonic::Jst,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF STICKY BIT FLAG IS SET.",
        long_description: "Tests the sticky bit flag. If the flag is clear, control passes to the next sequential instruction. If the sticky bit flag is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xD9
    OpcodeTemplate {
        mnemonic: Mnemonic::Jh,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF HIGHER (UNSIGNED).",
        long_description: "Tests both the zero flag and the carry flag. If either the carry flag is clear or the zero flag is set, control passes to the next sequential instruction. If the carry flag is set and the zero flag is clear, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xDA
    OpcodeTemplate {
        mnemonic: Mnemonic::Jle,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF SIGNED LESS THAN OR EQUAL.",
        long_description: "Tests both the negative flag and the zero flag. If both flags are clear, control passes to the next sequential instruction. If either flag is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xDB
    OpcodeTemplate {
        mnemonic: Mnemonic::Jc,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF CARRY FLAG IS SET.",
        long_description: "Tests the carry flag. If the carry flag is clear, control passes to the next sequential instruction. If the carry flag is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xDC
    OpcodeTemplate {
        mnemonic: Mnemonic::Jvt,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF OVERFLOW-TRAP FLAG IS SET.",
        long_description: "Tests the overflow-trap flag. If the flag is clear, control passes to the next sequential instruction. If the overflow-trap flag is set, this instruction clears the flag and adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xDD
    OpcodeTemplate {
        mnemonic: Mnemonic::Jv,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF OVERFLOW FLAG IS SET.",
        long_description: "Tests the overflow flag. If the flag is clear, control passes to the next sequential instruction. If the overflow flag is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in range of –128 to +127.",
        ..BLANK
    },
    // 0xDE
    OpcodeTemplate {
        mnemonic: Mnemonic::Jlt,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF SIGNED LESS THAN.",
        long_description: "Tests the negative flag. If the flag is clear, control passes to the next sequential instruction. If the negative flag is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xDF
    OpcodeTemplate {
        mnemonic: Mnemonic::Je,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::Indexed,
        description: "JUMP IF EQUAL.",
        long_description: "Tests the zero flag. If the flag is clear, control passes to the next sequential instruction. If the zero flag is set, this instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xE0
    OpcodeTemplate {
        mnemonic: Mnemonic::Djnz,
        byte_length: 3,
        var_count: 2,
        operands: DJNZ_OPERANDS,
        mode: AddressingMode::Indexed,
        description: "DECREMENT AND JUMP IF NOT ZERO.",
        long_description: "Decrements the value of the byte operand by 1. If the result is 0, control passes to the next sequential instruction. If the result is not 0, the instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xE1
    OpcodeTemplate {
        mnemonic: Mnemonic::Djnzw,
        byte_length: 3,
        var_count: 2,
        operands: DJNZW_OPERANDS,
        mode: AddressingMode::Indexed,
        description: "DECREMENT AND JUMP IF NOT ZERO WORD.",
        long_description: "Decrements the value of the word operand by 1. If the result is 0, control passes to the next sequential instruction. If the result is not 0, the instruction adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –128 to +127.",
        ..BLANK
    },
    // 0xE2
    OpcodeTemplate {
        mnemonic: Mnemonic::Tijmp,
        byte_length: 4,
        var_count: 3,
        operands: TIJMP_OPERANDS,
        mode: AddressingMode::Indexed,
        description: "TABLE INDIRECT JUMP.",
        long_description: "Causes execution to continue at an address selected from a table of addresses.\n The first word register, TBASE, contains the 16-bit address of the beginning of the jump table. TBASE can be located in RAM up to FEH without windowing or above FFH with windowing. The jump table itself can be placed at any nonreserved memory location on a word boundary in page FFH.\n The second word register, INDEX, contains the 16-bit address that points to a register containing a 7-bit value. This value is used to calculate the offset into the jump table. Like TBASE, INDEX can be located in RAM up to FEH without windowing or above FFH with windowing. Note that the 16-bit address contained in INDEX is absolute; it disregards any windowing that may be in effect when the TIJMP instruction is executed.\n The byte operand, #MASK, is 7-bit immediate data to mask INDEX. #MASK is ANDed with INDEX to determine the offset (OFFSET). OFFSET is multiplied by two, then added to the base address (TBASE) to determine the destination address (DEST X) in page FFH.",
        ..BLANK
    },
    // 0xE3
    OpcodeTemplate {
        mnemonic: Mnemonic::Ebr,
        byte_length: 2,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::ExtendedIndirect,
        description: "EXTENDED BRANCH INDIRECT.",
        long_description: "Continues execution at the address specified in the operand word register. This instruction is an unconditional indirect jump to anywhere in the 16-Mbyte address space.\n EBR shares its opcode (E3) with the BR instruction. To differentiate between the two, the compiler sets the least-significant bit of treg for the EBR instruction.",
        ..BLANK
    },
    // 0xE4
    OpcodeTemplate {
        mnemonic: Mnemonic::Ebmovi,
        byte_length: 3,
        var_count: 2,
        operands: EBMOVI_OPERANDS,
        mode: AddressingMode::ExtendedIndirect,
        description: "EXTENDED INTERRUPTIBLE BLOCK MOVE.",
        long_description: "Moves a block of word data from one memory location to another. This instruction allows you to move blocks of up to 64K words between any two locations in the 16-Mbyte address space. This instruction is interruptible. The source and destination addresses are calculated using the extended indirect with autoincrement addressing mode. A quadword register (PTRS) addresses the 24-bit pointers, which are stored in adjacent doubleword registers. The source pointer (SRCPTR) is the low double-word and the destination pointer is the high double-word of PTRS. A word register (CNTREG) specifies the number of transfers. This register must reside in the lower register file; it cannot be windowed. The blocks of data can reside anywhere in memory, but should not overlap.",
        ..BLANK
    },
    // 0xE5
    OpcodeTemplate {
        mnemonic: Mnemonic::Reserved,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Unspecified,
        description: "RESERVED.",
        long_description: "",
        reserved: true,
        ..BLANK
    },
    // 0xE6
    OpcodeTemplate {
        mnemonic: Mnemonic::Ejmp,
        byte_length: 4,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::ExtendedIndexed,
        description: "EXTENDED JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The operand may be any address in the entire address space. The offset must be in the range of +8,388,607 to –8,388,608 for 24-bit addresses. This instruction is an unconditional, relative jump to anywhere in the 16-Mbyte address space. It functions only in extended addressing mode.",
        ..BLANK
    },
    // 0xE7
    OpcodeTemplate {
        mnemonic: Mnemonic::Ljmp,
        byte_length: 3,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::LongIndexed,
        description: "LONG JUMP.",
        long_description: "Adds to the program counter the offset between the end of this instruction and the target label, effecting the jump. The offset must be in the range of –32,768 to +32,767.",
        ..BLANK
    },
    // 0xE8
    OpcodeTemplate {
        mnemonic: Mnemonic::Eld,
        byte_length: 3,
        var_count: 2,
        operands: ELD_OPERANDS,
        mode: AddressingMode::ExtendedIndirect,
        description: "EXTENDED LOAD WORD.",
        long_description: "Loads the value of the source word operand into the destination operand. This instruction allows you to move data from anywhere in the 16-Mbyte address space into the lower register file.",
        ..BLANK
    },
    // 0xE9
    OpcodeTemplate {
        mnemonic: Mnemonic::Eld,
        byte_length: 6,
        var_count: 2,
        operands: ELD_OPERANDS,
        mode: AddressingMode::ExtendedIndexed,
        description: "EXTENDED LOAD WORD.",
        long_description: "Loads the value of the source word operand into the destination operand. This instruction allows you to move data from anywhere in the 16-Mbyte address space into the lower register file.",
        ..BLANK
    },
    // 0xEA
    OpcodeTemplate {
        mnemonic: Mnemonic::Eldb,
        byte_length: 3,
        var_count: 2,
        operands: ELDB_OPERANDS,
        mode: AddressingMode::ExtendedIndirect,
        description: "EXTENDED LOAD BYTE.",
        long_description: "Loads the value of the source byte operand into the destination operand. This instruction allows you to move data from anywhere in the 16-Mbyte address space into the lower register file.",
        ..BLANK
    },
    // 0xEB
    OpcodeTemplate {
        mnemonic: Mnemonic::Eldb,
        byte_length: 6,
        var_count: 2,
        operands: ELDB_OPERANDS,
        mode: AddressingMode::ExtendedIndexed,
        description: "EXTENDED LOAD BYTE.",
        long_description: "Loads the value of the source byte operand into the destination operand. This instruction allows you to move data from anywhere in the 16-Mbyte address space into the lower register file.",
        ..BLANK
    },
    // 0xEC
    OpcodeTemplate {
        mnemonic: Mnemonic::Dpts,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "DISABLE PERIPHERAL TRANSACTION SERVER (PTS).",
        long_description: "Disables the peripheral transaction server (PTS).",
        ..BLANK
    },
    // 0xED
    OpcodeTemplate {
        mnemonic: Mnemonic::Epts,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "ENABLE PERIPHERAL TRANSACTION SERVER (PTS).",
        long_description: "Enables the peripheral transaction server (PTS).",
        ..BLANK
    },
    // 0xEE
    OpcodeTemplate {
        mnemonic: Mnemonic::Reserved,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Unspecified,
        description: "RESERVED.",
        long_description: "",
        reserved: true,
        ..BLANK
    },
    // 0xEF
    OpcodeTemplate {
        mnemonic: Mnemonic::Lcall,
        byte_length: 3,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::LongIndexed,
        description: "LONG CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The offset must be in the range of –32,768 to +32,767.",
        ..BLANK
    },
    // 0xF0
    OpcodeTemplate {
        mnemonic: Mnemonic::Ret,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Indirect,
        description: "RETURN FROM SUBROUTINE.",
        long_description: "Pops the PC off the top of the stack.",
        ..BLANK
    },
    // 0xF1
    OpcodeTemplate {
        mnemonic: Mnemonic::Ecall,
        byte_length: 4,
        var_count: 1,
        operands: CODE_ADDR,
        mode: AddressingMode::ExtendedIndexed,
        description: "EXTENDED CALL.",
        long_description: "Pushes the contents of the program counter (the return address) onto the stack, then adds to the program counter the offset between the end of this instruction and the target label, effecting the call. The operand may be any address in the address space. \n This instruction is an unconditional relative call to anywhere in the 16-Mbyte address space. It functions only in extended addressing mode.",
        ..BLANK
    },
    // 0xF2
    OpcodeTemplate {
        mnemonic: Mnemonic::Pushf,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "PUSH FLAGS.",
        long_description: "Pushes the PSW onto the top of the stack, then clears it. Clearing the PSW disables interrupt servicing. Interrupt calls cannot occur immediately following this instruction.",
        ..BLANK
    },
    // 0xF3
    OpcodeTemplate {
        mnemonic: Mnemonic::Popf,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "POP FLAGS.",
        long_description: "Pops the word on top of the stack and places it into the PSW. Interrupt calls cannot occur immediately following this instruction.",
        ..BLANK
    },
    // 0xF4
    OpcodeTemplate {
        mnemonic: Mnemonic::Pusha,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "PUSH ALL.",
        long_description: "This instruction is used instead of PUSHF, to support the eight additional interrupts. It pushes two words (PSW/INT_MASK and INT_MASK1/WSR) onto the stack.\n This instruction clears the PSW, INT_MASK, and INT_MASK1 registers and decrements the SP by 4. Interrupt calls cannot occur immediately following this instruction.",
        ..BLANK
    },
    // 0xF5
    OpcodeTemplate {
        mnemonic: Mnemonic::Popa,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "POP ALL.",
        long_description: "This instruction is used instead of POPF, to support the eight additional interrupts. It pops two words off the stack and places the first word into the INT_MASK1/WSR register pair and the second word into the PSW/INT_MASK register-pair. This instruction increments the SP by 4. Interrupt calls cannot occur immediately following this instruction.",
        ..BLANK
    },
    // 0xF6
    OpcodeTemplate {
        mnemonic: Mnemonic::Idlpd,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Immediate,
        description: "IDLE/POWERDOWN.",
        long_description: "Depending on the 8-bit value of the KEY operand, this instruction causes the device to: \n • enter idle mode, if KEY=1, \n • enter powerdown mode, if KEY=2, \n • execute a reset sequence, \n if KEY > 3. \n The bus controller completes any prefetch cycle in progress before the CPU stops or resets.",
        ..BLANK
    },
    // 0xF7
    OpcodeTemplate {
        mnemonic: Mnemonic::Trap,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "SOFTWARE TRAP.",
        long_description: "This instruction causes an interrupt call that is vectored through location FF2010H. The operation of this instruction is not affected by the state of the interrupt enable flag (I) in the PSW. Interrupt calls cannot occur immediately following this instruction.",
        ..BLANK
    },
    // 0xF8
    OpcodeTemplate {
        mnemonic: Mnemonic::Clrc,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "CLEAR CARRY FLAG.",
        long_description: "Clears the carry flag.",
        ..BLANK
    },
    // 0xF9
    OpcodeTemplate {
        mnemonic: Mnemonic::Setc,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "SET CARRY FLAG.",
        long_description: "Sets the carry flag.",
        ..BLANK
    },
    // 0xFA
    OpcodeTemplate {
        mnemonic: Mnemonic::Di,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "DISABLE INTERRUPTS.",
        long_description: "Disables maskable interrupts. Interrupt calls cannot occur after this instruction.",
        ..BLANK
    },
    // 0xFB
    OpcodeTemplate {
        mnemonic: Mnemonic::Ei,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "ENABLE INTERRUPTS.",
        long_description: "Enables maskable interrupts following the execution of the next statement. Interrupt calls cannot occur immediately following this instruction.",
        ..BLANK
    },
    // 0xFC
    OpcodeTemplate {
        mnemonic: Mnemonic::Clrvt,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "CLEAR OVERFLOW-TRAP FLAG.",
        long_description: "Clears the overflow-trap flag.",
        ..BLANK
    },
    // 0xFD
    OpcodeTemplate {
        mnemonic: Mnemonic::Nop,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "NO OPERATION.",
        long_description: "Does nothing. Control passes to the next sequential instruction.",
        ..BLANK
    },
    // 0xFE
    OpcodeTemplate {
        mnemonic: Mnemonic::Prefix,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Unspecified,
        description: "PREFIX FOR SIGNED MULTIPLICATION AND DIVISION.",
        long_description: "",
        ignore: true,
        ..BLANK
    },
    // 0xFF
    OpcodeTemplate {
        mnemonic: Mnemonic::Rst,
        byte_length: 1,
        var_count: 0,
        operands: NONE,
        mode: AddressingMode::Direct,
        description: "RESET SYSTEM.",
        long_description: "Initializes the PSW to zero, the PC to FF2080H, and the pins and SFRs to their reset values. Executing this instruction causes the RESET# pin to be pulled low for 16 state times.",
        ..BLANK
    },
];

/// Templates for the byte following the signed prefix, sorted by opcode.
pub static SIGNED_OPCODES: [(u8, OpcodeTemplate); 25] = [
    (
        0x1C,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mystery,
            byte_length: 4,
            var_count: 3,
            operands: MUL_3OP,
            mode: AddressingMode::Indirect,
            description: "MYSTERY.",
            long_description: "MYSTERY",
            ..BLANK
        },
    ),
    (
        0x4C,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 4,
            var_count: 3,
            operands: MUL_3OP,
            mode: AddressingMode::Direct,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the two source integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x4D,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 5,
            var_count: 3,
            operands: MUL_3OP,
            mode: AddressingMode::Immediate,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the two source integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x4E,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 4,
            var_count: 3,
            operands: MUL_3OP,
            mode: AddressingMode::Indirect,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the two source integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x4F,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 5,
            var_count: 3,
            operands: MUL_3OP,
            mode: AddressingMode::Indexed,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the two source integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            variable_length: true,
            ..BLANK
        },
    ),
    (
        0x5C,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 4,
            var_count: 3,
            operands: MULB_3OP,
            mode: AddressingMode::Direct,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the two source short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x5D,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 4,
            var_count: 3,
            operands: MULB_3OP,
            mode: AddressingMode::Immediate,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the two source short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x5E,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 4,
            var_count: 3,
            operands: MULB_3OP,
            mode: AddressingMode::Indirect,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the two source short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x5F,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 5,
            var_count: 3,
            operands: MULB_3OP,
            mode: AddressingMode::Indexed,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the two source short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            variable_length: true,
            ..BLANK
        },
    ),
    (
        0x6C,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 3,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Direct,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the source and destination integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x6D,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 4,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Immediate,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the source and destination integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x6E,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 3,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Indirect,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the source and destination integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x6F,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mul,
            byte_length: 4,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Indexed,
            description: "MULTIPLY INTEGERS.",
            long_description: "Multiplies the source and destination integer operands, using signed arithmetic, and stores the 32-bit result into the destination long-integer operand. The sticky bit flag is undefined after the instruction is executed.",
            variable_length: true,
            ..BLANK
        },
    ),
    (
        0x7C,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 3,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Direct,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the source and destination short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x7D,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 3,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Immediate,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the source and destination short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x7E,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 3,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Indirect,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the source and destination short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            ..BLANK
        },
    ),
    (
        0x7F,
        OpcodeTemplate {
            mnemonic: Mnemonic::Mulb,
            byte_length: 4,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Indexed,
            description: "MULTIPLY SHORT-INTEGERS.",
            long_description: "Multiplies the source and destination short-integer operands, using signed arithmetic, and stores the 16-bit result into the destination integer operand. The sticky bit flag is undefined after the instruction is executed.",
            variable_length: true,
            ..BLANK
        },
    ),
    (
        0x8C,
        OpcodeTemplate {
            mnemonic: Mnemonic::Div,
            byte_length: 3,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Direct,
            description: "DIVIDE INTEGERS.",
            long_description: "Divides the contents of the destination long-integer operand by the contents of the source integer word operand, using signed arithmetic. It stores the quotient into the low-order word of the destination (i.e., the word with the lower address) and the remainder into the high-order word.",
            ..BLANK
        },
    ),
    (
        0x8D,
        OpcodeTemplate {
            mnemonic: Mnemonic::Div,
            byte_length: 4,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Immediate,
            description: "DIVIDE INTEGERS.",
            long_description: "Divides the contents of the destination long-integer operand by the contents of the source integer word operand, using signed arithmetic. It stores the quotient into the low-order word of the destination (i.e., the word with the lower address) and the remainder into the high-order word.",
            ..BLANK
        },
    ),
    (
        0x8E,
        OpcodeTemplate {
            mnemonic: Mnemonic::Div,
            byte_length: 3,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Indirect,
            description: "DIVIDE INTEGERS.",
            long_description: "Divides the contents of the destination long-integer operand by the contents of the source integer word operand, using signed arithmetic. It stores the quotient into the low-order word of the destination (i.e., the word with the lower address) and the remainder into the high-order word.",
            ..BLANK
        },
    ),
    (
        0x8F,
        OpcodeTemplate {
            mnemonic: Mnemonic::Div,
            byte_length: 4,
            var_count: 2,
            operands: LREG_WAOP,
            mode: AddressingMode::Indexed,
            description: "DIVIDE INTEGERS.",
            long_description: "Divides the contents of the destination long-integer operand by the contents of the source integer word operand, using signed arithmetic. It stores the quotient into the low-order word of the destination (i.e., the word with the lower address) and the remainder into the high-order word.",
            variable_length: true,
            ..BLANK
        },
    ),
    (
        0x9C,
        OpcodeTemplate {
            mnemonic: Mnemonic::Divb,
            byte_length: 3,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Direct,
            description: "DIVIDE SHORT-INTEGERS.",
            long_description: "Divides the contents of the destination integer operand by the contents of the source short-integer operand, using signed arithmetic. It stores the quotient into the low-order byte of the destination (i.e., the word with the lower address) and the remainder into the highorder byte. ",
            ..BLANK
        },
    ),
    (
        0x9D,
        OpcodeTemplate {
            mnemonic: Mnemonic::Divb,
            byte_length: 3,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Immediate,
            description: "DIVIDE SHORT-INTEGERS.",
            long_description: "Divides the contents of the destination integer operand by the contents of the source short-integer operand, using signed arithmetic. It stores the quotient into the low-order byte of the destination (i.e., the word with the lower address) and the remainder into the highorder byte. ",
            ..BLANK
        },
    ),
    (
        0x9E,
        OpcodeTemplate {
            mnemonic: Mnemonic::Divb,
            byte_length: 3,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Indirect,
            description: "DIVIDE SHORT-INTEGERS.",
            long_description: "Divides the contents of the destination integer operand by the contents of the source short-integer operand, using signed arithmetic. It stores the quotient into the low-order byte of the destination (i.e., the word with the lower address) and the remainder into the highorder byte. ",
            ..BLANK
        },
    ),
    (
        0x9F,
        OpcodeTemplate {
            mnemonic: Mnemonic::Divb,
            byte_length: 4,
            var_count: 2,
            operands: WREG_BAOP,
            mode: AddressingMode::Indexed,
            description: "DIVIDE SHORT-INTEGERS.",
            long_description: "Divides the contents of the destination integer operand by the contents of the source short-integer operand, using signed arithmetic. It stores the quotient into the low-order byte of the destination (i.e., the word with the lower address) and the remainder into the highorder byte. ",
            variable_length: true,
            ..BLANK
        },
    ),
];

/// Looks up the template for `opcode`.
///
/// Every unsigned opcode has an entry. Signed lookups return `None` for
/// opcodes that have no signed form.
pub fn lookup(opcode: u8, signed: bool) -> Option<&'static OpcodeTemplate> {
    if signed {
        SIGNED_OPCODES
            .iter()
            .find(|(op, _)| *op == opcode)
            .map(|(_, template)| template)
    } else {
        Some(&UNSIGNED_OPCODES[usize::from(opcode)])
    }
}
