//! MCS-96 instruction mnemonics.

use std::fmt;

use serde::{Serialize, Serializer};

/// Every mnemonic that appears in the opcode tables.
///
/// `Br` never appears in a table entry: it is the plain indirect form of
/// opcode 0xE3, which the decoder rewrites from `Ebr` when the operand's
/// low bit is clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mnemonic {
    Add,
    Addb,
    Addc,
    Addcb,
    And,
    Andb,
    Bmov,
    Bmovi,
    Br,
    Clr,
    Clrb,
    Clrc,
    Clrvt,
    Cmp,
    Cmpb,
    Cmpl,
    Dec,
    Decb,
    Di,
    Div,
    Divb,
    Divu,
    Divub,
    Djnz,
    Djnzw,
    Dpts,
    Ebmovi,
    Ebr,
    Ecall,
    Ei,
    Ejmp,
    Eld,
    Eldb,
    Epts,
    Est,
    Estb,
    Ext,
    Extb,
    Idlpd,
    Inc,
    Incb,
    Jbc,
    Jbs,
    Jc,
    Je,
    Jge,
    Jgt,
    Jh,
    Jle,
    Jlt,
    Jnc,
    Jne,
    Jnh,
    Jnst,
    Jnv,
    Jnvt,
    Jst,
    Jv,
    Jvt,
    Lcall,
    Ld,
    Ldb,
    Ldbse,
    Ldbze,
    Ljmp,
    Mul,
    Mulb,
    Mulu,
    Mulub,
    /// Undocumented signed-prefixed 0x1C.
    Mystery,
    Neg,
    Negb,
    Nop,
    Norml,
    Not,
    Notb,
    Or,
    Orb,
    Pop,
    Popa,
    Popf,
    /// The 0xFE signed-operation prefix byte itself.
    Prefix,
    Push,
    Pusha,
    Pushf,
    Reserved,
    Ret,
    Rst,
    Scall,
    Setc,
    Shl,
    Shlb,
    Shll,
    Shr,
    Shra,
    Shrab,
    Shral,
    Shrb,
    Shrl,
    Sjmp,
    Skip,
    St,
    Stb,
    Sub,
    Subb,
    Subc,
    Subcb,
    Tijmp,
    Trap,
    Xch,
    Xchb,
    Xor,
    Xorb,
}

impl Mnemonic {
    /// Assembler spelling of the mnemonic.
    pub fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Add => "ADD",
            Addb => "ADDB",
            Addc => "ADDC",
            Addcb => "ADDCB",
            And => "AND",
            Andb => "ANDB",
            Bmov => "BMOV",
            Bmovi => "BMOVI",
            Br => "BR",
            Clr => "CLR",
            Clrb => "CLRB",
            Clrc => "CLRC",
            Clrvt => "CLRVT",
            Cmp => "CMP",
            Cmpb => "CMPB",
            Cmpl => "CMPL",
            Dec => "DEC",
            Decb => "DECB",
            Di => "DI",
            Div => "DIV",
            Divb => "DIVB",
            Divu => "DIVU",
            Divub => "DIVUB",
            Djnz => "DJNZ",
            Djnzw => "DJNZW",
            Dpts => "DPTS",
            Ebmovi => "EBMOVI",
            Ebr => "EBR",
            Ecall => "ECALL",
            Ei => "EI",
            Ejmp => "EJMP",
            Eld => "ELD",
            Eldb => "ELDB",
            Epts => "EPTS",
            Est => "EST",
            Estb => "ESTB",
            Ext => "EXT",
            Extb => "EXTB",
            Idlpd => "IDLPD",
            Inc => "INC",
            Incb => "INCB",
            Jbc => "JBC",
            Jbs => "JBS",
            Jc => "JC",
            Je => "JE",
            Jge => "JGE",
            Jgt => "JGT",
            Jh => "JH",
            Jle => "JLE",
            Jlt => "JLT",
            Jnc => "JNC",
            Jne => "JNE",
            Jnh => "JNH",
            Jnst => "JNST",
            Jnv => "JNV",
            Jnvt => "JNVT",
            Jst => "JST",
            Jv => "JV",
            Jvt => "JVT",
            Lcall => "LCALL",
            Ld => "LD",
            Ldb => "LDB",
            Ldbse => "LDBSE",
            Ldbze => "LDBZE",
            Ljmp => "LJMP",
            Mul => "MUL",
            Mulb => "MULB",
            Mulu => "MULU",
            Mulub => "MULUB",
            Mystery => "MYSTERY",
            Neg => "NEG",
            Negb => "NEGB",
            Nop => "NOP",
            Norml => "NORML",
            Not => "NOT",
            Notb => "NOTB",
            Or => "OR",
            Orb => "ORB",
            Pop => "POP",
            Popa => "POPA",
            Popf => "POPF",
            Prefix => "PREFIX",
            Push => "PUSH",
            Pusha => "PUSHA",
            Pushf => "PUSHF",
            Reserved => "Reserved",
            Ret => "RET",
            Rst => "RST",
            Scall => "SCALL",
            Setc => "SETC",
            Shl => "SHL",
            Shlb => "SHLB",
            Shll => "SHLL",
            Shr => "SHR",
            Shra => "SHRA",
            Shrab => "SHRAB",
            Shral => "SHRAL",
            Shrb => "SHRB",
            Shrl => "SHRL",
            Sjmp => "SJMP",
            Skip => "SKIP",
            St => "ST",
            Stb => "STB",
            Sub => "SUB",
            Subb => "SUBB",
            Subc => "SUBC",
            Subcb => "SUBCB",
            Tijmp => "TIJMP",
            Trap => "TRAP",
            Xch => "XCH",
            Xchb => "XCHB",
            Xor => "XOR",
            Xorb => "XORB",
        }
    }

    /// Returns true for the relative conditional jumps (0xD0-0xDF) and the
    /// bit-test / decrement-and-jump forms that may fall through.
    pub fn is_conditional_jump(self) -> bool {
        use Mnemonic::*;
        matches!(
            self,
            Jnst | Jnh | Jgt | Jnc | Jnvt | Jnv | Jge | Jne | Jst | Jh | Jle | Jc | Jvt | Jv | Jlt
                | Je | Jbc | Jbs | Djnz | Djnzw
        )
    }

    /// Returns true for jumps that never fall through.
    pub fn is_unconditional_jump(self) -> bool {
        use Mnemonic::*;
        matches!(self, Sjmp | Ljmp | Ejmp | Br | Ebr | Tijmp)
    }

    /// Returns true for jumps whose target is only known at run time. Their
    /// recorded edges point at the register holding the target.
    pub fn is_indirect_branch(self) -> bool {
        matches!(self, Mnemonic::Br | Mnemonic::Ebr | Mnemonic::Tijmp)
    }

    /// Returns true for subroutine calls.
    pub fn is_call(self) -> bool {
        matches!(self, Mnemonic::Scall | Mnemonic::Lcall | Mnemonic::Ecall)
    }

    /// Returns true for instructions after which execution does not continue
    /// at the next sequential address.
    pub fn is_return(self) -> bool {
        matches!(self, Mnemonic::Ret | Mnemonic::Rst)
    }

    /// Returns true if a basic block must end after this instruction.
    pub fn ends_block(self) -> bool {
        self.is_conditional_jump()
            || self.is_unconditional_jump()
            || self.is_call()
            || self.is_return()
            || self == Mnemonic::Trap
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Mnemonic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_display() {
        assert_eq!(Mnemonic::Djnzw.to_string(), "DJNZW");
        assert_eq!(Mnemonic::Reserved.to_string(), "Reserved");
    }

    #[test]
    fn test_block_terminators() {
        assert!(Mnemonic::Sjmp.ends_block());
        assert!(Mnemonic::Jbc.ends_block());
        assert!(Mnemonic::Lcall.ends_block());
        assert!(Mnemonic::Ret.ends_block());
        assert!(!Mnemonic::Add.ends_block());
        assert!(!Mnemonic::Sjmp.is_conditional_jump());
        assert!(Mnemonic::Br.is_unconditional_jump());
    }
}
