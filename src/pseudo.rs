//! One-line pseudo-code for decoded instructions.
//!
//! Operand text is first stripped of register annotations and rewritten to
//! a `$r_XX` register notation, then dropped into a per-mnemonic template.

use crate::instruction::Instruction;
use crate::mnemonic::Mnemonic;
use crate::operand::{OperandKind, VarType};

/// Rewrites applied, in order, to each operand value. Each applies once.
const CLEANUPS: &[(&str, &str)] = &[
    ("[R_00 ~(Zero Register)]", ""),
    ("R_", "$r_"),
    ("[$r_00]", ""),
    ("$r_00", "0x00"),
    ("$r_02", "0xFFFF"),
    (" ~(", " ("),
    (" ~", ""),
    (" (Ones Register)", ""),
    ("#", "0x"),
    (" ( GP Reg RAM )", ""),
];

fn clean(value: &str) -> String {
    CLEANUPS
        .iter()
        .fold(value.to_string(), |text, (from, to)| text.replacen(from, to, 1))
}

/// Destination, source and bit-test register slots.
fn slots(insn: &Instruction) -> [String; 3] {
    let mut v: [String; 3] = Default::default();

    if matches!(insn.mnemonic, Mnemonic::Djnz | Mnemonic::Djnzw) {
        if let Some(cadd) = insn.variable(OperandKind::Cadd) {
            v[0] = cadd.value.clone();
        }
        if let Some(reg) = insn.operands.first().and_then(|op| insn.variable(op.kind)) {
            v[1] = reg.value.clone();
        }
        return v;
    }

    for operand in &insn.operands {
        let Some(var) = insn.variable(operand.kind) else {
            continue;
        };
        let value = clean(&var.value);
        match var.var_type {
            VarType::Dest => {
                v[0] = value.replacen("0x000", "$r_", 1).replacen("0x", "$r_", 1);
            }
            VarType::Addr | VarType::Ptrs => v[0] = value,
            VarType::ByteReg => v[2] = value,
            _ => v[1] = value,
        }
    }
    v
}

/// Renders the pseudo-code line for a resolved instruction.
///
/// Mnemonics without a template produce a visible `???` placeholder.
pub fn synthesize(insn: &Instruction) -> String {
    use Mnemonic::*;

    let [dst, src, reg] = slots(insn);
    let name = insn.mnemonic;
    match name {
        Clr | Clrb => format!("{dst} = 0x00"),
        Ext => format!("SIGN EXTEND INT {dst} TO LONG INT"),
        Extb => format!("SIGN EXTEND SHORT INT {dst} TO INT"),
        Jnst | Jnh | Jgt | Jnc | Jnvt | Jnv | Jge | Jne | Jst | Jh | Jle | Jc | Jvt | Jv | Jlt
        | Je => format!("JUMP TO: {dst}"),
        Jbs => format!("if bitno: ({src}) of {reg} is set {{ JUMP TO: {dst} }}"),
        Jbc => format!("if bitno: ({src}) of {reg} is clear {{ JUMP TO: {dst} }}"),
        Ljmp | Sjmp | Ebr | Ejmp => format!("JUMP TO: {dst}"),
        Ecall | Scall | Lcall => format!("CALL SUB_ {dst}"),
        Push => format!("PUSH {src} ONTO THE STACK"),
        Pop => format!("POP THE STACK TO {dst}"),
        Cmpb | Cmp | Cmpl => format!("if ({dst} == {src}) {{"),
        Andb | And => format!("{dst} = {dst} & {src}"),
        Orb | Or | Xor | Xorb => format!("{dst} = {dst} {name} {src}"),
        Not | Notb | Neg | Negb => format!("{dst} = {dst} {name} {dst}"),
        Add | Addb | Addc | Addcb => format!("{dst} = {dst} + {src}"),
        Xch | Xchb => format!("{dst} <={name}=> {src}"),
        Sub | Subc | Subcb | Subb => format!("{dst} = {dst} - {src}"),
        Mul | Mulb | Mulu | Mulub => format!("{dst} = {dst} * {src}"),
        Div | Divb | Divu | Divub => format!("{dst} = {dst} / {src}"),
        Shr | Shrl | Shra | Shral | Shrb | Shrab => format!("{dst} >> {src}"),
        Shl | Shll | Shlb => format!("{dst} << {src}"),
        Dec | Decb => format!("{dst}--"),
        Inc | Incb => format!("{dst}++"),
        Ld | Ldb | Eld | Eldb | Stb | Estb | St | Est | Ldbze | Ldbse => format!("{dst} = {src}"),
        Norml => format!("NORMALIZE {dst}"),
        Bmov | Bmovi | Ebmovi => format!("BMOV {dst} count({src})"),
        Djnz | Djnzw => format!("{src}--; if ( {src} != 0 ) {{ JUMP TO: {dst} }}"),
        _ => format!("??? {dst} = {src}"),
    }
}
