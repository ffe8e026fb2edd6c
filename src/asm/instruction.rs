use std::fmt::Display;

use super::{Cond, Reg};

/// One line of emitted AArch64 assembly. Modeling each mnemonic as its own
/// variant (rather than writing format strings inline at every call site)
/// keeps the per-op emission table in `crate::emitter` a straight
/// one-operation-to-a-handful-of-`Instruction`s mapping, and keeps the
/// `push`/`pop` macro calls and the syscall ABI (`x16`, `svc #0`) in exactly
/// one place each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Label(String),
    Mov(Reg, i64),
    Push(Reg),
    Pop(Reg),
    Add(Reg, Reg, Reg),
    Sub(Reg, Reg, Reg),
    Cmp(Reg, Reg),
    Cset(Reg, Cond),
    Cbz(Reg, String),
    B(String),
    Bl(&'static str),
    AdrpPage(Reg, &'static str),
    AddPageOff(Reg, Reg, &'static str),
    Ldrb(Reg, Reg),
    Strb(Reg, Reg),
    Svc,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Label(name) => write!(f, "{name}:"),
            Instruction::Mov(dst, value) => write!(f, "   mov {dst}, #{value}"),
            Instruction::Push(reg) => write!(f, "   push {reg}"),
            Instruction::Pop(reg) => write!(f, "   pop {reg}"),
            Instruction::Add(dst, a, b) => write!(f, "   add {dst}, {a}, {b}"),
            Instruction::Sub(dst, a, b) => write!(f, "   sub {dst}, {a}, {b}"),
            Instruction::Cmp(a, b) => write!(f, "   cmp {a}, {b}"),
            Instruction::Cset(dst, cond) => write!(f, "   cset {dst}, {cond}"),
            Instruction::Cbz(reg, label) => write!(f, "   cbz {reg}, {label}"),
            Instruction::B(label) => write!(f, "   b {label}"),
            Instruction::Bl(label) => write!(f, "   bl {label}"),
            Instruction::AdrpPage(dst, symbol) => write!(f, "   adrp {dst}, {symbol}@PAGE"),
            Instruction::AddPageOff(dst, src, symbol) => {
                write!(f, "   add {dst}, {src}, {symbol}@PAGEOFF")
            }
            Instruction::Ldrb(dst, addr) => write!(f, "   ldrb {dst}, [{addr}]"),
            Instruction::Strb(src, addr) => write!(f, "   strb {src}, [{addr}]"),
            Instruction::Svc => write!(f, "   svc #0"),
        }
    }
}
