//! Fixed AArch64 assembly resources: the instruction model (`Instruction`,
//! `Reg`, `Cond`) and the verbatim `dump` subroutine. Code generation itself
//! lives in `crate::emitter`.

mod dump;
mod instruction;
mod reg;

pub use dump::DUMP_ROUTINE;
pub use instruction::Instruction;
pub use reg::{Cond, Reg};

/// Byte size of the BSS-backed `mem` region the emitter declares, matching
/// [`crate::simulator::MEMORY_ALLOCATION`].
pub const MEMORY_ALLOCATION: usize = crate::simulator::MEMORY_ALLOCATION;
