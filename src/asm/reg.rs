use std::fmt::Display;

/// The handful of AArch64 registers this backend ever touches: the 64-bit
/// `x` form and the 32-bit `w` form of the same register both appear in the
/// per-op emission table (`load` zero-extends through `w1` into `x1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    X0,
    X1,
    X2,
    X16,
    W0,
    W1,
}

impl Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Reg::X0 => "x0",
            Reg::X1 => "x1",
            Reg::X2 => "x2",
            Reg::X16 => "x16",
            Reg::W0 => "w0",
            Reg::W1 => "w1",
        })
    }
}

/// The condition codes `cset` is asked to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Display for Cond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Cond::Eq => "eq",
            Cond::Gt => "gt",
            Cond::Ge => "ge",
            Cond::Lt => "lt",
            Cond::Le => "le",
        })
    }
}
