//! Simulator: a byte-for-byte interpreter of a resolved [`Program`].
//!
//! Ill-formed programs abort the simulation with a [`SimError`]; there is no
//! recovery, matching the Non-goals in the language's specification.

use std::error::Error;
use std::fmt::Display;
use std::io::Write;

use crate::location::Location;
use crate::parser::{OpKind, Program};

/// Size of the simulator's byte-addressable memory region. Shared with the
/// emitter's `.skip` directive for the same region.
pub const MEMORY_ALLOCATION: usize = 640_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimErrorKind {
    StackUnderflow,
    OutOfBoundsMemory { addr: i64 },
    UnknownSyscall { number: i64 },
    InvalidUtf8,
    Io(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimError {
    pub loc: Location,
    pub kind: SimErrorKind,
}

impl Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match &self.kind {
            SimErrorKind::StackUnderflow => "stack underflow".to_owned(),
            SimErrorKind::OutOfBoundsMemory { addr } => {
                format!("memory access out of bounds at address {addr}")
            }
            SimErrorKind::UnknownSyscall { number } => format!("unhandled syscall: {number}"),
            SimErrorKind::InvalidUtf8 => "invalid utf-8 passed to write syscall".to_owned(),
            SimErrorKind::Io(message) => format!("write failed: {message}"),
        };
        write!(f, "{}: {}", self.loc, message)
    }
}

impl Error for SimError {}

/// Outcome of a completed simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Exited(i64),
    RanToCompletion,
}

/// A stack machine: a value stack of signed 64-bit integers and a fixed
/// zero-initialized byte memory, driven by an instruction pointer over a
/// resolved [`Program`].
pub struct Simulator<'a> {
    prg: &'a Program,
    stack: Vec<i64>,
    memory: Box<[u8; MEMORY_ALLOCATION]>,
}

impl<'a> Simulator<'a> {
    pub fn new(prg: &'a Program) -> Self {
        Self {
            prg,
            stack: Vec::new(),
            memory: Box::new([0u8; MEMORY_ALLOCATION]),
        }
    }

    fn pop(&mut self, loc: &Location) -> Result<i64, SimError> {
        self.stack.pop().ok_or_else(|| SimError {
            loc: loc.clone(),
            kind: SimErrorKind::StackUnderflow,
        })
    }

    fn byte_at(&self, addr: i64, loc: &Location) -> Result<u8, SimError> {
        usize::try_from(addr)
            .ok()
            .and_then(|idx| self.memory.get(idx).copied())
            .ok_or_else(|| SimError {
                loc: loc.clone(),
                kind: SimErrorKind::OutOfBoundsMemory { addr },
            })
    }

    fn byte_at_mut(&mut self, addr: i64, loc: &Location) -> Result<&mut u8, SimError> {
        let err = SimError {
            loc: loc.clone(),
            kind: SimErrorKind::OutOfBoundsMemory { addr },
        };
        let idx = usize::try_from(addr).map_err(|_| err.clone())?;
        self.memory.get_mut(idx).ok_or(err)
    }

    fn slice(&self, start: i64, len: i64, loc: &Location) -> Result<&[u8], SimError> {
        let err = || SimError {
            loc: loc.clone(),
            kind: SimErrorKind::OutOfBoundsMemory { addr: start },
        };
        let start = usize::try_from(start).map_err(|_| err())?;
        let len = usize::try_from(len).map_err(|_| err())?;
        let end = start.checked_add(len).ok_or_else(err)?;
        self.memory.get(start..end).ok_or_else(err)
    }

    /// Run the program to completion, writing `DUMP` and write-syscall
    /// output to `stdout`/`stderr`.
    pub fn run(
        &mut self,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitStatus, SimError> {
        let mut ip = 0usize;

        while ip < self.prg.len() {
            let op = &self.prg[ip];
            let loc = op.loc.clone();

            match &op.kind {
                OpKind::Push(value) => {
                    self.stack.push(*value);
                    ip += 1;
                }
                OpKind::Add => {
                    let top = self.pop(&loc)?;
                    let second = self.pop(&loc)?;
                    self.stack.push(second.wrapping_add(top));
                    ip += 1;
                }
                OpKind::Sub => {
                    let top = self.pop(&loc)?;
                    let second = self.pop(&loc)?;
                    self.stack.push(second.wrapping_sub(top));
                    ip += 1;
                }
                OpKind::Dump => {
                    let value = self.pop(&loc)?;
                    writeln!(stdout, "{value}").map_err(|e| SimError {
                        loc: loc.clone(),
                        kind: SimErrorKind::Io(e.to_string()),
                    })?;
                    ip += 1;
                }
                OpKind::Clone => {
                    let value = self.pop(&loc)?;
                    self.stack.push(value);
                    self.stack.push(value);
                    ip += 1;
                }
                OpKind::Eq => self.binary_compare(&loc, &mut ip, |a, b| a == b)?,
                OpKind::Gt => self.binary_compare(&loc, &mut ip, |a, b| a > b)?,
                OpKind::Ge => self.binary_compare(&loc, &mut ip, |a, b| a >= b)?,
                OpKind::Lt => self.binary_compare(&loc, &mut ip, |a, b| a < b)?,
                OpKind::Le => self.binary_compare(&loc, &mut ip, |a, b| a <= b)?,
                OpKind::If { jump } => {
                    let value = self.pop(&loc)?;
                    ip = if value == 0 {
                        jump.expect("if.jump must be resolved before simulation")
                    } else {
                        ip + 1
                    };
                }
                OpKind::Else { jump } => {
                    ip = jump.expect("else.jump must be resolved before simulation");
                }
                OpKind::End { jump } => {
                    ip = jump.expect("end.jump must be resolved before simulation");
                }
                OpKind::While => {
                    ip += 1;
                }
                OpKind::Do { jump } => {
                    let value = self.pop(&loc)?;
                    ip = if value == 0 {
                        jump.expect("do.jump must be resolved before simulation")
                    } else {
                        ip + 1
                    };
                }
                OpKind::Mem => {
                    self.stack.push(0);
                    ip += 1;
                }
                OpKind::Load => {
                    let addr = self.pop(&loc)?;
                    let byte = self.byte_at(addr, &loc)?;
                    self.stack.push(byte as i64);
                    ip += 1;
                }
                OpKind::Save => {
                    let value = self.pop(&loc)?;
                    let addr = self.pop(&loc)?;
                    *self.byte_at_mut(addr, &loc)? = (value & 0xFF) as u8;
                    ip += 1;
                }
                OpKind::Syscall1 => {
                    let number = self.pop(&loc)?;
                    let arg0 = self.pop(&loc)?;

                    match number {
                        1 => return Ok(ExitStatus::Exited(arg0)),
                        _ => {
                            return Err(SimError {
                                loc,
                                kind: SimErrorKind::UnknownSyscall { number },
                            })
                        }
                    }
                }
                OpKind::Syscall3 => {
                    let number = self.pop(&loc)?;
                    let arg2 = self.pop(&loc)?;
                    let arg1 = self.pop(&loc)?;
                    let arg0 = self.pop(&loc)?;

                    match number {
                        4 => {
                            let bytes = self.slice(arg1, arg2, &loc)?;
                            let text = std::str::from_utf8(bytes).map_err(|_| SimError {
                                loc: loc.clone(),
                                kind: SimErrorKind::InvalidUtf8,
                            })?;

                            let sink: &mut dyn Write = match arg0 {
                                1 => stdout,
                                2 => stderr,
                                _ => {
                                    return Err(SimError {
                                        loc,
                                        kind: SimErrorKind::UnknownSyscall { number: arg0 },
                                    })
                                }
                            };
                            write!(sink, "{text}").map_err(|e| SimError {
                                loc: loc.clone(),
                                kind: SimErrorKind::Io(e.to_string()),
                            })?;
                            ip += 1;
                        }
                        _ => {
                            return Err(SimError {
                                loc,
                                kind: SimErrorKind::UnknownSyscall { number },
                            })
                        }
                    }
                }
            }
        }

        Ok(ExitStatus::RanToCompletion)
    }

    fn binary_compare(
        &mut self,
        loc: &Location,
        ip: &mut usize,
        op: impl Fn(i64, i64) -> bool,
    ) -> Result<(), SimError> {
        let top = self.pop(loc)?;
        let second = self.pop(loc)?;
        self.stack.push(op(second, top) as i64);
        *ip += 1;
        Ok(())
    }
}
