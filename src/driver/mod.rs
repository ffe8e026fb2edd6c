//! Drives the pipeline end to end: loading a source file into a resolved
//! [`Program`], simulating it, or compiling and linking it into a native
//! executable via the platform assembler and linker.
//!
//! Everything in this module is "out of core" per the language's
//! specification — it is the glue around the lexer/parser/resolver/
//! simulator/emitter, not part of them.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{error, info};

use crate::emitter::emit_program;
use crate::error::{DriverError, IoError};
use crate::lexer::lex_file;
use crate::parser::{parse, Program};
use crate::resolver::resolve;
use crate::simulator::{ExitStatus, Simulator};

/// Lex, parse, and resolve `path` into a ready-to-run [`Program`].
pub fn load_program(path: &Path) -> Result<Program, DriverError> {
    let tokens = lex_file(path).map_err(|source| IoError {
        path: path.to_owned(),
        source,
    })?;

    info!("{}: lexed {} tokens", path.display(), tokens.len());

    let mut prg = parse(tokens)?;
    resolve(&mut prg)?;

    info!("{}: resolved {} operations", path.display(), prg.len());

    Ok(prg)
}

/// `stax sim <file>`: load and simulate, using the process's real
/// stdout/stderr.
pub fn simulate(path: &Path) -> Result<ExitStatus, DriverError> {
    let prg = load_program(path)?;

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let status = Simulator::new(&prg).run(&mut stdout, &mut stderr)?;
    Ok(status)
}

/// Options for `stax com`.
pub struct CompileOptions {
    pub output: PathBuf,
    pub run_after: bool,
}

/// `stax com [-r] <file>`: load, emit assembly, assemble, link, and
/// optionally run the result.
pub fn compile(path: &Path, opts: &CompileOptions) -> Result<(), DriverError> {
    let prg = load_program(path)?;

    let asm_path = with_extension(&opts.output, "s");
    write_assembly(&prg, &asm_path)?;

    let object_path = with_extension(&opts.output, "o");
    assemble(&asm_path, &object_path)?;
    link(&object_path, &opts.output)?;

    if opts.run_after {
        run_binary(&opts.output)?;
    }

    Ok(())
}

fn with_extension(stem: &Path, ext: &str) -> PathBuf {
    PathBuf::from(format!("{}.{ext}", stem.to_string_lossy()))
}

fn write_assembly(prg: &Program, asm_path: &Path) -> Result<(), DriverError> {
    info!("writing {}", asm_path.display());

    let mut file = std::fs::File::create(asm_path).map_err(|source| IoError {
        path: asm_path.to_owned(),
        source,
    })?;

    emit_program(prg, &mut file).map_err(|source| IoError {
        path: asm_path.to_owned(),
        source,
    })?;

    Ok(())
}

fn assemble(asm_path: &Path, object_path: &Path) -> Result<(), DriverError> {
    info!("assembling {}", asm_path.display());
    run_tool(
        "as",
        Command::new("as").arg("-o").arg(object_path).arg(asm_path),
    )
}

fn link(object_path: &Path, output: &Path) -> Result<(), DriverError> {
    info!("linking {}", output.display());
    run_tool(
        "ld",
        Command::new("ld").arg("-o").arg(output).arg(object_path),
    )
}

fn run_binary(output: &Path) -> Result<(), DriverError> {
    info!("running {}", output.display());
    run_tool(
        "output",
        Command::new(output.canonicalize().unwrap_or_else(|_| output.to_owned())),
    )
}

fn run_tool(name: &'static str, command: &mut Command) -> Result<(), DriverError> {
    let status = command.status().map_err(|source| DriverError::Tool {
        program: name,
        detail: source.to_string(),
    })?;

    if !status.success() {
        error!("{name} exited with {status}");
        return Err(DriverError::Tool {
            program: name,
            detail: format!("exited with {status}"),
        });
    }

    Ok(())
}
