//! # Cli
//!
//! CLI argument definitions for `stax`.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Specify the log level of the compiler.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    #[default]
    #[value(alias("0"))]
    Error,
    #[value(alias("1"))]
    Warn,
    #[value(alias("2"))]
    Info,
    #[value(alias("3"))]
    Debug,
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simulate a stax program in-process.
    Sim(SimArgs),

    /// Compile a stax program to a native executable via `as`/`ld`.
    Com(ComArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// The path to the stax source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ComArgs {
    /// The path to the stax source file.
    #[arg(index = 1)]
    pub file: std::path::PathBuf,

    /// Run the compiled executable immediately after linking.
    #[arg(short = 'r', long)]
    pub run: bool,

    /// The path of the produced executable (and the stem of `<path>.s`/
    /// `<path>.o`).
    #[arg(short, long, default_value = "output")]
    pub output: std::path::PathBuf,
}
