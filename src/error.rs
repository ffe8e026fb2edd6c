//! The crate's error taxonomy: one small `std::error::Error` type per phase,
//! plus [`DriverError`], which the CLI boundary unwraps into a single-line,
//! location-prefixed message.

use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

use crate::parser::ParseError;
use crate::resolver::ResolveError;
use crate::simulator::SimError;

/// A source file could not be read, or an output file could not be written.
#[derive(Debug)]
pub struct IoError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl Error for IoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Every way the front-end-through-backend pipeline, or the CLI invoking it,
/// can fail.
#[derive(Debug)]
pub enum DriverError {
    Io(IoError),
    Parse(ParseError),
    Resolve(ResolveError),
    Sim(SimError),
    /// An external tool (`as`, `ld`, or the compiled binary itself) exited
    /// with a non-zero status or failed to start.
    Tool { program: &'static str, detail: String },
    /// A user-facing CLI mistake: missing subcommand, missing file argument.
    Usage(String),
}

impl Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::Io(err) => write!(f, "{err}"),
            DriverError::Parse(err) => write!(f, "{err}"),
            DriverError::Resolve(err) => write!(f, "{err}"),
            DriverError::Sim(err) => write!(f, "{err}"),
            DriverError::Tool { program, detail } => write!(f, "{program}: {detail}"),
            DriverError::Usage(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DriverError {}

impl From<IoError> for DriverError {
    fn from(err: IoError) -> Self {
        DriverError::Io(err)
    }
}

impl From<ParseError> for DriverError {
    fn from(err: ParseError) -> Self {
        DriverError::Parse(err)
    }
}

impl From<ResolveError> for DriverError {
    fn from(err: ResolveError) -> Self {
        DriverError::Resolve(err)
    }
}

impl From<SimError> for DriverError {
    fn from(err: SimError) -> Self {
        DriverError::Sim(err)
    }
}
