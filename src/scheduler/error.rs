//! Error types for reading a directive file and running a simulation.
//!
//! Every failure is detected before the first process is dispatched, so
//! there is never a partial report to salvage.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Problems with the directive file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A directive with no value, or a `process` key without one.
    MalformedDirective { line: usize, directive: String },
    /// A `process` line is missing `name`, `arrival` or `burst`.
    MissingProcessParameter { line: usize, parameter: &'static str },
    /// A value that should be a non-negative integer isn't.
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
    /// A required top-level directive never appeared.
    MissingParameter(&'static str),
    /// `use rr` without a `quantum` directive.
    MissingQuantum,
    /// `processcount` disagrees with the number of `process` lines.
    ProcessCountMismatch { expected: u64, actual: usize },
    /// `processcount 0`. Averages over nothing are undefined.
    NoProcesses,
    UnknownAlgorithm(String),
    ZeroQuantum,
    ZeroBurst { name: String },
    DuplicateProcess { name: String },
    /// The last possible completion time does not fit the clock.
    TimelineOverflow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDirective { line, directive } => {
                write!(f, "Malformed directive '{directive}' on line {line}.")
            }
            Self::MissingProcessParameter { line, parameter } => {
                write!(f, "Missing parameter '{parameter}' on line {line}.")
            }
            Self::InvalidValue { line, key, value } => write!(
                f,
                "Invalid parameter value '{value}' for '{key}' on line {line}."
            ),
            Self::MissingParameter(parameter) => write!(f, "Missing parameter {parameter}."),
            Self::MissingQuantum => write!(f, "Missing quantum parameter when use is 'rr'"),
            Self::ProcessCountMismatch { expected, actual } => write!(
                f,
                "Number of processes provided ({actual}) does not match processcount ({expected})."
            ),
            Self::NoProcesses => write!(f, "processcount must be at least 1."),
            Self::UnknownAlgorithm(name) => {
                write!(f, "Invalid scheduling algorithm '{name}'.")
            }
            Self::ZeroQuantum => write!(f, "quantum must be a positive integer."),
            Self::ZeroBurst { name } => {
                write!(f, "Process '{name}' must have a positive burst.")
            }
            Self::DuplicateProcess { name } => {
                write!(f, "Process name '{name}' is used more than once.")
            }
            Self::TimelineOverflow => write!(
                f,
                "Latest arrival plus total burst exceeds the simulated clock range."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors surfaced by a simulation run, from reading the input onwards.
#[derive(Debug)]
#[non_exhaustive]
pub enum SimulationError {
    /// The input file does not exist.
    NotFound(PathBuf),
    /// Any other failure reading the input file.
    Io { path: PathBuf, source: io::Error },
    Config(ConfigError),
    /// Metrics were requested over zero processes.
    EmptyProcessSet,
    /// A scheduler returned without exhausting a process's burst.
    Unfinished(String),
}

impl SimulationError {
    /// Maps an I/O error from reading `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Io { path, source },
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::Config(err) => err.fmt(f),
            Self::EmptyProcessSet => write!(f, "Cannot compute metrics for zero processes."),
            Self::Unfinished(name) => {
                write!(f, "Process '{name}' was left unfinished by the scheduler.")
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
