//! Directive file parsing.
//!
//! Input is one directive per line, whitespace separated, read until an
//! `end` line or the end of the text:
//!
//! ```text
//! processcount 2
//! quantum 2
//! use rr
//! process name A arrival 0 burst 4
//! process name B arrival 1 burst 3
//! end
//! ```
//!
//! [`Directives::parse`] collects what the file says and
//! [`Directives::validate`] turns it into a [`SimulationConfig`] in one step.

use super::{ConfigError, Process, SimulationError};
use log::debug;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    RoundRobin { quantum: NonZeroU64 },
}

impl Algorithm {
    /// Resolves a `use` value. `quantum` only matters for `rr`.
    pub fn from_directive(name: &str, quantum: Option<u64>) -> Result<Self, ConfigError> {
        match name {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" => {
                let quantum = quantum.ok_or(ConfigError::MissingQuantum)?;
                NonZeroU64::new(quantum)
                    .map(|quantum| Self::RoundRobin { quantum })
                    .ok_or(ConfigError::ZeroQuantum)
            }
            other => Err(ConfigError::UnknownAlgorithm(other.to_owned())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin { .. } => "RR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One `process` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub name: String,
    pub arrival: u64,
    pub burst: u64,
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Process::new(&spec.name, spec.arrival, spec.burst)
    }
}

/// A validated simulation setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    pub expected_count: u64,
    pub processes: Vec<ProcessSpec>,
}

impl SimulationConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| SimulationError::io(path, err))?;
        Ok(Directives::parse(&text)?.validate()?)
    }
}

/// Raw directives as read from the file, before cross-checking.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Directives {
    process_count: Option<u64>,
    algorithm: Option<String>,
    quantum: Option<u64>,
    processes: Vec<ProcessSpec>,
    extra: BTreeMap<String, i64>,
}

impl Directives {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut directives = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some((&directive, args)) = tokens.split_first() else {
                continue;
            };

            match directive {
                "end" => break,
                "process" => {
                    let spec = parse_process(line_number, args)?;
                    directives.processes.push(spec);
                }
                "use" => {
                    let name = value_of(line_number, directive, args)?;
                    if name == "rr" && directives.quantum.is_none() {
                        return Err(ConfigError::MissingQuantum);
                    }
                    directives.algorithm = Some(name.to_owned());
                }
                "quantum" => {
                    let value = value_of(line_number, directive, args)?;
                    directives.quantum = Some(parse_int(line_number, directive, value)?);
                }
                "processcount" => {
                    let value = value_of(line_number, directive, args)?;
                    directives.process_count = Some(parse_int(line_number, directive, value)?);
                }
                key => {
                    let value = value_of(line_number, key, args)?;
                    let value = parse_int(line_number, key, value)?;
                    debug!("line {line_number}: ignoring directive {key} = {value}");
                    directives.extra.insert(key.to_owned(), value);
                }
            }
        }

        Ok(directives)
    }

    pub fn validate(self) -> Result<SimulationConfig, ConfigError> {
        let expected_count = self
            .process_count
            .ok_or(ConfigError::MissingParameter("processcount"))?;
        if self.processes.len() as u64 != expected_count {
            return Err(ConfigError::ProcessCountMismatch {
                expected: expected_count,
                actual: self.processes.len(),
            });
        }
        if expected_count == 0 {
            return Err(ConfigError::NoProcesses);
        }

        let name = self
            .algorithm
            .ok_or(ConfigError::MissingParameter("use"))?;
        let algorithm = Algorithm::from_directive(&name, self.quantum)?;

        let mut seen = HashSet::new();
        for spec in &self.processes {
            if spec.burst == 0 {
                return Err(ConfigError::ZeroBurst {
                    name: spec.name.clone(),
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateProcess {
                    name: spec.name.clone(),
                });
            }
        }

        // The clock never passes the latest arrival plus all the work queued.
        let horizon = self.processes.iter().try_fold(
            self.processes.iter().map(|spec| spec.arrival).max().unwrap_or(0),
            |horizon, spec| horizon.checked_add(spec.burst),
        );
        if horizon.is_none() {
            return Err(ConfigError::TimelineOverflow);
        }

        Ok(SimulationConfig {
            algorithm,
            expected_count,
            processes: self.processes,
        })
    }
}

fn value_of<'a>(line: usize, directive: &str, args: &[&'a str]) -> Result<&'a str, ConfigError> {
    args.first().copied().ok_or_else(|| ConfigError::MalformedDirective {
        line,
        directive: directive.to_owned(),
    })
}

fn parse_int<T: FromStr>(line: usize, key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        line,
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

/// Parses the `key value` pairs after `process`. Keys may come in any order
/// and unknown keys are skipped.
fn parse_process(line: usize, args: &[&str]) -> Result<ProcessSpec, ConfigError> {
    let mut fields: BTreeMap<&str, &str> = BTreeMap::new();
    for pair in args.chunks(2) {
        match *pair {
            [key, value] => {
                fields.insert(key, value);
            }
            [key] => {
                return Err(ConfigError::MalformedDirective {
                    line,
                    directive: key.to_owned(),
                })
            }
            _ => unreachable!("chunks(2) yields one or two items"),
        }
    }

    let field = |parameter: &'static str| {
        fields
            .get(parameter)
            .copied()
            .ok_or(ConfigError::MissingProcessParameter { line, parameter })
    };

    let name = field("name")?.to_owned();
    let arrival = parse_int(line, "arrival", field("arrival")?)?;
    let burst = parse_int(line, "burst", field("burst")?)?;
    Ok(ProcessSpec {
        name,
        arrival,
        burst,
    })
}
