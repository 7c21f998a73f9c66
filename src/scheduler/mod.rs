mod clock;
mod config;
mod display;
mod error;
mod fcfs;
mod metrics;
mod process;
mod round_robin;
mod runner;
mod sjf;

pub use clock::Clock;
pub use config::{Algorithm, SimulationConfig};
pub use error::{ConfigError, SimulationError};
pub use fcfs::FcfsScheduler;
pub use metrics::Metrics;
pub use process::{Process, ScheduledProcess};
pub use round_robin::RoundRobinScheduler;
pub use runner::simulate;
pub use sjf::SjfScheduler;

pub trait Scheduler {
    const NAME: &'static str;

    /// Runs every process to completion on a fresh clock.
    ///
    /// Results are in input order for FCFS and round robin, and in
    /// execution order for SJF.
    fn schedule(&self, processes: Vec<Process>) -> Result<Vec<ScheduledProcess>, SimulationError>;
}
