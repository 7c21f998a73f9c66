use super::{Algorithm, Metrics, ScheduledProcess};
use std::fmt;

/// The outcome of a simulation, rendered as the plain-text summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    algorithm: Algorithm,
    processes: Vec<ScheduledProcess>,
    metrics: Metrics,
}

impl Report {
    pub fn new(algorithm: Algorithm, processes: Vec<ScheduledProcess>, metrics: Metrics) -> Self {
        Self {
            algorithm,
            processes,
            metrics,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} processes", self.processes.len())?;
        writeln!(f, "Using {}", self.algorithm.label())?;

        for process in &self.processes {
            writeln!(
                f,
                "P{} wait {} turnaround {} response {}",
                process.name(),
                process.waiting_time(),
                process.turnaround_time(),
                process.response_time()
            )?;
        }

        // Debug formatting keeps full precision and always shows a decimal point.
        writeln!(f)?;
        writeln!(f, "Average Turnaround Time: {:?}", self.metrics.avg_turnaround_time)?;
        writeln!(f, "Average Waiting Time: {:?}", self.metrics.avg_waiting_time)?;
        writeln!(f, "Average Response Time: {:?}", self.metrics.avg_response_time)
    }
}
