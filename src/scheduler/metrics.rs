use super::{ScheduledProcess, SimulationError};

/// Mean turnaround, waiting and response times over a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_turnaround_time: f64,
    pub avg_waiting_time: f64,
    pub avg_response_time: f64,
}

impl Metrics {
    pub fn from_processes(processes: &[ScheduledProcess]) -> Result<Self, SimulationError> {
        if processes.is_empty() {
            return Err(SimulationError::EmptyProcessSet);
        }

        let (turnaround, waiting, response) =
            processes
                .iter()
                .fold((0u128, 0u128, 0u128), |(turnaround, waiting, response), process| {
                    (
                        turnaround + u128::from(process.turnaround_time()),
                        waiting + u128::from(process.waiting_time()),
                        response + u128::from(process.response_time()),
                    )
                });

        let count = processes.len() as f64;
        Ok(Self {
            avg_turnaround_time: turnaround as f64 / count,
            avg_waiting_time: waiting as f64 / count,
            avg_response_time: response as f64 / count,
        })
    }
}
