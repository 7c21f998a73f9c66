use super::{fcfs::run_in_order, Process, ScheduledProcess, Scheduler, SimulationError};

/// Non-preemptive shortest-job-first.
///
/// The whole batch is ordered once by `(arrival, burst)` and then run to
/// completion in that order. Readiness is not re-evaluated when the
/// processor goes idle, so a short job arriving later never overtakes a
/// longer one ordered ahead of it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SjfScheduler;

impl SjfScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "Shortest-Job-First";

    fn schedule(
        &self,
        mut processes: Vec<Process>,
    ) -> Result<Vec<ScheduledProcess>, SimulationError> {
        // Stable, so equal keys keep their input order.
        processes.sort_by_key(|process| (process.arrival(), process.burst()));
        run_in_order(processes)
    }
}
