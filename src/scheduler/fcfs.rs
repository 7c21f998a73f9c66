use super::{Clock, Process, ScheduledProcess, Scheduler, SimulationError};
use log::{debug, trace};

/// Runs processes to completion in the order they were given.
#[derive(Debug, Default, Clone, Copy)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "First-Come-First-Served";

    fn schedule(&self, processes: Vec<Process>) -> Result<Vec<ScheduledProcess>, SimulationError> {
        run_in_order(processes)
    }
}

/// Non-preemptive execution of `processes` in iteration order.
pub(super) fn run_in_order(
    processes: impl IntoIterator<Item = Process>,
) -> Result<Vec<ScheduledProcess>, SimulationError> {
    let mut clock = Clock::new();
    processes
        .into_iter()
        .map(|mut process| {
            let now = clock.advance_to(process.arrival());
            process.dispatch(now);
            debug!("t={now}: dispatch {} until completion", process.name());

            let used = process.run_for(process.burst());
            let end = clock.advance_by(used);
            trace!("t={end}: {} finished", process.name());

            process
                .finish(end)
                .map_err(|process| SimulationError::Unfinished(process.name().to_owned()))
        })
        .collect()
}
