use super::{Clock, Process, ScheduledProcess, Scheduler, SimulationError};
use log::{debug, trace};
use std::collections::VecDeque;
use std::num::NonZeroU64;

/// Preemptive round robin with a fixed time quantum.
///
/// The ready queue starts out in input order. A process that still has work
/// left after its slice goes back to the tail.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin";

    fn schedule(&self, processes: Vec<Process>) -> Result<Vec<ScheduledProcess>, SimulationError> {
        let mut finished: Vec<Option<ScheduledProcess>> = vec![None; processes.len()];
        let mut queue: VecDeque<(usize, Process)> = processes.into_iter().enumerate().collect();
        let mut clock = Clock::new();

        while let Some((slot, mut process)) = queue.pop_front() {
            let now = clock.advance_to(process.arrival());
            process.dispatch(now);

            let used = process.run_for(self.quantum.get());
            let now = clock.advance_by(used);
            debug!(
                "t={}..{now}: {} ran {used}, {} left",
                now - used,
                process.name(),
                process.remaining_burst()
            );

            if process.is_finished() {
                trace!("t={now}: {} finished", process.name());
                let done = process
                    .finish(now)
                    .map_err(|process| SimulationError::Unfinished(process.name().to_owned()))?;
                finished[slot] = Some(done);
            } else {
                process.preempt(now);
                queue.push_back((slot, process));
            }
        }

        // Every slot is filled once the queue drains.
        Ok(finished.into_iter().flatten().collect())
    }
}
