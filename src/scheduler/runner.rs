use super::{
    display::Report, Algorithm, FcfsScheduler, Metrics, Process, RoundRobinScheduler, Scheduler,
    SimulationConfig, SimulationError, SjfScheduler,
};
use log::{debug, info};

/// Drives one scheduler over a batch of processes and summarizes the run.
pub struct SimulationRunner<S> {
    scheduler: S,
}

impl<S: Scheduler> SimulationRunner<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler }
    }

    pub fn run(
        &self,
        algorithm: Algorithm,
        processes: Vec<Process>,
    ) -> Result<Report, SimulationError> {
        info!("{} ({algorithm}): scheduling {} processes", S::NAME, processes.len());
        let processes = self.scheduler.schedule(processes)?;
        for process in &processes {
            debug!(
                "{}: arrival {} burst {} ran {}..{}",
                process.name(),
                process.arrival(),
                process.burst(),
                process.start_time(),
                process.end_time()
            );
        }
        let metrics = Metrics::from_processes(&processes)?;
        Ok(Report::new(algorithm, processes, metrics))
    }
}

/// Runs the algorithm named in `config` over its processes.
pub fn simulate(config: SimulationConfig) -> Result<Report, SimulationError> {
    let algorithm = config.algorithm;
    debug_assert_eq!(config.expected_count, config.processes.len() as u64);
    let processes: Vec<Process> = config.processes.into_iter().map(Process::from).collect();

    match algorithm {
        Algorithm::Fcfs => SimulationRunner::new(FcfsScheduler::new()).run(algorithm, processes),
        Algorithm::Sjf => SimulationRunner::new(SjfScheduler::new()).run(algorithm, processes),
        Algorithm::RoundRobin { quantum } => {
            SimulationRunner::new(RoundRobinScheduler::new(quantum)).run(algorithm, processes)
        }
    }
}
