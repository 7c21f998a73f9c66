/// A process waiting to be scheduled, along with the bookkeeping the
/// schedulers update as they hand it the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    name: String,
    arrival: u64,
    burst: u64,
    remaining_burst: u64,
    start_time: Option<u64>,
    response_time: Option<u64>,
    waiting_time: u64,
    ready_since: u64,
}

impl Process {
    pub fn new(name: &str, arrival: u64, burst: u64) -> Self {
        Self {
            name: name.to_owned(),
            arrival,
            burst,
            remaining_burst: burst,
            start_time: None,
            response_time: None,
            waiting_time: 0,
            ready_since: arrival,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    pub fn burst(&self) -> u64 {
        self.burst
    }

    pub fn remaining_burst(&self) -> u64 {
        self.remaining_burst
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Hands the processor to this process at `now`.
    ///
    /// The time since it last became ready is charged as waiting time. The
    /// first dispatch also fixes the start and response times.
    pub fn dispatch(&mut self, now: u64) {
        debug_assert!(now >= self.ready_since);
        self.waiting_time += now.saturating_sub(self.ready_since);
        if self.start_time.is_none() {
            self.start_time = Some(now);
            self.response_time = Some(self.waiting_time);
        }
    }

    /// Runs for at most `slice` units and returns the time actually used.
    pub fn run_for(&mut self, slice: u64) -> u64 {
        let used = slice.min(self.remaining_burst);
        self.remaining_burst -= used;
        used
    }

    /// Puts the process back in the ready state at `now`.
    pub fn preempt(&mut self, now: u64) {
        self.ready_since = now;
    }

    /// Consumes the record once its burst is exhausted.
    ///
    /// Returns the process unchanged if it still has work left or was never
    /// dispatched.
    pub fn finish(self, now: u64) -> Result<ScheduledProcess, Process> {
        match (self.remaining_burst, self.start_time, self.response_time) {
            (0, Some(start_time), Some(response_time)) => Ok(ScheduledProcess {
                name: self.name,
                arrival: self.arrival,
                burst: self.burst,
                start_time,
                end_time: now,
                waiting_time: self.waiting_time,
                response_time,
            }),
            _ => Err(self),
        }
    }
}

/// A process that ran to completion. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledProcess {
    name: String,
    arrival: u64,
    burst: u64,
    start_time: u64,
    end_time: u64,
    waiting_time: u64,
    response_time: u64,
}

impl ScheduledProcess {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    pub fn burst(&self) -> u64 {
        self.burst
    }

    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    pub fn end_time(&self) -> u64 {
        self.end_time
    }

    pub fn waiting_time(&self) -> u64 {
        self.waiting_time
    }

    pub fn response_time(&self) -> u64 {
        self.response_time
    }

    pub fn turnaround_time(&self) -> u64 {
        self.end_time - self.arrival
    }
}
