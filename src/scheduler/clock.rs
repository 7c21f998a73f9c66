/// Simulated time shared by every scheduler. Only moves forward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Clock(u64);

impl Clock {
    pub fn new() -> Self {
        Self(0)
    }

    /// Idles the processor until `time` if it hasn't been reached yet.
    pub fn advance_to(&mut self, time: u64) -> u64 {
        self.0 = self.0.max(time);
        self.0
    }

    pub fn advance_by(&mut self, elapsed: u64) -> u64 {
        self.0 += elapsed;
        self.0
    }
}
