//! Polled one-shot timer.
//!
//! Ticks are already the scheduling unit, so a timer is just a deadline that
//! gets compared against the current simulation time. Nothing runs on expiry;
//! the owner polls [`Timer::check`] once per tick.

/// Deadline-based countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timer {
    period: f32,
    deadline: Option<f32>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer so it expires `period` seconds after `now`.
    /// A non-positive period stops it instead.
    pub fn start(&mut self, now: f32, period: f32) {
        if period <= 0.0 {
            self.stop();
            return;
        }
        self.period = period;
        self.deadline = Some(now + period);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn started(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn check(&mut self, now: f32) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Seconds until expiry; zero when stopped or already due.
    pub fn time_left(&self, now: f32) -> f32 {
        self.deadline.map_or(0.0, |d| (d - now).max(0.0))
    }
}
