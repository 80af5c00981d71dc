use std::time::{Duration, Instant};

/// Wall-clock time elapsed between two consecutive frames.
pub struct TimeDelta {
    last: Instant,
    last_recorded_delta: Duration,
}

impl Default for TimeDelta {
    fn default() -> Self {
        Self {
            last: Instant::now(),
            last_recorded_delta: Duration::ZERO,
        }
    }
}

impl TimeDelta {
    /// Closes the current interval and starts the next one.
    pub fn next(&mut self) -> Duration {
        let now = Instant::now();
        self.last_recorded_delta = now.duration_since(self.last);
        self.last = now;
        self.last_recorded_delta
    }

    pub fn delta_time(&self) -> &Duration {
        &self.last_recorded_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_at_zero() {
        let delta = TimeDelta::default();
        assert_eq!(*delta.delta_time(), Duration::ZERO);
    }

    #[test]
    fn next_measures_elapsed_time() {
        let mut delta = TimeDelta::default();
        thread::sleep(Duration::from_millis(5));
        let elapsed = delta.next();
        assert!(elapsed >= Duration::from_millis(5));
        assert_eq!(*delta.delta_time(), elapsed);
    }

    #[test]
    fn next_restarts_the_interval() {
        let mut delta = TimeDelta::default();
        thread::sleep(Duration::from_millis(20));
        let first = delta.next();
        let second = delta.next();
        assert!(second < first);
    }
}
