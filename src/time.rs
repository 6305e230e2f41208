/// Interval timer driven by externally supplied delta time, so value
/// read-back can be tested by advancing a simulated clock instead of a
/// live frame loop.
pub struct RefreshTimer {
    interval: f32,
    accumulated: f32,
}

impl RefreshTimer {
    pub fn new(interval_seconds: f32) -> Self {
        Self { interval: interval_seconds.max(f32::EPSILON), accumulated: 0.0 }
    }

    /// Adds `dt` seconds and reports whether the interval elapsed. Fires at
    /// most once per call; backlog beyond one interval is discarded so a
    /// stalled frame does not produce a burst of refreshes.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulated += dt.max(0.0);
        if self.accumulated < self.interval {
            return false;
        }
        self.accumulated -= self.interval;
        if self.accumulated >= self.interval {
            self.accumulated = 0.0;
        }
        true
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    pub fn interval_seconds(&self) -> f32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_interval_elapses() {
        let mut timer = RefreshTimer::new(1.0);
        assert!(!timer.advance(0.4));
        assert!(!timer.advance(0.4));
        assert!(timer.advance(0.4));
    }

    #[test]
    fn retains_remainder_but_not_backlog() {
        let mut timer = RefreshTimer::new(1.0);
        assert!(timer.advance(1.5));
        assert!(timer.advance(0.5));
        let mut timer = RefreshTimer::new(1.0);
        assert!(timer.advance(10.0));
        assert!(!timer.advance(0.1));
    }
}
