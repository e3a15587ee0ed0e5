use std::time::Duration;

const SPINNER_SPEED: f64 = 4.0;
const MAX_FRAME_DELTA: f64 = 1.0;
const FULL_ROTATION: f64 = 2.0 * std::f64::consts::PI;

/// Frame clock driven by `Date.now()`; the browser has no monotonic
/// `Instant`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_tick: Option<f64>,
    pub spinner: f64,
}

impl FrameClock {
    /// Advance to `now_seconds` and return the elapsed frame time. Long gaps
    /// (a backgrounded tab) count as at most one second.
    pub fn tick(&mut self, now_seconds: f64) -> Duration {
        let delta = self
            .last_tick
            .map_or(0.0, |last| (now_seconds - last).clamp(0.0, MAX_FRAME_DELTA));
        self.last_tick = Some(now_seconds);
        self.spinner = delta.mul_add(SPINNER_SPEED, self.spinner).rem_euclid(FULL_ROTATION);
        Duration::from_secs_f64(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn first_tick_only_records_the_time() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(10.0), Duration::ZERO);
        assert_close(clock.spinner, 0.0);
    }

    #[test]
    fn ticks_report_elapsed_time() {
        let mut clock = FrameClock::default();
        clock.tick(4.0);
        let elapsed = clock.tick(4.25);
        assert_close(elapsed.as_secs_f64(), 0.25);
        assert_close(clock.spinner, 1.0);
    }

    #[test]
    fn backgrounded_tab_gap_is_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(1.0);
        assert_eq!(clock.tick(120.0), Duration::from_secs(1));
    }

    #[test]
    fn clock_going_backwards_counts_as_no_time() {
        let mut clock = FrameClock::default();
        clock.tick(5.0);
        assert_eq!(clock.tick(4.0), Duration::ZERO);
    }
}
