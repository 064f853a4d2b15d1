use std::time::{Duration, Instant};

/// Default spacing between momentum ticks.
pub const DEFAULT_COAST_INTERVAL: Duration = Duration::from_millis(10);

/// Linear-deceleration momentum after a drag is released.
///
/// `acceleration` is the whole number of pixels added to the scroll offset on
/// the next tick. It moves one step toward zero per tick and never crosses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coast {
    acceleration: i32,
    next_tick: Instant,
    interval: Duration,
}

impl Coast {
    /// Schedule the first tick one `interval` after `released_at`.
    pub fn new(acceleration: i32, released_at: Instant, interval: Duration) -> Self {
        Self {
            acceleration,
            next_tick: released_at + interval,
            interval,
        }
    }

    pub fn acceleration(&self) -> i32 {
        self.acceleration
    }

    /// The single pending tick deadline.
    pub fn deadline(&self) -> Instant {
        self.next_tick
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Run one tick against the current offset.
    ///
    /// Returns the delta to add to the offset, or `None` once the coast is
    /// over: the offset sits exactly on `0` or `max_offset`, or the
    /// acceleration reached zero. An unclamped target outside that range
    /// keeps coasting until the acceleration runs out.
    pub fn step(&mut self, offset: f32, max_offset: f32) -> Option<f32> {
        if offset == 0.0 || offset == max_offset || self.acceleration == 0 {
            return None;
        }
        let delta = self.acceleration as f32;
        self.acceleration -= self.acceleration.signum();
        self.next_tick += self.interval;
        Some(delta)
    }
}

/// Momentum for a release: `distance` pixels scrolled over `elapsed` seconds.
///
/// velocity = round(distance / elapsed), acceleration = round(velocity / elapsed / 100).
/// A zero or non-finite elapsed time yields no momentum.
pub fn release_acceleration(distance: f32, elapsed: f32) -> i32 {
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0;
    }
    let velocity = round_half_up(distance / elapsed);
    let acceleration = round_half_up(velocity / elapsed / 100.0);
    if acceleration.is_finite() {
        acceleration as i32
    } else {
        0
    }
}

// Ties go toward +inf (12.5 -> 13, -12.5 -> -12).
fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── release_acceleration ────────────────────────────────────────────

    #[test]
    fn twelve_pixels_in_200ms_gives_three() {
        assert_eq!(release_acceleration(12.0, 0.2), 3);
    }

    #[test]
    fn negative_distance_gives_negative_acceleration() {
        assert_eq!(release_acceleration(-12.0, 0.2), -3);
    }

    #[test]
    fn stationary_release_has_no_momentum() {
        assert_eq!(release_acceleration(0.0, 0.1), 0);
    }

    #[test]
    fn zero_elapsed_has_no_momentum() {
        assert_eq!(release_acceleration(40.0, 0.0), 0);
        assert_eq!(release_acceleration(40.0, f32::NAN), 0);
    }

    #[test]
    fn slow_long_drag_rounds_to_zero() {
        // 20px over 2s: velocity 10, acceleration round(0.05) = 0
        assert_eq!(release_acceleration(20.0, 2.0), 0);
    }

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    // ── Coast ───────────────────────────────────────────────────────────

    #[test]
    fn first_tick_is_one_interval_after_release() {
        let t0 = Instant::now();
        let coast = Coast::new(3, t0, DEFAULT_COAST_INTERVAL);
        assert!(!coast.is_due(t0));
        assert!(coast.is_due(t0 + Duration::from_millis(10)));
        assert_eq!(coast.deadline(), t0 + Duration::from_millis(10));
    }

    #[test]
    fn positive_coast_decays_by_one_per_tick() {
        let t0 = Instant::now();
        let mut coast = Coast::new(3, t0, DEFAULT_COAST_INTERVAL);
        let mut offset = 100.0;
        let mut deltas = Vec::new();
        while let Some(d) = coast.step(offset, 800.0) {
            offset += d;
            deltas.push(d);
        }
        assert_eq!(deltas, vec![3.0, 2.0, 1.0]);
        assert_eq!(offset, 106.0);
        assert_eq!(coast.acceleration(), 0);
    }

    #[test]
    fn negative_coast_decays_toward_zero() {
        let t0 = Instant::now();
        let mut coast = Coast::new(-2, t0, DEFAULT_COAST_INTERVAL);
        assert_eq!(coast.step(50.0, 800.0), Some(-2.0));
        assert_eq!(coast.step(48.0, 800.0), Some(-1.0));
        assert_eq!(coast.step(47.0, 800.0), None);
    }

    #[test]
    fn zero_acceleration_never_moves() {
        let mut coast = Coast::new(0, Instant::now(), DEFAULT_COAST_INTERVAL);
        assert_eq!(coast.step(100.0, 800.0), None);
    }

    #[test]
    fn boundaries_stop_the_coast() {
        let mut coast = Coast::new(5, Instant::now(), DEFAULT_COAST_INTERVAL);
        assert_eq!(coast.step(0.0, 800.0), None);
        assert_eq!(coast.step(800.0, 800.0), None);
        assert_eq!(coast.acceleration(), 5);
    }

    #[test]
    fn offsets_past_the_boundaries_keep_coasting() {
        let mut coast = Coast::new(2, Instant::now(), DEFAULT_COAST_INTERVAL);
        assert_eq!(coast.step(-8.0, 800.0), Some(2.0));
        assert_eq!(coast.step(900.0, 800.0), Some(1.0));
        assert_eq!(coast.step(901.0, 800.0), None);
    }

    #[test]
    fn each_step_advances_deadline_by_interval() {
        let t0 = Instant::now();
        let mut coast = Coast::new(2, t0, DEFAULT_COAST_INTERVAL);
        coast.step(10.0, 100.0);
        assert_eq!(coast.deadline(), t0 + Duration::from_millis(20));
    }
}
