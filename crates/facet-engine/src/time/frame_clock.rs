use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Real-time clock feeding `Scene::update`.
///
/// Delta time is clamped so a stalled process (debugger, minimized window)
/// does not hand entities a huge step, and a tight loop never hands them zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps. Swapped bounds are
    /// put back in order.
    pub fn with_clamps(a: Duration, b: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: a.min(b),
            dt_max: a.max(b),
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: f32 = 0.001;

    #[test]
    fn tick_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[test]
    fn dt_respects_lower_clamp() {
        let mut clock =
            FrameClock::with_clamps(Duration::from_millis(5), Duration::from_millis(500));
        // Back-to-back ticks take far less than 5 ms.
        let ft = clock.tick();
        assert!(ft.dt >= 5.0 * MS - f32::EPSILON);
        assert!(ft.dt <= 500.0 * MS + f32::EPSILON);
    }

    #[test]
    fn dt_respects_upper_clamp() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        let ft = clock.tick();
        assert!(ft.dt <= MS + f32::EPSILON);
    }

    #[test]
    fn swapped_clamps_are_reordered() {
        let mut clock =
            FrameClock::with_clamps(Duration::from_millis(50), Duration::from_millis(5));
        let ft = clock.tick();
        assert!(ft.dt >= 5.0 * MS - f32::EPSILON);
        assert!(ft.dt <= 50.0 * MS + f32::EPSILON);
    }
}
