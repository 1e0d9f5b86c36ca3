//! Frame clock and recurring timers
//!
//! The browser hands us a timestamp per animation frame. The scheduler turns
//! those into two recurring tasks: one simulation step per frame, and a pipe
//! spawn every `SPAWN_INTERVAL_SECS` of wall-clock time.

use crate::consts::{MAX_FRAME_DT, SPAWN_INTERVAL_SECS};

/// Fixed-interval timer driven by frame deltas
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: f64,
    elapsed: f64,
}

impl IntervalTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds, returning how many times the timer fired
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.elapsed += dt.max(0.0);
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Seconds until the next firing
    pub fn remaining(&self) -> f64 {
        self.interval - self.elapsed
    }
}

/// Work due for a single animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameWork {
    /// Pipe spawns due this frame (normally 0 or 1)
    pub spawns: u32,
}

/// Owns the frame clock and the spawn cadence
#[derive(Debug, Clone)]
pub struct Scheduler {
    last_time_ms: Option<f64>,
    spawn_timer: IntervalTimer,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_spawn_interval(SPAWN_INTERVAL_SECS)
    }

    pub fn with_spawn_interval(interval: f64) -> Self {
        Self {
            last_time_ms: None,
            spawn_timer: IntervalTimer::new(interval),
        }
    }

    /// Register a frame at `time_ms` (e.g. a `requestAnimationFrame` timestamp)
    ///
    /// The first frame only starts the clock. Later deltas are capped at
    /// `MAX_FRAME_DT` so a long pause doesn't dump a burst of pipes.
    /// Below 10 fps every frame counts as `MAX_FRAME_DT`, so the spawn
    /// cadence stretches past 1.5 s of wall-clock time.
    pub fn frame(&mut self, time_ms: f64) -> FrameWork {
        let dt = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);

        FrameWork {
            spawns: self.spawn_timer.advance(dt),
        }
    }

    pub fn spawn_timer(&self) -> &IntervalTimer {
        &self.spawn_timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_timer_fires_on_cadence() {
        let mut timer = IntervalTimer::new(1.5);
        assert_eq!(timer.advance(1.0), 0);
        assert_eq!(timer.advance(0.5), 1);
        assert_eq!(timer.advance(1.4), 0);
        assert_eq!(timer.advance(1.7), 2);
    }

    #[test]
    fn test_first_frame_starts_clock() {
        let mut sched = Scheduler::new();
        assert_eq!(sched.frame(5000.0).spawns, 0);
        assert_eq!(sched.spawn_timer().remaining(), SPAWN_INTERVAL_SECS);
    }

    #[test]
    fn test_spawn_every_one_and_a_half_seconds_at_60hz() {
        let mut sched = Scheduler::new();
        let frame_ms = 1000.0 / 60.0;
        let mut spawns = 0;
        // A little over six seconds of frames
        for i in 0..=370 {
            spawns += sched.frame(i as f64 * frame_ms).spawns;
        }
        assert_eq!(spawns, 4);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut sched = Scheduler::with_spawn_interval(0.05);
        sched.frame(0.0);
        // Ten seconds in the background only counts as MAX_FRAME_DT
        assert_eq!(sched.frame(10_000.0).spawns, 2);
    }

    #[test]
    fn test_cadence_stretches_below_ten_fps() {
        let mut sched = Scheduler::new();
        let mut spawns = 0;
        // Six seconds at 4 fps only advances the timer by 2.4 s
        for i in 0..=24 {
            spawns += sched.frame(i as f64 * 250.0).spawns;
        }
        assert_eq!(spawns, 1);
        assert!((sched.spawn_timer().remaining() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut sched = Scheduler::new();
        sched.frame(1000.0);
        assert_eq!(sched.frame(500.0).spawns, 0);
        assert_eq!(sched.spawn_timer().remaining(), SPAWN_INTERVAL_SECS);
    }
}
