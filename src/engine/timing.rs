use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of frames the average frame rate is computed over
pub const FRAME_RATE_WINDOW: usize = 60;

/// Timing information handed to every update and draw
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElapsedTime {
    /// Seconds since the previous frame
    pub step_time: f64,

    /// Seconds since the game loop started
    pub total_time: f64,
}

/// Rolling average of recent frame times
#[derive(Debug, Clone)]
pub struct FrameRateTracker {
    samples: VecDeque<f64>,
    window: usize,
    total: f64,
}

impl FrameRateTracker {
    pub fn new(window: usize) -> Self {
        FrameRateTracker {
            samples: VecDeque::with_capacity(window),
            window: window.max(1),
            total: 0.0,
        }
    }

    /// Record the duration of one frame in seconds
    pub fn record(&mut self, step_seconds: f64) {
        if step_seconds <= 0.0 {
            return;
        }

        if self.samples.len() == self.window {
            if let Some(oldest) = self.samples.pop_front() {
                self.total -= oldest;
            }
        }
        self.samples.push_back(step_seconds);
        self.total += step_seconds;
    }

    /// Average frames per second over the window, 0 before any frame
    pub fn average_frames_per_second(&self) -> f32 {
        if self.total <= 0.0 {
            0.0
        } else {
            (self.samples.len() as f64 / self.total) as f32
        }
    }
}

/// Wall-clock frame pacing for the game loop
pub struct FrameClock {
    started: Instant,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        FrameClock {
            started: now,
            last_frame: now,
        }
    }

    /// Mark the start of a new frame and return its timing
    pub fn tick(&mut self) -> ElapsedTime {
        let now = Instant::now();
        let step = now.duration_since(self.last_frame);
        self.last_frame = now;

        ElapsedTime {
            step_time: step.as_secs_f64(),
            total_time: now.duration_since(self.started).as_secs_f64(),
        }
    }

    /// Sleep for whatever is left of the current frame's budget
    pub fn wait_for_next_frame(&self, target_fps: u32) {
        if target_fps == 0 {
            return;
        }

        let budget = Duration::from_secs_f64(1.0 / target_fps as f64);
        let spent = self.last_frame.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frames_reports_zero() {
        let tracker = FrameRateTracker::new(FRAME_RATE_WINDOW);
        assert_eq!(tracker.average_frames_per_second(), 0.0);
    }

    #[test]
    fn test_steady_frame_rate() {
        let mut tracker = FrameRateTracker::new(FRAME_RATE_WINDOW);
        for _ in 0..10 {
            tracker.record(0.02);
        }
        assert!((tracker.average_frames_per_second() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_window_drops_old_samples() {
        let mut tracker = FrameRateTracker::new(4);
        for _ in 0..4 {
            tracker.record(0.1);
        }
        for _ in 0..4 {
            tracker.record(0.025);
        }
        assert!((tracker.average_frames_per_second() - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_non_positive_steps_are_ignored() {
        let mut tracker = FrameRateTracker::new(4);
        tracker.record(0.0);
        tracker.record(-1.0);
        assert_eq!(tracker.average_frames_per_second(), 0.0);
    }

    #[test]
    fn test_clock_total_time_is_monotonic() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(second.total_time >= first.total_time);
        assert!(second.step_time >= 0.0);
    }
}
