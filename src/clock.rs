//! Frame pacing.

use std::thread;
use std::time::{Duration, Instant};

pub trait FrameClock {
    /// Wait for the next tick boundary at `fps`. A frame that ran long is
    /// not made up for later.
    fn tick(&mut self, fps: u32);

    /// Block for a fixed stretch of real time.
    fn hold(&mut self, duration: Duration);
}

/// Paces with `thread::sleep`, measuring from the end of the previous tick.
pub struct SystemClock {
    last_tick: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { last_tick: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn tick(&mut self, fps: u32) {
        let frame = Duration::from_secs(1) / fps.max(1);
        let elapsed = self.last_tick.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
        self.last_tick = Instant::now();
    }

    fn hold(&mut self, duration: Duration) {
        thread::sleep(duration);
        self.last_tick = Instant::now();
    }
}
