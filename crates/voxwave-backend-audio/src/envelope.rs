//! Linear fade-in/fade-out envelope.
//!
//! The envelope ramps from 0 to 1 over the fade window at the start of the
//! buffer, holds 1, and ramps back to 0 over the same window at the end, so
//! the buffer starts and stops at zero amplitude.

/// Longest fade window in seconds.
pub const MAX_FADE_SECONDS: f64 = 0.1;

/// Fade window as a fraction of the total duration.
pub const FADE_FRACTION: f64 = 0.05;

/// Linear fade envelope over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEnvelope {
    /// Total duration in seconds.
    pub duration: f64,
    /// Length of each fade window in seconds.
    pub fade_time: f64,
}

impl FadeEnvelope {
    /// Creates an envelope for a buffer of `duration` seconds.
    pub fn new(duration: f64) -> Self {
        let duration = duration.max(0.0);
        Self {
            duration,
            fade_time: MAX_FADE_SECONDS.min(duration * FADE_FRACTION),
        }
    }

    /// Envelope gain at `time` seconds, in [0, 1].
    pub fn gain(&self, time: f64) -> f64 {
        if self.fade_time <= 0.0 {
            return 0.0;
        }

        if time < self.fade_time {
            (time / self.fade_time).max(0.0)
        } else if time > self.duration - self.fade_time {
            ((self.duration - time) / self.fade_time).max(0.0)
        } else {
            1.0
        }
    }
}
