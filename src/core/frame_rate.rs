//! Frame-rate based motion throttling
//!
//! Counts rendered frames over a rolling window and decides whether the page
//! should fall back to reduced motion. The browser binding calls
//! [`FrameRateMonitor::record_frame`] from a `requestAnimationFrame` loop and
//! toggles the global `reduced-motion` class when a sample comes back.
//!
//! Timestamps are plain milliseconds (`performance.now()` in the browser) so
//! the monitor can be driven deterministically in tests.
//!
//! # Example
//! ```
//! # use magic_ui::core::frame_rate::{FrameRateMonitor, MotionLevel};
//! let mut monitor = FrameRateMonitor::new(0.0);
//!
//! // 20 frames, the last one closing the one-second window
//! let mut sample = None;
//! for i in 1..=20 {
//!     sample = monitor.record_frame(i as f64 * 50.0);
//! }
//!
//! let sample = sample.unwrap();
//! assert_eq!(sample.fps, 20);
//! assert_eq!(sample.level, MotionLevel::Reduced);
//! ```

/// Length of one sampling window (ms)
pub const DEFAULT_SAMPLE_WINDOW_MS: f64 = 1000.0;

/// Frame rate below which motion is reduced
pub const DEFAULT_MIN_FPS: u32 = 30;

/// Class put on `<body>` while motion is reduced
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";

/// How much animation the page should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionLevel {
    #[default]
    Full,
    Reduced,
}

impl MotionLevel {
    pub fn is_reduced(&self) -> bool {
        matches!(self, MotionLevel::Reduced)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MotionLevel::Full => "Full",
            MotionLevel::Reduced => "Reduced",
        }
    }
}

/// Result of one completed sampling window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSample {
    /// Frames per second, rounded to the nearest integer
    pub fps: u32,
    /// Motion level decided from `fps`
    pub level: MotionLevel,
}

/// Rolling frame counter
#[derive(Debug, Clone)]
pub struct FrameRateMonitor {
    window_start_ms: f64,
    frames: u32,
    window_ms: f64,
    min_fps: u32,
    level: MotionLevel,
    /// User agent asked for reduced motion; samples never lift it
    pinned: bool,
}

impl FrameRateMonitor {
    /// Create a monitor whose first window starts at `now_ms`
    pub fn new(now_ms: f64) -> Self {
        Self::with_limits(now_ms, DEFAULT_SAMPLE_WINDOW_MS, DEFAULT_MIN_FPS)
    }

    /// Create a monitor with a custom window and fps floor
    pub fn with_limits(now_ms: f64, window_ms: f64, min_fps: u32) -> Self {
        Self {
            window_start_ms: now_ms,
            frames: 0,
            window_ms: if window_ms > 0.0 {
                window_ms
            } else {
                DEFAULT_SAMPLE_WINDOW_MS
            },
            min_fps,
            level: MotionLevel::Full,
            pinned: false,
        }
    }

    /// Keep motion reduced regardless of measured frame rate
    pub fn pin_reduced(&mut self) {
        self.pinned = true;
        self.level = MotionLevel::Reduced;
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Count one rendered frame
    ///
    /// Returns a sample once the current window has lasted at least the
    /// configured window length, then starts a new window at `now_ms`.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<FrameSample> {
        self.frames = self.frames.saturating_add(1);

        let elapsed = now_ms - self.window_start_ms;
        if elapsed < self.window_ms {
            return None;
        }

        let fps = (f64::from(self.frames) * 1000.0 / elapsed).round() as u32;
        self.frames = 0;
        self.window_start_ms = now_ms;

        self.level = if self.pinned || fps < self.min_fps {
            MotionLevel::Reduced
        } else {
            MotionLevel::Full
        };

        Some(FrameSample {
            fps,
            level: self.level,
        })
    }

    /// Motion level decided by the last completed window
    pub fn level(&self) -> MotionLevel {
        self.level
    }

    /// Frames counted in the window in progress
    pub fn pending_frames(&self) -> u32 {
        self.frames
    }

    pub fn min_fps(&self) -> u32 {
        self.min_fps
    }
}
