//! Marquee speed and swipe handling

/// Horizontal travel that counts as a swipe (px)
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Speed multiplier cycled by clicking a marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarqueeSpeed {
    #[default]
    Normal,
    Double,
    Half,
}

impl MarqueeSpeed {
    /// Next step of the `1 → 2 → 0.5 → 1` cycle
    pub fn next(self) -> Self {
        match self {
            MarqueeSpeed::Normal => MarqueeSpeed::Double,
            MarqueeSpeed::Double => MarqueeSpeed::Half,
            MarqueeSpeed::Half => MarqueeSpeed::Normal,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            MarqueeSpeed::Normal => 1.0,
            MarqueeSpeed::Double => 2.0,
            MarqueeSpeed::Half => 0.5,
        }
    }

    /// New `animation-duration` in seconds given the computed one
    pub fn scale_duration(&self, current_secs: f64) -> f64 {
        current_secs / self.multiplier()
    }
}

/// Parse a computed `animation-duration` such as `"20s"` or `"750ms"`
///
/// Multiple comma-separated durations use the first one.
pub fn parse_duration_secs(value: &str) -> Option<f64> {
    let first = value.split(',').next()?.trim();
    if let Some(ms) = first.strip_suffix("ms") {
        return ms.trim().parse::<f64>().ok().map(|v| v / 1000.0);
    }
    first.strip_suffix('s')?.trim().parse::<f64>().ok()
}

/// Direction a marquee scrolls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeDirection {
    Normal,
    Reverse,
}

impl MarqueeDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            MarqueeDirection::Normal => "normal",
            MarqueeDirection::Reverse => "reverse",
        }
    }
}

/// Turns touch movement into direction flips
///
/// Each time the finger travels more than the threshold from the anchor the
/// direction follows the finger and the anchor moves to the current point.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    anchor_x: f64,
    threshold: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            anchor_x: 0.0,
            threshold,
        }
    }

    pub fn start(&mut self, x: f64) {
        self.anchor_x = x;
    }

    /// Track a touch move; returns the new direction on a swipe
    pub fn move_to(&mut self, x: f64) -> Option<MarqueeDirection> {
        let diff = x - self.anchor_x;
        if diff.abs() <= self.threshold {
            return None;
        }

        self.anchor_x = x;
        Some(if diff > 0.0 {
            MarqueeDirection::Reverse
        } else {
            MarqueeDirection::Normal
        })
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle() {
        let speed = MarqueeSpeed::default();
        assert_eq!(speed.multiplier(), 1.0);
        let speed = speed.next();
        assert_eq!(speed.multiplier(), 2.0);
        let speed = speed.next();
        assert_eq!(speed.multiplier(), 0.5);
        let speed = speed.next();
        assert_eq!(speed, MarqueeSpeed::Normal);
    }

    #[test]
    fn test_scale_duration() {
        assert_eq!(MarqueeSpeed::Double.scale_duration(20.0), 10.0);
        assert_eq!(MarqueeSpeed::Half.scale_duration(20.0), 40.0);
        assert_eq!(MarqueeSpeed::Normal.scale_duration(20.0), 20.0);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration_secs("20s"), Some(20.0));
        assert_eq!(parse_duration_secs("750ms"), Some(0.75));
        assert_eq!(parse_duration_secs("2.5s, 1s"), Some(2.5));
        assert_eq!(parse_duration_secs("auto"), None);
        assert_eq!(parse_duration_secs(""), None);
    }

    #[test]
    fn test_swipe_threshold_is_exclusive() {
        let mut swipe = SwipeTracker::new();
        swipe.start(100.0);
        assert_eq!(swipe.move_to(150.0), None);
        assert_eq!(swipe.move_to(151.0), Some(MarqueeDirection::Reverse));
    }

    #[test]
    fn test_swipe_reanchors() {
        let mut swipe = SwipeTracker::new();
        swipe.start(200.0);
        assert_eq!(swipe.move_to(120.0), Some(MarqueeDirection::Normal));
        // Anchor is now 120, so moving back to 160 is not a swipe
        assert_eq!(swipe.move_to(160.0), None);
        assert_eq!(swipe.move_to(180.0), Some(MarqueeDirection::Reverse));
        assert_eq!(MarqueeDirection::Reverse.as_css(), "reverse");
    }
}
