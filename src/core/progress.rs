//! Progress ring and bar fill targets

/// Circumference of the r=40 progress ring (`2 * PI * 40`, rounded)
pub const RING_CIRCUMFERENCE: f64 = 251.2;

/// Dash offset the ring settles at (70% filled)
pub const RING_TARGET_OFFSET: f64 = 75.36;

/// Ring fill animation length (ms)
pub const RING_DURATION_MS: u32 = 2000;

/// Widths used for bars without a `data-width` attribute, by index
pub const BAR_FALLBACK_WIDTHS: [&str; 3] = ["85%", "60%", "40%"];

/// Width for bars past the fallback list
pub const BAR_DEFAULT_WIDTH: &str = "70%";

/// Width transition applied before a bar fills
pub const BAR_TRANSITION: &str = "width 1.5s ease-out";

/// Width a linear progress bar fills to
///
/// An explicit non-empty `data-width` wins; otherwise the index picks from
/// [`BAR_FALLBACK_WIDTHS`], then [`BAR_DEFAULT_WIDTH`].
pub fn bar_target_width(data_width: Option<&str>, index: usize) -> String {
    match data_width.map(str::trim) {
        Some(width) if !width.is_empty() => width.to_string(),
        _ => BAR_FALLBACK_WIDTHS
            .get(index)
            .copied()
            .unwrap_or(BAR_DEFAULT_WIDTH)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_prefers_attribute() {
        assert_eq!(bar_target_width(Some("33%"), 0), "33%");
        assert_eq!(bar_target_width(Some(" 12% "), 7), "12%");
    }

    #[test]
    fn test_bar_width_fallbacks_by_index() {
        assert_eq!(bar_target_width(None, 0), "85%");
        assert_eq!(bar_target_width(None, 1), "60%");
        assert_eq!(bar_target_width(Some(""), 2), "40%");
        assert_eq!(bar_target_width(None, 3), "70%");
        assert_eq!(bar_target_width(None, 99), "70%");
    }

    #[test]
    fn test_ring_fills_seventy_percent() {
        let filled = 1.0 - RING_TARGET_OFFSET / RING_CIRCUMFERENCE;
        assert!((filled - 0.7).abs() < 1e-9);
    }
}
