//! Tuning values for the page effects
//!
//! The server renders an [`EffectsConfig`] as JSON into the page head; the
//! browser reads it back before installing the effects. Every field has a
//! default, so partial JSON (or none at all) is fine.

use serde::{Deserialize, Serialize};

use crate::core::frame_rate::{DEFAULT_MIN_FPS, DEFAULT_SAMPLE_WINDOW_MS};
use crate::core::keyboard::DEFAULT_EASTER_EGG_MS;
use crate::core::motion::{
    DEFAULT_MAGNET_STRENGTH, DEFAULT_NAVBAR_SCROLL_THRESHOLD, DEFAULT_TILT_DEGREES,
    DEFAULT_TRAIL_OFFSET_PX, DEFAULT_TRAIL_SMOOTHING,
};
use crate::core::stagger::DEFAULT_CHILD_STAGGER_MS;
use crate::core::visibility::{
    DEFAULT_CHILD_ANIMATION_STEP_MS, DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLDS, Thresholds,
};

/// Id of the `<script type="application/json">` element carrying the config
pub const CONFIG_ELEMENT_ID: &str = "magic-ui-config";

/// Selectors watched by the visibility dispatcher
pub const DEFAULT_REVEAL_SELECTORS: [&str; 10] = [
    "section",
    ".group",
    "[class*=\"animate-\"]",
    ".fade-in",
    ".fade-in-up",
    ".slide-in-left",
    ".slide-in-right",
    ".zoom-in",
    ".feature-card",
    ".section-title",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Intersection thresholds for scroll reveals
    pub reveal_thresholds: Vec<f64>,
    /// Observer root margin (CSS margin syntax)
    pub reveal_root_margin: String,
    /// CSS selectors of elements to reveal on scroll
    pub reveal_selectors: Vec<String>,
    /// Delay step between revealed children (ms)
    pub child_stagger_ms: u32,
    /// `animation-delay` step written on revealed children (ms)
    pub child_animation_step_ms: u32,
    /// Frame rate under which motion is reduced
    pub min_fps: u32,
    /// Frame-rate sampling window (ms)
    pub fps_window_ms: f64,
    /// Per-frame easing factor of the cursor trail
    pub trail_smoothing: f64,
    /// Offset applied to center the trail dot (px)
    pub trail_offset_px: f64,
    /// How strongly buttons follow the pointer
    pub magnet_strength: f64,
    /// Maximum card tilt (degrees)
    pub tilt_degrees: f64,
    /// Scroll offset after which the navbar turns solid (px)
    pub navbar_scroll_threshold: f64,
    /// Easter egg duration (ms)
    pub easter_egg_ms: u32,
}

impl EffectsConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.reveal_thresholds.iter().copied())
    }

    /// Selectors joined into one `querySelectorAll` argument
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            reveal_thresholds: DEFAULT_THRESHOLDS.to_vec(),
            reveal_root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            reveal_selectors: DEFAULT_REVEAL_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            child_stagger_ms: DEFAULT_CHILD_STAGGER_MS,
            child_animation_step_ms: DEFAULT_CHILD_ANIMATION_STEP_MS,
            min_fps: DEFAULT_MIN_FPS,
            fps_window_ms: DEFAULT_SAMPLE_WINDOW_MS,
            trail_smoothing: DEFAULT_TRAIL_SMOOTHING,
            trail_offset_px: DEFAULT_TRAIL_OFFSET_PX,
            magnet_strength: DEFAULT_MAGNET_STRENGTH,
            tilt_degrees: DEFAULT_TILT_DEGREES,
            navbar_scroll_threshold: DEFAULT_NAVBAR_SCROLL_THRESHOLD,
            easter_egg_ms: DEFAULT_EASTER_EGG_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = EffectsConfig::from_json("{}").unwrap();
        assert_eq!(config, EffectsConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EffectsConfig::from_json(r#"{"min_fps": 50, "tilt_degrees": 4.0}"#).unwrap();
        assert_eq!(config.min_fps, 50);
        assert_eq!(config.tilt_degrees, 4.0);
        assert_eq!(config.child_stagger_ms, 50);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(EffectsConfig::from_json("{min_fps: }").is_err());
        assert!(EffectsConfig::from_json(r#"{"min_fps": "fast"}"#).is_err());
    }

    #[test]
    fn test_serialized_config_reads_back() {
        let mut config = EffectsConfig::default();
        config.easter_egg_ms = 3_000;
        let json = config.to_json().unwrap();
        assert_eq!(EffectsConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_thresholds_are_normalized() {
        let config = EffectsConfig {
            reveal_thresholds: vec![0.9, 0.2, 0.2],
            ..Default::default()
        };
        assert_eq!(config.thresholds().as_slice(), &[0.2, 0.9]);
    }

    #[test]
    fn test_reveal_selector_joins_all() {
        let config = EffectsConfig {
            reveal_selectors: vec!["section".to_string(), ".group".to_string()],
            ..Default::default()
        };
        assert_eq!(config.reveal_selector(), "section, .group");
        assert!(EffectsConfig::default().reveal_selector().starts_with("section, .group"));
    }
}
