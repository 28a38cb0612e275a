//! Frame-rate monitoring and the `reduced-motion` body class

use crate::core::EffectsConfig;
use crate::core::frame_rate::{FrameRateMonitor, MotionLevel, REDUCED_MOTION_CLASS};
use crate::ui::effects::dom::{add_class, animation_loop, body, now_ms, remove_class, report, window};
use crate::ui::effects::error::EffectResult;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the user agent asks for reduced motion
fn prefers_reduced_motion() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

pub fn install(config: &EffectsConfig) -> EffectResult<()> {
    let body = body()?;
    let mut monitor = FrameRateMonitor::with_limits(now_ms(), config.fps_window_ms, config.min_fps);

    if prefers_reduced_motion() {
        monitor.pin_reduced();
        add_class(&body, REDUCED_MOTION_CLASS)?;
    }

    let mut level = monitor.level();
    animation_loop(move |_| {
        let Some(sample) = monitor.record_frame(now_ms()) else {
            return;
        };

        if sample.level != level {
            leptos::logging::log!("{} fps, motion {}", sample.fps, sample.level.display_name());
            level = sample.level;
        }

        match sample.level {
            MotionLevel::Reduced => report(add_class(&body, REDUCED_MOTION_CLASS)),
            MotionLevel::Full => report(remove_class(&body, REDUCED_MOTION_CLASS)),
        }
    })
}
