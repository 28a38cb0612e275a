//! Platform-free decision logic for the page effects
//!
//! Everything in here runs natively and is driven by plain numbers, so the
//! browser bindings in `ui::effects` stay thin.

#[cfg(feature = "ssr")]
pub mod config;
pub mod effects_config;
pub mod frame_rate;
pub mod keyboard;
pub mod lifecycle;
pub mod marquee;
pub mod motion;
pub mod progress;
pub mod stagger;
#[cfg(test)]
mod tests;
pub mod visibility;

pub use effects_config::EffectsConfig;
pub use frame_rate::{FrameRateMonitor, FrameSample, MotionLevel};
pub use keyboard::{KeySequence, ShortcutAction};
pub use stagger::{StaggerPlan, StaggerSlot};
pub use visibility::{Reveal, RevealChild, RevealSurface, Scheduler, VisibilityDispatcher, VisibilityState};
