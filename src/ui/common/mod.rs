//! Common reusable UI components

pub mod keyboard;

pub use keyboard::{Kbd, KeyboardHint, KeyboardHints};
