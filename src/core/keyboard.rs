//! Keyboard easter egg and shortcut table

use std::collections::VecDeque;

/// The classic Konami code, as `KeyboardEvent.code` values
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Class put on `<body>` while the easter egg runs
pub const EASTER_EGG_CLASS: &str = "easter-egg-mode";

/// How long the easter egg stays active (ms)
pub const DEFAULT_EASTER_EGG_MS: u32 = 10_000;

/// Matches a fixed key sequence against the most recent key presses
///
/// Only the last `sequence.len()` codes are kept, so any amount of unrelated
/// typing before the sequence is fine.
#[derive(Debug, Clone)]
pub struct KeySequence {
    expected: Vec<String>,
    recent: VecDeque<String>,
}

impl KeySequence {
    pub fn new<I, S>(expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected: Vec<String> = expected.into_iter().map(Into::into).collect();
        Self {
            recent: VecDeque::with_capacity(expected.len()),
            expected,
        }
    }

    pub fn konami() -> Self {
        Self::new(KONAMI_CODE)
    }

    /// Record a key code; returns `true` when it completes the sequence
    ///
    /// The buffer is cleared after a match so the next match needs the full
    /// sequence again.
    pub fn push(&mut self, code: &str) -> bool {
        if self.expected.is_empty() {
            return false;
        }

        self.recent.push_back(code.to_string());
        while self.recent.len() > self.expected.len() {
            self.recent.pop_front();
        }

        if self.recent.iter().eq(self.expected.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }

    /// Number of buffered key codes
    pub fn buffered(&self) -> usize {
        self.recent.len()
    }
}

/// Page-wide keyboard actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Pulse every animated element
    GlobalPulse,
    /// Bounce the whole page once
    Bounce,
    /// Smooth-scroll to the element with this id
    ScrollTo(&'static str),
}

impl ShortcutAction {
    /// Resolve a keydown into an action
    ///
    /// `key` is `KeyboardEvent.key`. Plain space pulses, the up arrow
    /// bounces the page, and Ctrl+H and Ctrl+M jump to the hero and marquee
    /// sections.
    pub fn resolve(key: &str, ctrl: bool) -> Option<Self> {
        match (key, ctrl) {
            (" ", false) => Some(ShortcutAction::GlobalPulse),
            ("ArrowUp", false) => Some(ShortcutAction::Bounce),
            ("h", true) | ("H", true) => Some(ShortcutAction::ScrollTo("hero")),
            ("m", true) | ("M", true) => Some(ShortcutAction::ScrollTo("marquees")),
            _ => None,
        }
    }

    /// Whether the browser's own handling of the key should be suppressed
    ///
    /// The bounce leaves the arrow key free to scroll.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ShortcutAction::Bounce)
    }
}

/// Shortcut legend shown on the page
pub const SHORTCUT_HINTS: [(&str, &str); 5] = [
    ("Space", "animation burst"),
    ("↑", "bounce"),
    ("Ctrl+H", "back to hero"),
    ("Ctrl+M", "jump to marquees"),
    ("↑↑↓↓←→←→BA", "surprise"),
];

/// Whether a keydown on `tag_name` should be left to the element itself
///
/// Shortcuts never fire while the user is typing.
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable || matches!(tag_name.to_ascii_uppercase().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
}

/// Id of the in-page section a link points at
///
/// Only same-page fragment links (`#features`) qualify; a bare `#` and
/// links to other pages are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a key activates a focused button
pub fn activates_button(key: &str) -> bool {
    key == "Enter" || key == " "
}
