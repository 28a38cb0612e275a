//! Keyboard shortcut legend

use leptos::prelude::*;

use crate::core::keyboard::SHORTCUT_HINTS;

/// Single keyboard shortcut hint item
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardHint {
    /// The key name (e.g., "Space", "Ctrl+H")
    pub key: String,
    /// What the key does
    pub action: String,
}

impl KeyboardHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }

    /// Hints for every page shortcut
    pub fn page_shortcuts() -> Vec<Self> {
        SHORTCUT_HINTS
            .iter()
            .map(|(key, action)| Self::new(*key, *action))
            .collect()
    }
}

/// Displays a list of keyboard shortcuts with styled key indicators
#[component]
pub fn KeyboardHints(hints: Vec<KeyboardHint>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-center gap-4 text-sm text-gray-400">
            {hints
                .into_iter()
                .map(|hint| {
                    view! {
                        <div class="flex items-center">
                            <Kbd label=hint.key />
                            <span class="ml-2">{hint.action}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Single keyboard key display component
#[component]
pub fn Kbd(label: String) -> impl IntoView {
    view! {
        <kbd class="px-2 py-1 rounded border border-white/20 bg-white/5 font-mono text-xs text-white">{label}</kbd>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shortcuts_cover_table() {
        let hints = KeyboardHint::page_shortcuts();
        assert_eq!(hints.len(), SHORTCUT_HINTS.len());
        assert_eq!(hints[0], KeyboardHint::new("Space", "animation burst"));
    }
}
