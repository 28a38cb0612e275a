//! Toast notifications
//!
//! Effects push a [`Notice`] onto the shared [`NoticeBoard`]; the
//! [`NoticesContainer`] renders them in the top-right corner and removes
//! them once their time is up.

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notices to show at once
const MAX_NOTICES: usize = 5;

/// Length of the slide-out animation (ms)
#[cfg(not(feature = "ssr"))]
const EXIT_MS: u32 = 300;

/// A short message shown as a toast
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    /// Remove the toast after this many milliseconds
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None,
        }
    }

    pub fn dismiss_after(mut self, ms: u32) -> Self {
        self.auto_dismiss_ms = Some(ms);
        self
    }
}

/// Notice with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NoticeItem {
    pub id: u64,
    pub notice: Notice,
}

/// Queue of live notices
#[derive(Clone, Copy)]
pub struct NoticeBoard {
    notices: RwSignal<VecDeque<NoticeItem>>,
    next_id: RwSignal<u64>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notices signal for the container
    pub fn notices(&self) -> RwSignal<VecDeque<NoticeItem>> {
        self.notices
    }

    /// Add a notice, dropping the oldest past the limit
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notices.update(|n| {
            n.push_back(NoticeItem { id, notice });

            while n.len() > MAX_NOTICES {
                n.pop_front();
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| n.retain(|i| i.id != id));
    }

    pub fn clear(&self) {
        self.notices.set(VecDeque::new());
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Notices container component
#[component]
pub fn NoticesContainer(board: NoticeBoard) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || board.notices().get()
                key=|item: &NoticeItem| item.id
                children=move |item: NoticeItem| view! { <NoticeToast item=item board=board /> }
            />
        </div>
    }
}

/// Single toast
#[component]
fn NoticeToast(item: NoticeItem, board: NoticeBoard) -> impl IntoView {
    let (is_exiting, _set_is_exiting) = signal(false);
    let id = item.id;

    if let Some(_ms) = item.notice.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(EXIT_MS).await;
                board.dismiss(id);
            });
        }
    }

    let Notice { title, message, .. } = item.notice;

    view! {
        <div
            class="bg-white/10 border border-white/20 rounded-lg p-4 backdrop-blur-xl shadow-lg animate-slide-in-from-right"
            style=move || if is_exiting.get() { "animation: slide-out-to-right 0.3s ease-out forwards;" } else { "" }
        >
            <div class="flex items-start gap-3">
                <div class="flex-1 min-w-0">
                    <h4 class="font-semibold text-white">{title}</h4>
                    <p class="text-gray-300 text-sm">{message}</p>
                </div>
                <button
                    class="text-gray-400 hover:text-white transition-colors"
                    aria-label="Dismiss"
                    on:click=move |_| board.dismiss(id)
                >
                    "✕"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_builder() {
        let notice = Notice::new("Title", "Body").dismiss_after(3000);
        assert_eq!(notice.title, "Title");
        assert_eq!(notice.auto_dismiss_ms, Some(3000));
        assert_eq!(Notice::new("a", "b").auto_dismiss_ms, None);
    }

    #[test]
    fn test_board_caps_and_dismisses() {
        let owner = Owner::new();
        owner.with(|| {
            let board = NoticeBoard::new();
            for i in 0..7 {
                board.push(Notice::new(format!("n{i}"), ""));
            }

            let titles: Vec<String> = board
                .notices()
                .get_untracked()
                .iter()
                .map(|i| i.notice.title.clone())
                .collect();
            assert_eq!(titles, vec!["n2", "n3", "n4", "n5", "n6"]);

            let first = board.notices().get_untracked()[0].id;
            board.dismiss(first);
            assert_eq!(board.notices().get_untracked().len(), 4);

            board.clear();
            assert!(board.notices().get_untracked().is_empty());
        });
    }
}
