use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Fade-out length before the lightbox is removed (ms)
pub const LIGHTBOX_FADE_MS: u32 = 300;

/// Full-screen view of a gallery item
///
/// Shows the HTML in `content` while it is `Some`. Escape, a backdrop click
/// or the close button fade it out and then reset `content` to `None`.
#[component]
pub fn Lightbox(content: RwSignal<Option<String>>) -> impl IntoView {
    let (is_closing, set_is_closing) = signal(false);

    let close = move || {
        if content.with_untracked(Option::is_none) || is_closing.get_untracked() {
            return;
        }
        set_is_closing.set(true);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(LIGHTBOX_FADE_MS).await;
                content.set(None);
                set_is_closing.set(false);
            });
        }
        #[cfg(feature = "ssr")]
        {
            content.set(None);
            set_is_closing.set(false);
        }
    };

    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                close();
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <Show when=move || content.with(Option::is_some)>
            <div
                class="lightbox-backdrop fixed inset-0 bg-black/80 flex items-center justify-center z-50 backdrop-blur-sm"
                style=move || {
                    if is_closing.get() {
                        "animation: fadeOut 0.3s ease-out forwards;"
                    } else {
                        "animation: fadeIn 0.3s ease-out;"
                    }
                }
                on:click=move |e| {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(target) = e.target() {
                            if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                                if element.class_list().contains("lightbox-backdrop") {
                                    close();
                                }
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            >
                <div
                    class="relative bg-white/10 border border-white/20 rounded-2xl p-8 max-w-2xl max-h-[80vh] overflow-auto backdrop-blur-xl"
                    style="animation: scaleIn 0.3s ease-out;"
                >
                    <div inner_html=move || content.get().unwrap_or_default()></div>
                    <button
                        class="absolute top-4 right-4 text-white text-2xl hover:text-gray-300 transition-colors"
                        title="Close"
                        aria-label="Close lightbox"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </Show>
    }
}
