//! Browser bindings for the page effects
//!
//! Each submodule attaches one effect to the hydrated page and returns an
//! [`EffectResult`]. [`MagicEffects`] runs all of them once per mount,
//! logging and skipping any that fail. A new mount retires the handlers of
//! the previous one, so remounting never doubles an effect. The decisions themselves live in
//! [`crate::core`]; these modules only read the DOM and write styles and
//! classes.

pub mod error;

#[cfg(not(feature = "ssr"))]
mod ambience;
#[cfg(not(feature = "ssr"))]
mod buttons;
#[cfg(not(feature = "ssr"))]
mod cards;
#[cfg(not(feature = "ssr"))]
mod cursor_trail;
#[cfg(not(feature = "ssr"))]
pub mod dom;
#[cfg(not(feature = "ssr"))]
mod gallery;
#[cfg(not(feature = "ssr"))]
mod keyboard;
#[cfg(not(feature = "ssr"))]
mod marquee;
#[cfg(not(feature = "ssr"))]
mod performance;
#[cfg(not(feature = "ssr"))]
mod progress;
#[cfg(not(feature = "ssr"))]
mod scroll;
#[cfg(not(feature = "ssr"))]
mod scroll_reveal;

use leptos::prelude::*;

pub use error::{EffectError, EffectResult};

use crate::ui::lightbox::Lightbox;
use crate::ui::notifications::{NoticeBoard, NoticesContainer};

/// Id of the cursor trail dot
pub const TRAIL_ID: &str = "cursor-trail";

/// Hosts the page effects
///
/// Renders the cursor trail, the toast stack and the gallery lightbox, and
/// installs every effect once the page is hydrated.
#[component]
pub fn MagicEffects() -> impl IntoView {
    let notices = NoticeBoard::new();
    let lightbox = RwSignal::new(None::<String>);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| install_all(notices, lightbox));

    view! {
        <div id=TRAIL_ID class="cursor-trail" aria-hidden="true"></div>
        <NoticesContainer board=notices />
        <Lightbox content=lightbox />
    }
}

/// Read the effects config the server rendered into the page head
#[cfg(not(feature = "ssr"))]
fn read_config() -> crate::core::EffectsConfig {
    use crate::core::EffectsConfig;
    use crate::core::effects_config::CONFIG_ELEMENT_ID;

    let json = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(json) = json else {
        return EffectsConfig::default();
    };

    EffectsConfig::from_json(&json).unwrap_or_else(|e| {
        leptos::logging::warn!("{}; using defaults", EffectError::from(e));
        EffectsConfig::default()
    })
}

#[cfg(not(feature = "ssr"))]
fn install_all(notices: NoticeBoard, lightbox: RwSignal<Option<String>>) {
    use leptos::logging::{log, warn};

    // Retire the listeners of any earlier mount before binding this one
    let generation = dom::begin_install();
    let config = read_config();

    let results: [(&str, EffectResult<()>); 11] = [
        (
            "scroll reveal",
            scroll_reveal::install(&config).map(|added| log!("watching {} elements", added)),
        ),
        ("cursor trail", cursor_trail::install(&config)),
        ("scroll", scroll::install(&config)),
        ("marquee", marquee::install()),
        ("buttons", buttons::install(&config)),
        ("cards", cards::install(&config)),
        ("progress", progress::install()),
        ("gallery", gallery::install(lightbox)),
        ("keyboard", keyboard::install(&config, notices)),
        ("ambience", ambience::install()),
        ("performance", performance::install(&config)),
    ];

    let mut failed = 0;
    for (name, result) in results {
        if let Err(e) = result {
            warn!("{} effect not installed: {}", name, e);
            failed += 1;
        }
    }

    log!("magic effects ready ({:?}, {} failed)", generation, failed);
}
