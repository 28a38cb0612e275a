//! Parallax drift, navbar backdrop and smooth in-page navigation

use web_sys::Element;

use crate::core::EffectsConfig;
use crate::core::keyboard::anchor_target;
use crate::core::motion::{NavbarStyle, parallax_offset};
use crate::ui::effects::dom::{
    listen, query_all, query_one, query_within, report, scroll_to_id, set_style, set_styles, window,
};
use crate::ui::effects::error::EffectResult;

const FLOATING: &str = "[class*=\"animate-float\"]";

pub fn install(config: &EffectsConfig) -> EffectResult<()> {
    let window = window()?;
    let floating = query_all(FLOATING)?;
    let navbar = query_one("nav")?;
    let threshold = config.navbar_scroll_threshold;

    if let Some(nav) = &navbar {
        style_navbar(nav, window.scroll_y().unwrap_or(0.0), threshold);
        smooth_links(nav)?;
    }

    let scroll_window = window.clone();
    listen(&window, "scroll", move |_: web_sys::Event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);

        for (index, element) in floating.iter().enumerate() {
            let offset = parallax_offset(scroll_y, index);
            report(set_style(element, "transform", &format!("translateY({offset}px)")));
        }

        if let Some(nav) = &navbar {
            style_navbar(nav, scroll_y, threshold);
        }
    })
}

/// Scroll smoothly to the section a navbar link points at
fn smooth_links(nav: &Element) -> EffectResult<()> {
    for link in query_within(nav, "a[href^=\"#\"]")? {
        let Some(id) = link.get_attribute("href").and_then(|href| anchor_target(&href).map(str::to_owned)) else {
            continue;
        };
        listen(&link, "click", move |e: web_sys::Event| {
            e.prevent_default();
            report(scroll_to_id(&id));
        })?;
    }
    Ok(())
}

fn style_navbar(nav: &Element, scroll_y: f64, threshold: f64) {
    let style = NavbarStyle::for_scroll(scroll_y, threshold);
    report(set_styles(
        nav,
        &[
            ("background", style.background()),
            ("backdrop-filter", style.backdrop_filter()),
        ],
    ));
}
