//! Gallery lazy reveal and lightbox triggers

use leptos::prelude::*;

use crate::core::stagger::{GALLERY_STAGGER_MS, StaggerPlan};
use crate::ui::effects::dom::{after, listen, on_enter_view, query_all, report, set_styles};
use crate::ui::effects::error::{EffectError, EffectResult};

const GALLERY_ITEM: &str = ".break-inside-avoid";

/// Hide gallery items until they scroll in and open `lightbox` on activation
///
/// `lightbox` receives the item's inner HTML.
pub fn install(lightbox: RwSignal<Option<String>>) -> EffectResult<()> {
    let items = query_all(GALLERY_ITEM)?;
    let plan = StaggerPlan::new(items.len(), GALLERY_STAGGER_MS);

    for item in &items {
        set_styles(item, &[("opacity", "0"), ("transform", "translateY(20px)")])?;
        item.set_attribute("tabindex", "0")
            .map_err(|e| EffectError::js("setAttribute", e))?;

        let source = item.clone();
        listen(item, "click", move |_: web_sys::Event| {
            lightbox.set(Some(source.inner_html()));
        })?;

        let source = item.clone();
        listen(item, "keydown", move |e: web_sys::KeyboardEvent| {
            if e.key() == "Enter" {
                lightbox.set(Some(source.inner_html()));
            }
        })?;
    }

    on_enter_view(items, move |index, item| {
        let item = item.clone();
        after(plan.delay_for(index), move || {
            report(set_styles(
                &item,
                &[
                    ("transition", "all 0.6s ease-out"),
                    ("opacity", "1"),
                    ("transform", "translateY(0)"),
                ],
            ));
        });
    })
}
