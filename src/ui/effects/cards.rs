//! 3D tilt and content reveal for feature cards

use crate::core::EffectsConfig;
use crate::core::motion::{TILT_RESET, Tilt};
use crate::core::stagger::{DEFAULT_CHILD_STAGGER_MS, StaggerPlan};
use crate::core::visibility::DEFAULT_CHILD_ANIMATION_STEP_MS;
use crate::ui::effects::dom::{
    after, listen, pointer, query_all, query_within, rect_of, report, set_style, set_styles,
};
use crate::ui::effects::error::EffectResult;

const CARD_SELECTOR: &str = ".group";
const CARD_CONTENT: &str = "h3, p, div";

pub fn install(config: &EffectsConfig) -> EffectResult<()> {
    let max_degrees = config.tilt_degrees;
    let cards = query_all(CARD_SELECTOR)?;
    let entrance = StaggerPlan::new(cards.len(), DEFAULT_CHILD_ANIMATION_STEP_MS);

    for (slot, card) in entrance.slots().zip(cards) {
        set_style(&card, "animation-delay", &format!("{}ms", slot.delay_ms))?;

        let target = card.clone();
        listen(&card, "mousemove", move |e: web_sys::MouseEvent| {
            let tilt = Tilt::for_pointer(rect_of(&target), pointer(&e), max_degrees);
            report(set_style(&target, "transform", &tilt.to_css()));
        })?;

        let target = card.clone();
        listen(&card, "mouseleave", move |_: web_sys::Event| {
            report(set_style(&target, "transform", TILT_RESET));
        })?;

        let content = query_within(&card, CARD_CONTENT)?;
        listen(&card, "mouseenter", move |_: web_sys::Event| {
            let plan = StaggerPlan::new(content.len(), DEFAULT_CHILD_STAGGER_MS);
            for (slot, element) in plan.slots().zip(content.iter().cloned()) {
                after(slot.delay_ms, move || {
                    report(set_styles(&element, &[("transform", "translateY(0)"), ("opacity", "1")]));
                });
            }
        })?;
    }

    Ok(())
}
