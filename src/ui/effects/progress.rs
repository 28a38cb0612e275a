//! Progress ring and bar fills on entry into view

use serde::Serialize;

use crate::core::progress::{
    BAR_TRANSITION, RING_CIRCUMFERENCE, RING_DURATION_MS, RING_TARGET_OFFSET, bar_target_width,
};
use crate::core::stagger::{PROGRESS_BAR_STAGGER_MS, StaggerPlan};
use crate::ui::effects::dom::{after, animate, on_enter_view, query_all, report, set_style, set_styles};
use crate::ui::effects::error::EffectResult;

const RING_SELECTOR: &str = "[class*=\"stroke-dasharray\"]";
const BAR_SELECTOR: &str = ".bg-white.h-full";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RingFrame {
    stroke_dashoffset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    easing: Option<&'static str>,
}

pub fn install() -> EffectResult<()> {
    install_rings()?;
    install_bars()
}

fn install_rings() -> EffectResult<()> {
    let circumference = RING_CIRCUMFERENCE.to_string();
    let target = RING_TARGET_OFFSET.to_string();

    on_enter_view(query_all(RING_SELECTOR)?, move |_, ring| {
        report(set_styles(
            ring,
            &[("stroke-dasharray", &circumference), ("stroke-dashoffset", &target)],
        ));

        let frames = [
            RingFrame {
                stroke_dashoffset: circumference.clone(),
                easing: Some("ease-out"),
            },
            RingFrame {
                stroke_dashoffset: target.clone(),
                easing: None,
            },
        ];
        if let Err(e) = animate(ring, &frames, f64::from(RING_DURATION_MS)) {
            leptos::logging::warn!("progress ring animation failed: {}", e);
        }
    })
}

fn install_bars() -> EffectResult<()> {
    let bars = query_all(BAR_SELECTOR)?;
    let plan = StaggerPlan::new(bars.len(), PROGRESS_BAR_STAGGER_MS);

    on_enter_view(bars, move |index, bar| {
        report(set_style(bar, "width", "0"));

        let width = bar_target_width(bar.get_attribute("data-width").as_deref(), index);
        let bar = bar.clone();
        after(plan.delay_for(index), move || {
            report(set_styles(&bar, &[("transition", BAR_TRANSITION), ("width", &width)]));
        });
    })
}
