//! Breathing grid backdrop and floating element hover

use std::cell::RefCell;

use gloo_timers::callback::Interval;

use crate::core::motion::grid_opacity;
use crate::ui::effects::dom::{listen, now_ms, query_all, query_one, report, set_style, set_styles};
use crate::ui::effects::error::EffectResult;

const GRID_SELECTOR: &str = "[class*=\"bg-[linear-gradient\"]";
const GRID_TICK_MS: u32 = 100;
const FLOAT_SELECTOR: &str = ".animate-float";

thread_local! {
    // Replacing the ticker drops, and so cancels, the previous one
    static GRID_TICKER: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

pub fn install() -> EffectResult<()> {
    let ticker = query_one(GRID_SELECTOR)?.map(|grid| {
        Interval::new(GRID_TICK_MS, move || {
            report(set_style(&grid, "opacity", &grid_opacity(now_ms()).to_string()));
        })
    });
    GRID_TICKER.with(|slot| slot.replace(ticker));

    for element in query_all(FLOAT_SELECTOR)? {
        let target = element.clone();
        listen(&element, "mouseenter", move |_: web_sys::Event| {
            report(set_styles(&target, &[("animation-duration", "1s"), ("transform", "scale(1.5)")]));
        })?;

        let target = element.clone();
        listen(&element, "mouseleave", move |_: web_sys::Event| {
            report(set_styles(&target, &[("animation-duration", "3s"), ("transform", "scale(1)")]));
        })?;
    }

    Ok(())
}
