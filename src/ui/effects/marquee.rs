//! Marquee pause, speed cycling and swipe direction

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::TouchEvent;

use crate::core::marquee::{MarqueeSpeed, SwipeTracker, parse_duration_secs};
use crate::ui::effects::dom::{listen, query_all, report, set_style, window};
use crate::ui::effects::error::EffectResult;

const MARQUEE_SELECTOR: &str = "[class*=\"animate-marquee\"]";

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|t| f64::from(t.client_x()))
}

pub fn install() -> EffectResult<()> {
    let window = window()?;

    for marquee in query_all(MARQUEE_SELECTOR)? {
        let Some(host) = marquee.parent_element() else {
            continue;
        };

        // Speeds scale the duration the stylesheet gave the track
        let base_secs = window
            .get_computed_style(&marquee)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("animation-duration").ok())
            .and_then(|value| parse_duration_secs(&value));

        let track = marquee.clone();
        listen(&host, "mouseenter", move |_: web_sys::Event| {
            report(set_style(&track, "animation-play-state", "paused"));
        })?;

        let track = marquee.clone();
        listen(&host, "mouseleave", move |_: web_sys::Event| {
            report(set_style(&track, "animation-play-state", "running"));
        })?;

        let speed = Rc::new(Cell::new(MarqueeSpeed::default()));
        let track = marquee.clone();
        listen(&host, "click", move |_: web_sys::Event| {
            let next = speed.get().next();
            speed.set(next);
            if let Some(base) = base_secs {
                let duration = format!("{}s", next.scale_duration(base));
                report(set_style(&track, "animation-duration", &duration));
            }
        })?;

        let swipe = Rc::new(RefCell::new(SwipeTracker::new()));
        {
            let swipe = swipe.clone();
            listen(&host, "touchstart", move |e: TouchEvent| {
                if let Some(x) = first_touch_x(&e) {
                    swipe.borrow_mut().start(x);
                }
            })?;
        }

        let track = marquee.clone();
        listen(&host, "touchmove", move |e: TouchEvent| {
            let Some(x) = first_touch_x(&e) else {
                return;
            };
            if let Some(direction) = swipe.borrow_mut().move_to(x) {
                report(set_style(&track, "animation-direction", direction.as_css()));
            }
        })?;
    }

    Ok(())
}
