//! Cursor trail that eases toward the pointer every frame

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::EffectsConfig;
use crate::core::motion::TrailFollower;
use crate::ui::effects::dom::{
    animation_loop, document, listen, pointer, query_all, report, set_style, set_styles, window,
};
use crate::ui::effects::TRAIL_ID;
use crate::ui::effects::error::EffectResult;

/// Elements that enlarge the trail while hovered
const HOVER_TARGETS: &str = "button, .group, .hover\\:scale-105";

const TRAIL_COLOR: &str = "rgba(255, 255, 255, 0.5)";
const TRAIL_HOVER_COLOR: &str = "rgba(255, 255, 255, 0.8)";

pub fn install(config: &EffectsConfig) -> EffectResult<()> {
    let document = document()?;
    let Some(trail) = document.get_element_by_id(TRAIL_ID) else {
        return Ok(());
    };

    let follower = Rc::new(RefCell::new(TrailFollower::new(config.trail_smoothing)));
    let offset = config.trail_offset_px;

    {
        let follower = follower.clone();
        listen(&window()?, "mousemove", move |e: web_sys::MouseEvent| {
            follower.borrow_mut().set_target(pointer(&e));
        })?;
    }

    // Hide the dot while the pointer is outside the page
    if let Some(root) = document.document_element() {
        let hidden = trail.clone();
        listen(&root, "mouseleave", move |_: web_sys::Event| {
            report(set_style(&hidden, "opacity", "0"));
        })?;
        let shown = trail.clone();
        listen(&root, "mouseenter", move |_: web_sys::Event| {
            report(set_style(&shown, "opacity", "1"));
        })?;
    }

    for target in query_all(HOVER_TARGETS)? {
        let grow = trail.clone();
        listen(&target, "mouseenter", move |_: web_sys::Event| {
            report(set_styles(&grow, &[("transform", "scale(2)"), ("background-color", TRAIL_HOVER_COLOR)]));
        })?;
        let shrink = trail.clone();
        listen(&target, "mouseleave", move |_: web_sys::Event| {
            report(set_styles(&shrink, &[("transform", "scale(1)"), ("background-color", TRAIL_COLOR)]));
        })?;
    }

    animation_loop(move |_| {
        let mut follower = follower.borrow_mut();
        if follower.is_settled() {
            return;
        }
        let position = follower.step();
        let left = format!("{}px", position.x - offset);
        let top = format!("{}px", position.y - offset);
        report(set_styles(&trail, &[("left", &left), ("top", &top)]));
    })
}
