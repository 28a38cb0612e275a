//! Button ripple, magnetism and keyboard activation

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::core::EffectsConfig;
use crate::core::keyboard::activates_button;
use crate::core::motion::{
    MAGNET_RESET, Point, RIPPLE_DURATION_MS, RIPPLE_SIZE_PX, magnetic_transform,
};
use crate::ui::effects::dom::{
    after, animate, document, listen, pointer, query_all, rect_of, report, set_style, set_styles,
};
use crate::ui::effects::error::{EffectError, EffectResult};

#[derive(Serialize)]
struct RippleFrame {
    width: String,
    height: String,
    opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    easing: Option<&'static str>,
}

pub fn install(config: &EffectsConfig) -> EffectResult<()> {
    let strength = config.magnet_strength;

    for button in query_all("button")? {
        let target = button.clone();
        listen(&button, "click", move |e: MouseEvent| {
            report(ripple(&target, &e));
        })?;

        let target = button.clone();
        listen(&button, "mousemove", move |e: MouseEvent| {
            let transform = magnetic_transform(rect_of(&target), pointer(&e), strength);
            report(set_style(&target, "transform", &transform));
        })?;

        let target = button.clone();
        listen(&button, "mouseleave", move |_: web_sys::Event| {
            report(set_style(&target, "transform", MAGNET_RESET));
        })?;

        let target = button.clone();
        listen(&button, "keydown", move |e: web_sys::KeyboardEvent| {
            if activates_button(&e.key()) {
                e.prevent_default();
                if let Some(html) = target.dyn_ref::<HtmlElement>() {
                    html.click();
                }
            }
        })?;
    }

    Ok(())
}

/// Grow a fading circle from the click point
fn ripple(button: &Element, event: &MouseEvent) -> EffectResult<()> {
    let rect = rect_of(button);
    // Keyboard and synthetic clicks report no pointer position
    let origin = if event.detail() == 0 {
        Point::new(rect.width / 2.0, rect.height / 2.0)
    } else {
        rect.local(pointer(event))
    };

    let span = document()?
        .create_element("span")
        .map_err(|e| EffectError::js("createElement", e))?;
    span.set_class_name("ripple");
    let left = format!("{}px", origin.x);
    let top = format!("{}px", origin.y);
    set_styles(&span, &[("left", &left), ("top", &top)])?;
    button
        .append_child(&span)
        .map_err(|e| EffectError::js("appendChild", e))?;

    let size = format!("{RIPPLE_SIZE_PX}px");
    animate(
        &span,
        &[
            RippleFrame {
                width: "0px".to_string(),
                height: "0px".to_string(),
                opacity: 1.0,
                easing: Some("ease-out"),
            },
            RippleFrame {
                width: size.clone(),
                height: size,
                opacity: 0.0,
                easing: None,
            },
        ],
        f64::from(RIPPLE_DURATION_MS),
    )?;

    after(RIPPLE_DURATION_MS, move || span.remove());
    Ok(())
}
