//! Konami easter egg and page shortcuts

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::core::EffectsConfig;
use crate::core::keyboard::{EASTER_EGG_CLASS, KeySequence, ShortcutAction, is_text_entry};
use crate::core::stagger::{DEFAULT_CHILD_STAGGER_MS, StaggerPlan};
use crate::ui::effects::dom::{
    add_class, after, body, clear_style, document, listen, query_all, remove_class, report,
    scroll_to_id, set_style,
};
use crate::ui::effects::error::EffectResult;
use crate::ui::notifications::{Notice, NoticeBoard};

/// Elements pulsed by the space bar
const PULSE_TARGETS: &str = ".group, [class*=\"animate-\"]";
const PULSE_ANIMATION: &str = "pulse 0.6s ease-in-out";
const PULSE_DURATION_MS: u32 = 600;

const BOUNCE_ANIMATION: &str = "bounce 0.6s ease";
const BOUNCE_DURATION_MS: u32 = 600;

/// How long the easter egg toast stays up (ms)
const EASTER_EGG_NOTICE_MS: u32 = 3000;

pub fn install(config: &EffectsConfig, notices: NoticeBoard) -> EffectResult<()> {
    let konami = Rc::new(RefCell::new(KeySequence::konami()));
    let easter_egg_ms = config.easter_egg_ms;

    listen(&document()?, "keydown", move |e: KeyboardEvent| {
        if konami.borrow_mut().push(&e.code()) {
            report(activate_easter_egg(easter_egg_ms, notices));
        }

        // A focused button already handled its own activation
        if e.default_prevented() || typing(&e) {
            return;
        }

        let Some(action) = ShortcutAction::resolve(&e.key(), e.ctrl_key()) else {
            return;
        };
        if action.prevents_default() {
            e.prevent_default();
        }

        report(match action {
            ShortcutAction::GlobalPulse => global_pulse(),
            ShortcutAction::Bounce => bounce(),
            ShortcutAction::ScrollTo(id) => scroll_to_id(id),
        });
    })
}

fn typing(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        .is_some_and(|el| is_text_entry(&el.tag_name(), el.is_content_editable()))
}

fn activate_easter_egg(duration_ms: u32, notices: NoticeBoard) -> EffectResult<()> {
    let body = body()?;
    add_class(&body, EASTER_EGG_CLASS)?;
    leptos::logging::log!("easter egg on for {}ms", duration_ms);

    let seconds = duration_ms / 1000;
    notices.push(
        Notice::new(
            "Easter egg activated",
            format!("Rainbow mode enabled for {seconds} seconds!"),
        )
        .dismiss_after(EASTER_EGG_NOTICE_MS),
    );

    after(duration_ms, move || report(remove_class(&body, EASTER_EGG_CLASS)));
    Ok(())
}

/// Pulse every animated element, one after another
fn global_pulse() -> EffectResult<()> {
    let elements = query_all(PULSE_TARGETS)?;
    let plan = StaggerPlan::new(elements.len(), DEFAULT_CHILD_STAGGER_MS);

    for (slot, element) in plan.slots().zip(elements) {
        after(slot.delay_ms, move || {
            report(set_style(&element, "animation", PULSE_ANIMATION));
            after(PULSE_DURATION_MS, move || report(clear_style(&element, "animation")));
        });
    }
    Ok(())
}

fn bounce() -> EffectResult<()> {
    let body = body()?;
    set_style(&body, "animation", BOUNCE_ANIMATION)?;
    after(BOUNCE_DURATION_MS, move || report(clear_style(&body, "animation")));
    Ok(())
}
