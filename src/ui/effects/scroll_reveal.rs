//! Scroll-triggered reveal classes
//!
//! One `IntersectionObserver` feeds every notification into a page-wide
//! [`VisibilityDispatcher`]; transitions it reports are applied with
//! [`apply_reveal`]. Installing twice only observes elements that were not
//! watched yet.

use std::cell::RefCell;
use std::collections::HashSet;

use wasm_bindgen::JsValue;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::core::EffectsConfig;
use crate::core::visibility::{
    RevealChild, RevealSurface, Thresholds, VisibilityDispatcher, apply_reveal,
};
use crate::ui::effects::dom::{
    TimeoutScheduler, add_class, element_key, observe, query_all, query_within, read_key,
    remove_class, report, set_styles,
};
use crate::ui::effects::error::EffectResult;

/// Descendants that take part in the child cascade
const ANIMATED_CHILDREN: &str = "[class*=\"animate-\"]";

struct RevealState {
    dispatcher: VisibilityDispatcher<u32>,
    observer: Option<IntersectionObserver>,
}

thread_local! {
    static REVEAL: RefCell<Option<RevealState>> = const { RefCell::new(None) };
}

/// Element the dispatcher swaps presentation classes on
struct RevealTarget(Element);

/// Child whose CSS animation is released by the cascade
struct AnimatedChild(Element);

impl RevealSurface for RevealTarget {
    type Child = AnimatedChild;

    fn add_class(&self, class: &str) {
        report(add_class(&self.0, class));
    }

    fn remove_class(&self, class: &str) {
        report(remove_class(&self.0, class));
    }

    fn eligible_children(&self) -> Vec<AnimatedChild> {
        match query_within(&self.0, ANIMATED_CHILDREN) {
            Ok(children) => children.into_iter().map(AnimatedChild).collect(),
            Err(e) => {
                leptos::logging::warn!("reveal children lookup failed: {}", e);
                Vec::new()
            }
        }
    }
}

impl RevealChild for AnimatedChild {
    fn start_animation(&self, animation_delay_ms: u32) {
        let delay = format!("{animation_delay_ms}ms");
        report(set_styles(
            &self.0,
            &[("animation-delay", &delay), ("animation-play-state", "running")],
        ));
    }
}

/// Watch every element matching the configured selectors
///
/// Returns the number of newly observed elements.
pub fn install(config: &EffectsConfig) -> EffectResult<usize> {
    let mut keyed = Vec::new();
    for element in query_all(&config.reveal_selector())? {
        keyed.push((element_key(&element)?, element));
    }

    REVEAL.with(|slot| {
        let mut slot = slot.borrow_mut();
        let state = slot.get_or_insert_with(|| RevealState {
            dispatcher: VisibilityDispatcher::with_stagger(
                config.child_stagger_ms,
                config.child_animation_step_ms,
            ),
            observer: None,
        });

        let registration = state.dispatcher.register(
            keyed.iter().map(|(key, _)| *key),
            config.reveal_thresholds.iter().copied(),
        );
        if registration.is_empty() {
            return Ok(0);
        }

        let added: HashSet<u32> = registration.added.iter().copied().collect();
        let elements: Vec<Element> = keyed
            .into_iter()
            .filter(|(key, _)| added.contains(key))
            .map(|(_, element)| element)
            .collect();

        match &state.observer {
            Some(observer) => {
                for element in &elements {
                    observer.observe(element);
                }
            }
            None => {
                let options = observer_options(&registration.thresholds, &config.reveal_root_margin);
                state.observer = Some(observe(&elements, &options, on_entry)?);
            }
        }

        Ok(elements.len())
    })
}

fn observer_options(thresholds: &Thresholds, root_margin: &str) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    if !thresholds.is_empty() {
        let values: js_sys::Array = thresholds
            .as_slice()
            .iter()
            .map(|t| JsValue::from_f64(*t))
            .collect();
        options.set_threshold(&values);
    }
    options
}

fn on_entry(entry: &IntersectionObserverEntry) {
    let target = entry.target();
    let Some(key) = read_key(&target) else {
        return;
    };

    // Release the dispatcher before touching the page
    let reveal = REVEAL.with(|slot| {
        slot.borrow_mut().as_mut().and_then(|state| {
            state
                .dispatcher
                .on_intersect(&key, entry.intersection_ratio(), entry.is_intersecting())
        })
    });

    if let Some(reveal) = reveal {
        apply_reveal(&reveal, &RevealTarget(target), &TimeoutScheduler);
    }
}
