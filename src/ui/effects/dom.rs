//! Thin helpers over `web-sys` shared by the effect installers

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    CssStyleDeclaration, Document, Element, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, SvgElement, Window,
};

use crate::core::Scheduler;
use crate::core::lifecycle::{Generation, Generations};
use crate::core::motion::{Point, Rect};
use crate::ui::effects::error::{EffectError, EffectResult};

/// Attribute carrying the dispatcher key of a watched element
pub const KEY_ATTRIBUTE: &str = "data-fx-id";

thread_local! {
    static NEXT_KEY: Cell<u32> = const { Cell::new(1) };
    static GENERATIONS: Generations = const { Generations::new() };
}

/// Start a new installation; handlers from earlier ones stop running
pub fn begin_install() -> Generation {
    GENERATIONS.with(Generations::begin)
}

fn current_install() -> Generation {
    GENERATIONS.with(Generations::current)
}

/// Whether handlers installed under `generation` should still run
fn is_live(generation: Generation) -> bool {
    GENERATIONS.with(|g| g.is_current(generation))
}

pub fn window() -> EffectResult<Window> {
    web_sys::window().ok_or(EffectError::NoWindow)
}

pub fn document() -> EffectResult<Document> {
    window()?.document().ok_or(EffectError::NoDocument)
}

pub fn body() -> EffectResult<HtmlElement> {
    document()?.body().ok_or(EffectError::NoBody)
}

/// All elements in the document matching `selector`
pub fn query_all(selector: &str) -> EffectResult<Vec<Element>> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|e| EffectError::js("querySelectorAll", e))?;
    Ok(collect_elements(&list))
}

/// Descendants of `root` matching `selector`
pub fn query_within(root: &Element, selector: &str) -> EffectResult<Vec<Element>> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| EffectError::js("querySelectorAll", e))?;
    Ok(collect_elements(&list))
}

/// First element matching `selector`, if any
pub fn query_one(selector: &str) -> EffectResult<Option<Element>> {
    document()?
        .query_selector(selector)
        .map_err(|e| EffectError::js("querySelector", e))
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Inline style of an HTML or SVG element
fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

pub fn set_style(element: &Element, property: &str, value: &str) -> EffectResult<()> {
    let Some(style) = style_of(element) else {
        return Ok(());
    };
    style
        .set_property(property, value)
        .map_err(|e| EffectError::js("style.setProperty", e))
}

/// Set several inline properties; stops at the first failure
pub fn set_styles(element: &Element, properties: &[(&str, &str)]) -> EffectResult<()> {
    for (property, value) in properties {
        set_style(element, property, value)?;
    }
    Ok(())
}

pub fn clear_style(element: &Element, property: &str) -> EffectResult<()> {
    if let Some(style) = style_of(element) {
        style
            .remove_property(property)
            .map_err(|e| EffectError::js("style.removeProperty", e))?;
    }
    Ok(())
}

pub fn add_class(element: &Element, class: &str) -> EffectResult<()> {
    element
        .class_list()
        .add_1(class)
        .map_err(|e| EffectError::js("classList.add", e))
}

pub fn remove_class(element: &Element, class: &str) -> EffectResult<()> {
    element
        .class_list()
        .remove_1(class)
        .map_err(|e| EffectError::js("classList.remove", e))
}

/// Log a failure that happened inside an event handler
pub fn report(result: EffectResult<()>) {
    if let Err(e) = result {
        leptos::logging::warn!("effect update failed: {}", e);
    }
}

pub fn rect_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn pointer(event: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// High resolution timestamp in milliseconds
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Stable numeric key for `element`, assigned on first use
pub fn element_key(element: &Element) -> EffectResult<u32> {
    if let Some(key) = read_key(element) {
        return Ok(key);
    }
    let key = NEXT_KEY.with(|next| {
        let key = next.get();
        next.set(key.wrapping_add(1));
        key
    });
    element
        .set_attribute(KEY_ATTRIBUTE, &key.to_string())
        .map_err(|e| EffectError::js("setAttribute", e))?;
    Ok(key)
}

pub fn read_key(element: &Element) -> Option<u32> {
    element.get_attribute(KEY_ATTRIBUTE)?.parse().ok()
}

/// Attach an event listener until the next installation
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> EffectResult<()>
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    let installed = current_install();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        if is_live(installed) {
            handler(event.unchecked_into::<E>());
        }
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| EffectError::js("addEventListener", e))?;

    // Leak the closure to keep it alive
    closure.forget();
    Ok(())
}

/// Run `tick` on every animation frame until the next installation
pub fn animation_loop(mut tick: impl FnMut(f64) + 'static) -> EffectResult<()> {
    let window = window()?;
    let installed = current_install();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();

    let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        if !is_live(installed) {
            // Stop rescheduling; dropping the slot breaks the self reference
            next_frame.borrow_mut().take();
            return;
        }
        tick(timestamp);

        // Request next frame
        if let Some(window) = web_sys::window() {
            if let Some(closure) = next_frame.borrow().as_ref() {
                let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            }
        }
    });

    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| EffectError::js("requestAnimationFrame", e))?;

    // The closure owns a handle to its own slot, so the loop keeps itself alive
    *frame.borrow_mut() = Some(closure);
    Ok(())
}

/// Call `handler(index, element)` each time one of `elements` enters the viewport
pub fn on_enter_view<F>(elements: Vec<Element>, mut handler: F) -> EffectResult<()>
where
    F: FnMut(usize, &Element) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let watched = elements.clone();
    observe(&elements, &IntersectionObserverInit::new(), move |entry| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        if let Some(index) = watched.iter().position(|el| *el == target) {
            handler(index, &target);
        }
    })
}

/// Observe `elements` with one `IntersectionObserver`
pub fn observe<F>(
    elements: &[Element],
    options: &IntersectionObserverInit,
    mut on_entry: F,
) -> EffectResult<IntersectionObserver>
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            on_entry(entry.unchecked_ref::<IntersectionObserverEntry>());
        }
    });

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
        .map_err(|e| EffectError::js("IntersectionObserver", e))?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}

/// Run a Web Animations keyframe animation on `element`
pub fn animate<K: Serialize>(
    element: &Element,
    keyframes: &[K],
    duration_ms: f64,
) -> EffectResult<web_sys::Animation> {
    let frames = serde_wasm_bindgen::to_value(keyframes).map_err(|e| EffectError::Js {
        context: "keyframes",
        message: e.to_string(),
    })?;
    element
        .animate_with_f64(Some(frames.unchecked_ref::<js_sys::Object>()), duration_ms)
        .map_err(|e| EffectError::js("Element.animate", e))
}

/// Timer-backed [`Scheduler`]; tasks are never cancelled
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport
pub fn scroll_to_id(id: &str) -> EffectResult<()> {
    if let Some(section) = document()?.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

/// Run `task` after `delay_ms` without keeping a handle
pub fn after(delay_ms: u32, task: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(delay_ms, task).forget();
}
