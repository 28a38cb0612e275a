//! Visibility trigger dispatcher
//!
//! Tracks which page elements have scrolled into view and decides which
//! presentation class each one should carry. The browser's intersection
//! notifications are fed into [`VisibilityDispatcher::on_intersect`]; the
//! resulting [`Reveal`] is applied to the page with [`apply_reveal`].
//!
//! # State machine
//!
//! ```text
//! Hidden -> Entering -> PartiallyVisible -> FullyVisible
//! ```
//!
//! Within one intersection session the state only moves to the right. A
//! non-intersecting notification leaves the state as it is but closes the
//! session, so the next entry into view starts again from `Hidden`. An
//! intersecting notification with a ratio of 0 resets the state to `Hidden`
//! straight away.
//!
//! # Example
//!
//! ```
//! use magic_ui::core::visibility::{VisibilityDispatcher, VisibilityState};
//!
//! let mut dispatcher = VisibilityDispatcher::new();
//! dispatcher.register(["hero"], [0.1, 0.3, 0.6]);
//!
//! let reveal = dispatcher.on_intersect(&"hero", 0.7, true).unwrap();
//! assert_eq!(reveal.state, VisibilityState::FullyVisible);
//! assert_eq!(reveal.class_name(), "fully-visible");
//!
//! // Nothing changes while the element is off screen
//! assert!(dispatcher.on_intersect(&"hero", 0.0, false).is_none());
//! assert_eq!(dispatcher.state(&"hero"), Some(VisibilityState::FullyVisible));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::stagger::{DEFAULT_CHILD_STAGGER_MS, StaggerPlan};

/// Ratio above which an element counts as fully visible
pub const FULLY_VISIBLE_RATIO: f64 = 0.6;

/// Ratio above which an element counts as partially visible
pub const PARTIALLY_VISIBLE_RATIO: f64 = 0.3;

/// Intersection thresholds the observer reports at
pub const DEFAULT_THRESHOLDS: [f64; 3] = [0.1, 0.3, 0.6];

/// Shrinks the viewport bottom so reveals start slightly after entry
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Step for the `animation-delay` written on each revealed child (ms)
pub const DEFAULT_CHILD_ANIMATION_STEP_MS: u32 = 100;

/// Presentation state of a watched element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum VisibilityState {
    #[default]
    Hidden,
    Entering,
    PartiallyVisible,
    FullyVisible,
}

impl VisibilityState {
    /// All classes the dispatcher may put on an element
    pub const PRESENTATION_CLASSES: [&'static str; 3] =
        ["entering-view", "partially-visible", "fully-visible"];

    /// Classify an intersection ratio into one of the three visible states
    ///
    /// Lower bounds are exclusive: `0.6` is still partially visible and
    /// `0.3` is still entering. NaN and negative ratios count as entering.
    pub fn classify(ratio: f64) -> Self {
        if ratio > FULLY_VISIBLE_RATIO {
            VisibilityState::FullyVisible
        } else if ratio > PARTIALLY_VISIBLE_RATIO {
            VisibilityState::PartiallyVisible
        } else {
            VisibilityState::Entering
        }
    }

    /// CSS class for this state, `None` for `Hidden`
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            VisibilityState::Hidden => None,
            VisibilityState::Entering => Some("entering-view"),
            VisibilityState::PartiallyVisible => Some("partially-visible"),
            VisibilityState::FullyVisible => Some("fully-visible"),
        }
    }
}

/// Normalized observer thresholds: finite, clamped to `[0, 1]`, sorted, unique
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds(Vec<f64>);

impl Thresholds {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .filter(|v| !v.is_nan())
            .map(|v| v.clamp(0.0, 1.0))
            .collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLDS)
    }
}

/// Outcome of [`VisibilityDispatcher::register`]
#[derive(Debug, Clone, PartialEq)]
pub struct Registration<K> {
    /// Elements that were not watched before this call, in input order
    pub added: Vec<K>,
    /// Thresholds the caller should observe the added elements with
    pub thresholds: Thresholds,
}

impl<K> Registration<K> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }
}

/// A presentation transition decided by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// The state the element moved into (never `Hidden`)
    pub state: VisibilityState,
    /// Delay step between eligible children (ms)
    pub child_stagger_ms: u32,
    /// `animation-delay` step written on each child (ms)
    pub child_animation_step_ms: u32,
}

impl Reveal {
    pub fn class_name(&self) -> &'static str {
        self.state.class_name().unwrap_or("entering-view")
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct WatchedElement {
    state: VisibilityState,
    in_session: bool,
}

/// Tracks the visibility state of every registered element
///
/// Generic over the element key so the browser binding can key by a DOM
/// attribute while tests key by plain values.
#[derive(Debug)]
pub struct VisibilityDispatcher<K> {
    watched: HashMap<K, WatchedElement>,
    child_stagger_ms: u32,
    child_animation_step_ms: u32,
}

impl<K: Eq + Hash + Clone> VisibilityDispatcher<K> {
    /// Create a dispatcher with the default 50ms child cascade
    pub fn new() -> Self {
        Self::with_stagger(DEFAULT_CHILD_STAGGER_MS, DEFAULT_CHILD_ANIMATION_STEP_MS)
    }

    /// Create a dispatcher with custom cascade steps
    pub fn with_stagger(child_stagger_ms: u32, child_animation_step_ms: u32) -> Self {
        Self {
            watched: HashMap::new(),
            child_stagger_ms,
            child_animation_step_ms,
        }
    }

    /// Start watching `elements`
    ///
    /// Already watched elements (and duplicates within `elements`) are
    /// skipped, so only [`Registration::added`] should be handed to the
    /// observer.
    pub fn register<I>(&mut self, elements: I, thresholds: impl IntoIterator<Item = f64>) -> Registration<K>
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = Vec::new();
        for key in elements {
            if self.watched.contains_key(&key) {
                continue;
            }
            self.watched.insert(key.clone(), WatchedElement::default());
            added.push(key);
        }

        Registration {
            added,
            thresholds: Thresholds::new(thresholds),
        }
    }

    /// Handle an intersection notification
    ///
    /// Returns the transition to apply, or `None` when nothing changes: the
    /// element is not watched, it is not intersecting, its ratio dropped to
    /// 0, or the ratio does not move it past its current state.
    pub fn on_intersect(&mut self, key: &K, ratio: f64, is_intersecting: bool) -> Option<Reveal> {
        let watched = self.watched.get_mut(key)?;

        if !is_intersecting {
            watched.in_session = false;
            return None;
        }

        // Edge contact with nothing visible
        if ratio <= 0.0 {
            watched.in_session = true;
            watched.state = VisibilityState::Hidden;
            return None;
        }

        if !watched.in_session {
            watched.in_session = true;
            watched.state = VisibilityState::Hidden;
        }

        let target = VisibilityState::classify(ratio);
        if target <= watched.state {
            return None;
        }

        watched.state = target;
        Some(Reveal {
            state: target,
            child_stagger_ms: self.child_stagger_ms,
            child_animation_step_ms: self.child_animation_step_ms,
        })
    }

    /// Current state of a watched element
    ///
    /// After the element leaves view this is the state it left with, until
    /// the next entry starts a new session.
    pub fn state(&self, key: &K) -> Option<VisibilityState> {
        self.watched.get(key).map(|w| w.state)
    }

    pub fn is_watched(&self, key: &K) -> bool {
        self.watched.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for VisibilityDispatcher<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// An element a [`Reveal`] can be applied to
pub trait RevealSurface {
    type Child: RevealChild + 'static;

    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Children that take part in the cascade, in document order
    fn eligible_children(&self) -> Vec<Self::Child>;
}

/// A child that starts its own animation when the cascade reaches it
pub trait RevealChild {
    fn start_animation(&self, animation_delay_ms: u32);
}

/// Fire-and-forget deferred execution
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Apply a reveal: swap the presentation class, then queue the cascade
///
/// The class change happens synchronously before any child task is
/// scheduled. Returns the number of children scheduled.
pub fn apply_reveal<S, D>(reveal: &Reveal, surface: &S, scheduler: &D) -> usize
where
    S: RevealSurface,
    D: Scheduler + ?Sized,
{
    let class = reveal.class_name();
    for other in VisibilityState::PRESENTATION_CLASSES {
        if other != class {
            surface.remove_class(other);
        }
    }
    surface.add_class(class);

    let children = surface.eligible_children();
    let cascade = StaggerPlan::new(children.len(), reveal.child_stagger_ms);
    let animation = StaggerPlan::new(children.len(), reveal.child_animation_step_ms);

    for (slot, child) in cascade.slots().zip(children) {
        let animation_delay = animation.delay_for(slot.index);
        scheduler.schedule(
            slot.delay_ms,
            Box::new(move || child.start_animation(animation_delay)),
        );
    }

    cascade.len()
}
