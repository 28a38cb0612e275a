#[cfg(test)]
mod tests {
    use crate::core::frame_rate::REDUCED_MOTION_CLASS;
    use crate::core::visibility::{DEFAULT_THRESHOLDS, apply_reveal};
    use crate::core::{
        EffectsConfig, FrameRateMonitor, MotionLevel, RevealChild, RevealSurface, Scheduler,
        VisibilityDispatcher, VisibilityState,
    };
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    /// Minimal stand-in for a DOM element: a class list plus child styles
    #[derive(Default)]
    struct Element {
        classes: RefCell<BTreeSet<String>>,
        children: Vec<Rc<Child>>,
        adds: RefCell<usize>,
    }

    #[derive(Default)]
    struct Child {
        animation_delay: RefCell<Option<u32>>,
        started_at: RefCell<Option<u32>>,
    }

    struct ChildHandle {
        child: Rc<Child>,
        clock: Rc<RefCell<u32>>,
    }

    struct Surface<'a> {
        element: &'a Element,
        clock: Rc<RefCell<u32>>,
    }

    impl RevealSurface for Surface<'_> {
        type Child = ChildHandle;

        fn add_class(&self, class: &str) {
            *self.element.adds.borrow_mut() += 1;
            self.element.classes.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.element.classes.borrow_mut().remove(class);
        }

        fn eligible_children(&self) -> Vec<ChildHandle> {
            self.element
                .children
                .iter()
                .map(|child| ChildHandle {
                    child: child.clone(),
                    clock: self.clock.clone(),
                })
                .collect()
        }
    }

    impl RevealChild for ChildHandle {
        fn start_animation(&self, animation_delay_ms: u32) {
            *self.child.animation_delay.borrow_mut() = Some(animation_delay_ms);
            *self.child.started_at.borrow_mut() = Some(*self.clock.borrow());
        }
    }

    /// Virtual-time timer queue
    #[derive(Default)]
    struct Timers {
        clock: Rc<RefCell<u32>>,
        pending: RefCell<Vec<(u32, usize, Box<dyn FnOnce()>)>>,
        seq: RefCell<usize>,
    }

    impl Timers {
        fn run_all(&self) {
            let mut pending = std::mem::take(&mut *self.pending.borrow_mut());
            pending.sort_by_key(|(at, seq, _)| (*at, *seq));
            for (at, _, task) in pending {
                *self.clock.borrow_mut() = at;
                task();
            }
        }
    }

    impl Scheduler for Timers {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            let at = *self.clock.borrow() + delay_ms;
            let mut seq = self.seq.borrow_mut();
            self.pending.borrow_mut().push((at, *seq, task));
            *seq += 1;
        }
    }

    fn presentation_classes(element: &Element) -> Vec<String> {
        element
            .classes
            .borrow()
            .iter()
            .filter(|c| VisibilityState::PRESENTATION_CLASSES.contains(&c.as_str()))
            .cloned()
            .collect()
    }

    #[test]
    fn test_section_reveal_cascades_children() {
        let element = Element {
            children: vec![Rc::default(), Rc::default(), Rc::default()],
            ..Default::default()
        };
        let timers = Timers::default();
        let surface = Surface {
            element: &element,
            clock: timers.clock.clone(),
        };

        let mut dispatcher = VisibilityDispatcher::new();
        dispatcher.register([1u32], DEFAULT_THRESHOLDS);

        let reveal = dispatcher.on_intersect(&1, 0.7, true).unwrap();
        apply_reveal(&reveal, &surface, &timers);

        assert_eq!(presentation_classes(&element), vec!["fully-visible".to_string()]);
        assert!(element.children.iter().all(|c| c.started_at.borrow().is_none()));

        timers.run_all();

        let started: Vec<Option<u32>> = element.children.iter().map(|c| *c.started_at.borrow()).collect();
        assert_eq!(started, vec![Some(0), Some(50), Some(100)]);

        let delays: Vec<Option<u32>> =
            element.children.iter().map(|c| *c.animation_delay.borrow()).collect();
        assert_eq!(delays, vec![Some(0), Some(100), Some(200)]);
    }

    #[test]
    fn test_scrolling_through_a_section() {
        let element = Element::default();
        let timers = Timers::default();
        let surface = Surface {
            element: &element,
            clock: timers.clock.clone(),
        };

        let mut dispatcher = VisibilityDispatcher::new();
        dispatcher.register(["features"], DEFAULT_THRESHOLDS);

        // Scroll in, peak, scroll partly back, leave, come back
        let notifications = [
            (0.0, false),
            (0.12, true),
            (0.35, true),
            (0.65, true),
            (0.4, true),
            (0.1, true),
            (0.0, false),
            (0.2, true),
        ];

        let mut transitions = Vec::new();
        for (ratio, intersecting) in notifications {
            if let Some(reveal) = dispatcher.on_intersect(&"features", ratio, intersecting) {
                apply_reveal(&reveal, &surface, &timers);
                transitions.push(reveal.state);
            }
            // Exactly one presentation class once anything was revealed
            if !transitions.is_empty() {
                assert_eq!(presentation_classes(&element).len(), 1);
            }
        }

        assert_eq!(
            transitions,
            vec![
                VisibilityState::Entering,
                VisibilityState::PartiallyVisible,
                VisibilityState::FullyVisible,
                VisibilityState::Entering,
            ]
        );
        assert_eq!(*element.adds.borrow(), transitions.len());
        assert_eq!(presentation_classes(&element), vec!["entering-view".to_string()]);
    }

    #[test]
    fn test_duplicate_registration_observes_once() {
        let mut dispatcher = VisibilityDispatcher::new();
        let mut observed = Vec::new();

        for _ in 0..2 {
            let registration = dispatcher.register(["gallery", "hero"], DEFAULT_THRESHOLDS);
            observed.extend(registration.added);
        }

        assert_eq!(observed, vec!["gallery", "hero"]);
    }

    #[test]
    fn test_frame_rate_toggles_reduced_motion_class() {
        fn apply(level: MotionLevel, body: &mut BTreeSet<&'static str>) {
            if level.is_reduced() {
                body.insert(REDUCED_MOTION_CLASS);
            } else {
                body.remove(REDUCED_MOTION_CLASS);
            }
        }

        let mut body: BTreeSet<&'static str> = BTreeSet::new();
        let mut monitor = FrameRateMonitor::new(0.0);

        for (window, fps) in [(0u32, 25u32), (1, 45)] {
            let start = f64::from(window) * 1000.0;
            let mut sample = None;
            for frame in 1..=fps {
                sample = monitor.record_frame(start + 1000.0 * f64::from(frame) / f64::from(fps));
            }
            let sample = sample.expect("window should close on its last frame");
            apply(sample.level, &mut body);

            if fps == 25 {
                assert!(body.contains(REDUCED_MOTION_CLASS));
            } else {
                assert!(!body.contains(REDUCED_MOTION_CLASS));
            }
        }
    }

    #[test]
    fn test_config_drives_dispatcher() {
        let config = EffectsConfig {
            child_stagger_ms: 80,
            child_animation_step_ms: 40,
            ..Default::default()
        };
        let mut dispatcher =
            VisibilityDispatcher::with_stagger(config.child_stagger_ms, config.child_animation_step_ms);
        let registration = dispatcher.register([7], config.reveal_thresholds.iter().copied());
        assert_eq!(registration.thresholds, config.thresholds());

        let reveal = dispatcher.on_intersect(&7, 0.31, true).unwrap();
        assert_eq!(reveal.child_stagger_ms, 80);
        assert_eq!(reveal.child_animation_step_ms, 40);
        assert_eq!(reveal.class_name(), "partially-visible");
    }
}
