//! Effect installation generations
//!
//! Browser listeners are leaked for the lifetime of the page, so a second
//! mount of the effects host cannot remove the first mount's handlers.
//! Instead every installation begins a new [`Generation`]; handlers capture
//! the generation they were installed under and go quiet once it is no
//! longer current.

use std::cell::Cell;

/// Identifies one installation of the page effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u32);

/// Counter of effect installations
#[derive(Debug, Default)]
pub struct Generations {
    current: Cell<u32>,
}

impl Generations {
    pub const fn new() -> Self {
        Self { current: Cell::new(0) }
    }

    /// Start a new installation, retiring every earlier one
    pub fn begin(&self) -> Generation {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Generation(next)
    }

    pub fn current(&self) -> Generation {
        Generation(self.current.get())
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.get() == generation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_begin_retires_earlier_generations() {
        let generations = Generations::new();
        let first = generations.begin();
        assert!(generations.is_current(first));

        let second = generations.begin();
        assert!(!generations.is_current(first));
        assert!(generations.is_current(second));
        assert_eq!(generations.current(), second);
    }

    #[test]
    fn test_remount_keeps_one_live_handler() {
        let generations = Rc::new(Generations::new());
        let fired = Rc::new(Cell::new(0));
        let mut handlers: Vec<Box<dyn Fn()>> = Vec::new();

        // Two mounts each attach a keydown handler that is never removed
        for _ in 0..2 {
            let installed = generations.begin();
            let generations = generations.clone();
            let fired = fired.clone();
            handlers.push(Box::new(move || {
                if generations.is_current(installed) {
                    fired.set(fired.get() + 1);
                }
            }));
        }

        for handler in &handlers {
            handler();
        }
        assert_eq!(fired.get(), 1);
    }
}
