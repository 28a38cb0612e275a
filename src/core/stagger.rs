//! Staggered scheduling for cascading reveals
//!
//! Every cascade on the page (children of a revealed section, card content,
//! gallery items, progress bars, the global pulse burst) delays item `i` by
//! `i * step`. [`StaggerPlan`] produces those slots in index order.

/// Default step between children of a revealed element (ms)
pub const DEFAULT_CHILD_STAGGER_MS: u32 = 50;

/// Step between gallery items fading in (ms)
pub const GALLERY_STAGGER_MS: u32 = 100;

/// Step between linear progress bars filling (ms)
pub const PROGRESS_BAR_STAGGER_MS: u32 = 200;

/// One scheduled item in a cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSlot {
    /// Position of the item in document order
    pub index: usize,
    /// Delay before the item is updated, in milliseconds
    pub delay_ms: u32,
}

/// Delay plan for `count` items spaced `step_ms` apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerPlan {
    count: usize,
    step_ms: u32,
}

impl StaggerPlan {
    pub fn new(count: usize, step_ms: u32) -> Self {
        Self { count, step_ms }
    }

    /// Delay for the item at `index`, saturating instead of overflowing
    pub fn delay_for(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step_ms)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate the slots in index order
    pub fn slots(&self) -> impl Iterator<Item = StaggerSlot> + '_ {
        (0..self.count).map(move |index| StaggerSlot {
            index,
            delay_ms: self.delay_for(index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_in_index_order() {
        let plan = StaggerPlan::new(4, DEFAULT_CHILD_STAGGER_MS);
        let delays: Vec<u32> = plan.slots().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 50, 100, 150]);

        let indices: Vec<usize> = plan.slots().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_plan() {
        let plan = StaggerPlan::new(0, 50);
        assert!(plan.is_empty());
        assert_eq!(plan.slots().count(), 0);
    }

    #[test]
    fn test_last_slot_delay() {
        let last = StaggerPlan::new(3, PROGRESS_BAR_STAGGER_MS).slots().last();
        assert_eq!(last, Some(StaggerSlot { index: 2, delay_ms: 400 }));
        assert_eq!(StaggerPlan::new(1, GALLERY_STAGGER_MS).delay_for(0), 0);
    }

    #[test]
    fn test_delay_saturates() {
        let plan = StaggerPlan::new(2, u32::MAX);
        assert_eq!(plan.delay_for(1), u32::MAX);
        assert_eq!(plan.delay_for(5), u32::MAX);
    }
}
