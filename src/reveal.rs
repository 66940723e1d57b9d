//! One-shot scroll reveal tracking.
//!
//! Each observed key is revealed at most once. After the transition the key is
//! dropped from the pending set, so later samples for it are ignored and the
//! binding can stop observing the element.

use std::collections::HashSet;
use std::hash::Hash;

/// One intersection report for an element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
    /// Largest ratio the element can reach: viewport height over element
    /// height, capped at 1.0. Use 1.0 when the viewport size is unknown.
    pub max_ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
            max_ratio: 1.0,
        }
    }

    /// Sample for an element of `target_height` in a viewport of `root_height`
    pub fn measured(
        is_intersecting: bool,
        ratio: f64,
        target_height: f64,
        root_height: f64,
    ) -> Self {
        let max_ratio = if target_height > root_height && target_height > 0.0 {
            root_height / target_height
        } else {
            1.0
        };
        Self {
            is_intersecting,
            ratio,
            max_ratio,
        }
    }
}

/// Returned once per key when it becomes visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revealed;

#[derive(Debug)]
pub struct RevealTracker<K> {
    threshold: f64,
    pending: HashSet<K>,
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            pending: HashSet::new(),
        }
    }

    pub fn observe(&mut self, keys: impl IntoIterator<Item = K>) {
        self.pending.extend(keys);
    }

    /// An element too tall to ever reach the threshold reveals as soon as it
    /// intersects at all.
    pub fn on_intersection(&mut self, key: &K, sample: IntersectionSample) -> Option<Revealed> {
        if !sample.is_intersecting {
            return None;
        }
        if sample.ratio < self.threshold && sample.max_ratio >= self.threshold {
            return None;
        }
        self.pending.remove(key).then_some(Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(ratio: f64) -> IntersectionSample {
        IntersectionSample::new(true, ratio)
    }

    #[test]
    fn test_reveals_exactly_once() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe([1, 2]);

        assert_eq!(tracker.on_intersection(&1, visible(0.25)), Some(Revealed));
        assert_eq!(tracker.on_intersection(&1, visible(0.9)), None);
        assert_eq!(tracker.on_intersection(&2, visible(0.9)), Some(Revealed));
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe(["a"]);
        assert_eq!(tracker.on_intersection(&"a", visible(0.05)), None);
        assert_eq!(
            tracker.on_intersection(&"a", IntersectionSample::new(false, 0.0)),
            None
        );
        assert_eq!(tracker.on_intersection(&"a", visible(0.1)), Some(Revealed));
    }

    #[test]
    fn test_unobserved_keys_are_ignored() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new(0.1);
        tracker.observe([]);
        assert_eq!(tracker.on_intersection(&7, visible(1.0)), None);
    }

    #[test]
    fn test_tall_element_reveals_on_first_intersection() {
        // 20 viewports tall: the visible ratio tops out at 0.05
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe([0]);

        let entering = IntersectionSample::measured(true, 0.001, 16_000.0, 800.0);
        assert_eq!(entering.max_ratio, 0.05);
        assert_eq!(tracker.on_intersection(&0, entering), Some(Revealed));
        assert_eq!(tracker.on_intersection(&0, entering), None);
    }

    #[test]
    fn test_tall_element_still_needs_to_intersect() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe([0]);
        let offscreen = IntersectionSample::measured(false, 0.0, 16_000.0, 800.0);
        assert_eq!(tracker.on_intersection(&0, offscreen), None);
    }

    #[test]
    fn test_threshold_still_applies_when_reachable() {
        // Two viewports tall can reach 0.5, so 0.1 is enforced
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe([0]);
        let sample = IntersectionSample::measured(true, 0.05, 1_600.0, 800.0);
        assert_eq!(sample.max_ratio, 0.5);
        assert_eq!(tracker.on_intersection(&0, sample), None);
        let sample = IntersectionSample::measured(true, 0.2, 1_600.0, 800.0);
        assert_eq!(tracker.on_intersection(&0, sample), Some(Revealed));
    }
}
