//! Bounded LRU memo for per-station frames.
//!
//! An explicit map with a visible eviction policy rather than implicit
//! memoization: the embedding workload queries the same station grid over
//! and over, so entries are keyed by station index.

use std::collections::{HashMap, VecDeque};

use crate::frame::Frame;

/// Default capacity, sized to the common station working set.
pub const DEFAULT_CACHE_CAPACITY: usize = 500;

/// A bounded least-recently-used map from station index to frame.
#[derive(Debug, Clone)]
pub struct FrameCache {
    capacity: usize,
    entries: HashMap<usize, Frame>,
    // Recency order, least recent at the front.
    recency: VecDeque<usize>,
}

impl FrameCache {
    /// Create a cache holding at most `capacity` frames (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            recency: VecDeque::with_capacity(capacity),
        }
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a station index is cached, without touching recency.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Look up a frame, marking the entry as most recently used.
    pub fn get(&mut self, index: usize) -> Option<Frame> {
        let frame = self.entries.get(&index).copied()?;
        self.touch(index);
        Some(frame)
    }

    /// Insert a frame if the index is absent, evicting the least recently
    /// used entry when at capacity. An existing entry is left as is
    /// (frames for an index never change during an axis' lifetime).
    pub fn insert_if_absent(&mut self, index: usize, frame: Frame) {
        if self.entries.contains_key(&index) {
            self.touch(index);
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.recency.pop_front() {
                self.entries.remove(&evicted);
            }
        }
        self.entries.insert(index, frame);
        self.recency.push_back(index);
    }

    fn touch(&mut self, index: usize) {
        if let Some(pos) = self.recency.iter().position(|&i| i == index) {
            self.recency.remove(pos);
            self.recency.push_back(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    fn frame(x: f64) -> Frame {
        Frame::new(
            Point3::new(x, 0.0, 0.0),
            Vector3::x(),
            Vector3::y(),
            Vector3::z(),
        )
    }

    #[test]
    fn insert_and_get() {
        let mut cache = FrameCache::new(4);
        cache.insert_if_absent(0, frame(0.0));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(0).is_some());
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = FrameCache::new(2);
        cache.insert_if_absent(0, frame(0.0));
        cache.insert_if_absent(1, frame(1.0));

        // Touch 0 so 1 becomes the eviction candidate.
        assert!(cache.get(0).is_some());
        cache.insert_if_absent(2, frame(2.0));

        assert!(cache.contains(0));
        assert!(!cache.contains(1));
        assert!(cache.contains(2));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn insert_if_absent_keeps_existing() {
        let mut cache = FrameCache::new(2);
        cache.insert_if_absent(0, frame(0.0));
        cache.insert_if_absent(0, frame(99.0));

        let cached = cache.get(0).expect("entry");
        assert_eq!(cached.position.x, 0.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let mut cache = FrameCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.insert_if_absent(0, frame(0.0));
        cache.insert_if_absent(1, frame(1.0));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(1));
    }
}
