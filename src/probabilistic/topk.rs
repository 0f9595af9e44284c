// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::TopKConfig;
use crate::hash::SipRouter;
use crate::probabilistic::count_min_sketch::{CountMinSketch, CountMinSketchState};
use crate::traits::{Mergeable, Sketch, SketchError, Snapshot};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Flat state of a [`TopK`]; `entries` are in [`TopK::top`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopKState<K> {
    pub capacity: usize,
    pub sketch: CountMinSketchState,
    pub entries: Vec<(K, u64)>,
}

/// Tracked key with its current estimate.
#[derive(Debug, Clone)]
struct HeapItem<K> {
    key: K,
    frequency: u64,
    /// Logical time of the key's last push; breaks ties between equal estimates.
    stamp: u64,
    /// Counter cells of `key`, cached so collisions can be detected without rehashing.
    cells: Vec<usize>,
}

impl<K> HeapItem<K> {
    /// Heap order: lowest frequency first, then least recently updated.
    fn rank(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.stamp.cmp(&other.stamp))
    }
}

/// TopK - Heavy Hitter Tracking
///
/// Tracks the K most frequent items in a stream using a Count-Min Sketch for frequency estimation
/// and an indexed Min-Heap to maintain the top-K list.
///
/// # Key Properties
///
/// - **Memory Efficiency**: Uses a fixed-size sketch plus a heap of at most K entries.
/// - **Approximate**: Frequencies are estimates (Count-Min Sketch guarantees no underestimation).
/// - **Consistent**: Every tracked frequency equals the sketch's current estimate for that key.
/// - **Ordering**: [`top`](TopK::top) sorts by frequency descending; equal frequencies list the
///   most recently pushed key first.
///
/// # Example
///
/// ```
/// use stream_sketches::TopK;
///
/// let mut topk = TopK::new(3, 0.99, 0.002).unwrap();
/// topk.push("apple", 10);
/// topk.push("banana", 20);
/// topk.push("cherry", 5);
/// topk.push("date", 15);
///
/// let top = topk.top();
/// assert_eq!(top.len(), 3);
/// assert_eq!(top[0], ("banana", 20));
/// assert_eq!(top[1], ("date", 15));
/// assert_eq!(top[2], ("apple", 10));
/// ```
#[derive(Debug, Clone)]
pub struct TopK<K, S = SipRouter> {
    capacity: usize,
    sketch: CountMinSketch<S>,
    heap: Vec<HeapItem<K>>,
    positions: HashMap<K, usize>,
    clock: u64,
}

impl<K: Hash + Eq + Clone> TopK<K> {
    pub fn new(capacity: usize, confidence: f64, error_rate: f64) -> Result<Self, SketchError> {
        Self::with_config(TopKConfig {
            capacity,
            confidence,
            error_rate,
        })
    }

    pub fn with_config(config: TopKConfig) -> Result<Self, SketchError> {
        Self::with_hasher(config, SipRouter::new())
    }
}

impl<K: Hash + Eq + Clone, S: BuildHasher + Clone> TopK<K, S> {
    pub fn with_hasher(config: TopKConfig, hasher: S) -> Result<Self, SketchError> {
        config.validate()?;
        let sketch = CountMinSketch::with_hasher(config.sketch(), hasher)?;
        tracing::debug!(capacity = config.capacity, "creating TopK");
        Ok(Self {
            capacity: config.capacity,
            sketch,
            heap: Vec::new(),
            positions: HashMap::new(),
            clock: 0,
        })
    }

    /// Adds `count` occurrences of `key` and updates the tracked set.
    pub fn push(&mut self, key: K, count: u64) {
        self.sketch.push(&key, count);
        self.clock += 1;

        let cells = self.sketch.cells(&key);
        self.refresh_colliding(&key, &cells);
        let frequency = self.sketch.get_cells(&cells);

        if let Some(&pos) = self.positions.get(&key) {
            let item = &mut self.heap[pos];
            item.frequency = frequency;
            item.stamp = self.clock;
            self.sift_down(pos);
        } else if self.heap.len() < self.capacity {
            self.heap.push(HeapItem {
                key: key.clone(),
                frequency,
                stamp: self.clock,
                cells,
            });
            let pos = self.heap.len() - 1;
            self.positions.insert(key, pos);
            self.sift_up(pos);
        } else if frequency > self.heap[0].frequency {
            let evicted = std::mem::replace(
                &mut self.heap[0],
                HeapItem {
                    key: key.clone(),
                    frequency,
                    stamp: self.clock,
                    cells,
                },
            );
            self.positions.remove(&evicted.key);
            self.positions.insert(key, 0);
            self.sift_down(0);
        }
    }

    /// Tracked keys with their estimates, highest first.
    pub fn top(&self) -> Vec<(K, u64)> {
        let mut items: Vec<&HeapItem<K>> = self.heap.iter().collect();
        items.sort_by(|a, b| b.rank(a));
        items
            .into_iter()
            .map(|item| (item.key.clone(), item.frequency))
            .collect()
    }

    /// Sketch estimate for any key, tracked or not.
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.sketch.get(key)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty() && self.sketch.is_empty()
    }

    pub fn clear(&mut self) {
        self.sketch.clear();
        self.heap.clear();
        self.positions.clear();
        self.clock = 0;
    }

    pub fn sketch(&self) -> &CountMinSketch<S> {
        &self.sketch
    }

    /// Merges another tracker: the sketches are summed, then the union of both
    /// tracked sets is re-estimated and the best `capacity` keys are kept.
    pub fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.capacity != other.capacity {
            return Err(SketchError::incompatible(
                format!("capacity {}", self.capacity),
                format!("capacity {}", other.capacity),
            ));
        }
        self.sketch.union(&other.sketch)?;
        tracing::debug!(
            tracked = self.heap.len(),
            incoming = other.heap.len(),
            "merging TopK"
        );

        let mut candidates = std::mem::take(&mut self.heap);
        for item in &other.heap {
            match self.positions.get(&item.key) {
                Some(&pos) => candidates[pos].stamp = candidates[pos].stamp.max(item.stamp),
                None => candidates.push(HeapItem {
                    key: item.key.clone(),
                    frequency: 0,
                    stamp: item.stamp,
                    cells: self.sketch.cells(&item.key),
                }),
            }
        }
        for item in &mut candidates {
            item.frequency = self.sketch.get_cells(&item.cells);
        }
        candidates.sort_by(|a, b| b.rank(a));
        candidates.truncate(self.capacity);

        self.clock = self.clock.max(other.clock);
        self.heap = candidates;
        self.rebuild();
        Ok(())
    }

    /// Re-estimates tracked keys sharing a counter cell with `key`.
    ///
    /// Estimates only grow, so a changed entry can only move down the heap.
    fn refresh_colliding(&mut self, key: &K, cells: &[usize]) {
        let mut changed = false;
        for item in &mut self.heap {
            if item.key == *key || !item.cells.iter().zip(cells).any(|(a, b)| a == b) {
                continue;
            }
            let frequency = self.sketch.get_cells(&item.cells);
            if frequency != item.frequency {
                item.frequency = frequency;
                changed = true;
            }
        }
        if changed {
            self.heapify();
        }
    }

    fn rebuild(&mut self) {
        self.positions.clear();
        self.heapify();
        for (pos, item) in self.heap.iter().enumerate() {
            self.positions.insert(item.key.clone(), pos);
        }
    }

    fn heapify(&mut self) {
        for pos in (0..self.heap.len() / 2).rev() {
            self.sift_down(pos);
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].rank(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.heap[left].rank(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].rank(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        if let Some(slot) = self.positions.get_mut(&self.heap[a].key) {
            *slot = a;
        }
        if let Some(slot) = self.positions.get_mut(&self.heap[b].key) {
            *slot = b;
        }
    }
}

impl<K: Hash + Eq + Clone, S: BuildHasher + Clone> Sketch for TopK<K, S> {
    fn clear(&mut self) {
        TopK::clear(self)
    }

    fn is_empty(&self) -> bool {
        TopK::is_empty(self)
    }

    fn validate(&self) -> Result<(), SketchError> {
        if self.capacity == 0 {
            return Err(SketchError::InvalidState("K must be positive".into()));
        }
        if self.heap.len() > self.capacity || self.positions.len() != self.heap.len() {
            return Err(SketchError::InvalidState(format!(
                "{} tracked keys for capacity {}",
                self.heap.len(),
                self.capacity
            )));
        }
        for item in &self.heap {
            if item.frequency != self.sketch.get_cells(&item.cells) {
                return Err(SketchError::InvalidState(
                    "tracked frequency differs from the sketch estimate".into(),
                ));
            }
        }
        self.sketch.validate()
    }
}

impl<K: Hash + Eq + Clone, S: BuildHasher + Clone> Mergeable for TopK<K, S> {
    fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        TopK::union(self, other)
    }
}

impl<K, S> Snapshot for TopK<K, S>
where
    K: Hash + Eq + Clone + Serialize + for<'de> Deserialize<'de>,
    S: BuildHasher + Clone + Default,
{
    type State = TopKState<K>;

    fn snapshot(&self) -> TopKState<K> {
        TopKState {
            capacity: self.capacity,
            sketch: self.sketch.snapshot(),
            entries: self.top(),
        }
    }

    fn from_state(state: TopKState<K>) -> Result<Self, SketchError> {
        if state.capacity == 0 || state.entries.len() > state.capacity {
            return Err(SketchError::invalid_state(format!(
                "{} entries for capacity {}",
                state.entries.len(),
                state.capacity
            )));
        }
        let sketch = CountMinSketch::from_state_with_hasher(state.sketch, S::default())?;
        let total = state.entries.len() as u64;
        let mut heap = Vec::with_capacity(state.entries.len());
        for (i, (key, frequency)) in state.entries.into_iter().enumerate() {
            let cells = sketch.cells(&key);
            heap.push(HeapItem {
                key,
                frequency,
                // Entries arrive in `top` order, so earlier ones are the more recent.
                stamp: total - i as u64,
                cells,
            });
        }
        let mut topk = Self {
            capacity: state.capacity,
            sketch,
            heap,
            positions: HashMap::new(),
            clock: total,
        };
        topk.rebuild();
        if topk.positions.len() != topk.heap.len() {
            return Err(SketchError::invalid_state("duplicate keys in TopK entries"));
        }
        topk.validate()?;
        Ok(topk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<String> {
        (0..128).map(|x| format!("{:02x}", x)).collect()
    }

    #[test]
    fn test_keeps_highest_weights() {
        let mut topk = TopK::new(5, 0.99, 0.002).unwrap();
        for (i, key) in keys().into_iter().enumerate() {
            topk.push(key, i as u64 + 1);
        }
        let expected: Vec<(String, u64)> = vec![
            ("7f".into(), 128),
            ("7e".into(), 127),
            ("7d".into(), 126),
            ("7c".into(), 125),
            ("7b".into(), 124),
        ];
        assert_eq!(topk.top(), expected);
        assert!(topk.validate().is_ok());
    }

    #[test]
    fn test_ties_prefer_most_recent() {
        let mut topk = TopK::new(3, 0.99, 0.002).unwrap();
        topk.push("a", 5);
        topk.push("b", 5);
        topk.push("c", 5);
        assert_eq!(topk.top(), vec![("c", 5), ("b", 5), ("a", 5)]);

        // Full heap, equal estimate: not strictly greater, so "d" is discarded.
        topk.push("d", 5);
        assert_eq!(topk.len(), 3);
        assert!(topk.top().iter().all(|(key, _)| *key != "d"));

        // A strictly larger estimate evicts the least recently updated minimum.
        topk.push("e", 6);
        assert_eq!(topk.top(), vec![("e", 6), ("c", 5), ("b", 5)]);
    }

    #[test]
    fn test_collisions_refresh_tracked_estimates() {
        // A single row of four counters: tracked keys keep colliding with new ones.
        let config = TopKConfig {
            capacity: 2,
            confidence: 0.5,
            error_rate: 0.9,
        };
        let mut topk = TopK::with_config(config).unwrap();
        assert_eq!(topk.sketch().width(), 4);
        for i in 0..50u32 {
            topk.push(i, 1);
        }
        assert!(topk.validate().is_ok());
        for (key, frequency) in topk.top() {
            assert_eq!(frequency, topk.get(&key));
        }
    }

    #[test]
    fn test_capacity_and_clear() {
        let mut topk = TopK::new(48, 0.99, 0.002).unwrap();
        assert_eq!(topk.capacity(), 48);
        topk.push("x", 1);
        topk.clear();
        assert!(topk.top().is_empty());
        assert!(topk.is_empty());
        assert_eq!(topk.capacity(), 48);
    }
}
