// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::CountMinSketchConfig;
use crate::hash::{mix64, HashRouter, SipRouter};
use crate::traits::{Mergeable, Sketch, SketchError, Snapshot};
use serde::{Deserialize, Serialize};
use std::hash::{BuildHasher, Hash};

/// Flat state of a [`CountMinSketch`]: the counter matrix in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMinSketchState {
    pub width: usize,
    pub depth: usize,
    pub counters: Vec<u64>,
}

/// Count-Min Sketch - Frequency Estimation
///
/// A probabilistic data structure for estimating the frequency of events in a stream of data.
/// It uses a matrix of counters and one independently seeded hash per row to map events to counters.
///
/// # Key Properties
///
/// - **Fixed Memory**: Uses a fixed size matrix (`width` × `depth` × 8 bytes), regardless of the number of unique items.
/// - **Conservative**: Frequencies are never underestimated, but may be overestimated due to collisions.
/// - **Mergeable**: Sketches with identical dimensions merge by summing the corresponding counters.
///
/// # Algebraic Properties
///
/// - **Commutativity**: Yes (Matrix addition is commutative).
/// - **Associativity**: Yes (Matrix addition is associative).
/// - **Idempotence**: **NO**. Merging the same sketch twice doubles the counts.
///
/// # Example
///
/// ```
/// use stream_sketches::CountMinSketch;
///
/// let mut cms = CountMinSketch::new(0.99, 0.002).unwrap();
/// cms.push("apple", 1);
/// cms.push("apple", 1);
/// cms.push("banana", 1);
///
/// assert!(cms.get("apple") >= 2);
/// assert!(cms.get("banana") >= 1);
/// assert_eq!(cms.get("cherry"), 0);
/// ```
#[derive(Debug, Clone)]
pub struct CountMinSketch<S = SipRouter> {
    width: usize,
    depth: usize,
    /// Row-major `depth × width` counters.
    counters: Vec<u64>,
    seeds: Vec<u64>,
    total: u64,
    hasher: S,
}

impl CountMinSketch {
    /// Creates a sketch whose estimates exceed the true count by at most
    /// `error_rate × total` with probability `confidence`.
    pub fn new(confidence: f64, error_rate: f64) -> Result<Self, SketchError> {
        Self::with_config(CountMinSketchConfig {
            confidence,
            error_rate,
        })
    }

    pub fn with_config(config: CountMinSketchConfig) -> Result<Self, SketchError> {
        Self::with_hasher(config, SipRouter::new())
    }

    /// Creates a sketch with explicit dimensions.
    pub fn with_dimensions(width: usize, depth: usize) -> Result<Self, SketchError> {
        Self::with_dimensions_and_hasher(width, depth, SipRouter::new())
    }
}

impl<S: BuildHasher + Clone> CountMinSketch<S> {
    pub fn with_hasher(config: CountMinSketchConfig, hasher: S) -> Result<Self, SketchError> {
        config.validate()?;
        Self::with_dimensions_and_hasher(config.width(), config.depth(), hasher)
    }

    pub fn with_dimensions_and_hasher(
        width: usize,
        depth: usize,
        hasher: S,
    ) -> Result<Self, SketchError> {
        let cells = matrix_cells(width, depth).map_err(SketchError::InvalidConfiguration)?;
        tracing::debug!(width, depth, "creating CountMinSketch");
        Ok(Self::from_parts(width, depth, vec![0; cells], hasher))
    }

    fn from_parts(width: usize, depth: usize, counters: Vec<u64>, hasher: S) -> Self {
        Self {
            width,
            depth,
            counters,
            seeds: (0..depth as u64).map(mix64).collect(),
            total: 0,
            hasher,
        }
    }

    /// Adds `count` occurrences of `item`.
    pub fn push<T: Hash + ?Sized>(&mut self, item: &T, count: u64) {
        for row in 0..self.depth {
            let cell = self.cell(row, item);
            self.counters[cell] = self.counters[cell].saturating_add(count);
        }
        self.total = self.total.saturating_add(count);
    }

    /// Estimated count of `item`: the minimum over its cells, never below the true count.
    pub fn get<T: Hash + ?Sized>(&self, item: &T) -> u64 {
        (0..self.depth)
            .map(|row| self.counters[self.cell(row, item)])
            .min()
            .unwrap_or(0)
    }

    /// Flat counter indices `item` maps to, one per row.
    pub fn cells<T: Hash + ?Sized>(&self, item: &T) -> Vec<usize> {
        (0..self.depth).map(|row| self.cell(row, item)).collect()
    }

    /// Minimum over precomputed cells, as returned by [`cells`](Self::cells).
    pub fn get_cells(&self, cells: &[usize]) -> u64 {
        cells
            .iter()
            .map(|&cell| self.counters[cell])
            .min()
            .unwrap_or(0)
    }

    /// Merges another CountMinSketch into this one.
    pub fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        self.check_compatible(other)?;
        for (mine, &theirs) in self.counters.iter_mut().zip(&other.counters) {
            *mine = mine.saturating_add(theirs);
        }
        self.total = self.total.saturating_add(other.total);
        Ok(())
    }

    pub fn try_eq(&self, other: &Self) -> Result<bool, SketchError> {
        self.check_compatible(other)?;
        Ok(self.counters == other.counters)
    }

    pub fn clear(&mut self) {
        self.counters.fill(0);
        self.total = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.counters.iter().all(|&c| c == 0)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sum of all increments pushed (saturating).
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn counters(&self) -> &[u64] {
        &self.counters
    }

    #[inline]
    fn cell<T: Hash + ?Sized>(&self, row: usize, item: &T) -> usize {
        let hash = self.hasher.route_seeded(self.seeds[row], item);
        row * self.width + (hash % self.width as u64) as usize
    }

    fn check_compatible(&self, other: &Self) -> Result<(), SketchError> {
        if self.width != other.width || self.depth != other.depth {
            return Err(SketchError::incompatible(
                format!("{}x{}", self.width, self.depth),
                format!("{}x{}", other.width, other.depth),
            ));
        }
        Ok(())
    }

    pub(crate) fn from_state_with_hasher(
        state: CountMinSketchState,
        hasher: S,
    ) -> Result<Self, SketchError> {
        let cells = matrix_cells(state.width, state.depth)
            .map_err(SketchError::invalid_state)?;
        if state.counters.len() != cells {
            return Err(SketchError::invalid_state(format!(
                "Matrix size mismatch: expected {}x{}, got {} counters",
                state.width,
                state.depth,
                state.counters.len()
            )));
        }
        let mut sketch = Self::from_parts(state.width, state.depth, state.counters, hasher);
        // Every row absorbs every increment, so any row sum is the total.
        sketch.total = sketch.counters[..sketch.width]
            .iter()
            .fold(0u64, |acc, &c| acc.saturating_add(c));
        sketch.validate()?;
        Ok(sketch)
    }
}

/// Number of counters in a `width x depth` matrix, if it is non-empty and addressable.
fn matrix_cells(width: usize, depth: usize) -> Result<usize, String> {
    if width == 0 || depth == 0 {
        return Err(format!(
            "width and depth must be positive, got {}x{}",
            width, depth
        ));
    }
    width
        .checked_mul(depth)
        .filter(|cells| {
            cells
                .checked_mul(std::mem::size_of::<u64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| format!("{}x{} counter matrix does not fit in memory", width, depth))
}

impl<S: BuildHasher + Clone> Sketch for CountMinSketch<S> {
    fn clear(&mut self) {
        CountMinSketch::clear(self)
    }

    fn is_empty(&self) -> bool {
        CountMinSketch::is_empty(self)
    }

    /// Every row absorbs every increment, so all row sums are equal.
    fn validate(&self) -> Result<(), SketchError> {
        let mut row_sums = self
            .counters
            .chunks(self.width)
            .map(|row| row.iter().fold(0u64, |acc, &c| acc.saturating_add(c)));
        let first = row_sums.next().unwrap_or(0);
        if row_sums.any(|sum| sum != first) {
            return Err(SketchError::InvalidState(
                "Count-Min rows have different totals".into(),
            ));
        }
        Ok(())
    }
}

impl<S: BuildHasher + Clone> Mergeable for CountMinSketch<S> {
    fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        CountMinSketch::union(self, other)
    }
}

impl<S: BuildHasher + Clone + Default> Snapshot for CountMinSketch<S> {
    type State = CountMinSketchState;

    fn snapshot(&self) -> CountMinSketchState {
        CountMinSketchState {
            width: self.width,
            depth: self.depth,
            counters: self.counters.clone(),
        }
    }

    fn from_state(state: CountMinSketchState) -> Result<Self, SketchError> {
        Self::from_state_with_hasher(state, S::default())
    }
}
