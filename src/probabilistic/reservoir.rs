// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::ReservoirConfig;
use crate::traits::{Sketch, SketchError, Snapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Flat state of a [`ReservoirSampler`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservoirState<T> {
    pub capacity: usize,
    pub seed: Option<u64>,
    pub seen: u64,
    pub items: Vec<T>,
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Reservoir Sampler - Uniform Fixed-Size Sample
///
/// Keeps a uniform random sample of at most `capacity` items from a stream of
/// unknown length (Algorithm R). Once full, the `n`-th item replaces a random
/// slot with probability `capacity / n`.
///
/// With a seed, the reservoir is a deterministic function of the seed and the
/// arrival order.
///
/// # Example
///
/// ```
/// use stream_sketches::ReservoirSampler;
///
/// let mut a = ReservoirSampler::new(10, Some(42)).unwrap();
/// let mut b = ReservoirSampler::new(10, Some(42)).unwrap();
/// for i in 0..100 {
///     a.push(i);
///     b.push(i);
/// }
/// assert_eq!(a.reservoir(), b.reservoir());
/// assert_eq!(a.reservoir().len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ReservoirSampler<T> {
    capacity: usize,
    seed: Option<u64>,
    rng: StdRng,
    items: Vec<T>,
    seen: u64,
}

impl<T> ReservoirSampler<T> {
    pub fn new(capacity: usize, seed: Option<u64>) -> Result<Self, SketchError> {
        Self::with_config(ReservoirConfig { capacity, seed })
    }

    pub fn with_config(config: ReservoirConfig) -> Result<Self, SketchError> {
        config.validate()?;
        tracing::debug!(
            capacity = config.capacity,
            seeded = config.seed.is_some(),
            "creating ReservoirSampler"
        );
        Ok(Self {
            capacity: config.capacity,
            seed: config.seed,
            rng: seeded_rng(config.seed),
            items: Vec::new(),
            seen: 0,
        })
    }

    /// Offers an item to the reservoir. Returns `true` if it was kept.
    pub fn push(&mut self, item: T) -> bool {
        self.seen += 1;
        if self.items.len() < self.capacity {
            self.items.push(item);
            return true;
        }
        let slot = self.rng.random_range(0..self.seen);
        if slot < self.capacity as u64 {
            self.items[slot as usize] = item;
            true
        } else {
            false
        }
    }

    /// Current sample; holds `min(seen, capacity)` items.
    pub fn reservoir(&self) -> &[T] {
        &self.items
    }

    /// Number of items offered since construction or the last `clear`.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Empties the reservoir and restarts the random stream from the seed.
    pub fn clear(&mut self) {
        self.items.clear();
        self.seen = 0;
        self.rng = seeded_rng(self.seed);
    }

    pub fn is_empty(&self) -> bool {
        self.seen == 0
    }
}

impl<T: Clone> Sketch for ReservoirSampler<T> {
    fn clear(&mut self) {
        ReservoirSampler::clear(self)
    }

    fn is_empty(&self) -> bool {
        ReservoirSampler::is_empty(self)
    }

    fn validate(&self) -> Result<(), SketchError> {
        let expected = self.seen.min(self.capacity as u64);
        if self.items.len() as u64 != expected {
            return Err(SketchError::InvalidState(format!(
                "reservoir holds {} items, expected {}",
                self.items.len(),
                expected
            )));
        }
        Ok(())
    }
}

impl<T: Clone + Serialize + DeserializeOwned> Snapshot for ReservoirSampler<T> {
    type State = ReservoirState<T>;

    fn snapshot(&self) -> ReservoirState<T> {
        ReservoirState {
            capacity: self.capacity,
            seed: self.seed,
            seen: self.seen,
            items: self.items.clone(),
        }
    }

    fn from_state(state: ReservoirState<T>) -> Result<Self, SketchError> {
        let mut sampler = Self::new(state.capacity, state.seed)?;
        sampler.seen = state.seen;
        sampler.items = state.items;
        if let Err(err) = sampler.validate() {
            return Err(SketchError::invalid_state(err.to_string()));
        }
        Ok(sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_before_sampling() {
        let mut sampler = ReservoirSampler::new(5, Some(7)).unwrap();
        for i in 0..3 {
            assert!(sampler.push(i));
        }
        assert_eq!(sampler.reservoir(), &[0, 1, 2]);
        assert_eq!(sampler.seen(), 3);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = ReservoirSampler::new(10, Some(1)).unwrap();
        let mut b = ReservoirSampler::new(10, Some(2)).unwrap();
        for i in 0..1000 {
            a.push(i);
            b.push(i);
        }
        assert_ne!(a.reservoir(), b.reservoir());
    }

    #[test]
    fn test_clear_replays_the_same_sample() {
        let mut sampler = ReservoirSampler::new(4, Some(99)).unwrap();
        (0..50).for_each(|i| {
            sampler.push(i);
        });
        let first = sampler.reservoir().to_vec();

        sampler.clear();
        assert!(sampler.is_empty());
        (0..50).for_each(|i| {
            sampler.push(i);
        });
        assert_eq!(sampler.reservoir(), &first[..]);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(matches!(
            ReservoirSampler::<u32>::new(0, None),
            Err(SketchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_restore_rejects_wrong_item_count() {
        let state = ReservoirState {
            capacity: 3,
            seed: None,
            seen: 10,
            items: vec![1, 2],
        };
        assert!(ReservoirSampler::from_state(state).is_err());
    }
}
