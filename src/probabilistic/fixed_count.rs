// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::FixedCountConfig;
use crate::probabilistic::reservoir::seeded_rng;
use crate::traits::{Sketch, SketchError, Snapshot};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Flat state of a [`FixedCountSampler`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCountState {
    pub population: u64,
    pub sample: u64,
    pub seed: Option<u64>,
    pub drawn: u64,
    pub selected: u64,
}

/// Answers exactly `population` calls to [`sample`](Self::sample), exactly
/// `sample` of which return `true`.
///
/// Each call selects with probability `k_remaining / n_remaining`, so the count
/// of selections can neither fall short nor overshoot. The seed decides which
/// calls are selected, never how many.
///
/// ```
/// use stream_sketches::FixedCountSampler;
///
/// let mut sampler = FixedCountSampler::new(100, 20, None).unwrap();
/// let hits = (0..100).filter(|_| sampler.sample().unwrap()).count();
/// assert_eq!(hits, 20);
/// assert!(sampler.sample().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FixedCountSampler {
    population: u64,
    sample: u64,
    seed: Option<u64>,
    rng: StdRng,
    drawn: u64,
    selected: u64,
}

impl FixedCountSampler {
    pub fn new(population: u64, sample: u64, seed: Option<u64>) -> Result<Self, SketchError> {
        Self::with_config(FixedCountConfig {
            population,
            sample,
            seed,
        })
    }

    pub fn with_config(config: FixedCountConfig) -> Result<Self, SketchError> {
        config.validate()?;
        tracing::debug!(
            population = config.population,
            sample = config.sample,
            "creating FixedCountSampler"
        );
        Ok(Self {
            population: config.population,
            sample: config.sample,
            seed: config.seed,
            rng: seeded_rng(config.seed),
            drawn: 0,
            selected: 0,
        })
    }

    /// Decides whether the next member of the population is selected.
    pub fn sample(&mut self) -> Result<bool, SketchError> {
        let n_remaining = self.population - self.drawn;
        if n_remaining == 0 {
            tracing::warn!(population = self.population, "sampler population exhausted");
            return Err(SketchError::PopulationExhausted {
                population: self.population,
            });
        }
        let k_remaining = self.sample - self.selected;
        let selected = self.rng.random_range(0..n_remaining) < k_remaining;
        self.drawn += 1;
        if selected {
            self.selected += 1;
        }
        Ok(selected)
    }

    /// Calls left before the population is exhausted.
    pub fn remaining(&self) -> u64 {
        self.population - self.drawn
    }

    /// Positive outcomes so far.
    pub fn selected(&self) -> u64 {
        self.selected
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn sample_size(&self) -> u64 {
        self.sample
    }

    /// Restarts the population, replaying the same outcomes when seeded.
    pub fn clear(&mut self) {
        self.drawn = 0;
        self.selected = 0;
        self.rng = seeded_rng(self.seed);
    }

    pub fn is_empty(&self) -> bool {
        self.drawn == 0
    }
}

impl Sketch for FixedCountSampler {
    fn clear(&mut self) {
        FixedCountSampler::clear(self)
    }

    fn is_empty(&self) -> bool {
        FixedCountSampler::is_empty(self)
    }

    fn validate(&self) -> Result<(), SketchError> {
        if self.drawn > self.population || self.selected > self.sample {
            return Err(SketchError::InvalidState(format!(
                "drew {} of {} with {} of {} selected",
                self.drawn, self.population, self.selected, self.sample
            )));
        }
        if self.sample - self.selected > self.population - self.drawn {
            return Err(SketchError::InvalidState(format!(
                "{} selections remain but only {} draws",
                self.sample - self.selected,
                self.population - self.drawn
            )));
        }
        if self.selected > self.drawn {
            return Err(SketchError::InvalidState(
                "more selections than draws".into(),
            ));
        }
        Ok(())
    }
}

impl Snapshot for FixedCountSampler {
    type State = FixedCountState;

    fn snapshot(&self) -> FixedCountState {
        FixedCountState {
            population: self.population,
            sample: self.sample,
            seed: self.seed,
            drawn: self.drawn,
            selected: self.selected,
        }
    }

    fn from_state(state: FixedCountState) -> Result<Self, SketchError> {
        let mut sampler = Self::new(state.population, state.sample, state.seed)?;
        sampler.drawn = state.drawn;
        sampler.selected = state.selected;
        if let Err(err) = sampler.validate() {
            return Err(SketchError::invalid_state(err.to_string()));
        }
        Ok(sampler)
    }
}
