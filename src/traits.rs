// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Error type for sketch operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Incompatible precision: expected {expected}, found {found}")]
    IncompatiblePrecision { expected: String, found: String },
    #[error("Invalid window {window}: must satisfy 0 < window <= {max}")]
    InvalidWindow { window: u64, max: u64 },
    #[error("Population exhausted: all {population} draws have been made")]
    PopulationExhausted { population: u64 },
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl SketchError {
    pub(crate) fn incompatible(expected: impl ToString, found: impl ToString) -> Self {
        let err = SketchError::IncompatiblePrecision {
            expected: expected.to_string(),
            found: found.to_string(),
        };
        tracing::warn!(%err, "rejecting operation across differently configured sketches");
        err
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!(reason = %msg, "snapshot failed validation");
        SketchError::InvalidState(msg)
    }
}

/// Core sketch trait - the contract shared by every estimator in this crate.
///
/// Every sketch uses bounded memory independent of the stream length and can be
/// reset to the exact observable state of a freshly built instance.
pub trait Sketch: Clone {
    /// Resets the sketch to its freshly constructed state, keeping its configuration.
    fn clear(&mut self);

    /// Returns true if nothing has been observed since construction or the last `clear`.
    fn is_empty(&self) -> bool;

    /// Validates the internal consistency of the sketch state.
    ///
    /// Called after restoring from a snapshot to ensure that all
    /// structural invariants for the specific sketch type are maintained.
    fn validate(&self) -> Result<(), SketchError>;
}

/// Sketches that can absorb an independently built sketch of identical configuration.
///
/// Merging sketches with different configurations fails with
/// [`SketchError::IncompatiblePrecision`] and leaves the receiver untouched.
pub trait Mergeable: Sketch {
    fn union(&mut self, other: &Self) -> Result<(), SketchError>;
}

/// Flat in-memory state export, so a host layer can persist sketches with any
/// serde format without this crate picking one.
pub trait Snapshot: Sized {
    type State: Serialize + DeserializeOwned;

    /// Copies the observable state out of the sketch.
    fn snapshot(&self) -> Self::State;

    /// Rebuilds a sketch from a state, rejecting states that break an invariant.
    fn from_state(state: Self::State) -> Result<Self, SketchError>;
}
