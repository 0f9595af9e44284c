// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::{check_precision, precision_for_register_count, HyperLogLogConfig};
use crate::hash::{HashRouter, SipRouter};
use crate::probabilistic::bias;
use crate::traits::{Mergeable, Sketch, SketchError, Snapshot};
use serde::{Deserialize, Serialize};
use std::hash::{BuildHasher, Hash};

/// Flat state of a [`HyperLogLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperLogLogState {
    pub precision: u8,
    pub registers: Vec<u8>,
}

/// HyperLogLog - Cardinality Estimation
///
/// A probabilistic data structure for estimating the number of unique elements (cardinality)
/// in a set. It uses significantly less memory than storing the elements themselves.
///
/// # Key Properties
///
/// - **Fixed Memory**: `2^p` one-byte registers, with `p` picked so that `1.04 / sqrt(2^p)`
///   meets the requested error rate.
/// - **Bias Corrected**: linear counting for small cardinalities, table-driven bias
///   correction up to `5m`, the raw estimate above that.
/// - **Mergeable**: Two sketches of equal precision merge by taking the element-wise maximum
///   of the registers.
/// - **Idempotent**: Adding the same element multiple times does not change the estimate.
///
/// # Example
///
/// ```
/// use stream_sketches::HyperLogLog;
///
/// let mut hll = HyperLogLog::new(0.01).unwrap();
/// hll.push("user1");
/// hll.push("user2");
/// hll.push("user3");
/// hll.push("user1"); // Duplicate
///
/// assert_eq!(hll.len().round(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct HyperLogLog<S = SipRouter> {
    precision: u8,
    registers: Vec<u8>,
    hasher: S,
}

impl HyperLogLog {
    /// Creates an empty sketch sized for `error_rate`.
    pub fn new(error_rate: f64) -> Result<Self, SketchError> {
        Self::with_config(HyperLogLogConfig { error_rate })
    }

    pub fn with_config(config: HyperLogLogConfig) -> Result<Self, SketchError> {
        Self::with_hasher(config, SipRouter::new())
    }

    /// Creates an empty sketch with exactly `2^precision` registers.
    pub fn with_precision(precision: u8) -> Result<Self, SketchError> {
        Self::with_precision_and_hasher(precision, SipRouter::new())
    }

    /// Rebuilds a sketch from a register array whose length is a power of two.
    pub fn from_registers(registers: Vec<u8>) -> Result<Self, SketchError> {
        Self::from_registers_with_hasher(registers, SipRouter::new())
    }
}

impl<S: BuildHasher + Clone> HyperLogLog<S> {
    pub fn with_hasher(config: HyperLogLogConfig, hasher: S) -> Result<Self, SketchError> {
        let precision = config.precision()?;
        Self::with_precision_and_hasher(precision, hasher)
    }

    pub fn with_precision_and_hasher(precision: u8, hasher: S) -> Result<Self, SketchError> {
        check_precision(precision)?;
        tracing::debug!(precision, registers = 1usize << precision, "creating HyperLogLog");
        Ok(Self {
            precision,
            registers: vec![0u8; 1 << precision],
            hasher,
        })
    }

    pub fn from_registers_with_hasher(registers: Vec<u8>, hasher: S) -> Result<Self, SketchError> {
        let precision = precision_for_register_count(registers.len())?;
        let max_rank = 64 - precision + 1;
        if let Some(&bad) = registers.iter().find(|&&r| r > max_rank) {
            return Err(SketchError::invalid_state(format!(
                "register rank {} exceeds the maximum of {}",
                bad, max_rank
            )));
        }
        Ok(Self {
            precision,
            registers,
            hasher,
        })
    }

    /// Adds an element to the sketch.
    ///
    /// Returns `true` if a register changed.
    pub fn push<T: Hash + ?Sized>(&mut self, value: &T) -> bool {
        let (index, rank) = bias::index_and_rank(self.hasher.route(value), self.precision);
        let register = &mut self.registers[index];
        if rank > *register {
            *register = rank;
            true
        } else {
            false
        }
    }

    /// Estimates the number of distinct elements pushed so far.
    pub fn len(&self) -> f64 {
        bias::estimate(self.registers.iter().copied(), self.precision)
    }

    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(|&r| r == 0)
    }

    /// Merges `other` into this sketch (element-wise register maximum).
    pub fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        self.check_compatible(other)?;
        for (mine, &theirs) in self.registers.iter_mut().zip(&other.registers) {
            if theirs > *mine {
                *mine = theirs;
            }
        }
        Ok(())
    }

    /// Estimates `|A ∩ B|` by inclusion-exclusion: `|A| + |B| - |A ∪ B|`.
    ///
    /// There is no register-level intersection, so afterwards this sketch holds
    /// the union's registers and `len()` reports the union. The returned value is
    /// the intersection estimate, clamped at zero. Further unions or intersections
    /// on the receiver compose with the union, not with the intersection.
    pub fn intersect(&mut self, other: &Self) -> Result<f64, SketchError> {
        self.check_compatible(other)?;
        let mine = self.len();
        let theirs = other.len();
        self.union(other)?;
        let both = self.len();
        Ok((mine + theirs - both).max(0.0))
    }

    /// Compares register arrays; sketches of different precision cannot be compared.
    pub fn try_eq(&self, other: &Self) -> Result<bool, SketchError> {
        self.check_compatible(other)?;
        Ok(self.registers == other.registers)
    }

    pub fn clear(&mut self) {
        self.registers.fill(0);
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Relative standard error, `1.04 / sqrt(m)`.
    pub fn relative_error(&self) -> f64 {
        1.04 / ((1u64 << self.precision) as f64).sqrt()
    }

    fn check_compatible(&self, other: &Self) -> Result<(), SketchError> {
        if self.precision != other.precision {
            return Err(SketchError::incompatible(
                format!("precision {}", self.precision),
                format!("precision {}", other.precision),
            ));
        }
        Ok(())
    }
}

impl<S: BuildHasher + Clone> Sketch for HyperLogLog<S> {
    fn clear(&mut self) {
        HyperLogLog::clear(self)
    }

    fn is_empty(&self) -> bool {
        HyperLogLog::is_empty(self)
    }

    fn validate(&self) -> Result<(), SketchError> {
        let expected = 1usize << self.precision;
        if self.registers.len() != expected {
            return Err(SketchError::InvalidState(format!(
                "Invalid register count: expected {}, got {}",
                expected,
                self.registers.len()
            )));
        }
        Ok(())
    }
}

impl<S: BuildHasher + Clone> Mergeable for HyperLogLog<S> {
    fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        HyperLogLog::union(self, other)
    }
}

impl<S: BuildHasher + Clone + Default> Snapshot for HyperLogLog<S> {
    type State = HyperLogLogState;

    fn snapshot(&self) -> HyperLogLogState {
        HyperLogLogState {
            precision: self.precision,
            registers: self.registers.clone(),
        }
    }

    fn from_state(state: HyperLogLogState) -> Result<Self, SketchError> {
        let sketch = Self::from_registers_with_hasher(state.registers, S::default())?;
        if sketch.precision != state.precision {
            return Err(SketchError::invalid_state(format!(
                "precision {} does not match {} registers",
                state.precision,
                sketch.registers.len()
            )));
        }
        Ok(sketch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_reports_register_changes() {
        let mut hll = HyperLogLog::with_precision(10).unwrap();
        assert!(hll.push("a"));
        assert!(!hll.push("a"));
        assert!(!hll.is_empty());
    }

    #[test]
    fn test_small_cardinality_is_near_exact() {
        let mut hll = HyperLogLog::new(0.00408).unwrap();
        assert_eq!(hll.precision(), 16);
        for i in 0..10 {
            hll.push(&i);
        }
        assert_eq!(hll.len().round(), 10.0);
    }

    #[test]
    fn test_union_rejects_mismatched_precision() {
        let mut a = HyperLogLog::with_precision(10).unwrap();
        let b = HyperLogLog::with_precision(11).unwrap();
        a.push("x");
        let before = a.registers().to_vec();
        assert!(matches!(
            a.union(&b),
            Err(SketchError::IncompatiblePrecision { .. })
        ));
        assert!(a.try_eq(&b).is_err());
        assert_eq!(a.registers(), &before[..]);
    }

    #[test]
    fn test_intersect_leaves_union_registers() {
        let mut a = HyperLogLog::with_precision(14).unwrap();
        let mut b = HyperLogLog::with_precision(14).unwrap();
        for i in 0..1000 {
            a.push(&i);
            b.push(&(i + 500));
        }
        let mut union = a.clone();
        union.union(&b).unwrap();

        let shared = a.intersect(&b).unwrap();
        assert!((shared - 500.0).abs() < 50.0, "shared = {}", shared);
        assert!(a.try_eq(&union).unwrap());
    }

    #[test]
    fn test_from_registers_validation() {
        assert!(HyperLogLog::from_registers(vec![0; 100]).is_err());
        assert!(HyperLogLog::from_registers(vec![70; 16]).is_err());
        let hll = HyperLogLog::from_registers(vec![1; 16]).unwrap();
        assert_eq!(hll.precision(), 4);
    }

    #[test]
    fn test_large_cardinality_within_error() {
        let mut hll = HyperLogLog::with_precision(12).unwrap();
        let n = 100_000u64;
        for i in 0..n {
            hll.push(&i);
        }
        let relative = (hll.len() - n as f64).abs() / n as f64;
        assert!(relative < 4.0 * hll.relative_error(), "relative = {}", relative);
    }
}
