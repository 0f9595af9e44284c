// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Sketch Configuration
//!
//! One serde-loadable struct per sketch. A host layer can read these from
//! JSON (or any serde format), call `validate`, and hand them to the
//! matching `with_config` constructor.
//!
//! # Example
//!
//! ```
//! use stream_sketches::config::TopKConfig;
//!
//! let config: TopKConfig =
//!     serde_json::from_str(r#"{"capacity": 5, "confidence": 0.99, "error_rate": 0.002}"#).unwrap();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.width(), 1360);
//! assert_eq!(config.depth(), 5);
//! ```

use crate::traits::SketchError;
use serde::{Deserialize, Serialize};

/// Smallest supported register-index width.
pub const MIN_PRECISION: u8 = 4;
/// Largest supported register-index width (bias tables stop here).
pub const MAX_PRECISION: u8 = 18;

fn check_unit_interval(name: &str, value: f64) -> Result<(), SketchError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(SketchError::InvalidConfiguration(format!(
            "{} must be in (0, 1), got {}",
            name, value
        )))
    }
}

fn check_positive(name: &str, value: u64) -> Result<(), SketchError> {
    if value == 0 {
        return Err(SketchError::InvalidConfiguration(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(())
}

/// Register-index width `p` such that `1.04 / sqrt(2^p) <= error_rate`.
///
/// Requests coarser than `p = 4` get `p = 4`; requests finer than `p = 18` are rejected.
pub fn precision_for_error_rate(error_rate: f64) -> Result<u8, SketchError> {
    check_unit_interval("error_rate", error_rate)?;
    let p = ((1.04 / error_rate).powi(2)).log2().ceil();
    if p > MAX_PRECISION as f64 {
        return Err(SketchError::InvalidConfiguration(format!(
            "error_rate {} needs precision {} which exceeds the maximum of {}",
            error_rate, p, MAX_PRECISION
        )));
    }
    Ok((p as u8).max(MIN_PRECISION))
}

pub(crate) fn check_precision(precision: u8) -> Result<(), SketchError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(SketchError::InvalidConfiguration(format!(
            "precision must be in [{}, {}], got {}",
            MIN_PRECISION, MAX_PRECISION, precision
        )));
    }
    Ok(())
}

/// Precision of a register array of `len` registers.
pub(crate) fn precision_for_register_count(len: usize) -> Result<u8, SketchError> {
    if !len.is_power_of_two() {
        return Err(SketchError::InvalidConfiguration(format!(
            "register count must be a power of two, got {}",
            len
        )));
    }
    let precision = len.trailing_zeros() as u8;
    check_precision(precision)?;
    Ok(precision)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperLogLogConfig {
    pub error_rate: f64,
}

impl Default for HyperLogLogConfig {
    fn default() -> Self {
        Self { error_rate: 0.01 }
    }
}

impl HyperLogLogConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        precision_for_error_rate(self.error_rate).map(|_| ())
    }

    pub fn precision(&self) -> Result<u8, SketchError> {
        precision_for_error_rate(self.error_rate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlidingHyperLogLogConfig {
    pub error_rate: f64,
    /// Longest window (in timestamp units) any query may ask for.
    pub window: u64,
}

impl Default for SlidingHyperLogLogConfig {
    fn default() -> Self {
        Self {
            error_rate: 0.01,
            window: 60,
        }
    }
}

impl SlidingHyperLogLogConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        check_positive("window", self.window)?;
        precision_for_error_rate(self.error_rate).map(|_| ())
    }

    pub fn precision(&self) -> Result<u8, SketchError> {
        precision_for_error_rate(self.error_rate)
    }
}

/// Count-Min sizing: `width = ceil(e / error_rate)`, `depth = ceil(ln(1 / (1 - confidence)))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountMinSketchConfig {
    /// Probability that an estimate stays within the error bound.
    pub confidence: f64,
    /// Overestimate bound as a fraction of the total count.
    pub error_rate: f64,
}

impl Default for CountMinSketchConfig {
    fn default() -> Self {
        Self {
            confidence: 0.99,
            error_rate: 0.002,
        }
    }
}

impl CountMinSketchConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        check_unit_interval("confidence", self.confidence)?;
        check_unit_interval("error_rate", self.error_rate)
    }

    pub fn width(&self) -> usize {
        (std::f64::consts::E / self.error_rate).ceil() as usize
    }

    pub fn depth(&self) -> usize {
        ((1.0 / (1.0 - self.confidence)).ln().ceil() as usize).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopKConfig {
    pub capacity: usize,
    pub confidence: f64,
    pub error_rate: f64,
}

impl Default for TopKConfig {
    fn default() -> Self {
        let sketch = CountMinSketchConfig::default();
        Self {
            capacity: 10,
            confidence: sketch.confidence,
            error_rate: sketch.error_rate,
        }
    }
}

impl TopKConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        check_positive("capacity", self.capacity as u64)?;
        self.sketch().validate()
    }

    pub fn sketch(&self) -> CountMinSketchConfig {
        CountMinSketchConfig {
            confidence: self.confidence,
            error_rate: self.error_rate,
        }
    }

    pub fn width(&self) -> usize {
        self.sketch().width()
    }

    pub fn depth(&self) -> usize {
        self.sketch().depth()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TDigestConfig {
    /// Scale-function delta; the digest keeps roughly this many centroids.
    pub compression: u32,
}

impl Default for TDigestConfig {
    fn default() -> Self {
        Self { compression: 100 }
    }
}

impl TDigestConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        check_positive("compression", self.compression as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservoirConfig {
    pub capacity: usize,
    /// `None` draws from OS entropy, so the sample is not reproducible.
    pub seed: Option<u64>,
}

impl ReservoirConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        check_positive("capacity", self.capacity as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCountConfig {
    /// Number of `sample` calls the sampler will answer.
    pub population: u64,
    /// Exact number of positive answers among them.
    pub sample: u64,
    pub seed: Option<u64>,
}

impl FixedCountConfig {
    pub fn validate(&self) -> Result<(), SketchError> {
        check_positive("population", self.population)?;
        if self.sample > self.population {
            return Err(SketchError::InvalidConfiguration(format!(
                "sample size {} exceeds population {}",
                self.sample, self.population
            )));
        }
        Ok(())
    }
}
