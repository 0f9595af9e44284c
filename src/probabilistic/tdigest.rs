// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::TDigestConfig;
use crate::traits::{Mergeable, Sketch, SketchError, Snapshot};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A `(mean, weight)` cluster of nearby values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub mean: f64,
    pub weight: u64,
}

impl Centroid {
    fn absorb(&mut self, other: &Centroid) {
        let weight = self.weight + other.weight;
        let (low, high) = (self.mean.min(other.mean), self.mean.max(other.mean));
        let mean = self.mean + (other.mean - self.mean) * other.weight as f64 / weight as f64;
        self.mean = mean.clamp(low, high);
        self.weight = weight;
    }
}

/// Flat state of a [`TDigest`]. `min`/`max` are `None` for an empty digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TDigestState {
    pub compression: u32,
    pub count: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub centroids: Vec<(f64, u64)>,
}

/// Quantile at which the `k`-th centroid must close, for scale delta `delta`.
///
/// Inverse of `k(q) = delta * sqrt(2q) / 2` below the median, mirrored above it,
/// which keeps centroids near both tails small. From `k = delta` on there is no limit.
fn inverse_scale(k: f64, delta: f64) -> f64 {
    let ratio = k / delta;
    if ratio >= 1.0 {
        f64::INFINITY
    } else if ratio >= 0.5 {
        1.0 - 2.0 * (1.0 - ratio).powi(2)
    } else {
        2.0 * ratio.powi(2)
    }
}

/// TDigest - Percentile Estimation
///
/// Keeps an ordered list of centroids whose sizes are bounded by a scale
/// function of their cumulative position, so clusters near the tails stay small
/// and the list never grows much past `compression` entries. The exact minimum
/// and maximum are tracked alongside and anchor both ends of every estimate.
///
/// # Example
///
/// ```
/// use stream_sketches::TDigest;
///
/// let mut td = TDigest::new(100).unwrap();
/// td.push_sorted(&(1..=100).map(f64::from).collect::<Vec<_>>());
///
/// let p50 = td.estimate_value(0.5).unwrap();
/// assert!((p50 - 50.0).abs() < 1.0);
/// assert_eq!(td.estimate_value(1.0), Some(100.0));
/// ```
#[derive(Debug, Clone)]
pub struct TDigest {
    compression: u32,
    centroids: Vec<Centroid>,
    count: u64,
    min: f64,
    max: f64,
    /// Reused buffer for merges.
    scratch: Vec<Centroid>,
}

impl Default for TDigest {
    fn default() -> Self {
        Self::from_valid_config(TDigestConfig::default())
    }
}

impl TDigest {
    pub fn new(compression: u32) -> Result<Self, SketchError> {
        Self::with_config(TDigestConfig { compression })
    }

    pub fn with_config(config: TDigestConfig) -> Result<Self, SketchError> {
        config.validate()?;
        tracing::debug!(compression = config.compression, "creating TDigest");
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TDigestConfig) -> Self {
        Self {
            compression: config.compression,
            centroids: Vec::new(),
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            scratch: Vec::new(),
        }
    }

    /// Adds one value. NaN and infinities have no usable rank and are ignored.
    pub fn push(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.merge_sorted(std::iter::once(value));
    }

    /// Adds values already in ascending order with a single merge pass.
    ///
    /// Input that turns out not to be ordered (or holds non-finite values) takes the
    /// [`push_unsorted`](Self::push_unsorted) path instead.
    pub fn push_sorted(&mut self, values: &[f64]) {
        if values.windows(2).all(|pair| pair[0] <= pair[1]) && values.iter().all(|v| v.is_finite())
        {
            self.merge_sorted(values.iter().copied());
        } else {
            self.push_unsorted(values);
        }
    }

    /// Sorts `values`, then merges them exactly as [`push_sorted`](Self::push_sorted) would.
    pub fn push_unsorted(&mut self, values: &[f64]) {
        let mut sorted: Vec<OrderedFloat<f64>> = values
            .iter()
            .filter(|v| v.is_finite())
            .map(|&v| OrderedFloat(v))
            .collect();
        sorted.sort_unstable();
        self.merge_sorted(sorted.into_iter().map(|v| v.into_inner()));
    }

    /// Estimated value at quantile `q`; `q <= 0` and `q >= 1` give the exact min and max.
    pub fn estimate_value(&self, q: f64) -> Option<f64> {
        if self.centroids.is_empty() || q.is_nan() {
            return None;
        }
        if q <= 0.0 {
            return Some(self.min);
        }
        if q >= 1.0 {
            return Some(self.max);
        }

        let centroids = &self.centroids;
        let last = centroids.len() - 1;
        let total = self.count as f64;
        let rank = total * q;

        // Most queries sit near a tail, so walk in from the closer end.
        let mut pos = last;
        let mut cumulative = 0.0;
        if q > 0.5 {
            pos = 0;
            cumulative = total;
            for (k, centroid) in centroids.iter().enumerate().rev() {
                cumulative -= centroid.weight as f64;
                if rank >= cumulative {
                    pos = k;
                    break;
                }
            }
        } else {
            for (k, centroid) in centroids.iter().enumerate() {
                if rank < cumulative + centroid.weight as f64 {
                    pos = k;
                    break;
                }
                cumulative += centroid.weight as f64;
            }
        }

        let mut spread = 0.0;
        let mut low = self.min;
        let mut high = self.max;
        if centroids.len() > 1 {
            if pos == 0 {
                spread = centroids[1].mean - centroids[0].mean;
                high = centroids[1].mean;
            } else if pos == last {
                spread = centroids[last].mean - centroids[last - 1].mean;
                low = centroids[last - 1].mean;
            } else {
                spread = (centroids[pos + 1].mean - centroids[pos - 1].mean) / 2.0;
                low = centroids[pos - 1].mean;
                high = centroids[pos + 1].mean;
            }
        }

        let centroid = &centroids[pos];
        let offset = (rank - cumulative) / centroid.weight as f64 - 0.5;
        Some((centroid.mean + offset * spread).max(low).min(high))
    }

    /// Estimated fraction of values at or below `value`, in `[0, 1]`.
    ///
    /// Interpolates linearly between `(min, 0)`, each centroid's mean at its
    /// mid-weight position, and `(max, 1)`.
    pub fn estimate_quantile(&self, value: f64) -> Option<f64> {
        if self.centroids.is_empty() || value.is_nan() {
            return None;
        }
        if value < self.min {
            return Some(0.0);
        }
        if value >= self.max {
            return Some(1.0);
        }

        let total = self.count as f64;
        let mut previous = (self.min, 0.0);
        let mut cumulative = 0.0;
        for centroid in &self.centroids {
            let point = (
                centroid.mean,
                (cumulative + centroid.weight as f64 / 2.0) / total,
            );
            if value <= point.0 {
                return Some(interpolate(previous, point, value));
            }
            cumulative += centroid.weight as f64;
            previous = point;
        }
        Some(interpolate(previous, (self.max, 1.0), value))
    }

    /// Merges another digest with the same compression.
    pub fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.compression != other.compression {
            return Err(SketchError::incompatible(
                format!("compression {}", self.compression),
                format!("compression {}", other.compression),
            ));
        }
        if other.centroids.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            centroids = self.centroids.len(),
            incoming = other.centroids.len(),
            "merging TDigest"
        );
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.count += other.count;
        self.merge_centroids(other.centroids.iter().copied());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.centroids.clear();
        self.count = 0;
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn compression(&self) -> u32 {
        self.compression
    }

    pub fn min(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.max)
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    fn merge_sorted<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let mut added = 0u64;
        let (mut low, mut high) = (self.min, self.max);
        let incoming = values.into_iter().map(|value| {
            added += 1;
            low = low.min(value);
            high = high.max(value);
            Centroid {
                mean: value,
                weight: 1,
            }
        });
        self.merge_centroids(incoming);
        self.count += added;
        self.min = low;
        self.max = high;
    }

    /// Merges an ascending run of centroids into the list, then re-clusters.
    fn merge_centroids<I>(&mut self, incoming: I)
    where
        I: IntoIterator<Item = Centroid>,
    {
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        let mut existing = self.centroids.iter().copied().peekable();
        for centroid in incoming {
            while let Some(current) = existing.next_if(|c| c.mean < centroid.mean) {
                scratch.push(current);
            }
            scratch.push(centroid);
        }
        scratch.extend(existing);
        self.scratch = std::mem::replace(&mut self.centroids, scratch);
        self.compress();
    }

    /// Folds neighbours together while the running cluster stays under the
    /// quantile limit of its scale-function index; each new cluster raises the index by one.
    fn compress(&mut self) {
        if self.centroids.len() < 2 {
            return;
        }
        let total: u64 = self.centroids.iter().map(|c| c.weight).sum();
        let total = total as f64;
        let delta = self.compression as f64;

        let mut clustered = std::mem::take(&mut self.scratch);
        clustered.clear();
        let mut k_limit = 1.0;
        let mut q_lower = 0.0;
        let mut q_limit = inverse_scale(k_limit, delta);
        let mut current = self.centroids[0];
        for next in &self.centroids[1..] {
            let q_upper = q_lower + (current.weight + next.weight) as f64 / total;
            if q_upper <= q_limit {
                current.absorb(next);
            } else {
                clustered.push(current);
                q_lower += current.weight as f64 / total;
                k_limit += 1.0;
                q_limit = inverse_scale(k_limit, delta);
                current = *next;
            }
        }
        clustered.push(current);
        self.scratch = std::mem::replace(&mut self.centroids, clustered);
    }
}

fn interpolate(from: (f64, f64), to: (f64, f64), x: f64) -> f64 {
    if to.0 <= from.0 {
        return to.1;
    }
    from.1 + (x - from.0) / (to.0 - from.0) * (to.1 - from.1)
}

impl Sketch for TDigest {
    fn clear(&mut self) {
        TDigest::clear(self)
    }

    fn is_empty(&self) -> bool {
        TDigest::is_empty(self)
    }

    fn validate(&self) -> Result<(), SketchError> {
        let weight: u64 = self.centroids.iter().map(|c| c.weight).sum();
        if weight != self.count {
            return Err(SketchError::InvalidState(format!(
                "centroid weights sum to {} but count is {}",
                weight, self.count
            )));
        }
        if self.centroids.iter().any(|c| c.weight == 0 || !c.mean.is_finite()) {
            return Err(SketchError::InvalidState(
                "centroids need a finite mean and a positive weight".into(),
            ));
        }
        if self.centroids.windows(2).any(|pair| pair[0].mean > pair[1].mean) {
            return Err(SketchError::InvalidState(
                "centroid means are not ascending".into(),
            ));
        }
        if self.count > 0
            && !(self.min.is_finite() && self.max.is_finite() && self.min <= self.max)
        {
            return Err(SketchError::InvalidState(format!(
                "min {} and max {} are not an ordered finite range",
                self.min, self.max
            )));
        }
        if let (Some(first), Some(last)) = (self.centroids.first(), self.centroids.last()) {
            if self.min > first.mean || self.max < last.mean {
                return Err(SketchError::InvalidState(
                    "min/max do not bound the centroids".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Mergeable for TDigest {
    fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        TDigest::union(self, other)
    }
}

impl Snapshot for TDigest {
    type State = TDigestState;

    fn snapshot(&self) -> TDigestState {
        TDigestState {
            compression: self.compression,
            count: self.count,
            min: self.min(),
            max: self.max(),
            centroids: self.centroids.iter().map(|c| (c.mean, c.weight)).collect(),
        }
    }

    fn from_state(state: TDigestState) -> Result<Self, SketchError> {
        let mut digest = Self::new(state.compression)?;
        digest.centroids = state
            .centroids
            .into_iter()
            .map(|(mean, weight)| Centroid { mean, weight })
            .collect();
        digest.count = state.count;
        match (state.min, state.max) {
            (Some(min), Some(max)) if state.count > 0 => {
                digest.min = min;
                digest.max = max;
            }
            (None, None) if state.count == 0 => {}
            _ => {
                return Err(SketchError::invalid_state(
                    "min/max must be present exactly when the digest is non-empty",
                ))
            }
        }
        digest.validate()?;
        Ok(digest)
    }
}
