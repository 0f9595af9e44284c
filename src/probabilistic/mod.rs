// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Probabilistic Data Structures (Sketches)
//!
//! These data structures provide approximate answers to queries (cardinality, frequency,
//! quantiles, samples) using a fixed amount of memory regardless of stream length.
//! Sketches with identical configuration can be merged, so partial sketches built on
//! separate shards combine into one.

mod bias;
mod bias_tables;
pub mod count_min_sketch;
pub mod fixed_count;
pub mod hyperloglog;
pub mod reservoir;
pub mod sliding_hyperloglog;
pub mod tdigest;
pub mod topk;

pub use count_min_sketch::{CountMinSketch, CountMinSketchState};
pub use fixed_count::{FixedCountSampler, FixedCountState};
pub use hyperloglog::{HyperLogLog, HyperLogLogState};
pub use reservoir::{ReservoirSampler, ReservoirState};
pub use sliding_hyperloglog::{SlidingHyperLogLog, SlidingHyperLogLogState};
pub use tdigest::{Centroid, TDigest, TDigestState};
pub use topk::{TopK, TopKState};
