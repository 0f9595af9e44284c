// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! # stream-sketches
//!
//! Fixed-memory streaming estimators for single-pass analysis of unbounded streams:
//!
//! - **Cardinality**: [`HyperLogLog`] and the time-windowed [`SlidingHyperLogLog`].
//! - **Frequency**: [`CountMinSketch`] and the heavy-hitter tracker [`TopK`] built on it.
//! - **Quantiles**: [`TDigest`].
//! - **Sampling**: [`ReservoirSampler`] and [`FixedCountSampler`].
//!
//! Every structure implements [`Sketch`]; the ones that can be combined implement
//! [`Mergeable`], and all of them export a flat serde-friendly state via [`Snapshot`].
//! Hashing goes through [`HashRouter`], with [`SipRouter`] as the reproducible default.
//!
//! The crate emits `tracing` events but never installs a subscriber.

pub mod config;
pub mod hash;
pub mod probabilistic;
pub mod traits;

pub use hash::{HashRouter, SipRouter};
pub use traits::{Mergeable, Sketch, SketchError, Snapshot};

pub use probabilistic::{
    Centroid, CountMinSketch, CountMinSketchState, FixedCountSampler, FixedCountState,
    HyperLogLog, HyperLogLogState, ReservoirSampler, ReservoirState, SlidingHyperLogLog,
    SlidingHyperLogLogState, TDigest, TDigestState, TopK, TopKState,
};
