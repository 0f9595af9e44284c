// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Value hashing
//!
//! Every sketch turns its input into a 64-bit integer through a [`HashRouter`].
//! Any [`BuildHasher`] is a router, so callers can plug in their own hash
//! function; the default [`SipRouter`] uses SipHash-1-3 with fixed keys so that
//! two processes hashing the same value agree and snapshots stay meaningful.

use siphasher::sip::SipHasher13;
use std::hash::{BuildHasher, Hash, Hasher};

const DEFAULT_K0: u64 = 0x0706_0504_0302_0100;
const DEFAULT_K1: u64 = 0x0f0e_0d0c_0b0a_0908;

/// Maps arbitrary hashable values to uniformly distributed 64-bit integers.
pub trait HashRouter {
    fn route<T: Hash + ?Sized>(&self, value: &T) -> u64;

    /// Hashes `value` under an independent seed, used for the rows of a
    /// Count-Min matrix.
    fn route_seeded<T: Hash + ?Sized>(&self, seed: u64, value: &T) -> u64;
}

impl<S: BuildHasher> HashRouter for S {
    #[inline]
    fn route<T: Hash + ?Sized>(&self, value: &T) -> u64 {
        let mut hasher = self.build_hasher();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[inline]
    fn route_seeded<T: Hash + ?Sized>(&self, seed: u64, value: &T) -> u64 {
        let mut hasher = self.build_hasher();
        hasher.write_u64(seed);
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// Deterministic SipHash-1-3 router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipRouter {
    k0: u64,
    k1: u64,
}

impl SipRouter {
    pub fn new() -> Self {
        Self::with_keys(DEFAULT_K0, DEFAULT_K1)
    }

    pub fn with_keys(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }
}

impl Default for SipRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildHasher for SipRouter {
    type Hasher = SipHasher13;

    fn build_hasher(&self) -> SipHasher13 {
        SipHasher13::new_with_keys(self.k0, self.k1)
    }
}

/// SplitMix64 finalizer, used to derive independent per-row seeds.
#[inline]
pub(crate) fn mix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sip_router_is_deterministic() {
        let a = SipRouter::new();
        let b = SipRouter::default();
        assert_eq!(a.route("apple"), b.route("apple"));
        assert_ne!(a.route("apple"), a.route("banana"));
    }

    #[test]
    fn test_seeds_give_independent_hashes() {
        let router = SipRouter::new();
        let h0 = router.route_seeded(mix64(0), &42u32);
        let h1 = router.route_seeded(mix64(1), &42u32);
        assert_ne!(h0, h1);
        assert_eq!(h0, router.route_seeded(mix64(0), &42u32));
    }

    #[test]
    fn test_keys_change_the_hash() {
        let a = SipRouter::with_keys(1, 2);
        let b = SipRouter::with_keys(3, 4);
        assert_ne!(a.route(&7u64), b.route(&7u64));
    }
}
