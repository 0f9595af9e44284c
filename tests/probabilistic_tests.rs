// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use stream_sketches::{
    CountMinSketch, FixedCountSampler, HyperLogLog, Mergeable, ReservoirSampler, Sketch,
    SketchError, SlidingHyperLogLog, Snapshot, TDigest, TopK,
};

fn hex_keys() -> Vec<String> {
    (0..128).map(|x| format!("{:02x}", x)).collect()
}

fn percent_diff(x: f64, expected: f64) -> f64 {
    (expected - x).abs() / expected
}

// ============================================================================
// HyperLogLog
// ============================================================================

#[test]
fn test_hyperloglog_push() {
    let mut hll = HyperLogLog::new(0.00408).unwrap();
    for x in 0..10 {
        hll.push(&x);
    }
    assert_eq!(hll.len().round(), 10.0);
}

#[test]
fn test_hyperloglog_empty() {
    let mut hll = HyperLogLog::new(0.00408).unwrap();
    assert!(hll.is_empty());
    hll.push("a");
    assert!(!hll.is_empty());
}

#[test]
fn test_hyperloglog_union() {
    let mut hll1 = HyperLogLog::new(0.00408).unwrap();
    let mut hll2 = HyperLogLog::new(0.00408).unwrap();
    for x in 0..10 {
        hll1.push(&x);
        hll2.push(&(x + 10));
    }
    assert_eq!(hll1.len().round(), 10.0);
    assert_eq!(hll2.len().round(), 10.0);

    hll1.union(&hll2).unwrap();
    assert_eq!(hll1.len().round(), 20.0);
}

#[test]
fn test_hyperloglog_intersect() {
    let mut hll1 = HyperLogLog::new(0.00408).unwrap();
    let mut hll2 = HyperLogLog::new(0.00408).unwrap();
    for x in 0..10 {
        hll1.push(&x);
        hll2.push(&(x + 5));
    }

    let shared = hll1.intersect(&hll2).unwrap();
    assert_eq!(shared.round(), 5.0);
    // The receiver now holds the union.
    assert_eq!(hll1.len().round(), 15.0);
}

#[test]
fn test_hyperloglog_disjoint_intersect_is_not_negative() {
    let mut hll1 = HyperLogLog::new(0.01).unwrap();
    let mut hll2 = HyperLogLog::new(0.01).unwrap();
    for x in 0..5000 {
        hll1.push(&x);
        hll2.push(&(x + 100_000));
    }
    assert!(hll1.intersect(&hll2).unwrap() >= 0.0);
}

#[test]
fn test_hyperloglog_clear() {
    let mut hll = HyperLogLog::new(0.00408).unwrap();
    for x in 0..10 {
        hll.push(&x);
    }
    assert!(!hll.is_empty());
    hll.clear();
    assert!(hll.is_empty());
    assert_eq!(hll.len(), 0.0);
    assert!(hll.try_eq(&HyperLogLog::new(0.00408).unwrap()).unwrap());
}

#[test]
fn test_hyperloglog_error_rates() {
    assert!(matches!(
        HyperLogLog::new(0.0),
        Err(SketchError::InvalidConfiguration(_))
    ));
    assert!(HyperLogLog::new(1.5).is_err());
    assert_eq!(HyperLogLog::new(0.5).unwrap().precision(), 4);
}

#[test]
fn test_hyperloglog_accuracy_across_ranges() {
    for &n in &[100u64, 1_000, 10_000, 50_000] {
        let mut hll = HyperLogLog::new(0.01).unwrap();
        for i in 0..n {
            hll.push(&format!("user{}", i));
        }
        let relative = percent_diff(hll.len(), n as f64);
        assert!(relative < 0.05, "n = {}, relative error = {}", n, relative);
    }
}

#[test]
fn test_hyperloglog_small_precisions_are_unbiased() {
    let trials = 2000u64;
    for precision in 4..=6u8 {
        let m = 1u64 << precision;
        let error_rate = 1.04 / (m as f64).sqrt();
        let bound = 3.0 * error_rate / (trials as f64).sqrt();
        for n in [m, 2 * m, 4 * m] {
            let mut total = 0.0;
            for trial in 0..trials {
                let mut hll = HyperLogLog::with_precision(precision).unwrap();
                for i in 0..n {
                    hll.push(&(trial * 1_000_000 + i));
                }
                total += hll.len();
            }
            let mean_error = total / trials as f64 / n as f64 - 1.0;
            assert!(
                mean_error.abs() <= bound,
                "p = {}, n = {}, mean relative error = {}",
                precision,
                n,
                mean_error
            );
        }
    }
}

// ============================================================================
// Sliding HyperLogLog
// ============================================================================

#[test]
fn test_sliding_hyperloglog_windows() {
    let mut shll = SlidingHyperLogLog::new(0.01, 1000).unwrap();
    for ts in 0..1000u64 {
        shll.add(ts, &ts);
    }
    let recent = shll.card(999, 99).unwrap();
    assert!(percent_diff(recent, 100.0) < 0.05, "recent = {}", recent);
    let all = shll.cardinality(999);
    assert!(percent_diff(all, 1000.0) < 0.05, "all = {}", all);
}

#[test]
fn test_sliding_hyperloglog_batch_matches_single_queries() {
    let mut shll = SlidingHyperLogLog::new(0.02, 500).unwrap();
    for ts in 0..2000u64 {
        shll.add(ts, &(ts % 700));
    }
    let windows = [500, 1, 250, 50, 499];
    let batch = shll.card_batch(1999, &windows).unwrap();
    for (&window, estimate) in windows.iter().zip(batch) {
        assert_eq!(estimate, shll.card(1999, window).unwrap());
    }
}

#[test]
fn test_sliding_hyperloglog_window_matches_plain_sketch() {
    let mut shll = SlidingHyperLogLog::new(0.01, 1000).unwrap();
    for ts in 0..3000u64 {
        shll.add(ts, &(ts % 1700));
    }
    for window in [10u64, 100, 500, 999] {
        let mut hll = HyperLogLog::new(0.01).unwrap();
        for ts in 2999 - window..3000 {
            hll.push(&(ts % 1700));
        }
        assert_eq!(shll.card(2999, window).unwrap(), hll.len(), "window = {}", window);
    }
}

#[test]
fn test_sliding_hyperloglog_old_values_age_out() {
    let mut shll = SlidingHyperLogLog::new(0.01, 100).unwrap();
    for i in 0..50 {
        shll.add(0, &format!("old{}", i));
    }
    shll.add(500, "new");
    assert_eq!(shll.cardinality(500).round(), 1.0);
}

#[test]
fn test_sliding_hyperloglog_union() {
    let mut a = SlidingHyperLogLog::new(0.01, 100).unwrap();
    let mut b = SlidingHyperLogLog::new(0.01, 100).unwrap();
    let mut both = SlidingHyperLogLog::new(0.01, 100).unwrap();
    for ts in 0..100u64 {
        if ts % 2 == 0 {
            a.add(ts, &ts);
        } else {
            b.add(ts, &ts);
        }
        both.add(ts, &ts);
    }
    a.union(&b).unwrap();
    assert!(a.try_eq(&both).unwrap());
    assert_eq!(a.cardinality(99), both.cardinality(99));
}

#[test]
fn test_sliding_hyperloglog_rejects_other_precision() {
    let mut a = SlidingHyperLogLog::new(0.01, 100).unwrap();
    let b = SlidingHyperLogLog::new(0.1, 100).unwrap();
    assert!(matches!(
        a.update(&[&b]),
        Err(SketchError::IncompatiblePrecision { .. })
    ));
}

// ============================================================================
// Count-Min Sketch
// ============================================================================

#[test]
fn test_count_min_sketch_push() {
    let mut cms = CountMinSketch::new(0.99, 0.002).unwrap();
    for (i, x) in hex_keys().iter().enumerate() {
        cms.push(x.as_str(), i as u64);
    }
    assert_eq!(cms.get("00"), 0);
    assert_eq!(cms.get("3f"), 63);
    assert_eq!(cms.get("7f"), 127);
}

#[test]
fn test_count_min_sketch_clear() {
    let mut cms = CountMinSketch::new(0.99, 0.002).unwrap();
    for (i, x) in hex_keys().iter().enumerate() {
        cms.push(x.as_str(), i as u64);
    }
    assert_eq!(cms.get("7f"), 127);
    cms.clear();
    assert_eq!(cms.get("7f"), 0);
    assert!(cms.is_empty());
}

#[test]
fn test_count_min_sketch_rejects_unaddressable_dimensions() {
    assert!(matches!(
        CountMinSketch::new(0.99, 1e-20),
        Err(SketchError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        CountMinSketch::with_dimensions(usize::MAX, 2),
        Err(SketchError::InvalidConfiguration(_))
    ));
    assert!(CountMinSketch::with_dimensions(0, 4).is_err());
}

// ============================================================================
// TopK
// ============================================================================

#[test]
fn test_topk_push() {
    let mut topk = TopK::new(5, 0.99, 0.002).unwrap();
    for (i, x) in hex_keys().into_iter().enumerate() {
        topk.push(x, i as u64 + 1);
    }
    let top: Vec<(String, u64)> = topk.top();
    let expected = [("7f", 128), ("7e", 127), ("7d", 126), ("7c", 125), ("7b", 124)];
    assert_eq!(top.len(), expected.len());
    for ((key, frequency), (want_key, want_frequency)) in top.iter().zip(expected) {
        assert_eq!(key, want_key);
        assert_eq!(*frequency, want_frequency);
    }
}

#[test]
fn test_topk_clear() {
    let mut topk = TopK::new(5, 0.99, 0.002).unwrap();
    for (i, x) in hex_keys().into_iter().enumerate() {
        topk.push(x, i as u64 + 1);
    }
    assert!(!topk.top().is_empty());
    topk.clear();
    assert!(topk.top().is_empty());
}

#[test]
fn test_topk_capacity() {
    let topk = TopK::<String>::new(48, 0.99, 0.002).unwrap();
    assert_eq!(topk.capacity(), 48);
}

#[test]
fn test_topk_merge() {
    let mut topk1 = TopK::new(3, 0.99, 0.002).unwrap();
    topk1.push("apple", 10);
    topk1.push("banana", 5);

    let mut topk2 = TopK::new(3, 0.99, 0.002).unwrap();
    topk2.push("banana", 15);
    topk2.push("cherry", 25);

    topk1.union(&topk2).unwrap();

    // banana: 5+15=20, cherry: 25, apple: 10
    assert_eq!(
        topk1.top(),
        vec![("cherry", 25), ("banana", 20), ("apple", 10)]
    );
    assert!(topk1.validate().is_ok());
}

#[test]
fn test_topk_merge_rejects_other_capacity() {
    let mut topk1 = TopK::<&str>::new(3, 0.99, 0.002).unwrap();
    let topk2 = TopK::<&str>::new(4, 0.99, 0.002).unwrap();
    assert!(topk1.union(&topk2).is_err());
}

// ============================================================================
// TDigest
// ============================================================================

fn shuffled_0_to_32() -> Vec<f64> {
    // Fixed permutation of 0..=32 (stride 7 is coprime with 33).
    (0..33).map(|i| ((i * 7) % 33) as f64).collect()
}

#[test]
fn test_tdigest_unsorted_push() {
    let mut td = TDigest::new(10).unwrap();
    td.push_unsorted(&shuffled_0_to_32());
    assert!(percent_diff(td.estimate_value(0.5).unwrap(), 16.0) < 0.05);
}

#[test]
fn test_tdigest_sorted_push() {
    let mut td = TDigest::new(10).unwrap();
    td.push_sorted(&(0..33).map(f64::from).collect::<Vec<_>>());
    assert!(percent_diff(td.estimate_value(0.5).unwrap(), 16.0) < 0.05);
}

#[test]
fn test_tdigest_estimation() {
    let mut td = TDigest::new(10).unwrap();
    td.push_sorted(&(0..33).map(f64::from).collect::<Vec<_>>());

    let q = td.estimate_quantile(20.0).unwrap();
    let v = td.estimate_value(q).unwrap();
    assert!(percent_diff(v, 20.0) < 0.05);

    let v = td.estimate_value(0.5).unwrap();
    let q = td.estimate_quantile(v).unwrap();
    assert!(percent_diff(q, 0.5) < 0.05);
}

#[test]
fn test_tdigest_basic() {
    let mut td = TDigest::new(100).unwrap();
    for i in 1..=100 {
        td.push(i as f64);
    }
    let p50 = td.estimate_value(0.5).unwrap();
    let p99 = td.estimate_value(0.99).unwrap();
    assert!((p50 - 50.0).abs() < 1.0);
    assert!((p99 - 99.0).abs() < 1.0);
}

#[test]
fn test_tdigest_merge() {
    let mut td1 = TDigest::new(100).unwrap();
    td1.push_sorted(&(1..=50).map(f64::from).collect::<Vec<_>>());
    let mut td2 = TDigest::new(100).unwrap();
    td2.push_sorted(&(51..=100).map(f64::from).collect::<Vec<_>>());

    td1.union(&td2).unwrap();
    let p50 = td1.estimate_value(0.5).unwrap();
    assert!((p50 - 50.0).abs() < 1.0);
    assert_eq!(td1.count(), 100);
    assert_eq!(td1.min(), Some(1.0));
    assert_eq!(td1.max(), Some(100.0));
}

#[test]
fn test_tdigest_clear() {
    let mut td = TDigest::new(25).unwrap();
    td.push_unsorted(&shuffled_0_to_32());
    td.push(-4.5);
    assert!(!td.is_empty());

    td.clear();
    assert!(td.is_empty());
    assert_eq!(td.snapshot(), TDigest::new(25).unwrap().snapshot());
    assert_eq!(td.estimate_value(0.5), None);
}

#[test]
fn test_tdigest_large_stream() {
    let mut td = TDigest::new(100).unwrap();
    let values: Vec<f64> = (0..100_000).map(|i| ((i * 7919) % 100_000) as f64).collect();
    for chunk in values.chunks(1000) {
        td.push_unsorted(chunk);
    }
    assert!(td.centroids().len() <= 100);
    for &q in &[0.01, 0.1, 0.5, 0.9, 0.99] {
        let v = td.estimate_value(q).unwrap();
        assert!((v - q * 100_000.0).abs() < 1000.0, "q = {}, v = {}", q, v);
    }
}

// ============================================================================
// Samplers
// ============================================================================

#[test]
fn test_reservoir_unseeded() {
    let mut sampler = ReservoirSampler::new(10, None).unwrap();
    for i in 0..100 {
        sampler.push(i);
    }
    assert_eq!(sampler.reservoir().len(), 10);
    assert!(sampler.reservoir().iter().all(|x| (0..100).contains(x)));
}

#[test]
fn test_reservoir_seeded() {
    let run = |seed| {
        let mut sampler = ReservoirSampler::new(10, Some(seed)).unwrap();
        for i in 0..100 {
            sampler.push(i);
        }
        sampler.reservoir().to_vec()
    };
    let res_1 = run(727);
    let res_2 = run(727);
    let res_3 = run(728);
    assert_eq!(res_1.len(), 10);
    assert_eq!(res_3.len(), 10);
    assert_eq!(res_1, res_2);
    assert_ne!(res_1, res_3);
}

#[test]
fn test_reservoir_is_roughly_uniform() {
    let mut hits = [0u32; 10];
    for seed in 0..2000 {
        let mut sampler = ReservoirSampler::new(1, Some(seed)).unwrap();
        for i in 0..10 {
            sampler.push(i);
        }
        hits[sampler.reservoir()[0]] += 1;
    }
    // Each slot expects 200 hits.
    assert!(hits.iter().all(|&h| (120..=280).contains(&h)), "{:?}", hits);
}

#[test]
fn test_fixed_count_unseeded() {
    let mut sampler = FixedCountSampler::new(100, 20, None).unwrap();
    let sampled = (0..100).filter(|_| sampler.sample().unwrap()).count();
    assert_eq!(sampled, 20);
}

#[test]
fn test_fixed_count_seeded() {
    let run = |seed| {
        let mut sampler = FixedCountSampler::new(100, 20, Some(seed)).unwrap();
        (0..100)
            .map(|_| sampler.sample().unwrap())
            .collect::<Vec<bool>>()
    };
    let sampled_1 = run(727);
    let sampled_2 = run(727);
    let sampled_3 = run(728);
    for sampled in [&sampled_1, &sampled_2, &sampled_3] {
        assert_eq!(sampled.iter().filter(|&&s| s).count(), 20);
    }
    assert_eq!(sampled_1, sampled_2);
    assert_ne!(sampled_1, sampled_3);
}

#[test]
fn test_fixed_count_rejects_oversized_sample() {
    assert!(matches!(
        FixedCountSampler::new(10, 11, None),
        Err(SketchError::InvalidConfiguration(_))
    ));
}
