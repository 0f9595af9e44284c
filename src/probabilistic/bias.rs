// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! HyperLogLog estimator tables and the shared two-regime estimate.
//!
//! Both the plain and the sliding HyperLogLog reduce their state to a register
//! snapshot and call [`estimate`], so the two always agree on the same registers.

use super::bias_tables::{BIAS_KNOTS, KNOTS};
use crate::config::{MAX_PRECISION, MIN_PRECISION};

/// Linear counting thresholds indexed by `p - 4` (HyperLogLog++ empirical values).
const THRESHOLDS: [f64; 15] = [
    10.0, 20.0, 40.0, 80.0, 220.0, 400.0, 900.0, 1800.0, 3100.0, 6500.0, 11500.0, 20000.0,
    50000.0, 120000.0, 350000.0,
];

pub(crate) fn alpha(precision: u8) -> f64 {
    match precision {
        4 => 0.673,
        5 => 0.697,
        6 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (1u64 << precision) as f64),
    }
}

pub(crate) fn threshold(precision: u8) -> f64 {
    THRESHOLDS[(precision - MIN_PRECISION) as usize]
}

/// Register index and rank of a 64-bit hash.
///
/// The low `precision` bits pick the register; the rank is one plus the number
/// of leading zeros of the remaining `64 - precision` bits.
#[inline]
pub(crate) fn index_and_rank(hash: u64, precision: u8) -> (usize, u8) {
    let index = (hash & ((1u64 << precision) - 1)) as usize;
    let remaining = hash >> precision;
    let width = 64 - precision as u32;
    let rank = if remaining == 0 {
        width + 1
    } else {
        remaining.leading_zeros() - precision as u32 + 1
    };
    (index, rank as u8)
}

/// Expected overshoot of the raw estimator when it reads `estimate`.
///
/// Interpolates linearly between the knots of the precision's table and
/// clamps to the end knots outside it.
pub(crate) fn estimate_bias(estimate: f64, precision: u8) -> f64 {
    debug_assert!((MIN_PRECISION..=MAX_PRECISION).contains(&precision));
    let m = (1u64 << precision) as f64;
    let knots = &BIAS_KNOTS[(precision - MIN_PRECISION) as usize];
    let x = estimate / m;
    let upper = knots.partition_point(|&(raw, _)| raw < x);
    let bias = match upper {
        0 => knots[0].1,
        KNOTS => knots[KNOTS - 1].1,
        _ => {
            let (x0, y0) = knots[upper - 1];
            let (x1, y1) = knots[upper];
            y0 + (x - x0) / (x1 - x0) * (y1 - y0)
        }
    };
    bias * m
}

/// Bias-corrected raw estimate for a register snapshot.
fn raw_corrected(sum: f64, precision: u8) -> f64 {
    let m = (1u64 << precision) as f64;
    let raw = alpha(precision) * m * m / sum;
    if raw <= 5.0 * m {
        raw - estimate_bias(raw, precision)
    } else {
        raw
    }
}

/// Cardinality of a register snapshot.
///
/// Uses linear counting while it stays under the precision's threshold,
/// otherwise the bias-corrected raw estimate.
pub(crate) fn estimate<I>(registers: I, precision: u8) -> f64
where
    I: IntoIterator<Item = u8>,
{
    let m = (1u64 << precision) as f64;
    let mut sum = 0.0;
    let mut zeros = 0usize;
    for rank in registers {
        if rank == 0 {
            zeros += 1;
        }
        sum += 2f64.powi(-(rank as i32));
    }
    if zeros > 0 {
        let linear = m * (m / zeros as f64).ln();
        if linear <= threshold(precision) {
            return linear;
        }
    }
    raw_corrected(sum, precision).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_rank() {
        // All remaining bits zero: rank is capped at 64 - p + 1.
        assert_eq!(index_and_rank(0b1010, 4), (10, 61));
        // Top bit set: no leading zeros within the remaining bits.
        assert_eq!(index_and_rank(1u64 << 63, 4), (0, 1));
        // One leading zero within the remaining 60 bits.
        assert_eq!(index_and_rank((1u64 << 62) | 3, 4), (3, 2));
    }

    #[test]
    fn test_empty_registers_estimate_zero() {
        let registers = vec![0u8; 1 << 10];
        assert_eq!(estimate(registers, 10), 0.0);
    }

    #[test]
    fn test_bias_knots_track_cardinality() {
        for knots in &BIAS_KNOTS {
            assert!(knots.windows(2).all(|w| w[0].0 < w[1].0));
            // The raw estimator overshoots badly when most registers are empty.
            assert!(knots[1].1 > 0.0);
            for (i, &(raw, bias)) in knots.iter().enumerate() {
                let cardinality = i as f64 / 8.0;
                assert!((raw - bias - cardinality).abs() < 0.02, "knot {}", i);
            }
        }
    }

    #[test]
    fn test_estimate_bias_interpolates_between_knots() {
        let m = (1u64 << 10) as f64;
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9 * m;
        let (x0, y0) = BIAS_KNOTS[6][8];
        let (x1, y1) = BIAS_KNOTS[6][9];
        assert!(close(estimate_bias(x0 * m, 10), y0 * m));
        assert!(close(estimate_bias((x0 + x1) / 2.0 * m, 10), (y0 + y1) / 2.0 * m));
        assert!(close(estimate_bias(0.0, 10), BIAS_KNOTS[6][0].1 * m));
        assert!(close(estimate_bias(100.0 * m, 10), BIAS_KNOTS[6][KNOTS - 1].1 * m));
    }

    #[test]
    fn test_thresholds_cover_all_precisions() {
        for p in MIN_PRECISION..=MAX_PRECISION {
            assert!(threshold(p) > 0.0);
            assert!(estimate_bias(alpha(p) * 2.0 * (1u64 << p) as f64, p).is_finite());
        }
    }
}
