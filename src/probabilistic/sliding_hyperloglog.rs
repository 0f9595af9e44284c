// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::{precision_for_register_count, SlidingHyperLogLogConfig};
use crate::hash::{HashRouter, SipRouter};
use crate::probabilistic::bias;
use crate::traits::{Mergeable, Sketch, SketchError, Snapshot};
use serde::{Deserialize, Serialize};
use std::hash::{BuildHasher, Hash};

/// One `(timestamp, rank)` observation in a register's window list.
pub type Observation = (u64, u8);

/// Flat state of a [`SlidingHyperLogLog`]: one ordered window list per register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingHyperLogLogState {
    pub window: u64,
    pub registers: Vec<Vec<Observation>>,
}

/// Sliding HyperLogLog - Cardinality over a trailing time window
///
/// Instead of one rank per register, each register keeps the observations that
/// could still be the maximum for some window ending at or after the newest
/// timestamp seen by that register. Lists are ordered by timestamp and form a
/// staircase: going back in time, every surviving entry has a strictly higher
/// rank than all newer ones, and nothing older than `newest - W` is kept. A list
/// therefore holds about `log(W)` entries, however long the stream runs.
///
/// A query for `(t, w)` takes, per register, the highest rank observed at or
/// after `t - w` and feeds that snapshot to the same estimator as
/// [`HyperLogLog`](crate::HyperLogLog).
///
/// # Example
///
/// ```
/// use stream_sketches::SlidingHyperLogLog;
///
/// let mut shll = SlidingHyperLogLog::new(0.01, 100).unwrap();
/// for ts in 0..100u64 {
///     shll.add(ts, &format!("user{}", ts % 40));
/// }
///
/// // Ticks 90..=99 only: ten distinct users.
/// assert_eq!(shll.card(99, 9).unwrap().round(), 10.0);
/// // The whole window: forty distinct users.
/// assert_eq!(shll.cardinality(99).round(), 40.0);
/// ```
#[derive(Debug, Clone)]
pub struct SlidingHyperLogLog<S = SipRouter> {
    window: u64,
    precision: u8,
    /// An empty list means the register has seen nothing inside the horizon.
    registers: Vec<Vec<Observation>>,
    hasher: S,
}

impl SlidingHyperLogLog {
    pub fn new(error_rate: f64, window: u64) -> Result<Self, SketchError> {
        Self::with_config(SlidingHyperLogLogConfig { error_rate, window })
    }

    pub fn with_config(config: SlidingHyperLogLogConfig) -> Result<Self, SketchError> {
        Self::with_hasher(config, SipRouter::new())
    }

    /// Rebuilds a sketch from per-register window lists.
    ///
    /// Each list is re-pruned, so any timestamp-ordered history is accepted.
    pub fn from_registers(
        window: u64,
        registers: Vec<Vec<Observation>>,
    ) -> Result<Self, SketchError> {
        Self::from_registers_with_hasher(window, registers, SipRouter::new())
    }
}

impl<S: BuildHasher + Clone> SlidingHyperLogLog<S> {
    pub fn with_hasher(config: SlidingHyperLogLogConfig, hasher: S) -> Result<Self, SketchError> {
        config.validate()?;
        let precision = config.precision()?;
        tracing::debug!(
            precision,
            registers = 1usize << precision,
            window = config.window,
            "creating SlidingHyperLogLog"
        );
        Ok(Self {
            window: config.window,
            precision,
            registers: vec![Vec::new(); 1 << precision],
            hasher,
        })
    }

    pub fn from_registers_with_hasher(
        window: u64,
        registers: Vec<Vec<Observation>>,
        hasher: S,
    ) -> Result<Self, SketchError> {
        if window == 0 {
            return Err(SketchError::InvalidConfiguration(
                "window must be positive".into(),
            ));
        }
        let precision = precision_for_register_count(registers.len())?;
        let max_rank = 64 - precision + 1;
        let mut pruned = Vec::with_capacity(registers.len());
        for list in registers {
            if list.windows(2).any(|pair| pair[0] > pair[1]) {
                return Err(SketchError::invalid_state(
                    "window list is not ordered by timestamp",
                ));
            }
            if list.iter().any(|&(_, rank)| rank == 0 || rank > max_rank) {
                return Err(SketchError::invalid_state(format!(
                    "window list rank outside [1, {}]",
                    max_rank
                )));
            }
            pruned.push(prune(list, window));
        }
        Ok(Self {
            window,
            precision,
            registers: pruned,
            hasher,
        })
    }

    /// Records `value` as seen at `timestamp`.
    ///
    /// Timestamps may arrive out of order; the observation is merged into place
    /// and the register's list is re-pruned against its newest timestamp.
    pub fn add<T: Hash + ?Sized>(&mut self, timestamp: u64, value: &T) {
        let (index, rank) = bias::index_and_rank(self.hasher.route(value), self.precision);
        let list = &mut self.registers[index];
        let observation = (timestamp, rank);
        let at = list.partition_point(|&existing| existing <= observation);
        list.insert(at, observation);
        prune_in_place(list, self.window);
    }

    /// Estimated number of distinct values seen in `[timestamp - window, ...]`.
    pub fn card(&self, timestamp: u64, window: u64) -> Result<f64, SketchError> {
        self.check_window(window)?;
        Ok(self.estimate_since(timestamp.saturating_sub(window)))
    }

    /// Estimated number of distinct values over the full window `W`.
    pub fn cardinality(&self, timestamp: u64) -> f64 {
        self.estimate_since(timestamp.saturating_sub(self.window))
    }

    fn estimate_since(&self, start: u64) -> f64 {
        let snapshot = self.registers.iter().map(|list| {
            list.iter()
                .filter(|&&(ts, _)| ts >= start)
                .map(|&(_, rank)| rank)
                .max()
                .unwrap_or(0)
        });
        bias::estimate(snapshot, self.precision)
    }

    /// Answers several windows at once with a single backward pass per register.
    ///
    /// Results are identical to calling [`card`](Self::card) for each window.
    pub fn card_batch(&self, timestamp: u64, windows: &[u64]) -> Result<Vec<f64>, SketchError> {
        for &window in windows {
            self.check_window(window)?;
        }
        if windows.is_empty() {
            return Ok(Vec::new());
        }

        // Window start times ascending; the scan visits them from the latest start back.
        let mut starts: Vec<(u64, usize)> = windows
            .iter()
            .enumerate()
            .map(|(slot, &window)| (timestamp.saturating_sub(window), slot))
            .collect();
        starts.sort_unstable();

        let m = self.registers.len();
        let mut snapshots = vec![vec![0u8; m]; windows.len()];
        for (register, list) in self.registers.iter().enumerate() {
            let mut best = 0u8;
            let mut pending = starts.len();
            for &(ts, rank) in list.iter().rev() {
                // Every window starting after `ts` has seen all it will see.
                while pending > 0 && ts < starts[pending - 1].0 {
                    snapshots[starts[pending - 1].1][register] = best;
                    pending -= 1;
                }
                if pending == 0 {
                    break;
                }
                best = best.max(rank);
            }
            for &(_, slot) in &starts[..pending] {
                snapshots[slot][register] = best;
            }
        }

        Ok(snapshots
            .into_iter()
            .map(|snapshot| bias::estimate(snapshot, self.precision))
            .collect())
    }

    /// Merges every sketch in `others` into this one with a multi-way merge per register.
    pub fn update(&mut self, others: &[&Self]) -> Result<(), SketchError> {
        for other in others {
            self.check_compatible(other)?;
        }
        tracing::debug!(operands = others.len() + 1, "merging SlidingHyperLogLog");
        for (index, list) in self.registers.iter_mut().enumerate() {
            let sources = others.iter().map(|other| other.registers[index].as_slice());
            let merged = merge_lists(list.as_slice(), sources);
            *list = prune(merged, self.window);
        }
        Ok(())
    }

    pub fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        self.update(&[other])
    }

    /// Two sketches are equal when every pruned window list matches exactly.
    pub fn try_eq(&self, other: &Self) -> Result<bool, SketchError> {
        self.check_compatible(other)?;
        Ok(self.registers == other.registers)
    }

    pub fn clear(&mut self) {
        for list in &mut self.registers {
            list.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(Vec::is_empty)
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn registers(&self) -> &[Vec<Observation>] {
        &self.registers
    }

    fn check_window(&self, window: u64) -> Result<(), SketchError> {
        if window == 0 || window > self.window {
            return Err(SketchError::InvalidWindow {
                window,
                max: self.window,
            });
        }
        Ok(())
    }

    fn check_compatible(&self, other: &Self) -> Result<(), SketchError> {
        if self.registers.len() != other.registers.len() {
            return Err(SketchError::incompatible(
                format!("{} registers", self.registers.len()),
                format!("{} registers", other.registers.len()),
            ));
        }
        Ok(())
    }
}

/// Merges timestamp-ordered lists into one ordered list.
fn merge_lists<'a, I>(first: &'a [Observation], rest: I) -> Vec<Observation>
where
    I: Iterator<Item = &'a [Observation]>,
{
    let mut cursors: Vec<&[Observation]> = std::iter::once(first)
        .chain(rest)
        .filter(|list| !list.is_empty())
        .collect();
    let total = cursors.iter().map(|list| list.len()).sum();
    let mut merged = Vec::with_capacity(total);
    // Window lists are a handful of entries, so a linear pick beats a heap here.
    while let Some(slot) = (0..cursors.len()).min_by_key(|&slot| cursors[slot][0]) {
        merged.push(cursors[slot][0]);
        cursors[slot] = &cursors[slot][1..];
        if cursors[slot].is_empty() {
            cursors.swap_remove(slot);
        }
    }
    merged
}

/// Keeps the staircase: scanning back from the newest entry, an entry survives
/// only if it is within `window` of the newest timestamp and out-ranks every
/// newer survivor.
fn prune(list: Vec<Observation>, window: u64) -> Vec<Observation> {
    let mut list = list;
    prune_in_place(&mut list, window);
    list
}

fn prune_in_place(list: &mut Vec<Observation>, window: u64) {
    let Some(&(newest, _)) = list.last() else {
        return;
    };
    let horizon = newest.saturating_sub(window);
    let mut kept: Vec<Observation> = Vec::with_capacity(list.len());
    let mut best = 0u8;
    for &(ts, rank) in list.iter().rev() {
        if ts < horizon {
            break;
        }
        if rank > best {
            kept.push((ts, rank));
            best = rank;
        }
    }
    kept.reverse();
    *list = kept;
}

impl<S: BuildHasher + Clone> Sketch for SlidingHyperLogLog<S> {
    fn clear(&mut self) {
        SlidingHyperLogLog::clear(self)
    }

    fn is_empty(&self) -> bool {
        SlidingHyperLogLog::is_empty(self)
    }

    fn validate(&self) -> Result<(), SketchError> {
        for list in &self.registers {
            let Some(&(newest, _)) = list.last() else {
                continue;
            };
            let staircase = list
                .windows(2)
                .all(|pair| pair[0].0 <= pair[1].0 && pair[0].1 > pair[1].1);
            if !staircase || list[0].0 < newest.saturating_sub(self.window) {
                return Err(SketchError::InvalidState(
                    "window list breaks the staircase invariant".into(),
                ));
            }
        }
        Ok(())
    }
}

impl<S: BuildHasher + Clone> Mergeable for SlidingHyperLogLog<S> {
    fn union(&mut self, other: &Self) -> Result<(), SketchError> {
        SlidingHyperLogLog::union(self, other)
    }
}

impl<S: BuildHasher + Clone + Default> Snapshot for SlidingHyperLogLog<S> {
    type State = SlidingHyperLogLogState;

    fn snapshot(&self) -> SlidingHyperLogLogState {
        SlidingHyperLogLogState {
            window: self.window,
            registers: self.registers.clone(),
        }
    }

    fn from_state(state: SlidingHyperLogLogState) -> Result<Self, SketchError> {
        Self::from_registers_with_hasher(state.window, state.registers, S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_keeps_staircase() {
        let list = vec![(1, 5), (2, 3), (3, 4), (4, 1), (5, 2)];
        // Scanning back from (5,2): keep (5,2), skip (4,1), keep (3,4), skip (2,3), keep (1,5).
        assert_eq!(prune(list, 100), vec![(1, 5), (3, 4), (5, 2)]);
    }

    #[test]
    fn test_prune_drops_entries_past_horizon() {
        let list = vec![(1, 9), (50, 3), (100, 1)];
        assert_eq!(prune(list, 60), vec![(50, 3), (100, 1)]);
    }

    #[test]
    fn test_merge_lists_orders_by_timestamp() {
        let a = [(1, 3), (5, 1)];
        let b = [(2, 4), (6, 2)];
        let c: [Observation; 0] = [];
        let merged = merge_lists(&a, [&b[..], &c[..]].into_iter());
        assert_eq!(merged, vec![(1, 3), (2, 4), (5, 1), (6, 2)]);
    }

    #[test]
    fn test_out_of_order_add_is_merged_into_place() {
        let mut shll = SlidingHyperLogLog::from_registers(10, vec![Vec::new(); 16]).unwrap();
        for (ts, value) in [(5u64, "a"), (3, "b"), (9, "c"), (1, "d")] {
            shll.add(ts, value);
        }
        assert!(shll.validate().is_ok());
        for list in shll.registers() {
            assert!(list.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        }
    }

    #[test]
    fn test_invalid_windows() {
        let shll = SlidingHyperLogLog::new(0.05, 60).unwrap();
        assert_eq!(
            shll.card(100, 0),
            Err(SketchError::InvalidWindow { window: 0, max: 60 })
        );
        assert!(shll.card(100, 61).is_err());
        assert!(shll.card_batch(100, &[10, 61]).is_err());
        assert!(shll.card(100, 60).is_ok());
    }

    #[test]
    fn test_from_registers_rejects_unordered_lists() {
        let mut registers = vec![Vec::new(); 16];
        registers[3] = vec![(5, 1), (2, 3)];
        assert!(matches!(
            SlidingHyperLogLog::from_registers(10, registers),
            Err(SketchError::InvalidState(_))
        ));
    }

    #[test]
    fn test_from_registers_reprunes() {
        let mut registers = vec![Vec::new(); 16];
        registers[0] = vec![(1, 1), (2, 5), (3, 2)];
        let shll = SlidingHyperLogLog::from_registers(10, registers).unwrap();
        assert_eq!(shll.registers()[0], vec![(2, 5), (3, 2)]);
    }
}
