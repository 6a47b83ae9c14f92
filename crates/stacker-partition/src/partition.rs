//! Stick-breaking partition with locked segments.
//!
//! ```text
//! result[locked]   = lock value
//! remaining        = total - Σ locks
//! cuts             = sort(u₁ … u_{k-1}) bracketed by 0.0 and 1.0
//! result[unlocked] = round₄((cut[i+1] - cut[i]) × remaining), in slot order
//! ```
//!
//! The rounding residual goes to the largest share (first on ties), so
//! the unlocked shares sum to `remaining` at 4-decimal precision.

use std::collections::BTreeMap;

use rand::Rng;
use stacker_core::constants::ROUNDING_DECIMALS;
use stacker_core::errors::PartitionError;
use tracing::debug;

use crate::rounding::round_to;
use crate::sampling::seeded_rng;

/// Slot index → pinned value. Indices outside `[0, segments)` are ignored.
pub type LockMap = BTreeMap<usize, f64>;

/// Partition `total` across `segments` slots with a fresh generator
/// seeded from `seed`.
///
/// Supported magnitude: `|total|` up to about `1e6`. Shares are rounded
/// by scaling with `1e4`, so far beyond that range f64 precision runs out
/// and the sum can drift past `SUM_TOLERANCE`. UI budgets are capped at 10.0.
pub fn partition(
    total: f64,
    segments: usize,
    locks: &LockMap,
    seed: Option<u64>,
) -> Result<Vec<f64>, PartitionError> {
    let mut rng = seeded_rng(seed);
    partition_with_rng(total, segments, locks, &mut rng)
}

/// Entry point for loosely typed callers: negative counts are rejected.
pub fn partition_signed(
    total: f64,
    segments: i64,
    locks: &LockMap,
    seed: Option<u64>,
) -> Result<Vec<f64>, PartitionError> {
    let segments = usize::try_from(segments)
        .map_err(|_| PartitionError::NegativeSegmentCount { count: segments })?;
    partition(total, segments, locks, seed)
}

/// Partition `total` across `segments` slots drawing from `rng`.
pub fn partition_with_rng<R: Rng + ?Sized>(
    total: f64,
    segments: usize,
    locks: &LockMap,
    rng: &mut R,
) -> Result<Vec<f64>, PartitionError> {
    if !total.is_finite() {
        return Err(PartitionError::NonFiniteTotal { total });
    }
    let _span = stacker_core::partition_span!(total, segments).entered();

    let mut result = vec![0.0; segments];
    let mut locked_total = 0.0;
    for (&index, &value) in locks.range(..segments) {
        if !value.is_finite() {
            return Err(PartitionError::NonFiniteLock { index, value });
        }
        result[index] = value;
        locked_total += value;
    }

    let remaining = total - locked_total;
    if !remaining.is_finite() {
        return Err(PartitionError::NonFiniteRemaining { remaining });
    }

    let unlocked: Vec<usize> = (0..segments).filter(|i| !locks.contains_key(i)).collect();

    if unlocked.is_empty() || remaining <= 0.0 {
        debug!(
            remaining,
            unlocked = unlocked.len(),
            "nothing to distribute; unlocked slots stay at zero"
        );
        return Ok(result);
    }

    if let [only] = unlocked[..] {
        result[only] = remaining;
        return Ok(result);
    }

    let shares = stick_break(remaining, unlocked.len(), rng);
    for (index, share) in unlocked.into_iter().zip(shares) {
        result[index] = share;
    }

    Ok(result)
}

/// Split `remaining` into `pieces` rounded shares using sorted uniform cuts.
///
/// The rounding residual goes to the largest share. When a negative
/// residual would push that share below zero (budgets of a few 1e-4,
/// where shares round up), the deficit is taken from shares in
/// descending order instead, so no share goes negative.
fn stick_break<R: Rng + ?Sized>(remaining: f64, pieces: usize, rng: &mut R) -> Vec<f64> {
    let mut cuts = Vec::with_capacity(pieces + 1);
    cuts.push(0.0);
    cuts.extend((1..pieces).map(|_| rng.gen::<f64>()));
    cuts[1..].sort_by(f64::total_cmp);
    cuts.push(1.0);

    let mut shares: Vec<f64> = cuts
        .windows(2)
        .map(|w| round_to((w[1] - w[0]) * remaining, ROUNDING_DECIMALS))
        .collect();

    let diff = round_to(remaining - shares.iter().sum::<f64>(), ROUNDING_DECIMALS);
    if diff != 0.0 {
        let largest = index_of_largest(&shares);
        if shares[largest] + diff >= 0.0 {
            shares[largest] += diff;
            debug!(diff, slot = largest, "rounding residual assigned to largest share");
        } else {
            absorb_deficit(&mut shares, -diff);
            debug!(diff, "rounding residual spread over largest shares");
        }
    }

    shares
}

/// Remove `deficit` from `shares`, largest first (first occurrence on
/// ties), never taking a share below zero.
fn absorb_deficit(shares: &mut [f64], mut deficit: f64) {
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| shares[b].total_cmp(&shares[a]));
    for i in order {
        if deficit <= 0.0 {
            break;
        }
        let take = deficit.min(shares[i]);
        shares[i] = round_to(shares[i] - take, ROUNDING_DECIMALS);
        deficit = round_to(deficit - take, ROUNDING_DECIMALS);
    }
}

/// Index of the largest value, first occurrence on ties.
fn index_of_largest(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
