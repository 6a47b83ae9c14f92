use proptest::collection::btree_map;
use proptest::prelude::*;
use stacker_core::constants::SUM_TOLERANCE;
use stacker_partition::{partition, LockMap};

fn arb_locks(max_index: usize) -> impl Strategy<Value = LockMap> {
    btree_map(0..max_index, 0.0f64..0.5, 0..4)
}

// ── Sum invariant ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sum_matches_total_or_locked_total(
        total in 0.0f64..10.0,
        segments in 0usize..24,
        locks in arb_locks(30),
        seed in any::<u64>(),
    ) {
        let result = partition(total, segments, &locks, Some(seed)).unwrap();
        prop_assert_eq!(result.len(), segments);

        let in_range: Vec<(usize, f64)> =
            locks.range(..segments).map(|(&i, &v)| (i, v)).collect();
        let locked_total: f64 = in_range.iter().map(|&(_, v)| v).sum();
        let all_locked = in_range.len() == segments;
        let remaining = total - locked_total;
        let sum: f64 = result.iter().sum();

        if segments == 0 {
            prop_assert!(result.is_empty());
        } else if all_locked || remaining <= 0.0 {
            let locked_sum: f64 = in_range.iter().map(|&(i, _)| result[i]).sum();
            prop_assert_eq!(locked_sum, locked_total);
            prop_assert!((sum - locked_total).abs() < 1e-12, "sum {} locked {}", sum, locked_total);
        } else {
            prop_assert!((sum - total).abs() < SUM_TOLERANCE, "sum {} total {}", sum, total);
        }
    }
}

// ── Lock preservation ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn locked_slots_keep_exact_values(
        total in -2.0f64..10.0,
        segments in 1usize..16,
        locks in arb_locks(16),
        seed in any::<u64>(),
    ) {
        let result = partition(total, segments, &locks, Some(seed)).unwrap();
        for (&i, &v) in locks.range(..segments) {
            prop_assert_eq!(result[i], v);
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_calls_are_identical(
        total in 0.0f64..5.0,
        segments in 0usize..16,
        locks in arb_locks(16),
        seed in any::<u64>(),
    ) {
        let a = partition(total, segments, &locks, Some(seed)).unwrap();
        let b = partition(total, segments, &locks, Some(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ── Non-negativity ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unlocked_shares_non_negative(
        total in 0.0f64..10.0,
        segments in 1usize..20,
        seed in any::<u64>(),
    ) {
        let result = partition(total, segments, &LockMap::new(), Some(seed)).unwrap();
        for v in result {
            prop_assert!(v >= 0.0, "negative share {}", v);
        }
    }
}

// ── Full-lock passthrough ────────────────────────────────────────────────

proptest! {
    #[test]
    fn fully_locked_ignores_total_and_seed(
        values in proptest::collection::vec(-1.0f64..1.0, 1..10),
        total in -5.0f64..5.0,
        seed in any::<u64>(),
    ) {
        let locks: LockMap = values.iter().copied().enumerate().collect();
        let result = partition(total, values.len(), &locks, Some(seed)).unwrap();
        prop_assert_eq!(result, values);
    }
}

// ── Single free slot ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn single_free_slot_gets_exact_remaining(
        segments in 2usize..10,
        free in 0usize..10,
        lock_value in 0.0f64..0.1,
        seed in any::<u64>(),
    ) {
        let free = free % segments;
        let locks: LockMap = (0..segments)
            .filter(|&i| i != free)
            .map(|i| (i, lock_value))
            .collect();
        let total = 2.0;
        let result = partition(total, segments, &locks, Some(seed)).unwrap();
        let locked_total = locks.values().fold(0.0, |acc, v| acc + v);
        prop_assert_eq!(result[free], total - locked_total);
    }
}
