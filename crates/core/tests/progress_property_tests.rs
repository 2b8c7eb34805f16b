//! Property-based tests for goal and budget progress.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use gastu_core::budgets::{BudgetProgress, BudgetTone};
use gastu_core::savings::GoalProgress;

// =============================================================================
// Generators
// =============================================================================

/// Non-negative money amount with two decimals.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strictly positive money amount with two decimals.
fn arb_positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Any non-negative `Decimal`, from the smallest step up to `Decimal::MAX`.
fn arb_extreme_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        Just(Decimal::new(1, 28)),
        (any::<u64>(), 0u32..=28).prop_map(|(m, scale)| Decimal::from_i128_with_scale(m as i128, scale)),
        (any::<u32>(), any::<u64>(), 0u32..=28).prop_map(|(hi, lo, scale)| {
            Decimal::from_i128_with_scale(((hi as i128) << 64) | lo as i128, scale)
        }),
    ]
}

fn arb_extreme_positive_amount() -> impl Strategy<Value = Decimal> {
    arb_extreme_amount().prop_filter("positive", |d| *d > Decimal::ZERO)
}

// =============================================================================
// Goal progress
// =============================================================================

proptest! {
    #[test]
    fn goal_display_percent_stays_within_bounds(
        accumulated in arb_amount(),
        target in arb_positive_amount(),
    ) {
        let progress = GoalProgress::new(accumulated, target);
        prop_assert!(progress.display_percent >= Decimal::ZERO);
        prop_assert!(progress.display_percent <= dec!(100));
    }

    #[test]
    fn goal_raw_percent_is_never_clamped(
        accumulated in arb_amount(),
        target in arb_positive_amount(),
    ) {
        let progress = GoalProgress::new(accumulated, target);
        if progress.raw_percent <= dec!(100) {
            prop_assert_eq!(progress.raw_percent, progress.display_percent);
        } else {
            prop_assert_eq!(progress.display_percent, dec!(100));
        }
        if accumulated > target {
            prop_assert!(progress.raw_percent > dec!(100));
        }
    }

    #[test]
    fn goal_progress_handles_extreme_magnitudes(
        accumulated in arb_extreme_amount(),
        target in arb_extreme_positive_amount(),
    ) {
        let progress = GoalProgress::new(accumulated, target);
        prop_assert!(progress.raw_percent >= Decimal::ZERO);
        prop_assert!(progress.display_percent >= Decimal::ZERO);
        prop_assert!(progress.display_percent <= dec!(100));
    }

    #[test]
    fn goal_with_zero_target_shows_no_progress(accumulated in arb_amount()) {
        let progress = GoalProgress::new(accumulated, Decimal::ZERO);
        prop_assert_eq!(progress.raw_percent, Decimal::ZERO);
        prop_assert_eq!(progress.display_percent, Decimal::ZERO);
    }
}

// =============================================================================
// Budget progress
// =============================================================================

proptest! {
    #[test]
    fn budget_percent_never_exceeds_one_hundred(
        spent in arb_amount(),
        limit in arb_positive_amount(),
    ) {
        let progress = BudgetProgress::new(spent, limit);
        prop_assert!(progress.percent >= Decimal::ZERO);
        prop_assert!(progress.percent <= dec!(100));
        prop_assert!(progress.percent.scale() <= 2);
        prop_assert_eq!(progress.spent, spent);
    }

    #[test]
    fn budget_progress_handles_extreme_magnitudes(
        spent in arb_extreme_amount(),
        limit in arb_extreme_positive_amount(),
    ) {
        let progress = BudgetProgress::new(spent, limit);
        prop_assert!(progress.percent >= Decimal::ZERO);
        prop_assert!(progress.percent <= dec!(100));
        prop_assert!(progress.percent.scale() <= 2);
    }

    #[test]
    fn budget_over_limit_is_danger(
        limit in arb_positive_amount(),
        extra in arb_amount(),
    ) {
        let progress = BudgetProgress::new(limit + extra, limit);
        prop_assert_eq!(progress.percent, dec!(100));
        prop_assert_eq!(progress.tone, BudgetTone::Danger);
    }
}
