//! Property tests for the deal-size schedule.

use proptest::prelude::*;

use crate::domain::rules::{generate_round_labels, round_count_for_peak};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Length is 2n - 1 and agrees with round_count_for_peak.
    #[test]
    fn prop_length_is_two_n_minus_one(n in 1u32..=500) {
        let labels = generate_round_labels(n).unwrap();
        prop_assert_eq!(labels.len(), (2 * n - 1) as usize);
        prop_assert_eq!(round_count_for_peak(n), Some(labels.len()));
    }

    /// The schedule reads the same in both directions.
    #[test]
    fn prop_is_palindrome(n in 1u32..=500) {
        let labels = generate_round_labels(n).unwrap();
        let reversed: Vec<u32> = labels.iter().rev().copied().collect();
        prop_assert_eq!(labels, reversed);
    }

    /// The peak is n, appears once, and sits at the midpoint.
    #[test]
    fn prop_single_peak_at_midpoint(n in 1u32..=500) {
        let labels = generate_round_labels(n).unwrap();
        let mid = labels.len() / 2;
        prop_assert_eq!(labels.iter().copied().max(), Some(n));
        prop_assert_eq!(labels[mid], n);
        prop_assert_eq!(labels.iter().filter(|&&l| l == n).count(), 1);
    }

    /// Strictly rising to the peak, strictly falling after it.
    #[test]
    fn prop_strictly_monotone_halves(n in 1u32..=200) {
        let labels = generate_round_labels(n).unwrap();
        let mid = labels.len() / 2;
        prop_assert!(labels[..=mid].windows(2).all(|w| w[0] + 1 == w[1]));
        prop_assert!(labels[mid..].windows(2).all(|w| w[0] == w[1] + 1));
        prop_assert_eq!(labels[0], 1);
        prop_assert_eq!(labels[labels.len() - 1], 1);
    }

    /// Same input, same output.
    #[test]
    fn prop_is_pure(n in 1u32..=200) {
        prop_assert_eq!(generate_round_labels(n).unwrap(), generate_round_labels(n).unwrap());
    }
}
