//! Property tests for totals over arbitrary grids.

use proptest::prelude::*;

use crate::domain::entry::Entry;
use crate::domain::scoring::compute_totals;
use crate::domain::test_prelude;

fn digit_or_blank() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0u8..=9).prop_map(|d| d.to_string()),
        "[a-z ]{0,3}",
    ]
}

fn grid(players: usize) -> impl Strategy<Value = Vec<Vec<Entry>>> {
    let entry = (digit_or_blank(), digit_or_blank()).prop_map(|(bet, result)| Entry { bet, result });
    prop::collection::vec(prop::collection::vec(entry, players), 0..12)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// One total per player, recomputed identically on every call.
    #[test]
    fn prop_length_and_idempotence(rounds in (2usize..=6).prop_flat_map(grid)) {
        let players = rounds.first().map_or(2, Vec::len);
        let first = compute_totals(players, &rounds);
        prop_assert_eq!(first.len(), players);
        prop_assert_eq!(&first, &compute_totals(players, &rounds));
    }

    /// Rewriting every bet never changes totals.
    #[test]
    fn prop_bets_are_ignored(rounds in grid(4), bet in "[0-9a-z]{0,2}") {
        let before = compute_totals(4, &rounds);
        let rebet: Vec<Vec<Entry>> = rounds
            .iter()
            .map(|row| row.iter().map(|e| Entry { bet: bet.clone(), result: e.result.clone() }).collect())
            .collect();
        prop_assert_eq!(before, compute_totals(4, &rebet));
    }

    /// With digit-or-blank results, a total is the plain digit sum.
    #[test]
    fn prop_matches_digit_sum(rounds in grid(3)) {
        let totals = compute_totals(3, &rounds);
        for (seat, total) in totals.iter().enumerate() {
            let expected: i64 = rounds
                .iter()
                .map(|row| row[seat].result.trim().parse::<i64>().unwrap_or(0))
                .sum();
            prop_assert_eq!(*total, expected);
        }
    }

    /// Each total is bounded by 9 per round.
    #[test]
    fn prop_bounded_by_rounds(rounds in grid(3)) {
        let cap = 9 * rounds.len() as i64;
        prop_assert!(compute_totals(3, &rounds).iter().all(|t| (0..=cap).contains(t)));
    }
}
