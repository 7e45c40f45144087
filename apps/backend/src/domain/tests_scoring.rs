use crate::domain::entry::Entry;
use crate::domain::scoring::{compute_totals, leaders, parse_lenient};

fn results(row: &[&str]) -> Vec<Entry> {
    row.iter()
        .map(|r| Entry {
            bet: String::new(),
            result: (*r).to_string(),
        })
        .collect()
}

#[test]
fn totals_treat_non_numeric_as_zero() {
    // Three players, two rounds; "x" is not a number and counts as 0.
    let rounds = vec![results(&["3", "1", "0"]), results(&["2", "4", "x"])];
    assert_eq!(compute_totals(3, &rounds), vec![5, 5, 0]);
}

#[test]
fn totals_with_zero_rounds_are_all_zero() {
    assert_eq!(compute_totals(4, &[]), vec![0, 0, 0, 0]);
    assert_eq!(compute_totals(0, &[]), Vec::<i64>::new());
}

#[test]
fn totals_ignore_bets() {
    let mut rounds = vec![results(&["3", "1"]), results(&["2", ""])];
    let before = compute_totals(2, &rounds);

    rounds[0][0].bet = "9".into();
    rounds[1][1].bet = "garbage".into();
    assert_eq!(compute_totals(2, &rounds), before);
    assert_eq!(before, vec![5, 1]);
}

#[test]
fn totals_are_idempotent() {
    let rounds = vec![results(&["1", "2", "3"]), results(&["4", "5", "6"])];
    let first = compute_totals(3, &rounds);
    let second = compute_totals(3, &rounds);
    assert_eq!(first, second);
    assert_eq!(first, vec![5, 7, 9]);
}

#[test]
fn short_rows_count_missing_seats_as_zero() {
    let rounds = vec![results(&["2"]), results(&["1", "3"])];
    assert_eq!(compute_totals(3, &rounds), vec![3, 3, 0]);
}

#[test]
fn lenient_parse_reads_leading_integer() {
    assert_eq!(parse_lenient("7"), Some(7));
    assert_eq!(parse_lenient("  4"), Some(4));
    assert_eq!(parse_lenient("3x"), Some(3));
    assert_eq!(parse_lenient("2.9"), Some(2));
    assert_eq!(parse_lenient("-2"), Some(-2));
    assert_eq!(parse_lenient("+5"), Some(5));
    assert_eq!(parse_lenient("12"), Some(12));
    assert_eq!(parse_lenient(""), None);
    assert_eq!(parse_lenient("x3"), None);
    assert_eq!(parse_lenient("-"), None);
    assert_eq!(parse_lenient("--1"), None);
}

#[test]
fn lenient_parse_saturates_instead_of_overflowing() {
    assert_eq!(parse_lenient("99999999999999999999999"), Some(i64::MAX));
}

#[test]
fn leaders_report_every_tied_seat() {
    assert_eq!(leaders(&[5, 7, 7, 1]), vec![1, 2]);
    assert_eq!(leaders(&[0, 0]), vec![0, 1]);
    assert_eq!(leaders(&[3]), vec![0]);
    assert!(leaders(&[]).is_empty());
}
