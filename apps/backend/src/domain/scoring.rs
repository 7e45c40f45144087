use crate::domain::entry::Entry;

/// Leading-integer parse used for result cells.
///
/// Skips leading whitespace, accepts one optional sign, then reads the
/// longest run of ASCII digits and ignores the rest. `None` when no digit
/// follows, so `"3x"` is 3 while `"x3"` and `""` are unparsable.
pub fn parse_lenient(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen = false;
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Per-seat sum of results over every round.
///
/// Recomputed from scratch on each call. Only `result` is read; an
/// unparsable or empty result, or a row too short to reach the seat, adds 0.
pub fn compute_totals(player_count: usize, rounds: &[Vec<Entry>]) -> Vec<i64> {
    (0..player_count)
        .map(|seat| {
            rounds
                .iter()
                .filter_map(|round| round.get(seat))
                .map(|entry| parse_lenient(&entry.result).unwrap_or(0))
                .fold(0i64, i64::saturating_add)
        })
        .collect()
}

/// Seats holding the highest total, in seat order. Empty for an empty roster.
pub fn leaders(totals: &[i64]) -> Vec<usize> {
    let Some(best) = totals.iter().max() else {
        return Vec::new();
    };
    totals
        .iter()
        .enumerate()
        .filter(|(_, total)| *total == best)
        .map(|(seat, _)| seat)
        .collect()
}
