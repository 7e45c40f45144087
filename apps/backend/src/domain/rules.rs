use crate::errors::domain::{DomainError, ValidationKind};

/// Smallest roster a game can be created with.
pub const MIN_PLAYERS: usize = 2;

/// Largest deal size; bets and results are single digits.
pub const MAX_PEAK: u32 = 9;

// Deal-size schedule for peak n: 1 → 2 → ... → n → n-1 → ... → 1
// Total 2n - 1 rounds.

/// Number of rounds played in a game whose deal size peaks at `peak`.
pub fn round_count_for_peak(peak: u32) -> Option<usize> {
    if peak == 0 {
        return None;
    }
    Some(2 * peak as usize - 1)
}

/// Bet ceiling label for every round, in play order.
///
/// `peak = 1` is the single round `[1]`; zero is rejected rather than
/// producing an empty schedule.
pub fn generate_round_labels(peak: u32) -> Result<Vec<u32>, DomainError> {
    if peak == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidArgument,
            "peak round count must be at least 1",
        ));
    }
    let ascending = 1..=peak;
    let descending = (1..peak).rev();
    Ok(ascending.chain(descending).collect())
}

/// Declared round count accepted for a new game.
pub fn validate_peak(peak: u32) -> Result<(), DomainError> {
    if !(1..=MAX_PEAK).contains(&peak) {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoundCount,
            format!("total_rounds must be between 1 and {MAX_PEAK}, got {peak}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_correct() {
        assert_eq!(generate_round_labels(1).unwrap(), vec![1]);
        assert_eq!(generate_round_labels(3).unwrap(), vec![1, 2, 3, 2, 1]);
        assert_eq!(
            generate_round_labels(5).unwrap(),
            vec![1, 2, 3, 4, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn zero_peak_is_invalid_argument() {
        match generate_round_labels(0) {
            Err(DomainError::Validation(kind, _)) => {
                assert_eq!(kind, ValidationKind::InvalidArgument)
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn round_count_matches_schedule_length() {
        assert_eq!(round_count_for_peak(0), None);
        for peak in 1..=MAX_PEAK {
            let labels = generate_round_labels(peak).unwrap();
            assert_eq!(round_count_for_peak(peak), Some(labels.len()));
        }
    }

    #[test]
    fn peak_bounds() {
        assert!(validate_peak(1).is_ok());
        assert!(validate_peak(MAX_PEAK).is_ok());
        assert!(matches!(
            validate_peak(0),
            Err(DomainError::Validation(ValidationKind::InvalidRoundCount, _))
        ));
        assert!(validate_peak(MAX_PEAK + 1).is_err());
    }
}
