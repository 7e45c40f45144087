use crate::domain::entry::EntryField;
use crate::domain::scoresheet::Scoresheet;
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn new_sheet_is_blank_and_pyramid_labelled() {
    let sheet = Scoresheet::new(3, 3).unwrap();
    assert_eq!(sheet.player_count(), 3);
    assert_eq!(sheet.round_count(), 5);
    assert_eq!(sheet.labels(), &[1, 2, 3, 2, 1]);
    assert!(sheet
        .rounds()
        .iter()
        .all(|row| row.len() == 3 && row.iter().all(|e| e.bet.is_empty() && e.result.is_empty())));
    assert_eq!(sheet.totals(), vec![0, 0, 0]);
}

#[test]
fn new_sheet_rejects_small_roster_and_zero_peak() {
    assert!(matches!(
        Scoresheet::new(1, 3),
        Err(DomainError::Validation(ValidationKind::InvalidRoster, _))
    ));
    assert!(matches!(
        Scoresheet::new(3, 0),
        Err(DomainError::Validation(ValidationKind::InvalidArgument, _))
    ));
}

#[test]
fn writing_results_updates_totals() {
    let mut sheet = Scoresheet::new(2, 2).unwrap();
    sheet.set_entry(0, 0, EntryField::Bet, "1").unwrap();
    sheet.set_entry(0, 0, EntryField::Result, "1").unwrap();
    sheet.set_entry(1, 1, EntryField::Result, "2").unwrap();
    sheet.set_entry(2, 0, EntryField::Result, "0").unwrap();
    assert_eq!(sheet.totals(), vec![1, 2]);

    // Clearing a cell goes back to "not entered".
    sheet.set_entry(1, 1, EntryField::Result, "").unwrap();
    assert_eq!(sheet.totals(), vec![1, 0]);
    assert_eq!(sheet.entry(1, 1).unwrap().result, "");
    assert_eq!(sheet.entry(2, 0).unwrap().result, "0");
}

#[test]
fn bets_do_not_move_totals() {
    let mut sheet = Scoresheet::new(2, 1).unwrap();
    sheet.set_entry(0, 1, EntryField::Bet, "9").unwrap();
    assert_eq!(sheet.totals(), vec![0, 0]);
}

#[test]
fn out_of_range_writes_are_rejected_without_changes() {
    let mut sheet = Scoresheet::new(2, 2).unwrap();
    let before = sheet.clone();

    assert!(matches!(
        sheet.set_entry(3, 0, EntryField::Bet, "1"),
        Err(DomainError::Validation(ValidationKind::RoundOutOfRange, _))
    ));
    assert!(matches!(
        sheet.set_entry(0, 2, EntryField::Bet, "1"),
        Err(DomainError::Validation(ValidationKind::SeatOutOfRange, _))
    ));
    assert!(matches!(
        sheet.set_entry(0, 0, EntryField::Result, "12"),
        Err(DomainError::Validation(ValidationKind::InvalidCell, _))
    ));
    assert_eq!(sheet, before);
}

#[test]
fn rows_pair_labels_with_entries() {
    let mut sheet = Scoresheet::new(2, 2).unwrap();
    sheet.set_entry(1, 0, EntryField::Bet, "2").unwrap();
    let rows = sheet.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows.iter().map(|r| r.label).collect::<Vec<_>>(),
        vec![1, 2, 1]
    );
    assert_eq!(rows[1].entries[0].bet, "2");
}
