//! The score grid of one game: one row per round, one entry per seat.

use serde::Serialize;

use crate::domain::entry::{validate_cell, Entry, EntryField};
use crate::domain::rules::{generate_round_labels, MIN_PLAYERS};
use crate::domain::scoring::compute_totals;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoresheet {
    player_count: usize,
    labels: Vec<u32>,
    rounds: Vec<Vec<Entry>>,
}

/// One row as shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub label: u32,
    pub entries: Vec<Entry>,
}

impl Scoresheet {
    /// Blank sheet for `player_count` seats and a deal size peaking at
    /// `peak`. Labels come from the declared peak, so they never shift with
    /// the number of rows.
    pub fn new(player_count: usize, peak: u32) -> Result<Self, DomainError> {
        if player_count < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoster,
                format!("a game needs at least {MIN_PLAYERS} players, got {player_count}"),
            ));
        }
        let labels = generate_round_labels(peak)?;
        let rounds = vec![vec![Entry::default(); player_count]; labels.len()];
        Ok(Self {
            player_count,
            labels,
            rounds,
        })
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    pub fn rounds(&self) -> &[Vec<Entry>] {
        &self.rounds
    }

    pub fn entry(&self, round: usize, seat: usize) -> Option<&Entry> {
        self.rounds.get(round)?.get(seat)
    }

    /// Write one cell. The value must be empty or a single digit.
    pub fn set_entry(
        &mut self,
        round: usize,
        seat: usize,
        field: EntryField,
        value: &str,
    ) -> Result<&Entry, DomainError> {
        let round_count = self.rounds.len();
        let player_count = self.player_count;
        let value = validate_cell(value)?;

        let row = self.rounds.get_mut(round).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::RoundOutOfRange,
                format!("round {round} out of range (game has {round_count} rounds)"),
            )
        })?;
        let entry = row.get_mut(seat).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::SeatOutOfRange,
                format!("seat {seat} out of range (game has {player_count} players)"),
            )
        })?;

        entry.set(field, value);
        Ok(entry)
    }

    pub fn totals(&self) -> Vec<i64> {
        compute_totals(self.player_count, &self.rounds)
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.labels
            .iter()
            .zip(&self.rounds)
            .map(|(label, entries)| RowView {
                label: *label,
                entries: entries.clone(),
            })
            .collect()
    }
}
