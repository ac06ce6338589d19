//! Client-side row filters for roster and free agent tables.
//!
//! Filters hide rows rather than dropping them, and every application re-evaluates
//! the full row set, so switching modes back and forth never loses rows.

use std::fmt;

use crate::model::PlayerId;

/// Row attributes a filter may inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStatus {
    pub player_id: PlayerId,
    pub in_roster: bool,
    pub approached: bool,
    pub seasons_left: Option<i8>,
}

pub trait RowPredicate {
    fn shows(&self, row: &RowStatus) -> bool;
}

/// Team screen filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterMode {
    #[default]
    Roster,
    Approached,
    Both,
}

impl RosterMode {
    pub const ALL: [RosterMode; 3] = [RosterMode::Roster, RosterMode::Approached, RosterMode::Both];
}

impl fmt::Display for RosterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterMode::Roster => write!(f, "Roster"),
            RosterMode::Approached => write!(f, "Approached"),
            RosterMode::Both => write!(f, "Both"),
        }
    }
}

impl RowPredicate for RosterMode {
    fn shows(&self, row: &RowStatus) -> bool {
        match self {
            RosterMode::Roster => row.in_roster,
            RosterMode::Approached => row.approached,
            RosterMode::Both => row.in_roster || row.approached,
        }
    }
}

/// Free agent filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerFilter {
    #[default]
    All,
    NotApproached,
}

impl PlayerFilter {
    pub const ALL: [PlayerFilter; 2] = [PlayerFilter::All, PlayerFilter::NotApproached];
}

impl fmt::Display for PlayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerFilter::All => write!(f, "All players"),
            PlayerFilter::NotApproached => write!(f, "Not approached"),
        }
    }
}

impl RowPredicate for PlayerFilter {
    fn shows(&self, row: &RowStatus) -> bool {
        match self {
            PlayerFilter::All => true,
            PlayerFilter::NotApproached => !row.approached,
        }
    }
}

/// A table row with its filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterableRow<T> {
    pub status: RowStatus,
    pub item: T,
    pub hidden: bool,
}

impl<T> FilterableRow<T> {
    pub fn new(status: RowStatus, item: T) -> Self {
        Self {
            status,
            item,
            hidden: false,
        }
    }
}

/// Recompute `hidden` for every row.
pub fn apply_filter<T>(rows: &mut [FilterableRow<T>], predicate: &impl RowPredicate) {
    for row in rows.iter_mut() {
        row.hidden = !predicate.shows(&row.status);
    }
}

pub fn visible_ids<T>(rows: &[FilterableRow<T>]) -> Vec<PlayerId> {
    rows.iter()
        .filter(|row| !row.hidden)
        .map(|row| row.status.player_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: PlayerId, in_roster: bool, approached: bool) -> FilterableRow<()> {
        FilterableRow::new(
            RowStatus { player_id: id, in_roster, approached, seasons_left: None },
            (),
        )
    }

    #[test]
    fn test_modes() {
        let mut rows = vec![row(1, true, false), row(2, false, true), row(3, true, true)];

        apply_filter(&mut rows, &RosterMode::Roster);
        assert_eq!(visible_ids(&rows), vec![1, 3]);

        apply_filter(&mut rows, &RosterMode::Approached);
        assert_eq!(visible_ids(&rows), vec![2, 3]);

        apply_filter(&mut rows, &RosterMode::Both);
        assert_eq!(visible_ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_hidden_rows_come_back() {
        let mut rows = vec![row(1, false, true), row(2, false, false)];
        apply_filter(&mut rows, &PlayerFilter::NotApproached);
        assert_eq!(visible_ids(&rows), vec![2]);
        apply_filter(&mut rows, &PlayerFilter::All);
        assert_eq!(visible_ids(&rows), vec![1, 2]);
        assert_eq!(rows.len(), 2);
    }
}
