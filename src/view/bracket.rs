//! Knockout pair lists and tournament trees.
//!
//! Ordering is owned by the engine: pairs keep their input order, home before away,
//! and rounds become columns left to right. Nothing here decides who advances.

use crate::model::{KnockoutPair, KnockoutRound, KnockoutSide};
use crate::tui::element::TableRow;
use crate::tui::{Element, LayoutConstraint};
use crate::view::link::{self, LinkKind};

/// One bracket line: seed, team, running wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketRow {
    pub seed_label: String,
    pub team_id: u32,
    pub team_name: String,
    pub wins: u8,
}

impl BracketRow {
    fn from_side(side: &KnockoutSide) -> Self {
        Self {
            seed_label: format!("{}.", side.seed),
            team_id: side.id,
            team_name: side.name.clone(),
            wins: side.wins,
        }
    }

    fn to_row<Msg>(&self) -> TableRow<Msg> {
        TableRow::new(vec![
            Element::text(self.seed_label.clone()),
            link::encode(LinkKind::Team, self.team_id, self.team_name.clone()),
            Element::text(self.wins.to_string()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPair {
    pub home: BracketRow,
    pub away: BracketRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedPairList {
    pub title: String,
    pub pairs: Vec<RenderedPair>,
}

impl RenderedPairList {
    /// Rows in display order: each pair's home row directly followed by its away row.
    pub fn rows(&self) -> impl Iterator<Item = &BracketRow> {
        self.pairs.iter().flat_map(|pair| [&pair.home, &pair.away])
    }

    pub fn to_element<Msg>(&self) -> Element<Msg> {
        let mut table = Element::table(vec!["Seed", "Team", "Wins"]);
        if !self.title.is_empty() {
            table = table.caption(self.title.clone());
        }
        table.rows(self.rows().map(BracketRow::to_row)).build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedTree {
    pub columns: Vec<RenderedPairList>,
}

impl RenderedTree {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn to_element<Msg>(&self) -> Element<Msg> {
        if self.columns.is_empty() {
            return Element::text("No rounds scheduled yet.");
        }

        let items = self
            .columns
            .iter()
            .map(|column| (LayoutConstraint::Fill(1), column.to_element()))
            .collect();
        Element::Row { items, spacing: 2 }
    }
}

pub fn build_round(pairs: &[KnockoutPair]) -> RenderedPairList {
    RenderedPairList {
        title: String::new(),
        pairs: pairs
            .iter()
            .map(|pair| RenderedPair {
                home: BracketRow::from_side(&pair.home),
                away: BracketRow::from_side(&pair.away),
            })
            .collect(),
    }
}

/// One column per round, round 0 leftmost. An empty slice gives an empty tree.
pub fn build_tree(rounds: &[KnockoutRound]) -> RenderedTree {
    RenderedTree {
        columns: rounds
            .iter()
            .enumerate()
            .map(|(index, round)| {
                let mut column = build_round(&round.pairs);
                column.title = if round.name.is_empty() {
                    format!("Round {}", index + 1)
                } else {
                    round.name.clone()
                };
                column
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(id: u32, seed: u8, wins: u8) -> KnockoutSide {
        KnockoutSide { id, name: format!("Team {}", id), wins, seed }
    }

    #[test]
    fn test_round_rows_alternate_home_away() {
        let pairs = vec![
            KnockoutPair { home: side(1, 1, 3), away: side(8, 8, 1) },
            KnockoutPair { home: side(4, 4, 2), away: side(5, 5, 2) },
        ];
        let list = build_round(&pairs);
        let ids: Vec<u32> = list.rows().map(|r| r.team_id).collect();
        assert_eq!(ids, vec![1, 8, 4, 5]);
        assert_eq!(list.pairs[0].home.seed_label, "1.");
        assert_eq!(list.pairs[0].away.wins, 1);
    }

    #[test]
    fn test_tree_column_titles() {
        let rounds = vec![
            KnockoutRound { name: String::new(), pairs: vec![] },
            KnockoutRound { name: "Final".into(), pairs: vec![] },
        ];
        let tree = build_tree(&rounds);
        assert_eq!(tree.columns[0].title, "Round 1");
        assert_eq!(tree.columns[1].title, "Final");
    }

    #[test]
    fn test_empty_tree() {
        assert!(build_tree(&[]).is_empty());
    }
}
