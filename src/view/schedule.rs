//! Matchday windows over a season's played and upcoming games.

use crate::model::Game;
use crate::tui::element::TableRow;
use crate::tui::Element;
use crate::view::link::{self, LinkKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

/// One matchday pulled out of a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDay {
    pub direction: Direction,
    pub caption: String,
    /// Ascending for past games, scan order for upcoming ones.
    pub rows: Vec<Game>,
}

impl GameDay {
    pub fn date(&self) -> Option<&str> {
        self.rows.first().map(|g| g.date.as_str())
    }

    /// Table with optional `(N.)` seed cells beside each team.
    pub fn to_element<Msg>(&self, show_seeds: bool) -> Element<Msg> {
        let header = if show_seeds {
            vec!["", "Home", "Score", "Away", ""]
        } else {
            vec!["Home", "Score", "Away"]
        };

        let rows = self.rows.iter().map(|game| {
            let home = link::encode(LinkKind::Team, game.home.id, game.home.name.clone());
            let away = link::encode(LinkKind::Team, game.away.id, game.away.name.clone());
            let score = Element::text(score_string(game, self.direction));
            let cells = if show_seeds {
                vec![
                    Element::text(seed_label(game.home.seed)),
                    home,
                    score,
                    away,
                    Element::text(seed_label(game.away.seed)),
                ]
            } else {
                vec![home, score, away]
            };
            TableRow::new(cells)
        });

        Element::table(header).caption(self.caption.clone()).rows(rows).build()
    }
}

/// Extract the matchday nearest to "today" in the given direction.
///
/// Both windows are read from the tail of the list: the scan runs backward and
/// keeps the run sharing the first date it meets. Past rows are flipped back to
/// ascending order, Future rows keep the order the scan produced.
pub fn window(games: &[Game], direction: Direction) -> GameDay {
    let mut rows: Vec<Game> = match games.last() {
        Some(last) => games
            .iter()
            .rev()
            .take_while(|g| g.date == last.date)
            .cloned()
            .collect(),
        None => Vec::new(),
    };
    if direction == Direction::Past {
        rows.reverse();
    }

    let caption = match (direction, rows.first()) {
        (Direction::Past, None) => "No previous games.".to_string(),
        (Direction::Future, None) => "No upcoming games.".to_string(),
        (Direction::Past, Some(g)) => format!("Previous games from {}.", g.date),
        (Direction::Future, Some(g)) => format!("Next games on {}.", g.date),
    };

    GameDay {
        direction,
        caption,
        rows,
    }
}

/// `"3 - 2"`, `"3 - 2 OT"` for played games, `"-"` for upcoming ones.
pub fn score_string(game: &Game, direction: Direction) -> String {
    match direction {
        Direction::Future => "-".to_string(),
        Direction::Past => {
            let mut score = format!("{} - {}", game.home.goals, game.away.goals);
            if game.had_overtime {
                score.push_str(" OT");
            }
            score
        }
    }
}

pub fn seed_label(seed: u8) -> String {
    format!("({}.)", seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameSide;

    fn game(date: &str, home: u32, away: u32) -> Game {
        Game {
            home: GameSide { id: home, name: format!("T{}", home), seed: 1, goals: 2 },
            away: GameSide { id: away, name: format!("T{}", away), seed: 4, goals: 1 },
            date: date.to_string(),
            had_overtime: false,
            is_over: true,
        }
    }

    #[test]
    fn test_past_takes_last_date_in_order() {
        let games = vec![
            game("2024-01-01", 1, 2),
            game("2024-01-03", 3, 4),
            game("2024-01-03", 5, 6),
        ];
        let day = window(&games, Direction::Past);
        assert_eq!(day.caption, "Previous games from 2024-01-03.");
        let homes: Vec<u32> = day.rows.iter().map(|g| g.home.id).collect();
        assert_eq!(homes, vec![3, 5]);
    }

    #[test]
    fn test_future_reads_from_the_tail() {
        let games = vec![
            game("2024-02-05", 5, 6),
            game("2024-02-01", 1, 2),
            game("2024-02-01", 3, 4),
        ];
        let day = window(&games, Direction::Future);
        assert_eq!(day.caption, "Next games on 2024-02-01.");
        let homes: Vec<u32> = day.rows.iter().map(|g| g.home.id).collect();
        assert_eq!(homes, vec![3, 1]);
    }

    #[test]
    fn test_empty_captions() {
        assert_eq!(window(&[], Direction::Past).caption, "No previous games.");
        assert_eq!(window(&[], Direction::Future).caption, "No upcoming games.");
        assert!(window(&[], Direction::Future).rows.is_empty());
    }

    #[test]
    fn test_score_strings() {
        let mut g = game("2024-01-01", 1, 2);
        assert_eq!(score_string(&g, Direction::Past), "2 - 1");
        g.had_overtime = true;
        assert_eq!(score_string(&g, Direction::Past), "2 - 1 OT");
        assert_eq!(score_string(&g, Direction::Future), "-");
    }

    #[test]
    fn test_seed_cells() {
        let day = window(&[game("2024-03-01", 1, 2)], Direction::Past);
        match day.to_element::<()>(true) {
            Element::Table { header, rows, .. } => {
                assert_eq!(header.len(), 5);
                match &rows[0].cells[0] {
                    Element::Text { content, .. } => assert_eq!(content, "(1.)"),
                    other => panic!("unexpected cell {:?}", other),
                }
                match &rows[0].cells[4] {
                    Element::Text { content, .. } => assert_eq!(content, "(4.)"),
                    other => panic!("unexpected cell {:?}", other),
                }
            }
            other => panic!("expected table, got {:?}", other),
        }
    }
}
