use serde::{Deserialize, Serialize};

use super::{CompetitionId, NavOption, TeamId};

/// Full competition package returned by `get_comp_screen_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub id: CompetitionId,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    /// `None` marks a parent node that only aggregates child competitions.
    pub format: Option<FormatDescriptor>,
    pub season: Season,
    /// One selector level per ancestor, outermost first.
    #[serde(default)]
    pub comp_nav: Vec<Vec<NavOption>>,
}

impl Competition {
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() { &self.name } else { &self.full_name }
    }
}

/// Format descriptor as the engine sends it. Decoded once into `view::format::Format`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub round_robin: Option<RoundRobinRules>,
    #[serde(default)]
    pub knockout_round: Option<KnockoutRules>,
    pub match_rules: MatchRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinRules {
    pub rounds: u8,
    #[serde(default)]
    pub extra_matches: u8,
    pub points_for_win: u8,
    pub points_for_ot_win: u8,
    pub points_for_draw: u8,
    pub points_for_ot_loss: u8,
    pub points_for_loss: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutRules {
    pub wins_required: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub periods: u8,
    /// Seconds.
    pub period_length: u32,
    /// Seconds. Zero disables overtime.
    pub overtime_length: u32,
    pub continuous_overtime: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub teams: Vec<TeamRow>,
    #[serde(default)]
    pub knockout_round: Option<KnockoutRound>,
    /// Present only for tournament trees. An empty list still counts as present.
    #[serde(default)]
    pub rounds: Option<Vec<KnockoutRound>>,
    #[serde(default)]
    pub played_games: Vec<Game>,
    #[serde(default)]
    pub upcoming_games: Vec<Game>,
}

/// Standings row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: TeamId,
    pub name: String,
    /// Ordinal string such as "1st".
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub games: u8,
    #[serde(default, alias = "regular_wins")]
    pub wins: u8,
    #[serde(default)]
    pub ot_wins: u8,
    #[serde(default)]
    pub draws: u8,
    #[serde(default)]
    pub ot_losses: u8,
    #[serde(default, alias = "regular_losses")]
    pub losses: u8,
    #[serde(default)]
    pub goals_scored: u16,
    #[serde(default)]
    pub goals_conceded: u16,
    #[serde(default)]
    pub goal_difference: i16,
    #[serde(default)]
    pub points: u8,
    #[serde(default)]
    pub seed: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub home: GameSide,
    pub away: GameSide,
    pub date: String,
    #[serde(default)]
    pub had_overtime: bool,
    #[serde(default)]
    pub is_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSide {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub seed: u8,
    #[serde(default)]
    pub goals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KnockoutRound {
    #[serde(default)]
    pub name: String,
    pub pairs: Vec<KnockoutPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutPair {
    pub home: KnockoutSide,
    pub away: KnockoutSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutSide {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub wins: u8,
    #[serde(default)]
    pub seed: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_absent_vs_empty() {
        let absent: Season = serde_json::from_str(r#"{"teams": []}"#).unwrap();
        assert_eq!(absent.rounds, None);

        let empty: Season = serde_json::from_str(r#"{"teams": [], "rounds": []}"#).unwrap();
        assert_eq!(empty.rounds, Some(Vec::new()));
    }

    #[test]
    fn test_standings_accept_engine_aliases() {
        let row: TeamRow = serde_json::from_str(
            r#"{"id": 4, "name": "Ilves", "rank": "2nd", "regular_wins": 7, "regular_losses": 3}"#,
        )
        .unwrap();
        assert_eq!(row.wins, 7);
        assert_eq!(row.losses, 3);
    }

    #[test]
    fn test_format_type_field() {
        let format: FormatDescriptor = serde_json::from_str(
            r#"{"type": "RoundRobin", "match_rules": {"periods": 3, "period_length": 1200, "overtime_length": 300, "continuous_overtime": false}}"#,
        )
        .unwrap();
        assert_eq!(format.kind, "RoundRobin");
        assert!(format.round_robin.is_none());
    }
}
