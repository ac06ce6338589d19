use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PlayerId, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    LD,
    RD,
    LW,
    C,
    RW,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbrev = match self {
            Position::GK => "GK",
            Position::LD => "LD",
            Position::RD => "RD",
            Position::LW => "LW",
            Position::C => "C",
            Position::RW => "RW",
        };
        write!(f, "{}", abbrev)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTeam {
    pub id: TeamId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub start_date: String,
    pub end_date: String,
    /// Zero or negative once the contract has run out.
    pub seasons_left: i8,
    pub team: ContractTeam,
}

/// Player package. Used by the player screen, team rosters and the free agent list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub position: Position,
    #[serde(default)]
    pub age: u8,
    pub ability: u8,
    #[serde(default)]
    pub contract: Option<Contract>,
    #[serde(default)]
    pub offers: Vec<Contract>,
}

impl Player {
    pub fn seasons_left(&self) -> Option<i8> {
        self.contract.as_ref().map(|c| c.seasons_left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub name: String,
}

/// Team package returned by `get_team_screen_package`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPackage {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub manager: Option<Manager>,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_round_trips_as_abbreviation() {
        let pos: Position = serde_json::from_str("\"RW\"").unwrap();
        assert_eq!(pos, Position::RW);
        assert_eq!(pos.to_string(), "RW");
    }

    #[test]
    fn test_free_agent_without_contract() {
        let player: Player = serde_json::from_str(
            r#"{"id": 9, "name": "Aho", "country": "Finland", "position": "C", "ability": 71}"#,
        )
        .unwrap();
        assert_eq!(player.seasons_left(), None);
        assert!(player.offers.is_empty());
    }

    #[test]
    fn test_expired_contract_still_parses() {
        let player: Player = serde_json::from_str(
            r#"{"id": 4, "name": "Kapanen", "position": "RW", "ability": 64,
                "contract": {"start_date": "2021-07-01", "end_date": "2023-06-30",
                             "seasons_left": -1, "team": {"id": 10, "name": "Tappara"}}}"#,
        )
        .unwrap();
        assert_eq!(player.seasons_left(), Some(-1));
    }
}
