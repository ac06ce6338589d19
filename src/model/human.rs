use serde::{Deserialize, Serialize};

use super::{PlayerId, Position, TeamId};

/// State of the user-controlled manager.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HumanPackage {
    #[serde(default)]
    pub team: Option<HumanTeamPackage>,
}

impl HumanPackage {
    pub fn team_id(&self) -> Option<TeamId> {
        self.team.as_ref().map(|t| t.id)
    }

    pub fn has_approached(&self, player_id: PlayerId) -> bool {
        self.team
            .as_ref()
            .is_some_and(|t| t.approached_players.contains(&player_id))
    }

    pub fn actions_remaining(&self) -> u8 {
        self.team.as_ref().map_or(0, |t| t.actions_remaining)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanTeamPackage {
    pub id: TeamId,
    pub actions_remaining: u8,
    #[serde(default)]
    pub roster_overview: Vec<RosterOverviewEntry>,
    #[serde(default)]
    pub approached_players: Vec<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterOverviewEntry {
    pub position: Position,
    pub id: PlayerId,
    pub in_roster: bool,
}

/// Data shown in the chrome above the content region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBarPackage {
    pub date: String,
    #[serde(default)]
    pub human: HumanPackage,
}
