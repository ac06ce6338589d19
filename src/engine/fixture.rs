use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Engine;
use crate::model::{
    Competition, CompetitionId, Contract, ContractTeam, HumanPackage, HumanTeamPackage, NavOption, Player,
    PlayerId, RosterOverviewEntry, TeamId, TeamPackage, TopBarPackage,
};

fn default_daily_actions() -> u8 {
    3
}

/// A frozen simulation world. Standings and schedules are taken as given; only the
/// date, the human manager and contract offers change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub date: NaiveDate,
    #[serde(default = "default_daily_actions")]
    pub daily_actions: u8,
    #[serde(default)]
    pub comp_select: Vec<NavOption>,
    #[serde(default)]
    pub competitions: HashMap<CompetitionId, Competition>,
    #[serde(default)]
    pub children: HashMap<CompetitionId, Vec<NavOption>>,
    #[serde(default)]
    pub teams: HashMap<TeamId, TeamPackage>,
    #[serde(default)]
    pub players: HashMap<PlayerId, Player>,
    #[serde(default)]
    pub free_agents: Vec<PlayerId>,
    #[serde(default)]
    pub human: HumanPackage,
}

impl World {
    fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    fn advance(&mut self, days: u16) -> Result<String> {
        self.date = self
            .date
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| anyhow!("Date overflow advancing {} days from {}", days, self.date))?;
        if let Some(team) = self.human.team.as_mut() {
            team.actions_remaining = self.daily_actions;
        }
        Ok(self.date_string())
    }

    fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(&id)
            .or_else(|| {
                self.teams
                    .values()
                    .flat_map(|team| team.players.iter())
                    .find(|p| p.id == id)
            })
            .ok_or_else(|| anyhow!("No player with id {}", id))
    }
}

/// In-memory engine backed by a [`World`].
pub struct FixtureEngine {
    world: Mutex<World>,
}

impl FixtureEngine {
    pub fn new(world: World) -> Self {
        Self {
            world: Mutex::new(world),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let world: World = serde_json::from_str(json).context("Failed to parse fixture world")?;
        Ok(Self::new(world))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture world: {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid fixture world: {}", path.display()))
    }

    fn world(&self) -> Result<MutexGuard<'_, World>> {
        self.world.lock().map_err(|_| anyhow!("Fixture world lock poisoned"))
    }
}

#[async_trait]
impl Engine for FixtureEngine {
    async fn get_comp_screen_info(&self, id: CompetitionId) -> Result<Competition> {
        let world = self.world()?;
        let mut competition = world
            .competitions
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("No competition with id {}", id))?;
        competition.id = id;
        Ok(competition)
    }

    async fn get_human_package(&self) -> Result<HumanPackage> {
        Ok(self.world()?.human.clone())
    }

    async fn get_team_screen_package(&self, id: TeamId) -> Result<TeamPackage> {
        self.world()?
            .teams
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("No team with id {}", id))
    }

    async fn get_player_screen_package(&self, id: PlayerId) -> Result<Player> {
        self.world()?.player(id).cloned()
    }

    async fn get_free_agents_package(&self) -> Result<Vec<Player>> {
        let world = self.world()?;
        world
            .free_agents
            .iter()
            .map(|id| world.player(*id).cloned())
            .collect()
    }

    async fn get_comp_select_package(&self) -> Result<Vec<NavOption>> {
        Ok(self.world()?.comp_select.clone())
    }

    async fn get_child_comp_select_info(&self, id: CompetitionId) -> Result<Vec<NavOption>> {
        Ok(self.world()?.children.get(&id).cloned().unwrap_or_default())
    }

    async fn get_team_select_package(&self, comp_id: CompetitionId) -> Result<Vec<NavOption>> {
        let world = self.world()?;
        let competition = world
            .competitions
            .get(&comp_id)
            .ok_or_else(|| anyhow!("No competition with id {}", comp_id))?;

        let mut options = vec![(0, "Choose a team".to_string())];
        options.extend(competition.season.teams.iter().map(|t| (t.id, t.name.clone())));
        Ok(options)
    }

    async fn get_top_bar_package(&self) -> Result<TopBarPackage> {
        let world = self.world()?;
        Ok(TopBarPackage {
            date: world.date_string(),
            human: world.human.clone(),
        })
    }

    async fn go_to_next_day(&self) -> Result<String> {
        self.world()?.advance(1)
    }

    async fn skip_days(&self, days: u16) -> Result<String> {
        self.world()?.advance(days)
    }

    async fn create_human_manager(&self, team_id: TeamId) -> Result<()> {
        let mut world = self.world()?;
        let team = world
            .teams
            .get(&team_id)
            .ok_or_else(|| anyhow!("No team with id {}", team_id))?;

        let roster_overview = team
            .players
            .iter()
            .map(|p| RosterOverviewEntry {
                position: p.position,
                id: p.id,
                in_roster: true,
            })
            .collect();

        world.human.team = Some(HumanTeamPackage {
            id: team_id,
            actions_remaining: world.daily_actions,
            roster_overview,
            approached_players: Vec::new(),
        });
        log::info!("Human manager now runs team {}", team_id);
        Ok(())
    }

    async fn offer_contract(&self, player_id: PlayerId, team_id: TeamId, years: u8) -> Result<bool> {
        let mut world = self.world()?;

        match &world.human.team {
            Some(team) if team.id != team_id => {
                anyhow::bail!("Team {} is not managed by the human", team_id)
            }
            Some(team) if team.actions_remaining == 0 => {
                log::warn!("Offer to player {} refused: no actions remaining", player_id);
                return Ok(false);
            }
            Some(_) => {}
            None => anyhow::bail!("The human does not manage a team"),
        }

        let team_name = world
            .teams
            .get(&team_id)
            .map(|t| t.name.clone())
            .ok_or_else(|| anyhow!("No team with id {}", team_id))?;
        let start = world.date;
        let end = start
            .checked_add_days(Days::new(365 * u64::from(years)))
            .ok_or_else(|| anyhow!("Contract end date overflow"))?;

        let offer = Contract {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            seasons_left: i8::try_from(years).map_err(|_| anyhow!("Contract of {} seasons is too long", years))?,
            team: ContractTeam {
                id: team_id,
                name: team_name,
            },
        };

        let player = world
            .players
            .get_mut(&player_id)
            .ok_or_else(|| anyhow!("No free agent with id {}", player_id))?;
        player.offers.push(offer);

        if let Some(team) = world.human.team.as_mut() {
            team.actions_remaining -= 1;
            if !team.approached_players.contains(&player_id) {
                team.approached_players.push(player_id);
            }
        }
        log::info!("Offered {} season contract to player {}", years, player_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: &str = r#"{
        "date": "2024-01-01",
        "daily_actions": 1,
        "teams": {
            "10": {"id": 10, "name": "Tappara", "players": [
                {"id": 1, "name": "Keeper", "position": "GK", "ability": 60}
            ]}
        },
        "players": {
            "200": {"id": 200, "name": "Free Agent", "position": "C", "ability": 55}
        },
        "free_agents": [200]
    }"#;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        futures::executor::block_on(future)
    }

    #[test]
    fn test_offer_consumes_action_and_marks_approached() {
        let engine = FixtureEngine::from_json(WORLD).unwrap();
        block_on(engine.create_human_manager(10)).unwrap();

        assert!(block_on(engine.offer_contract(200, 10, 2)).unwrap());
        let human = block_on(engine.get_human_package()).unwrap();
        assert!(human.has_approached(200));
        assert_eq!(human.actions_remaining(), 0);

        let player = block_on(engine.get_player_screen_package(200)).unwrap();
        assert_eq!(player.offers.len(), 1);
        assert_eq!(player.offers[0].end_date, "2025-12-31");

        // Out of actions
        assert!(!block_on(engine.offer_contract(200, 10, 1)).unwrap());
    }

    #[test]
    fn test_day_advance_restores_actions() {
        let engine = FixtureEngine::from_json(WORLD).unwrap();
        block_on(engine.create_human_manager(10)).unwrap();
        block_on(engine.offer_contract(200, 10, 1)).unwrap();

        assert_eq!(block_on(engine.skip_days(7)).unwrap(), "2024-01-08");
        assert_eq!(block_on(engine.get_human_package()).unwrap().actions_remaining(), 1);
    }

    #[test]
    fn test_team_roster_players_are_reachable() {
        let engine = FixtureEngine::from_json(WORLD).unwrap();
        let keeper = block_on(engine.get_player_screen_package(1)).unwrap();
        assert_eq!(keeper.name, "Keeper");
        assert!(block_on(engine.get_player_screen_package(999)).is_err());
    }
}
