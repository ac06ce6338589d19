//! The simulation engine seam.
//!
//! The engine owns dates, standings, contracts and player generation. This crate only
//! asks for packages and triggers mutations, then re-fetches whatever changed.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::{
    Competition, CompetitionId, HumanPackage, NavOption, Player, PlayerId, TeamId, TeamPackage, TopBarPackage,
};

pub mod fixture;
pub mod http;

pub use fixture::{FixtureEngine, World};
pub use http::HttpEngine;

pub type SharedEngine = Arc<dyn Engine>;

#[async_trait]
pub trait Engine: Send + Sync {
    async fn get_comp_screen_info(&self, id: CompetitionId) -> Result<Competition>;

    async fn get_human_package(&self) -> Result<HumanPackage>;

    async fn get_team_screen_package(&self, id: TeamId) -> Result<TeamPackage>;

    async fn get_player_screen_package(&self, id: PlayerId) -> Result<Player>;

    async fn get_free_agents_package(&self) -> Result<Vec<Player>>;

    async fn get_comp_select_package(&self) -> Result<Vec<NavOption>>;

    async fn get_child_comp_select_info(&self, id: CompetitionId) -> Result<Vec<NavOption>>;

    async fn get_team_select_package(&self, comp_id: CompetitionId) -> Result<Vec<NavOption>>;

    async fn get_top_bar_package(&self) -> Result<TopBarPackage>;

    /// Advance one day. Returns the new date.
    async fn go_to_next_day(&self) -> Result<String>;

    /// Advance several days. Returns the new date.
    async fn skip_days(&self, days: u16) -> Result<String>;

    async fn create_human_manager(&self, team_id: TeamId) -> Result<()>;

    /// Returns whether the offer was registered.
    async fn offer_contract(&self, player_id: PlayerId, team_id: TeamId, years: u8) -> Result<bool>;
}
