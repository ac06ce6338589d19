use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::Engine;
use crate::model::{
    Competition, CompetitionId, HumanPackage, NavOption, Player, PlayerId, TeamId, TeamPackage, TopBarPackage,
};

/// Engine reached over HTTP: every command is a JSON POST to `<base>/<command>`.
pub struct HttpEngine {
    client: Client,
    base_url: String,
}

impl HttpEngine {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hockey-sim-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn invoke<T: DeserializeOwned>(&self, command: &str, args: Value) -> Result<T> {
        let url = format!("{}/{}", self.base_url, command);
        log::debug!("POST {} {}", url, args);

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .with_context(|| format!("Engine request '{}' failed", command))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Engine command '{}' returned {}: {}", command, status, body);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Engine command '{}' returned an unexpected package", command))
    }
}

#[async_trait]
impl Engine for HttpEngine {
    async fn get_comp_screen_info(&self, id: CompetitionId) -> Result<Competition> {
        self.invoke("get_comp_screen_info", json!({ "id": id })).await
    }

    async fn get_human_package(&self) -> Result<HumanPackage> {
        self.invoke("get_human_package", json!({})).await
    }

    async fn get_team_screen_package(&self, id: TeamId) -> Result<TeamPackage> {
        self.invoke("get_team_screen_package", json!({ "id": id })).await
    }

    async fn get_player_screen_package(&self, id: PlayerId) -> Result<Player> {
        self.invoke("get_player_screen_package", json!({ "id": id })).await
    }

    async fn get_free_agents_package(&self) -> Result<Vec<Player>> {
        self.invoke("get_free_agents_package", json!({})).await
    }

    async fn get_comp_select_package(&self) -> Result<Vec<NavOption>> {
        self.invoke("get_comp_select_package", json!({})).await
    }

    async fn get_child_comp_select_info(&self, id: CompetitionId) -> Result<Vec<NavOption>> {
        self.invoke("get_child_comp_select_info", json!({ "id": id })).await
    }

    async fn get_team_select_package(&self, comp_id: CompetitionId) -> Result<Vec<NavOption>> {
        self.invoke("get_team_select_package", json!({ "id": comp_id })).await
    }

    async fn get_top_bar_package(&self) -> Result<TopBarPackage> {
        self.invoke("get_top_bar_package", json!({})).await
    }

    async fn go_to_next_day(&self) -> Result<String> {
        self.invoke("go_to_next_day", json!({})).await
    }

    async fn skip_days(&self, days: u16) -> Result<String> {
        self.invoke("skip_days", json!({ "days": days })).await
    }

    async fn create_human_manager(&self, team_id: TeamId) -> Result<()> {
        let _: Value = self.invoke("create_human_manager", json!({ "id": team_id })).await?;
        Ok(())
    }

    async fn offer_contract(&self, player_id: PlayerId, team_id: TeamId, years: u8) -> Result<bool> {
        self.invoke(
            "offer_contract",
            json!({ "playerId": player_id, "teamId": team_id, "years": years }),
        )
        .await
    }
}
