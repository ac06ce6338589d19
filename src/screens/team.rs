use anyhow::Result;
use futures::future::try_join_all;

use crate::app::Msg;
use crate::engine::SharedEngine;
use crate::model::{HumanPackage, Player, TeamId, TeamPackage};
use crate::screens::{MountPoint, SelectId};
use crate::tui::element::TableRow;
use crate::tui::{Element, Theme};
use crate::view::link::{self, LinkKind};
use crate::view::roster::{apply_filter, FilterableRow, RosterMode, RowStatus};

#[derive(Debug, Clone)]
pub struct TeamScreen {
    pub team: TeamPackage,
    /// Whether the human manages this team. Only then is the roster filter offered.
    pub managed: bool,
    pub mode: RosterMode,
    pub rows: Vec<FilterableRow<Player>>,
}

impl TeamScreen {
    /// `approached` holds the players the human has made offers to. Ignored for other teams.
    pub fn new(team: TeamPackage, human: &HumanPackage, approached: Vec<Player>) -> Self {
        let managed = human.team_id() == Some(team.id);

        let mut rows: Vec<FilterableRow<Player>> = team
            .players
            .iter()
            .map(|player| {
                FilterableRow::new(
                    RowStatus {
                        player_id: player.id,
                        in_roster: true,
                        approached: false,
                        seasons_left: player.seasons_left(),
                    },
                    player.clone(),
                )
            })
            .collect();

        if managed {
            rows.extend(approached.into_iter().map(|player| {
                FilterableRow::new(
                    RowStatus {
                        player_id: player.id,
                        in_roster: false,
                        approached: true,
                        seasons_left: player.seasons_left(),
                    },
                    player,
                )
            }));
        }

        let mut screen = Self {
            team,
            managed,
            mode: RosterMode::default(),
            rows,
        };
        screen.set_mode(RosterMode::default());
        screen
    }

    pub fn set_mode(&mut self, mode: RosterMode) {
        self.mode = mode;
        apply_filter(&mut self.rows, &mode);
    }

    pub fn view(&self, open: Option<SelectId>, theme: &Theme) -> Element<Msg> {
        let mut heading = Element::row(vec![])
            .spacing(2)
            .fit(Element::styled(self.team.name.clone(), theme.heading_style()));
        if let Some(manager) = &self.team.manager {
            heading = heading.fit(Element::styled(format!("Manager: {}", manager.name), theme.caption_style()));
        }

        let mut column = Element::column(vec![]).spacing(1).fit(heading.build());

        if self.managed {
            let mut select = Element::select(MountPoint::RosterFilter.id(), self.mode.to_string())
                .open(open == Some(SelectId::RosterFilter))
                .on_toggle(Msg::ToggleSelect(SelectId::RosterFilter));
            for mode in RosterMode::ALL {
                select = select.option(mode.to_string(), Msg::RosterModeChanged(mode));
            }
            column = column.fit(Element::row(vec![]).fit(select.build()).build());
        }

        let table = Element::table(vec!["Name", "Position", "Ability", "Seasons left"])
            .rows(self.rows.iter().map(|row| {
                let player = &row.item;
                TableRow::new(vec![
                    link::encode(LinkKind::Player, player.id, player.name.clone()),
                    Element::text(player.position.to_string()),
                    Element::text(player.ability.to_string()),
                    Element::text(row.status.seasons_left.map_or("-".to_string(), |s| s.to_string())),
                ])
                .hidden(row.hidden)
            }))
            .build();

        column.fit(table).build()
    }
}

pub async fn load(engine: &SharedEngine, id: TeamId) -> Result<TeamScreen> {
    let (team, human) = futures::try_join!(engine.get_team_screen_package(id), engine.get_human_package())?;

    let approached = match &human.team {
        Some(human_team) if human_team.id == id => {
            try_join_all(
                human_team
                    .approached_players
                    .iter()
                    .map(|player_id| engine.get_player_screen_package(*player_id)),
            )
            .await?
        }
        _ => Vec::new(),
    };

    Ok(TeamScreen::new(team, &human, approached))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HumanTeamPackage, Position};
    use crate::view::roster::visible_ids;

    fn player(id: u32, name: &str) -> Player {
        Player {
            id,
            name: name.into(),
            country: "Finland".into(),
            position: Position::C,
            age: 24,
            ability: 60,
            contract: None,
            offers: vec![],
        }
    }

    fn human(team_id: u32) -> HumanPackage {
        HumanPackage {
            team: Some(HumanTeamPackage {
                id: team_id,
                actions_remaining: 3,
                roster_overview: vec![],
                approached_players: vec![9],
            }),
        }
    }

    fn team() -> TeamPackage {
        TeamPackage {
            id: 5,
            name: "Lukko".into(),
            manager: None,
            players: vec![player(1, "Starter"), player(2, "Reserve")],
        }
    }

    #[test]
    fn test_managed_team_modes() {
        let mut screen = TeamScreen::new(team(), &human(5), vec![player(9, "Target")]);
        assert!(screen.managed);
        assert_eq!(visible_ids(&screen.rows), vec![1, 2]);

        screen.set_mode(RosterMode::Approached);
        assert_eq!(visible_ids(&screen.rows), vec![9]);

        screen.set_mode(RosterMode::Both);
        assert_eq!(visible_ids(&screen.rows), vec![1, 2, 9]);

        screen.set_mode(RosterMode::Roster);
        assert_eq!(visible_ids(&screen.rows), vec![1, 2]);
        assert_eq!(screen.rows.len(), 3);
    }

    #[test]
    fn test_other_team_shows_everyone() {
        let screen = TeamScreen::new(team(), &human(99), vec![player(9, "Target")]);
        assert!(!screen.managed);
        assert_eq!(visible_ids(&screen.rows), vec![1, 2]);
    }
}
