use crate::app::Msg;
use crate::model::{HumanPackage, NavOption, TeamPackage};
use crate::tui::element::TableRow;
use crate::tui::{Element, Theme};
use crate::view::link::{self, LinkKind};

/// Landing screen once the human manages a team.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub human: HumanPackage,
    pub team: TeamPackage,
    pub competitions: Vec<NavOption>,
}

impl HomeScreen {
    pub fn new(human: HumanPackage, team: TeamPackage, competitions: Vec<NavOption>) -> Self {
        Self {
            human,
            team,
            competitions,
        }
    }

    pub fn view(&self, theme: &Theme) -> Element<Msg> {
        let team_line = Element::row(vec![])
            .spacing(1)
            .fit(Element::text("Your team:"))
            .fit(link::encode(LinkKind::Team, self.team.id, self.team.name.clone()))
            .build();

        let competitions = Element::table(vec!["Competitions"])
            .rows(
                self.competitions
                    .iter()
                    .filter(|(id, _)| *id != 0)
                    .map(|(id, name)| TableRow::new(vec![link::encode(LinkKind::Competition, *id, name.clone())])),
            )
            .build();

        Element::column(vec![])
            .spacing(1)
            .fit(Element::styled("Home", theme.heading_style()))
            .fit(team_line)
            .fit(Element::text(format!(
                "{} players under contract, {} actions left today.",
                self.team.players.len(),
                self.human.actions_remaining()
            )))
            .fit(competitions)
            .build()
    }
}
