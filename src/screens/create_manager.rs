use crate::app::Msg;
use crate::model::{CompetitionId, NavOption, TeamId};
use crate::screens::{MountPoint, SelectId};
use crate::tui::{Element, Theme};

/// Pick a competition, then a team in it, then confirm.
#[derive(Debug, Clone, Default)]
pub struct CreateManagerScreen {
    pub competitions: Vec<NavOption>,
    pub competition: Option<NavOption>,
    /// Team options of the chosen competition; option 0 is the placeholder.
    pub teams: Vec<NavOption>,
    pub team: Option<NavOption>,
}

impl CreateManagerScreen {
    pub fn new(competitions: Vec<NavOption>) -> Self {
        Self {
            competitions,
            ..Self::default()
        }
    }

    /// Choose a competition. The placeholder id 0 changes nothing.
    pub fn choose_competition(&mut self, id: CompetitionId) -> bool {
        if id == 0 {
            return false;
        }
        let Some(option) = self.competitions.iter().find(|(cid, _)| *cid == id).cloned() else {
            log::warn!("Competition {} is not selectable", id);
            return false;
        };
        self.competition = Some(option);
        self.teams.clear();
        self.team = None;
        true
    }

    pub fn chosen_competition(&self) -> Option<CompetitionId> {
        self.competition.as_ref().map(|(id, _)| *id)
    }

    pub fn set_teams(&mut self, teams: Vec<NavOption>) {
        self.teams = teams;
        self.team = None;
    }

    pub fn choose_team(&mut self, id: TeamId) -> bool {
        if id == 0 {
            return false;
        }
        self.team = self.teams.iter().find(|(tid, _)| *tid == id).cloned();
        self.team.is_some()
    }

    pub fn chosen_team(&self) -> Option<TeamId> {
        self.team.as_ref().map(|(id, _)| *id)
    }

    pub fn view(&self, open: Option<SelectId>, theme: &Theme) -> Element<Msg> {
        let comp_label = self
            .competition
            .as_ref()
            .or_else(|| self.competitions.first())
            .map_or("Choose a competition".to_string(), |(_, name)| name.clone());
        let mut comp_select = Element::select("manager-competition", comp_label)
            .open(open == Some(SelectId::ManagerCompetition))
            .on_toggle(Msg::ToggleSelect(SelectId::ManagerCompetition));
        for (id, name) in &self.competitions {
            comp_select = comp_select.option(name.clone(), Msg::ManagerCompetitionChosen(*id));
        }

        let mut row = Element::row(vec![]).spacing(2).fit(comp_select.build());

        if !self.teams.is_empty() {
            let team_label = self
                .team
                .as_ref()
                .or_else(|| self.teams.first())
                .map_or(String::new(), |(_, name)| name.clone());
            let mut team_select = Element::select(MountPoint::TeamSelect.id(), team_label)
                .open(open == Some(SelectId::ManagerTeam))
                .on_toggle(Msg::ToggleSelect(SelectId::ManagerTeam));
            for (id, name) in &self.teams {
                team_select = team_select.option(name.clone(), Msg::ManagerTeamChosen(*id));
            }
            row = row.fit(team_select.build());
        }

        let mut done = Element::button("create-manager-done", "Done");
        if self.team.is_some() {
            done = done.on_press(Msg::CreateManager);
        }

        Element::column(vec![])
            .spacing(1)
            .fit(Element::styled("Choose your competition and team", theme.heading_style()))
            .fit(row.build())
            .fit(Element::row(vec![]).fit(done.build()).build())
            .build()
    }
}
