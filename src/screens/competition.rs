use anyhow::Result;

use crate::app::Msg;
use crate::engine::SharedEngine;
use crate::model::{Competition, CompetitionId, NavOption, TeamRow};
use crate::screens::SelectId;
use crate::tui::element::TableRow;
use crate::tui::{Element, Theme};
use crate::view::format::{classify, Format, FormatError, Variant};
use crate::view::link::{self, LinkKind};
use crate::view::schedule::{self, Direction};
use crate::view::{build_round, build_tree};

/// A classified competition package.
#[derive(Debug, Clone)]
pub struct CompetitionScreen {
    pub competition: Competition,
    pub variant: Variant,
    pub format: Option<Format>,
    /// Child competitions of a parent node.
    pub children: Vec<NavOption>,
}

impl CompetitionScreen {
    pub fn new(competition: Competition, children: Vec<NavOption>) -> Result<Self, FormatError> {
        let variant = classify(&competition)?;
        if variant == Variant::KnockoutRound && competition.season.knockout_round.is_none() {
            return Err(FormatError::MissingKnockoutRound);
        }

        // Trees are drawn from their rounds alone, so their format may be anything.
        let format = match (&competition.format, variant) {
            (Some(descriptor), Variant::TournamentTree) => Format::try_from(descriptor).ok(),
            (Some(descriptor), _) => Some(Format::try_from(descriptor)?),
            (None, _) => None,
        };

        Ok(Self {
            competition,
            variant,
            format,
            children,
        })
    }

    pub fn view(&self, open: Option<SelectId>, theme: &Theme) -> Element<Msg> {
        let mut column = Element::column(vec![]).spacing(1).fit(Element::styled(
            format!("{} {}", self.competition.display_name(), self.competition.season.name),
            theme.heading_style(),
        ));

        if !self.competition.comp_nav.is_empty() {
            column = column.fit(self.nav_selects(open));
        }
        if let Some(format) = &self.format {
            column = column.fit(Element::styled(format.summary(), theme.caption_style()));
        }

        let body = match self.variant {
            Variant::RoundRobin => self.round_robin(),
            Variant::Parent => self.parent(),
            Variant::KnockoutRound => self.knockout_round(),
            Variant::TournamentTree => self.tournament(),
        };
        column.fit(body).build()
    }

    fn nav_selects(&self, open: Option<SelectId>) -> Element<Msg> {
        let mut row = Element::row(vec![]).spacing(2);
        for (level, options) in self.competition.comp_nav.iter().enumerate() {
            let label = options
                .iter()
                .find(|(id, _)| *id == self.competition.id)
                .or_else(|| options.first())
                .map_or("", |(_, name)| name.as_str());

            let mut select = Element::select(format!("comp-nav-{}", level), label)
                .open(open == Some(SelectId::CompetitionNav(level)))
                .on_toggle(Msg::ToggleSelect(SelectId::CompetitionNav(level)));
            for (id, name) in options {
                select = select.option(name.clone(), Msg::CompetitionChosen(*id));
            }
            row = row.fit(select.build());
        }
        row.build()
    }

    fn round_robin(&self) -> Element<Msg> {
        let season = &self.competition.season;
        let standings = Element::table(vec![
            "Rank", "Name", "GP", "W", "OTW", "D", "OTL", "L", "GF", "GA", "Diff", "Pts",
        ])
        .rows(season.teams.iter().map(standings_row))
        .build();

        Element::column(vec![])
            .spacing(1)
            .fit(standings)
            .fit(schedules(season, false))
            .build()
    }

    fn parent(&self) -> Element<Msg> {
        let season = &self.competition.season;
        let mut column = Element::column(vec![]).spacing(1);

        if !season.teams.is_empty() {
            let ranking = Element::table(vec!["Rank", "Team"])
                .rows(season.teams.iter().map(|team| {
                    TableRow::new(vec![
                        Element::text(team.rank.clone()),
                        link::encode(LinkKind::Team, team.id, team.name.clone()),
                    ])
                }))
                .build();
            column = column.fit(ranking);
        }

        let children = Element::table(vec!["Competitions"])
            .rows(
                self.children
                    .iter()
                    .filter(|(id, _)| *id != 0)
                    .map(|(id, name)| TableRow::new(vec![link::encode(LinkKind::Competition, *id, name.clone())])),
            )
            .build();
        column.fit(children).build()
    }

    fn tournament(&self) -> Element<Msg> {
        let season = &self.competition.season;
        Element::column(vec![])
            .spacing(1)
            .fit(build_tree(season.rounds.as_deref().unwrap_or_default()).to_element())
            .fit(schedules(season, true))
            .build()
    }

    fn knockout_round(&self) -> Element<Msg> {
        let season = &self.competition.season;
        let mut pairs = season
            .knockout_round
            .as_ref()
            .map(|round| {
                let mut list = build_round(&round.pairs);
                list.title = round.name.clone();
                list
            })
            .unwrap_or_default();
        if pairs.title.is_empty() {
            pairs.title = "Current round".to_string();
        }

        Element::column(vec![])
            .spacing(1)
            .fit(pairs.to_element())
            .fit(schedules(season, true))
            .build()
    }
}

fn standings_row(team: &TeamRow) -> TableRow<Msg> {
    TableRow::new(vec![
        Element::text(team.rank.clone()),
        link::encode(LinkKind::Team, team.id, team.name.clone()),
        Element::text(team.games.to_string()),
        Element::text(team.wins.to_string()),
        Element::text(team.ot_wins.to_string()),
        Element::text(team.draws.to_string()),
        Element::text(team.ot_losses.to_string()),
        Element::text(team.losses.to_string()),
        Element::text(team.goals_scored.to_string()),
        Element::text(team.goals_conceded.to_string()),
        Element::text(team.goal_difference.to_string()),
        Element::text(team.points.to_string()),
    ])
}

/// Previous and next matchday side by side.
fn schedules(season: &crate::model::Season, show_seeds: bool) -> Element<Msg> {
    let past = schedule::window(&season.played_games, Direction::Past);
    let future = schedule::window(&season.upcoming_games, Direction::Future);
    Element::row(vec![past.to_element(show_seeds), future.to_element(show_seeds)])
        .spacing(4)
        .build()
}

/// Fetch and classify a competition. Parent nodes also fetch their children.
pub async fn load(engine: &SharedEngine, id: CompetitionId) -> Result<CompetitionScreen> {
    let competition = engine.get_comp_screen_info(id).await?;
    let children = match classify(&competition)? {
        Variant::Parent => engine.get_child_comp_select_info(id).await?,
        _ => Vec::new(),
    };
    Ok(CompetitionScreen::new(competition, children)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormatDescriptor, MatchRules, Season};

    fn competition(kind: Option<&str>) -> Competition {
        Competition {
            id: 3,
            name: "Cup".into(),
            full_name: String::new(),
            format: kind.map(|kind| FormatDescriptor {
                kind: kind.to_string(),
                round_robin: None,
                knockout_round: None,
                match_rules: MatchRules {
                    periods: 3,
                    period_length: 1200,
                    overtime_length: 0,
                    continuous_overtime: true,
                },
            }),
            season: Season {
                name: "2024".into(),
                teams: vec![],
                knockout_round: None,
                rounds: None,
                played_games: vec![],
                upcoming_games: vec![],
            },
            comp_nav: vec![],
        }
    }

    #[test]
    fn test_knockout_without_round_is_rejected() {
        let result = CompetitionScreen::new(competition(Some("KnockoutRound")), vec![]);
        assert_eq!(result.err(), Some(FormatError::MissingKnockoutRound));
    }

    #[test]
    fn test_parent_lists_children_as_links() {
        let screen = CompetitionScreen::new(competition(None), vec![(0, "Pick".into()), (7, "Liiga".into())]).unwrap();
        assert_eq!(screen.variant, Variant::Parent);

        let view = screen.view(None, &Theme::default());
        let mut links = Vec::new();
        view.walk(&mut |el| {
            if let Some(raw) = link::decode(el) {
                links.push(raw);
            }
        });
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, "comp");
        assert_eq!(links[0].id, 7);
    }

    #[test]
    fn test_tree_shows_seeded_schedules() {
        let mut comp = competition(Some("KnockoutRound"));
        comp.season.rounds = Some(vec![]);
        let screen = CompetitionScreen::new(comp, vec![]).unwrap();
        assert_eq!(screen.variant, Variant::TournamentTree);

        let mut captions = Vec::new();
        screen.view(None, &Theme::default()).walk(&mut |el| {
            if let Element::Table { caption: Some(caption), .. } = el {
                captions.push(caption.clone());
            }
        });
        assert!(captions.contains(&"No previous games.".to_string()));
        assert!(captions.contains(&"No upcoming games.".to_string()));
    }

    #[test]
    fn test_unknown_format_fails_to_build() {
        let result = CompetitionScreen::new(competition(Some("Swiss")), vec![]);
        assert!(matches!(result, Err(FormatError::UnknownFormat(_))));
    }
}
