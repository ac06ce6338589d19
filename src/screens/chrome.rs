//! The bar above the content region: date, day controls, competition picker and
//! remaining actions. It is built once per session and only its data is refreshed.

use crate::app::Msg;
use crate::model::{HumanPackage, NavOption};
use crate::screens::{ScreenId, SelectId};
use crate::tui::{Element, LayoutConstraint, Theme};

#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub date: String,
    pub human: HumanPackage,
    /// Top-level competition options; option 0 is the placeholder.
    pub competitions: Vec<NavOption>,
}

impl Chrome {
    pub fn view(&self, open: Option<SelectId>, skip_days: u16, theme: &Theme) -> Element<Msg> {
        let label = self
            .competitions
            .first()
            .map_or("Competitions".to_string(), |(_, name)| name.clone());
        let mut competitions = Element::select("top-competition", label)
            .open(open == Some(SelectId::TopCompetition))
            .on_toggle(Msg::ToggleSelect(SelectId::TopCompetition));
        for (id, name) in &self.competitions {
            competitions = competitions.option(name.clone(), Msg::CompetitionChosen(*id));
        }

        let date = if self.date.is_empty() { "-".to_string() } else { self.date.clone() };

        // Day controls on the first line, picker and actions on the second
        let controls = Element::row(vec![])
            .spacing(2)
            .fit(Element::styled(date, theme.heading_style()))
            .fit(Element::button("continue", "Continue").on_press(Msg::ContinueDay).build())
            .fit(
                Element::button("skip-days", format!("Skip {} days", skip_days))
                    .on_press(Msg::SkipDays)
                    .build(),
            )
            .fit(
                Element::button("home", "Home Screen")
                    .on_press(Msg::Navigate(ScreenId::Home))
                    .build(),
            )
            .fit(
                Element::button("scouting", "Scouting")
                    .on_press(Msg::Navigate(ScreenId::PlayerSearch))
                    .build(),
            );

        let mut picker = Element::row(vec![]).spacing(2).fit(competitions.build());
        if self.human.team.is_some() {
            picker = picker.add(
                Element::text(format!("Actions remaining: {}", self.human.actions_remaining())),
                LayoutConstraint::Fill(1),
            );
        }

        let lines = Element::column(vec![]).fit(controls.build()).fit(picker.build());
        Element::panel(lines.build()).title("Hockey Sim").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HumanTeamPackage;

    #[test]
    fn test_actions_shown_only_with_team() {
        let mut chrome = Chrome {
            date: "2024-01-01".into(),
            ..Chrome::default()
        };
        let texts = |chrome: &Chrome| {
            let mut found = Vec::new();
            chrome.view(None, 7, &Theme::default()).walk(&mut |el| {
                if let Element::Text { content, .. } = el {
                    found.push(content.clone());
                }
            });
            found
        };

        assert!(!texts(&chrome).iter().any(|t| t.starts_with("Actions remaining")));

        chrome.human.team = Some(HumanTeamPackage {
            id: 1,
            actions_remaining: 2,
            roster_overview: vec![],
            approached_players: vec![],
        });
        assert!(texts(&chrome).contains(&"Actions remaining: 2".to_string()));
    }

    #[test]
    fn test_every_button_fits_in_80_columns() {
        let chrome = Chrome {
            date: "2024-01-05".into(),
            competitions: vec![(0, "Choose a competition".into()), (1, "Liiga".into())],
            ..Chrome::default()
        };
        match chrome.view(None, 7, &Theme::default()) {
            Element::Panel { child, .. } => {
                assert_eq!(child.height(), 2);
                match *child {
                    Element::Column { items, .. } => {
                        for (_, line) in &items {
                            assert!(line.width() <= 78, "line is {} wide", line.width());
                        }
                    }
                    other => panic!("expected column, got {:?}", other),
                }
            }
            other => panic!("expected panel, got {:?}", other),
        }
    }
}
