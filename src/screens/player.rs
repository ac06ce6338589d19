use crate::app::Msg;
use crate::model::{HumanPackage, Player};
use crate::tui::element::TableRow;
use crate::tui::{Element, Theme};
use crate::view::link::{self, LinkKind};

/// Longest contract the human may offer, in seasons.
pub const MAX_OFFER_SEASONS: u8 = 3;

#[derive(Debug, Clone)]
pub struct PlayerScreen {
    pub player: Player,
    pub human: HumanPackage,
}

impl PlayerScreen {
    pub fn new(player: Player, human: HumanPackage) -> Self {
        Self { player, human }
    }

    /// Offers need a managed team, a spare action and a player from elsewhere.
    pub fn can_offer(&self) -> bool {
        let Some(team_id) = self.human.team_id() else {
            return false;
        };
        let own_player = self.player.contract.as_ref().is_some_and(|c| c.team.id == team_id);
        !own_player && self.human.actions_remaining() > 0
    }

    pub fn view(&self, theme: &Theme) -> Element<Msg> {
        let player = &self.player;

        // Name (Team, Position, Ability, Country)
        let mut title = Element::row(vec![])
            .spacing(0)
            .fit(Element::styled(format!("{} (", player.name), theme.heading_style()));
        title = match &player.contract {
            Some(contract) => title.fit(link::encode(LinkKind::Team, contract.team.id, contract.team.name.clone())),
            None => title.fit(Element::text("Free agent")),
        };
        title = title.fit(Element::text(format!(
            ", {}, {}, {})",
            player.position, player.ability, player.country
        )));

        let contract = Element::table(vec!["Current Contract", "Started", "Seasons Left"])
            .rows(player.contract.iter().map(|contract| {
                TableRow::new(vec![
                    link::encode(LinkKind::Team, contract.team.id, contract.team.name.clone()),
                    Element::text(contract.start_date.clone()),
                    Element::text(contract.seasons_left.to_string()),
                ])
            }))
            .build();

        let offers = Element::table(vec!["Contract Offers", "Date", "Seasons"])
            .rows(player.offers.iter().map(|offer| {
                TableRow::new(vec![
                    link::encode(LinkKind::Team, offer.team.id, offer.team.name.clone()),
                    Element::text(offer.start_date.clone()),
                    Element::text(offer.seasons_left.to_string()),
                ])
            }))
            .build();

        let mut column = Element::column(vec![])
            .spacing(1)
            .fit(title.build())
            .fit(Element::text(format!("Age {}", player.age)))
            .fit(contract)
            .fit(offers);

        if self.can_offer() {
            let mut buttons = Element::row(vec![]).spacing(2);
            for years in 1..=MAX_OFFER_SEASONS {
                let label = if years == 1 {
                    "Offer 1 season".to_string()
                } else {
                    format!("Offer {} seasons", years)
                };
                buttons = buttons.fit(
                    Element::button(format!("offer-{}", years), label)
                        .on_press(Msg::OfferContract {
                            player_id: player.id,
                            years,
                        })
                        .build(),
                );
            }
            column = column.fit(buttons.build());
        } else if self.human.team.is_some() && self.human.actions_remaining() == 0 {
            column = column.fit(Element::styled("No actions remaining today.", theme.caption_style()));
        }

        column.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contract, ContractTeam, HumanTeamPackage, Position};

    fn player(team_id: Option<u32>) -> Player {
        Player {
            id: 4,
            name: "Mikko".into(),
            country: "Finland".into(),
            position: Position::LW,
            age: 22,
            ability: 70,
            contract: team_id.map(|id| Contract {
                start_date: "2023-07-01".into(),
                end_date: "2025-06-30".into(),
                seasons_left: 2,
                team: ContractTeam { id, name: "Kärpät".into() },
            }),
            offers: vec![],
        }
    }

    fn human(actions: u8) -> HumanPackage {
        HumanPackage {
            team: Some(HumanTeamPackage {
                id: 1,
                actions_remaining: actions,
                roster_overview: vec![],
                approached_players: vec![],
            }),
        }
    }

    fn offer_buttons(screen: &PlayerScreen) -> usize {
        let view = screen.view(&Theme::default());
        let mut count = 0;
        view.walk(&mut |el| {
            if let Element::Button { on_press: Some(Msg::OfferContract { .. }), .. } = el {
                count += 1;
            }
        });
        count
    }

    #[test]
    fn test_offer_buttons_for_other_teams_player() {
        let screen = PlayerScreen::new(player(Some(2)), human(2));
        assert_eq!(offer_buttons(&screen), 3);
    }

    #[test]
    fn test_no_offers_for_own_player_or_without_actions() {
        assert_eq!(offer_buttons(&PlayerScreen::new(player(Some(1)), human(3))), 0);
        assert_eq!(offer_buttons(&PlayerScreen::new(player(None), human(0))), 0);
        assert_eq!(offer_buttons(&PlayerScreen::new(player(None), HumanPackage::default())), 0);
    }
}
