use crate::app::Msg;
use crate::model::{HumanPackage, Player};
use crate::screens::{MountPoint, SelectId};
use crate::tui::element::TableRow;
use crate::tui::{Element, Theme};
use crate::view::link::{self, LinkKind};
use crate::view::roster::{apply_filter, FilterableRow, PlayerFilter, RowStatus};

/// Free agent list.
#[derive(Debug, Clone)]
pub struct PlayerSearchScreen {
    pub filter: PlayerFilter,
    pub rows: Vec<FilterableRow<Player>>,
}

impl PlayerSearchScreen {
    pub fn new(players: Vec<Player>, human: &HumanPackage) -> Self {
        let rows = players
            .into_iter()
            .map(|player| {
                let status = RowStatus {
                    player_id: player.id,
                    in_roster: false,
                    approached: human.has_approached(player.id),
                    seasons_left: player.seasons_left(),
                };
                FilterableRow::new(status, player)
            })
            .collect();

        let mut screen = Self {
            filter: PlayerFilter::default(),
            rows,
        };
        screen.set_filter(PlayerFilter::default());
        screen
    }

    pub fn set_filter(&mut self, filter: PlayerFilter) {
        self.filter = filter;
        apply_filter(&mut self.rows, &filter);
    }

    pub fn view(&self, open: Option<SelectId>, theme: &Theme) -> Element<Msg> {
        let mut select = Element::select(MountPoint::PlayerFilter.id(), self.filter.to_string())
            .open(open == Some(SelectId::PlayerFilter))
            .on_toggle(Msg::ToggleSelect(SelectId::PlayerFilter));
        for filter in PlayerFilter::ALL {
            select = select.option(filter.to_string(), Msg::PlayerFilterChanged(filter));
        }

        let table = Element::table(vec!["Free Agents", "Country", "Position", "Ability", "No. of Offers"])
            .rows(self.rows.iter().map(|row| {
                let player = &row.item;
                TableRow::new(vec![
                    link::encode(LinkKind::Player, player.id, player.name.clone()),
                    Element::text(player.country.clone()),
                    Element::text(player.position.to_string()),
                    Element::text(player.ability.to_string()),
                    Element::text(player.offers.len().to_string()),
                ])
                .hidden(row.hidden)
            }))
            .build();

        Element::column(vec![])
            .spacing(1)
            .fit(Element::styled("Scouting", theme.heading_style()))
            .fit(Element::row(vec![]).fit(select.build()).build())
            .fit(table)
            .build()
    }
}
