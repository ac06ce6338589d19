//! The hockey sim front end as an [`App`].

use crossterm::event::KeyCode;
use ratatui::text::{Line, Span};

use crate::engine::SharedEngine;
use crate::model::{CompetitionId, NavOption, PlayerId, TeamId, TopBarPackage};
use crate::screens::{self, MountPoint, Screen, ScreenController, ScreenId, SelectId};
use crate::tui::{App, Command, Element, LayoutConstraint, Subscription, Theme};
use crate::view::link::Link;
use crate::view::roster::{PlayerFilter, RosterMode};

pub const DEFAULT_SKIP_DAYS: u16 = 7;

/// Lines moved per PgUp/PgDn
pub const PAGE_LINES: i16 = 10;
/// Lines moved per wheel notch
pub const WHEEL_LINES: i16 = 3;

/// Everything the UI owns between frames.
pub struct ViewState {
    pub engine: SharedEngine,
    pub screens: ScreenController,
    pub open_select: Option<SelectId>,
    /// Shown in place of the key help until the user navigates elsewhere.
    pub status: Option<Status>,
    pub skip_days: u16,
    /// Lines of the mounted screen scrolled out of view.
    pub scroll: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Notice(String),
    Error(String),
}

pub struct InitParams {
    pub engine: SharedEngine,
    pub skip_days: u16,
    pub start: ScreenId,
}

impl InitParams {
    pub fn new(engine: SharedEngine) -> Self {
        Self {
            engine,
            skip_days: DEFAULT_SKIP_DAYS,
            start: ScreenId::Home,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Navigate(ScreenId),
    ScreenLoaded(screens::NavToken, Result<Screen, String>),
    TopBarLoaded(Result<TopBarPackage, String>),
    CompetitionsLoaded(Result<Vec<NavOption>, String>),

    ToggleSelect(SelectId),
    CloseSelect,
    /// From the chrome picker or a competition's nav selects. Id 0 is the placeholder.
    CompetitionChosen(CompetitionId),
    RosterModeChanged(RosterMode),
    PlayerFilterChanged(PlayerFilter),
    ScrollContent(i16),

    ContinueDay,
    SkipDays,
    DayAdvanced(Result<String, String>),

    OfferContract { player_id: PlayerId, years: u8 },
    OfferResolved { player_id: PlayerId, result: Result<bool, String> },

    ManagerCompetitionChosen(CompetitionId),
    TeamOptionsLoaded(CompetitionId, Result<Vec<NavOption>, String>),
    ManagerTeamChosen(TeamId),
    CreateManager,
    ManagerCreated(Result<(), String>),

    Quit,
}

pub struct SimApp;

fn error_text(e: anyhow::Error) -> String {
    format!("{:#}", e)
}

impl ViewState {
    fn navigate(&mut self, target: ScreenId) -> Command<Msg> {
        let token = self.screens.begin_navigation(target);
        self.open_select = None;
        let engine = self.engine.clone();
        Command::perform(screens::load(engine, target), move |result| {
            Msg::ScreenLoaded(token, result.map_err(error_text))
        })
    }

    fn refresh_top_bar(&self) -> Command<Msg> {
        let engine = self.engine.clone();
        Command::perform(async move { engine.get_top_bar_package().await }, |result| {
            Msg::TopBarLoaded(result.map_err(error_text))
        })
    }

    fn load_competitions(&self) -> Command<Msg> {
        let engine = self.engine.clone();
        Command::perform(async move { engine.get_comp_select_package().await }, |result| {
            Msg::CompetitionsLoaded(result.map_err(error_text))
        })
    }

    /// Re-read the chrome and remount whatever is showing.
    fn refresh_after_mutation(&mut self) -> Command<Msg> {
        let target = self.screens.current().unwrap_or(ScreenId::Home);
        Command::batch(vec![self.refresh_top_bar(), self.navigate(target)])
    }

    /// Move the content viewport, never past the last line of the screen.
    fn scroll_by(&mut self, delta: i16) {
        let height = self
            .screens
            .screen()
            .map_or(0, |screen| screen.view(self.open_select, &Theme::default()).height());
        let target = i32::from(self.scroll) + i32::from(delta);
        self.scroll = target.clamp(0, i32::from(height.saturating_sub(1))) as u16;
    }

    fn report(&mut self, context: &str, error: String) {
        log::error!("{}: {}", context, error);
        self.status = Some(Status::Error(format!("{}: {}", context, error)));
    }

    fn create_manager_screen(&mut self) -> Option<&mut screens::CreateManagerScreen> {
        match self.screens.screen_mut() {
            Some(Screen::CreateManager(screen)) => Some(screen),
            _ => {
                MountPoint::TeamSelect.missing();
                None
            }
        }
    }
}

impl App for SimApp {
    type State = ViewState;
    type Msg = Msg;
    type InitParams = InitParams;

    fn init(params: InitParams) -> (ViewState, Command<Msg>) {
        let mut state = ViewState {
            engine: params.engine,
            screens: ScreenController::new(),
            open_select: None,
            status: None,
            skip_days: params.skip_days,
            scroll: 0,
        };

        let mut commands = Vec::new();
        if state.screens.ensure_chrome() {
            commands.push(state.refresh_top_bar());
            commands.push(state.load_competitions());
        }
        commands.push(state.navigate(params.start));
        (state, Command::batch(commands))
    }

    fn update(state: &mut ViewState, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Navigate(target) => {
                state.status = None;
                state.navigate(target)
            }

            Msg::ScreenLoaded(token, Ok(screen)) => {
                let previous = state.screens.current();
                if !state.screens.mount(token, screen) {
                    return Command::None;
                }
                // A refreshed screen keeps its scroll position
                if state.screens.current() != previous {
                    state.scroll = 0;
                }
                Command::clear_focus()
            }
            Msg::ScreenLoaded(token, Err(e)) => {
                let target = state.screens.pending_target();
                if state.screens.fail(token) {
                    state.report(&format!("Could not open {:?}", target.unwrap_or(ScreenId::Home)), e);
                }
                Command::None
            }

            Msg::TopBarLoaded(Ok(package)) => {
                state.screens.refresh_chrome(package);
                Command::None
            }
            Msg::TopBarLoaded(Err(e)) => {
                state.report("Could not load the top bar", e);
                Command::None
            }
            Msg::CompetitionsLoaded(Ok(options)) => {
                state.screens.set_competition_options(options);
                Command::None
            }
            Msg::CompetitionsLoaded(Err(e)) => {
                state.report("Could not load competitions", e);
                Command::None
            }

            Msg::ToggleSelect(select) => {
                state.open_select = if state.open_select == Some(select) { None } else { Some(select) };
                Command::None
            }
            Msg::CloseSelect => {
                state.open_select = None;
                Command::None
            }
            Msg::CompetitionChosen(id) => {
                state.open_select = None;
                if id == 0 {
                    return Command::None;
                }
                state.navigate(ScreenId::Competition(id))
            }
            Msg::RosterModeChanged(mode) => {
                state.open_select = None;
                match state.screens.screen_mut() {
                    Some(Screen::Team(team)) => team.set_mode(mode),
                    _ => MountPoint::RosterFilter.missing(),
                }
                Command::None
            }
            Msg::PlayerFilterChanged(filter) => {
                state.open_select = None;
                match state.screens.screen_mut() {
                    Some(Screen::PlayerSearch(search)) => search.set_filter(filter),
                    _ => MountPoint::PlayerFilter.missing(),
                }
                Command::None
            }

            Msg::ScrollContent(delta) => {
                state.scroll_by(delta);
                Command::None
            }

            Msg::ContinueDay => {
                let engine = state.engine.clone();
                Command::perform(async move { engine.go_to_next_day().await }, |result| {
                    Msg::DayAdvanced(result.map_err(error_text))
                })
            }
            Msg::SkipDays => {
                let engine = state.engine.clone();
                let days = state.skip_days;
                Command::perform(async move { engine.skip_days(days).await }, |result| {
                    Msg::DayAdvanced(result.map_err(error_text))
                })
            }
            Msg::DayAdvanced(Ok(date)) => {
                log::info!("Simulation date is now {}", date);
                state.status = None;
                state.refresh_after_mutation()
            }
            Msg::DayAdvanced(Err(e)) => {
                state.report("Could not advance the simulation", e);
                Command::None
            }

            Msg::OfferContract { player_id, years } => {
                let Some(team_id) = state.screens.human().and_then(|h| h.team_id()) else {
                    state.report("Cannot offer a contract", "no team is managed".to_string());
                    return Command::None;
                };
                let engine = state.engine.clone();
                Command::perform(
                    async move { engine.offer_contract(player_id, team_id, years).await },
                    move |result| Msg::OfferResolved {
                        player_id,
                        result: result.map_err(error_text),
                    },
                )
            }
            Msg::OfferResolved { player_id, result } => match result {
                Ok(accepted) => {
                    state.status = Some(if accepted {
                        Status::Notice("Contract offer sent.".to_string())
                    } else {
                        Status::Error("No actions remaining today.".to_string())
                    });
                    // Re-fetch the player only if the user is still looking at them
                    if state.screens.showing() == Some(ScreenId::Player(player_id)) {
                        Command::batch(vec![state.refresh_top_bar(), state.navigate(ScreenId::Player(player_id))])
                    } else {
                        state.refresh_top_bar()
                    }
                }
                Err(e) => {
                    state.report("Contract offer failed", e);
                    Command::None
                }
            },

            Msg::ManagerCompetitionChosen(id) => {
                state.open_select = None;
                let Some(screen) = state.create_manager_screen() else {
                    return Command::None;
                };
                if !screen.choose_competition(id) {
                    return Command::None;
                }
                let engine = state.engine.clone();
                Command::perform(async move { engine.get_team_select_package(id).await }, move |result| {
                    Msg::TeamOptionsLoaded(id, result.map_err(error_text))
                })
            }
            Msg::TeamOptionsLoaded(comp_id, Ok(teams)) => {
                if let Some(screen) = state.create_manager_screen() {
                    if screen.chosen_competition() == Some(comp_id) {
                        screen.set_teams(teams);
                    } else {
                        log::debug!("Dropping team options for competition {}", comp_id);
                    }
                }
                Command::None
            }
            Msg::TeamOptionsLoaded(_, Err(e)) => {
                state.report("Could not load teams", e);
                Command::None
            }
            Msg::ManagerTeamChosen(id) => {
                state.open_select = None;
                if let Some(screen) = state.create_manager_screen() {
                    screen.choose_team(id);
                }
                Command::None
            }
            Msg::CreateManager => {
                let Some(team_id) = state.create_manager_screen().and_then(|s| s.chosen_team()) else {
                    return Command::None;
                };
                let engine = state.engine.clone();
                Command::perform(async move { engine.create_human_manager(team_id).await }, |result| {
                    Msg::ManagerCreated(result.map_err(error_text))
                })
            }
            Msg::ManagerCreated(Ok(())) => {
                Command::batch(vec![state.refresh_top_bar(), state.navigate(ScreenId::Home)])
            }
            Msg::ManagerCreated(Err(e)) => {
                state.report("Could not create the manager", e);
                Command::None
            }

            Msg::Quit => Command::Quit,
        }
    }

    fn follow_link(state: &mut ViewState, link: Link) -> Command<Msg> {
        state.status = None;
        state.navigate(ScreenId::from(link))
    }

    fn view(state: &ViewState, theme: &Theme) -> Element<Msg> {
        let mut column = Element::column(vec![]);

        if let Some(chrome) = state.screens.chrome() {
            column = column.fit(chrome.view(state.open_select, state.skip_days, theme));
        }

        let content = match state.screens.screen() {
            Some(screen) => {
                let body = Element::scroll(screen.view(state.open_select, theme), state.scroll)
                    .on_scroll(Msg::ScrollContent(-WHEEL_LINES), Msg::ScrollContent(WHEEL_LINES))
                    .build();
                Element::panel(body).title(screen.title()).build()
            }
            None => Element::panel(Element::text("Loading...")).build(),
        };
        column.add(content, LayoutConstraint::Fill(1)).build()
    }

    fn subscriptions(_state: &ViewState) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
            Subscription::keyboard(KeyCode::Char('c'), "Continue", Msg::ContinueDay),
            Subscription::keyboard(KeyCode::Char('w'), "Skip days", Msg::SkipDays),
            Subscription::keyboard(KeyCode::Char('h'), "Home", Msg::Navigate(ScreenId::Home)),
            Subscription::keyboard(KeyCode::Char('s'), "Scouting", Msg::Navigate(ScreenId::PlayerSearch)),
            Subscription::keyboard(KeyCode::PageUp, "Scroll up", Msg::ScrollContent(-PAGE_LINES)),
            Subscription::keyboard(KeyCode::PageDown, "Scroll down", Msg::ScrollContent(PAGE_LINES)),
            Subscription::keyboard(KeyCode::Esc, "Close", Msg::CloseSelect),
        ]
    }

    fn title() -> &'static str {
        "Hockey Sim"
    }

    fn status(state: &ViewState, theme: &Theme) -> Option<Line<'static>> {
        match &state.status {
            Some(Status::Notice(message)) => {
                return Some(Line::from(Span::styled(message.clone(), theme.success_style())));
            }
            Some(Status::Error(message)) => {
                return Some(Line::from(Span::styled(message.clone(), theme.error_style())));
            }
            None => {}
        }

        let help = Self::subscriptions(state)
            .into_iter()
            .map(|sub| match sub {
                Subscription::Keyboard { key, description, .. } => match key {
                    KeyCode::Char(c) => format!("{} {}", c, description),
                    other => format!("{:?} {}", other, description),
                },
            })
            .collect::<Vec<_>>()
            .join("  ");
        Some(Line::from(Span::styled(help, theme.caption_style())))
    }
}
