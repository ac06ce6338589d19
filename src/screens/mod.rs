//! Content region ownership and navigation.
//!
//! The region holds at most one mounted screen. Every navigation takes a fresh
//! [`NavToken`]; only the response carrying the latest token may mount, and mounting
//! always clears the region first.

use std::fmt;

use anyhow::Result;

use crate::app::Msg;
use crate::engine::SharedEngine;
use crate::model::{CompetitionId, HumanPackage, NavOption, PlayerId, TeamId, TopBarPackage};
use crate::tui::{Element, Theme};
use crate::view::link::{Link, LinkKind};

pub mod chrome;
pub mod competition;
pub mod create_manager;
pub mod home;
pub mod player;
pub mod player_search;
pub mod team;

pub use chrome::Chrome;
pub use competition::CompetitionScreen;
pub use create_manager::CreateManagerScreen;
pub use home::HomeScreen;
pub use player::PlayerScreen;
pub use player_search::PlayerSearchScreen;
pub use team::TeamScreen;

/// Named regions screens and the chrome render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPoint {
    TopBar,
    Date,
    ActionsRemaining,
    ContentScreen,
    RosterFilter,
    PlayerFilter,
    TeamSelect,
}

impl MountPoint {
    pub fn id(self) -> &'static str {
        match self {
            MountPoint::TopBar => "top-bar",
            MountPoint::Date => "date",
            MountPoint::ActionsRemaining => "actions-remaining",
            MountPoint::ContentScreen => "content-screen",
            MountPoint::RosterFilter => "roster-filter",
            MountPoint::PlayerFilter => "player-filter",
            MountPoint::TeamSelect => "team-select",
        }
    }

    /// Log a query for a region that is not in the current view.
    pub fn missing(self) {
        log::error!("Mount point #{} not found", self.id());
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id())
    }
}

/// Which screen a navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Home,
    CreateManager,
    Competition(CompetitionId),
    Team(TeamId),
    Player(PlayerId),
    PlayerSearch,
}

impl From<Link> for ScreenId {
    fn from(link: Link) -> Self {
        match link.kind {
            LinkKind::Competition => ScreenId::Competition(link.id),
            LinkKind::Team => ScreenId::Team(link.id),
            LinkKind::Player => ScreenId::Player(link.id),
        }
    }
}

/// Dropdowns that can be open. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectId {
    TopCompetition,
    CompetitionNav(usize),
    RosterFilter,
    PlayerFilter,
    ManagerCompetition,
    ManagerTeam,
}

/// A fully loaded screen, ready to mount.
#[derive(Debug, Clone)]
pub enum Screen {
    Home(HomeScreen),
    CreateManager(CreateManagerScreen),
    Competition(CompetitionScreen),
    Team(TeamScreen),
    Player(PlayerScreen),
    PlayerSearch(PlayerSearchScreen),
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Home(_) => ScreenId::Home,
            Screen::CreateManager(_) => ScreenId::CreateManager,
            Screen::Competition(s) => ScreenId::Competition(s.competition.id),
            Screen::Team(s) => ScreenId::Team(s.team.id),
            Screen::Player(s) => ScreenId::Player(s.player.id),
            Screen::PlayerSearch(_) => ScreenId::PlayerSearch,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Home(_) => "Home".to_string(),
            Screen::CreateManager(_) => "New Manager".to_string(),
            Screen::Competition(s) => s.competition.display_name().to_string(),
            Screen::Team(s) => s.team.name.clone(),
            Screen::Player(s) => s.player.name.clone(),
            Screen::PlayerSearch(_) => "Scouting".to_string(),
        }
    }

    pub fn view(&self, open: Option<SelectId>, theme: &Theme) -> Element<Msg> {
        match self {
            Screen::Home(s) => s.view(theme),
            Screen::CreateManager(s) => s.view(open, theme),
            Screen::Competition(s) => s.view(open, theme),
            Screen::Team(s) => s.view(open, theme),
            Screen::Player(s) => s.view(theme),
            Screen::PlayerSearch(s) => s.view(open, theme),
        }
    }
}

/// Contents of the `content-screen` mount point.
#[derive(Debug, Clone, Default)]
pub enum ContentRegion {
    #[default]
    Empty,
    Mounted(Screen),
}

/// Identifies one navigation. Only the latest token may mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavToken(u64);

/// Owns the content region and the chrome.
#[derive(Debug, Default)]
pub struct ScreenController {
    region: ContentRegion,
    chrome: Option<Chrome>,
    latest: u64,
    target: Option<ScreenId>,
}

impl ScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation. Any response for an earlier token becomes stale.
    pub fn begin_navigation(&mut self, target: ScreenId) -> NavToken {
        self.latest += 1;
        self.target = Some(target);
        log::info!("Navigating to {:?} (token {})", target, self.latest);
        NavToken(self.latest)
    }

    pub fn is_latest(&self, token: NavToken) -> bool {
        token.0 == self.latest
    }

    /// Target of the navigation in flight, if any.
    pub fn pending_target(&self) -> Option<ScreenId> {
        self.target
    }

    /// The screen being loaded, or else the one mounted.
    pub fn showing(&self) -> Option<ScreenId> {
        self.target.or_else(|| self.current())
    }

    /// Clear the region, then mount `screen`. Stale tokens are discarded.
    pub fn mount(&mut self, token: NavToken, screen: Screen) -> bool {
        if !self.is_latest(token) {
            log::debug!(
                "Discarding stale {:?} (token {}, latest {})",
                screen.id(),
                token.0,
                self.latest
            );
            return false;
        }

        self.clear();
        log::info!("Mounted {:?} into {}", screen.id(), MountPoint::ContentScreen);
        self.region = ContentRegion::Mounted(screen);
        self.target = None;
        true
    }

    /// Record a failed load. Returns whether it belonged to the latest navigation.
    /// The mounted screen stays in place either way.
    pub fn fail(&mut self, token: NavToken) -> bool {
        if !self.is_latest(token) {
            log::debug!("Ignoring failure of stale navigation (token {})", token.0);
            return false;
        }
        self.target = None;
        true
    }

    pub fn clear(&mut self) {
        self.region = ContentRegion::Empty;
    }

    pub fn region(&self) -> &ContentRegion {
        &self.region
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.screen().map(Screen::id)
    }

    pub fn screen(&self) -> Option<&Screen> {
        match &self.region {
            ContentRegion::Mounted(screen) => Some(screen),
            ContentRegion::Empty => None,
        }
    }

    pub fn screen_mut(&mut self) -> Option<&mut Screen> {
        match &mut self.region {
            ContentRegion::Mounted(screen) => Some(screen),
            ContentRegion::Empty => None,
        }
    }

    /// Create the chrome if absent. Returns true when it was created by this call.
    pub fn ensure_chrome(&mut self) -> bool {
        if self.chrome.is_some() {
            return false;
        }
        self.chrome = Some(Chrome::default());
        true
    }

    pub fn chrome(&self) -> Option<&Chrome> {
        self.chrome.as_ref()
    }

    /// Refresh chrome data in place. The chrome itself is never rebuilt.
    pub fn refresh_chrome(&mut self, package: TopBarPackage) {
        let Some(chrome) = self.chrome.as_mut() else {
            MountPoint::TopBar.missing();
            return;
        };
        chrome.date = package.date;
        chrome.human = package.human;
        log::debug!(
            "Refreshed {} ({}) and {} ({})",
            MountPoint::Date,
            chrome.date,
            MountPoint::ActionsRemaining,
            chrome.human.actions_remaining()
        );
    }

    pub fn set_competition_options(&mut self, options: Vec<NavOption>) {
        match self.chrome.as_mut() {
            Some(chrome) => chrome.competitions = options,
            None => MountPoint::TopBar.missing(),
        }
    }

    pub fn human(&self) -> Option<&HumanPackage> {
        self.chrome.as_ref().map(|c| &c.human)
    }
}

/// Fetch everything `target` needs and build the screen.
pub async fn load(engine: SharedEngine, target: ScreenId) -> Result<Screen> {
    let screen = match target {
        ScreenId::Home => {
            let human = engine.get_human_package().await?;
            match human.team_id() {
                Some(team_id) => {
                    let (team, competitions) = futures::try_join!(
                        engine.get_team_screen_package(team_id),
                        engine.get_comp_select_package()
                    )?;
                    Screen::Home(HomeScreen::new(human, team, competitions))
                }
                None => Screen::CreateManager(CreateManagerScreen::new(engine.get_comp_select_package().await?)),
            }
        }
        ScreenId::CreateManager => {
            Screen::CreateManager(CreateManagerScreen::new(engine.get_comp_select_package().await?))
        }
        ScreenId::Competition(id) => Screen::Competition(competition::load(&engine, id).await?),
        ScreenId::Team(id) => Screen::Team(team::load(&engine, id).await?),
        ScreenId::Player(id) => {
            let (player, human) =
                futures::try_join!(engine.get_player_screen_package(id), engine.get_human_package())?;
            Screen::Player(PlayerScreen::new(player, human))
        }
        ScreenId::PlayerSearch => {
            let (players, human) =
                futures::try_join!(engine.get_free_agents_package(), engine.get_human_package())?;
            Screen::PlayerSearch(PlayerSearchScreen::new(players, &human))
        }
    };
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HumanPackage, TeamPackage};

    fn home() -> Screen {
        Screen::Home(HomeScreen::new(
            HumanPackage::default(),
            TeamPackage { id: 1, name: "Ilves".into(), manager: None, players: vec![] },
            vec![],
        ))
    }

    #[test]
    fn test_stale_token_is_discarded() {
        let mut controller = ScreenController::new();
        let first = controller.begin_navigation(ScreenId::Home);
        let second = controller.begin_navigation(ScreenId::PlayerSearch);

        assert!(!controller.mount(first, home()));
        assert!(matches!(controller.region(), ContentRegion::Empty));

        let search = Screen::PlayerSearch(PlayerSearchScreen::new(vec![], &HumanPackage::default()));
        assert!(controller.mount(second, search));
        assert_eq!(controller.current(), Some(ScreenId::PlayerSearch));
    }

    #[test]
    fn test_failed_navigation_keeps_screen() {
        let mut controller = ScreenController::new();
        let token = controller.begin_navigation(ScreenId::Home);
        controller.mount(token, home());

        let failing = controller.begin_navigation(ScreenId::Team(99));
        assert!(controller.fail(failing));
        assert_eq!(controller.current(), Some(ScreenId::Home));
        assert_eq!(controller.pending_target(), None);
    }

    #[test]
    fn test_chrome_created_once() {
        let mut controller = ScreenController::new();
        assert!(controller.ensure_chrome());
        assert!(!controller.ensure_chrome());
    }

    #[test]
    fn test_refresh_without_chrome_is_aborted() {
        let mut controller = ScreenController::new();
        controller.refresh_chrome(TopBarPackage { date: "2024-01-01".into(), human: HumanPackage::default() });
        assert!(controller.chrome().is_none());
    }

    #[test]
    fn test_link_targets() {
        assert_eq!(ScreenId::from(Link::team(4)), ScreenId::Team(4));
        assert_eq!(ScreenId::from(Link::competition(2)), ScreenId::Competition(2));
        assert_eq!(ScreenId::from(Link::player(8)), ScreenId::Player(8));
    }
}
