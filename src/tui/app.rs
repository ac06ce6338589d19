use ratatui::text::Line;

use crate::tui::{Command, Element, Subscription, Theme};
use crate::view::link::Link;

/// An Elm-style application driven by [`crate::tui::Runtime`].
pub trait App: Sized + 'static {
    /// Owned view state
    type State;

    /// Messages produced by input, async work and links
    type Msg: Clone + Send + std::fmt::Debug + 'static;

    /// Whatever the app needs to build its first state
    type InitParams;

    fn init(params: Self::InitParams) -> (Self::State, Command<Self::Msg>);

    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    /// Single entry point for every activated entity link
    fn follow_link(state: &mut Self::State, link: Link) -> Command<Self::Msg>;

    fn view(state: &Self::State, theme: &Theme) -> Element<Self::Msg>;

    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;

    fn title() -> &'static str;

    /// Optional status line shown under the view
    fn status(_state: &Self::State, _theme: &Theme) -> Option<Line<'static>> {
        None
    }
}
