use ratatui::layout::Rect;

use crate::view::link::RawLink;

/// What happens when a registered area is activated
#[derive(Debug, Clone, PartialEq)]
pub enum Action<Msg> {
    /// Deliver a message to the app
    Message(Msg),
    /// Hand a decoded link marker to the link dispatcher
    Link(RawLink),
}

/// Stores interaction handlers for UI elements
/// Maps Rect -> Action, rebuilt every frame
pub struct InteractionRegistry<Msg> {
    click_handlers: Vec<(Rect, Action<Msg>)>,
    /// Viewport, wheel-up message, wheel-down message
    scroll_handlers: Vec<(Rect, Msg, Msg)>,
}

impl<Msg: Clone> InteractionRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            click_handlers: Vec::new(),
            scroll_handlers: Vec::new(),
        }
    }

    pub fn register_click(&mut self, rect: Rect, msg: Msg) {
        self.click_handlers.push((rect, Action::Message(msg)));
    }

    pub fn register_link(&mut self, rect: Rect, link: RawLink) {
        self.click_handlers.push((rect, Action::Link(link)));
    }

    pub fn find_click(&self, x: u16, y: u16) -> Option<Action<Msg>> {
        // Search in reverse order so topmost layers are checked first
        for (rect, action) in self.click_handlers.iter().rev() {
            if point_in_rect(x, y, *rect) {
                return Some(action.clone());
            }
        }
        None
    }

    pub fn register_scroll(&mut self, rect: Rect, up: Msg, down: Msg) {
        self.scroll_handlers.push((rect, up, down));
    }

    /// Message for a wheel turn at a position, innermost viewport first
    pub fn find_scroll(&self, x: u16, y: u16, down: bool) -> Option<Msg> {
        self.scroll_handlers
            .iter()
            .rev()
            .find(|(rect, _, _)| point_in_rect(x, y, *rect))
            .map(|(_, up, down_msg)| if down { down_msg.clone() } else { up.clone() })
    }

    /// Every link registered this frame, in render order
    pub fn links(&self) -> impl Iterator<Item = (Rect, &RawLink)> {
        self.click_handlers.iter().filter_map(|(rect, action)| match action {
            Action::Link(link) => Some((*rect, link)),
            Action::Message(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.click_handlers.clear();
        self.scroll_handlers.clear();
    }
}

impl<Msg: Clone> Default for InteractionRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_registration_wins() {
        let mut registry = InteractionRegistry::new();
        registry.register_click(Rect::new(0, 0, 10, 5), "page");
        registry.register_click(Rect::new(2, 1, 4, 2), "overlay");

        assert_eq!(registry.find_click(3, 1), Some(Action::Message("overlay")));
        assert_eq!(registry.find_click(9, 4), Some(Action::Message("page")));
        assert_eq!(registry.find_click(10, 0), None);
    }

    #[test]
    fn test_links_are_listed() {
        let mut registry: InteractionRegistry<()> = InteractionRegistry::new();
        registry.register_link(Rect::new(0, 0, 5, 1), RawLink { kind: "team".into(), id: 2 });
        registry.register_click(Rect::new(0, 1, 5, 1), ());
        assert_eq!(registry.links().count(), 1);
    }

    #[test]
    fn test_scroll_only_inside_viewport() {
        let mut registry = InteractionRegistry::new();
        registry.register_scroll(Rect::new(0, 3, 20, 10), "up", "down");

        assert_eq!(registry.find_scroll(5, 4, true), Some("down"));
        assert_eq!(registry.find_scroll(5, 4, false), Some("up"));
        assert_eq!(registry.find_scroll(5, 1, true), None);
    }
}
