use crate::tui::Element;

/// Builder for scrolled viewports
pub struct ScrollBuilder<Msg> {
    pub(crate) child: Box<Element<Msg>>,
    pub(crate) offset: u16,
    pub(crate) on_scroll_up: Option<Msg>,
    pub(crate) on_scroll_down: Option<Msg>,
}

impl<Msg> ScrollBuilder<Msg> {
    /// Messages sent by the mouse wheel over the viewport
    pub fn on_scroll(mut self, up: Msg, down: Msg) -> Self {
        self.on_scroll_up = Some(up);
        self.on_scroll_down = Some(down);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Scroll {
            child: self.child,
            offset: self.offset,
            on_scroll_up: self.on_scroll_up,
            on_scroll_down: self.on_scroll_down,
        }
    }
}
