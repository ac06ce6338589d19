use crate::tui::Element;
use crate::tui::element::FocusId;

/// Builder for button elements
pub struct ButtonBuilder<Msg> {
    pub(crate) id: FocusId,
    pub(crate) label: String,
    pub(crate) on_press: Option<Msg>,
}

impl<Msg> ButtonBuilder<Msg> {
    pub fn on_press(mut self, msg: Msg) -> Self {
        self.on_press = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Button {
            id: self.id,
            label: self.label,
            on_press: self.on_press,
        }
    }
}
