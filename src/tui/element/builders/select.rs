use crate::tui::Element;
use crate::tui::element::{FocusId, SelectOption};

/// Builder for select elements
pub struct SelectBuilder<Msg> {
    pub(crate) id: FocusId,
    pub(crate) label: String,
    pub(crate) options: Vec<SelectOption<Msg>>,
    pub(crate) is_open: bool,
    pub(crate) on_toggle: Option<Msg>,
}

impl<Msg> SelectBuilder<Msg> {
    pub fn option(mut self, label: impl Into<String>, on_select: Msg) -> Self {
        self.options.push(SelectOption {
            label: label.into(),
            on_select,
        });
        self
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn on_toggle(mut self, msg: Msg) -> Self {
        self.on_toggle = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Select {
            id: self.id,
            label: self.label,
            options: self.options,
            is_open: self.is_open,
            on_toggle: self.on_toggle,
        }
    }
}
