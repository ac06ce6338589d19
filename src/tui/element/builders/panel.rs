use crate::tui::Element;

/// Builder for bordered panels
pub struct PanelBuilder<Msg> {
    pub(crate) child: Box<Element<Msg>>,
    pub(crate) title: Option<String>,
}

impl<Msg> PanelBuilder<Msg> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Panel {
            child: self.child,
            title: self.title,
        }
    }
}
