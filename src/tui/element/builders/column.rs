use crate::tui::{Element, LayoutConstraint};

/// Builder for column layouts
pub struct ColumnBuilder<Msg> {
    pub(crate) items: Vec<(LayoutConstraint, Element<Msg>)>,
    pub(crate) spacing: u16,
}

impl<Msg> ColumnBuilder<Msg> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spacing: 0,
        }
    }

    /// Add a child with an explicit layout constraint
    pub fn add(mut self, child: Element<Msg>, constraint: LayoutConstraint) -> Self {
        self.items.push((constraint, child));
        self
    }

    /// Add a child as tall as its content
    pub fn fit(self, child: Element<Msg>) -> Self {
        let height = child.height();
        self.add(child, LayoutConstraint::Length(height))
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Column {
            items: self.items,
            spacing: self.spacing,
        }
    }
}

impl<Msg> Default for ColumnBuilder<Msg> {
    fn default() -> Self {
        Self::new()
    }
}
