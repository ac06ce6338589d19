use crate::tui::Element;
use crate::tui::element::TableRow;

/// Builder for tables
pub struct TableBuilder<Msg> {
    pub(crate) caption: Option<String>,
    pub(crate) header: Vec<String>,
    pub(crate) rows: Vec<TableRow<Msg>>,
}

impl<Msg> TableBuilder<Msg> {
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn row(mut self, row: TableRow<Msg>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = TableRow<Msg>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Table {
            caption: self.caption,
            header: self.header,
            rows: self.rows,
        }
    }
}
