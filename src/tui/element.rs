use ratatui::style::Style;

mod builders;

pub use builders::{ButtonBuilder, ColumnBuilder, PanelBuilder, RowBuilder, ScrollBuilder, SelectBuilder, TableBuilder};

/// Stable identifier for focusable UI elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub String);

impl FocusId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FocusId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FocusId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Layout constraints for sizing elements within containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutConstraint {
    /// Fixed size (exact number of lines/columns)
    Length(u16),
    /// Minimum size (at least this many lines/columns)
    Min(u16),
    /// Proportional fill (weight for distributing remaining space)
    Fill(u16),
}

/// One entry of a select dropdown
#[derive(Debug, Clone)]
pub struct SelectOption<Msg> {
    pub label: String,
    pub on_select: Msg,
}

/// One table line. Hidden rows stay in the tree so a filter can bring them back.
#[derive(Debug, Clone)]
pub struct TableRow<Msg> {
    pub cells: Vec<Element<Msg>>,
    pub hidden: bool,
}

impl<Msg> TableRow<Msg> {
    pub fn new(cells: Vec<Element<Msg>>) -> Self {
        Self { cells, hidden: false }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Declarative UI elements that compose to form the view
#[derive(Debug, Clone)]
pub enum Element<Msg> {
    /// Empty element that renders nothing
    None,

    /// Static text
    Text { content: String, style: Option<Style> },

    /// Inline text carrying class markers. The renderer turns marked spans into links.
    Span { content: String, classes: Vec<String> },

    /// Interactive button
    Button {
        id: FocusId,
        label: String,
        on_press: Option<Msg>,
    },

    /// Dropdown selector. Options are drawn as an overlay while open.
    Select {
        id: FocusId,
        label: String,
        options: Vec<SelectOption<Msg>>,
        is_open: bool,
        on_toggle: Option<Msg>,
    },

    /// Vertical layout container
    Column {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Horizontal layout container
    Row {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Panel with border
    Panel {
        child: Box<Element<Msg>>,
        title: Option<String>,
    },

    /// Captioned table with a header line
    Table {
        caption: Option<String>,
        header: Vec<String>,
        rows: Vec<TableRow<Msg>>,
    },

    /// Vertically scrolled viewport. `offset` lines of the child are skipped;
    /// the wheel messages fire while the pointer is over the viewport.
    Scroll {
        child: Box<Element<Msg>>,
        offset: u16,
        on_scroll_up: Option<Msg>,
        on_scroll_down: Option<Msg>,
    },
}

impl<Msg> Element<Msg> {
    /// Create a text element
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: None,
        }
    }

    /// Create a text element with an explicit style
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Element::Text {
            content: content.into(),
            style: Some(style),
        }
    }

    pub fn span(content: impl Into<String>, classes: Vec<String>) -> Self {
        Element::Span {
            content: content.into(),
            classes,
        }
    }

    /// Create a button builder
    pub fn button(id: impl Into<FocusId>, label: impl Into<String>) -> ButtonBuilder<Msg> {
        ButtonBuilder {
            id: id.into(),
            label: label.into(),
            on_press: None,
        }
    }

    pub fn select(id: impl Into<FocusId>, label: impl Into<String>) -> SelectBuilder<Msg> {
        SelectBuilder {
            id: id.into(),
            label: label.into(),
            options: Vec::new(),
            is_open: false,
            on_toggle: None,
        }
    }

    /// Create a column with children sized by their natural height
    pub fn column(children: Vec<Element<Msg>>) -> ColumnBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();

        ColumnBuilder { items, spacing: 0 }
    }

    /// Create a row with children sharing the width equally
    pub fn row(children: Vec<Element<Msg>>) -> RowBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (LayoutConstraint::Fill(1), child))
            .collect();

        RowBuilder { items, spacing: 1 }
    }

    pub fn panel(child: Element<Msg>) -> PanelBuilder<Msg> {
        PanelBuilder {
            child: Box::new(child),
            title: None,
        }
    }

    pub fn scroll(child: Element<Msg>, offset: u16) -> ScrollBuilder<Msg> {
        ScrollBuilder {
            child: Box::new(child),
            offset,
            on_scroll_up: None,
            on_scroll_down: None,
        }
    }

    pub fn table(header: Vec<&str>) -> TableBuilder<Msg> {
        TableBuilder {
            caption: None,
            header: header.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    /// Natural height in lines
    pub fn height(&self) -> u16 {
        match self {
            Element::None => 0,
            Element::Text { content, .. } => content.lines().count().max(1) as u16,
            Element::Span { .. } | Element::Button { .. } | Element::Select { .. } => 1,
            Element::Column { items, spacing } => {
                let gaps = spacing.saturating_mul(items.len().saturating_sub(1) as u16);
                items
                    .iter()
                    .map(|(constraint, child)| match constraint {
                        LayoutConstraint::Length(n) | LayoutConstraint::Min(n) => *n,
                        LayoutConstraint::Fill(_) => child.height(),
                    })
                    .sum::<u16>()
                    + gaps
            }
            Element::Row { items, .. } => items.iter().map(|(_, child)| child.height()).max().unwrap_or(0),
            Element::Panel { child, .. } => child.height() + 2,
            Element::Scroll { child, .. } => child.height(),
            Element::Table { caption, rows, .. } => {
                let visible = rows.iter().filter(|row| !row.hidden).count() as u16;
                caption.as_ref().map_or(0, |_| 1) + 1 + visible
            }
        }
    }

    /// Natural width in columns, used to size table columns
    pub fn width(&self) -> u16 {
        match self {
            Element::None => 0,
            Element::Text { content, .. } => content.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16,
            Element::Span { content, .. } => content.chars().count() as u16,
            Element::Button { label, .. } => label.chars().count() as u16 + 4,
            Element::Select { label, .. } => label.chars().count() as u16 + 6,
            Element::Column { items, .. } => items.iter().map(|(_, child)| child.width()).max().unwrap_or(0),
            Element::Row { items, spacing } => {
                let gaps = spacing.saturating_mul(items.len().saturating_sub(1) as u16);
                items.iter().map(|(_, child)| child.width()).sum::<u16>() + gaps
            }
            Element::Panel { child, .. } => child.width() + 2,
            Element::Scroll { child, .. } => child.width(),
            Element::Table { .. } => 0,
        }
    }

    pub fn default_constraint(&self) -> LayoutConstraint {
        match self {
            Element::None => LayoutConstraint::Length(0),
            Element::Text { .. } | Element::Span { .. } | Element::Button { .. } | Element::Select { .. } => {
                LayoutConstraint::Length(1)
            }
            Element::Table { .. } | Element::Row { .. } => LayoutConstraint::Length(self.height()),
            Element::Column { .. } | Element::Panel { .. } | Element::Scroll { .. } => LayoutConstraint::Fill(1),
        }
    }

    /// Depth-first visit of this element and all descendants, table cells included
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element<Msg>)) {
        visit(self);
        match self {
            Element::Column { items, .. } | Element::Row { items, .. } => {
                for (_, child) in items {
                    child.walk(visit);
                }
            }
            Element::Panel { child, .. } | Element::Scroll { child, .. } => child.walk(visit),
            Element::Table { rows, .. } => {
                for row in rows {
                    for cell in &row.cells {
                        cell.walk(visit);
                    }
                }
            }
            _ => {}
        }
    }

    /// Whether the tree contains a focusable with the given id
    pub fn contains_focus(&self, focused_id: &FocusId) -> bool {
        let mut found = false;
        self.walk(&mut |element| match element {
            Element::Button { id, .. } | Element::Select { id, .. } if id == focused_id => found = true,
            _ => {}
        });
        found
    }
}

/// Lines a container item occupies: its fixed size, or its natural height when filling
fn item_height<Msg>(constraint: LayoutConstraint, child: &Element<Msg>) -> u16 {
    match constraint {
        LayoutConstraint::Length(n) => n,
        LayoutConstraint::Min(n) => n.max(child.height()),
        LayoutConstraint::Fill(_) => child.height(),
    }
}

impl<Msg: Clone> Element<Msg> {
    /// The same tree with its first `lines` lines cut away.
    ///
    /// Table headers stay pinned while their rows scroll underneath, so a table
    /// loses one row per line instead of losing its header first.
    pub fn clip_top(&self, lines: u16) -> Element<Msg> {
        if lines == 0 {
            return self.clone();
        }

        match self {
            Element::None | Element::Span { .. } | Element::Button { .. } | Element::Select { .. } => Element::None,

            Element::Text { content, style } => {
                let rest: Vec<&str> = content.lines().skip(usize::from(lines)).collect();
                if rest.is_empty() {
                    Element::None
                } else {
                    Element::Text {
                        content: rest.join("\n"),
                        style: *style,
                    }
                }
            }

            Element::Column { items, spacing } => {
                // Gaps become explicit spacers so a cut may land inside one
                let mut segments = Vec::with_capacity(items.len() * 2);
                for (i, (constraint, child)) in items.iter().enumerate() {
                    if i > 0 && *spacing > 0 {
                        segments.push((*spacing, Element::None));
                    }
                    segments.push((item_height(*constraint, child), child.clone()));
                }

                let mut skip = lines;
                let mut kept = Vec::new();
                for (size, child) in segments {
                    if skip >= size {
                        skip -= size;
                        continue;
                    }
                    kept.push((LayoutConstraint::Length(size - skip), child.clip_top(skip)));
                    skip = 0;
                }
                Element::Column { items: kept, spacing: 0 }
            }

            Element::Row { items, spacing } => Element::Row {
                items: items
                    .iter()
                    .map(|(constraint, child)| (*constraint, child.clip_top(lines)))
                    .collect(),
                spacing: *spacing,
            },

            Element::Panel { child, title } => Element::Panel {
                child: Box::new(child.clip_top(lines.saturating_sub(1))),
                title: title.clone(),
            },

            Element::Scroll { child, .. } => child.clip_top(lines),

            Element::Table { caption, header, rows } => {
                let mut skip = usize::from(lines);
                if caption.is_some() {
                    skip -= 1;
                    if skip == 0 {
                        return Element::Table {
                            caption: None,
                            header: header.clone(),
                            rows: rows.clone(),
                        };
                    }
                }

                let visible = rows.iter().filter(|row| !row.hidden).count();
                if skip > visible {
                    return Element::None;
                }

                let mut dropped = 0;
                let rows = rows
                    .iter()
                    .filter(|row| {
                        if row.hidden || dropped == skip {
                            return true;
                        }
                        dropped += 1;
                        false
                    })
                    .cloned()
                    .collect();
                Element::Table {
                    caption: None,
                    header: header.clone(),
                    rows,
                }
            }
        }
    }
}
