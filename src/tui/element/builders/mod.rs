mod button;
mod column;
mod panel;
mod row;
mod scroll;
mod select;
mod table;

pub use button::ButtonBuilder;
pub use column::ColumnBuilder;
pub use panel::PanelBuilder;
pub use row::RowBuilder;
pub use scroll::ScrollBuilder;
pub use select::SelectBuilder;
pub use table::TableBuilder;
