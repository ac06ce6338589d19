pub mod button;
pub mod layout;
pub mod scroll;
pub mod select;
pub mod table;
pub mod text;
