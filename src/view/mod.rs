//! Competition presentation: format classification, schedule windows, brackets,
//! entity links and roster filters.

pub mod bracket;
pub mod format;
pub mod link;
pub mod roster;
pub mod schedule;

pub use bracket::{build_round, build_tree, RenderedPairList, RenderedTree};
pub use format::{classify, Format, FormatError, Variant};
pub use link::{Link, LinkKind, RawLink};
pub use roster::{apply_filter, PlayerFilter, RosterMode};
pub use schedule::{window, Direction, GameDay};
