//! Packages exchanged with the simulation engine.
//!
//! Every type here is a read-only snapshot. The presentation layer never patches
//! them in place: state changes happen in the engine and are observed by re-fetching.

pub mod competition;
pub mod human;
pub mod person;

pub use competition::{
    Competition, FormatDescriptor, Game, GameSide, KnockoutPair, KnockoutRound, KnockoutRules,
    KnockoutSide, MatchRules, RoundRobinRules, Season, TeamRow,
};
pub use human::{HumanPackage, HumanTeamPackage, RosterOverviewEntry, TopBarPackage};
pub use person::{Contract, ContractTeam, Manager, Player, Position, TeamPackage};

pub type CompetitionId = u32;
pub type TeamId = u32;
pub type PlayerId = u32;

/// `[id, label]` pair used by every selector package.
///
/// Id 0 is reserved for the placeholder entry ("current"/"choose") that does nothing when picked.
pub type NavOption = (u32, String);
