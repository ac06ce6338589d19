//! Competition format classification.

use std::fmt;
use std::str::FromStr;

use crate::model::{Competition, FormatDescriptor, KnockoutRules, MatchRules, RoundRobinRules};

/// Display variant of a competition. Exactly one applies to any package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    TournamentTree,
    Parent,
    RoundRobin,
    KnockoutRound,
}

/// Recognized `format.type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    RoundRobin,
    KnockoutRound,
}

impl FromStr for FormatKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RoundRobin" => Ok(FormatKind::RoundRobin),
            // Older engine builds still send "Knockout".
            "KnockoutRound" | "Knockout" => Ok(FormatKind::KnockoutRound),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnknownFormat(String),
    MissingRules(FormatKind),
    MissingKnockoutRound,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(kind) => write!(f, "Unrecognized competition format type '{}'", kind),
            FormatError::MissingRules(kind) => write!(f, "{:?} format is missing its rules", kind),
            FormatError::MissingKnockoutRound => write!(f, "Knockout competition has no current round"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Typed format, decoded once from the engine's descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    RoundRobin {
        rules: RoundRobinRules,
        match_rules: MatchRules,
    },
    KnockoutRound {
        rules: Option<KnockoutRules>,
        match_rules: MatchRules,
    },
}

impl TryFrom<&FormatDescriptor> for Format {
    type Error = FormatError;

    fn try_from(descriptor: &FormatDescriptor) -> Result<Self, Self::Error> {
        let match_rules = descriptor.match_rules;
        match descriptor.kind.parse::<FormatKind>()? {
            FormatKind::RoundRobin => {
                let rules = descriptor
                    .round_robin
                    .ok_or(FormatError::MissingRules(FormatKind::RoundRobin))?;
                Ok(Format::RoundRobin { rules, match_rules })
            }
            FormatKind::KnockoutRound => Ok(Format::KnockoutRound {
                rules: descriptor.knockout_round,
                match_rules,
            }),
        }
    }
}

impl Format {
    pub fn match_rules(&self) -> &MatchRules {
        match self {
            Format::RoundRobin { match_rules, .. } | Format::KnockoutRound { match_rules, .. } => match_rules,
        }
    }

    /// One-line rules summary, e.g. `3 x 20 min, 5 min overtime. Points W 3, OTW 2, D 1, OTL 1, L 0.`
    pub fn summary(&self) -> String {
        let rules = self.match_rules();
        let mut text = format!("{} x {} min", rules.periods, rules.period_length / 60);
        if rules.continuous_overtime {
            text.push_str(", continuous overtime");
        } else if rules.overtime_length > 0 {
            text.push_str(&format!(", {} min overtime", rules.overtime_length / 60));
        }
        text.push('.');

        match self {
            Format::RoundRobin { rules, .. } => text.push_str(&format!(
                " Points W {}, OTW {}, D {}, OTL {}, L {}.",
                rules.points_for_win,
                rules.points_for_ot_win,
                rules.points_for_draw,
                rules.points_for_ot_loss,
                rules.points_for_loss
            )),
            Format::KnockoutRound { rules: Some(rules), .. } => {
                text.push_str(&format!(" First to {} wins.", rules.wins_required))
            }
            Format::KnockoutRound { rules: None, .. } => {}
        }
        text
    }
}

/// Classify a competition. Checked in order: tree, parent, round robin, knockout.
///
/// An unrecognized `format.type` is an error, never a silent knockout.
pub fn classify(competition: &Competition) -> Result<Variant, FormatError> {
    if competition.season.rounds.is_some() {
        return Ok(Variant::TournamentTree);
    }

    let Some(descriptor) = &competition.format else {
        return Ok(Variant::Parent);
    };

    match descriptor.kind.parse::<FormatKind>()? {
        FormatKind::RoundRobin => Ok(Variant::RoundRobin),
        FormatKind::KnockoutRound => Ok(Variant::KnockoutRound),
    }
}
