//! Entity links: `(kind, id)` references embedded in rendered spans.
//!
//! Marker strings only exist at the rendering boundary. The renderer decodes them
//! once per frame into the interaction registry, and the runtime routes every
//! activated link through a single dispatcher.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tui::Element;

/// Class token shared by every interceptable link.
pub const LINK_CLASS: &str = "link";

static MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z]+)([0-9]+)").expect("link marker pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Competition,
    Team,
    Player,
}

impl LinkKind {
    pub const ALL: [LinkKind; 3] = [LinkKind::Competition, LinkKind::Team, LinkKind::Player];

    /// Token used in the marker string.
    pub fn token(self) -> &'static str {
        match self {
            LinkKind::Competition => "comp",
            LinkKind::Team => "team",
            LinkKind::Player => "player",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }
}

/// A routable entity reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub kind: LinkKind,
    pub id: u32,
}

impl Link {
    pub fn new(kind: LinkKind, id: u32) -> Self {
        Self { kind, id }
    }

    pub fn competition(id: u32) -> Self {
        Self::new(LinkKind::Competition, id)
    }

    pub fn team(id: u32) -> Self {
        Self::new(LinkKind::Team, id)
    }

    pub fn player(id: u32) -> Self {
        Self::new(LinkKind::Player, id)
    }

    /// `"<kind><id>"`, e.g. `team12`.
    pub fn marker(&self) -> String {
        format!("{}{}", self.kind.token(), self.id)
    }
}

/// Marker as decoded from a span, before its kind is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawLink {
    pub kind: String,
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    UnknownKind { kind: String, id: u32 },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::UnknownKind { kind, id } => write!(f, "Unknown link type {} with ID {}", kind, id),
        }
    }
}

impl std::error::Error for LinkError {}

impl TryFrom<&RawLink> for Link {
    type Error = LinkError;

    fn try_from(raw: &RawLink) -> Result<Self, Self::Error> {
        LinkKind::from_token(&raw.kind)
            .map(|kind| Link::new(kind, raw.id))
            .ok_or_else(|| LinkError::UnknownKind {
                kind: raw.kind.clone(),
                id: raw.id,
            })
    }
}

impl From<Link> for RawLink {
    fn from(link: Link) -> Self {
        RawLink {
            kind: link.kind.token().to_string(),
            id: link.id,
        }
    }
}

/// Build a clickable span for `(kind, id)` labelled `label`.
pub fn encode<Msg>(kind: LinkKind, id: u32, label: impl Into<String>) -> Element<Msg> {
    Element::span(label, vec![LINK_CLASS.to_string(), Link::new(kind, id).marker()])
}

/// First class token matching `<letters><digits>`.
///
/// Tokens whose digits overflow an id are skipped. `None` means "not a link", never an error.
pub fn decode_classes<S: AsRef<str>>(classes: &[S]) -> Option<RawLink> {
    classes.iter().find_map(|class| {
        let captures = MARKER_PATTERN.captures(class.as_ref())?;
        let id = captures.get(2)?.as_str().parse().ok()?;
        Some(RawLink {
            kind: captures.get(1)?.as_str().to_string(),
            id,
        })
    })
}

/// Recover the marker of a rendered element. Only spans carrying [`LINK_CLASS`] qualify.
pub fn decode<Msg>(element: &Element<Msg>) -> Option<RawLink> {
    match element {
        Element::Span { classes, .. } if classes.iter().any(|c| c == LINK_CLASS) => decode_classes(classes),
        _ => None,
    }
}

/// Map a decoded marker to a navigation target, logging unknown kinds.
pub fn route(raw: &RawLink) -> Option<Link> {
    match Link::try_from(raw) {
        Ok(link) => Some(link),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_format() {
        assert_eq!(Link::team(12).marker(), "team12");
        assert_eq!(Link::competition(0).marker(), "comp0");
        assert_eq!(Link::player(7).marker(), "player7");
    }

    #[test]
    fn test_encode_carries_both_markers() {
        let element: Element<()> = encode(LinkKind::Player, 42, "Teemu Selanne");
        match element {
            Element::Span { content, classes } => {
                assert_eq!(content, "Teemu Selanne");
                assert_eq!(classes, vec!["link".to_string(), "player42".to_string()]);
            }
            other => panic!("expected span, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_first_match_wins() {
        let raw = decode_classes(&["link", "comp3", "team4"]).unwrap();
        assert_eq!(raw, RawLink { kind: "comp".into(), id: 3 });
    }

    #[test]
    fn test_decode_without_marker() {
        assert_eq!(decode_classes(&["link", "bold"]), None);
        let plain: Element<()> = Element::span("x", vec!["team3".into()]);
        assert_eq!(decode(&plain), None);
    }

    #[test]
    fn test_overflowing_id_is_not_a_link() {
        assert_eq!(decode_classes(&["team99999999999999999999"]), None);
    }

    #[test]
    fn test_route_unknown_kind() {
        let raw = RawLink { kind: "arena".into(), id: 5 };
        assert_eq!(route(&raw), None);
        assert_eq!(
            Link::try_from(&raw).unwrap_err().to_string(),
            "Unknown link type arena with ID 5"
        );
    }
}
