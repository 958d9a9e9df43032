//! Link grammar
//!
//! Links are inline tokens that point at another object by id:
//!
//! | Kind       | Token                            |
//! |------------|----------------------------------|
//! | Note       | `[Intro][[020200514084500]]`      |
//! | Reference  | `{Knuth}{{019800101000000}}`      |
//! | Attachment | `(diagram)((020200514090000))`    |
//!
//! The bracketed display text in front of the id is optional. Each kind has
//! its own pattern; they are only combined to probe whether some link sits
//! at a given position.

use std::fmt;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::id::{ObjectId, ID_PATTERN};
use crate::object::ObjectType;

/// Object types that can be linked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Note,
    Reference,
    Attachment,
}

impl LinkKind {
    /// Order in which a span is classified
    pub const ALL: [LinkKind; 3] = [LinkKind::Note, LinkKind::Reference, LinkKind::Attachment];

    /// Opening and closing delimiters
    fn delimiters(self) -> (char, char) {
        match self {
            LinkKind::Note => ('[', ']'),
            LinkKind::Reference => ('{', '}'),
            LinkKind::Attachment => ('(', ')'),
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            LinkKind::Note => &*NOTE_RE,
            LinkKind::Reference => &*REFERENCE_RE,
            LinkKind::Attachment => &*ATTACHMENT_RE,
        }
    }
}

impl From<LinkKind> for ObjectType {
    fn from(kind: LinkKind) -> Self {
        match kind {
            LinkKind::Note => ObjectType::Note,
            LinkKind::Reference => ObjectType::Reference,
            LinkKind::Attachment => ObjectType::Attachment,
        }
    }
}

impl TryFrom<ObjectType> for LinkKind {
    type Error = ObjectType;

    fn try_from(ty: ObjectType) -> Result<Self, Self::Error> {
        match ty {
            ObjectType::Note => Ok(LinkKind::Note),
            ObjectType::Reference => Ok(LinkKind::Reference),
            ObjectType::Attachment => Ok(LinkKind::Attachment),
            ObjectType::Sketch => Err(ty),
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ObjectType::from(*self), f)
    }
}

/// A parsed link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZekaLink {
    pub kind: LinkKind,
    pub id: ObjectId,
    pub extra: Option<String>,
}

/// Token body for one kind, e.g. `(?:\[(?P<extra>[^\[\]]+)\])?\[\[(?P<id>...)\]\]`
fn token_pattern(kind: LinkKind, extra_group: &str, id_group: &str) -> String {
    let (open, close) = kind.delimiters();
    let (open, close) = (regex::escape(&open.to_string()), regex::escape(&close.to_string()));
    format!(
        r"(?:{o}(?P<{e}>[^{o}{c}]+){c})?{o}{o}(?P<{i}>{id}){c}{c}",
        o = open,
        c = close,
        e = extra_group,
        i = id_group,
        id = ID_PATTERN,
    )
}

fn anchored(kind: LinkKind) -> Regex {
    Regex::new(&format!("^{}$", token_pattern(kind, "extra", "id"))).unwrap()
}

static NOTE_RE: Lazy<Regex> = Lazy::new(|| anchored(LinkKind::Note));
static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| anchored(LinkKind::Reference));
static ATTACHMENT_RE: Lazy<Regex> = Lazy::new(|| anchored(LinkKind::Attachment));

/// Any link token; group names are suffixed so the alternation compiles
static PROBE_RE: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = LinkKind::ALL
        .iter()
        .enumerate()
        .map(|(n, kind)| token_pattern(*kind, &format!("extra{}", n), &format!("id{}", n)))
        .collect();
    Regex::new(&alternatives.join("|")).unwrap()
});

/// Brackets count as word characters when delimiting a token
fn is_word_constituent(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || matches!(c, '[' | ']' | '{' | '}' | '(' | ')')
}

/// Whether `range` is not glued to surrounding word characters
fn is_delimited(text: &str, range: &Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    !before.is_some_and(is_word_constituent) && !after.is_some_and(is_word_constituent)
}

/// Classify a whole token, trying Note, Reference, Attachment in that order
fn classify(token: &str) -> Option<ZekaLink> {
    LinkKind::ALL.iter().find_map(|kind| {
        kind.pattern()
            .captures(token)
            .and_then(|caps| link_from_captures(*kind, &caps))
    })
}

fn link_from_captures(kind: LinkKind, caps: &Captures<'_>) -> Option<ZekaLink> {
    let id = ObjectId::parse(caps.name("id")?.as_str())?;
    let extra = caps.name("extra").map(|m| m.as_str().to_string());
    Some(ZekaLink { kind, id, extra })
}

/// Byte index of the `offset`-th character, allowing one past the end
fn byte_index(text: &str, offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(offset)
}

/// Find the link whose token contains the character at `offset`.
///
/// A cursor sitting right after the closing delimiter still counts as
/// being on the link.
pub fn find_link_at(text: &str, offset: usize) -> Option<ZekaLink> {
    let at = byte_index(text, offset)?;

    let span = PROBE_RE
        .find_iter(text)
        .map(|m| m.range())
        .take_while(|range| range.start <= at)
        .find(|range| at <= range.end)?;

    if !is_delimited(text, &span) {
        return None;
    }

    let token = &text[span.clone()];
    let link = classify(token);
    if link.is_none() {
        tracing::error!("link-shaped text {:?} at {:?} matches no link pattern", token, span);
    }
    link
}

/// Every link in `text`, in order, with its byte range
pub fn find_links(text: &str) -> Vec<(Range<usize>, ZekaLink)> {
    PROBE_RE
        .find_iter(text)
        .map(|m| m.range())
        .filter(|range| is_delimited(text, range))
        .filter_map(|range| {
            let token = &text[range.clone()];
            match classify(token) {
                Some(link) => Some((range, link)),
                None => {
                    tracing::error!("link-shaped text {:?} matches no link pattern", token);
                    None
                }
            }
        })
        .collect()
}

/// Render a link token.
///
/// The kind's own delimiters are dropped from `extra` so the token always
/// parses back; an `extra` left empty is omitted.
pub fn format_link(kind: LinkKind, id: &ObjectId, extra: Option<&str>) -> String {
    let (open, close) = kind.delimiters();
    let extra = extra
        .map(|e| e.replace([open, close], ""))
        .filter(|e| !e.is_empty());
    match extra {
        Some(extra) => format!("{o}{extra}{c}{o}{o}{id}{c}{c}", o = open, c = close, extra = extra, id = id),
        None => format!("{o}{o}{id}{c}{c}", o = open, c = close, id = id),
    }
}

impl fmt::Display for ZekaLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_link(self.kind, &self.id, self.extra.as_deref()))
    }
}
