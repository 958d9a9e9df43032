//! Reference documents
//!
//! References (books, papers, movies, ...) are stored as TOML. This module
//! owns the per-kind creation templates and the extraction of the display
//! label and description shown in link pickers.
//!
//! Field problems are never fatal: a field with an unexpected type is
//! logged and skipped, and a document that does not parse keeps the label
//! derived from its file name.

use std::path::Path;

use toml::{Table, Value};

use crate::constants as C;

/// The kinds of reference zeka can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReferenceKind {
    Book,
    ConferencePaper,
    JournalPaper,
    TechnicalReport,
    BlogPost,
    Movie,
    Game,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 7] = [
        ReferenceKind::Book,
        ReferenceKind::ConferencePaper,
        ReferenceKind::JournalPaper,
        ReferenceKind::TechnicalReport,
        ReferenceKind::BlogPost,
        ReferenceKind::Movie,
        ReferenceKind::Game,
    ];

    /// Name shown in the kind picker
    pub fn label(self) -> &'static str {
        match self {
            ReferenceKind::Book => "Book",
            ReferenceKind::ConferencePaper => "ConferencePaper",
            ReferenceKind::JournalPaper => "JournalPaper",
            ReferenceKind::TechnicalReport => "TechnicalReport",
            ReferenceKind::BlogPost => "BlogPost",
            ReferenceKind::Movie => "Movie",
            ReferenceKind::Game => "Game",
        }
    }

    /// Value of the `type` field
    pub fn type_name(self) -> &'static str {
        match self {
            ReferenceKind::Book => "book",
            ReferenceKind::ConferencePaper => "conferencePaper",
            ReferenceKind::JournalPaper => "journalPaper",
            ReferenceKind::TechnicalReport => "technicalReport",
            ReferenceKind::BlogPost => "blogPost",
            ReferenceKind::Movie => "movie",
            ReferenceKind::Game => "game",
        }
    }

    /// Fields after `type`, `title` and `subtitle`.
    /// Numeric fields are commented out so a fresh file stays valid TOML.
    fn body(self) -> &'static str {
        match self {
            ReferenceKind::Book => {
                "author = \"\" # [\"\", \"\"]\n\
                 # year =\n\
                 # month =\n\
                 # edition = # 1 or \"Special Edition\"\n\
                 # volume =\n\
                 # numPages =\n\
                 publisher = \"\"\n"
            }
            ReferenceKind::ConferencePaper => {
                "author = \"\" # [\"\", \"\"]\n\
                 # year =\n\
                 # month =\n\
                 # numPages =\n\
                 conference = \"\"\n"
            }
            ReferenceKind::JournalPaper => {
                "author = \"\" # [\"\", \"\"]\n\
                 # year =\n\
                 # month =\n\
                 # numPages =\n\
                 journal = \"\"\n\
                 # volume =\n\
                 # number =\n"
            }
            ReferenceKind::TechnicalReport => {
                "author = \"\" # [\"\", \"\"]\n\
                 # year =\n\
                 # month =\n\
                 # numPages =\n\
                 institution = \"\"\n\
                 code = \"\"\n"
            }
            ReferenceKind::BlogPost => {
                "author = \"\" # [\"\", \"\"]\n\
                 # year =\n\
                 # month =\n\
                 url = \"\"\n"
            }
            ReferenceKind::Movie => {
                "director = \"\" # [\"\", \"\"]\n\
                 actors = \"\" # [\"\", \"\"]\n\
                 # year =\n"
            }
            ReferenceKind::Game => {
                "designer = \"\" # [\"\", \"\"]\n\
                 studio = \"\"\n\
                 publisher = \"\"\n\
                 platform = \"\" # [\"\", \"\"]\n\
                 # year =\n"
            }
        }
    }

    /// Contents of a new reference file with `title` filled in
    pub fn template(self, title: &str) -> String {
        let title = Value::String(title.to_string());
        format!(
            "type = \"{}\"\ntitle = {}\nsubtitle = \"\"\n{}\nreview = \"\"\"\n\"\"\"\n",
            self.type_name(),
            title,
            self.body()
        )
    }
}

/// What a picker shows for a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDisplay {
    pub label: String,
    pub description: String,
}

/// Build the display label and description of a reference document.
///
/// `fallback_label` (the title taken from the file name) is used whenever
/// the document has no usable `title`.
pub fn describe(source: &str, fallback_label: &str, origin: &Path) -> ReferenceDisplay {
    let mut display = ReferenceDisplay {
        label: fallback_label.to_string(),
        description: String::new(),
    };

    let table = match source.parse::<Table>() {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!("{}: not a valid reference document: {}", origin.display(), err);
            return display;
        }
    };

    if let Some(title) = table.get("title") {
        match joined_strings(title) {
            Some(title) if !title.is_empty() => display.label = title,
            Some(_) => {}
            None => warn_field(origin, "title", title),
        }
    }

    match table.get("subtitle") {
        Some(Value::String(subtitle)) if !subtitle.is_empty() => {
            display.label.push_str(C::SUBTITLE_SEPARATOR);
            display.label.push_str(subtitle);
        }
        Some(Value::String(_)) | None => {}
        Some(other) => warn_field(origin, "subtitle", other),
    }

    let edition = match table.get("edition") {
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Integer(n)) => Some(n.to_string()),
        Some(Value::Float(n)) => Some(n.to_string()),
        Some(other) => {
            warn_field(origin, "edition", other);
            None
        }
        None => None,
    };
    if let Some(edition) = edition {
        display.label.push_str(&format!(", {}{}", edition, C::EDITION_SUFFIX));
    }

    if let Some(author) = table.get("author") {
        match joined_strings(author) {
            Some(authors) => display.description = authors,
            None => warn_field(origin, "author", author),
        }
    }

    display
}

/// A string, or a list of strings joined with "; "
fn joined_strings(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str())
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(C::LIST_JOINER)),
        _ => None,
    }
}

fn warn_field(origin: &Path, field: &str, value: &Value) {
    tracing::warn!(
        "{}: ignoring field `{}` of unexpected type {}",
        origin.display(),
        field,
        value.type_str()
    );
}
