//! Object types and their storage conventions
//!
//! Every per-type decision (where files live, which extension they carry,
//! what a fresh file contains) comes from [`ObjectType::layout`], so the
//! resolver, the catalog and the creation commands cannot disagree.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants as C;
use crate::id::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Note,
    Reference,
    Attachment,
    Sketch,
}

/// How an object type is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub subdir: &'static str,
    /// `None` means any extension (attachments)
    pub extension: Option<&'static str>,
    /// Whether zeka writes a Markdown heading when creating the object
    pub markdown: bool,
}

impl ObjectType {
    pub const ALL: [ObjectType; 4] = [
        ObjectType::Note,
        ObjectType::Reference,
        ObjectType::Attachment,
        ObjectType::Sketch,
    ];

    pub fn layout(self) -> Layout {
        match self {
            ObjectType::Note => Layout {
                subdir: C::NOTES_SUBDIR,
                extension: Some(C::MARKDOWN_EXTENSION),
                markdown: true,
            },
            ObjectType::Reference => Layout {
                subdir: C::REFERENCES_SUBDIR,
                extension: Some(C::TOML_EXTENSION),
                markdown: false,
            },
            ObjectType::Attachment => Layout {
                subdir: C::ATTACHMENTS_SUBDIR,
                extension: None,
                markdown: false,
            },
            ObjectType::Sketch => Layout {
                subdir: C::SKETCHES_SUBDIR,
                extension: Some(C::MARKDOWN_EXTENSION),
                markdown: true,
            },
        }
    }

    /// Directory holding objects of this type
    pub fn dir(self, repo_root: &Path) -> PathBuf {
        repo_root.join(self.layout().subdir)
    }

    /// File name for a new object: `{id}-{canonical title}.{ext}`
    pub fn file_name(self, id: &ObjectId, canonical_title: &str) -> String {
        match self.layout().extension {
            Some(ext) => format!("{}{}{}.{}", id, C::ID_TITLE_SEPARATOR, canonical_title, ext),
            None => format!("{}{}{}", id, C::ID_TITLE_SEPARATOR, canonical_title),
        }
    }

    /// Initial contents of a Markdown object
    pub fn markdown_template(self, title: &str) -> Option<String> {
        self.layout()
            .markdown
            .then(|| format!("{}{}\n\n", C::HEADING_MARKER, title))
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectType::Note => "note",
            ObjectType::Reference => "reference",
            ObjectType::Attachment => "attachment",
            ObjectType::Sketch => "sketch",
        };
        f.pad(name)
    }
}
