//! Catalog scanner
//!
//! Lists the objects of a repository with a human-readable label, for link
//! pickers. Every call rescans the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::id::{ObjectId, ID_PATTERN};
use crate::object::ObjectType;
use crate::reference;
use crate::util;

/// `{id}-{rest}`
static ENTRY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^(?P<id>{})-(?P<rest>.+)$", ID_PATTERN)).unwrap());

/// Types offered when creating a link
pub const LINKABLE_TYPES: [ObjectType; 3] =
    [ObjectType::Note, ObjectType::Reference, ObjectType::Attachment];

/// One object, as shown in a picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: ObjectId,
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub path: PathBuf,
}

/// All linkable objects: notes, then references, then attachments
pub fn list_objects(repo_root: &Path) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::new();
    for object_type in LINKABLE_TYPES {
        entries.extend(scan_type(repo_root, object_type)?);
    }
    Ok(entries)
}

/// Objects of one type, in directory enumeration order
pub fn scan_type(repo_root: &Path, object_type: ObjectType) -> Result<Vec<CatalogEntry>> {
    let dir = object_type.dir(repo_root);
    let mut entries = Vec::new();

    if !dir.exists() {
        tracing::debug!("{} does not exist, nothing to list", dir.display());
        return Ok(entries);
    }

    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        // Skip hidden files
        if name_str.starts_with('.') {
            continue;
        }

        match parse_entry_name(&name_str, object_type) {
            Some((id, default_label)) => {
                entries.push(describe(object_type, id, default_label, entry.path()));
            }
            None => tracing::warn!(
                "skipping {}: not named {{id}}-{{title}} like a {}",
                entry.path().display(),
                object_type
            ),
        }
    }

    Ok(entries)
}

/// Split a file name into id and title. The title excludes the extension
/// and is empty when the object was created with a title made only of
/// unsafe characters.
fn parse_entry_name(name: &str, object_type: ObjectType) -> Option<(ObjectId, String)> {
    let caps = ENTRY_NAME_RE.captures(name)?;
    let id = ObjectId::parse(caps.name("id")?.as_str())?;
    let rest = caps.name("rest")?.as_str();

    let title = match object_type.layout().extension {
        Some(ext) => rest.strip_suffix(&format!(".{}", ext))?,
        None if rest.starts_with('.') => "",
        None => Path::new(rest)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(rest),
    };

    Some((id, title.to_string()))
}

fn describe(object_type: ObjectType, id: ObjectId, default_label: String, path: PathBuf) -> CatalogEntry {
    let mut entry = CatalogEntry {
        id,
        label: default_label,
        description: String::new(),
        object_type,
        path,
    };

    match object_type {
        ObjectType::Note | ObjectType::Sketch => match util::read_heading(&entry.path) {
            Ok(Some(title)) => entry.label = title,
            Ok(None) => {}
            Err(err) => tracing::warn!("{}: cannot read heading: {}", entry.path.display(), err),
        },
        ObjectType::Reference => match fs::read_to_string(&entry.path) {
            Ok(source) => {
                let display = reference::describe(&source, &entry.label, &entry.path);
                entry.label = display.label;
                entry.description = display.description;
            }
            Err(err) => tracing::warn!("{}: cannot read reference: {}", entry.path.display(), err),
        },
        ObjectType::Attachment => {}
    }

    if entry.label.is_empty() {
        entry.label = entry.id.to_string();
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for ty in ObjectType::ALL {
            fs::create_dir_all(ty.dir(temp_dir.path())).unwrap();
        }
        temp_dir
    }

    fn find<'a>(entries: &'a [CatalogEntry], id: &str) -> &'a CatalogEntry {
        entries.iter().find(|e| e.id.as_str() == id).unwrap()
    }

    #[test]
    fn test_note_heading_overrides_file_name() {
        let temp_dir = repo();
        let notes = temp_dir.path().join("notes");
        fs::write(notes.join("020200514084500-Intro.md"), "# Introduction to Zeka\n\nbody\n").unwrap();
        fs::write(notes.join("020200514084501-Plain.md"), "no heading\n# Later\n").unwrap();

        let entries = list_objects(temp_dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(find(&entries, "020200514084500").label, "Introduction to Zeka");
        assert_eq!(find(&entries, "020200514084501").label, "Plain");
        assert!(entries.iter().all(|e| e.object_type == ObjectType::Note));
    }

    #[test]
    fn test_reference_label_and_authors() {
        let temp_dir = repo();
        let refs = temp_dir.path().join("references");
        fs::write(
            refs.join("019800101000000-A.toml"),
            "title = \"A\"\nsubtitle = \"B\"\nauthor = [\"X\", \"Y\"]\n",
        )
        .unwrap();

        let entries = list_objects(temp_dir.path()).unwrap();
        let entry = find(&entries, "019800101000000");
        assert_eq!(entry.label, "A: B");
        assert_eq!(entry.description, "X; Y");
        assert_eq!(entry.object_type, ObjectType::Reference);
    }

    #[test]
    fn test_malformed_reference_does_not_abort_scan() {
        let temp_dir = repo();
        let refs = temp_dir.path().join("references");
        fs::write(refs.join("019800101000000-A.toml"), "title = \"A\"\nsubtitle = [1, 2]\n").unwrap();
        fs::write(refs.join("019800101000001-Broken.toml"), "title = = =\n").unwrap();
        fs::write(refs.join("019800101000002-C.toml"), "title = \"C\"\n").unwrap();

        let entries = list_objects(temp_dir.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(find(&entries, "019800101000000").label, "A");
        assert_eq!(find(&entries, "019800101000001").label, "Broken");
        assert_eq!(find(&entries, "019800101000002").label, "C");
    }

    #[test]
    fn test_attachments_keep_file_name_title() {
        let temp_dir = repo();
        let attachments = temp_dir.path().join("attachments");
        fs::write(attachments.join("020200514090000-diagram.svg"), "<svg/>").unwrap();

        let entries = list_objects(temp_dir.path()).unwrap();
        let entry = find(&entries, "020200514090000");
        assert_eq!(entry.label, "diagram");
        assert_eq!(entry.description, "");
        assert_eq!(entry.object_type, ObjectType::Attachment);
    }

    #[test]
    fn test_badly_named_entries_are_skipped() {
        let temp_dir = repo();
        let notes = temp_dir.path().join("notes");
        fs::write(notes.join("README.md"), "# Readme\n").unwrap();
        fs::write(notes.join("020200514084500.md"), "# No title\n").unwrap();
        fs::write(notes.join("020200514084500-wrong.txt"), "").unwrap();
        fs::write(notes.join(".hidden"), "").unwrap();
        fs::write(notes.join("020200514084502-Good.md"), "").unwrap();

        let entries = list_objects(temp_dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Good");
    }

    #[test]
    fn test_empty_file_name_title_is_listed() {
        let temp_dir = repo();
        fs::write(temp_dir.path().join("notes/020200514084500-.md"), "# ???\n\n").unwrap();
        fs::write(temp_dir.path().join("references/019800101000000-.toml"), "title = \"!!\"\n").unwrap();
        fs::write(temp_dir.path().join("attachments/020200514090000-.png"), "").unwrap();

        let entries = list_objects(temp_dir.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(find(&entries, "020200514084500").label, "???");
        assert_eq!(find(&entries, "019800101000000").label, "!!");
        assert_eq!(find(&entries, "020200514090000").label, "020200514090000");
    }

    #[test]
    fn test_blank_heading_keeps_file_name_title() {
        let temp_dir = repo();
        fs::write(temp_dir.path().join("notes/020200514084500-Intro.md"), "# \n").unwrap();

        let entries = list_objects(temp_dir.path()).unwrap();
        assert_eq!(find(&entries, "020200514084500").label, "Intro");
    }

    #[test]
    fn test_sketches_only_listed_on_request() {
        let temp_dir = repo();
        let sketches = temp_dir.path().join("sketches");
        fs::write(sketches.join("020200514084500-idea.md"), "# A Rough Idea\n").unwrap();

        assert!(list_objects(temp_dir.path()).unwrap().is_empty());

        let entries = scan_type(temp_dir.path(), ObjectType::Sketch).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "A Rough Idea");
    }

    #[test]
    fn test_missing_directories_yield_nothing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_objects(temp_dir.path()).unwrap().is_empty());
    }
}
