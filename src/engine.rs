//! ZekaEngine - the user commands
//!
//! Provides the five commands a front end exposes:
//! - Create Note / Create Sketch (Markdown objects)
//! - Create Reference (TOML objects, one template per kind)
//! - Follow Link Under Cursor
//! - Create Link (catalog picker + link rendering)
//!
//! Every command works on the repository root the engine was opened with
//! and talks to the user only through [`Host`]. A cancelled prompt ends the
//! command with `Ok(None)` and nothing written.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::{self, CatalogEntry};
use crate::constants as C;
use crate::error::{Result, ZekaError};
use crate::host::Host;
use crate::id::{new_id, Clock, ObjectId, SystemClock};
use crate::link::{self, LinkKind};
use crate::link_resolver;
use crate::object::ObjectType;
use crate::reference::ReferenceKind;
use crate::util;

/// Core engine for repository operations
pub struct ZekaEngine<K: Clock = SystemClock> {
    root: PathBuf,
    clock: K,
}

impl ZekaEngine<SystemClock> {
    /// Open the repository at `root` with the system clock
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_clock(root, SystemClock)
    }
}

impl<K: Clock> ZekaEngine<K> {
    /// Open the repository at `root`; it must already exist
    pub fn with_clock(root: impl Into<PathBuf>, clock: K) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ZekaError::RepositoryMissing(root));
        }
        Ok(Self { root, clock })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // === Object Creation ===

    /// Write a new object file named after `title`
    pub fn create_object(&self, object_type: ObjectType, title: &str, contents: &str) -> Result<PathBuf> {
        let id = self.next_id();
        let dir = object_type.dir(&self.root);
        fs::create_dir_all(&dir)?;

        let path = dir.join(object_type.file_name(&id, &util::canonicalize(title)));

        // Never clobber an existing object
        let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        file.write_all(contents.as_bytes())?;

        tracing::info!("created {} {}", object_type, util::display_path(&path));
        Ok(path)
    }

    fn next_id(&self) -> ObjectId {
        new_id(&self.clock.now())
    }

    /// Create Note: prompts for the title unless one is given
    pub fn create_note(&self, host: &mut dyn Host, title: Option<String>) -> Result<Option<PathBuf>> {
        self.create_markdown(host, ObjectType::Note, C::NOTE_TITLE_PLACEHOLDER, title)
    }

    /// Create Sketch: prompts for the title unless one is given
    pub fn create_sketch(&self, host: &mut dyn Host, title: Option<String>) -> Result<Option<PathBuf>> {
        self.create_markdown(host, ObjectType::Sketch, C::SKETCH_TITLE_PLACEHOLDER, title)
    }

    fn create_markdown(
        &self,
        host: &mut dyn Host,
        object_type: ObjectType,
        placeholder: &str,
        title: Option<String>,
    ) -> Result<Option<PathBuf>> {
        let Some(title) = ask_text(host, placeholder, title)? else {
            return Ok(None);
        };
        let contents = object_type.markdown_template(&title).unwrap_or_default();
        let path = self.create_object(object_type, &title, &contents)?;
        host.open_in_viewer(&path)?;
        Ok(Some(path))
    }

    /// Create Reference: prompts for the kind, then the title, unless given
    pub fn create_reference(
        &self,
        host: &mut dyn Host,
        kind: Option<ReferenceKind>,
        title: Option<String>,
    ) -> Result<Option<PathBuf>> {
        let kind = match kind {
            Some(kind) => kind,
            None => {
                let options: Vec<String> = ReferenceKind::ALL.iter().map(|k| k.label().to_string()).collect();
                match host.prompt_choice(&options, C::REFERENCE_KIND_PLACEHOLDER)? {
                    Some(index) => match ReferenceKind::ALL.get(index) {
                        Some(kind) => *kind,
                        None => return Ok(None),
                    },
                    None => return Ok(None),
                }
            }
        };

        let Some(title) = ask_text(host, C::REFERENCE_TITLE_PLACEHOLDER, title)? else {
            return Ok(None);
        };

        let path = self.create_object(ObjectType::Reference, &title, &kind.template(&title))?;
        host.open_in_viewer(&path)?;
        Ok(Some(path))
    }

    // === Links ===

    /// Follow Link Under Cursor: resolve the link at the host's cursor and
    /// open its target.
    ///
    /// Having no link under the cursor is reported as a warning and is not
    /// an error. A dangling or ambiguous link is an error and opens nothing.
    pub fn follow_link_under_cursor(&self, host: &mut dyn Host) -> Result<Option<PathBuf>> {
        let Some((text, offset)) = host.current_cursor_context()? else {
            return Ok(None);
        };

        let Some(link) = link::find_link_at(&text, offset) else {
            host.report_warning("No link under the cursor.");
            return Ok(None);
        };

        let path = link_resolver::resolve(&self.root, &link)?;
        host.open_in_viewer(&path)?;
        Ok(Some(path))
    }

    /// Create Link: let the user pick an object and render a link to it.
    ///
    /// `query` narrows the picker to entries whose id, label or description
    /// contains it (case-insensitive).
    pub fn create_link(&self, host: &mut dyn Host, query: Option<&str>) -> Result<Option<String>> {
        let entries: Vec<(LinkKind, CatalogEntry)> = catalog::list_objects(&self.root)?
            .into_iter()
            .filter(|entry| query.map_or(true, |q| matches_query(entry, q)))
            .filter_map(|entry| Some((LinkKind::try_from(entry.object_type).ok()?, entry)))
            .collect();

        if entries.is_empty() {
            host.report_warning("Nothing to link to.");
            return Ok(None);
        }

        let options: Vec<String> = entries.iter().map(|(_, entry)| picker_line(entry)).collect();
        let Some((kind, entry)) = host
            .prompt_choice(&options, C::LINK_TARGET_PLACEHOLDER)?
            .and_then(|index| entries.get(index))
        else {
            return Ok(None);
        };

        Ok(Some(link::format_link(*kind, &entry.id, Some(&entry.label))))
    }
}

/// Use the supplied value, or prompt for one. Blank answers count as
/// cancelling.
fn ask_text(host: &mut dyn Host, placeholder: &str, given: Option<String>) -> Result<Option<String>> {
    let answer = match given {
        Some(value) => Some(value),
        None => host.prompt_short_text(placeholder)?,
    };
    Ok(answer.filter(|value| !value.trim().is_empty()))
}

fn matches_query(entry: &CatalogEntry, query: &str) -> bool {
    let query = query.to_lowercase();
    entry.id.as_str().contains(&query)
        || entry.label.to_lowercase().contains(&query)
        || entry.description.to_lowercase().contains(&query)
}

/// One picker row: `type: label (description)`
pub fn picker_line(entry: &CatalogEntry) -> String {
    if entry.description.is_empty() {
        format!("{}: {}", entry.object_type, entry.label)
    } else {
        format!("{}: {} ({})", entry.object_type, entry.label, entry.description)
    }
}
