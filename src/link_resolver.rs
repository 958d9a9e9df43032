//! Link resolution
//!
//! Maps a link to the one file backing it. The lookup is a plain directory
//! scan for `{subdir}/{id}*` (plus the type's extension, when it has one);
//! nothing is cached between calls.
//!
//! Two files sharing an id prefix is a repository hygiene problem. It is
//! reported with every match instead of silently picking one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ZekaError};
use crate::id::ObjectId;
use crate::link::ZekaLink;
use crate::object::ObjectType;
use crate::util::display_path;

/// Resolution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedObject {
    /// Single file found
    Found(PathBuf),
    /// Multiple candidates (ambiguous)
    Ambiguous(Vec<PathBuf>),
    /// Not found
    NotFound,
}

/// Resolve a link to the file it points at
pub fn resolve(repo_root: &Path, link: &ZekaLink) -> Result<PathBuf> {
    resolve_id(repo_root, link.kind.into(), &link.id)
}

/// Resolve an object of a given type by id
pub fn resolve_id(repo_root: &Path, object_type: ObjectType, id: &ObjectId) -> Result<PathBuf> {
    let pattern = display_path(&search_pattern(repo_root, object_type, id));
    tracing::debug!("resolving {}", pattern);

    match find_candidates(repo_root, object_type, id)? {
        ResolvedObject::Found(path) => Ok(path),
        ResolvedObject::NotFound => Err(ZekaError::NotFound { pattern }),
        ResolvedObject::Ambiguous(matches) => Err(ZekaError::Ambiguous { pattern, matches }),
    }
}

/// `{root}/{subdir}/{id}*[.ext]`, for messages
pub fn search_pattern(repo_root: &Path, object_type: ObjectType, id: &ObjectId) -> PathBuf {
    let glob = match object_type.layout().extension {
        Some(ext) => format!("{}*.{}", id, ext),
        None => format!("{}*", id),
    };
    object_type.dir(repo_root).join(glob)
}

/// Scan the type's directory for entries named after `id`
pub fn find_candidates(
    repo_root: &Path,
    object_type: ObjectType,
    id: &ObjectId,
) -> Result<ResolvedObject> {
    let dir = object_type.dir(repo_root);

    if !dir.exists() {
        return Ok(ResolvedObject::NotFound);
    }

    let suffix = object_type.layout().extension.map(|ext| format!(".{}", ext));
    let mut candidates = Vec::new();

    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        if !name_str.starts_with(id.as_str()) {
            continue;
        }
        if let Some(ref suffix) = suffix {
            if !name_str.ends_with(suffix.as_str()) {
                continue;
            }
        }
        candidates.push(entry.path());
    }

    candidates.sort();

    match candidates.len() {
        0 => Ok(ResolvedObject::NotFound),
        1 => Ok(ResolvedObject::Found(candidates.remove(0))),
        _ => Ok(ResolvedObject::Ambiguous(candidates)),
    }
}
