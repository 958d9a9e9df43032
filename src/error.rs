//! Error type shared by every zeka operation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::util::display_path;

#[derive(Debug, Error)]
pub enum ZekaError {
    #[error("No Zeka repository configured! Set --repo, ZEKA_REPOSITORY or `repository` in the config file.")]
    RepositoryUnset,

    #[error("No Zeka repository found at '{}'.", display_path(.0))]
    RepositoryMissing(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("'{0}' is not an object id (expected 0YYYYMMDDHHMMSS).")]
    InvalidId(String),

    #[error("No file matches '{pattern}'.")]
    NotFound { pattern: String },

    #[error("More than one file matches '{pattern}': {}", join_paths(.matches))]
    Ambiguous {
        pattern: String,
        matches: Vec<PathBuf>,
    },

    #[error("File System error: {0}")]
    Io(#[from] io::Error),

    #[error("(De)Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| display_path(p))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ZekaError>;
