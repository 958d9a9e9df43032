//! Repository root resolution
//!
//! The repository root comes from, in order of priority:
//! 1. the `--repo` command-line option
//! 2. the ZEKA_REPOSITORY environment variable
//! 3. `repository = "..."` in `{config_dir}/zeka/config.toml`
//!
//! It is resolved once per command and handed to the core explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants as C;
use crate::error::{Result, ZekaError};

/// Contents of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub repository: Option<String>,
}

impl Settings {
    /// Load settings from `path`; a missing file means defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let source = fs::read_to_string(path)?;
        toml::from_str(&source)
            .map_err(|err| ZekaError::Config(format!("{}: {}", path.display(), err)))
    }
}

/// Default configuration file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(C::CONFIG_DIR_NAME).join(C::CONFIG_FILENAME))
}

/// Resolution context for the repository root
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Explicit root from the command line
    pub cli_repo: Option<String>,
    /// Root from ZEKA_REPOSITORY
    pub env_repo: Option<String>,
    /// Configuration file to consult last
    pub config_path: Option<PathBuf>,
}

impl ResolveContext {
    /// Create a context from the command-line value and the environment
    pub fn new(cli_repo: Option<String>, config_path: Option<PathBuf>) -> Self {
        // Treat empty strings as None
        let env_repo = std::env::var(C::ENV_REPOSITORY)
            .ok()
            .filter(|s| !s.is_empty());

        Self {
            cli_repo: cli_repo.filter(|s| !s.is_empty()),
            env_repo,
            config_path: config_path.or_else(default_config_path),
        }
    }

    /// The configured repository root, checked to exist
    pub fn repo_root(&self) -> Result<PathBuf> {
        let configured = match self.cli_repo.clone().or_else(|| self.env_repo.clone()) {
            Some(repo) => Some(repo),
            None => match self.config_path {
                Some(ref path) => Settings::load(path)?.repository.filter(|s| !s.is_empty()),
                None => None,
            },
        };

        let Some(configured) = configured else {
            return Err(ZekaError::RepositoryUnset);
        };

        let root = expand_home(&configured);
        if !root.is_dir() {
            return Err(ZekaError::RepositoryMissing(root));
        }

        // Use dunce to avoid UNC prefix on Windows
        Ok(dunce::canonicalize(&root).unwrap_or(root))
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}
