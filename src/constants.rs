//! Constants for zeka
//!
//! Directory names, format strings and environment variable names shared by
//! the library and the command-line front end.

// === Repository Layout ===

/// Subdirectory for notes
pub const NOTES_SUBDIR: &str = "notes";

/// Subdirectory for references
pub const REFERENCES_SUBDIR: &str = "references";

/// Subdirectory for attachments
pub const ATTACHMENTS_SUBDIR: &str = "attachments";

/// Subdirectory for sketches
pub const SKETCHES_SUBDIR: &str = "sketches";

/// Extension for notes and sketches
pub const MARKDOWN_EXTENSION: &str = "md";

/// Extension for references
pub const TOML_EXTENSION: &str = "toml";

/// Separator between the object id and the title in file names
pub const ID_TITLE_SEPARATOR: char = '-';

// === Markdown ===

/// Heading marker recognised on the first line of a note
pub const HEADING_MARKER: &str = "# ";

// === Date and Time Format Strings ===

/// Object id format, equivalent to `date +0%Y%m%d%H%M%S`
pub const ID_TIMESTAMP_FORMAT: &str = "0%Y%m%d%H%M%S";

/// Length of an object id
pub const ID_LENGTH: usize = 15;

/// Format accepted by the ZEKA_TIMESTAMP override
pub const TIMESTAMP_OVERRIDE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// === Reference Display ===

/// Joins multi-valued reference fields (titles, authors)
pub const LIST_JOINER: &str = "; ";

/// Placed between title and subtitle
pub const SUBTITLE_SEPARATOR: &str = ": ";

/// Edition suffix format: ", {}Ed."
pub const EDITION_SUFFIX: &str = "Ed.";

// === Environment Variables ===

/// Repository root override
pub const ENV_REPOSITORY: &str = "ZEKA_REPOSITORY";

/// Fixed "now" for deterministic ids (testing)
pub const ENV_TIMESTAMP: &str = "ZEKA_TIMESTAMP";

// === Configuration ===

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "zeka";

/// Configuration file name
pub const CONFIG_FILENAME: &str = "config.toml";

// === Prompts ===

pub const NOTE_TITLE_PLACEHOLDER: &str = "Note title";
pub const SKETCH_TITLE_PLACEHOLDER: &str = "Sketch title";
pub const REFERENCE_TITLE_PLACEHOLDER: &str = "Reference title";
pub const REFERENCE_KIND_PLACEHOLDER: &str = "Create what type of reference?";
pub const LINK_TARGET_PLACEHOLDER: &str = "Link to which object?";
