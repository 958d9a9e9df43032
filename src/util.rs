//! Utility functions for file names, headings and path display

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::constants as C;

static SPACES_AROUND_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r" *- *").unwrap());
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Convert a free-form title into a token that is safe in file names
/// on every platform we care about.
///
/// Diacritics are removed, brackets and quotes are dropped or turned into
/// dashes, punctuation becomes spaces, and the remaining spaces are
/// collapsed into underscores. The output only contains alphanumerics,
/// `-` and `_`, so canonicalizing twice changes nothing.
pub fn canonicalize(title: &str) -> String {
    let mapped: String = title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter_map(|c| match c {
            '(' | '[' | '{' => Some('-'),
            ')' | ']' | '}' => None,
            '\'' | '"' | '`' => None,
            ':' => Some('-'),
            '-' | '_' | ' ' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            // `. , ! ? ; / \` and anything else unsafe
            _ => Some(' '),
        })
        .collect();

    let dashed = SPACES_AROUND_DASH.replace_all(&mapped, "-");
    let trimmed = dashed.trim_matches(' ');
    SPACE_RUNS.replace_all(trimmed, "_").into_owned()
}

/// Title carried by a Markdown heading line (`# Title`), if any
pub fn heading_title(line: &str) -> Option<String> {
    line.trim_end_matches(['\r', '\n'])
        .strip_prefix(C::HEADING_MARKER)
        .map(str::trim_end)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

/// Read only the first line of a Markdown file and extract its heading
pub fn read_heading(path: &Path) -> io::Result<Option<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut first_line = String::new();
    reader.read_line(&mut first_line)?;
    Ok(heading_title(&first_line))
}

/// Display a path with forward slashes (cross-platform standard)
/// Converts Windows backslashes to forward slashes for consistent output
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
