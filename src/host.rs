//! The user-facing side of a command
//!
//! zeka does not own a UI. Whatever drives it (a terminal, an editor
//! plugin, a test) implements [`Host`] to answer prompts, show files and
//! surface messages. Prompts return `Ok(None)` when the user cancels.

use std::io;
use std::path::Path;

pub trait Host {
    /// Ask for a short free-form string
    fn prompt_short_text(&mut self, placeholder: &str) -> io::Result<Option<String>>;

    /// Ask the user to pick one of `options`; returns its index
    fn prompt_choice(&mut self, options: &[String], placeholder: &str) -> io::Result<Option<usize>>;

    /// Show a file to the user
    fn open_in_viewer(&mut self, path: &Path) -> io::Result<()>;

    /// Text of the current document and the cursor's character offset in it
    fn current_cursor_context(&mut self) -> io::Result<Option<(String, usize)>>;

    fn report_error(&mut self, message: &str);

    fn report_warning(&mut self, message: &str);
}
