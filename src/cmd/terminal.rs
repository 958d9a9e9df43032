//! Terminal implementation of the host side
//!
//! Prompts go to stderr and read a line from stdin, so stdout only carries
//! results (paths, link tokens) and stays usable in pipelines.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use zeka::util;
use zeka::Host;

#[derive(Debug, Default)]
pub struct TerminalHost {
    /// Document and cursor offset for Follow Link
    pub cursor: Option<(String, usize)>,
}

impl TerminalHost {
    /// Read one line from stdin; `None` on end of input
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Host for TerminalHost {
    fn prompt_short_text(&mut self, placeholder: &str) -> io::Result<Option<String>> {
        eprint!("{}: ", placeholder);
        io::stderr().flush()?;
        self.read_line()
    }

    fn prompt_choice(&mut self, options: &[String], placeholder: &str) -> io::Result<Option<usize>> {
        for (n, option) in options.iter().enumerate() {
            eprintln!("{:>3}) {}", n + 1, option);
        }
        eprint!("{} [1-{}]: ", placeholder, options.len());
        io::stderr().flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Ok(Some(n - 1)),
            _ => {
                self.report_warning(&format!("Not a valid choice: {}", answer));
                Ok(None)
            }
        }
    }

    fn open_in_viewer(&mut self, path: &Path) -> io::Result<()> {
        // Output full path for shell pipeline compatibility
        println!("{}", util::display_path(path));
        Ok(())
    }

    fn current_cursor_context(&mut self) -> io::Result<Option<(String, usize)>> {
        Ok(self.cursor.clone())
    }

    fn report_error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn report_warning(&mut self, message: &str) {
        eprintln!("warning: {}", message);
    }
}

/// Read a whole document from a file, or stdin for "-"
pub fn read_document(file: &str) -> io::Result<String> {
    if file == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(file)
    }
}
