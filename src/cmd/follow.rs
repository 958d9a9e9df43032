//! Follow Link command module
//!
//! The "cursor" is a character offset into a file (or stdin).

use zeka::error::Result;
use zeka::ResolveContext;

use super::terminal::{read_document, TerminalHost};

pub fn run(ctx: &ResolveContext, host: &mut TerminalHost, file: &str, offset: usize) -> Result<()> {
    let engine = super::resolve::open_engine(ctx)?;
    let text = read_document(file)?;

    host.cursor = Some((text, offset));
    engine.follow_link_under_cursor(host)?;
    Ok(())
}
