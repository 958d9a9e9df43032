//! Links command module
//!
//! Lists every link token in a document with its resolution status.

use zeka::error::{Result, ZekaError};
use zeka::{find_links, link_resolver, util, ResolveContext};

use super::terminal::read_document;

pub fn run(ctx: &ResolveContext, file: &str) -> Result<()> {
    let engine = super::resolve::open_engine(ctx)?;
    let text = read_document(file)?;

    for (range, link) in find_links(&text) {
        let line = text[..range.start].matches('\n').count() + 1;
        let status = match link_resolver::resolve(engine.root(), &link) {
            Ok(path) => util::display_path(&path),
            Err(ZekaError::NotFound { .. }) => "BROKEN".to_string(),
            Err(ZekaError::Ambiguous { matches, .. }) => format!("AMBIGUOUS ({} matches)", matches.len()),
            Err(err) => return Err(err),
        };
        println!("{}:{}: {} -> {}", file, line, &text[range], status);
    }

    Ok(())
}
