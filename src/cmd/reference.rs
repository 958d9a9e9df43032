//! Create Reference command module

use zeka::error::Result;
use zeka::{ReferenceKind, ResolveContext};

use super::terminal::TerminalHost;

pub fn run(
    ctx: &ResolveContext,
    host: &mut TerminalHost,
    kind: Option<ReferenceKind>,
    title: Option<String>,
) -> Result<()> {
    let engine = super::resolve::open_engine(ctx)?;
    engine.create_reference(host, kind, title)?;
    Ok(())
}
