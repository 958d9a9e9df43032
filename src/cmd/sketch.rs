//! Create Sketch command module

use zeka::error::Result;
use zeka::ResolveContext;

use super::terminal::TerminalHost;

pub fn run(ctx: &ResolveContext, host: &mut TerminalHost, title: Option<String>) -> Result<()> {
    let engine = super::resolve::open_engine(ctx)?;
    engine.create_sketch(host, title)?;
    Ok(())
}
