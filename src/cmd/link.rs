//! Create Link command module

use zeka::error::Result;
use zeka::ResolveContext;

use super::terminal::TerminalHost;

pub fn run(ctx: &ResolveContext, host: &mut TerminalHost, query: Option<&str>) -> Result<()> {
    let engine = super::resolve::open_engine(ctx)?;
    if let Some(token) = engine.create_link(host, query)? {
        println!("{}", token);
    }
    Ok(())
}
