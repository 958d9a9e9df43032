//! Repository resolution utility for commands, and the `resolve` command

use zeka::error::{Result, ZekaError};
use zeka::{link_resolver, util, ObjectId, ObjectType, ResolveContext, ZekaEngine};

/// Open the configured repository.
/// Fails when no root is configured or it does not exist.
pub fn open_engine(ctx: &ResolveContext) -> Result<ZekaEngine> {
    let root = ctx.repo_root()?;
    tracing::debug!("using repository {}", util::display_path(&root));
    ZekaEngine::open(root)
}

pub fn run(ctx: &ResolveContext, object_type: ObjectType, id: &str) -> Result<()> {
    let engine = open_engine(ctx)?;
    let id = ObjectId::parse(id).ok_or_else(|| ZekaError::InvalidId(id.to_string()))?;

    let path = link_resolver::resolve_id(engine.root(), object_type, &id)?;
    println!("{}", util::display_path(&path));
    Ok(())
}
