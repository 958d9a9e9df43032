//! List command module

use zeka::catalog::{self, CatalogEntry};
use zeka::error::Result;
use zeka::{ObjectType, ResolveContext};

pub fn run(ctx: &ResolveContext, object_type: Option<ObjectType>, json: bool) -> Result<()> {
    let engine = super::resolve::open_engine(ctx)?;

    let entries: Vec<CatalogEntry> = match object_type {
        Some(object_type) => catalog::scan_type(engine.root(), object_type)?,
        None => catalog::list_objects(engine.root())?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        if entry.description.is_empty() {
            println!("{}  {:<10}  {}", entry.id, entry.object_type, entry.label);
        } else {
            println!("{}  {:<10}  {}  ({})", entry.id, entry.object_type, entry.label, entry.description);
        }
    }
    Ok(())
}
