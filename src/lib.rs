pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod host;
pub mod id;
pub mod link;
pub mod link_resolver;
pub mod object;
pub mod reference;
pub mod util;

pub use catalog::{list_objects, CatalogEntry};
pub use cli::{Cli, Command};
pub use config::ResolveContext;
pub use engine::ZekaEngine;
pub use error::{Result, ZekaError};
pub use host::Host;
pub use id::{new_id, Clock, FixedClock, ObjectId, SystemClock};
pub use link::{find_link_at, find_links, format_link, LinkKind, ZekaLink};
pub use link_resolver::resolve;
pub use object::ObjectType;
pub use reference::ReferenceKind;
pub use util::canonicalize;
