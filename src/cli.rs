use clap::{Parser, Subcommand};

use crate::object::ObjectType;
use crate::reference::ReferenceKind;

/// zeka - A Zettelkasten-style repository with typed links
///
/// ## Objects
///
/// ```bash
/// zeka note "My Idea"                  # notes/0YYYYMMDDHHMMSS-My_Idea.md
/// zeka sketch                          # prompts for the title
/// zeka reference book "TAOCP"          # references/...-TAOCP.toml
/// zeka reference                       # prompts for kind and title
/// ```
///
/// ## Links
///
/// ```text
/// [Intro][[020200514084500]]           note
/// {Knuth}{{019800101000000}}           reference
/// (diagram)((020200514090000))         attachment
/// ```
///
/// ```bash
/// zeka follow draft.md --offset 42     # path of the link at character 42
/// zeka link knuth                      # pick an object, print its link
/// zeka links draft.md                  # every link in a file
/// zeka resolve note 020200514084500    # path of an object
/// zeka list --type reference --json    # catalog
/// ```
///
/// ## Repository
///
/// `--repo PATH`, then `ZEKA_REPOSITORY`, then `repository = "..."` in the
/// config file (`~/.config/zeka/config.toml` on Linux).
#[derive(Parser, Debug)]
#[command(name = "zeka")]
#[command(version)]
#[command(about = "A Zettelkasten-style repository with typed links")]
pub struct Cli {
    /// Repository root (default: $ZEKA_REPOSITORY or the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<String>,

    /// Configuration file (default: platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a note (in notes/)
    #[command(alias = "n")]
    Note {
        /// Note title (prompted for if omitted)
        title: Option<String>,
    },

    /// Create a reference (in references/)
    #[command(alias = "r")]
    Reference {
        /// Kind of reference (picked interactively if omitted)
        #[arg(value_enum)]
        kind: Option<ReferenceKind>,

        /// Reference title (prompted for if omitted)
        title: Option<String>,
    },

    /// Create a sketch (in sketches/)
    #[command(alias = "s")]
    Sketch {
        /// Sketch title (prompted for if omitted)
        title: Option<String>,
    },

    /// Resolve the link at a position in a file and print its target
    #[command(alias = "f")]
    Follow {
        /// File containing the link ("-" for stdin)
        file: String,

        /// Character offset of the cursor
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Pick an object and print a link to it
    #[command(alias = "l")]
    Link {
        /// Only offer objects whose id, title or authors contain this
        query: Option<String>,
    },

    /// List the objects of the repository
    #[command(alias = "ls")]
    List {
        /// Only this type (sketches are only listed this way)
        #[arg(short = 't', long = "type", value_enum)]
        object_type: Option<ObjectType>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List every link in a file and where it points
    Links {
        /// File to scan ("-" for stdin)
        file: String,
    },

    /// Print the path of an object
    #[command(alias = "rv")]
    Resolve {
        #[arg(value_enum)]
        object_type: ObjectType,

        /// Object id (0YYYYMMDDHHMMSS)
        id: String,
    },

    /// Print a fresh object id
    NewId,
}
