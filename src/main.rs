use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zeka::{Cli, Command, Host, ResolveContext};

use cmd::terminal::TerminalHost;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = ResolveContext::new(cli.repo, cli.config.map(PathBuf::from));
    let mut host = TerminalHost::default();

    let result = match cli.command {
        Command::Note { title } => cmd::note::run(&ctx, &mut host, title),
        Command::Sketch { title } => cmd::sketch::run(&ctx, &mut host, title),
        Command::Reference { kind, title } => cmd::reference::run(&ctx, &mut host, kind, title),
        Command::Follow { file, offset } => cmd::follow::run(&ctx, &mut host, &file, offset),
        Command::Link { query } => cmd::link::run(&ctx, &mut host, query.as_deref()),
        Command::List { object_type, json } => cmd::list::run(&ctx, object_type, json),
        Command::Links { file } => cmd::links::run(&ctx, &file),
        Command::Resolve { object_type, id } => cmd::resolve::run(&ctx, object_type, &id),
        Command::NewId => cmd::new_id::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            host.report_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

mod cmd {
    pub mod follow;
    pub mod link;
    pub mod links;
    pub mod list;
    pub mod new_id;
    pub mod note;
    pub mod reference;
    pub mod resolve;
    pub mod sketch;
    pub mod terminal;
}
