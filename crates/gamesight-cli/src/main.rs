mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{CatalogAction, Cli, Command};
use crate::config::{CliConfig, ScanOverrides};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays parseable
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("gamesight={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Analyze { files } => commands::analyze::run(&files, cli.json),
        Command::Find { root, all } => commands::find::run(&root, all, cli.json),
        Command::Anticheat {
            root,
            catalog,
            max_depth,
            follow_links,
        } => {
            let config = CliConfig::load(cli.config.as_deref())?.scan_config(ScanOverrides {
                max_depth,
                follow_links,
                catalog,
            })?;
            commands::anticheat::run(&root, config, cli.json)
        }
        Command::Catalog { action } => match action {
            CatalogAction::Show { catalog } => {
                let file_catalog = CliConfig::load(cli.config.as_deref())?.catalog;
                commands::catalog::show(catalog.or(file_catalog).as_deref(), cli.json)
            }
            CatalogAction::Export { path } => commands::catalog::export(&path),
        },
    }
}
