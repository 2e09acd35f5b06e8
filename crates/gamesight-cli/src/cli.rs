//! Command-line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamesight")]
#[command(about = "Inspect game installation directories", version)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to <config dir>/gamesight/config.toml)
    #[arg(short, long, global = true, env = "GAMESIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify executables as 32-bit or 64-bit from their PE header
    Analyze {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Find the main executable of a game installation
    Find {
        root: PathBuf,

        /// List every candidate with its score instead of only the best
        #[arg(long)]
        all: bool,
    },

    /// Detect anti-cheat software in a game installation
    Anticheat {
        root: PathBuf,

        /// Signature catalog JSON (overrides the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Deepest directory level to list (game root = 0)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Descend into symlinked directories
        #[arg(long)]
        follow_links: bool,
    },

    /// Inspect or export the signature catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Print the active catalog
    Show {
        /// Catalog JSON to show instead of the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Write the built-in catalog to a JSON file as a starting point
    Export { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_anticheat_flags() {
        let cli = Cli::try_parse_from([
            "gamesight",
            "--json",
            "anticheat",
            "/games/foo",
            "--max-depth",
            "5",
            "--follow-links",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Command::Anticheat {
                root,
                max_depth,
                follow_links,
                catalog,
            } => {
                assert_eq!(root, PathBuf::from("/games/foo"));
                assert_eq!(max_depth, Some(5));
                assert!(follow_links);
                assert!(catalog.is_none());
            }
            _ => panic!("expected anticheat command"),
        }
    }

    #[test]
    fn test_analyze_requires_files() {
        assert!(Cli::try_parse_from(["gamesight", "analyze"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["gamesight", "-vv", "find", "."]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
