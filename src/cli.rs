//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for qrdash using the
//! `clap` crate. The interactive dashboard is the default command; the
//! remaining subcommands expose the same record operations for scripting.
//!
//! # Commands
//!
//! - **dashboard**: Open the interactive TUI dashboard (default)
//! - **init**: Create the house manual file
//! - **list**: Print the QR code records of the manual
//! - **catalog**: Print the available use cases
//! - **add**: Create a record without opening the dashboard
//! - **remove**: Delete a record by id, with confirmation
//! - **print**: Compose a print document for chosen records

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
    name = "qrdash",
    version,
    about = "A terminal dashboard for house-manual QR codes"
)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the house manual file (overrides the configured path)
    #[arg(long, global = true, value_name = "FILE")]
    pub manual: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    #[command(alias = "d")]
    Dashboard,

    /// Create the house manual file
    Init {
        /// Display name of the property
        #[arg(long)]
        name: Option<String>,

        /// Street address of the property
        #[arg(long)]
        address: Option<String>,

        /// Seed the manual with sample records
        #[arg(long)]
        sample: bool,
    },

    /// List the QR code records in the manual
    #[command(alias = "ls")]
    List,

    /// List the available use cases
    Catalog,

    /// Add a record without opening the dashboard
    #[command(alias = "a")]
    Add {
        /// Record title
        #[arg(short, long)]
        title: String,

        /// Payload to encode into the QR code
        #[arg(short, long)]
        content: String,

        /// Use-case id (see 'qrdash catalog')
        #[arg(short, long, value_name = "ID")]
        use_case: String,
    },

    /// Remove a record by id
    #[command(alias = "rm")]
    Remove {
        /// Record id to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Compose a print document for chosen records
    Print {
        /// Record ids to print
        ids: Vec<String>,

        /// Print every record in the manual
        #[arg(long, conflicts_with = "ids")]
        all: bool,

        /// Output directory (overrides the configured print directory)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to the dashboard
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_dashboard() {
        let cli = Cli::parse_from(["qrdash"]);
        assert!(matches!(cli.command(), Commands::Dashboard));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_add_arguments() {
        let cli = Cli::parse_from([
            "qrdash", "add", "-t", "Pool Gate", "-c", "https://x/pool", "-u", "uc-007",
        ]);
        match cli.command() {
            Commands::Add {
                title,
                content,
                use_case,
            } => {
                assert_eq!(title, "Pool Gate");
                assert_eq!(content, "https://x/pool");
                assert_eq!(use_case, "uc-007");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_print_all_conflicts_with_ids() {
        assert!(Cli::try_parse_from(["qrdash", "print", "qr-1", "--all"]).is_err());
        let cli = Cli::parse_from(["qrdash", "print", "--all"]);
        assert!(matches!(cli.command(), Commands::Print { all: true, .. }));
    }

    #[test]
    fn test_global_flags_apply_after_subcommand() {
        let cli = Cli::parse_from(["qrdash", "list", "--quiet", "--manual", "/tmp/m.json"]);
        assert!(cli.quiet);
        assert_eq!(cli.manual, Some(PathBuf::from("/tmp/m.json")));
    }

    #[test]
    fn test_remove_alias() {
        let cli = Cli::parse_from(["qrdash", "rm", "qr-1", "-y"]);
        assert!(matches!(
            cli.command(),
            Commands::Remove { yes: true, .. }
        ));
    }
}
