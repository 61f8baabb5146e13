//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coderemark")]
#[command(about = "Attach remarks to lines of code", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize remark storage for a project
    Init {
        /// Project directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add or replace the remark on a line
    Add {
        file: PathBuf,

        #[arg(value_parser = clap::value_parser!(i32).range(0..))]
        line: i32,

        /// Remark text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List remarks for the current version of a file, or all remarks
    List {
        file: Option<PathBuf>,
    },

    /// Show the remark on a line
    Show {
        file: PathBuf,

        #[arg(value_parser = clap::value_parser!(i32).range(0..))]
        line: i32,
    },

    /// Remove the remark on a line, or all remarks on the file
    Rm {
        file: PathBuf,

        #[arg(value_parser = clap::value_parser!(i32).range(0..))]
        line: Option<i32>,
    },

    /// Merge remarks from another state file
    Import {
        state_file: PathBuf,
    },

    /// List remarks whose file has changed or disappeared
    Stale,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_joins_words() {
        let cli = Cli::parse_from(["coderemark", "add", "src/main.rs", "12", "check", "this"]);
        match cli.command {
            Commands::Add { file, line, text } => {
                assert_eq!(file, PathBuf::from("src/main.rs"));
                assert_eq!(line, 12);
                assert_eq!(text, vec!["check", "this"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rm_without_line() {
        let cli = Cli::parse_from(["coderemark", "rm", "a.rs"]);
        assert!(matches!(cli.command, Commands::Rm { line: None, .. }));
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["coderemark", "list", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_add_requires_text() {
        assert!(Cli::try_parse_from(["coderemark", "add", "a.rs", "1"]).is_err());
    }
}
