use std::path::PathBuf;
use clap::{Parser, Subcommand};

/// Inspect the printer model registry
#[derive(Debug, Parser)]
#[command(name = "catprint", version, about)]
pub struct Cli {
    /// Directory holding default.toml and local.toml
    #[arg(long, global = true, value_name = "DIR", default_value = "config")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all known printer models
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the capabilities of one model
    Show {
        /// Model name, case-sensitive (e.g. GB01)
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Exit with status 0 if the model is known, 1 otherwise
    Check {
        name: String,
    },
    /// Resolve a discovered device ("name,address") to its model
    Device {
        /// Device string as reported by a scan, e.g. GB01,AA:BB:CC:DD:EE:FF
        device: String,
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["catprint", "show", "GB03", "--json"]).unwrap();
        assert_eq!(cli.config_dir, PathBuf::from("config"));
        match cli.command {
            Command::Show { name, json } => {
                assert_eq!(name, "GB03");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_dir() {
        let cli = Cli::try_parse_from(["catprint", "list", "--config-dir", "/etc/catprint"]).unwrap();
        assert_eq!(cli.config_dir, PathBuf::from("/etc/catprint"));
        assert!(matches!(cli.command, Command::List { json: false }));
    }
}
