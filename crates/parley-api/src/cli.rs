//! CLI argument definitions for the `parley` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Scripted dialogue agent service.
#[derive(Debug, Parser)]
#[command(name = "parley", version, about = "Scripted dialogue agent service")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP/WebSocket server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1", env = "PARLEY_HOST")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 8095, env = "PARLEY_PORT")]
        port: u16,

        /// Path to a dialogue script TOML file (stock script when omitted)
        #[arg(long, env = "PARLEY_SCRIPT")]
        script: Option<PathBuf>,
    },

    /// Inspect or validate dialogue scripts
    Script {
        #[command(subcommand)]
        action: ScriptAction,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Debug, Subcommand)]
pub enum ScriptAction {
    /// Check a script file for unusable content
    Validate { path: PathBuf },

    /// Print the effective script as TOML (stock script when no path given)
    Show { path: Option<PathBuf> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_serve() {
        let cli = Cli::try_parse_from(["parley", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { port, host, script } => {
                assert_eq!(port, 9000);
                assert_eq!(host, "127.0.0.1");
                assert!(script.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_script_validate() {
        let cli = Cli::try_parse_from(["parley", "script", "validate", "s.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Script {
                action: ScriptAction::Validate { .. }
            }
        ));
    }
}
