//! Parley CLI and REST API entry point.
//!
//! Binary name: `parley`
//!
//! Parses CLI arguments, initializes tracing and application state, then
//! dispatches to the appropriate command handler or starts the server.

mod cli;
mod http;
mod script;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands, ScriptAction};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity (RUST_LOG overrides)
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,parley=debug",
        _ => "trace",
    };
    parley_observe::tracing_setup::init_tracing(filter, cli.json_logs)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "parley", &mut std::io::stdout());
            Ok(())
        }

        Commands::Script { action } => match action {
            ScriptAction::Validate { path } => {
                let loaded = script::load(Some(&path))?;
                println!(
                    "script OK: {} responses, {} suggested actions, welcome {} ms, reply {} ms",
                    loaded.responses.len(),
                    loaded.suggested_actions.len(),
                    loaded.welcome_delay_ms,
                    loaded.reply_delay_ms,
                );
                Ok(())
            }
            ScriptAction::Show { path } => {
                let loaded = script::load(path.as_deref())?;
                print!("{}", toml::to_string_pretty(&loaded)?);
                Ok(())
            }
        },

        Commands::Serve { host, port, script } => {
            let loaded = self::script::load(script.as_deref())?;
            let state = AppState::new(loaded)?;
            let router = http::router::build_router(state);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "parley listening");
            axum::serve(listener, router).await?;
            Ok(())
        }
    }
}
