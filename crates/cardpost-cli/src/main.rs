mod cli;
mod context;
mod handlers;
mod output;

use cardpost_core::logging::{self, LogFallback, DEBUG_LOG_ENV};
use cardpost_tui::App;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "cardpost", &mut std::io::stdout());
        return Ok(());
    }

    // The form owns the terminal, so without a debug log file it stays silent.
    let debug_log = std::env::var_os(DEBUG_LOG_ENV).map(PathBuf::from);
    let fallback = if cli.command.is_none() {
        LogFallback::Silent
    } else {
        LogFallback::Stderr
    };
    logging::init(debug_log.as_deref(), fallback)?;

    let ctx = CliContext::load(&cli)?;

    match cli.command {
        None => {
            let (mut app, outcome_rx) = App::new(ctx.client.clone(), ctx.notification_ttl());
            app.run(outcome_rx).await?;
        }
        Some(Commands::Create(args)) => {
            handlers::create::handle(ctx.client.as_ref(), args).await?;
        }
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
