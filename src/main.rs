//! studypoints - points exchange for a study-group tracker
//!
//! Run without arguments to open the points screen, or use subcommands for
//! configuration and scripted keypad input.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use studypoints::cli::commands::{Cli, Commands};
use studypoints::cli::{config, format, replay};
use studypoints::core::config::Config;
use studypoints::error::Result;
use studypoints::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging on stderr so command output stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Config::resolve_path(cli.config.as_deref())?;

    match cli.command {
        // No subcommand - launch TUI mode
        None => {
            let config = Config::load_from(&config_path)?;
            let mut app = App::new(&config);
            app.run().await
        }

        Some(Commands::Config(args)) => config::handle_config(args.command, &config_path),

        Some(Commands::Format(args)) => {
            let config = Config::load_from(&config_path)?;
            format::handle_format(args, &config)
        }

        Some(Commands::Replay(args)) => {
            let config = Config::load_from(&config_path)?;
            replay::handle_replay(args, &config)
        }
    }
}
