//! # Foodies Chat
//!
//! Terminal client for the Foodies customer-support assistant.
//!
//! ## Features
//! - Interactive chat panel with quick replies, Markdown and menu rendering
//! - Single message mode with `-p` or `--prompt`
//! - Backend health check and configuration display

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load()
        .and_then(|c| c.with_overrides(args.url.as_deref(), args.timeout))
        .map(|mut c| {
            c.menu_view |= args.menu;
            c
        })
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    match args.command {
        Some(Commands::Status) => run::run_status(&config).await,
        Some(Commands::Config) => {
            run::print_config(&config);
            Ok(())
        }
        Some(Commands::Completions { .. }) => Ok(()),
        None if args.prompt.is_some() => run::run_single_prompt(&args, &config).await,
        None => run::launch_tui(config).await,
    }
}
