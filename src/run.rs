//! Application run modes: logger init, single prompt, status, TUI launch.

use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::backend::BackendClient;
use crate::core::config::Config;
use crate::core::session::ChatSession;
use crate::core::text::{self, DisplayBlock};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_interactive() {
        let log_path = core::paths::log_file();
        if let Some(path) = log_path
            && let Some(dir) = path.parent()
            && std::fs::create_dir_all(dir).is_ok()
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Send one message, print the cleaned reply to stdout.
pub async fn run_single_prompt(
    args: &Args,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt_arg = args.prompt.as_deref().unwrap_or_default();
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };
    if prompt.trim().is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let client = BackendClient::new(config)?;
    let mut session = ChatSession::new().with_citations(config.citations);
    if let Some(reply) = session.round_trip(&client, &prompt).await {
        println!("{}", plain_reply(&reply.text, config.menu_view));
    }
    Ok(())
}

/// Render a bot reply for a plain terminal: menu rows when enabled and detected, else Markdown.
pub fn plain_reply(reply: &str, menu_view: bool) -> String {
    if menu_view && text::looks_like_menu(reply) {
        return text::format_as_menu(reply)
            .into_iter()
            .map(|block| match block {
                DisplayBlock::Heading(h) => format!("\n{}", h),
                DisplayBlock::MenuRow { name, value } => format!("  {:<32} {}", name, value),
                DisplayBlock::Paragraph(p) => p,
            })
            .collect::<Vec<_>>()
            .join("\n")
            .trim_start()
            .to_string();
    }
    text::markdown::to_plain_text(&text::render_markdown(reply))
}

/// Query the backend health route and print its JSON.
pub async fn run_status(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = BackendClient::new(config)?;
    match client.health_check().await {
        Ok(status) => {
            println!("{}", serde_json::to_string_pretty(&status)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Backend at {} is not reachable: {}", client.endpoint(), e);
            std::process::exit(1);
        }
    }
}

/// Print the effective configuration.
pub fn print_config(config: &Config) {
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!("endpoint:  {}", config.endpoint);
    println!("timeout:   {}s", config.timeout.as_secs());
    println!("menu view: {}", if config.menu_view { "on" } else { "off" });
    println!("citations: {}", config.citations.as_str());
    match core::paths::log_file() {
        Some(p) => println!("log file:  {}", p.display()),
        None => println!("log file:  (unavailable)"),
    }
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
