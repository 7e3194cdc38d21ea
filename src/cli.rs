//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  foodies-chat                          Open the chat panel
  foodies-chat -p \"Show me the menu\"    Ask once, print the reply to stdout
  foodies-chat -p -                     Read the question from stdin
  foodies-chat --url http://localhost:5000/api/chat
                                        Talk to a local backend
  foodies-chat status                   Check that the backend is up
  foodies-chat config                   Show effective configuration
  foodies-chat completions bash         Generate bash completions

ENVIRONMENT:
  FOODIES_CHAT_URL            Chat endpoint (POST)
  FOODIES_CHAT_TIMEOUT_SECS   Request timeout in seconds (default 60)
  FOODIES_MENU_VIEW           1/true to show menu-looking replies as menus
  FOODIES_CITATIONS           Citations to strip: all (default) or documents
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Foodies customer-support chat in your terminal",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single message then exit (without opening the chat panel)
    #[arg(
        short = 'p',
        long,
        help = "Send one message and print the reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override the chat endpoint
    #[arg(long, global = true, help = "Chat endpoint URL (overrides FOODIES_CHAT_URL)")]
    pub url: Option<String>,

    /// Override the request timeout
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        help = "Request timeout in seconds (overrides FOODIES_CHAT_TIMEOUT_SECS)"
    )]
    pub timeout: Option<u64>,

    /// Show menu-looking replies as menus
    #[arg(long, global = true)]
    pub menu: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the backend health route
    Status,
    /// Show endpoint, timeout, menu view and log file location
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when the chat panel will take over the terminal.
    pub fn is_interactive(&self) -> bool {
        self.command.is_none() && self.prompt.is_none()
    }
}
