//! TUI (Text User Interface) for chatting with the support backend.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::backend::{BackendClient, ChatError};
use crate::core::config::Config;

use draw::draw;
use handlers::{HandleResult, KeyContext, PendingReply};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Take the reply if it has arrived. A worker that died without answering counts as a network failure.
fn poll_pending(pending: &mut Option<PendingReply>, app: &mut App) {
    let Some(reply) = pending.as_ref() else {
        return;
    };
    let result = match reply.result_rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            log::error!("Request worker exited without a result");
            Err(ChatError::Interrupted)
        }
    };
    *pending = None;
    app.apply_result(result);
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for backend calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let client = BackendClient::new(config.as_ref())
        .map_err(|e| io::Error::other(format!("Failed to build HTTP client: {}", e)))?;
    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.as_ref());
    let mut pending: Option<PendingReply> = None;

    // Mouse wheel scrolls the history
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    // Kitty keyboard protocol: Alt+digit as single event with modifier (Ghostty, WezTerm, kitty, etc.)
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        )
    );

    log::info!("TUI started against {}", client.endpoint());

    loop {
        poll_pending(&mut pending, &mut app);

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        KeyContext {
                            app: &mut app,
                            client: &client,
                            pending: &mut pending,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
