//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rosterctl_core::{Member, MemberSource};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{info, warn};

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

type FetchResult = rosterctl_core::Result<Vec<Member>>;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI application
///
/// The member fetch runs on a background task while the table is already
/// drawn; its result is handed back once through a oneshot channel.
pub async fn run(source: Box<dyn MemberSource>) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(source.describe());
    info!(source = %app.source_label, "Starting member table");

    let (tx, rx) = oneshot::channel::<FetchResult>();
    tokio::spawn(async move {
        let result = source.fetch().await;
        // The receiver is gone only if the user already quit
        let _ = tx.send(result);
    });

    let result = run_loop(&mut terminal, &mut app, rx);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    rx: oneshot::Receiver<FetchResult>,
) -> Result<()> {
    let mut pending = Some(rx);

    loop {
        if let Some(rx) = pending.as_mut() {
            match rx.try_recv() {
                Ok(result) => {
                    app.on_members_loaded(result);
                    pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    warn!("Member fetch task ended without a result");
                    pending = None;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout so the fetch result shows up promptly)
        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(100))? {
            if key.kind == KeyEventKind::Press && handle_key(app, key) == HandleResult::Quit {
                break;
            }
        }
    }

    Ok(())
}
