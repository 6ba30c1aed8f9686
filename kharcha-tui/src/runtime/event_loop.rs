use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use kharcha_client::KharchaClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

/// One logical thread: draw, poll the keyboard, drain queued actions.
/// Network calls are awaited inside the drain, so at most one is in flight
/// at a time; duplicate triggers queue up and are de-staled by their
/// generation stamps.
pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &mut KharchaClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
