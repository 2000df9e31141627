//! Terminal rendition of the demo screen.

mod app;
mod disc;

pub use app::{App, Command};
pub use disc::{covers, disc_area, Disc};

use crate::config::DemoConfig;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Poll interval while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Take over the terminal, run until the user quits, then restore it.
pub async fn run(config: &DemoConfig) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, App::new(config)).await;
    ratatui::restore();
    result
}

async fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> anyhow::Result<()> {
    tracing::info!("terminal ui started");

    while !app.should_quit() {
        if app.needs_redraw() {
            terminal.draw(|frame| app.draw(frame, Instant::now()))?;
        }

        let timeout = if app.needs_redraw() {
            app.frame_interval()
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = Command::from_key(key.code) {
                        app.dispatch(command).await?;
                    }
                }
                Event::Resize(..) => app.request_redraw(),
                _ => {}
            }
        }

        app.drain_events(Instant::now());
    }

    tracing::info!(taps = app.view().tap_count(), "terminal ui stopped");
    Ok(())
}
