//! Main event loop: draw a frame, then wait for a key or a deadline.

use std::time::Instant;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use log::debug;
use tokio::time::sleep_until;

use crate::app::App;
use crate::error::AppError;
use crate::terminal::Terminal;
use crate::ui;

pub async fn run(terminal: &mut Terminal, app: &mut App) -> Result<(), AppError> {
    let mut events = EventStream::new();

    loop {
        let (width, height) = Terminal::size()?;
        terminal.draw(ui::draw(app, width, height))?;

        if app.should_quit() {
            break;
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        debug!("[event] key {:?}", key.code);
                        app.handle_key(key, Instant::now());
                    }
                    // Resizes are picked up by the size query on redraw.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            _ = sleep_until_optional(app.next_deadline()) => {
                app.apply_due_effects(Instant::now());
            }
        }
    }

    Ok(())
}

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}
