//! Interactive registration form with live validation, a password strength
//! checklist, a sanitization preview, and timed banners.

mod app;
mod banner;
mod editor;
mod error;
mod event_loop;
mod screen;
mod terminal;
mod theme;
mod ui;

use std::fs::File;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;
use crate::terminal::Terminal;

#[tokio::main]
async fn main() {
    // Log to a file; the terminal itself is in raw mode.
    if let Ok(log_file) = File::create("regform.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    info!("starting");
    let mut terminal = Terminal::new()?;
    let mut app = App::new();
    let result = event_loop::run(&mut terminal, &mut app).await;
    info!("exiting");
    result
}
