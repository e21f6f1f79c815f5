use thiserror::Error;

/// Errors surfaced by the terminal runtime.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
