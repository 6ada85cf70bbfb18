use thiserror::Error;

/// Errors a subcommand can surface; all of them map to exit code 2.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
