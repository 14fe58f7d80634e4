/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Core(#[from] tilawah_core::TilawahError),

    #[error(transparent)]
    Client(#[from] tilawah_client::ClientError),

    #[error("Playback error: {0}")]
    Playback(#[from] tilawah_playback::PlaybackError),

    #[error("Calendar error: {0}")]
    Calendar(#[from] tilawah_calendar::CalendarError),

    #[error("Storage error: {0}")]
    Storage(#[from] tilawah_storage::StorageError),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
