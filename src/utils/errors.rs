use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinderCliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication rejected with status {status}: {detail}")]
    Auth { status: u16, detail: String },

    #[error("Volume not found: {0}")]
    NotFound(String),

    #[error("Unexpected response from {path} (status {status}): {detail}")]
    Protocol {
        path: String,
        status: u16,
        detail: String,
    },
}

pub type Result<T> = std::result::Result<T, CinderCliError>;
