use std::path::PathBuf;

/// Errors related to configuration loading and provider credentials.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("{var} is not set; export it or add it to a .env file")]
    MissingCredentials { var: &'static str },
}

/// Errors raised while assembling or running a crew of role tasks.
#[derive(Debug, thiserror::Error)]
pub enum CrewError {
    #[error("no valid agents were selected for this task")]
    NoAgentsSelected,

    #[error("LLM error: {0}")]
    Llm(String),
}
