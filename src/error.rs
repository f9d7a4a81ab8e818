use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Input prompt failed: {0}")]
    Prompt(String),

    #[error("Submission failed: {0}. Please email {1} directly")]
    Submission(String, &'static str),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] portfolio_common::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
