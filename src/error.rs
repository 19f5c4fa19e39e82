//! Error types for jenkins-auth

use thiserror::Error;

/// Errors produced while resolving credentials or talking to Jenkins
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed settings (e.g. no server URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Config file could not be read or written
    #[error("config persistence error: {0}")]
    Persistence(String),

    /// No valid credentials could be obtained, or the server rejected them
    #[error("authentication error: {0}")]
    Auth(String),

    /// The user aborted an interactive prompt
    #[error("input cancelled: {0}")]
    InputCancelled(String),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Jenkins answered with an unexpected status
    #[error("Jenkins API error: {0}")]
    JenkinsApi(String),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
