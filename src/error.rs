//! Error types for flotool

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum FlotoolError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    #[error("Not on any branch (detached HEAD)")]
    DetachedHead,

    #[error("Could not extract GitHub owner from remote URL: {0}")]
    IdentityNotDerivable(String),

    #[error("GitHub account not registered with the authorization bot")]
    NotRegistered,

    #[error("Authorization request rejected: {0}")]
    AuthorizationRejected(String),

    #[error("Authorization timed out; please try again")]
    AuthorizationTimedOut,

    #[error("Auth proxy error: {0}")]
    Integration(String),

    #[error("Push failed:\n{0}")]
    PushFailed(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type alias for flotool operations
pub type Result<T> = std::result::Result<T, FlotoolError>;
