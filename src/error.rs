use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Repository error: {0}")]
    Repo(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        ChangelogError::Pattern(msg.into())
    }

    /// Create a range error with context
    pub fn range(msg: impl Into<String>) -> Self {
        ChangelogError::Range(msg.into())
    }

    /// Create a repository error with context
    pub fn repo(msg: impl Into<String>) -> Self {
        ChangelogError::Repo(msg.into())
    }
}
