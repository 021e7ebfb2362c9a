use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spritemap operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpritemapError {
    #[error("IO error: {0}")]
    #[diagnostic(code(spritemap::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", path.display())]
    #[diagnostic(code(spritemap::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Path {} not found", path.display())]
    #[diagnostic(code(spritemap::missing_root))]
    MissingRoot {
        path: std::path::PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(spritemap::json))]
    Json(#[from] serde_json::Error),

    #[error("Check failed: {message}")]
    #[diagnostic(code(spritemap::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SpritemapError>;
