use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeywordError>;

#[derive(Error, Debug)]
pub enum KeywordError {
    /// JSON was not a valid nlcst tree.
    /// Covers unknown node types and a non-string `partOfSpeech`.
    #[error("Malformed syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read syntax tree: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected a parent node at the document root, found {0}")]
    UnexpectedRoot(&'static str),
}
