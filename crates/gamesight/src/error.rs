use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid signature catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when a catalog file is missing, as opposed to unreadable or malformed
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
