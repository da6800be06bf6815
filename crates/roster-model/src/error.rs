use thiserror::Error;

/// Error kinds surfaced by the dataset store and its collaborators.
///
/// Every variant carries a human-readable message; callers surface the
/// message verbatim and abort the operation in progress.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("read error: {0}")]
    Read(String),
    #[error("write error: {0}")]
    Write(String),
    #[error("{0}")]
    Validation(String),
    #[error("row index {0} is out of range")]
    Index(usize),
}

pub type Result<T> = std::result::Result<T, RosterError>;
