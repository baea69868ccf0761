use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// A view identifier or catalog position with no display label.
    #[error("unknown view kind: {0}")]
    UnknownViewKind(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
