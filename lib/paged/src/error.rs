use thiserror::Error;

/// A UI surfaced a sort-column key outside the domain's closed column set.
/// This is a programming error in the surface, not a user input problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported order-by: {0}")]
pub struct UnknownOrderBy(pub String);

impl From<&str> for UnknownOrderBy {
    fn from(column: &str) -> Self {
        Self(column.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageMetaError {
    #[error("PageMetaError - RetrievedMismatch: window reports {retrieved} but page holds {actual} entries")]
    RetrievedMismatch { retrieved: usize, actual: usize },
    #[error("PageMetaError - OverLimit: retrieved {retrieved} exceeds requested limit {limit}")]
    OverLimit { retrieved: usize, limit: usize },
}
