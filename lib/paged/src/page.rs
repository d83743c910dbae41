use serde::{Deserialize, Serialize};

use super::error::PageMetaError;
use super::query::OrderDir;

/// One window of a remote collection together with the pagination metadata
/// the server echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T, K> {
    pub entries: Vec<T>,
    pub retrieved: usize,
    pub limit: usize,
    pub offset: usize,
    pub total: usize,
    pub order_by: Option<K>,
    pub order_dir: OrderDir,
}

impl<T, K> Paginated<T, K> {
    /// Rebuilds the page around transformed entries. The metadata describes
    /// the window, not the element type, so it carries over untouched.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U, K> {
        Paginated {
            entries: self.entries.into_iter().map(f).collect(),
            retrieved: self.retrieved,
            limit: self.limit,
            offset: self.offset,
            total: self.total,
            order_by: self.order_by,
            order_dir: self.order_dir,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.offset + self.retrieved < self.total
    }

    /// Validates the window invariants the server is supposed to uphold.
    /// `total` is the server's estimate of a moving target and is not
    /// checked against anything.
    pub fn check_meta(&self) -> Result<(), PageMetaError> {
        if self.retrieved != self.entries.len() {
            return Err(PageMetaError::RetrievedMismatch {
                retrieved: self.retrieved,
                actual: self.entries.len(),
            });
        }
        if self.retrieved > self.limit {
            return Err(PageMetaError::OverLimit {
                retrieved: self.retrieved,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

/// Hit list returned by an incremental-search endpoint. Search responses
/// carry no window metadata, only the matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T> {
    pub hits: Vec<T>,
}
