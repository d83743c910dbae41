use serde::{Deserialize, Serialize};

use std::str::FromStr;

pub const DEFAULT_PAGE_LIMIT: usize = 100;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderDir {
    #[default]
    Asc,
    Desc,
}

impl OrderDir {
    pub fn flipped(self) -> Self {
        match self {
            OrderDir::Asc => OrderDir::Desc,
            OrderDir::Desc => OrderDir::Asc,
        }
    }
}

/// Window + ordering directive for one paginated fetch.
///
/// Transformations consume the directive and return its replacement; issuing
/// the re-fetch with the new value is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams<K> {
    pub limit: usize,
    pub offset: usize,
    pub order_by: Option<K>,
    pub order_dir: OrderDir,
}

impl<K> Default for PaginationParams<K> {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
            order_by: None,
            order_dir: OrderDir::default(),
        }
    }
}

impl<K> PaginationParams<K> {
    pub fn new(limit: usize, offset: usize) -> Self {
        debug_assert!(limit > 0, "page limit must be positive");
        Self {
            limit,
            offset,
            order_by: None,
            order_dir: OrderDir::default(),
        }
    }

    pub fn order_by(mut self, column: K, dir: OrderDir) -> Self {
        self.order_by = Some(column);
        self.order_dir = dir;
        self
    }

    /// Falls back to the server's default order. Limit and offset are
    /// retained.
    pub fn clear_order_by(mut self) -> Self {
        self.order_by = None;
        self.order_dir = OrderDir::default();
        self
    }
}

impl<K: PartialEq> PaginationParams<K> {
    /// Header-click semantics: repeating the active column flips the
    /// direction, a new column starts ascending.
    pub fn toggle_order_by(mut self, column: K) -> Self {
        match self.order_by.take() {
            Some(current) if current == column => {
                self.order_by = Some(column);
                self.order_dir = self.order_dir.flipped();
            }
            _ => {
                self.order_by = Some(column);
                self.order_dir = OrderDir::Asc;
            }
        }
        self
    }
}

impl PaginationParams<String> {
    /// Maps a raw UI column key onto the domain's closed column set. The
    /// empty key means "no sort"; an unrecognized key is an error.
    pub fn try_map_order_by<K: FromStr>(self) -> Result<PaginationParams<K>, K::Err> {
        let order_by = match self.order_by.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse()?),
        };
        Ok(PaginationParams {
            limit: self.limit,
            offset: self.offset,
            order_by,
            order_dir: self.order_dir,
        })
    }
}

/// Window for one incremental-search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: String,
    pub limit: usize,
    pub offset: usize,
}
