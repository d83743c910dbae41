mod entity;
pub mod error;

use std::sync::Arc;

use tracing::instrument;

use paged::{Paginated, PaginationParams, SearchParams};

use crate::client::DirectoryClient;
use crate::primitives::OperationId;

pub use entity::*;
use error::*;

/// Service for querying `Operation` entities via the directory API.
#[derive(Clone)]
pub struct Operations {
    client: Arc<dyn DirectoryClient>,
    search_limit: usize,
}

impl Operations {
    pub(crate) fn new(client: Arc<dyn DirectoryClient>, search_limit: usize) -> Self {
        Self {
            client,
            search_limit,
        }
    }

    #[instrument(name = "muster_directory.operations.list", skip(self), err)]
    pub async fn list(
        &self,
        params: PaginationParams<OperationSort>,
        filter: OperationFilter,
    ) -> Result<Paginated<Operation, OperationSort>, OperationError> {
        let page = self.client.list_operations(params, filter).await?;
        page.check_meta()?;
        Ok(page)
    }

    #[instrument(name = "muster_directory.operations.find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: OperationId) -> Result<Operation, OperationError> {
        Ok(self.client.find_operation_by_id(id).await?)
    }

    /// Incremental search over operations. An empty query resolves to no
    /// hits without a remote call.
    #[instrument(name = "muster_directory.operations.search", skip(self), err)]
    pub async fn search(
        &self,
        query: &str,
        filter: OperationFilter,
    ) -> Result<Vec<Operation>, OperationError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let result = self
            .client
            .search_operations(
                SearchParams {
                    query: query.to_string(),
                    limit: self.search_limit,
                    offset: 0,
                },
                filter,
            )
            .await?;
        Ok(result.hits)
    }
}
