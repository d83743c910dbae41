mod entity;
pub mod error;

use std::sync::Arc;

use tracing::instrument;

use paged::{Paginated, PaginationParams, SearchParams};

use crate::client::DirectoryClient;
use crate::primitives::UserId;

pub use entity::*;
use error::*;

/// Service for querying `User` entities via the directory API.
#[derive(Clone)]
pub struct Users {
    client: Arc<dyn DirectoryClient>,
    search_limit: usize,
}

impl Users {
    pub(crate) fn new(client: Arc<dyn DirectoryClient>, search_limit: usize) -> Self {
        Self {
            client,
            search_limit,
        }
    }

    #[instrument(name = "muster_directory.users.list", skip(self), err)]
    pub async fn list(
        &self,
        params: PaginationParams<UserSort>,
        filter: UserFilter,
    ) -> Result<Paginated<User, UserSort>, UserError> {
        let page = self.client.list_users(params, filter).await?;
        page.check_meta()?;
        Ok(page)
    }

    #[instrument(name = "muster_directory.users.find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: UserId) -> Result<User, UserError> {
        Ok(self.client.find_user_by_id(id).await?)
    }

    /// Incremental search over users. An empty query resolves to no hits
    /// without a remote call.
    #[instrument(name = "muster_directory.users.search", skip(self), err)]
    pub async fn search(&self, query: &str, filter: UserFilter) -> Result<Vec<User>, UserError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let result = self
            .client
            .search_users(
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
