//! Contract for the remote directory API. The transport behind it (and its
//! retry/timeout policy) belongs to the implementation, not to this crate.
pub mod error;

use async_trait::async_trait;

use paged::{Paginated, PaginationParams, SearchParams, SearchResult};

use crate::group::{Group, GroupFilter, GroupSort, NewGroup};
use crate::operation::{Operation, OperationFilter, OperationSort};
use crate::primitives::{GroupId, OperationId, UserId};
use crate::user::{User, UserFilter, UserSort};

use error::ClientError;

#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn list_users(
        &self,
        params: PaginationParams<UserSort>,
        filter: UserFilter,
    ) -> Result<Paginated<User, UserSort>, ClientError>;

    async fn find_user_by_id(&self, id: UserId) -> Result<User, ClientError>;

    async fn search_users(
        &self,
        params: SearchParams,
        filter: UserFilter,
    ) -> Result<SearchResult<User>, ClientError>;

    async fn list_operations(
        &self,
        params: PaginationParams<OperationSort>,
        filter: OperationFilter,
    ) -> Result<Paginated<Operation, OperationSort>, ClientError>;

    async fn find_operation_by_id(&self, id: OperationId) -> Result<Operation, ClientError>;

    async fn search_operations(
        &self,
        params: SearchParams,
        filter: OperationFilter,
    ) -> Result<SearchResult<Operation>, ClientError>;

    async fn list_groups(
        &self,
        params: PaginationParams<GroupSort>,
        filter: GroupFilter,
    ) -> Result<Paginated<Group, GroupSort>, ClientError>;

    async fn find_group_by_id(&self, id: GroupId) -> Result<Group, ClientError>;

    async fn create_group(&self, new_group: NewGroup) -> Result<Group, ClientError>;

    async fn update_group(&self, group: Group) -> Result<Group, ClientError>;

    async fn delete_group(&self, id: GroupId) -> Result<(), ClientError>;
}
