//! [Group]s tie [User](crate::user::User) members to an optional
//! [Operation](crate::operation::Operation).
mod entity;
pub mod error;
mod roster;

use std::sync::Arc;

use tracing::instrument;

use paged::{hydrate_optional, hydrate_ordered, Paginated, PaginationParams};

use crate::client::DirectoryClient;
use crate::operation::Operations;
use crate::primitives::GroupId;
use crate::user::{User, Users};

pub use entity::*;
use error::*;
pub use roster::*;

/// Service for working with `Group` entities and their references.
#[derive(Clone)]
pub struct Groups {
    client: Arc<dyn DirectoryClient>,
    users: Users,
    operations: Operations,
}

impl Groups {
    pub(crate) fn new(
        client: Arc<dyn DirectoryClient>,
        users: Users,
        operations: Operations,
    ) -> Self {
        Self {
            client,
            users,
            operations,
        }
    }

    /// Fetches one page of groups and resolves each row's operation
    /// reference before returning. The window metadata passes through
    /// unchanged since no extra groups were retrieved.
    #[instrument(name = "muster_directory.groups.list_rows", skip(self), err)]
    pub async fn list_rows(
        &self,
        params: PaginationParams<GroupSort>,
        filter: GroupFilter,
    ) -> Result<Paginated<GroupRow, GroupSort>, GroupError> {
        let page = self.client.list_groups(params, filter).await?;
        page.check_meta()?;
        let operations = hydrate_optional(
            page.entries.iter().map(|group| group.operation.clone()),
            |id| self.operations.find_by_id(id),
        )
        .await?;
        let mut operations = operations.into_iter();
        Ok(page.map(|group| GroupRow {
            group,
            operation: operations.next().flatten(),
        }))
    }

    #[instrument(name = "muster_directory.groups.find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: GroupId) -> Result<Group, GroupError> {
        Ok(self.client.find_group_by_id(id).await?)
    }

    /// Looks up a group and resolves its member references, preserving
    /// member-id order.
    #[instrument(name = "muster_directory.groups.find_with_members", skip(self), err)]
    pub async fn find_with_members(&self, id: GroupId) -> Result<(Group, Vec<User>), GroupError> {
        let group = self.client.find_group_by_id(id).await?;
        let members =
            hydrate_ordered(group.members.iter().cloned(), |id| self.users.find_by_id(id)).await?;
        Ok((group, members))
    }

    #[instrument(name = "muster_directory.groups.create", skip(self))]
    pub async fn create(&self, new_group: NewGroup) -> Result<Group, GroupError> {
        Ok(self.client.create_group(new_group).await?)
    }

    #[instrument(name = "muster_directory.groups.update", skip(self, group), fields(group_id = %group.id))]
    pub async fn update(&self, group: Group) -> Result<Group, GroupError> {
        Ok(self.client.update_group(group).await?)
    }

    #[instrument(name = "muster_directory.groups.delete", skip(self))]
    pub async fn delete(&self, id: GroupId) -> Result<(), GroupError> {
        Ok(self.client.delete_group(id).await?)
    }

    /// Mints the member-list state for one group edit session.
    pub fn roster(&self) -> MemberRoster {
        MemberRoster::new(self.users.clone())
    }
}
