pub mod config;

use std::sync::Arc;

pub use config::*;

use crate::group::Groups;
use crate::operation::Operations;
use crate::user::Users;

/// Entry point to the directory services. Clones share the underlying
/// client handle.
#[derive(Clone)]
pub struct Directory {
    users: Users,
    operations: Operations,
    groups: Groups,
}

impl Directory {
    pub fn init(config: DirectoryConfig) -> Self {
        let DirectoryConfig {
            client,
            search_limit,
        } = config;
        let users = Users::new(Arc::clone(&client), search_limit);
        let operations = Operations::new(Arc::clone(&client), search_limit);
        let groups = Groups::new(client, users.clone(), operations.clone());
        Self {
            users,
            operations,
            groups,
        }
    }

    pub fn users(&self) -> &Users {
        &self.users
    }

    pub fn operations(&self) -> &Operations {
        &self.operations
    }

    pub fn groups(&self) -> &Groups {
        &self.groups
    }
}
