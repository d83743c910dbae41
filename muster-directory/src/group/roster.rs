use tracing::instrument;

use paged::{hydrate_ordered, resorted, Latest, Loader, OrderDir};

use crate::primitives::UserId;
use crate::user::{User, UserSort, Users};

use super::error::GroupError;

/// Member list of one group edit session.
///
/// Owns the visible list and any resolution in flight for exactly one view.
/// A new session mints a new roster; supersession is scoped to it.
#[derive(Clone)]
pub struct MemberRoster {
    users: Users,
    members: Latest<Vec<User>>,
    loading: Loader,
}

impl MemberRoster {
    pub(super) fn new(users: Users) -> Self {
        Self {
            users,
            members: Latest::default(),
            loading: Loader::new(),
        }
    }

    /// Snapshot of the currently visible members.
    pub fn members(&self) -> Vec<User> {
        self.members.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Replaces the member list with the users behind `ids`.
    ///
    /// Supersedes any resolution still in flight and empties the visible
    /// list until the new one lands. Returns whether this call's result was
    /// applied; a call superseded mid-flight reports `false` and leaves the
    /// newer list alone.
    #[instrument(name = "muster_directory.groups.roster.set_members", skip(self), err)]
    pub async fn set_members(&self, ids: Vec<UserId>) -> Result<bool, GroupError> {
        let token = self.members.begin();
        self.members.modify(Vec::clear);
        let users = self
            .loading
            .load_from(hydrate_ordered(ids, |id| self.users.find_by_id(id)))
            .await?;
        Ok(self.members.publish(token, users))
    }

    /// Applies a header-click sort to the loaded members in place. The raw
    /// column key comes straight from the UI: an empty key leaves the order
    /// untouched, an unrecognized one is an error. No remote call.
    pub fn sort_change(&self, column: &str, dir: OrderDir) -> Result<(), GroupError> {
        if column.is_empty() {
            return Ok(());
        }
        let sort: UserSort = column.parse()?;
        self.members
            .modify(|members| *members = resorted(members, dir, |a, b| sort.compare(a, b)));
        Ok(())
    }
}
