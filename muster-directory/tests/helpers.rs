#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::oneshot;

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use muster_directory::client::{error::ClientError, DirectoryClient};
use muster_directory::group::{Group, GroupFilter, GroupSort, NewGroup};
use muster_directory::operation::{Operation, OperationFilter, OperationSort};
use muster_directory::user::{User, UserFilter, UserSort};
use muster_directory::{
    Directory, DirectoryConfig, GroupId, OperationId, OrderDir, Paginated, PaginationParams,
    SearchParams, SearchResult, UserId,
};

/// In-memory directory backend. Lookups can be gated on oneshot channels to
/// force specific completion orders.
#[derive(Default)]
pub struct StubDirectory {
    users: Mutex<HashMap<UserId, User>>,
    operations: Mutex<HashMap<OperationId, Operation>>,
    groups: Mutex<HashMap<GroupId, Group>>,
    user_pages: Mutex<VecDeque<Paginated<User, UserSort>>>,
    group_pages: Mutex<VecDeque<Paginated<Group, GroupSort>>>,
    user_gates: Mutex<HashMap<UserId, oneshot::Receiver<()>>>,
    operation_gates: Mutex<HashMap<OperationId, oneshot::Receiver<()>>>,
    user_search_gate: Mutex<Option<oneshot::Receiver<()>>>,
    user_search_hits: Mutex<Vec<User>>,
    operation_search_hits: Mutex<Vec<Operation>>,
    pub user_find_calls: AtomicUsize,
    pub user_search_calls: AtomicUsize,
    pub operation_search_calls: AtomicUsize,
    pub last_user_list: Mutex<Option<(PaginationParams<UserSort>, UserFilter)>>,
    pub last_group_list: Mutex<Option<(PaginationParams<GroupSort>, GroupFilter)>>,
    pub last_user_search: Mutex<Option<(SearchParams, UserFilter)>>,
    pub last_operation_search: Mutex<Option<(SearchParams, OperationFilter)>>,
    pub created_groups: Mutex<Vec<Group>>,
    pub updated_groups: Mutex<Vec<Group>>,
    pub deleted_groups: Mutex<Vec<GroupId>>,
}

impl StubDirectory {
    pub fn with_sample_data() -> Self {
        let stub = Self::default();
        for user in sample_users() {
            stub.insert_user(user);
        }
        for operation in sample_operations() {
            stub.insert_operation(operation);
        }
        stub.insert_group(sample_group());
        stub
    }

    pub fn insert_user(&self, user: User) {
        self.users
            .lock()
            .unwrap()
            .insert(user.id.clone(), user);
    }

    pub fn insert_operation(&self, operation: Operation) {
        self.operations
            .lock()
            .unwrap()
            .insert(operation.id.clone(), operation);
    }

    pub fn insert_group(&self, group: Group) {
        self.groups
            .lock()
            .unwrap()
            .insert(group.id.clone(), group);
    }

    /// Blocks the next lookup of `id` until the returned sender fires or is
    /// dropped.
    pub fn gate_user(&self, id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.user_gates
            .lock()
            .unwrap()
            .insert(UserId::from(id), rx);
        tx
    }

    pub fn gate_operation(&self, id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.operation_gates
            .lock()
            .unwrap()
            .insert(OperationId::from(id), rx);
        tx
    }

    pub fn gate_next_user_search(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.user_search_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn queue_user_page(&self, page: Paginated<User, UserSort>) {
        self.user_pages.lock().unwrap().push_back(page);
    }

    pub fn queue_group_page(&self, page: Paginated<Group, GroupSort>) {
        self.group_pages.lock().unwrap().push_back(page);
    }

    pub fn set_user_search_hits(&self, hits: Vec<User>) {
        *self.user_search_hits.lock().unwrap() = hits;
    }

    pub fn set_operation_search_hits(&self, hits: Vec<Operation>) {
        *self.operation_search_hits.lock().unwrap() = hits;
    }
}

#[async_trait]
impl DirectoryClient for StubDirectory {
    async fn list_users(
        &self,
        params: PaginationParams<UserSort>,
        filter: UserFilter,
    ) -> Result<Paginated<User, UserSort>, ClientError> {
        *self.last_user_list.lock().unwrap() = Some((params, filter));
        self.user_pages
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::Remote("no user page queued".to_string()))
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<User, ClientError> {
        self.user_find_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.user_gates.lock().unwrap().remove(&id);
        if let Some(gate) = gate {
            gate.await.ok();
        }
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("user", &id))
    }

    async fn search_users(
        &self,
        params: SearchParams,
        filter: UserFilter,
    ) -> Result<SearchResult<User>, ClientError> {
        self.user_search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user_search.lock().unwrap() = Some((params, filter));
        let gate = self.user_search_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.await.ok();
        }
        let hits = self.user_search_hits.lock().unwrap().clone();
        Ok(SearchResult { hits })
    }

    async fn list_operations(
        &self,
        _params: PaginationParams<OperationSort>,
        _filter: OperationFilter,
    ) -> Result<Paginated<Operation, OperationSort>, ClientError> {
        Err(ClientError::Remote(
            "list_operations is not stubbed".to_string(),
        ))
    }

    async fn find_operation_by_id(&self, id: OperationId) -> Result<Operation, ClientError> {
        let gate = self.operation_gates.lock().unwrap().remove(&id);
        if let Some(gate) = gate {
            gate.await.ok();
        }
        self.operations
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("operation", &id))
    }

    async fn search_operations(
        &self,
        params: SearchParams,
        filter: OperationFilter,
    ) -> Result<SearchResult<Operation>, ClientError> {
        self.operation_search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_operation_search.lock().unwrap() = Some((params, filter));
        let hits = self.operation_search_hits.lock().unwrap().clone();
        Ok(SearchResult { hits })
    }

    async fn list_groups(
        &self,
        params: PaginationParams<GroupSort>,
        filter: GroupFilter,
    ) -> Result<Paginated<Group, GroupSort>, ClientError> {
        *self.last_group_list.lock().unwrap() = Some((params, filter));
        self.group_pages
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::Remote("no group page queued".to_string()))
    }

    async fn find_group_by_id(&self, id: GroupId) -> Result<Group, ClientError> {
        self.groups
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("group", &id))
    }

    async fn create_group(&self, new_group: NewGroup) -> Result<Group, ClientError> {
        let id = {
            let created = self.created_groups.lock().unwrap();
            GroupId::from(format!("group-{}", created.len() + 1))
        };
        let group = Group {
            id,
            title: new_group.title,
            description: new_group.description,
            operation: new_group.operation,
            members: new_group.members,
        };
        self.created_groups.lock().unwrap().push(group.clone());
        self.insert_group(group.clone());
        Ok(group)
    }

    async fn update_group(&self, group: Group) -> Result<Group, ClientError> {
        if !self.groups.lock().unwrap().contains_key(&group.id) {
            return Err(ClientError::not_found("group", &group.id));
        }
        self.updated_groups.lock().unwrap().push(group.clone());
        self.insert_group(group.clone());
        Ok(group)
    }

    async fn delete_group(&self, id: GroupId) -> Result<(), ClientError> {
        if self.groups.lock().unwrap().remove(&id).is_none() {
            return Err(ClientError::not_found("group", &id));
        }
        self.deleted_groups.lock().unwrap().push(id);
        Ok(())
    }
}

pub fn init_directory(stub: Arc<StubDirectory>) -> Directory {
    let config = DirectoryConfig::builder()
        .client(stub)
        .build()
        .expect("directory config");
    Directory::init(config)
}

pub fn user(id: &str, username: &str, first_name: &str, last_name: &str) -> User {
    User {
        id: UserId::from(id),
        username: username.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        is_active: true,
        is_admin: false,
    }
}

pub fn operation(id: &str, title: &str, description: &str) -> Operation {
    Operation {
        id: OperationId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        start: Utc.with_ymd_and_hms(2023, 4, 18, 9, 0, 0).unwrap(),
        is_archived: false,
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user("fly", "b marry", "b well", "b forgive"),
        user("glass", "c everyday", "c robbery", "c beak"),
        user("combine", "a greet", "a swear", "areal"),
    ]
}

pub fn sample_operations() -> Vec<Operation> {
    vec![
        operation("skirt", "roof", "temple"),
        operation("drop", "garden", "excite"),
    ]
}

pub fn sample_group() -> Group {
    Group {
        id: GroupId::from("defend"),
        title: "open".to_string(),
        description: "match".to_string(),
        operation: Some(OperationId::from("drop")),
        members: vec![UserId::from("fly"), UserId::from("glass")],
    }
}

pub fn member_ids(ids: &[&str]) -> Vec<UserId> {
    ids.iter().map(|id| UserId::from(*id)).collect()
}

pub fn page<T, K>(entries: Vec<T>, limit: usize, offset: usize, total: usize) -> Paginated<T, K> {
    Paginated {
        retrieved: entries.len(),
        entries,
        limit,
        offset,
        total,
        order_by: None,
        order_dir: OrderDir::Asc,
    }
}
