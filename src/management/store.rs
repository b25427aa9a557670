use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    Res,
    config::{Config, StoreBackend},
    types::{Summary, SummaryKind, User},
};

use super::{JsonFileStore, MemoryStore};

/// The `User` collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, username: &str) -> Res<Option<User>>;

    /// Inserts or replaces the user with the same username.
    async fn save_user(&self, user: User) -> Res<User>;

    async fn users(&self) -> Res<Vec<User>>;
}

/// The `Summary` collection.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn find_summary(&self, name: SummaryKind) -> Res<Option<Summary>>;

    async fn find_summary_by_id(&self, id: Uuid) -> Res<Option<Summary>>;

    /// Inserts or replaces the summary with the same name.
    async fn save_summary(&self, summary: Summary) -> Res<Summary>;

    async fn summaries(&self) -> Res<Vec<Summary>>;
}

/// Handles to both collections, passed to every component that needs them.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub summaries: Arc<dyn SummaryStore>,
}

impl Stores {
    pub fn new(users: Arc<dyn UserStore>, summaries: Arc<dyn SummaryStore>) -> Self {
        Self { users, summaries }
    }

    /// Both collections backed by one in-memory store.
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::default());
        Self::new(store.clone(), store)
    }

    /// Opens the backend selected in `config`.
    pub fn open(config: &Config) -> Self {
        match config.store {
            StoreBackend::Memory => Self::memory(),
            StoreBackend::File => {
                let store = Arc::new(JsonFileStore::new(&config.data_dir));
                Self::new(store.clone(), store)
            }
        }
    }
}
