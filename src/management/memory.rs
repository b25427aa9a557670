use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::{
    Res,
    types::{Summary, SummaryKind, User},
};

use super::{SummaryStore, UserStore};

/// Keeps users and summaries in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<String, User>,
    summaries: DashMap<SummaryKind, Summary>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, username: &str) -> Res<Option<User>> {
        Ok(self.users.get(username).map(|u| u.value().clone()))
    }

    async fn save_user(&self, user: User) -> Res<User> {
        self.users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn users(&self) -> Res<Vec<User>> {
        Ok(self.users.iter().map(|u| u.value().clone()).collect())
    }
}

#[async_trait]
impl SummaryStore for MemoryStore {
    async fn find_summary(&self, name: SummaryKind) -> Res<Option<Summary>> {
        Ok(self.summaries.get(&name).map(|s| s.value().clone()))
    }

    async fn find_summary_by_id(&self, id: Uuid) -> Res<Option<Summary>> {
        Ok(self
            .summaries
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.value().clone()))
    }

    async fn save_summary(&self, summary: Summary) -> Res<Summary> {
        self.summaries.insert(summary.name, summary.clone());
        Ok(summary)
    }

    async fn summaries(&self) -> Res<Vec<Summary>> {
        Ok(self.summaries.iter().map(|s| s.value().clone()).collect())
    }
}
