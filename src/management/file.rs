use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    Res,
    types::{Summary, SummaryKind, User},
};

use super::{SummaryStore, UserStore};

const USERS_FILE: &str = "users.json";
const SUMMARIES_FILE: &str = "summaries.json";

/// Stores each collection as a pretty-printed JSON array under `dir`.
///
/// Every write rewrites the whole file. The mutex serializes read-modify-write
/// cycles within this process; several processes sharing one directory will
/// overwrite each other.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> Res<Vec<T>> {
        let content = match async_fs::read_to_string(self.path(file)).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn persist<T: Serialize>(&self, file: &str, items: &[T]) -> Res<()> {
        async_fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(items)?;
        async_fs::write(self.path(file), json).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn find_user(&self, username: &str) -> Res<Option<User>> {
        let _guard = self.lock.lock().await;
        let users: Vec<User> = self.load(USERS_FILE).await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    async fn save_user(&self, user: User) -> Res<User> {
        let _guard = self.lock.lock().await;
        let mut users: Vec<User> = self.load(USERS_FILE).await?;
        match users.iter_mut().find(|u| u.username == user.username) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        self.persist(USERS_FILE, &users).await?;
        Ok(user)
    }

    async fn users(&self) -> Res<Vec<User>> {
        let _guard = self.lock.lock().await;
        self.load(USERS_FILE).await
    }
}

#[async_trait]
impl SummaryStore for JsonFileStore {
    async fn find_summary(&self, name: SummaryKind) -> Res<Option<Summary>> {
        let _guard = self.lock.lock().await;
        let summaries: Vec<Summary> = self.load(SUMMARIES_FILE).await?;
        Ok(summaries.into_iter().find(|s| s.name == name))
    }

    async fn find_summary_by_id(&self, id: Uuid) -> Res<Option<Summary>> {
        let _guard = self.lock.lock().await;
        let summaries: Vec<Summary> = self.load(SUMMARIES_FILE).await?;
        Ok(summaries.into_iter().find(|s| s.id == id))
    }

    async fn save_summary(&self, summary: Summary) -> Res<Summary> {
        let _guard = self.lock.lock().await;
        let mut summaries: Vec<Summary> = self.load(SUMMARIES_FILE).await?;
        match summaries.iter_mut().find(|s| s.name == summary.name) {
            Some(existing) => *existing = summary.clone(),
            None => summaries.push(summary.clone()),
        }
        self.persist(SUMMARIES_FILE, &summaries).await?;
        Ok(summary)
    }

    async fn summaries(&self) -> Res<Vec<Summary>> {
        let _guard = self.lock.lock().await;
        self.load(SUMMARIES_FILE).await
    }
}
