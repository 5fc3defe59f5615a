//! In-memory stores standing in for SQLite in unit tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{RecordStore, UserStore};
use crate::errors::AppError;
use crate::models::{Resource, User};

struct Inner<R> {
    next_id: i64,
    records: BTreeMap<i64, R>,
}

/// Map-backed store for a single record kind. Ids start at 1 and are never reused.
pub struct MemoryStore<R> {
    inner: Mutex<Inner<R>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> RecordStore<R> for MemoryStore<R> {
    async fn insert(&self, mut record: R) -> Result<R, AppError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        record.set_id(Some(id));
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: R) -> Result<Option<R>, AppError> {
        let mut inner = self.inner.lock().await;
        let Some(slot) = inner.records.get_mut(&id) else {
            return Ok(None);
        };
        record.set_id(Some(id));
        *slot = record.clone();
        Ok(Some(record))
    }

    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        Ok(self.inner.lock().await.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError> {
        Ok(self.inner.lock().await.records.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.lock().await.records.remove(&id).is_some())
    }
}

#[async_trait]
impl UserStore for MemoryStore<User> {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .records
            .values()
            .filter(|user| user.email.as_deref() == Some(email))
            .cloned()
            .collect())
    }
}

/// Store whose every call fails, for exercising the error envelope.
pub struct FailingStore;

#[async_trait]
impl<R: Resource> RecordStore<R> for FailingStore {
    async fn insert(&self, _record: R) -> Result<R, AppError> {
        Err(AppError::Database("Database error: disk I/O error".to_string()))
    }

    async fn update(&self, _id: i64, _record: R) -> Result<Option<R>, AppError> {
        Err(AppError::Database("Database error: disk I/O error".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<R>, AppError> {
        Err(AppError::Database("Database error: disk I/O error".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<R>, AppError> {
        Err(AppError::Database("Database error: disk I/O error".to_string()))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, AppError> {
        Err(AppError::Database("Database error: disk I/O error".to_string()))
    }
}
