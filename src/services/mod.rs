//! Resource services sitting between the HTTP handlers and storage.
//!
//! Services never fail on a missing record: absence comes back as `None` or
//! `false` and the handlers turn it into the matching envelope.

use std::sync::Arc;

use crate::auth;
use crate::db::{RecordStore, UserStore};
use crate::errors::AppError;
use crate::models::{Resource, User};

/// CRUD logic shared by every record kind.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    /// Persist a new record. Any identifier on the input is discarded so
    /// storage always assigns a fresh one.
    pub async fn create(&self, mut record: R) -> Result<R, AppError> {
        record.set_id(None);
        self.store.insert(record).await
    }

    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<R>, AppError> {
        self.store.find_by_id(id).await
    }

    /// Replace every non-identifier field of record `id`; the path id wins
    /// over whatever id the replacement carries.
    pub async fn update(&self, id: i64, replacement: R) -> Result<Option<R>, AppError> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        existing.replace_fields(replacement);
        existing.set_id(Some(id));
        // None here means the record was deleted after the lookup
        self.store.update(id, existing).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.store.delete_by_id(id).await
    }
}

/// User CRUD plus login.
#[derive(Clone)]
pub struct UserService {
    records: ResourceService<User>,
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new<S: UserStore + 'static>(store: Arc<S>) -> Self {
        Self {
            records: ResourceService::<User>::new(store.clone()),
            store,
        }
    }

    /// The plain CRUD half of the service.
    pub fn records(&self) -> &ResourceService<User> {
        &self.records
    }

    /// Find the user whose email and password both match exactly.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let candidates = self.store.find_by_email(email).await?;
        Ok(auth::select_matching_user(candidates, password))
    }
}
