//! Storage capabilities consumed by the resource services.
//!
//! Services only see these traits, so any backend (SQLite here, an in-memory
//! fake in tests) can sit behind them.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Resource, User};

/// Persistence primitives for one record kind, keyed by integer id.
#[async_trait]
pub trait RecordStore<R: Resource>: Send + Sync {
    /// Store a new record under a freshly assigned id, ignoring any id it carries.
    async fn insert(&self, record: R) -> Result<R, AppError>;

    /// Overwrite the existing record `id`. Never creates a row: `None` when `id`
    /// is not stored.
    async fn update(&self, id: i64, record: R) -> Result<Option<R>, AppError>;

    /// All records, ordered by id.
    async fn find_all(&self) -> Result<Vec<R>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, AppError>;

    /// Returns `true` if a record was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

/// User storage with the extra lookup the login flow needs.
#[async_trait]
pub trait UserStore: RecordStore<User> {
    /// Users registered under exactly this email, ordered by id.
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>, AppError>;
}
