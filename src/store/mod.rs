//! Persistence of newsletter rows.
//!
//! Handlers only talk to [`NewsletterStore`]; which backend sits behind it is
//! decided once at startup from [`crate::config::Backend`].

mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

use crate::domain::{NewNewsletter, Newsletter, NewsletterChanges, NewsletterId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait NewsletterStore: Send + Sync {
    /// Every row, ordered by id.
    async fn list(&self) -> Result<Vec<Newsletter>, StoreError>;

    async fn get(&self, id: NewsletterId) -> Result<Option<Newsletter>, StoreError>;

    /// Persists a new row. The store assigns `id` and `published_at`.
    async fn insert(&self, newsletter: NewNewsletter) -> Result<Newsletter, StoreError>;

    /// Writes the fields present in `changes` onto the row. Returns `None`
    /// when no row has the given id.
    async fn update(
        &self,
        id: NewsletterId,
        changes: NewsletterChanges,
    ) -> Result<Option<Newsletter>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: NewsletterId) -> Result<bool, StoreError>;
}
