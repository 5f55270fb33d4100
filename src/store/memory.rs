use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{NewsletterStore, StoreError};
use crate::domain::{NewNewsletter, Newsletter, NewsletterChanges, NewsletterId};

/// Keeps rows in process memory. Ids start at 1 and are never handed out
/// twice, even after the row holding them is deleted.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Table>,
}

#[derive(Default)]
struct Table {
    last_id: NewsletterId,
    rows: BTreeMap<NewsletterId, Newsletter>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsletterStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Newsletter>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: NewsletterId) -> Result<Option<Newsletter>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, newsletter: NewNewsletter) -> Result<Newsletter, StoreError> {
        let mut table = self.inner.write().await;
        table.last_id += 1;

        let row = Newsletter {
            id: table.last_id,
            title: newsletter.title.into(),
            body: newsletter.body.into(),
            published_at: Utc::now(),
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: NewsletterId,
        changes: NewsletterChanges,
    ) -> Result<Option<Newsletter>, StoreError> {
        let mut table = self.inner.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            row.title = title.into();
        }
        if let Some(body) = changes.body {
            row.body = body.into();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: NewsletterId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
