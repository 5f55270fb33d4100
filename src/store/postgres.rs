use async_trait::async_trait;
use sqlx::PgPool;

use super::{NewsletterStore, StoreError};
use crate::domain::{NewNewsletter, Newsletter, NewsletterChanges, NewsletterId};

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl NewsletterStore for PostgresStore {
    #[tracing::instrument(name = "Fetch all newsletters", skip(self))]
    async fn list(&self) -> Result<Vec<Newsletter>, StoreError> {
        let rows = sqlx::query_as::<_, Newsletter>(
            r#"SELECT id, title, body, published_at FROM newsletter ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    #[tracing::instrument(name = "Fetch a newsletter", skip(self))]
    async fn get(&self, id: NewsletterId) -> Result<Option<Newsletter>, StoreError> {
        let row = sqlx::query_as::<_, Newsletter>(
            r#"SELECT id, title, body, published_at FROM newsletter WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    #[tracing::instrument(
        name = "Saving new newsletter in the database",
        skip(self, newsletter),
        fields(title = ?newsletter.title)
    )]
    async fn insert(&self, newsletter: NewNewsletter) -> Result<Newsletter, StoreError> {
        let row = sqlx::query_as::<_, Newsletter>(
            r#"
            INSERT INTO newsletter (title, body)
            VALUES ($1, $2)
            RETURNING id, title, body, published_at
            "#,
        )
        .bind(String::from(newsletter.title))
        .bind(String::from(newsletter.body))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    #[tracing::instrument(name = "Update a newsletter", skip(self, changes))]
    async fn update(
        &self,
        id: NewsletterId,
        changes: NewsletterChanges,
    ) -> Result<Option<Newsletter>, StoreError> {
        let row = sqlx::query_as::<_, Newsletter>(
            r#"
            UPDATE newsletter
            SET title = COALESCE($2, title), body = COALESCE($3, body)
            WHERE id = $1
            RETURNING id, title, body, published_at
            "#,
        )
        .bind(id)
        .bind(changes.title.map(String::from))
        .bind(changes.body.map(String::from))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    #[tracing::instrument(name = "Delete a newsletter", skip(self))]
    async fn delete(&self, id: NewsletterId) -> Result<bool, StoreError> {
        let result = sqlx::query(r#"DELETE FROM newsletter WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
