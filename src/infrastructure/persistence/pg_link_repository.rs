//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, Visibility};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound parameters for SQL injection protection. The `UNIQUE` constraint
/// on `links.code` is the store-level backstop for code uniqueness; an insert
/// that trips it surfaces as [`AppError::Conflict`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    visibility: String,
    owner_id: i64,
    deleted: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<LinkRow> for Link {
    type Error = AppError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        let visibility = Visibility::parse(&row.visibility).ok_or_else(|| {
            AppError::internal(
                "Unexpected visibility value in store",
                json!({ "value": row.visibility, "code": row.code }),
            )
        })?;

        Ok(Link {
            id: row.id,
            code: row.code,
            target_url: row.target_url,
            visibility,
            owner_id: row.owner_id,
            deleted: row.deleted,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, target_url, visibility, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code, target_url, visibility, owner_id, deleted, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target_url)
        .bind(new_link.visibility.as_str())
        .bind(new_link.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, visibility, owner_id, deleted, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::try_from).transpose()
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, target_url, visibility, owner_id, deleted, created_at
            FROM links
            WHERE owner_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Link::try_from).collect()
    }

    async fn mark_deleted(&self, code: &str, owner_id: i64) -> Result<bool, AppError> {
        // Single statement, so the ownership check and the flag update cannot
        // race with a concurrent delete. No `deleted = FALSE` filter: marking
        // an already-deleted link succeeds again.
        let result = sqlx::query(
            r#"
            UPDATE links
            SET deleted = TRUE
            WHERE code = $1 AND owner_id = $2
            "#,
        )
        .bind(code)
        .bind(owner_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
