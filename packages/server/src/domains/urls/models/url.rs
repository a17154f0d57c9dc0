use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::UrlId;

/// A submitted site, stored under its canonical `scheme://host` name.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Url {
    pub id: UrlId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// List-view row: a URL plus the status and time of its most recent check.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlSummary {
    pub id: UrlId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub last_status: Option<i32>,
    pub last_check: Option<DateTime<Utc>>,
}

/// Totals across all stored urls and their checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlStats {
    pub url_count: i64,
    pub check_count: i64,
    pub last_check_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Url Queries
// =============================================================================

impl Url {
    /// Insert a URL by canonical name.
    ///
    /// Returns `None` when a row with that name already exists; the existing row is
    /// left untouched.
    pub async fn insert(name: &str, pool: &PgPool) -> Result<Option<UrlId>> {
        sqlx::query_scalar::<_, UrlId>(
            r#"
            INSERT INTO urls (name)
            VALUES ($1)
            ON CONFLICT (name) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
        .context("Failed to insert url")
    }

    /// Insert a URL or resolve the existing row with the same name.
    ///
    /// Insert and read-back share one transaction. Under concurrent duplicate
    /// inserts the unique constraint lets exactly one caller create the row; the
    /// others read it back. Returns (url, is_new).
    pub async fn find_or_create(name: &str, pool: &PgPool) -> Result<(Self, bool)> {
        let mut tx = pool.begin().await.context("Failed to begin transaction")?;

        let created: Option<Self> = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO urls (name)
            VALUES ($1)
            ON CONFLICT (name) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to insert url")?;

        let (url, is_new) = match created {
            Some(url) => (url, true),
            None => {
                let existing = sqlx::query_as::<_, Self>("SELECT * FROM urls WHERE name = $1")
                    .bind(name)
                    .fetch_one(&mut *tx)
                    .await
                    .context("Failed to read back existing url")?;
                (existing, false)
            }
        };

        tx.commit().await.context("Failed to commit url insert")?;

        if is_new {
            tracing::info!(url_id = %url.id, name = %url.name, "Created url");
        } else {
            tracing::debug!(url_id = %url.id, name = %url.name, "Url already exists");
        }

        Ok((url, is_new))
    }

    pub async fn find_by_name(name: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM urls WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
            .context("Failed to look up url by name")
    }

    pub async fn find_by_id(id: UrlId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM urls WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .context("Failed to look up url by id")
    }

    /// Every URL with its latest check status, newest URL first.
    pub async fn list_with_last_check(pool: &PgPool) -> Result<Vec<UrlSummary>> {
        sqlx::query_as::<_, UrlSummary>(
            r#"
            SELECT
                u.id,
                u.name,
                u.created_at,
                lc.status_code AS last_status,
                lc.created_at AS last_check
            FROM urls u
            LEFT JOIN LATERAL (
                SELECT status_code, created_at
                FROM url_checks uc
                WHERE uc.url_id = u.id
                ORDER BY uc.created_at DESC, uc.id DESC
                LIMIT 1
            ) lc ON true
            ORDER BY u.id DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .context("Failed to list urls")
    }

    /// Count stored urls and checks, with the time of the newest check.
    pub async fn stats(pool: &PgPool) -> Result<UrlStats> {
        sqlx::query_as::<_, UrlStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM urls) AS url_count,
                (SELECT COUNT(*) FROM url_checks) AS check_count,
                (SELECT MAX(created_at) FROM url_checks) AS last_check_at
            "#,
        )
        .fetch_one(pool)
        .await
        .context("Failed to load url stats")
    }
}
