use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{UrlCheckId, UrlId};
use crate::kernel::PageCheck;

/// One recorded page check. Rows are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlCheck {
    pub id: UrlCheckId,
    pub url_id: UrlId,
    pub status_code: Option<i32>,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UrlCheck {
    /// Append a check for `url_id`. Fails if the url does not exist.
    pub async fn create(url_id: UrlId, check: &PageCheck, pool: &PgPool) -> Result<Self> {
        let row = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO url_checks (url_id, status_code, title, h1, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(url_id)
        .bind(i32::from(check.status_code))
        .bind(&check.title)
        .bind(&check.h1)
        .bind(&check.description)
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to insert check for url {}", url_id))?;

        tracing::info!(
            url_id = %url_id,
            check_id = %row.id,
            status_code = check.status_code,
            "Recorded url check"
        );

        Ok(row)
    }

    /// All checks for a url, most recent first.
    pub async fn find_for_url(url_id: UrlId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM url_checks
            WHERE url_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(url_id)
        .fetch_all(pool)
        .await
        .context("Failed to list url checks")
    }
}
