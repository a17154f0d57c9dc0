//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use page_analyzer_core::domains::urls::{Url, UrlCheck};
use page_analyzer_core::kernel::PageCheck;
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A canonical name no other test in this run uses
pub fn unique_name(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("https://{}-{}-{}.test", prefix, nanos, n)
}

/// Create a url row with a unique name
pub async fn create_test_url(pool: &PgPool, prefix: &str) -> Result<Url> {
    let (url, _) = Url::find_or_create(&unique_name(prefix), pool).await?;
    Ok(url)
}

/// Append a check with the given status and title
pub async fn create_test_check(
    pool: &PgPool,
    url: &Url,
    status_code: u16,
    title: Option<&str>,
) -> Result<UrlCheck> {
    let page = PageCheck {
        status_code,
        title: title.map(str::to_string),
        h1: None,
        description: None,
    };
    UrlCheck::create(url.id, &page, pool).await
}

pub async fn count_checks(pool: &PgPool, url: &Url) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_checks WHERE url_id = $1")
        .bind(url.id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
