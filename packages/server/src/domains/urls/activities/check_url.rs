//! Check activity: run the page checker against a stored url and persist the
//! result only when the check succeeded.

use anyhow::Result;
use sqlx::PgPool;
use tracing::warn;

use crate::domains::urls::models::{Url, UrlCheck};
use crate::kernel::{BasePageChecker, CheckError};

pub enum CheckOutcome {
    /// The page was fetched and a check row appended
    Recorded(UrlCheck),
    /// The fetch failed; nothing was written
    Failed(CheckError),
}

/// Check `url` once. Storage errors are returned; fetch failures are an outcome.
pub async fn run_check(
    url: &Url,
    checker: &dyn BasePageChecker,
    pool: &PgPool,
) -> Result<CheckOutcome> {
    match checker.check(&url.name).await {
        Ok(page) => {
            let check = UrlCheck::create(url.id, &page, pool).await?;
            Ok(CheckOutcome::Recorded(check))
        }
        Err(error) => {
            warn!(url_id = %url.id, url = %url.name, error = %error, "Page check failed");
            Ok(CheckOutcome::Failed(error))
        }
    }
}
