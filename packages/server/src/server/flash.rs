//! One-shot notices carried across redirects in the session.
//!
//! The session record lives in the store behind a signed id cookie. Once the
//! last notice is taken the record is flushed, so the store only holds
//! sessions with notices still pending.

use serde::{Deserialize, Serialize};
use tower_sessions::{session, Session};

const FLASH_KEY: &str = "_flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Queue a notice for the next rendered page.
pub async fn push_flash(
    session: &Session,
    level: FlashLevel,
    message: &str,
) -> Result<(), session::Error> {
    let mut flashes: Vec<Flash> = session.get(FLASH_KEY).await?.unwrap_or_default();
    flashes.push(Flash::new(level, message));
    session.insert(FLASH_KEY, flashes).await
}

/// Remove and return all queued notices.
///
/// Drops the stored session once nothing else is left in it.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, session::Error> {
    let flashes = session
        .remove::<Vec<Flash>>(FLASH_KEY)
        .await?
        .unwrap_or_default();

    if session.id().is_some() && session.is_empty().await {
        session.flush().await?;
    }

    Ok(flashes)
}
