// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Deciding what to persist after a check lives in domains/urls/activities.
//
// Naming convention: Base* for trait names (e.g., BasePageChecker)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Page Checker Trait (Infrastructure - single page fetch + metadata)
// =============================================================================

/// Metadata extracted from a successfully fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCheck {
    pub status_code: u16,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
}

/// Why a page check produced no result.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The request did not complete within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// DNS, connection, TLS or body read failure
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),
}

#[async_trait]
pub trait BasePageChecker: Send + Sync {
    /// Fetch `url` once and extract its metadata.
    ///
    /// Any failure, including a non-2xx status, is an error; there is no partial
    /// result.
    async fn check(&self, url: &str) -> Result<PageCheck, CheckError>;
}
