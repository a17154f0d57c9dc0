//! Page checker - one HTTP GET plus title / h1 / meta-description extraction
//!
//! - Uses reqwest for the request (client default redirect policy)
//! - Uses scraper for HTML parsing
//! - Treats timeouts, transport errors and non-2xx statuses alike: no result

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

use super::{BasePageChecker, CheckError, PageCheck};

const USER_AGENT: &str = concat!("page-analyzer/", env!("CARGO_PKG_VERSION"));

/// Page checker backed by a reqwest client with a whole-request timeout
pub struct HttpPageChecker {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPageChecker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, error: reqwest::Error) -> CheckError {
        if error.is_timeout() {
            CheckError::Timeout(self.timeout)
        } else {
            CheckError::Request(error)
        }
    }
}

#[async_trait]
impl BasePageChecker for HttpPageChecker {
    async fn check(&self, url: &str) -> Result<PageCheck, CheckError> {
        debug!(url = %url, "Checking page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Page check got error status");
            return Err(CheckError::Status(status.as_u16()));
        }

        let html = response.text().await.map_err(|e| self.classify(e))?;

        Ok(extract_metadata(status.as_u16(), &html))
    }
}

/// Build a check result from a fetched HTML body
pub fn extract_metadata(status_code: u16, html: &str) -> PageCheck {
    let document = Html::parse_document(html);

    PageCheck {
        status_code,
        title: first_text(&document, "title"),
        h1: first_text(&document, "h1"),
        description: meta_description(&document),
    }
}

/// Trimmed text of the first element matching `selector`
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Trimmed `content` of the first `<meta name="description">`; an empty attribute
/// counts as missing
fn meta_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.trim().to_string())
}
