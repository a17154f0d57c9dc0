//! Reduction of user input to the canonical `scheme://host` form used as the
//! uniqueness key for stored URLs.

use thiserror::Error;
use url::{ParseError, Url};

/// Longest accepted raw input, counted in characters.
pub const MAX_URL_LENGTH: usize = 255;

/// Canonical form of an input that could not be parsed at all.
const EMPTY_CANONICAL: &str = "://";

/// Reasons a submitted URL is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL is required")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("not an http(s) URL: {normalized}")]
    Invalid { normalized: String },
}

/// Normalize any input string to `{scheme}://{host}`.
///
/// Inputs without a scheme are parsed as `http://{input}`. Path, query and fragment
/// are dropped; an explicit non-default port is kept. Never fails: a malformed input
/// comes back as `"://"`, which [`is_http_url`] rejects.
pub fn normalize_url(input: &str) -> String {
    let parsed = match Url::parse(input) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{}", input)),
        other => other,
    };

    match parsed {
        Ok(url) => format!("{}://{}", url.scheme(), host_with_port(&url)),
        Err(_) => EMPTY_CANONICAL.to_string(),
    }
}

fn host_with_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// True when a canonical name is `http://` or `https://` followed by a host.
pub fn is_http_url(normalized: &str) -> bool {
    normalized
        .strip_prefix("http://")
        .or_else(|| normalized.strip_prefix("https://"))
        .is_some_and(|host| !host.is_empty())
}

/// Validate raw form input and return its canonical name.
pub fn validate_input(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if raw.chars().count() > MAX_URL_LENGTH {
        return Err(ValidationError::TooLong);
    }

    let normalized = normalize_url(raw);
    if !is_http_url(&normalized) {
        return Err(ValidationError::Invalid { normalized });
    }

    Ok(normalized)
}
