//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use page_analyzer_core::common::{UrlCheckId, UrlId};
//!
//! let url_id = UrlId::from_i64(1);
//! let check_id = UrlCheckId::from_i64(1);
//! // url_id == check_id does not compile.
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for submitted URLs.
pub struct Url;

/// Marker type for page checks recorded against a URL.
pub struct UrlCheck;

// ============================================================================
// Type aliases
// ============================================================================

pub type UrlId = Id<Url>;

pub type UrlCheckId = Id<UrlCheck>;
