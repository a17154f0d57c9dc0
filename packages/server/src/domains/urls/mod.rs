pub mod activities;
pub mod models;
pub mod normalize;

pub use activities::{run_check, CheckOutcome};
pub use models::{Url, UrlCheck, UrlStats, UrlSummary};
pub use normalize::{is_http_url, normalize_url, validate_input, ValidationError, MAX_URL_LENGTH};
