pub mod url;
pub mod url_check;

pub use url::{Url, UrlStats, UrlSummary};
pub use url_check::UrlCheck;
