//! Kernel module - server infrastructure and dependencies.

pub mod page_checker;
pub mod test_dependencies;
pub mod traits;

pub use page_checker::{extract_metadata, HttpPageChecker};
pub use test_dependencies::MockPageChecker;
pub use traits::*;
