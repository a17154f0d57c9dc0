pub mod check_url;

pub use check_url::{run_check, CheckOutcome};
