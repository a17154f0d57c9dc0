// Page Analyzer - Core
//
// Accepts site URLs, stores them under a canonical scheme://host name and records
// page checks (status code, title, h1, meta description) against them over time.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
