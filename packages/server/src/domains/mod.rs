// Business domains
pub mod urls;
