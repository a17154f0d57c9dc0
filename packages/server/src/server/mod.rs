// HTTP server setup (Axum + server-rendered pages)
pub mod app;
pub mod error;
pub mod flash;
pub mod routes;
pub mod views;

pub use app::*;
pub use error::AppError;
