use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::server::views;

/// Handler failures that cannot be recovered into a redirect or form re-render
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::error_page()),
        )
            .into_response()
    }
}
