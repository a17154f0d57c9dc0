//! Form, list, detail and check routes for submitted urls.

use axum::{
    extract::{Extension, Form, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{error, info};

use crate::common::UrlId;
use crate::domains::urls::{run_check, validate_input, CheckOutcome, Url, UrlCheck};
use crate::server::app::AppState;
use crate::server::flash::{push_flash, take_flashes, Flash, FlashLevel};
use crate::server::views;
use crate::server::AppError;

pub const MSG_URL_ADDED: &str = "Page successfully added";
pub const MSG_URL_EXISTS: &str = "Page already exists";
pub const MSG_URL_INVALID: &str = "Invalid URL";
pub const MSG_URL_NOT_FOUND: &str = "URL not found";
pub const MSG_CHECK_OK: &str = "Page successfully checked";
pub const MSG_CHECK_FAILED: &str = "An error occurred during the check";

#[derive(Debug, Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub url: String,
}

fn url_path(id: UrlId) -> String {
    format!("/urls/{}", id)
}

/// GET /
pub async fn index_handler(session: Session) -> Result<Html<String>, AppError> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(views::index_page(&flashes, "")))
}

/// POST /urls
pub async fn create_url_handler(
    Extension(state): Extension<AppState>,
    session: Session,
    Form(form): Form<UrlForm>,
) -> Result<Response, AppError> {
    let name = match validate_input(&form.url) {
        Ok(name) => name,
        Err(reason) => {
            info!(reason = %reason, "Rejected url submission");
            let mut flashes = take_flashes(&session).await?;
            flashes.push(Flash::new(FlashLevel::Danger, MSG_URL_INVALID));
            let page = views::index_page(&flashes, &form.url);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let (url, is_new) = Url::find_or_create(&name, &state.db_pool).await?;

    if is_new {
        push_flash(&session, FlashLevel::Success, MSG_URL_ADDED).await?;
    } else {
        push_flash(&session, FlashLevel::Info, MSG_URL_EXISTS).await?;
    }

    Ok(Redirect::to(&url_path(url.id)).into_response())
}

/// GET /urls
pub async fn list_urls_handler(
    Extension(state): Extension<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let urls = Url::list_with_last_check(&state.db_pool).await?;
    let flashes = take_flashes(&session).await?;
    Ok(Html(views::urls_page(&flashes, &urls)))
}

/// GET /urls/:id
pub async fn show_url_handler(
    Extension(state): Extension<AppState>,
    session: Session,
    Path(id): Path<UrlId>,
) -> Result<Response, AppError> {
    let Some(url) = Url::find_by_id(id, &state.db_pool).await? else {
        push_flash(&session, FlashLevel::Danger, MSG_URL_NOT_FOUND).await?;
        return Ok(Redirect::to("/urls").into_response());
    };

    let checks = UrlCheck::find_for_url(url.id, &state.db_pool).await?;
    let flashes = take_flashes(&session).await?;

    Ok(Html(views::url_page(&flashes, &url, &checks)).into_response())
}

/// POST /urls/:id/checks
///
/// Always redirects; a failed fetch or a failed insert only changes the notice.
pub async fn create_check_handler(
    Extension(state): Extension<AppState>,
    session: Session,
    Path(id): Path<UrlId>,
) -> Result<Redirect, AppError> {
    let Some(url) = Url::find_by_id(id, &state.db_pool).await? else {
        push_flash(&session, FlashLevel::Danger, MSG_URL_NOT_FOUND).await?;
        return Ok(Redirect::to("/urls"));
    };

    match run_check(&url, state.page_checker.as_ref(), &state.db_pool).await {
        Ok(CheckOutcome::Recorded(_)) => {
            push_flash(&session, FlashLevel::Success, MSG_CHECK_OK).await?;
        }
        Ok(CheckOutcome::Failed(_)) => {
            push_flash(&session, FlashLevel::Danger, MSG_CHECK_FAILED).await?;
        }
        Err(e) => {
            error!(url_id = %url.id, error = %e, "Failed to record url check");
            push_flash(&session, FlashLevel::Danger, MSG_CHECK_FAILED).await?;
        }
    }

    Ok(Redirect::to(&url_path(url.id)))
}
