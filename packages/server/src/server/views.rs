//! Server-rendered HTML pages.
//!
//! Every interpolated value goes through [`escape`].

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::domains::urls::{Url, UrlCheck, UrlSummary, MAX_URL_LENGTH};
use crate::server::flash::Flash;

const STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn optional(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_default()
}

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut alerts = String::new();
    for flash in flashes {
        let _ = write!(
            alerts,
            r#"<div class="alert alert-{}" role="alert">{}</div>"#,
            flash.level.as_str(),
            escape(&flash.message)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{STYLESHEET}">
</head>
<body class="d-flex flex-column min-vh-100">
<header class="navbar navbar-expand-md navbar-dark bg-dark px-3">
<a class="navbar-brand" href="/">Page Analyzer</a>
<ul class="navbar-nav">
<li class="nav-item"><a class="nav-link" href="/">Home</a></li>
<li class="nav-item"><a class="nav-link" href="/urls">Sites</a></li>
</ul>
</header>
<main class="flex-grow-1">
{alerts}
<div class="container-lg mt-3">
{body}
</div>
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Submission form. `value` refills the input after a rejected submission.
pub fn index_page(flashes: &[Flash], value: &str) -> String {
    let body = format!(
        r#"<div class="row">
<div class="col-12 col-md-10 col-lg-8 mx-auto">
<h1 class="display-3">Page Analyzer</h1>
<p class="lead">Check web pages for SEO suitability for free</p>
<form action="/urls" method="post" class="d-flex justify-content-center">
<input type="text" name="url" value="{value}" maxlength="{MAX_URL_LENGTH}" placeholder="https://www.example.com" class="form-control form-control-lg" aria-label="url">
<input type="submit" class="btn btn-primary btn-lg ms-3 px-5" value="Check">
</form>
</div>
</div>"#,
        value = escape(value),
    );
    layout("Page Analyzer", flashes, &body)
}

/// All sites with their latest check.
pub fn urls_page(flashes: &[Flash], urls: &[UrlSummary]) -> String {
    let mut rows = String::new();
    for url in urls {
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td><a href="/urls/{id}">{name}</a></td><td>{last_check}</td><td>{last_status}</td></tr>"#,
            id = url.id,
            name = escape(&url.name),
            last_check = url.last_check.as_ref().map(timestamp).unwrap_or_default(),
            last_status = url
                .last_status
                .map(|status| status.to_string())
                .unwrap_or_default(),
        );
    }

    let body = format!(
        r#"<h1>Sites</h1>
<div class="table-responsive">
<table class="table table-bordered table-hover text-nowrap" data-test="urls">
<thead><tr><th>ID</th><th>Name</th><th>Last check</th><th>Response code</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>
</div>"#
    );
    layout("Sites", flashes, &body)
}

/// One site and its check history, newest first.
pub fn url_page(flashes: &[Flash], url: &Url, checks: &[UrlCheck]) -> String {
    let mut rows = String::new();
    for check in checks {
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td>{status}</td><td>{h1}</td><td>{title}</td><td>{description}</td><td>{created_at}</td></tr>"#,
            id = check.id,
            status = check
                .status_code
                .map(|status| status.to_string())
                .unwrap_or_default(),
            h1 = optional(check.h1.as_deref()),
            title = optional(check.title.as_deref()),
            description = optional(check.description.as_deref()),
            created_at = timestamp(&check.created_at),
        );
    }

    let name = escape(&url.name);
    let body = format!(
        r#"<h1>Site: {name}</h1>
<div class="table-responsive">
<table class="table table-bordered table-hover text-nowrap" data-test="url">
<tbody>
<tr><td>ID</td><td>{id}</td></tr>
<tr><td>Name</td><td>{name}</td></tr>
<tr><td>Created at</td><td>{created_at}</td></tr>
</tbody>
</table>
</div>
<h2 class="mt-5 mb-3">Checks</h2>
<form method="post" action="/urls/{id}/checks">
<input type="submit" class="btn btn-primary" value="Run check">
</form>
<div>
<table class="table table-bordered table-hover mt-2" data-test="checks">
<thead><tr><th>ID</th><th>Response code</th><th>h1</th><th>title</th><th>description</th><th>Created at</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>
</div>"#,
        id = url.id,
        created_at = timestamp(&url.created_at),
    );
    layout(&url.name, flashes, &body)
}

pub fn error_page() -> String {
    layout(
        "Internal Server Error",
        &[],
        "<h1>Internal Server Error</h1><p>Something went wrong. Please try again later.</p>",
    )
}
