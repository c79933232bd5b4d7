//! Site entry point
//!
//! Serves the HTML shell the trading front end boots from. Tenant hosts get
//! their platform view inlined as `window.__PLATFORM__`; every other host
//! gets the generic marketing shell.

use axum::{extract::State, response::Html};
use liquidlab_core::ResolvedPlatform;

use crate::error::ApiError;
use crate::extractors::MaybePlatform;
use crate::state::AppState;

/// Site index - GET /
pub async fn index(
    State(state): State<AppState>,
    MaybePlatform(platform): MaybePlatform,
) -> Result<Html<String>, ApiError> {
    match platform {
        Some(platform) => tenant_shell(&platform).map(Html),
        None => Ok(Html(marketing_shell(&state.config.app.name))),
    }
}

fn tenant_shell(platform: &ResolvedPlatform) -> Result<String, ApiError> {
    let payload = serde_json::to_string(platform)
        .map_err(|e| ApiError::InternalError(format!("Failed to serialize platform: {}", e)))?;

    let icon = platform
        .logo_url
        .as_deref()
        .map(|url| format!("\n    <link rel=\"icon\" href=\"{}\">", escape_html(url)))
        .unwrap_or_default();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>{icon}
    <script>window.__PLATFORM__ = {payload};</script>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/assets/app.js"></script>
  </body>
</html>
"#,
        title = escape_html(&platform.name),
        icon = icon,
        payload = script_safe(&payload),
    ))
}

fn marketing_shell(app_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script>window.__PLATFORM__ = null;</script>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/assets/app.js"></script>
  </body>
</html>
"#,
        title = escape_html(app_name),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON text safe to place inside an inline `<script>`.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
