use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use planboard_core::paths::DEFAULT_DOCUMENT;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::state::AppState;

/// Serve files from the site root. `/` falls back to the default document;
/// a path that would climb out of the root is rejected before any
/// filesystem access.
pub async fn static_handler(State(app): State<AppState>, uri: Uri) -> Response {
    let rel = match uri.path() {
        "/" => DEFAULT_DOCUMENT,
        other => other.trim_start_matches('/'),
    };

    let Some(full) = resolve(&app.root, rel) else {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    match tokio::fs::read(&full).await {
        Ok(data) => {
            let mime = mime_guess::from_path(&full).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                data,
            )
                .into_response()
        }
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Normalize a URL path against the root, lexically. Returns None when a
/// parent component would escape the root.
fn resolve(root: &Path, rel: &str) -> Option<PathBuf> {
    let mut parts: Vec<&OsStr> = Vec::new();
    for component in Path::new(rel).components() {
        match component {
            Component::Normal(c) => parts.push(c),
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    let mut full = root.to_path_buf();
    for part in parts {
        full.push(part);
    }
    Some(full)
}
