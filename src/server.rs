//! Static file responder.
//!
//! Maps every request path directly onto a file under the server root:
//! `/` serves `index.html`, anything readable is returned as a 200 with a
//! content type from a fixed extension table, and every read failure is a
//! uniform 404 with body `Not found`. The routing never consults the request
//! method. Paths that would escape the root are answered like missing files.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

use crate::Result;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Content type for a file path, from the fixed extension table.
///
/// The lookup is case-sensitive; unknown or absent extensions fall back to
/// `text/plain`.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("woff") => "font/woff",
        Some("ttf") => "font/ttf",
        _ => "text/plain",
    }
}

/// Resolves a request path (query already stripped) to a file under `root`.
///
/// The root path maps to `index.html`. Returns `None` when the path contains
/// components that would escape the root; callers treat that exactly like a
/// missing file.
pub fn resolve_request_path(root: &Path, uri_path: &str) -> Option<PathBuf> {
    let trimmed = uri_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() {
        "index.html"
    } else {
        trimmed
    };

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(root.join(relative))
}

/// Builds the responder router for a server root.
pub fn router(root: PathBuf) -> Router {
    let root = Arc::new(root);
    Router::new().fallback(serve_file).with_state(root)
}

/// Runs the responder on an already-bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, root: PathBuf) -> Result<()> {
    axum::serve(listener, router(root)).await?;
    Ok(())
}

async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let Some(file_path) = resolve_request_path(&root, uri.path()) else {
        return not_found();
    };

    match tokio::fs::read(&file_path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&file_path))],
            bytes,
        )
            .into_response(),
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
