//! HTTP layer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tower_http::trace::TraceLayer;

use crate::mime::mime_type;
use crate::resolve::{ServeError, resolve};

#[derive(Clone)]
struct AppState {
    root: Arc<PathBuf>,
}

/// Router serving `root` for every path and method.
pub fn app(root: PathBuf) -> Router {
    let state = AppState {
        root: Arc::new(root),
    };
    Router::new()
        .fallback(handle)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn handle(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    respond(&state.root, &method, uri.path()).await
}

/// Build the response for one request.
pub async fn respond(root: &Path, method: &Method, pathname: &str) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return error_response(&ServeError::MethodNotAllowed);
    }

    match resolve(root, pathname) {
        Ok(path) => serve_file(&path, method == Method::HEAD).await,
        Err(e) => {
            tracing::debug!(pathname, error = %e, "not served");
            error_response(&e)
        }
    }
}

async fn serve_file(path: &Path, head_only: bool) -> Response {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "read failed");
            return text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
        }
    };

    let length = bytes.len();
    let body = if head_only {
        Body::empty()
    } else {
        Body::from(bytes)
    };
    (
        [
            (header::CONTENT_TYPE, mime_type(path).to_string()),
            (header::CACHE_CONTROL, "no-store".to_string()),
            (header::CONTENT_LENGTH, length.to_string()),
        ],
        body,
    )
        .into_response()
}

fn error_response(error: &ServeError) -> Response {
    text(error.status(), &error.to_string())
}

fn text(status: StatusCode, message: &str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message.to_string(),
    )
        .into_response()
}
