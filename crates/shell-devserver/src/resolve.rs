//! Request path resolution.
//!
//! Pure filesystem lookup, independent of the HTTP layer.

use std::path::{Component, Path, PathBuf};

use axum::http::StatusCode;
use thiserror::Error;

/// File served for the shell and for SPA fallback.
pub const SHELL_DOCUMENT: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServeError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// The decoded path leaves the document root.
    #[error("Bad Request")]
    Traversal,
    /// The path is not valid percent-encoded UTF-8.
    #[error("Bad Request")]
    BadEncoding,
    #[error("Missing index.html")]
    MissingShell,
    #[error("Not Found")]
    NotFound,
}

impl ServeError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Traversal | Self::BadEncoding => StatusCode::BAD_REQUEST,
            Self::MissingShell | Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Map a request path to the file to serve.
///
/// `/` and `/index.html` are the shell. Anything else is percent-decoded
/// and joined to `root`; a directory serves its `index.html`. A missing path
/// without a `.` is taken for a view and gets the shell.
pub fn resolve(root: &Path, pathname: &str) -> Result<PathBuf, ServeError> {
    if pathname == "/" || pathname == "/index.html" {
        return shell(root);
    }

    let decoded = urlencoding::decode(pathname).map_err(|_| ServeError::BadEncoding)?;
    let path = safe_join(root, &decoded)?;

    if path.is_dir() {
        let index = path.join(SHELL_DOCUMENT);
        if index.is_file() {
            return Ok(index);
        }
    }
    if path.is_file() {
        return Ok(path);
    }
    if is_spa_route(pathname) {
        return shell(root);
    }
    Err(ServeError::NotFound)
}

fn shell(root: &Path) -> Result<PathBuf, ServeError> {
    let index = root.join(SHELL_DOCUMENT);
    if index.is_file() {
        Ok(index)
    } else {
        Err(ServeError::MissingShell)
    }
}

/// Whether a missing path should fall back to the shell.
pub fn is_spa_route(pathname: &str) -> bool {
    pathname == "/" || pathname == "/index.html" || !pathname.contains('.')
}

/// Join a decoded request path to `root`, resolving `.` and `..` lexically.
fn safe_join(root: &Path, decoded: &str) -> Result<PathBuf, ServeError> {
    if decoded.contains('\0') {
        return Err(ServeError::BadEncoding);
    }

    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    for component in Path::new(decoded.trim_start_matches(['/', '\\'])).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop().ok_or(ServeError::Traversal)?;
            }
            Component::RootDir | Component::Prefix(_) => return Err(ServeError::Traversal),
        }
    }

    Ok(parts.into_iter().fold(root.to_path_buf(), |path, part| path.join(part)))
}
