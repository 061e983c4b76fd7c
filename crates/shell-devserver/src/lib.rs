//! Development server for the dashboard shell.
//!
//! Serves the project directory as static files. Paths that look like views
//! (no extension) fall back to `index.html`, so History-mode URLs survive a
//! reload.
//!
//! - [`resolve()`] - map a request path to a file under the document root
//! - [`mime_type`] - `Content-Type` by file extension
//! - [`app`] - the Axum router
//! - [`port`] - listening port from `PORT` / the command line

pub mod config;
pub mod mime;
pub mod resolve;
pub mod server;

pub use config::{ConfigError, DEFAULT_PORT, port};
pub use mime::mime_type;
pub use resolve::{ServeError, resolve};
pub use server::{app, respond};
