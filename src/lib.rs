//! Dashboard client shell.
//!
//! A fixed frame (header, clock, sidebar menu) around a single mount
//! container. Routing lives in [`shell_core`]; this crate supplies the
//! browser-backed seams and the Leptos components.
//!
//! - [`app`] - root component and [`app::ShellContext`]
//! - [`browser`] - `web_sys` implementation of [`shell_core::Browser`]
//! - [`components`] - layout, menu, clock and the mount container
//! - [`pages`] - per-view bindings run after a fragment is mounted
//! - [`utils`] - DOM helpers, fragment fetching, placeholder artwork

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

pub use app::App;
