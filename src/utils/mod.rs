//! Utility modules for DOM access, fragment fetching and placeholder art.
//!
//! Provides:
//! - [`dom`] - window/document accessors, listeners, fragment parsing
//! - [`PageFetcher`], [`fetch_text`] - network fetching with timeout
//! - [`placeholder_color`], [`placeholder_text`] - seeded avatar artwork

pub mod dom;
mod fetch;
mod placeholder;

pub use fetch::{PageFetcher, fetch_text};
pub use placeholder::{placeholder_color, placeholder_text};
