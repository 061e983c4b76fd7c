//! UI components built with Leptos.
//!
//! - [`Layout`] - fixed frame: header, sidebar and the mount container
//! - [`menu`] - sidebar navigation
//! - [`clock`] - header clock
//! - [`outlet`] - the mount container and its [`shell_core::MountTarget`]
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod clock;
pub mod icons;
pub mod layout;
pub mod menu;
pub mod outlet;

pub use layout::Layout;
