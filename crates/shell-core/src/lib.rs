//! Routing core of the dashboard shell.
//!
//! Resolves the current URL to a named view in either hash or History mode,
//! performs programmatic navigation, and loads view fragments into a mount
//! target with last-request-wins ordering.
//!
//! - [`RouterMode`] - hash vs. History mode detection
//! - [`compute_base_url`] - base path derivation for History mode
//! - [`view_from_hash`], [`view_from_path`] - URL to view resolution
//! - [`Router`] - navigator and route change dispatcher
//! - [`ViewLoader`] - fragment fetch and mount with sequencing tokens
//! - [`events`] - the single-consumer route event queue
//!
//! Browser access goes through the [`Browser`] trait. An in-memory
//! implementation is available with the `mock` feature.

pub mod base;
pub mod browser;
pub mod error;
pub mod events;
pub mod loader;
pub mod mode;
pub mod router;
pub mod state;
pub mod view;

pub use base::{base_url_from_browser, compute_base_url};
pub use browser::{BASE_ATTRIBUTE, Browser, MODE_ATTRIBUTE, MODE_QUERY_PARAM};
#[cfg(any(test, feature = "mock"))]
pub use browser::{MemoryBrowser, NativeEvent};
pub use error::{FetchError, LoadError, MountError, RouteError};
pub use events::{EventSender, RouteEvent, RouteEvents};
pub use loader::{FragmentSource, LoadOutcome, LoadTicket, MountTarget, ViewLoader};
pub use mode::RouterMode;
pub use router::Router;
pub use state::{LoadPhase, NavigationRequest, RouteConfig, RouteState};
pub use view::{decode, encode_view, is_document, is_view_name, view_from_hash, view_from_path};
