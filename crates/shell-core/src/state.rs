//! Routing configuration and per-session route state.

use crate::mode::RouterMode;
use crate::view::is_view_name;

/// Directory holding the per-view fragments.
pub const FRAGMENT_DIR: &str = "pages";

/// Static routing configuration, established once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub mode: RouterMode,
    /// Always ends with `/`. `/` in Hash mode.
    pub base_url: String,
    pub default_view: String,
}

impl RouteConfig {
    /// Hash-mode configuration.
    pub fn hash(default_view: impl Into<String>) -> Self {
        Self {
            mode: RouterMode::Hash,
            base_url: "/".to_string(),
            default_view: default_view.into(),
        }
    }

    /// History-mode configuration under `base_url`.
    pub fn history(base_url: impl Into<String>, default_view: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            mode: RouterMode::History,
            base_url,
            default_view: default_view.into(),
        }
    }

    /// `view`, or the default view when it is blank or not a view name.
    pub fn safe_view(&self, view: &str) -> String {
        let view = view.trim();
        if view.is_empty() {
            self.default_view.clone()
        } else if !is_view_name(view) {
            log::warn!("'{view}' is not a view name, using {}", self.default_view);
            self.default_view.clone()
        } else {
            view.to_string()
        }
    }

    /// Address of the fragment for `view`.
    ///
    /// Relative to the document in Hash mode; anchored at the base URL in
    /// History mode, where the document URL ends in a view name.
    pub fn fragment_path(&self, view: &str) -> String {
        match self.mode {
            RouterMode::Hash => format!("{FRAGMENT_DIR}/{view}.html"),
            RouterMode::History => format!("{}{FRAGMENT_DIR}/{view}.html", self.base_url),
        }
    }
}

/// Where the most recent navigation is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Uninitialized,
    Resolving,
    Loading(String),
    Mounted(String),
    Failed(String),
}

/// Mutable routing state owned by the router context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteState {
    /// Target of the most recent navigation, set before its fragment arrives.
    pub current_view: String,
    pub phase: LoadPhase,
}

/// A programmatic navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationRequest {
    pub view: String,
    /// Replace the current history entry instead of adding one.
    pub replace: bool,
}

impl NavigationRequest {
    pub fn push(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            replace: false,
        }
    }

    pub fn replace(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            replace: true,
        }
    }
}

impl From<&str> for NavigationRequest {
    fn from(view: &str) -> Self {
        Self::push(view)
    }
}

impl From<String> for NavigationRequest {
    fn from(view: String) -> Self {
        Self::push(view)
    }
}
