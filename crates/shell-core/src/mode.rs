//! Routing mode detection.

use std::fmt;

use crate::browser::{Browser, MODE_ATTRIBUTE, MODE_QUERY_PARAM};

/// How the current view is encoded in the URL.
///
/// Fixed once at startup; never changes during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterMode {
    /// `#<view>`
    #[default]
    Hash,
    /// `<base_url><view>` via the History API
    History,
}

impl RouterMode {
    /// Parse one of the two recognized literals.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "hash" => Some(Self::Hash),
            "history" => Some(Self::History),
            _ => None,
        }
    }

    /// Pick the mode from the declarative attribute and the query fallback.
    ///
    /// A recognized attribute wins. An unrecognized or missing attribute
    /// defers to the query parameter, and anything left over is Hash.
    pub fn resolve(attribute: Option<&str>, query: Option<&str>) -> Self {
        if let Some(mode) = attribute.and_then(Self::parse) {
            return mode;
        }
        if let Some(mode) = query.and_then(Self::parse) {
            return mode;
        }
        if attribute.is_some() || query.is_some() {
            log::debug!(
                "unrecognized router mode (attribute={attribute:?}, query={query:?}), using hash"
            );
        }
        Self::Hash
    }

    /// Read `data-router` on `<html>`, falling back to `?router=`.
    pub fn from_browser(browser: &impl Browser) -> Self {
        Self::resolve(
            browser.root_attribute(MODE_ATTRIBUTE).as_deref(),
            browser.query_param(MODE_QUERY_PARAM).as_deref(),
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::History => "history",
        }
    }
}

impl fmt::Display for RouterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
