//! Application configuration.
//!
//! Centralizes compile-time constants. The sidebar menu is loaded from
//! `assets/menu.toml` at compile time using `include_str!`.

use serde::Deserialize;
use shell_core::is_view_name;

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand shown in the header.
pub const APP_NAME: &str = "Workflow Console";

/// Name shown for the anonymous session.
pub const GUEST_NAME: &str = "Guest";

// =============================================================================
// Routing
// =============================================================================

/// View loaded when the URL names none.
pub const DEFAULT_VIEW: &str = "workflow";

/// Fragment request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

// =============================================================================
// Clock
// =============================================================================

pub const CLOCK_INTERVAL_MS: u32 = 1_000;

/// Locale passed to `Date.prototype.toLocaleString`.
pub const CLOCK_LOCALE: &str = "zh-CN";

// =============================================================================
// Logging
// =============================================================================

pub const LOG_LEVEL: log::Level = log::Level::Info;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Viewport query below which the menu collapses to icons.
pub const COMPACT_MENU_QUERY: &str = "(max-width: 768px)";

// =============================================================================
// Menu
// =============================================================================

/// Bundled menu definition.
pub const MENU_TOML: &str = include_str!("../assets/menu.toml");

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    pub label: String,
    /// Semantic icon name, see [`crate::components::icons::menu_icon`].
    #[serde(default)]
    pub icon: String,
    pub view: String,
}

#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    items: Vec<MenuItem>,
}

/// Parse a menu definition, dropping entries whose view is not a valid
/// view name.
pub fn parse_menu(source: &str) -> Result<Vec<MenuItem>, toml::de::Error> {
    let file: MenuFile = toml::from_str(source)?;
    Ok(file
        .items
        .into_iter()
        .filter(|item| {
            let valid = is_view_name(&item.view);
            if !valid {
                log::warn!("menu entry '{}' has invalid view '{}'", item.label, item.view);
            }
            valid
        })
        .collect())
}

/// The configured menu, or a single entry for the default view if the
/// bundled definition is unusable.
pub fn menu_items() -> Vec<MenuItem> {
    match parse_menu(MENU_TOML) {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => {
            log::warn!("menu definition is empty");
            fallback_menu()
        }
        Err(e) => {
            log::error!("menu definition is malformed: {e}");
            fallback_menu()
        }
    }
}

fn fallback_menu() -> Vec<MenuItem> {
    vec![MenuItem {
        label: "Workflows".to_string(),
        icon: "flowchart".to_string(),
        view: DEFAULT_VIEW.to_string(),
    }]
}
