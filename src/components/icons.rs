//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuClock as Clock, LuFile as File, LuLightbulb as Examples, LuNetwork as Templates,
        LuUser as User, LuUsers as Users, LuWorkflow as Workflow,
    };
}

mod bootstrap {
    pub use icondata::{
        BsClock as Clock, BsDiagram2 as Workflow, BsDiagram3 as Templates,
        BsFileEarmark as File, BsLightbulb as Examples, BsPeople as Users, BsPerson as User,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(TEMPLATES, Templates);
themed_icon!(WORKFLOW, Workflow);
themed_icon!(USERS, Users);
themed_icon!(EXAMPLES, Examples);
themed_icon!(CLOCK, Clock);
themed_icon!(USER, User);
themed_icon!(FILE, File);

/// Icon for a menu entry's `icon` name. Unknown names get [`FILE`].
pub fn menu_icon(name: &str) -> Icon {
    match name {
        "hub" => TEMPLATES,
        "flowchart" => WORKFLOW,
        "group" => USERS,
        "lightbulb" => EXAMPLES,
        _ => FILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_icons_resolve() {
        for item in crate::config::menu_items() {
            assert_ne!(menu_icon(&item.icon).data, FILE.data, "{} has no icon", item.view);
        }
        assert_eq!(menu_icon("unknown").data, FILE.data);
    }
}
