//! The mount container.
//!
//! [`Outlet`] renders an empty `<main>`; [`DomMount`] owns its children from
//! then on. Leptos never renders into it again, so fragments swapped in by
//! the loader are not disturbed by reactive updates elsewhere in the frame.

use leptos::html::Main;
use leptos::prelude::*;
use shell_core::{LoadError, MountError, MountTarget};

use crate::pages::PageRegistry;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/outlet/outlet.module.css");

/// Element id of the mount container.
pub const CONTAINER_ID: &str = "main-container";

#[component]
pub fn Outlet(container: NodeRef<Main>) -> impl IntoView {
    view! { <main id=CONTAINER_ID class=css::outlet node_ref=container aria-live="polite"></main> }
}

// =============================================================================
// Mount Target
// =============================================================================

/// [`MountTarget`] over the [`Outlet`] container.
///
/// Publishes the selected view to `current_view` so the menu highlights it
/// as soon as a load begins.
pub struct DomMount {
    container: NodeRef<Main>,
    current_view: RwSignal<String>,
    pages: PageRegistry,
}

impl DomMount {
    pub fn new(container: NodeRef<Main>, current_view: RwSignal<String>, pages: PageRegistry) -> Self {
        Self {
            container,
            current_view,
            pages,
        }
    }

    fn container(&self) -> Result<web_sys::HtmlElement, MountError> {
        self.container
            .get_untracked()
            .ok_or(MountError::ContainerMissing)
    }
}

impl MountTarget for DomMount {
    fn select(&self, view: &str) {
        self.current_view.set(view.to_string());
    }

    fn mount(&self, view: &str, html: &str) -> Result<(), MountError> {
        let container = self.container()?;
        let fragment = dom::parse_fragment(html)?;
        dom::replace_children(&container, &fragment)?;
        self.pages.mount(view, &container);
        log::debug!("mounted view '{view}'");
        Ok(())
    }

    fn render_error(&self, error: &LoadError) {
        let container = match self.container() {
            Ok(container) => container,
            Err(e) => {
                log::error!("cannot show load error: {e}");
                return;
            }
        };
        let message = format!("Unable to load \"{}\". {error}", error.view());
        if let Err(e) = dom::show_message(&container, css::error, &message) {
            log::error!("cannot show load error: {e}");
        }
    }
}
