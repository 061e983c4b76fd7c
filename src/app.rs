//! Root application module.
//!
//! Contains the main App component, the [`ShellContext`] definition, and
//! the routing setup that ties browser events to the dispatcher.

use leptos::html::Main;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shell_core::{Router, RouteEvent, RouteEvents, RouterMode, events};

use crate::browser::WebBrowser;
use crate::components::Layout;
use crate::components::outlet::DomMount;
use crate::config::DEFAULT_VIEW;
use crate::pages::PageRegistry;
use crate::utils::PageFetcher;
use crate::utils::dom;

/// The router as wired up in the browser.
pub type ShellRouter = Router<WebBrowser, PageFetcher, DomMount>;

// ============================================================================
// ShellContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<ShellContext>()`. `Copy`, since it only holds handles.
#[derive(Clone, Copy)]
pub struct ShellContext {
    /// View currently selected by the router. Set when a load begins.
    pub current_view: RwSignal<String>,

    /// Navigator and dispatcher. Not `Send`, so kept in local storage.
    pub router: StoredValue<ShellRouter, LocalStorage>,
}

impl ShellContext {
    /// Navigate to `view`, adding a history entry.
    pub fn navigate(&self, view: &str) {
        self.router.with_value(|router| router.navigate(view));
    }

    /// Canonical URL for `view` in the active routing mode.
    pub fn href_for(&self, view: &str) -> String {
        self.router.with_value(|router| router.href_for(view))
    }

    pub fn mode(&self) -> RouterMode {
        self.router.with_value(|router| router.mode())
    }
}

// ============================================================================
// Routing setup
// ============================================================================

/// Install the native listeners, queue the initial dispatch and start
/// consuming route events.
///
/// `hashchange` is always observed so legacy `#view` links keep working in
/// History mode; `popstate` only matters in History mode.
fn start_routing(router: ShellRouter, events: RouteEvents) {
    let sender = router.events();
    {
        let sender = sender.clone();
        dom::on_window_event("hashchange", move || sender.send(RouteEvent::HashChange));
    }
    if router.mode() == RouterMode::History {
        dom::on_window_event("popstate", move || sender.send(RouteEvent::PopState));
    }

    router.start();
    spawn_local(events::run(router, events, |load| spawn_local(load)));
}

/// Root application component.
///
/// This component:
/// - Detects the routing configuration and builds the router
/// - Creates and provides the global [`ShellContext`]
/// - Starts routing once the mount container is in the document
#[component]
pub fn App() -> impl IntoView {
    let current_view = RwSignal::new(String::new());
    let container = NodeRef::<Main>::new();

    let target = DomMount::new(container, current_view, PageRegistry::with_defaults());
    let (router, events) = Router::new(WebBrowser, PageFetcher, target, DEFAULT_VIEW);

    provide_context(ShellContext {
        current_view,
        router: StoredValue::new_local(router.clone()),
    });

    // Effects run after the view is mounted, so the container exists by the
    // time the initial load completes.
    let mut pending = Some((router, events));
    Effect::new(move |_| {
        if let Some((router, events)) = pending.take() {
            start_routing(router, events);
        }
    });

    view! { <Layout container=container /> }
}
