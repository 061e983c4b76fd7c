//! Router context: navigator and route change dispatcher.
//!
//! [`Router`] is the handle the shell passes around. It owns the static
//! [`RouteConfig`], the browser seam, the mutable [`RouteState`] and the view
//! loader, and it is the only producer of programmatic route events.

use std::cell::RefCell;
use std::rc::Rc;

use crate::base::base_url_from_browser;
use crate::browser::Browser;
use crate::events::{self, EventSender, RouteEvent, RouteEvents};
use crate::loader::{FragmentSource, LoadTicket, MountTarget, ViewLoader};
use crate::mode::RouterMode;
use crate::state::{LoadPhase, NavigationRequest, RouteConfig, RouteState};
use crate::view::{decode, encode_view, view_from_hash, view_from_path};

impl RouteConfig {
    /// Establish the routing configuration from the document and location.
    pub fn detect(browser: &impl Browser, default_view: impl Into<String>) -> Self {
        match RouterMode::from_browser(browser) {
            RouterMode::Hash => Self::hash(default_view),
            RouterMode::History => Self::history(base_url_from_browser(browser), default_view),
        }
    }
}

struct Inner<B, S, M> {
    config: RouteConfig,
    browser: B,
    state: Rc<RefCell<RouteState>>,
    loader: ViewLoader<S, M>,
    events: EventSender,
}

/// Shared handle to the routing context.
pub struct Router<B, S, M> {
    inner: Rc<Inner<B, S, M>>,
}

impl<B, S, M> Clone for Router<B, S, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<B, S, M> Router<B, S, M>
where
    B: Browser,
    S: FragmentSource,
    M: MountTarget,
{
    /// Detect the configuration from `browser` and build a router.
    pub fn new(
        browser: B,
        source: S,
        target: M,
        default_view: impl Into<String>,
    ) -> (Self, RouteEvents) {
        let config = RouteConfig::detect(&browser, default_view);
        Self::with_config(config, browser, source, target)
    }

    pub fn with_config(config: RouteConfig, browser: B, source: S, target: M) -> (Self, RouteEvents) {
        log::info!(
            "router mode={} base={} default={}",
            config.mode,
            config.base_url,
            config.default_view
        );
        let state = Rc::new(RefCell::new(RouteState::default()));
        let loader = ViewLoader::new(source, target, Rc::clone(&state));
        let (events, receiver) = events::channel();
        let router = Self {
            inner: Rc::new(Inner {
                config,
                browser,
                state,
                loader,
                events,
            }),
        };
        (router, receiver)
    }

    pub fn config(&self) -> &RouteConfig {
        &self.inner.config
    }

    pub fn mode(&self) -> RouterMode {
        self.inner.config.mode
    }

    pub fn browser(&self) -> &B {
        &self.inner.browser
    }

    /// Snapshot of the route state.
    pub fn state(&self) -> RouteState {
        self.inner.state.borrow().clone()
    }

    pub fn current_view(&self) -> String {
        self.inner.state.borrow().current_view.clone()
    }

    /// Producer handle for native event listeners.
    pub fn events(&self) -> EventSender {
        self.inner.events.clone()
    }

    /// Queue the initial dispatch.
    pub fn start(&self) {
        self.inner.events.send(RouteEvent::Initial);
    }

    // =========================================================================
    // Navigator
    // =========================================================================

    /// Canonical URL for `view`.
    pub fn href_for(&self, view: &str) -> String {
        let config = &self.inner.config;
        let view = config.safe_view(view);
        let segment = encode_view(&view);
        match config.mode {
            RouterMode::History => format!("{}{segment}", config.base_url),
            RouterMode::Hash => format!("#{segment}"),
        }
    }

    /// Navigate to a view.
    ///
    /// History mutations raise no event, so History mode always queues a
    /// dispatch. In Hash mode the native `hashchange` drives the dispatcher,
    /// except when the hash would not change (re-selecting the active view)
    /// or the entry is replaced, where no event fires and one is queued here.
    pub fn navigate(&self, request: impl Into<NavigationRequest>) {
        let request = request.into();
        let view = self.inner.config.safe_view(&request.view);
        let href = self.href_for(&view);
        let browser = &self.inner.browser;
        log::debug!("navigate to {view} (replace={})", request.replace);

        match self.inner.config.mode {
            RouterMode::History => {
                if request.replace {
                    browser.replace_state(&href);
                } else {
                    browser.push_state(&href);
                }
                self.inner.events.send(RouteEvent::Programmatic);
            }
            RouterMode::Hash => {
                if decode(&browser.hash()) == decode(&href) {
                    self.inner.events.send(RouteEvent::Programmatic);
                } else if request.replace {
                    browser.replace_state(&href);
                    self.inner.events.send(RouteEvent::Programmatic);
                } else {
                    browser.set_hash(&href);
                }
            }
        }
    }

    // =========================================================================
    // Dispatcher
    // =========================================================================

    /// Handle one route event.
    pub fn dispatch(&self, event: RouteEvent) -> LoadTicket<S, M> {
        log::debug!("route event {event:?}");
        self.handle_route_change()
    }

    /// Resolve the view from the current location and begin loading it.
    pub fn handle_route_change(&self) -> LoadTicket<S, M> {
        self.inner.state.borrow_mut().phase = LoadPhase::Resolving;
        let config = &self.inner.config;
        let browser = &self.inner.browser;

        let view = match config.mode {
            RouterMode::History => {
                let legacy = view_from_hash(&browser.hash());
                if legacy.is_empty() {
                    view_from_path(&browser.pathname(), &config.base_url, &config.default_view)
                } else {
                    let legacy = config.safe_view(&legacy);
                    let href = self.href_for(&legacy);
                    log::info!("rewriting legacy link to {href}");
                    browser.replace_state(&href);
                    legacy
                }
            }
            RouterMode::Hash => view_from_hash(&browser.hash()),
        };
        let view = config.safe_view(&view);

        let path = config.fragment_path(&view);
        self.inner.loader.begin(view, path)
    }
}
