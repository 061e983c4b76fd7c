//! View fragment loading.
//!
//! A load is split in two. [`ViewLoader::begin`] runs synchronously inside the
//! dispatcher: it publishes the target view and takes a sequence number.
//! [`LoadTicket::run`] does the fetch and commits the result only if no newer
//! load has begun in the meantime. Loads may overlap; a superseded response
//! is dropped before it touches the mount container.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use crate::error::{FetchError, LoadError, MountError};
use crate::state::{LoadPhase, RouteState};

// =============================================================================
// Seams
// =============================================================================

/// Retrieves fragment markup by address.
pub trait FragmentSource {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// The region of the page that receives view fragments.
pub trait MountTarget {
    /// Called as soon as a load begins, before any network activity.
    fn select(&self, _view: &str) {}

    /// Replace the mounted content with `html` and activate the view's
    /// bindings inside it.
    fn mount(&self, view: &str, html: &str) -> Result<(), MountError>;

    /// Show a failed load in place of the view.
    fn render_error(&self, error: &LoadError);
}

impl<T: FragmentSource + ?Sized> FragmentSource for Rc<T> {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> {
        (**self).fetch(path)
    }
}

impl<T: MountTarget + ?Sized> MountTarget for Rc<T> {
    fn select(&self, view: &str) {
        (**self).select(view)
    }

    fn mount(&self, view: &str, html: &str) -> Result<(), MountError> {
        (**self).mount(view, html)
    }

    fn render_error(&self, error: &LoadError) {
        (**self).render_error(error)
    }
}

// =============================================================================
// Loader
// =============================================================================

/// How a single load ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Mounted(String),
    Failed(LoadError),
    /// A newer load began before this one's fetch completed.
    Superseded(String),
}

struct Shared<S, M> {
    source: S,
    target: M,
    state: Rc<RefCell<RouteState>>,
    latest: Cell<u64>,
}

/// Loads view fragments into a [`MountTarget`].
///
/// Cheap to clone; clones share the sequence counter and the route state.
pub struct ViewLoader<S, M> {
    shared: Rc<Shared<S, M>>,
}

impl<S, M> Clone for ViewLoader<S, M> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: FragmentSource, M: MountTarget> ViewLoader<S, M> {
    pub fn new(source: S, target: M, state: Rc<RefCell<RouteState>>) -> Self {
        Self {
            shared: Rc::new(Shared {
                source,
                target,
                state,
                latest: Cell::new(0),
            }),
        }
    }

    /// Start loading `view` from `path`.
    ///
    /// Sets `current_view` immediately so view-dependent UI reflects the
    /// target while the fragment is still in flight.
    pub fn begin(&self, view: impl Into<String>, path: impl Into<String>) -> LoadTicket<S, M> {
        let view = view.into();
        let seq = self.shared.latest.get() + 1;
        self.shared.latest.set(seq);

        {
            let mut state = self.shared.state.borrow_mut();
            state.current_view = view.clone();
            state.phase = LoadPhase::Loading(view.clone());
        }
        self.shared.target.select(&view);
        log::debug!("load #{seq} begins: {view}");

        LoadTicket {
            seq,
            view,
            path: path.into(),
            loader: self.clone(),
        }
    }

    /// Sequence number of the most recently begun load.
    pub fn latest(&self) -> u64 {
        self.shared.latest.get()
    }

    fn is_current(&self, seq: u64) -> bool {
        self.shared.latest.get() == seq
    }
}

/// One in-flight view load.
#[must_use = "a ticket does nothing until run"]
pub struct LoadTicket<S, M> {
    seq: u64,
    view: String,
    path: String,
    loader: ViewLoader<S, M>,
}

impl<S: FragmentSource, M: MountTarget> LoadTicket<S, M> {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    /// Fetch the fragment and commit it if this is still the latest load.
    ///
    /// Failures are rendered inline and reported in the outcome; they never
    /// propagate.
    pub async fn run(self) -> LoadOutcome {
        let Self {
            seq,
            view,
            path,
            loader,
        } = self;
        let shared = &loader.shared;

        let fetched = shared.source.fetch(&path).await;

        if !loader.is_current(seq) {
            log::debug!(
                "load #{seq} ({view}) superseded by #{}, discarding",
                loader.latest()
            );
            return LoadOutcome::Superseded(view);
        }

        let result = fetched
            .map_err(|source| LoadError::Fetch {
                view: view.clone(),
                source,
            })
            .and_then(|html| {
                shared
                    .target
                    .mount(&view, &html)
                    .map_err(|source| LoadError::Mount {
                        view: view.clone(),
                        source,
                    })
            });

        match result {
            Ok(()) => {
                log::info!("mounted {view}");
                shared.state.borrow_mut().phase = LoadPhase::Mounted(view.clone());
                LoadOutcome::Mounted(view)
            }
            Err(error) => {
                log::error!("{error}");
                shared.target.render_error(&error);
                shared.state.borrow_mut().phase = LoadPhase::Failed(view);
                LoadOutcome::Failed(error)
            }
        }
    }
}
