//! Browser seam.
//!
//! The router never touches `window` directly. Everything it reads from or
//! writes to the document, `location` and `history` goes through [`Browser`],
//! so the routing logic runs unchanged on wasm and in native tests.

/// Root-document attribute selecting the routing mode (`hash` | `history`).
pub const MODE_ATTRIBUTE: &str = "data-router";

/// Root-document attribute giving an explicit base path for History mode.
pub const BASE_ATTRIBUTE: &str = "data-base";

/// Query parameter consulted when [`MODE_ATTRIBUTE`] is absent or unrecognized.
pub const MODE_QUERY_PARAM: &str = "router";

/// Access to the document root, the location and the session history.
pub trait Browser {
    /// Attribute value on the document root element (`<html>`).
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Full current URL.
    fn href(&self) -> String;

    /// Path component of the current URL.
    fn pathname(&self) -> String;

    /// Fragment including its leading `#`, or empty when there is none.
    fn hash(&self) -> String;

    /// First value of a query parameter of the current URL.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Add a session history entry without loading a document.
    fn push_state(&self, url: &str);

    /// Replace the current session history entry without loading a document.
    fn replace_state(&self, url: &str);

    /// Assign `location.hash`. Emits `hashchange` only if the hash changes.
    fn set_hash(&self, hash: &str);
}

#[cfg(any(test, feature = "mock"))]
pub use memory::{MemoryBrowser, NativeEvent};

#[cfg(any(test, feature = "mock"))]
mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use url::Url;

    use super::Browser;

    /// Events a real browser would raise on its own.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum NativeEvent {
        HashChange,
        PopState,
    }

    /// In-memory [`Browser`] with a session history stack.
    ///
    /// Mirrors the event semantics the router depends on: `pushState` and
    /// `replaceState` are silent, assigning an unchanged hash is silent,
    /// assigning a new hash raises `hashchange`, and traversal raises
    /// `popstate`. Raised events are recorded and must be drained by the
    /// test, which decides when to feed them to the dispatcher.
    pub struct MemoryBrowser {
        attributes: HashMap<String, String>,
        entries: RefCell<Vec<Url>>,
        index: Cell<usize>,
        events: RefCell<Vec<NativeEvent>>,
    }

    impl MemoryBrowser {
        /// Create a browser sitting on `href`.
        ///
        /// # Panics
        ///
        /// Panics if `href` is not an absolute URL.
        pub fn new(href: &str) -> Self {
            let url = Url::parse(href).expect("MemoryBrowser requires an absolute URL");
            Self {
                attributes: HashMap::new(),
                entries: RefCell::new(vec![url]),
                index: Cell::new(0),
                events: RefCell::new(Vec::new()),
            }
        }

        /// Set an attribute on the simulated `<html>` element.
        pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
            self.attributes.insert(name.to_string(), value.to_string());
            self
        }

        /// Number of session history entries.
        pub fn history_len(&self) -> usize {
            self.entries.borrow().len()
        }

        /// Drain the events raised since the last call.
        pub fn take_events(&self) -> Vec<NativeEvent> {
            std::mem::take(&mut *self.events.borrow_mut())
        }

        /// Simulate the user following a link or typing a URL.
        ///
        /// A fragment-only change stays in the document and raises
        /// `hashchange`; anything else is a fresh document load.
        pub fn visit(&self, href: &str) {
            let Some(next) = self.resolve(href) else {
                return;
            };
            let current = self.current();
            let same_document = strip_fragment(&current) == strip_fragment(&next);
            self.push_entry(next.clone());
            if same_document && current.fragment() != next.fragment() {
                self.events.borrow_mut().push(NativeEvent::HashChange);
            }
        }

        /// Simulate the back button.
        pub fn back(&self) {
            let index = self.index.get();
            if index == 0 {
                return;
            }
            let hash_before = self.hash();
            self.index.set(index - 1);
            self.events.borrow_mut().push(NativeEvent::PopState);
            if self.hash() != hash_before {
                self.events.borrow_mut().push(NativeEvent::HashChange);
            }
        }

        fn current(&self) -> Url {
            self.entries.borrow()[self.index.get()].clone()
        }

        fn resolve(&self, url: &str) -> Option<Url> {
            match self.current().join(url) {
                Ok(next) => Some(next),
                Err(e) => {
                    log::warn!("ignoring unresolvable URL '{url}': {e}");
                    None
                }
            }
        }

        fn push_entry(&self, url: Url) {
            let mut entries = self.entries.borrow_mut();
            entries.truncate(self.index.get() + 1);
            entries.push(url);
            self.index.set(entries.len() - 1);
        }
    }

    fn strip_fragment(url: &Url) -> Url {
        let mut url = url.clone();
        url.set_fragment(None);
        url
    }

    impl Browser for MemoryBrowser {
        fn root_attribute(&self, name: &str) -> Option<String> {
            self.attributes.get(name).cloned()
        }

        fn href(&self) -> String {
            self.current().to_string()
        }

        fn pathname(&self) -> String {
            self.current().path().to_string()
        }

        fn hash(&self) -> String {
            match self.current().fragment() {
                Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
                _ => String::new(),
            }
        }

        fn query_param(&self, name: &str) -> Option<String> {
            self.current()
                .query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        }

        fn push_state(&self, url: &str) {
            if let Some(next) = self.resolve(url) {
                self.push_entry(next);
            }
        }

        fn replace_state(&self, url: &str) {
            if let Some(next) = self.resolve(url) {
                self.entries.borrow_mut()[self.index.get()] = next;
            }
        }

        fn set_hash(&self, hash: &str) {
            let mut next = self.current();
            next.set_fragment(Some(hash.trim_start_matches('#')));
            if next.fragment() != self.current().fragment() {
                self.push_entry(next);
                self.events.borrow_mut().push(NativeEvent::HashChange);
            }
        }
    }

}
