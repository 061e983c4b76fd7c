//! Per-view bindings.
//!
//! A fragment is plain markup. After it is mounted, the [`PageRegistry`]
//! runs the bindings registered for that view against the container so the
//! view can wire up its behaviour.

mod avatars;

use std::collections::HashMap;
use std::rc::Rc;

use web_sys::Element;

pub use avatars::{AvatarPlaceholders, PLACEHOLDER_ATTRIBUTE};

/// Behaviour attached to a freshly mounted view.
pub trait PageMount {
    fn mount(&self, container: &Element);
}

/// Maps view names to their bindings.
#[derive(Clone, Default)]
pub struct PageRegistry {
    pages: HashMap<String, Vec<Rc<dyn PageMount>>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings for the bundled views.
    pub fn with_defaults() -> Self {
        let avatars: Rc<dyn PageMount> = Rc::new(AvatarPlaceholders);
        let mut registry = Self::new();
        for view in ["templates", "workflow", "users"] {
            registry.register(view, Rc::clone(&avatars));
        }
        registry
    }

    pub fn register(&mut self, view: &str, page: Rc<dyn PageMount>) {
        self.pages.entry(view.to_string()).or_default().push(page);
    }

    pub fn has_bindings(&self, view: &str) -> bool {
        self.pages.get(view).is_some_and(|p| !p.is_empty())
    }

    /// Run every binding registered for `view`.
    pub fn mount(&self, view: &str, container: &Element) {
        match self.pages.get(view) {
            Some(pages) => pages.iter().for_each(|page| page.mount(container)),
            None => log::debug!("no bindings for view '{view}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nothing;

    impl PageMount for Nothing {
        fn mount(&self, _container: &Element) {}
    }

    #[test]
    fn test_default_bindings() {
        let registry = PageRegistry::with_defaults();
        assert!(registry.has_bindings("workflow"));
        assert!(registry.has_bindings("users"));
        assert!(!registry.has_bindings("content-page"));
    }

    #[test]
    fn test_register_appends() {
        let mut registry = PageRegistry::new();
        registry.register("users", Rc::new(Nothing));
        registry.register("users", Rc::new(Nothing));
        assert_eq!(registry.pages["users"].len(), 2);
    }
}
