//! [`Browser`] backed by the real `window`.

use shell_core::Browser;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use crate::utils::dom;

/// The current document and its session history.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn root_attribute(&self, name: &str) -> Option<String> {
        dom::document()?.document_element()?.get_attribute(name)
    }

    fn href(&self) -> String {
        dom::location()
            .and_then(|l| l.href().ok())
            .unwrap_or_default()
    }

    fn pathname(&self) -> String {
        dom::location()
            .and_then(|l| l.pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn hash(&self) -> String {
        dom::location()
            .and_then(|l| l.hash().ok())
            .unwrap_or_default()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        let search = dom::location()?.search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn push_state(&self, url: &str) {
        if let Some(history) = dom::history()
            && let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url))
        {
            log::warn!("pushState({url}) failed: {e:?}");
        }
    }

    fn replace_state(&self, url: &str) {
        if let Some(history) = dom::history()
            && let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url))
        {
            log::warn!("replaceState({url}) failed: {e:?}");
        }
    }

    fn set_hash(&self, hash: &str) {
        if let Some(location) = dom::location()
            && let Err(e) = location.set_hash(hash)
        {
            log::warn!("setting hash {hash} failed: {e:?}");
        }
    }
}
