//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use shell_core::MountError;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DocumentFragment, Element, History, HtmlTemplateElement, Location, Node, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

#[inline]
pub fn location() -> Option<Location> {
    Some(window()?.location())
}

#[inline]
pub fn history() -> Option<History> {
    window()?.history().ok()
}

// =============================================================================
// Events
// =============================================================================

/// Register `handler` for a window event for the lifetime of the page.
pub fn on_window_event(event: &str, handler: impl Fn() + 'static) {
    let Some(window) = window() else {
        log::warn!("no window, '{event}' listener not installed");
        return;
    };

    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn()>);
    if let Err(e) =
        window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for '{event}': {e:?}");
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

// =============================================================================
// Fragments
// =============================================================================

fn dom_error(value: JsValue) -> MountError {
    MountError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Parse markup into an inert fragment.
///
/// Goes through a `<template>` so scripts do not run and nothing loads
/// until the content is attached.
pub fn parse_fragment(html: &str) -> Result<DocumentFragment, MountError> {
    let document = document().ok_or_else(|| MountError::Dom("no document".to_string()))?;
    let template = document
        .create_element("template")
        .map_err(dom_error)?
        .dyn_into::<HtmlTemplateElement>()
        .map_err(|_| MountError::Dom("template element unsupported".to_string()))?;
    template.set_inner_html(html);
    Ok(template.content())
}

/// Remove every child node.
pub fn clear_children(node: &Node) -> Result<(), MountError> {
    while let Some(child) = node.first_child() {
        node.remove_child(&child).map_err(dom_error)?;
    }
    Ok(())
}

/// Replace the container's children with the fragment's top-level elements.
///
/// Top-level text and comment nodes are dropped.
pub fn replace_children(container: &Element, fragment: &DocumentFragment) -> Result<(), MountError> {
    // The collection is live; snapshot it before moving nodes out.
    let children = fragment.children();
    let elements: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();

    clear_children(container)?;
    for element in elements {
        container.append_child(&element).map_err(dom_error)?;
    }
    Ok(())
}

/// Replace the container's children with a single message element.
pub fn show_message(container: &Element, class: &str, text: &str) -> Result<(), MountError> {
    let document = container
        .owner_document()
        .ok_or_else(|| MountError::Dom("container is detached".to_string()))?;
    let message = document.create_element("div").map_err(dom_error)?;
    message.set_class_name(class);
    message.set_attribute("role", "alert").map_err(dom_error)?;
    message.set_text_content(Some(text));

    clear_children(container)?;
    container.append_child(&message).map_err(dom_error)?;
    Ok(())
}
