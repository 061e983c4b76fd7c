//! Sidebar navigation.
//!
//! Entries are real links to the canonical URL of their view, so they can
//! be opened in a new tab or copied. A plain click is intercepted and routed
//! through the navigator instead.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::ShellContext;
use crate::components::icons::menu_icon;
use crate::config::{COMPACT_MENU_QUERY, MenuItem, menu_items};

stylance::import_crate_style!(css, "src/components/menu/menu.module.css");

#[component]
pub fn Menu() -> impl IntoView {
    let compact = use_media_query(COMPACT_MENU_QUERY);

    view! {
        <nav class=css::menu aria-label="Main">
            {menu_items()
                .into_iter()
                .map(|item| view! { <MenuLink item=item compact=compact /> })
                .collect_view()}
        </nav>
    }
}

/// Whether a click should be left to the browser (new tab, download, ...).
fn is_modified(ev: &MouseEvent) -> bool {
    ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key()
}

#[component]
fn MenuLink(item: MenuItem, compact: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<ShellContext>().expect("ShellContext must be provided at root");

    let MenuItem { label, icon, view } = item;
    let href = ctx.href_for(&view);
    let title = label.clone();
    let is_active = {
        let view = view.clone();
        Memo::new(move |_| ctx.current_view.with(|current| *current == view))
    };

    let on_click = move |ev: MouseEvent| {
        if is_modified(&ev) {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&view);
    };

    view! {
        <a
            href=href
            class=move || {
                if is_active.get() { format!("{} {}", css::link, css::active) } else { css::link.to_string() }
            }
            aria-current=move || is_active.get().then_some("page")
            title=title
            on:click=on_click
        >
            <span class=css::icon><Icon icon=menu_icon(&icon) /></span>
            {move || (!compact.get()).then(|| view! { <span class=css::label>{label.clone()}</span> })}
        </a>
    }
}
