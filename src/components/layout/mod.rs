//! Fixed application frame.
//!
//! Rendered once. Navigation only swaps the children of the [`Outlet`].

use leptos::html::Main;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::clock::Clock;
use crate::components::icons as ic;
use crate::components::menu::Menu;
use crate::components::outlet::Outlet;
use crate::config::{APP_NAME, GUEST_NAME};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Layout(container: NodeRef<Main>) -> impl IntoView {
    view! {
        <div class=css::layout>
            <header class=css::header>
                <span class=css::brand>{APP_NAME}</span>
                <div class=css::meta>
                    <Clock />
                    <span class=css::user>
                        <Icon icon=ic::USER />
                        <span>{GUEST_NAME}</span>
                    </span>
                </div>
            </header>
            <aside class=css::sidebar>
                <Menu />
            </aside>
            <Outlet container=container />
        </div>
    }
}
