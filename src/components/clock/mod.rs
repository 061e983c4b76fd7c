//! Header clock, refreshed every second.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsValue;

use crate::components::icons as ic;
use crate::config::{CLOCK_INTERVAL_MS, CLOCK_LOCALE};

stylance::import_crate_style!(css, "src/components/clock/clock.module.css");

/// Current local time formatted for [`CLOCK_LOCALE`].
fn now() -> String {
    js_sys::Date::new_0()
        .to_locale_string(CLOCK_LOCALE, &JsValue::UNDEFINED)
        .into()
}

#[component]
pub fn Clock() -> impl IntoView {
    let time = RwSignal::new(now());

    // The header lives as long as the page
    Interval::new(CLOCK_INTERVAL_MS, move || time.set(now())).forget();

    view! {
        <span class=css::clock>
            <span class=css::icon><Icon icon=ic::CLOCK /></span>
            <time>{move || time.get()}</time>
        </span>
    }
}
