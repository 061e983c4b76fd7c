use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::PageMount;
use crate::utils::{placeholder_color, placeholder_text};

/// Marks an element to receive placeholder artwork. The value is the seed.
pub const PLACEHOLDER_ATTRIBUTE: &str = "data-placeholder";

/// Paints `[data-placeholder]` elements with a seeded gradient and, when
/// they are empty, the seed's initial.
pub struct AvatarPlaceholders;

impl PageMount for AvatarPlaceholders {
    fn mount(&self, container: &Element) {
        let selector = format!("[{PLACEHOLDER_ATTRIBUTE}]");
        let nodes = match container.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("placeholder query failed: {e:?}");
                return;
            }
        };

        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let seed = element.get_attribute(PLACEHOLDER_ATTRIBUTE).unwrap_or_default();

            if let Err(e) = element
                .style()
                .set_property("background", &placeholder_color(&seed))
            {
                log::warn!("avatar background not applied: {e:?}");
            }
            let empty = element
                .text_content()
                .is_none_or(|text| text.trim().is_empty());
            if empty {
                element.set_text_content(Some(&placeholder_text(&seed)));
            }
        }
    }
}
