//! Metropolitan / overseas switch.

use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox toggling between the two location partitions.
#[component]
pub fn LocationToggle() -> Element {
    let mut state = use_context::<AppState>();
    let is_overseas = state.filters.read().location().is_overseas();

    let on_change = move |evt: Event<FormData>| {
        state.filters.write().set_overseas(evt.checked());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: is_overseas,
                    onchange: on_change,
                }
                " French Overseas Territories"
            }
        }
    }
}
