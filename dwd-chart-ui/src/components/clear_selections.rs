use crate::state::AppState;
use dioxus::prelude::*;

/// Resets country, region, department and city. The location toggle is left alone.
#[component]
pub fn ClearSelections() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            style: "margin-top: 12px; padding: 6px 12px; cursor: pointer;",
            onclick: move |_| state.filters.write().clear_selections(),
            "Clear selections"
        }
    }
}
