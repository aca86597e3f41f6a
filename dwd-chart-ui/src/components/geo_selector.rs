//! Dropdown for one level of the geographic hierarchy.

use crate::state::AppState;
use dioxus::prelude::*;
use dwd_data::filter::GeoLevel;

#[derive(Props, Clone, PartialEq)]
pub struct GeoSelectorProps {
    pub level: GeoLevel,
    /// Values currently offered at this level
    pub options: Vec<String>,
}

/// Selecting the empty "All" entry clears the level.
#[component]
pub fn GeoSelector(props: GeoSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let level = props.level;
    let selected = state
        .filters
        .read()
        .selection()
        .get(level)
        .map(str::to_string)
        .unwrap_or_default();
    let select_id = format!("{}-select", level.label().to_lowercase());

    let on_change = move |evt: Event<FormData>| {
        state.select(level, &evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{select_id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{level.label()}"
            }
            select {
                id: "{select_id}",
                style: "width: 100%;",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All"
                }
                for value in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == selected,
                        "{value}"
                    }
                }
            }
        }
    }
}
