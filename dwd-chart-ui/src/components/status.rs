//! Placeholders shown while the dataset is not ready.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading places of worship..."
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DataUnavailableProps {
    pub message: String,
}

/// Shown in place of the dashboard when the dataset could not be loaded.
#[component]
pub fn DataUnavailable(props: DataUnavailableProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Data unavailable: " }
            "{props.message}"
        }
    }
}
