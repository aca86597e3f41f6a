//! Titled container a D3 chart renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// The DOM id D3 renders into
    pub id: String,
    pub title: String,
    /// Show the "No data available" notice instead of the chart
    #[props(default = false)]
    pub no_data: bool,
    #[props(default = 380)]
    pub min_height: u32,
}

/// A card holding one chart. The chart div stays mounted while `no_data` is
/// set so the next render has somewhere to draw.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            class: "dwd-chart-panel",
            style: "background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px; margin-bottom: 16px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "{props.title}"
            }
            div {
                style: "{style}",
                if props.no_data {
                    div {
                        style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                        "No data available"
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
