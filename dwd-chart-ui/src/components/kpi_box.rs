use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct KpiBoxProps {
    pub title: String,
    /// Already formatted for display
    pub value: String,
}

#[component]
pub fn KpiBox(props: KpiBoxProps) -> Element {
    rsx! {
        div {
            class: "dwd-kpi",
            style: "flex: 1; min-width: 160px; background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px; text-align: center;",
            div {
                style: "font-size: 12px; color: #666; margin-bottom: 4px;",
                "{props.title}"
            }
            div {
                style: "font-size: 22px; font-weight: bold; color: #304758;",
                "{props.value}"
            }
        }
    }
}
