//! Places of Worship dashboard
//!
//! Data flow:
//! 1. On mount: load the D3 scripts and fetch the exported dataset once.
//! 2. Every change to the dataset or the filters recomputes the whole
//!    [`DashboardView`] (options, KPIs, four charts).
//! 3. A render effect hands each chart's JSON to D3, or clears the container
//!    when the filtered subset is empty.

use dioxus::prelude::*;
use dwd_chart_ui::components::{
    ChartPanel, ClearSelections, DataUnavailable, GeoSelector, KpiBox, LoadingSpinner,
    LocationToggle, PageHeader,
};
use dwd_chart_ui::loader::fetch_dataset;
use dwd_chart_ui::js_bridge;
use dwd_chart_ui::state::AppState;
use dwd_data::charts::{grouping_level, ChartData};
use dwd_data::filter::GeoLevel;
use dwd_data::pipeline::{recompute, DashboardView};
use dwd_pow::{LoadState, DATASET_PATH};
use serde::Serialize;

const BAR_CHART_ID: &str = "pow-bar-chart";
const BUBBLE_CHART_ID: &str = "pow-bubble-chart";
const HEATMAP_ID: &str = "pow-heatmap";
const DIVERSITY_CHART_ID: &str = "pow-diversity-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("place-of-worship-root"))
        .launch(App);
}

/// Chart titles for the current location class and grouping level.
struct ChartTitles {
    bar: String,
    bubble: String,
    heatmap: String,
    diversity: String,
}

impl ChartTitles {
    fn for_view(view: &DashboardView) -> Self {
        let location = view.selection.location.short_label();
        let level = grouping_level(&view.selection).label();
        Self {
            bar: format!("Top Religions by Places of Worship ({location})"),
            bubble: format!("Religion vs Denomination ({location})"),
            heatmap: format!("Religion Distribution by {level} ({location})"),
            diversity: format!("Religious Diversity by {level} ({location})"),
        }
    }
}

/// Render `chart` into `container_id`, or clear the container when there is no data.
fn render_or_clear<T: Serialize>(
    chart: &ChartData<T>,
    container_id: &str,
    config: serde_json::Value,
    render: fn(&str, &str, &str),
) {
    match chart {
        ChartData::NoData => js_bridge::destroy_chart(container_id),
        ChartData::Ready(data) => match serde_json::to_string(data) {
            Ok(data_json) => render(container_id, &data_json, &config.to_string()),
            Err(e) => log::error!("dashboard: Failed to serialize {}: {}", container_id, e),
        },
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: load chart scripts and fetch the dataset once ───
    use_effect(move || {
        js_bridge::init_charts();
        let ticket = state.dataset.write().begin_fetch();
        spawn(async move {
            let result = fetch_dataset(DATASET_PATH).await;
            state.dataset.write().resolve(ticket, result);
        });
    });

    // Recomputed whenever the dataset slot or the filters change.
    let view = use_memo(move || recompute(&state.current_dataset(), &state.filters.read()));

    // ─── Effect 2: push every chart to D3 ───
    use_effect(move || {
        if !matches!(state.dataset.read().state(), LoadState::Ready(_)) {
            return;
        }
        let view = view.read();
        let titles = ChartTitles::for_view(&view);

        render_or_clear(
            &view.top_religions,
            BAR_CHART_ID,
            serde_json::json!({
                "title": titles.bar,
                "yAxisLabel": "Places of Worship",
                "barColor": "#008FFB",
            }),
            js_bridge::render_bar_chart,
        );
        render_or_clear(
            &view.denominations,
            BUBBLE_CHART_ID,
            serde_json::json!({ "title": titles.bubble }),
            js_bridge::render_bubble_chart,
        );
        render_or_clear(
            &view.heatmap,
            HEATMAP_ID,
            serde_json::json!({ "title": titles.heatmap }),
            js_bridge::render_heatmap,
        );
        render_or_clear(
            &view.diversity,
            DIVERSITY_CHART_ID,
            serde_json::json!({
                "title": titles.diversity,
                "yAxisLabel": "Diversity Index",
                "barColor": "#775DD0",
            }),
            js_bridge::render_diversity_chart,
        );
    });

    let load_state = state.dataset.read().state().clone();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {
                title: "Places of Worship in France".to_string(),
                subtitle: view.read().selection.location.label().to_string(),
            }

            match load_state {
                LoadState::Loading => rsx! { LoadingSpinner {} },
                LoadState::Unavailable(message) => rsx! { DataUnavailable { message } },
                LoadState::Ready(_) => rsx! { Dashboard { view: view() } },
            }
        }
    }
}

/// Filters sidebar, KPI row and the four chart panels.
#[component]
fn Dashboard(view: DashboardView) -> Element {
    let titles = ChartTitles::for_view(&view);

    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: flex-start;",

            aside {
                style: "width: 240px; flex-shrink: 0; padding: 12px; background: #fafafa; border: 1px solid #e0e0e0; border-radius: 6px;",
                LocationToggle {}
                for level in GeoLevel::ALL {
                    GeoSelector {
                        key: "{level.label()}",
                        level,
                        options: view.options.for_level(level).to_vec(),
                    }
                }
                ClearSelections {}
            }

            main {
                style: "flex: 1; min-width: 0;",
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 16px;",
                    KpiBox {
                        title: "Places of Worship".to_string(),
                        value: view.kpis.places_of_worship.to_string(),
                    }
                    KpiBox {
                        title: "Average Place of Worship".to_string(),
                        value: view.kpis.average_place_of_worship.to_string(),
                    }
                    KpiBox {
                        title: "UNESCO Registered".to_string(),
                        value: view.kpis.unesco_registered.to_string(),
                    }
                    KpiBox {
                        title: "Diversity Index".to_string(),
                        value: view.kpis.diversity_index.to_string(),
                    }
                }
                ChartPanel {
                    id: BAR_CHART_ID.to_string(),
                    title: titles.bar,
                    no_data: view.top_religions.is_no_data(),
                }
                ChartPanel {
                    id: BUBBLE_CHART_ID.to_string(),
                    title: titles.bubble,
                    no_data: view.denominations.is_no_data(),
                    min_height: 420,
                }
                ChartPanel {
                    id: HEATMAP_ID.to_string(),
                    title: titles.heatmap,
                    no_data: view.heatmap.is_no_data(),
                    min_height: 420,
                }
                ChartPanel {
                    id: DIVERSITY_CHART_ID.to_string(),
                    title: titles.diversity,
                    no_data: view.diversity.is_no_data(),
                }
            }
        }
    }
}
