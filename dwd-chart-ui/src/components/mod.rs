//! Reusable Dioxus RSX components for the dashboard.

mod chart_panel;
mod clear_selections;
mod geo_selector;
mod kpi_box;
mod location_toggle;
mod page_header;
mod status;

pub use chart_panel::ChartPanel;
pub use clear_selections::ClearSelections;
pub use geo_selector::GeoSelector;
pub use kpi_box::KpiBox;
pub use location_toggle::LocationToggle;
pub use page_header::PageHeader;
pub use status::{DataUnavailable, LoadingSpinner};
