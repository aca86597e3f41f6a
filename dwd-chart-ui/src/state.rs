//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The filter selection is an explicit value here; aggregators receive it as an
//! argument rather than reading any ambient state.

use dioxus::prelude::*;
use dwd_data::filter::GeoLevel;
use dwd_data::filter_state::FilterState;
use dwd_pow::{Dataset, DatasetSlot};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset load state (loading, ready, unavailable), last write wins
    pub dataset: Signal<DatasetSlot>,
    /// Current location class and geographic selection
    pub filters: Signal<FilterState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(DatasetSlot::new()),
            filters: Signal::new(FilterState::new()),
        }
    }

    /// The loaded dataset, or an empty one while loading or unavailable.
    pub fn current_dataset(&self) -> Dataset {
        self.dataset.read().dataset()
    }

    /// Set one geographic level, applying the cascading rules.
    pub fn select(&mut self, level: GeoLevel, value: &str) {
        let dataset = self.current_dataset();
        self.filters.write().set_level(&dataset, level, value);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
