//! One-shot recomputation of everything the dashboard shows.
//!
//! Called after every selection change. Nothing is cached between calls; the
//! previous view is simply replaced.

use crate::charts::{
    diversity_by_geography, geography_religion_heatmap, religion_denomination_matrix,
    top_religions, ChartData, DenominationMatrix, GroupDiversity, Heatmap, ReligionTotal,
    TOP_RELIGIONS,
};
use crate::filter::{apply, Selection};
use crate::filter_state::{CascadingOptions, FilterState};
use crate::kpi::{compute_kpis, Kpis};
use dwd_pow::Dataset;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub options: CascadingOptions,
    /// Number of locations left after filtering.
    pub entity_count: usize,
    pub kpis: Kpis,
    pub top_religions: ChartData<Vec<ReligionTotal>>,
    pub denominations: ChartData<DenominationMatrix>,
    pub heatmap: ChartData<Heatmap>,
    pub diversity: ChartData<Vec<GroupDiversity>>,
}

pub fn recompute(dataset: &Dataset, filters: &FilterState) -> DashboardView {
    let selection = filters.selection();
    let subset = apply(dataset, selection);
    log::debug!("pipeline: Recomputing dashboard over {} locations", subset.len());

    DashboardView {
        selection: selection.clone(),
        options: filters.options(dataset),
        entity_count: subset.len(),
        kpis: compute_kpis(&subset),
        top_religions: top_religions(&subset, TOP_RELIGIONS),
        denominations: religion_denomination_matrix(&subset, TOP_RELIGIONS),
        heatmap: geography_religion_heatmap(&subset, selection),
        diversity: diversity_by_geography(&subset, selection),
    }
}
