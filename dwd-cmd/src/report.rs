//! JSON reports printed by the `kpis`, `options` and `chart` commands.

use crate::ChartKind;
use dwd_data::charts::{
    diversity_by_geography, geography_religion_heatmap, religion_denomination_matrix,
    top_religions,
};
use dwd_data::filter::apply;
use dwd_data::filter_state::FilterState;
use dwd_data::kpi::compute_kpis;
use dwd_pow::Dataset;
use serde::Serialize;
use std::io::Write;

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_kpis<W: Write>(out: &mut W, dataset: &Dataset, filters: &FilterState) -> anyhow::Result<()> {
    let subset = apply(dataset, filters.selection());
    write_json(out, &compute_kpis(&subset))
}

pub fn write_options<W: Write>(out: &mut W, dataset: &Dataset, filters: &FilterState) -> anyhow::Result<()> {
    write_json(out, &filters.options(dataset))
}

pub fn write_chart<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    filters: &FilterState,
    kind: ChartKind,
    top: usize,
) -> anyhow::Result<()> {
    let selection = filters.selection();
    let subset = apply(dataset, selection);
    match kind {
        ChartKind::Bar => write_json(out, &top_religions(&subset, top)),
        ChartKind::Bubble => write_json(out, &religion_denomination_matrix(&subset, top)),
        ChartKind::Heatmap => write_json(out, &geography_religion_heatmap(&subset, selection)),
        ChartKind::Diversity => write_json(out, &diversity_by_geography(&subset, selection)),
    }
}
