//! Top-religion ranking for the bar chart.

use super::ChartData;
use crate::filter::Subset;
use crate::totals::religion_totals;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReligionTotal {
    pub religion: String,
    pub total: u64,
}

/// The `limit` religions with the most places of worship, largest first.
///
/// Ties keep the order in which religions first appear in the subset. Fewer
/// religions than `limit` yields exactly that many pairs, never padding.
pub fn top_religions(subset: &Subset, limit: usize) -> ChartData<Vec<ReligionTotal>> {
    if subset.is_empty() {
        return ChartData::NoData;
    }
    let ranked = religion_totals(subset)
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(religion, total)| ReligionTotal { religion, total })
        .collect();
    ChartData::Ready(ranked)
}
