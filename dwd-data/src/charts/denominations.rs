//! Religion × denomination matrix for the bubble/scatter chart.

use super::ChartData;
use crate::filter::Subset;
use crate::totals::religion_totals;
use dwd_utils::labels::capitalize_first;
use dwd_utils::numbers::saturating_sum;
use serde::Serialize;
use std::collections::HashMap;

/// One (religion, denomination) cell. `None` means no data, not zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixPoint {
    pub denomination: String,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenominationRow {
    pub religion: String,
    /// Series name shown in the legend.
    pub label: String,
    pub points: Vec<MatrixPoint>,
}

impl DenominationRow {
    /// Sum over cells with data; no-data cells are excluded.
    pub fn total(&self) -> u64 {
        saturating_sum(self.points.iter().filter_map(|p| p.count))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenominationMatrix {
    /// Column order, first-seen.
    pub denominations: Vec<String>,
    pub rows: Vec<DenominationRow>,
}

/// Cross-tabulate the top religions against every denomination in the subset.
///
/// Religion matching is case-insensitive. A religion whose cells are all
/// empty is dropped from the matrix.
pub fn religion_denomination_matrix(subset: &Subset, limit: usize) -> ChartData<DenominationMatrix> {
    if subset.is_empty() {
        return ChartData::NoData;
    }

    let mut denominations: Vec<String> = Vec::new();
    let mut cells: HashMap<(String, String), u64> = HashMap::new();
    for entity in subset.iter() {
        for entry in &entity.details.religious_data {
            if entry.denomination.is_empty() {
                continue;
            }
            if !denominations.contains(&entry.denomination) {
                denominations.push(entry.denomination.clone());
            }
            if entry.has_religion() {
                let cell = cells
                    .entry((entry.religion.to_lowercase(), entry.denomination.clone()))
                    .or_default();
                *cell = cell.saturating_add(entry.count);
            }
        }
    }

    let rows = religion_totals(subset)
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(religion, _)| {
            let key = religion.to_lowercase();
            let points = denominations
                .iter()
                .map(|denomination| MatrixPoint {
                    denomination: denomination.clone(),
                    count: cells
                        .get(&(key.clone(), denomination.clone()))
                        .copied()
                        .filter(|&count| count > 0),
                })
                .collect();
            DenominationRow {
                label: capitalize_first(&religion),
                religion,
                points,
            }
        })
        .filter(|row| row.points.iter().any(|p| p.count.is_some()))
        .collect();

    ChartData::Ready(DenominationMatrix { denominations, rows })
}
