//! Chart aggregators.
//!
//! Each reducer takes the filtered subset and returns [`ChartData::NoData`]
//! when the subset is empty, so "nothing matched" stays distinguishable from
//! a subset that legitimately totals zero.

mod denominations;
mod diversity;
mod heatmap;
mod top_religions;

pub use denominations::{religion_denomination_matrix, DenominationMatrix, DenominationRow, MatrixPoint};
pub use diversity::{diversity_by_geography, GroupDiversity};
pub use heatmap::{geography_religion_heatmap, ColorBand, Heatmap, HeatmapCell, HeatmapRow, HEATMAP_COLORS};
pub use top_religions::{top_religions, ReligionTotal};

use crate::filter::{GeoLevel, Selection, Subset};
use crate::totals::OrderedTotals;
use serde::Serialize;
use std::collections::HashMap;

/// How many religions the bar and bubble charts keep.
pub const TOP_RELIGIONS: usize = 5;

/// Label for records whose grouping field is blank.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// A chart result, or an explicit marker that the subset was empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ChartData<T> {
    NoData,
    Ready(T),
}

impl<T> ChartData<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartData::NoData)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartData::Ready(data) => Some(data),
            ChartData::NoData => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ChartData<U> {
        match self {
            ChartData::Ready(data) => ChartData::Ready(f(data)),
            ChartData::NoData => ChartData::NoData,
        }
    }
}

/// Geographic level the heatmap and diversity chart bucket by.
///
/// City when a city is selected, else department when a department is
/// selected, else region.
pub fn grouping_level(selection: &Selection) -> GeoLevel {
    if selection.city.is_some() {
        GeoLevel::City
    } else if selection.department.is_some() {
        GeoLevel::Department
    } else {
        GeoLevel::Region
    }
}

/// Religion totals per geographic group, both in first-seen order.
///
/// A group only appears once it has at least one entry with a religion.
pub(crate) fn group_religion_totals(subset: &Subset, level: GeoLevel) -> Vec<(String, OrderedTotals)> {
    let mut groups: Vec<(String, OrderedTotals)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entity in subset.iter() {
        let group = match level.value_of(entity) {
            "" => UNKNOWN_GROUP,
            name => name,
        };
        for entry in entity.details.religious_data.iter().filter(|e| e.has_religion()) {
            let slot = *index.entry(group.to_string()).or_insert_with(|| {
                groups.push((group.to_string(), OrderedTotals::new()));
                groups.len() - 1
            });
            groups[slot].1.add(&entry.religion, entry.count);
        }
    }
    groups
}
