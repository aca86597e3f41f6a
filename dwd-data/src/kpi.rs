//! Scalar KPI summaries of a filtered subset.

use crate::diversity::shannon_index;
use crate::filter::Subset;
use crate::totals::religion_totals;
use dwd_utils::numbers::{ratio_or_zero, saturating_sum, Fixed2};
use serde::Serialize;

/// The four KPI boxes of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    /// Total places of worship over every religious entry.
    pub places_of_worship: u64,
    /// Places of worship per location in the subset.
    pub average_place_of_worship: Fixed2,
    /// Nationally registered heritage sites.
    pub unesco_registered: u64,
    /// Shannon diversity over religion totals.
    pub diversity_index: Fixed2,
}

impl Default for Kpis {
    fn default() -> Self {
        Self {
            places_of_worship: 0,
            average_place_of_worship: Fixed2::ZERO,
            unesco_registered: 0,
            diversity_index: Fixed2::ZERO,
        }
    }
}

pub fn compute_kpis(subset: &Subset) -> Kpis {
    let places_of_worship = saturating_sum(subset.iter().map(|e| e.total_count()));
    let unesco_registered =
        saturating_sum(subset.iter().map(|e| e.details.inscription_date_count));
    let religions = religion_totals(subset);

    Kpis {
        places_of_worship,
        average_place_of_worship: Fixed2::new(ratio_or_zero(
            places_of_worship as f64,
            subset.len() as f64,
        )),
        unesco_registered,
        diversity_index: Fixed2::new(shannon_index(religions.counts())),
    }
}
