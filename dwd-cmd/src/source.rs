//! Dataset loading and selection flags.

use crate::SelectionArgs;
use anyhow::Context;
use dwd_data::filter::GeoLevel;
use dwd_data::filter_state::FilterState;
use dwd_pow::Dataset;
use log::info;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load the dataset from a local file or over HTTP.
pub async fn load_dataset(source: &str) -> anyhow::Result<Dataset> {
    let dataset = if is_url(source) {
        Dataset::fetch(source)
            .await
            .with_context(|| format!("Failed to fetch dataset from {}", source))?
    } else {
        Dataset::load_path(source)
            .with_context(|| format!("Failed to read dataset {}", source))?
    };
    info!("Loaded {} locations from {}", dataset.len(), source);
    Ok(dataset)
}

/// Build the filter state the flags describe.
///
/// Levels are set coarse to fine, exactly as a user would pick them in the
/// dashboard's dropdowns.
pub fn filter_state(dataset: &Dataset, args: &SelectionArgs) -> FilterState {
    let mut state = FilterState::new();
    state.set_overseas(args.overseas);
    let levels = [
        (GeoLevel::Country, &args.country),
        (GeoLevel::Region, &args.region),
        (GeoLevel::Department, &args.department),
        (GeoLevel::City, &args.city),
    ];
    for (level, value) in levels {
        if let Some(value) = value {
            state.set_level(dataset, level, value);
        }
    }
    state
}
