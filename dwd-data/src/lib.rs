//! Filtering and aggregation pipeline for the places-of-worship dashboard.
//!
//! Every output is re-derived from the raw dataset and the current selection:
//!
//! 1. [`filter::apply`] narrows the dataset to a [`filter::Subset`].
//! 2. [`kpi::compute_kpis`] reduces it to four scalars.
//! 3. The reducers in [`charts`] build the bar, bubble, heatmap and
//!    diversity series.
//!
//! [`pipeline::recompute`] runs all of it in one call.
//!
//! # Usage
//!
//! ```rust
//! use dwd_data::filter_state::FilterState;
//! use dwd_data::pipeline::recompute;
//! use dwd_pow::Dataset;
//!
//! let dataset = Dataset::from_json_str(r#"[
//!   {"Location_Type": "Metropolitan France",
//!    "Details": {"Region": "A", "Department_Name": "A1", "City": "A1a",
//!                "Religious_Data": [{"Religion_Grouped": "Christian", "Count": 10}]}},
//!   {"Location_Type": "Metropolitan France",
//!    "Details": {"Region": "A", "Department_Name": "A1", "City": "A1b",
//!                "Religious_Data": [{"Religion_Grouped": "Muslim", "Count": 5}]}}
//! ]"#).unwrap();
//!
//! let mut filters = FilterState::new();
//! filters.set_region(&dataset, "A");
//!
//! let view = recompute(&dataset, &filters);
//! assert_eq!(view.kpis.places_of_worship, 15);
//! assert_eq!(view.kpis.diversity_index.to_string(), "0.64");
//! ```

pub mod charts;
pub mod diversity;
pub mod filter;
pub mod filter_state;
pub mod kpi;
pub mod pipeline;
pub mod totals;
