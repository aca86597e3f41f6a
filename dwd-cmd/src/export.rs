//! CSV export of the filtered locations.

use dwd_data::filter::apply;
use dwd_data::filter_state::FilterState;
use dwd_pow::Dataset;
use log::info;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    country: &'a str,
    location_type: &'static str,
    region: &'a str,
    department: &'a str,
    city: &'a str,
    religion: &'a str,
    denomination: &'a str,
    count: u64,
    inscription_date_count: u64,
}

/// Write one row per religious entry of the filtered subset.
///
/// Returns the number of rows written.
pub fn write_csv<W: Write>(writer: W, dataset: &Dataset, filters: &FilterState) -> anyhow::Result<usize> {
    let subset = apply(dataset, filters.selection());
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for entity in subset.iter() {
        let details = &entity.details;
        for entry in &details.religious_data {
            wtr.serialize(ExportRow {
                country: &entity.country,
                location_type: entity.location_type.label(),
                region: &details.region,
                department: &details.department,
                city: &details.city,
                religion: &entry.religion,
                denomination: &entry.denomination,
                count: entry.count,
                inscription_date_count: details.inscription_date_count,
            })?;
            rows += 1;
        }
    }
    wtr.flush()?;
    Ok(rows)
}

pub fn export_csv(output: &str, dataset: &Dataset, filters: &FilterState) -> anyhow::Result<()> {
    let file = std::fs::File::create(output)?;
    let rows = write_csv(file, dataset, filters)?;
    info!("Export complete. {} rows written to {}", rows, output);
    Ok(())
}
