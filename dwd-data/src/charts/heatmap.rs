//! Geography × religion percentage matrix for the heatmap.

use super::{group_religion_totals, grouping_level, ChartData};
use crate::filter::{GeoLevel, Selection, Subset};
use dwd_utils::numbers::{ratio_or_zero, round2};
use serde::Serialize;

/// Colours of the five legend bands, lightest first.
pub const HEATMAP_COLORS: [&str; 5] = ["#B3E5FC", "#81D4FA", "#4FC3F7", "#29B6F6", "#0288D1"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub religion: String,
    /// Share of the group's total, 2 decimals.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub group: String,
    pub total: u64,
    pub cells: Vec<HeatmapCell>,
}

impl HeatmapRow {
    pub fn percentage_sum(&self) -> f64 {
        self.cells.iter().map(|c| c.percentage).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBand {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    /// Level the rows are grouped by.
    pub level: GeoLevel,
    /// Column order: every religion in the subset, first-seen.
    pub religions: Vec<String>,
    pub rows: Vec<HeatmapRow>,
    pub legend: Vec<ColorBand>,
}

pub fn geography_religion_heatmap(subset: &Subset, selection: &Selection) -> ChartData<Heatmap> {
    if subset.is_empty() {
        return ChartData::NoData;
    }
    let level = grouping_level(selection);
    let groups = group_religion_totals(subset, level);

    let mut religions: Vec<String> = Vec::new();
    for (_, totals) in &groups {
        for religion in totals.keys() {
            if !religions.contains(religion) {
                religions.push(religion.clone());
            }
        }
    }

    let rows: Vec<HeatmapRow> = groups
        .iter()
        .map(|(group, totals)| {
            let total = totals.grand_total();
            let cells = religions
                .iter()
                .map(|religion| HeatmapCell {
                    religion: religion.clone(),
                    percentage: round2(
                        ratio_or_zero(totals.get(religion) as f64, total as f64) * 100.0,
                    ),
                })
                .collect();
            HeatmapRow {
                group: group.clone(),
                total,
                cells,
            }
        })
        .collect();

    let legend = color_scale(rows.iter().flat_map(|r| r.cells.iter().map(|c| c.percentage)));

    ChartData::Ready(Heatmap {
        level,
        religions,
        rows,
        legend,
    })
}

/// Split the [min, max] range of all cell values into five equal bands.
pub fn color_scale<I: IntoIterator<Item = f64>>(values: I) -> Vec<ColorBand> {
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return Vec::new();
    }
    let step = (max - min) / HEATMAP_COLORS.len() as f64;
    HEATMAP_COLORS
        .iter()
        .enumerate()
        .map(|(i, &color)| ColorBand {
            from: min + step * i as f64,
            to: if i + 1 == HEATMAP_COLORS.len() {
                max
            } else {
                min + step * (i + 1) as f64
            },
            color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwd_pow::{Entity, LocationType, ReligiousEntry};

    fn sample() -> Vec<Entity> {
        vec![
            Entity::new(
                LocationType::Metropolitan,
                "Bretagne",
                "Finistère",
                "Brest",
                vec![
                    ReligiousEntry::new("Christianity", "Catholic", 2),
                    ReligiousEntry::new("Islam", "Sunni", 1),
                ],
            ),
            Entity::new(
                LocationType::Metropolitan,
                "Bretagne",
                "Morbihan",
                "Vannes",
                vec![ReligiousEntry::new("Christianity", "Catholic", 3)],
            ),
            Entity::new(
                LocationType::Metropolitan,
                "Corse",
                "Haute-Corse",
                "Bastia",
                vec![
                    ReligiousEntry::new("Judaism", "", 1),
                    ReligiousEntry::new("Christianity", "Catholic", 3),
                ],
            ),
        ]
    }

    #[test]
    fn test_percentages_by_region() {
        let entities = sample();
        let selection = Selection::new(LocationType::Metropolitan);
        let heatmap = geography_religion_heatmap(&Subset::all(&entities), &selection);
        let heatmap = heatmap.ready().unwrap();

        assert_eq!(heatmap.level, GeoLevel::Region);
        assert_eq!(heatmap.religions, vec!["Christianity", "Islam", "Judaism"]);
        assert_eq!(heatmap.rows.len(), 2);

        let bretagne = &heatmap.rows[0];
        assert_eq!(bretagne.group, "Bretagne");
        assert_eq!(bretagne.total, 6);
        let values: Vec<f64> = bretagne.cells.iter().map(|c| c.percentage).collect();
        assert_eq!(values, vec![83.33, 16.67, 0.0]);

        let corse = &heatmap.rows[1];
        let values: Vec<f64> = corse.cells.iter().map(|c| c.percentage).collect();
        assert_eq!(values, vec![75.0, 0.0, 25.0]);
    }

    #[test]
    fn test_rows_sum_to_hundred() {
        let entities = sample();
        let selection = Selection::new(LocationType::Metropolitan).with_department("Finistère");
        let heatmap = geography_religion_heatmap(&Subset::all(&entities), &selection);
        let heatmap = heatmap.ready().unwrap();
        assert_eq!(heatmap.level, GeoLevel::Department);
        for row in &heatmap.rows {
            assert!((row.percentage_sum() - 100.0).abs() <= 0.1, "{}", row.group);
        }
    }

    #[test]
    fn test_unnamed_religions_are_not_a_column() {
        let entities = vec![
            Entity::new(
                LocationType::Metropolitan,
                "Bretagne",
                "Finistère",
                "Brest",
                vec![
                    ReligiousEntry::new("Christianity", "Catholic", 3),
                    ReligiousEntry::new("", "X", 5),
                    ReligiousEntry::new("Islam", "Sunni", 1),
                ],
            ),
            Entity::new(
                LocationType::Metropolitan,
                "Corse",
                "Haute-Corse",
                "Bastia",
                vec![
                    ReligiousEntry::new("", "X", 7),
                    ReligiousEntry::new("Christianity", "Catholic", 2),
                ],
            ),
        ];
        let selection = Selection::new(LocationType::Metropolitan);
        let heatmap = geography_religion_heatmap(&Subset::all(&entities), &selection);
        let heatmap = heatmap.ready().unwrap();

        assert_eq!(heatmap.religions, vec!["Christianity", "Islam"]);
        assert_eq!(heatmap.rows[0].total, 4);
        assert_eq!(heatmap.rows[1].total, 2);
        for row in &heatmap.rows {
            assert!(row.cells.iter().all(|c| !c.religion.is_empty()));
            assert!((row.percentage_sum() - 100.0).abs() <= 0.1, "{}", row.group);
        }
    }

    #[test]
    fn test_groups_by_city_when_city_selected() {
        let entities = sample();
        let selection = Selection::new(LocationType::Metropolitan).with_city("Brest");
        let heatmap = geography_religion_heatmap(&Subset::all(&entities[..1]), &selection);
        let heatmap = heatmap.ready().unwrap();
        assert_eq!(heatmap.level, GeoLevel::City);
        assert_eq!(heatmap.rows[0].group, "Brest");
    }

    #[test]
    fn test_legend_spans_min_to_max() {
        let entities = sample();
        let selection = Selection::new(LocationType::Metropolitan);
        let heatmap = geography_religion_heatmap(&Subset::all(&entities), &selection);
        let legend = &heatmap.ready().unwrap().legend;

        assert_eq!(legend.len(), 5);
        assert_eq!(legend[0].from, 0.0);
        assert_eq!(legend[4].to, 83.33);
        assert_eq!(legend[0].color, "#B3E5FC");
        for pair in legend.windows(2) {
            assert!((pair[0].to - pair[1].from).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_total_group_has_zero_cells() {
        let entities = vec![Entity::new(
            LocationType::Metropolitan,
            "A",
            "A1",
            "A1a",
            vec![ReligiousEntry::new("Christianity", "Catholic", 0)],
        )];
        let selection = Selection::new(LocationType::Metropolitan);
        let heatmap = geography_religion_heatmap(&Subset::all(&entities), &selection);
        let heatmap = heatmap.ready().unwrap();
        assert_eq!(heatmap.rows[0].cells[0].percentage, 0.0);
        assert_eq!(heatmap.legend[0].from, 0.0);
        assert_eq!(heatmap.legend[4].to, 0.0);
    }

    #[test]
    fn test_color_scale_without_values() {
        assert!(color_scale(Vec::new()).is_empty());
    }

    #[test]
    fn test_empty_subset_is_no_data() {
        let selection = Selection::default();
        assert!(geography_religion_heatmap(&Subset::default(), &selection).is_no_data());
    }
}
