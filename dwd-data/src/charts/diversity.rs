//! Diversity-by-geography ranking for the diversity bar chart.

use super::{group_religion_totals, grouping_level, ChartData};
use crate::diversity::shannon_index;
use crate::filter::{Selection, Subset};
use dwd_utils::numbers::round2;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDiversity {
    pub group: String,
    /// Shannon index over the group's religion totals, 2 decimals.
    pub diversity_index: f64,
    /// Places of worship in the group, shown in the tooltip.
    pub total: u64,
}

/// Diversity index per geographic group, least diverse first.
///
/// Groups use the same level as the heatmap; equal indices keep first-seen order.
pub fn diversity_by_geography(subset: &Subset, selection: &Selection) -> ChartData<Vec<GroupDiversity>> {
    if subset.is_empty() {
        return ChartData::NoData;
    }
    let mut ranking: Vec<(f64, GroupDiversity)> =
        group_religion_totals(subset, grouping_level(selection))
            .into_iter()
            .map(|(group, totals)| {
                let index = shannon_index(totals.counts());
                let diversity = GroupDiversity {
                    diversity_index: round2(index),
                    total: totals.grand_total(),
                    group,
                };
                (index, diversity)
            })
            .collect();
    // Rank on the exact index; rounding is for display only.
    ranking.sort_by(|a, b| a.0.total_cmp(&b.0));
    ChartData::Ready(ranking.into_iter().map(|(_, diversity)| diversity).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwd_pow::{Entity, LocationType, ReligiousEntry};

    fn region(name: &str, entries: Vec<ReligiousEntry>) -> Entity {
        Entity::new(LocationType::Metropolitan, name, "", "", entries)
    }

    #[test]
    fn test_sorted_least_diverse_first() {
        let entities = vec![
            region(
                "Mixed",
                vec![
                    ReligiousEntry::new("Christianity", "", 5),
                    ReligiousEntry::new("Islam", "", 5),
                ],
            ),
            region("Single", vec![ReligiousEntry::new("Christianity", "", 12)]),
            region(
                "Skewed",
                vec![
                    ReligiousEntry::new("Christianity", "", 10),
                    ReligiousEntry::new("Islam", "", 5),
                ],
            ),
        ];
        let selection = Selection::new(LocationType::Metropolitan);
        let ranking = diversity_by_geography(&Subset::all(&entities), &selection);
        let ranking = ranking.ready().unwrap();

        let order: Vec<(&str, f64, u64)> = ranking
            .iter()
            .map(|g| (g.group.as_str(), g.diversity_index, g.total))
            .collect();
        assert_eq!(
            order,
            vec![("Single", 0.0, 12), ("Skewed", 0.64, 15), ("Mixed", 0.69, 10)]
        );
    }

    #[test]
    fn test_ranked_on_unrounded_index() {
        let entities = vec![
            region(
                "Higher",
                vec![
                    ReligiousEntry::new("Christianity", "", 19),
                    ReligiousEntry::new("Islam", "", 10),
                ],
            ),
            region(
                "Lower",
                vec![
                    ReligiousEntry::new("Christianity", "", 10),
                    ReligiousEntry::new("Islam", "", 5),
                ],
            ),
        ];
        let selection = Selection::new(LocationType::Metropolitan);
        let ranking = diversity_by_geography(&Subset::all(&entities), &selection);
        let ranking = ranking.ready().unwrap();

        assert_eq!(ranking[0].diversity_index, ranking[1].diversity_index);
        let order: Vec<&str> = ranking.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(order, vec!["Lower", "Higher"]);
    }

    #[test]
    fn test_unnamed_religions_left_out_of_totals() {
        let entities = vec![
            region(
                "A",
                vec![
                    ReligiousEntry::new("Christianity", "", 4),
                    ReligiousEntry::new("", "X", 5),
                    ReligiousEntry::new("Islam", "", 4),
                ],
            ),
            region("B", vec![ReligiousEntry::new("", "X", 9)]),
        ];
        let selection = Selection::new(LocationType::Metropolitan);
        let ranking = diversity_by_geography(&Subset::all(&entities), &selection);
        let ranking = ranking.ready().unwrap();

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].group, "A");
        assert_eq!(ranking[0].total, 8);
        assert_eq!(ranking[0].diversity_index, 0.69);
    }

    #[test]
    fn test_index_within_bounds() {
        let entities = vec![region(
            "Four",
            vec![
                ReligiousEntry::new("A", "", 1),
                ReligiousEntry::new("B", "", 2),
                ReligiousEntry::new("C", "", 3),
                ReligiousEntry::new("D", "", 4),
            ],
        )];
        let selection = Selection::new(LocationType::Metropolitan);
        let ranking = diversity_by_geography(&Subset::all(&entities), &selection);
        let index = ranking.ready().unwrap()[0].diversity_index;
        assert!(index > 0.0);
        assert!(index <= 4.0_f64.ln() + 0.005);
    }

    #[test]
    fn test_zero_total_group_has_no_diversity() {
        let entities = vec![region("Empty", vec![ReligiousEntry::new("A", "", 0)])];
        let selection = Selection::new(LocationType::Metropolitan);
        let ranking = diversity_by_geography(&Subset::all(&entities), &selection);
        assert_eq!(
            ranking.ready().unwrap()[0],
            GroupDiversity {
                group: "Empty".to_string(),
                diversity_index: 0.0,
                total: 0
            }
        );
    }

    #[test]
    fn test_empty_subset_is_no_data() {
        let selection = Selection::default();
        assert!(diversity_by_geography(&Subset::default(), &selection).is_no_data());
    }
}
