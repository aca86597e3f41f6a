//! Cascading filter state.
//!
//! Changing an upper level drops any lower-level choice that is no longer
//! offered under the new value. Toggling the location class clears every
//! geographic choice, country included, since a country or region picked in
//! one partition may not exist in the other.

use crate::filter::{options_at, GeoLevel, Selection};
use dwd_pow::{Dataset, LocationType};
use serde::Serialize;

/// The option lists for the four dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadingOptions {
    pub countries: Vec<String>,
    pub regions: Vec<String>,
    pub departments: Vec<String>,
    pub cities: Vec<String>,
}

impl CascadingOptions {
    pub fn for_level(&self, level: GeoLevel) -> &[String] {
        match level {
            GeoLevel::Country => &self.countries,
            GeoLevel::Region => &self.regions,
            GeoLevel::Department => &self.departments,
            GeoLevel::City => &self.cities,
        }
    }
}

/// Mutable session selection with the cascading rules applied on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selection: Selection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn location(&self) -> LocationType {
        self.selection.location
    }

    /// Switch the location class. Clears every geographic choice when it changes.
    pub fn set_location(&mut self, location: LocationType) {
        if self.selection.location == location {
            return;
        }
        self.selection.location = location;
        self.clear_selections();
    }

    pub fn set_overseas(&mut self, is_overseas: bool) {
        self.set_location(LocationType::from_overseas_flag(is_overseas));
    }

    pub fn set_country(&mut self, dataset: &Dataset, country: &str) {
        self.set_level(dataset, GeoLevel::Country, country);
    }

    pub fn set_region(&mut self, dataset: &Dataset, region: &str) {
        self.set_level(dataset, GeoLevel::Region, region);
    }

    pub fn set_department(&mut self, dataset: &Dataset, department: &str) {
        self.set_level(dataset, GeoLevel::Department, department);
    }

    pub fn set_city(&mut self, dataset: &Dataset, city: &str) {
        self.set_level(dataset, GeoLevel::City, city);
    }

    /// Set one level, then drop finer choices the new value invalidates.
    pub fn set_level(&mut self, dataset: &Dataset, level: GeoLevel, value: &str) {
        self.selection.set(level, value);
        for finer in level.and_below().skip(1) {
            let Some(current) = self.selection.get(finer) else {
                continue;
            };
            let offered = options_at(dataset, &self.selection, finer);
            if !offered.iter().any(|option| option == current) {
                log::debug!(
                    "filter_state: Clearing {} '{}' (not offered after {} change)",
                    finer.label(),
                    current,
                    level.label()
                );
                self.selection.clear(finer);
            }
        }
    }

    /// Reset country, region, department and city. The location class is kept.
    pub fn clear_selections(&mut self) {
        for level in GeoLevel::ALL {
            self.selection.clear(level);
        }
    }

    /// Option lists for every dropdown under the current selection.
    pub fn options(&self, dataset: &Dataset) -> CascadingOptions {
        CascadingOptions {
            countries: options_at(dataset, &self.selection, GeoLevel::Country),
            regions: options_at(dataset, &self.selection, GeoLevel::Region),
            departments: options_at(dataset, &self.selection, GeoLevel::Department),
            cities: options_at(dataset, &self.selection, GeoLevel::City),
        }
    }
}

impl From<Selection> for FilterState {
    fn from(selection: Selection) -> Self {
        Self { selection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwd_pow::{Entity, ReligiousEntry};

    fn sample_dataset() -> Dataset {
        let entry = || vec![ReligiousEntry::new("Christianity", "Catholic", 1)];
        Dataset::from_entities(vec![
            Entity::new(LocationType::Metropolitan, "Bretagne", "Finistère", "Brest", entry()),
            Entity::new(LocationType::Metropolitan, "Bretagne", "Finistère", "Quimper", entry()),
            Entity::new(LocationType::Metropolitan, "Bretagne", "Morbihan", "Vannes", entry()),
            Entity::new(LocationType::Metropolitan, "Corse", "Haute-Corse", "Bastia", entry()),
            Entity::new(LocationType::Overseas, "Bretagne", "Saint-Pierre", "Miquelon", entry()),
        ])
    }

    fn chosen(state: &FilterState) -> (Option<&str>, Option<&str>, Option<&str>) {
        let s = state.selection();
        (s.region.as_deref(), s.department.as_deref(), s.city.as_deref())
    }

    #[test]
    fn test_region_change_clears_invalid_department_and_city() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        state.set_region(&dataset, "Bretagne");
        state.set_department(&dataset, "Finistère");
        state.set_city(&dataset, "Brest");
        assert_eq!(chosen(&state), (Some("Bretagne"), Some("Finistère"), Some("Brest")));

        state.set_region(&dataset, "Corse");
        assert_eq!(chosen(&state), (Some("Corse"), None, None));
    }

    #[test]
    fn test_region_change_keeps_still_valid_choices() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        state.set_department(&dataset, "Morbihan");
        state.set_city(&dataset, "Vannes");

        state.set_region(&dataset, "Bretagne");
        assert_eq!(chosen(&state), (Some("Bretagne"), Some("Morbihan"), Some("Vannes")));
    }

    #[test]
    fn test_department_change_clears_invalid_city() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        state.set_region(&dataset, "Bretagne");
        state.set_department(&dataset, "Finistère");
        state.set_city(&dataset, "Quimper");

        state.set_department(&dataset, "Morbihan");
        assert_eq!(chosen(&state), (Some("Bretagne"), Some("Morbihan"), None));
    }

    #[test]
    fn test_location_toggle_clears_geography() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        state.set_country(&dataset, "France");
        state.set_region(&dataset, "Bretagne");
        state.set_department(&dataset, "Finistère");

        state.set_overseas(true);
        assert_eq!(state.location(), LocationType::Overseas);
        assert_eq!(chosen(&state), (None, None, None));
        assert_eq!(state.selection().country, None);
    }

    #[test]
    fn test_location_toggle_drops_country_of_other_partition() {
        let dataset = Dataset::from_entities(vec![
            Entity::new(
                LocationType::Overseas,
                "Guyane",
                "Guyane",
                "Cayenne",
                vec![ReligiousEntry::new("Christianity", "Catholic", 2)],
            )
            .with_country("Guyane française"),
            Entity::new(
                LocationType::Metropolitan,
                "Corse",
                "Haute-Corse",
                "Bastia",
                vec![ReligiousEntry::new("Christianity", "Catholic", 1)],
            ),
        ]);
        let mut state = FilterState::new();
        state.set_overseas(true);
        state.set_country(&dataset, "Guyane française");

        state.set_overseas(false);
        assert_eq!(state.selection(), &Selection::new(LocationType::Metropolitan));
        assert_eq!(crate::filter::apply(&dataset, state.selection()).len(), 1);
    }

    #[test]
    fn test_setting_same_location_keeps_selection() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        state.set_region(&dataset, "Corse");
        state.set_location(LocationType::Metropolitan);
        assert_eq!(chosen(&state), (Some("Corse"), None, None));
    }

    #[test]
    fn test_clear_selections() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        state.set_overseas(true);
        state.set_country(&dataset, "France");
        state.set_region(&dataset, "Bretagne");
        state.clear_selections();

        assert_eq!(state.selection(), &Selection::new(LocationType::Overseas));
    }

    #[test]
    fn test_options_cascade() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        let options = state.options(&dataset);
        assert_eq!(options.regions, vec!["Bretagne", "Corse"]);
        assert_eq!(options.departments.len(), 3);

        state.set_region(&dataset, "Bretagne");
        let options = state.options(&dataset);
        assert_eq!(options.departments, vec!["Finistère", "Morbihan"]);
        assert_eq!(options.cities, vec!["Brest", "Quimper", "Vannes"]);

        state.set_department(&dataset, "Finistère");
        let options = state.options(&dataset);
        assert_eq!(options.for_level(GeoLevel::City), ["Brest", "Quimper"]);
        assert_eq!(options.countries, vec!["France"]);
    }

    #[test]
    fn test_overseas_region_names_do_not_leak() {
        let dataset = sample_dataset();
        let mut state = FilterState::new();
        state.set_overseas(true);
        state.set_region(&dataset, "Bretagne");
        assert_eq!(state.options(&dataset).departments, vec!["Saint-Pierre"]);
    }
}
