//! Filter engine: applies a geographic selection to the dataset.
//!
//! Constraints narrow in a fixed order: country (when set), location class,
//! region, department, city. The result keeps the dataset's record order
//! and borrows the records instead of copying them.

use dwd_pow::{Dataset, Entity, LocationType};
use dwd_utils::labels::non_empty;
use serde::Serialize;
use std::collections::BTreeSet;

/// A level of the geographic hierarchy a filter can be set on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoLevel {
    Country,
    Region,
    Department,
    City,
}

impl GeoLevel {
    /// Levels from the coarsest to the finest.
    pub const ALL: [GeoLevel; 4] = [
        GeoLevel::Country,
        GeoLevel::Region,
        GeoLevel::Department,
        GeoLevel::City,
    ];

    /// The record's value at this level.
    pub fn value_of<'a>(&self, entity: &'a Entity) -> &'a str {
        match self {
            GeoLevel::Country => &entity.country,
            GeoLevel::Region => &entity.details.region,
            GeoLevel::Department => &entity.details.department,
            GeoLevel::City => &entity.details.city,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GeoLevel::Country => "Country",
            GeoLevel::Region => "Region",
            GeoLevel::Department => "Department",
            GeoLevel::City => "City",
        }
    }

    /// This level and every finer one.
    pub fn and_below(self) -> impl Iterator<Item = GeoLevel> {
        GeoLevel::ALL.into_iter().filter(move |level| *level >= self)
    }
}

/// The user's current filter selection. `None` means unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub location: LocationType,
    pub country: Option<String>,
    pub region: Option<String>,
    pub department: Option<String>,
    pub city: Option<String>,
}

impl Selection {
    pub fn new(location: LocationType) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.set(GeoLevel::Country, country);
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.set(GeoLevel::Region, region);
        self
    }

    pub fn with_department(mut self, department: &str) -> Self {
        self.set(GeoLevel::Department, department);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.set(GeoLevel::City, city);
        self
    }

    pub fn get(&self, level: GeoLevel) -> Option<&str> {
        self.slot(level).as_deref()
    }

    /// Set a level; blank values clear it.
    pub fn set(&mut self, level: GeoLevel, value: &str) {
        *self.slot_mut(level) = non_empty(value);
    }

    pub fn clear(&mut self, level: GeoLevel) {
        *self.slot_mut(level) = None;
    }

    /// A copy with `level` and every finer level cleared.
    pub fn truncated_before(&self, level: GeoLevel) -> Selection {
        let mut truncated = self.clone();
        for finer in level.and_below() {
            truncated.clear(finer);
        }
        truncated
    }

    /// Whether a record satisfies every constraint that is set.
    pub fn matches(&self, entity: &Entity) -> bool {
        let level_ok = |level: GeoLevel| match self.get(level) {
            Some(wanted) => level.value_of(entity) == wanted,
            None => true,
        };
        level_ok(GeoLevel::Country)
            && entity.location_type == self.location
            && level_ok(GeoLevel::Region)
            && level_ok(GeoLevel::Department)
            && level_ok(GeoLevel::City)
    }

    fn slot(&self, level: GeoLevel) -> &Option<String> {
        match level {
            GeoLevel::Country => &self.country,
            GeoLevel::Region => &self.region,
            GeoLevel::Department => &self.department,
            GeoLevel::City => &self.city,
        }
    }

    fn slot_mut(&mut self, level: GeoLevel) -> &mut Option<String> {
        match level {
            GeoLevel::Country => &mut self.country,
            GeoLevel::Region => &mut self.region,
            GeoLevel::Department => &mut self.department,
            GeoLevel::City => &mut self.city,
        }
    }
}

/// An ordered, read-only view over the records that passed a filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subset<'a> {
    entities: Vec<&'a Entity>,
}

impl<'a> Subset<'a> {
    /// Every record of a slice, unfiltered.
    pub fn all(entities: &'a [Entity]) -> Self {
        Self {
            entities: entities.iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Entity> + '_ {
        self.entities.iter().copied()
    }

    pub fn entities(&self) -> &[&'a Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Identity check: is this exact record (not an equal copy) in the view?
    pub fn contains(&self, entity: &Entity) -> bool {
        self.entities.iter().any(|e| std::ptr::eq(*e, entity))
    }
}

impl<'a> FromIterator<&'a Entity> for Subset<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

/// Apply a selection to the dataset.
pub fn apply<'a>(dataset: &'a Dataset, selection: &Selection) -> Subset<'a> {
    let subset: Subset<'a> = dataset.iter().filter(|e| selection.matches(e)).collect();
    log::debug!(
        "filter: {} of {} locations match {:?}",
        subset.len(),
        dataset.len(),
        selection
    );
    subset
}

/// Distinct values offered at `level`, given the selection above it.
///
/// The selection is truncated before `level`, so the current choice at that
/// level (and anything finer) does not restrict its own options. Country is a
/// peer of the whole hierarchy and is always offered over the full dataset.
/// Values are sorted; blanks are never offered.
pub fn options_at(dataset: &Dataset, selection: &Selection, level: GeoLevel) -> Vec<String> {
    let values: BTreeSet<&str> = if level == GeoLevel::Country {
        dataset.iter().map(|e| level.value_of(e)).collect()
    } else {
        apply(dataset, &selection.truncated_before(level))
            .iter()
            .map(|e| level.value_of(e))
            .collect()
    };
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
