//! Insertion-ordered count accumulation.
//!
//! Charts rank keys by total and break ties by the order keys were first
//! seen, so the accumulator remembers that order.

use crate::filter::Subset;
use dwd_utils::numbers::saturating_sum;
use std::collections::HashMap;

/// Per-key totals that iterate in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedTotals {
    keys: Vec<String>,
    totals: Vec<u64>,
    index: HashMap<String, usize>,
}

impl OrderedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, count: u64) {
        match self.index.get(key) {
            Some(&i) => self.totals[i] = self.totals[i].saturating_add(count),
            None => {
                self.index.insert(key.to_string(), self.keys.len());
                self.keys.push(key.to_string());
                self.totals.push(count);
            }
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map(|&i| self.totals[i]).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.keys
            .iter()
            .map(String::as_str)
            .zip(self.totals.iter().copied())
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn counts(&self) -> &[u64] {
        &self.totals
    }

    pub fn grand_total(&self) -> u64 {
        saturating_sum(self.totals.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys sorted by descending total; equal totals keep first-seen order.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .iter()
            .map(|(key, total)| (key.to_string(), total))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Totals per `Religion_Grouped` over a subset, skipping entries without a religion.
pub fn religion_totals(subset: &Subset) -> OrderedTotals {
    let mut totals = OrderedTotals::new();
    for entity in subset.iter() {
        for entry in entity.details.religious_data.iter().filter(|e| e.has_religion()) {
            totals.add(&entry.religion, entry.count);
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwd_pow::{Entity, LocationType, ReligiousEntry};

    #[test]
    fn test_add_accumulates_in_first_seen_order() {
        let mut totals = OrderedTotals::new();
        totals.add("Islam", 2);
        totals.add("Christianity", 5);
        totals.add("Islam", 3);

        let collected: Vec<(&str, u64)> = totals.iter().collect();
        assert_eq!(collected, vec![("Islam", 5), ("Christianity", 5)]);
        assert_eq!(totals.get("Islam"), 5);
        assert_eq!(totals.get("Judaism"), 0);
        assert_eq!(totals.grand_total(), 10);
    }

    #[test]
    fn test_add_saturates() {
        let mut totals = OrderedTotals::new();
        totals.add("Christian", u64::MAX - 1);
        totals.add("Christian", 10);
        totals.add("Muslim", 3);
        assert_eq!(totals.get("Christian"), u64::MAX);
        assert_eq!(totals.grand_total(), u64::MAX);
    }

    #[test]
    fn test_ranked_is_stable_on_ties() {
        let mut totals = OrderedTotals::new();
        totals.add("B", 1);
        totals.add("A", 4);
        totals.add("C", 4);
        totals.add("D", 7);

        let ranked = totals.ranked();
        let keys: Vec<&str> = ranked.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_religion_totals_skips_unnamed_entries() {
        let entities = vec![Entity::new(
            LocationType::Metropolitan,
            "A",
            "A1",
            "A1a",
            vec![
                ReligiousEntry::new("Christianity", "Catholic", 3),
                ReligiousEntry::new("", "Unknown", 8),
                ReligiousEntry::new("Christianity", "Protestant", 2),
            ],
        )];
        let totals = religion_totals(&Subset::all(&entities));
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("Christianity"), 5);
    }
}
