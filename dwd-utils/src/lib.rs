//! Shared utility functions for Dive With Data crates.

/// Number formatting helpers
pub mod numbers {
    use serde::{Serialize, Serializer};
    use std::fmt;

    /// Round a value to 2 decimal places.
    ///
    /// Non-finite input rounds to 0.0 so a bad ratio never leaks into a chart.
    pub fn round2(value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        (value * 100.0).round() / 100.0
    }

    /// Divide, returning 0.0 when the denominator is zero.
    pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }

    /// Sum counts, clamping at `u64::MAX` instead of overflowing.
    pub fn saturating_sum<I: IntoIterator<Item = u64>>(counts: I) -> u64 {
        counts.into_iter().fold(0, u64::saturating_add)
    }

    /// A value displayed and serialized with exactly two decimals ("0.00").
    ///
    /// KPI boxes show these as text, so the JSON form is a string as well.
    #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
    pub struct Fixed2(f64);

    impl Fixed2 {
        pub const ZERO: Fixed2 = Fixed2(0.0);

        pub fn new(value: f64) -> Self {
            Fixed2(round2(value))
        }

        pub fn value(&self) -> f64 {
            self.0
        }
    }

    impl fmt::Display for Fixed2 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:.2}", self.0)
        }
    }

    impl Serialize for Fixed2 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_saturating_sum() {
            assert_eq!(saturating_sum([1, 2, 3]), 6);
            assert_eq!(saturating_sum(Vec::new()), 0);
            assert_eq!(saturating_sum([u64::MAX, 1, u64::MAX]), u64::MAX);
        }

        #[test]
        fn test_round2() {
            assert_eq!(round2(0.636514), 0.64);
            assert_eq!(round2(7.5), 7.5);
            assert_eq!(round2(f64::NAN), 0.0);
            assert_eq!(round2(f64::INFINITY), 0.0);
        }

        #[test]
        fn test_ratio_or_zero() {
            assert_eq!(ratio_or_zero(15.0, 2.0), 7.5);
            assert_eq!(ratio_or_zero(15.0, 0.0), 0.0);
        }

        #[test]
        fn test_fixed2_display_and_json() {
            assert_eq!(Fixed2::ZERO.to_string(), "0.00");
            assert_eq!(Fixed2::new(7.5).to_string(), "7.50");
            assert_eq!(serde_json::to_string(&Fixed2::new(0.6365)).unwrap(), "\"0.64\"");
        }
    }
}

/// Label helpers
pub mod labels {
    /// Upper-case the first character of a label, leaving the rest untouched.
    pub fn capitalize_first(label: &str) -> String {
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Normalise a free-text filter value: trimmed, and `None` when empty.
    pub fn non_empty(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_capitalize_first() {
            assert_eq!(capitalize_first("christianity"), "Christianity");
            assert_eq!(capitalize_first("Islam"), "Islam");
            assert_eq!(capitalize_first("éveil"), "Éveil");
            assert_eq!(capitalize_first(""), "");
        }

        #[test]
        fn test_non_empty() {
            assert_eq!(non_empty(""), None);
            assert_eq!(non_empty("   "), None);
            assert_eq!(non_empty(" Bretagne "), Some("Bretagne".to_string()));
        }
    }
}
