use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// `Location_Type` value for mainland France and Corsica.
pub const METROPOLITAN_LABEL: &str = "Metropolitan France";
/// `Location_Type` value for the overseas departments and territories.
pub const OVERSEAS_LABEL: &str = "French Overseas Territories";

/// The two disjoint analysis universes of the dataset.
///
/// Records with any other `Location_Type` decode as `Unclassified` and are
/// never returned by either partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocationType {
    #[default]
    Metropolitan,
    Overseas,
    Unclassified,
}

impl LocationType {
    /// Map the export's label to a location class.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            METROPOLITAN_LABEL => LocationType::Metropolitan,
            OVERSEAS_LABEL => LocationType::Overseas,
            _ => LocationType::Unclassified,
        }
    }

    /// Map the dashboard's "overseas" toggle to a location class.
    pub fn from_overseas_flag(is_overseas: bool) -> Self {
        if is_overseas {
            LocationType::Overseas
        } else {
            LocationType::Metropolitan
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationType::Metropolitan => METROPOLITAN_LABEL,
            LocationType::Overseas => OVERSEAS_LABEL,
            LocationType::Unclassified => "Unclassified",
        }
    }

    /// Short name used in chart titles.
    pub fn short_label(&self) -> &'static str {
        match self {
            LocationType::Metropolitan => "Metropolitan",
            LocationType::Overseas => "Overseas",
            LocationType::Unclassified => "Unclassified",
        }
    }

    pub fn is_overseas(&self) -> bool {
        *self == LocationType::Overseas
    }
}

impl Serialize for LocationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for LocationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(label) => LocationType::from_label(&label),
            _ => LocationType::Unclassified,
        })
    }
}

fn unclassified() -> LocationType {
    LocationType::Unclassified
}

/// One `{Religion_Grouped, Denomination_Grouped, Count}` line of a location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReligiousEntry {
    #[serde(rename = "Religion_Grouped", default, deserialize_with = "lenient_string")]
    pub religion: String,
    #[serde(rename = "Denomination_Grouped", default, deserialize_with = "lenient_string")]
    pub denomination: String,
    /// Number of places of worship for this religion/denomination.
    #[serde(rename = "Count", default, deserialize_with = "lenient_count")]
    pub count: u64,
}

impl ReligiousEntry {
    pub fn new(religion: &str, denomination: &str, count: u64) -> Self {
        Self {
            religion: religion.to_string(),
            denomination: denomination.to_string(),
            count,
        }
    }

    /// Entries without a religion still count as places of worship but are
    /// left out of every per-religion breakdown.
    pub fn has_religion(&self) -> bool {
        !self.religion.is_empty()
    }
}

/// Nested geographic and religious statistics of a location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Details {
    #[serde(rename = "Region", default, deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(rename = "Department_Name", default, deserialize_with = "lenient_string")]
    pub department: String,
    #[serde(rename = "City", default, deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(rename = "Religious_Data", default, deserialize_with = "lenient_entries")]
    pub religious_data: Vec<ReligiousEntry>,
    /// Nationally registered heritage sites at this location.
    #[serde(rename = "Inscription_Date_Count", default, deserialize_with = "lenient_count")]
    pub inscription_date_count: u64,
}

/// A record of the exported dataset, one per location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "Country", default, deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(rename = "Location_Type", default = "unclassified")]
    pub location_type: LocationType,
    #[serde(rename = "Details", default, deserialize_with = "lenient_details")]
    pub details: Details,
}

impl Entity {
    /// Build a location record from its geography, mostly for tests and fixtures.
    pub fn new(
        location_type: LocationType,
        region: &str,
        department: &str,
        city: &str,
        religious_data: Vec<ReligiousEntry>,
    ) -> Self {
        Self {
            country: "France".to_string(),
            location_type,
            details: Details {
                region: region.to_string(),
                department: department.to_string(),
                city: city.to_string(),
                religious_data,
                inscription_date_count: 0,
            },
        }
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }

    pub fn with_inscriptions(mut self, count: u64) -> Self {
        self.details.inscription_date_count = count;
        self
    }

    /// Sum of all religious entry counts at this location, clamped at `u64::MAX`.
    pub fn total_count(&self) -> u64 {
        self.details
            .religious_data
            .iter()
            .fold(0, |acc: u64, e| acc.saturating_add(e.count))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from_value(&Value::deserialize(deserializer)?))
}

/// Interpret a JSON value as a non-negative count, defaulting to 0.
///
/// Accepts integers, non-negative finite floats (truncated) and numeric strings.
pub fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or_else(|| float_count(n.as_f64())),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .unwrap_or_else(|_| float_count(s.parse::<f64>().ok()))
        }
        _ => 0,
    }
}

fn float_count(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v.trunc() as u64,
        _ => 0,
    }
}

fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<ReligiousEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn lenient_details<'de, D>(deserializer: D) -> Result<Details, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_default()),
        _ => Ok(Details::default()),
    }
}
