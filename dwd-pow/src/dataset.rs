use crate::entity::{Entity, LocationType};
use crate::error::{LoadError, Result};
use flate2::read::GzDecoder;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

/// Fixed, versioned location of the exported dataset on the static site.
pub const DATASET_PATH: &str = "/dive-with-data/exported_data.json";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// The immutable in-memory dataset.
///
/// Cheaply cloneable (via `Rc`) so every Dioxus component and aggregator can
/// hold the same collection in the single-threaded WASM environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entities: Rc<Vec<Entity>>,
}

impl Dataset {
    /// An empty dataset. Used wherever the real one is absent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self {
            entities: Rc::new(entities),
        }
    }

    /// Decode a JSON array of records.
    ///
    /// Array items that are not objects are skipped. Everything inside a
    /// record is decoded leniently, see [`crate::entity`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::from_items(serde_json::from_str(json)?))
    }

    fn from_items(items: Vec<Value>) -> Self {
        let total = items.len();

        let entities: Vec<Entity> = items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();

        if entities.len() < total {
            log::warn!(
                "loader: Skipped {} dataset items that were not records",
                total - entities.len()
            );
        }

        let dataset = Self::from_entities(entities);
        dataset.log_summary();
        dataset
    }

    /// Decode raw bytes, inflating them first when they carry the gzip magic.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.starts_with(&GZIP_MAGIC) {
            let mut json = String::new();
            GzDecoder::new(bytes)
                .read_to_string(&mut json)
                .map_err(|e| LoadError::Decompression(e.to_string()))?;
            Self::from_json_str(&json)
        } else {
            Ok(Self::from_items(serde_json::from_slice(bytes)?))
        }
    }

    /// Load a dataset file (plain JSON or `.json.gz`) from disk.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        log::info!(
            "loader: Read {} bytes from {}",
            bytes.len(),
            path.as_ref().display()
        );
        Self::from_bytes(&bytes)
    }

    /// Fetch the dataset over HTTP. One attempt, no retry.
    #[cfg(feature = "api")]
    pub async fn fetch(url: &str) -> Result<Self> {
        let response = reqwest::get(url).await?;
        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;
        log::info!("loader: Fetched {} bytes from {}", bytes.len(), url);
        Self::from_bytes(&bytes)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Distinct, non-empty country names in first-seen order.
    pub fn countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = Vec::new();
        for entity in self.iter() {
            if !entity.country.is_empty() && !countries.contains(&entity.country) {
                countries.push(entity.country.clone());
            }
        }
        countries
    }

    fn log_summary(&self) {
        let count_of = |location: LocationType| {
            self.iter()
                .filter(|e| e.location_type == location)
                .count()
        };
        log::info!(
            "loader: Loaded {} locations ({} metropolitan, {} overseas)",
            self.len(),
            count_of(LocationType::Metropolitan),
            count_of(LocationType::Overseas)
        );
        let unclassified = count_of(LocationType::Unclassified);
        if unclassified > 0 {
            log::warn!(
                "loader: {} locations have an unknown Location_Type and belong to neither partition",
                unclassified
            );
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
