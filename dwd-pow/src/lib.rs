//! Core types and dataset loader for the places-of-worship dataset.
//!
//! The dataset is a static JSON export (one record per location) fetched once
//! per session and kept immutable afterwards. Decoding is deliberately lenient:
//! missing or malformed nested fields fall back to empty strings, empty
//! collections and zero counts instead of failing the whole load.

pub mod dataset;
pub mod entity;
pub mod error;
pub mod load_state;

pub use dataset::{Dataset, DATASET_PATH};
pub use entity::{Details, Entity, LocationType, ReligiousEntry};
pub use error::LoadError;
pub use load_state::{DatasetSlot, FetchTicket, LoadState};
