//! Session-level load state of the dataset.
//!
//! The dataset is fetched once per session. [`DatasetSlot`] hands out a ticket
//! per fetch and only accepts the response of the most recent one, so a slow
//! stale response can never overwrite a newer dataset.

use crate::dataset::Dataset;
use crate::error::LoadError;

/// Where the dataset currently stands for the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Dataset),
    /// Fetch or decode failed; the message is shown instead of the charts.
    Unavailable(String),
}

impl LoadState {
    /// The loaded dataset, or an empty one while loading or unavailable.
    pub fn dataset(&self) -> Dataset {
        match self {
            LoadState::Ready(dataset) => dataset.clone(),
            _ => Dataset::empty(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Unavailable(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Last-write-wins holder for the session's dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSlot {
    latest: u64,
    state: LoadState,
}

impl DatasetSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// Store the outcome of a fetch.
    ///
    /// Returns `false` (and leaves the state untouched) when the ticket is
    /// stale.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Dataset, LoadError>,
    ) -> bool {
        if ticket.0 != self.latest {
            log::warn!(
                "loader: Discarding stale dataset response (ticket {}, latest {})",
                ticket.0,
                self.latest
            );
            return false;
        }
        self.state = match result {
            Ok(dataset) => LoadState::Ready(dataset),
            Err(e) => {
                log::error!("loader: Dataset unavailable: {}", e);
                LoadState::Unavailable(e.to_string())
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn dataset(&self) -> Dataset {
        self.state.dataset()
    }
}
