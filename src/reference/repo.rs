use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use super::store::{ReferenceData, TableSizes};
use crate::error::{ReferenceError, LOAD_FAILED};

#[derive(Debug)]
enum Slot {
    Empty,
    Ready(Arc<ReferenceData>),
    Failed(String),
}

/// Holds the resident reference store. Readers clone the inner `Arc` and keep
/// using it even if a reload swaps in a new store meanwhile.
#[derive(Debug, Clone)]
pub struct ReferenceSlot {
    inner: Arc<RwLock<Slot>>,
}

#[derive(Debug, Serialize)]
pub struct ReferenceStatus {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<TableSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for ReferenceSlot {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Slot::Empty)),
        }
    }
}

impl ReferenceSlot {
    pub fn ready(data: ReferenceData) -> Self {
        let slot = Self::default();
        slot.replace(Ok(data));
        slot
    }

    pub fn current(&self) -> Result<Arc<ReferenceData>, ReferenceError> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        match &*guard {
            Slot::Ready(data) => Ok(Arc::clone(data)),
            Slot::Failed(msg) => Err(ReferenceError::Unavailable(msg.clone())),
            Slot::Empty => Err(ReferenceError::Unavailable(LOAD_FAILED.to_string())),
        }
    }

    /// Installs the outcome of a full load. A failure drops any older store.
    pub fn replace(&self, outcome: Result<ReferenceData, ReferenceError>) {
        let next = match outcome {
            Ok(data) => Slot::Ready(Arc::new(data)),
            Err(e) => Slot::Failed(e.to_string()),
        };
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    pub fn status(&self) -> ReferenceStatus {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        match &*guard {
            Slot::Ready(data) => ReferenceStatus {
                loaded: true,
                tables: Some(data.sizes()),
                error: None,
            },
            Slot::Failed(msg) => ReferenceStatus {
                loaded: false,
                tables: None,
                error: Some(msg.clone()),
            },
            Slot::Empty => ReferenceStatus {
                loaded: false,
                tables: None,
                error: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::store::fixtures::sample;

    #[test]
    fn empty_slot_is_unavailable() {
        let slot = ReferenceSlot::default();
        assert!(slot.current().is_err());
        assert!(!slot.status().loaded);
    }

    #[test]
    fn failed_reload_drops_previous_store() {
        let slot = ReferenceSlot::ready(sample());
        let held = slot.current().unwrap();

        slot.replace(Err(ReferenceError::Load(anyhow::anyhow!("boom").into())));
        let err = slot.current().unwrap_err();
        assert_eq!(err.to_string(), LOAD_FAILED);
        assert_eq!(slot.status().error.as_deref(), Some(LOAD_FAILED));

        // readers that already hold the old store keep a consistent view
        assert_eq!(held.sizes().foods, 18);
    }

    #[test]
    fn status_reports_table_sizes() {
        let slot = ReferenceSlot::ready(sample());
        let status = slot.status();
        assert!(status.loaded);
        assert_eq!(status.tables.unwrap().food_groups, 9);
    }
}
