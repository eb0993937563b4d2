use super::tracker::{HistoryEntry, ShoeTracker};
use crate::model::shoe::{ShoeError, ShoeState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to parse session JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("session shoe is invalid: {0}")]
    Shoe(#[from] ShoeError),
}

/// Persisted form of a [`ShoeTracker`]; counts follow `Rank::ORDERED`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub decks: u8,
    pub counts: [u8; 13],
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl SessionSnapshot {
    pub fn capture(tracker: &ShoeTracker) -> Self {
        let shoe = tracker.shoe();
        SessionSnapshot {
            decks: shoe.decks(),
            counts: *shoe.counts(),
            history: tracker.history().to_vec(),
        }
    }

    pub fn restore(self) -> Result<ShoeTracker, SnapshotError> {
        let shoe = ShoeState::from_counts(self.decks, self.counts)?;
        Ok(ShoeTracker::from_parts(shoe, self.history))
    }

    pub fn to_json(tracker: &ShoeTracker) -> serde_json::Result<String> {
        let snapshot = Self::capture(tracker);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rank::Rank;

    #[test]
    fn snapshot_serializes_to_json() {
        let tracker = ShoeTracker::default();
        let json = SessionSnapshot::to_json(&tracker).unwrap();
        assert!(json.contains("\"decks\": 8"));
        assert!(json.contains("\"history\": []"));
    }

    #[test]
    fn snapshot_roundtrip_restores_counts_and_history() {
        let mut tracker = ShoeTracker::default();
        tracker.deal(Rank::Nine).unwrap();
        tracker.mark_hand_boundary();
        tracker.deal(Rank::Jack).unwrap();

        let json = SessionSnapshot::to_json(&tracker).unwrap();
        let restored = SessionSnapshot::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored.shoe(), tracker.shoe());
        assert_eq!(restored.history(), tracker.history());
        assert!(json.contains("\"type\": \"separator\""));
    }

    #[test]
    fn restore_rejects_overfull_counts() {
        let snapshot = SessionSnapshot {
            decks: 1,
            counts: [5; 13],
            history: Vec::new(),
        };
        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::Shoe(ShoeError::CountOutOfRange { .. }))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = SessionSnapshot::from_json("{not json").expect_err("invalid json");
        assert!(err.to_string().contains("failed to parse session JSON"));
    }
}
