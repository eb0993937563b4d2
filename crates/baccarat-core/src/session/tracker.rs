use super::{AdvisorSettings, Analysis};
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use crate::model::shoe::{ShoeError, ShoeState};
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryEntry {
    Card { seat: Seat, rank: Rank },
    Separator,
}

/// Owns the live shoe for a session. Every mutation bumps the version so a
/// caller can tell whether an [`Analysis`] still describes the shoe.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoeTracker {
    shoe: ShoeState,
    history: Vec<HistoryEntry>,
    version: u64,
}

impl ShoeTracker {
    pub fn new(decks: u8) -> Result<Self, ShoeError> {
        Ok(Self::from_parts(ShoeState::full(decks)?, Vec::new()))
    }

    pub(crate) fn from_parts(shoe: ShoeState, history: Vec<HistoryEntry>) -> Self {
        Self {
            shoe,
            history,
            version: 0,
        }
    }

    pub fn shoe(&self) -> &ShoeState {
        &self.shoe
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Seat label for the next recorded card. Labels alternate starting with
    /// the banker; separators are skipped.
    pub fn next_seat(&self) -> Seat {
        self.history
            .iter()
            .rev()
            .find_map(|entry| match entry {
                HistoryEntry::Card { seat, .. } => Some(seat.other()),
                HistoryEntry::Separator => None,
            })
            .unwrap_or(Seat::Banker)
    }

    /// Records `rank` as dealt. The shoe is left untouched if none remain.
    pub fn deal(&mut self, rank: Rank) -> Result<HistoryEntry, ShoeError> {
        let seat = self.next_seat();
        self.shoe.remove(rank)?;
        let entry = HistoryEntry::Card { seat, rank };
        self.history.push(entry);
        self.bump();
        event!(
            target: "baccarat_core::session",
            Level::DEBUG,
            seat = %seat,
            rank = %rank,
            remaining = self.shoe.total(),
            version = self.version
        );
        Ok(entry)
    }

    pub fn mark_hand_boundary(&mut self) {
        self.history.push(HistoryEntry::Separator);
        self.bump();
    }

    /// Pops the most recent entry, returning a card to the shoe if needed.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop()?;
        if let HistoryEntry::Card { rank, .. } = entry {
            if let Err(err) = self.shoe.restore(rank) {
                tracing::warn!(
                    target: "baccarat_core::session",
                    rank = %rank,
                    error = %err,
                    "undo found the rank already full; count left unchanged"
                );
            }
        }
        self.bump();
        Some(entry)
    }

    pub fn clear(&mut self) {
        self.shoe.reset();
        self.history.clear();
        self.bump();
        event!(
            target: "baccarat_core::session",
            Level::DEBUG,
            version = self.version,
            "shoe reset"
        );
    }

    pub fn analyze(&self, settings: &AdvisorSettings) -> Analysis {
        Analysis::compute(&self.shoe, settings, self.version)
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl Default for ShoeTracker {
    fn default() -> Self {
        Self::from_parts(ShoeState::standard(), Vec::new())
    }
}
