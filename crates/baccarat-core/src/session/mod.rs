//! Stateful shell around the pure engine.
//!
//! - `tracker`: the mutable shoe, card history and undo.
//! - `serialization`: JSON snapshots of a tracker between runs.

mod serialization;
mod tracker;

pub use crate::model::seat::Seat;
pub use serialization::{SessionSnapshot, SnapshotError};
pub use tracker::{HistoryEntry, ShoeTracker};

use crate::engine::{OutcomeProbabilities, calculate};
use crate::ev::{EvReport, evaluate};
use crate::kelly::{BetRecommendation, KellyConfig, allocate};
use crate::model::payout::PayoutTable;
use crate::model::shoe::ShoeState;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMMISSION_RATE: f64 = 2.0;
pub const DEFAULT_CAPITAL: u64 = 10_000_000;

/// Inputs besides the shoe that every analysis pass needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorSettings {
    pub payouts: PayoutTable,
    /// Percentage rebate; 2.0 means 2%.
    pub commission_rate: f64,
    pub capital: u64,
    pub kelly: KellyConfig,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            payouts: PayoutTable::default(),
            commission_rate: DEFAULT_COMMISSION_RATE,
            capital: DEFAULT_CAPITAL,
            kelly: KellyConfig::default(),
        }
    }
}

/// Everything derived from one shoe version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub shoe_version: u64,
    pub total_cards: u32,
    pub probabilities: OutcomeProbabilities,
    pub report: EvReport,
    pub recommendations: Vec<BetRecommendation>,
}

impl Analysis {
    /// Runs the full pipeline for `shoe` from scratch.
    pub fn compute(shoe: &ShoeState, settings: &AdvisorSettings, shoe_version: u64) -> Self {
        let total_cards = shoe.total();
        let probabilities = calculate(shoe);
        let report = evaluate(
            &probabilities,
            &settings.payouts,
            settings.commission_rate,
            total_cards,
        );
        let recommendations = allocate(&report, settings.capital, &settings.kelly);
        Self {
            shoe_version,
            total_cards,
            probabilities,
            report,
            recommendations,
        }
    }

    /// False once the tracker has moved past the version this was computed for.
    pub fn is_current_for(&self, tracker: &ShoeTracker) -> bool {
        self.shoe_version == tracker.version()
    }
}
