//! Fractional Kelly stake sizing.
//!
//! The Kelly criterion formula:
//!     f* = (b*p - q) / b
//!
//! Where:
//!     f* = fraction of capital to stake
//!     b  = net odds (decimal payout - 1)
//!     p  = probability of winning
//!     q  = 1 - p
//!
//! Pushes count toward `q`, which keeps the sizing conservative for bets
//! that return the stake on a tie.

use crate::ev::{BetEv, EvReport};
use crate::model::bet::BetKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_KELLY_FRACTION: f64 = 0.25;
pub const DEFAULT_MIN_PROBABILITY: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KellyConfigError {
    #[error("kelly fraction must be in (0, 1], got {0}")]
    Fraction(f64),
    #[error("minimum probability must be in [0, 1), got {0}")]
    MinProbability(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KellyConfig {
    /// Share of the full Kelly stake to recommend (0.25 = quarter Kelly).
    pub fraction: f64,
    /// Bets at or below this win probability are never recommended.
    pub min_probability: f64,
}

impl Default for KellyConfig {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_KELLY_FRACTION,
            min_probability: DEFAULT_MIN_PROBABILITY,
        }
    }
}

impl KellyConfig {
    pub fn validate(&self) -> Result<(), KellyConfigError> {
        if !(self.fraction > 0.0 && self.fraction <= 1.0) {
            return Err(KellyConfigError::Fraction(self.fraction));
        }
        if !(0.0..1.0).contains(&self.min_probability) {
            return Err(KellyConfigError::MinProbability(self.min_probability));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BetRecommendation {
    pub kind: BetKind,
    pub probability: f64,
    pub ev: f64,
    /// Full Kelly fraction before scaling; negative when the bet has no edge.
    pub kelly_fraction: f64,
    pub stake: u64,
    pub should_bet: bool,
}

/// Full Kelly fraction for a bet paying `net_odds` to one.
///
/// # Examples
/// ```
/// use baccarat_core::kelly::kelly_fraction;
/// let kelly = kelly_fraction(0.25, 4.0);
/// assert!((kelly - 0.0625).abs() < 1e-12);
/// ```
pub fn kelly_fraction(probability: f64, net_odds: f64) -> f64 {
    if net_odds <= 0.0 {
        return 0.0;
    }
    (net_odds * probability - (1.0 - probability)) / net_odds
}

fn recommend(bet: &BetEv, capital: u64, config: &KellyConfig) -> BetRecommendation {
    let kelly = kelly_fraction(bet.probability, bet.payout);
    let eligible = kelly > 0.0 && bet.probability > config.min_probability;
    let stake = if eligible {
        (kelly * config.fraction * capital as f64).floor() as u64
    } else {
        0
    };

    BetRecommendation {
        kind: bet.kind,
        probability: bet.probability,
        ev: bet.ev,
        kelly_fraction: kelly,
        stake,
        should_bet: stake > 0,
    }
}

/// Sizes every bet in `report` and ranks them by stake, largest first.
/// Equal stakes keep the report's bet order.
pub fn allocate(report: &EvReport, capital: u64, config: &KellyConfig) -> Vec<BetRecommendation> {
    debug_assert!(
        config.validate().is_ok(),
        "kelly config must be validated before sizing: {config:?}"
    );
    let mut recommendations: Vec<BetRecommendation> = report
        .bets
        .iter()
        .map(|bet| recommend(bet, capital, config))
        .collect();
    recommendations.sort_by(|a, b| b.stake.cmp(&a.stake));
    recommendations
}
