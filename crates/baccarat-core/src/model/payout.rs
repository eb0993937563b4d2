use crate::model::bet::BetKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Net odds quoted by the table for each bet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutTable {
    pub banker: f64,
    pub player: f64,
    pub tie: f64,
    pub player_pair: f64,
    pub banker_pair: f64,
    pub super6: f64,
    /// Optional tie side bets keyed by the tied point (0..=9).
    pub tie_bonus: BTreeMap<u8, f64>,
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self {
            banker: 0.95,
            player: 1.0,
            tie: 8.0,
            player_pair: 11.0,
            banker_pair: 11.0,
            super6: 12.0,
            tie_bonus: BTreeMap::new(),
        }
    }
}

impl PayoutTable {
    pub fn net_odds(&self, kind: BetKind) -> f64 {
        match kind {
            BetKind::Banker => self.banker,
            BetKind::Player => self.player,
            BetKind::Tie => self.tie,
            BetKind::PlayerPair => self.player_pair,
            BetKind::BankerPair => self.banker_pair,
            BetKind::Super6 => self.super6,
        }
    }
}
