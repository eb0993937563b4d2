//! Expected value per unit staked.
//!
//! The commission rebate is applied as a flat `commission / 2` on every bet,
//! side bets included.

use crate::engine::OutcomeProbabilities;
use crate::model::bet::BetKind;
use crate::model::payout::PayoutTable;
use serde::Serialize;

/// Super 6 is priced at a fixed 12 to 1 regardless of the table entry.
pub const SUPER6_NET_ODDS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BetEv {
    pub kind: BetKind,
    pub probability: f64,
    /// Net odds quoted by the table.
    pub payout: f64,
    pub ev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TieBonusEv {
    pub point: u8,
    pub probability: f64,
    pub payout: f64,
    pub ev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvReport {
    /// One entry per [`BetKind::ALL`], in that order.
    pub bets: Vec<BetEv>,
    pub tie_bonuses: Vec<TieBonusEv>,
    pub total_cards: u32,
}

impl EvReport {
    pub fn bet(&self, kind: BetKind) -> Option<&BetEv> {
        self.bets.iter().find(|bet| bet.kind == kind)
    }
}

/// Prices every bet. `commission_rate` is a percentage (2.0 means 2%).
pub fn evaluate(
    probs: &OutcomeProbabilities,
    payouts: &PayoutTable,
    commission_rate: f64,
    total_cards: u32,
) -> EvReport {
    let rebate = commission_rate / 100.0 / 2.0;

    let bets = BetKind::ALL
        .iter()
        .map(|&kind| {
            let payout = payouts.net_odds(kind);
            let (probability, ev) = match kind {
                BetKind::Player => (
                    probs.player_win,
                    probs.player_win * payout - probs.banker_win + rebate,
                ),
                BetKind::Banker => (
                    probs.banker_win,
                    probs.banker_win * payout - probs.player_win + rebate,
                ),
                BetKind::Tie => (probs.tie, probs.tie * payout - (1.0 - probs.tie) + rebate),
                BetKind::PlayerPair => (
                    probs.player_pair,
                    probs.player_pair * (payout + 1.0) - 1.0 + rebate,
                ),
                BetKind::BankerPair => (
                    probs.banker_pair,
                    probs.banker_pair * (payout + 1.0) - 1.0 + rebate,
                ),
                BetKind::Super6 => (
                    probs.super6,
                    probs.super6 * SUPER6_NET_ODDS - (1.0 - probs.super6) + rebate,
                ),
            };
            BetEv {
                kind,
                probability,
                payout,
                ev,
            }
        })
        .collect();

    let tie_bonuses = payouts
        .tie_bonus
        .iter()
        .filter(|&(&point, _)| point < 10)
        .map(|(&point, &payout)| {
            let probability = probs.tie_by_point[point as usize];
            TieBonusEv {
                point,
                probability,
                payout,
                ev: probability * payout - (1.0 - probability) + rebate,
            }
        })
        .collect();

    EvReport {
        bets,
        tie_bonuses,
        total_cards,
    }
}
