//! Exact outcome probabilities for the next hand dealt from a known shoe.
//!
//! This module is composed of:
//! - `rules`: the player and banker drawing rules.
//! - `enumerate`: the recursive walk over every card sequence of one hand.
//! - `pairs`: the marginal pair probability shared by both pair bets.

mod enumerate;
pub mod pairs;
pub mod rules;

pub use enumerate::{OutcomeMass, PartialHand, enumerate};
pub use pairs::pair_probability;

use crate::model::shoe::ShoeState;
use serde::Serialize;
use tracing::{Level, event};

/// Below this many cards a complete hand is not guaranteed, so every
/// probability is reported as zero.
pub const MIN_CARDS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OutcomeProbabilities {
    pub player_win: f64,
    pub banker_win: f64,
    pub tie: f64,
    /// Tie mass split by the tied point.
    pub tie_by_point: [f64; 10],
    pub player_pair: f64,
    pub banker_pair: f64,
    /// Banker wins with a final total of six, two or three cards.
    pub super6: f64,
    pub super6_two_card: f64,
    pub super6_three_card: f64,
}

impl OutcomeProbabilities {
    pub fn main_total(&self) -> f64 {
        self.player_win + self.banker_win + self.tie
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Computes the outcome distribution of the next hand.
pub fn calculate(shoe: &ShoeState) -> OutcomeProbabilities {
    let total = shoe.total();
    debug_assert_eq!(
        shoe.value_counts().iter().sum::<u32>(),
        total,
        "value buckets must account for every card"
    );
    if total < MIN_CARDS {
        event!(
            target: "baccarat_core::engine",
            Level::DEBUG,
            total,
            "shoe below minimum depth; reporting zero probabilities"
        );
        return OutcomeProbabilities::default();
    }

    let mass = enumerate(shoe.value_counts(), total);
    let pair = pair_probability(shoe);

    event!(
        target: "baccarat_core::engine",
        Level::DEBUG,
        total,
        terminal_hands = mass.terminal_hands,
        player_win = mass.player_win,
        banker_win = mass.banker_win,
        tie = mass.tie
    );

    OutcomeProbabilities {
        player_win: mass.player_win,
        banker_win: mass.banker_win,
        tie: mass.tie,
        tie_by_point: mass.tie_by_point,
        player_pair: pair,
        banker_pair: pair,
        super6: mass.super6_two_card + mass.super6_three_card,
        super6_two_card: mass.super6_two_card,
        super6_three_card: mass.super6_three_card,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rank::Rank;

    #[test]
    fn fresh_shoe_reproduces_reference_odds() {
        let probs = calculate(&ShoeState::standard());
        assert!((probs.banker_win - 0.4586).abs() < 1e-4, "{}", probs.banker_win);
        assert!((probs.player_win - 0.4462).abs() < 1e-4, "{}", probs.player_win);
        assert!((probs.tie - 0.0951).abs() < 1e-4, "{}", probs.tie);
    }

    #[test]
    fn main_outcomes_sum_to_one() {
        let probs = calculate(&ShoeState::standard());
        assert!((probs.main_total() - 1.0).abs() < 1e-9);
        let split: f64 = probs.tie_by_point.iter().sum();
        assert!((split - probs.tie).abs() < 1e-12);
    }

    #[test]
    fn super6_is_part_of_banker_mass() {
        let probs = calculate(&ShoeState::standard());
        assert!(probs.super6 > 0.0);
        assert!(probs.super6 < probs.banker_win);
        assert_eq!(probs.super6, probs.super6_two_card + probs.super6_three_card);
    }

    #[test]
    fn shallow_shoe_reports_zero() {
        let mut counts = [0u8; 13];
        counts[Rank::Ace.index()] = 3;
        counts[Rank::Nine.index()] = 2;
        let shoe = ShoeState::from_counts(8, counts).unwrap();
        assert_eq!(shoe.total(), 5);
        let probs = calculate(&shoe);
        assert!(probs.is_empty());
        assert_eq!(probs.player_pair, 0.0);
        assert_eq!(probs.banker_pair, 0.0);
    }

    #[test]
    fn exactly_six_cards_is_enumerated() {
        let mut counts = [0u8; 13];
        counts[Rank::King.index()] = 6;
        let shoe = ShoeState::from_counts(8, counts).unwrap();
        let probs = calculate(&shoe);
        assert_eq!(probs.tie, 1.0);
        assert_eq!(probs.tie_by_point[0], 1.0);
        assert_eq!(probs.player_pair, 1.0);
    }

    #[test]
    fn pair_bets_share_one_value() {
        let probs = calculate(&ShoeState::standard());
        assert_eq!(probs.player_pair, probs.banker_pair);
    }
}
