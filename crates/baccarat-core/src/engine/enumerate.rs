//! Exhaustive walk over every card sequence a single hand can consume.
//!
//! Each step carries the running probability of the branch, the remaining
//! value buckets and the partial hand. The hand itself decides which seat
//! receives the next card, so the drawing rules live in one place.

use super::rules::{banker_draws, hand_total, is_natural, player_draws};
use crate::model::seat::Seat;
use crate::model::shoe::ValueCounts;

/// Card values dealt so far, in deal order per seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialHand {
    player: [u8; 3],
    player_len: u8,
    banker: [u8; 3],
    banker_len: u8,
}

impl PartialHand {
    pub const fn new() -> Self {
        Self {
            player: [0; 3],
            player_len: 0,
            banker: [0; 3],
            banker_len: 0,
        }
    }

    pub fn player_cards(&self) -> &[u8] {
        &self.player[..self.player_len as usize]
    }

    pub fn banker_cards(&self) -> &[u8] {
        &self.banker[..self.banker_len as usize]
    }

    pub fn player_total(&self) -> u8 {
        hand_total(self.player_cards())
    }

    pub fn banker_total(&self) -> u8 {
        hand_total(self.banker_cards())
    }

    fn player_third(&self) -> Option<u8> {
        (self.player_len == 3).then_some(self.player[2])
    }

    /// Seat owed the next card, or `None` once the hand is complete.
    pub fn next_draw(&self) -> Option<Seat> {
        match (self.player_len, self.banker_len) {
            (0, 0) | (1, 1) => Some(Seat::Player),
            (1, 0) | (2, 1) => Some(Seat::Banker),
            (2, 2) => {
                let player = self.player_total();
                let banker = self.banker_total();
                if is_natural(player) || is_natural(banker) {
                    None
                } else if player_draws(player) {
                    Some(Seat::Player)
                } else if banker_draws(banker, None) {
                    Some(Seat::Banker)
                } else {
                    None
                }
            }
            (3, 2) => banker_draws(self.banker_total(), self.player_third())
                .then_some(Seat::Banker),
            _ => None,
        }
    }

    pub fn with_card(mut self, seat: Seat, value: u8) -> Self {
        match seat {
            Seat::Player => {
                self.player[self.player_len as usize] = value;
                self.player_len += 1;
            }
            Seat::Banker => {
                self.banker[self.banker_len as usize] = value;
                self.banker_len += 1;
            }
        }
        self
    }
}

/// Probability mass collected from completed hands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutcomeMass {
    pub player_win: f64,
    pub banker_win: f64,
    pub tie: f64,
    pub tie_by_point: [f64; 10],
    pub super6_two_card: f64,
    pub super6_three_card: f64,
    pub terminal_hands: u64,
}

impl OutcomeMass {
    fn settle(&mut self, hand: &PartialHand, probability: f64) {
        let player = hand.player_total();
        let banker = hand.banker_total();
        self.terminal_hands += 1;

        if player > banker {
            self.player_win += probability;
        } else if banker > player {
            self.banker_win += probability;
            if banker == 6 {
                if hand.banker_cards().len() == 3 {
                    self.super6_three_card += probability;
                } else {
                    self.super6_two_card += probability;
                }
            }
        } else {
            self.tie += probability;
            self.tie_by_point[player as usize] += probability;
        }
    }
}

/// Walks every hand that can be dealt from `counts` holding `remaining` cards.
pub fn enumerate(counts: ValueCounts, remaining: u32) -> OutcomeMass {
    let mut mass = OutcomeMass::default();
    let mut buckets = counts;
    walk(&mut buckets, remaining, PartialHand::new(), 1.0, &mut mass);
    mass
}

fn walk(
    buckets: &mut ValueCounts,
    remaining: u32,
    hand: PartialHand,
    probability: f64,
    mass: &mut OutcomeMass,
) {
    let Some(seat) = hand.next_draw() else {
        mass.settle(&hand, probability);
        return;
    };

    for value in 0..10u8 {
        let count = buckets[value as usize];
        if count == 0 {
            continue;
        }
        let branch = probability * (count as f64 / remaining as f64);
        if branch == 0.0 {
            continue;
        }
        buckets[value as usize] -= 1;
        walk(buckets, remaining - 1, hand.with_card(seat, value), branch, mass);
        buckets[value as usize] += 1;
    }
}
