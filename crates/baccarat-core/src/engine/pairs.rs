use crate::model::shoe::ShoeState;

/// Chance that the first two cards to one seat share a rank.
///
/// Both pair bets reuse this marginal value; it does not reserve the cards
/// already committed to the other seat.
pub fn pair_probability(shoe: &ShoeState) -> f64 {
    let total = shoe.total();
    if total < 2 {
        return 0.0;
    }
    let total = total as f64;
    shoe.iter()
        .filter(|&(_, count)| count >= 2)
        .map(|(_, count)| {
            let c = count as f64;
            (c / total) * ((c - 1.0) / (total - 1.0))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rank::Rank;

    #[test]
    fn fresh_shoe_matches_closed_form() {
        let expected = 13.0 * (32.0 / 416.0) * (31.0 / 415.0);
        let actual = pair_probability(&ShoeState::standard());
        assert!((actual - expected).abs() < 1e-15, "{actual} vs {expected}");
        assert!((actual - 0.074699).abs() < 1e-6);
    }

    #[test]
    fn singletons_cannot_pair() {
        let mut counts = [0u8; 13];
        counts[Rank::Ace.index()] = 1;
        counts[Rank::King.index()] = 1;
        counts[Rank::Two.index()] = 1;
        let shoe = ShoeState::from_counts(8, counts).unwrap();
        assert_eq!(pair_probability(&shoe), 0.0);
    }

    #[test]
    fn fewer_than_two_cards_is_zero() {
        let mut counts = [0u8; 13];
        counts[Rank::Ace.index()] = 1;
        let shoe = ShoeState::from_counts(8, counts).unwrap();
        assert_eq!(pair_probability(&shoe), 0.0);
        let empty = ShoeState::from_counts(8, [0; 13]).unwrap();
        assert_eq!(pair_probability(&empty), 0.0);
    }

    #[test]
    fn single_rank_shoe_always_pairs() {
        let mut counts = [0u8; 13];
        counts[Rank::Seven.index()] = 10;
        let shoe = ShoeState::from_counts(8, counts).unwrap();
        assert_eq!(pair_probability(&shoe), 1.0);
    }
}
