//! Fixed third-card rules, expressed over point values (0..=9).

/// Point total of a set of card values.
pub fn hand_total(values: &[u8]) -> u8 {
    values.iter().fold(0u8, |acc, &v| (acc + v) % 10)
}

pub const fn is_natural(total: u8) -> bool {
    total >= 8
}

/// Player draws on 0-5, stands on 6-7.
pub const fn player_draws(player_total: u8) -> bool {
    player_total <= 5
}

/// Banker tableau. `player_third` is the value of the player's third card, or
/// `None` when the player stood.
pub const fn banker_draws(banker_total: u8, player_third: Option<u8>) -> bool {
    match player_third {
        None => banker_total <= 5,
        Some(third) => match banker_total {
            0..=2 => true,
            3 => third != 8,
            4 => matches!(third, 2..=7),
            5 => matches!(third, 4..=7),
            6 => matches!(third, 6 | 7),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_wrap_modulo_ten() {
        assert_eq!(hand_total(&[7, 8]), 5);
        assert_eq!(hand_total(&[0, 0]), 0);
        assert_eq!(hand_total(&[9, 9, 9]), 7);
    }

    #[test]
    fn naturals_are_eight_and_nine() {
        assert!(is_natural(8));
        assert!(is_natural(9));
        assert!(!is_natural(7));
    }

    #[test]
    fn player_stands_on_six_and_seven() {
        assert!(player_draws(0));
        assert!(player_draws(5));
        assert!(!player_draws(6));
        assert!(!player_draws(7));
    }

    #[test]
    fn banker_draws_when_player_stood() {
        assert!(banker_draws(0, None));
        assert!(banker_draws(5, None));
        assert!(!banker_draws(6, None));
        assert!(!banker_draws(7, None));
    }

    #[test]
    fn banker_always_draws_on_zero_to_two() {
        for total in 0..=2 {
            for third in 0..=9 {
                assert!(banker_draws(total, Some(third)));
            }
        }
    }

    #[test]
    fn banker_three_stands_only_on_player_eight() {
        for third in 0..=9 {
            assert_eq!(banker_draws(3, Some(third)), third != 8);
        }
    }

    #[test]
    fn banker_four_five_six_follow_tableau() {
        let four: Vec<u8> = (0..=9).filter(|&t| banker_draws(4, Some(t))).collect();
        let five: Vec<u8> = (0..=9).filter(|&t| banker_draws(5, Some(t))).collect();
        let six: Vec<u8> = (0..=9).filter(|&t| banker_draws(6, Some(t))).collect();
        assert_eq!(four, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(five, vec![4, 5, 6, 7]);
        assert_eq!(six, vec![6, 7]);
    }

    #[test]
    fn banker_seven_always_stands() {
        for third in 0..=9 {
            assert!(!banker_draws(7, Some(third)));
        }
        assert!(!banker_draws(7, None));
    }
}
