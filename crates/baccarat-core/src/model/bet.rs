use core::fmt;
use serde::{Deserialize, Serialize};

/// Bets the advisor prices, in recommendation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetKind {
    Banker,
    Player,
    Tie,
    BankerPair,
    PlayerPair,
    Super6,
}

impl BetKind {
    pub const ALL: [BetKind; 6] = [
        BetKind::Banker,
        BetKind::Player,
        BetKind::Tie,
        BetKind::BankerPair,
        BetKind::PlayerPair,
        BetKind::Super6,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BetKind::Banker => "banker",
            BetKind::Player => "player",
            BetKind::Tie => "tie",
            BetKind::BankerPair => "banker_pair",
            BetKind::PlayerPair => "player_pair",
            BetKind::Super6 => "super6",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BetKind::Banker => "Banker",
            BetKind::Player => "Player",
            BetKind::Tie => "Tie",
            BetKind::BankerPair => "Banker Pair",
            BetKind::PlayerPair => "Player Pair",
            BetKind::Super6 => "Super 6",
        }
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::BetKind;

    #[test]
    fn enumeration_order_starts_with_banker() {
        assert_eq!(BetKind::ALL[0], BetKind::Banker);
        assert_eq!(BetKind::ALL[5], BetKind::Super6);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&BetKind::PlayerPair).unwrap();
        assert_eq!(json, "\"player_pair\"");
        assert_eq!(BetKind::PlayerPair.as_str(), "player_pair");
    }
}
