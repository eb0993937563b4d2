use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    Player,
    Banker,
}

impl Seat {
    pub const fn other(self) -> Seat {
        match self {
            Seat::Player => Seat::Banker,
            Seat::Banker => Seat::Player,
        }
    }

    pub const fn initial(self) -> char {
        match self {
            Seat::Player => 'P',
            Seat::Banker => 'B',
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Seat::Player => "Player",
            Seat::Banker => "Banker",
        })
    }
}
