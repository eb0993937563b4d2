use crate::model::rank::Rank;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_DECKS: u8 = 8;
pub const MAX_DECKS: u8 = 16;
const CARDS_PER_RANK_PER_DECK: u8 = 4;

/// Remaining cards grouped by baccarat point value (index 0..=9).
pub type ValueCounts = [u32; 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    #[error("deck count must be between 1 and 16, got {0}")]
    InvalidDeckCount(u8),
    #[error("no {0} left in the shoe")]
    Exhausted(Rank),
    #[error("every {0} is already back in the shoe")]
    Full(Rank),
    #[error("count {count} for {rank} exceeds {max}")]
    CountOutOfRange { rank: Rank, count: u8, max: u8 },
}

/// Remaining undealt cards, one count per rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShoeState {
    decks: u8,
    counts: [u8; 13],
}

impl ShoeState {
    /// A freshly shuffled shoe with every rank at `4 * decks`.
    pub fn full(decks: u8) -> Result<Self, ShoeError> {
        let per_rank = per_rank_limit(decks)?;
        Ok(Self {
            decks,
            counts: [per_rank; 13],
        })
    }

    pub fn standard() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            counts: [DEFAULT_DECKS * CARDS_PER_RANK_PER_DECK; 13],
        }
    }

    /// Builds a shoe from explicit counts ordered as [`Rank::ORDERED`].
    pub fn from_counts(decks: u8, counts: [u8; 13]) -> Result<Self, ShoeError> {
        let max = per_rank_limit(decks)?;
        for rank in Rank::ORDERED {
            let count = counts[rank.index()];
            if count > max {
                return Err(ShoeError::CountOutOfRange { rank, count, max });
            }
        }
        Ok(Self { decks, counts })
    }

    pub const fn decks(&self) -> u8 {
        self.decks
    }

    pub const fn full_rank_count(&self) -> u8 {
        self.decks * CARDS_PER_RANK_PER_DECK
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.index()]
    }

    pub fn counts(&self) -> &[u8; 13] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    pub fn is_full(&self) -> bool {
        self.counts.iter().all(|&c| c == self.full_rank_count())
    }

    pub fn remove(&mut self, rank: Rank) -> Result<(), ShoeError> {
        let slot = &mut self.counts[rank.index()];
        if *slot == 0 {
            return Err(ShoeError::Exhausted(rank));
        }
        *slot -= 1;
        Ok(())
    }

    pub fn restore(&mut self, rank: Rank) -> Result<(), ShoeError> {
        let max = self.full_rank_count();
        let slot = &mut self.counts[rank.index()];
        if *slot >= max {
            return Err(ShoeError::Full(rank));
        }
        *slot += 1;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.counts = [self.full_rank_count(); 13];
    }

    pub fn value_counts(&self) -> ValueCounts {
        let mut values = [0u32; 10];
        for rank in Rank::ORDERED {
            values[rank.baccarat_value() as usize] += self.count(rank) as u32;
        }
        values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ORDERED.iter().map(|&rank| (rank, self.count(rank)))
    }
}

impl Default for ShoeState {
    fn default() -> Self {
        Self::standard()
    }
}

fn per_rank_limit(decks: u8) -> Result<u8, ShoeError> {
    if decks == 0 || decks > MAX_DECKS {
        return Err(ShoeError::InvalidDeckCount(decks));
    }
    Ok(decks * CARDS_PER_RANK_PER_DECK)
}
