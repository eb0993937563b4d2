use baccarat_core::{HistoryEntry, Rank, ShoeError, ShoeTracker};
use thiserror::Error;

/// One keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Card(Rank),
    Separator,
    Undo,
    Clear,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    #[error("unrecognised key {0:?}; expected 1-9, 0/t, a, j, q, k, |, u, c or quit")]
    UnknownToken(String),
}

impl Key {
    pub fn parse(token: &str) -> Result<Self, KeypadError> {
        let trimmed = token.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "|" | "sep" => Ok(Key::Separator),
            "u" | "undo" => Ok(Key::Undo),
            "c" | "clear" => Ok(Key::Clear),
            "quit" | "exit" => Ok(Key::Quit),
            _ => Rank::from_symbol(trimmed)
                .map(Key::Card)
                .ok_or_else(|| KeypadError::UnknownToken(trimmed.to_string())),
        }
    }
}

/// Splits a line on whitespace and commas. Fails on the first unknown token,
/// so a typo never half-applies a line.
pub fn parse_line(line: &str) -> Result<Vec<Key>, KeypadError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(Key::parse)
        .collect()
}

/// Cards-only variant used by `deal` and `analyze --dealt`.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Rank>, KeypadError> {
    let mut ranks = Vec::new();
    for token in tokens {
        for key in parse_line(token.as_ref())? {
            match key {
                Key::Card(rank) => ranks.push(rank),
                _ => return Err(KeypadError::UnknownToken(token.as_ref().trim().to_string())),
            }
        }
    }
    Ok(ranks)
}

/// What a key did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Recorded(HistoryEntry),
    Undone(Option<HistoryEntry>),
    Cleared,
    Quit,
}

pub fn apply(tracker: &mut ShoeTracker, key: Key) -> Result<Applied, ShoeError> {
    match key {
        Key::Card(rank) => tracker.deal(rank).map(Applied::Recorded),
        Key::Separator => {
            tracker.mark_hand_boundary();
            Ok(Applied::Recorded(HistoryEntry::Separator))
        }
        Key::Undo => Ok(Applied::Undone(tracker.undo())),
        Key::Clear => {
            tracker.clear();
            Ok(Applied::Cleared)
        }
        Key::Quit => Ok(Applied::Quit),
    }
}

/// Result of one keypad line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub applied: Vec<Applied>,
    pub quit: bool,
}

/// Applies a whole line or none of it: keys run against a copy of the
/// tracker, which replaces the original only if every key succeeds. Keys
/// after `quit` are ignored.
pub fn apply_line(tracker: &mut ShoeTracker, keys: &[Key]) -> Result<LineOutcome, ShoeError> {
    let mut next = tracker.clone();
    let mut applied = Vec::with_capacity(keys.len());
    let mut quit = false;
    for &key in keys {
        match apply(&mut next, key)? {
            Applied::Quit => {
                quit = true;
                break;
            }
            other => applied.push(other),
        }
    }
    *tracker = next;
    Ok(LineOutcome { applied, quit })
}
