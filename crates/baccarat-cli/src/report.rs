//! Terminal and JSON rendering of tracker state and analyses.

use std::fmt;

use baccarat_core::{Analysis, HistoryEntry, Seat, ShoeState, ShoeTracker};
use serde::Serialize;

/// Human-readable analysis table.
pub struct AnalysisView<'a>(pub &'a Analysis);

impl fmt::Display for AnalysisView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        let probs = &analysis.probabilities;
        writeln!(f, "Cards remaining: {}", analysis.total_cards)?;
        if probs.is_empty() {
            writeln!(f, "Too few cards left to deal a hand; probabilities are zero.")?;
        }
        writeln!(
            f,
            "Banker {:.4}%  Player {:.4}%  Tie {:.4}%",
            probs.banker_win * 100.0,
            probs.player_win * 100.0,
            probs.tie * 100.0
        )?;
        writeln!(
            f,
            "Super 6 {:.4}% (two-card {:.4}%, three-card {:.4}%)",
            probs.super6 * 100.0,
            probs.super6_two_card * 100.0,
            probs.super6_three_card * 100.0
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<12} {:>9} {:>7} {:>9} {:>8} {:>12}",
            "Bet", "Prob %", "Pays", "EV %", "Kelly %", "Stake"
        )?;
        for rec in &analysis.recommendations {
            let payout = analysis
                .report
                .bet(rec.kind)
                .map(|bet| bet.payout)
                .unwrap_or_default();
            writeln!(
                f,
                "{:<12} {:>9.4} {:>7.2} {:>+9.4} {:>8.3} {:>12}{}",
                rec.kind.label(),
                rec.probability * 100.0,
                payout,
                rec.ev * 100.0,
                rec.kelly_fraction.max(0.0) * 100.0,
                rec.stake,
                if rec.should_bet { "  BET" } else { "" }
            )?;
        }
        if !analysis.report.tie_bonuses.is_empty() {
            writeln!(f)?;
            for bonus in &analysis.report.tie_bonuses {
                writeln!(
                    f,
                    "Tie on {}: {:.4}% pays {:.1} EV {:+.4}%",
                    bonus.point,
                    bonus.probability * 100.0,
                    bonus.payout,
                    bonus.ev * 100.0
                )?;
            }
        }
        Ok(())
    }
}

/// Remaining counts per rank plus the dealt history, newest last.
pub struct StatusView<'a>(pub &'a ShoeTracker);

impl fmt::Display for StatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tracker = self.0;
        let shoe = tracker.shoe();
        writeln!(
            f,
            "{}-deck shoe, {} cards remaining (version {})",
            shoe.decks(),
            shoe.total(),
            tracker.version()
        )?;
        let counts: Vec<String> = shoe
            .iter()
            .map(|(rank, count)| format!("{rank}:{count}"))
            .collect();
        writeln!(f, "{}", counts.join(" "))?;
        writeln!(f, "History: {}", HistoryLine(tracker.history()))?;
        write!(f, "Next card: {}", tracker.next_seat())
    }
}

struct HistoryLine<'a>(&'a [HistoryEntry]);

impl fmt::Display for HistoryLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        for (idx, entry) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            match entry {
                HistoryEntry::Card { seat, rank } => write!(f, "{}{rank}", seat.initial())?,
                HistoryEntry::Separator => f.write_str("|")?,
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct StatusJson<'a> {
    pub total_cards: u32,
    pub version: u64,
    pub next_seat: Seat,
    pub shoe: &'a ShoeState,
    pub history: &'a [HistoryEntry],
}

impl<'a> StatusJson<'a> {
    pub fn new(tracker: &'a ShoeTracker) -> Self {
        Self {
            total_cards: tracker.shoe().total(),
            version: tracker.version(),
            next_seat: tracker.next_seat(),
            shoe: tracker.shoe(),
            history: tracker.history(),
        }
    }
}

pub fn analysis_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

pub fn status_json(tracker: &ShoeTracker) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StatusJson::new(tracker))
}
