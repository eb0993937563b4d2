#![deny(warnings)]
//! Exact-composition baccarat advisor.
//!
//! The crate is a pure functional core: a [`ShoeState`] is fed to
//! [`engine::calculate`], the resulting [`OutcomeProbabilities`] are priced by
//! [`ev::evaluate`] and sized by [`kelly::allocate`]. The [`session`] module is
//! the stateful shell that owns the shoe between cards.

pub mod engine;
pub mod ev;
pub mod kelly;
pub mod model;
pub mod session;

pub use engine::{OutcomeProbabilities, calculate};
pub use ev::{BetEv, EvReport, TieBonusEv};
pub use kelly::{BetRecommendation, KellyConfig, KellyConfigError};
pub use model::bet::BetKind;
pub use model::payout::PayoutTable;
pub use model::rank::Rank;
pub use model::shoe::{ShoeError, ShoeState};
pub use session::{AdvisorSettings, Analysis, HistoryEntry, Seat, SessionSnapshot, ShoeTracker};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "baccarat-advisor"
    }

    pub const fn codename() -> &'static str {
        "Exact Shoe"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
