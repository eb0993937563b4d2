pub mod bet;
pub mod payout;
pub mod rank;
pub mod seat;
pub mod shoe;
