//! # sealbid-allocation
//!
//! **Pure deterministic allocation engine for sealed-bid auctions.**
//!
//! This is the compute plane — it takes the revealed bids accumulated in an
//! auction record and produces the winner list and uniform clearing price.
//! It has:
//!
//! - **Zero side effects**: no ledger reads, no ledger writes
//! - **Deterministic output**: same bids -> same winners on every node
//! - **Uniform pricing**: every winner pays the marginal admitted bid's price
//!
//! The integrity check against committed-but-unrevealed bids also lives
//! here, since it decides whether an allocation may be finalized at all.

pub mod allocate;
pub mod integrity;

pub use allocate::{Allocation, allocate, sort_bids};
pub use integrity::verify_all_revealed;
