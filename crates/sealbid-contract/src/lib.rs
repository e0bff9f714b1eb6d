//! # sealbid-contract
//!
//! **Transaction Plane**: the sealed-bid auction contract itself.
//!
//! ## Architecture
//!
//! Three cooperating components, all operating on one shared [`Auction`]
//! record per auction:
//!
//! 1. **Bid Commitment Manager** (`submit.rs`): publishes a private-store
//!    commitment hash into the public record and keeps the endorsement
//!    policy in sync with auction membership
//! 2. **Reveal Verifier** (`reveal.rs`): admits cleartext bids after four
//!    independent checks against the commitment
//! 3. **Lifecycle Engine** (`lifecycle.rs`): drives open → closed → ended
//!    and runs the allocation at end time
//!
//! ## Transaction model
//!
//! Every operation is one serializable transaction: load the record once,
//! mutate an in-memory copy, write it back with a single put. Conflicting
//! concurrent writers are ordered and rejected by the platform; a failed
//! operation writes nothing.
//!
//! [`Auction`]: sealbid_types::Auction

pub mod contract;
pub mod lifecycle;
pub mod query;
pub mod reveal;
pub mod submit;

pub use contract::AuctionContract;
