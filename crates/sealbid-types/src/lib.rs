//! # sealbid-types
//!
//! Shared types, errors, and constants for the **Sealbid** commit-reveal
//! auction contract.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AuctionId`], [`OrgId`], [`BidderId`], [`SubmissionRef`], [`BidKey`]
//! - **Auction record**: [`Auction`], [`AuctionStatus`]
//! - **Bid model**: [`SealedBid`], [`BidCommitment`], [`RevealedBid`], [`Winner`]
//! - **Errors**: [`SealbidError`] with `SB_ERR_` prefix codes
//! - **Constants**: key namespaces and composite-key layout

pub mod auction;
pub mod bid;
pub mod constants;
pub mod error;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use sealbid_types::{Auction, SealedBid, OrgId, ...};

pub use auction::*;
pub use bid::*;
pub use error::*;
pub use ids::*;

// Constants are accessed via `sealbid_types::constants::FOO`
// (not re-exported to avoid name collisions).
