//! Error types for the sealbid auction contract.
//!
//! All errors use the `SB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Lifecycle / access errors
//! - 2xx: Commitment errors
//! - 3xx: Reveal errors
//! - 4xx: Allocation errors
//! - 9xx: General / internal errors
//!
//! Every error is terminal for the transaction that raised it: the contract
//! never retries internally, and a failed operation performs no write.

use thiserror::Error;

use crate::{AuctionId, AuctionStatus, BidKey, BidderId, OrgId};

/// Central error enum for all sealbid operations.
#[derive(Debug, Error)]
pub enum SealbidError {
    // =================================================================
    // Lifecycle / Access Errors (1xx)
    // =================================================================
    /// No auction record exists under the given identifier.
    #[error("SB_ERR_100: Auction not found: {0}")]
    AuctionNotFound(AuctionId),

    /// The operation requires an open auction.
    #[error("SB_ERR_101: Auction {auction} is {actual}, not open")]
    AuctionNotOpen {
        auction: AuctionId,
        actual: AuctionStatus,
    },

    /// The operation requires a closed auction.
    #[error("SB_ERR_102: Auction {auction} is {actual}, not closed")]
    AuctionNotClosed {
        auction: AuctionId,
        actual: AuctionStatus,
    },

    /// Only the seller may drive the auction lifecycle.
    #[error("SB_ERR_103: Client {caller} is not the seller of auction {auction}")]
    NotSeller {
        auction: AuctionId,
        caller: BidderId,
    },

    /// The caller's organization never published a commitment in this auction.
    #[error("SB_ERR_104: Organization {org} is not a participant in auction {auction}")]
    NotParticipant { auction: AuctionId, org: OrgId },

    // =================================================================
    // Commitment Errors (2xx)
    // =================================================================
    /// No commitment hash exists for this bid key — either it was never
    /// lodged in the caller org's private store, or it was never published
    /// into the auction record.
    #[error("SB_ERR_200: Bid commitment not found for key {0}")]
    CommitmentNotFound(BidKey),

    // =================================================================
    // Reveal Errors (3xx)
    // =================================================================
    /// The hash of the revealed cleartext does not match the private-store
    /// commitment; the caller is lying about the content of their bid.
    #[error("SB_ERR_300: Revealed bid hash {computed} does not match commitment {committed}")]
    RevealMismatch { computed: String, committed: String },

    /// The private-store commitment no longer matches the hash recorded in
    /// the public auction record at submit time; the bid was changed after
    /// its commitment was published.
    #[error("SB_ERR_301: Commitment {private} diverged from published hash {published}")]
    CommitmentTampered { private: String, published: String },

    /// Only the original bidder may reveal their own bid.
    #[error("SB_ERR_302: Client {caller} is not the owner of bid placed by {owner}")]
    NotBidOwner { caller: BidderId, owner: BidderId },

    // =================================================================
    // Allocation Errors (4xx)
    // =================================================================
    /// The auction cannot end before at least one bid has been revealed.
    #[error("SB_ERR_400: No bids have been revealed in auction {0}")]
    NoRevealedBids(AuctionId),

    /// One or more commitments have no corresponding reveal; a concealed
    /// bid could outrank the computed clearing price, so ending is blocked.
    #[error(
        "SB_ERR_401: {unrevealed} committed bid(s) from {orgs:?} remain unrevealed; \
         a concealed bid could change the outcome"
    )]
    UnresolvedHigherBid {
        unrevealed: usize,
        orgs: Vec<OrgId>,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SB_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("SB_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// World-state or private-store access failure.
    #[error("SB_ERR_902: Storage error: {0}")]
    Storage(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SealbidError>;

impl From<serde_json::Error> for SealbidError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
