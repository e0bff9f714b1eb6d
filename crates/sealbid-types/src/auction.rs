//! The shared auction record and its lifecycle states.
//!
//! One [`Auction`] exists per auction identifier and is the sole mutable
//! root record of the protocol. Bidders append commitments while it is
//! **open**, reveal cleartext while it is **closed**, and the seller ends it
//! once, after which the record is read-only.
//!
//! All maps are `BTreeMap` so the serialized record bytes — and the tie-break
//! order the allocation algorithm sees — are identical on every node.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{AUCTION_KEY_NAMESPACE, COMPOSITE_KEY_DELIMITER};
use crate::{AuctionId, BidCommitment, BidKey, BidderId, OrgId, RevealedBid, Winner};

// ---------------------------------------------------------------------------
// AuctionStatus
// ---------------------------------------------------------------------------

/// Lifecycle phase of an auction.
///
/// Transitions are strictly monotonic: `Open → Closed → Ended`. No reverse
/// transition and no skipping; the lifecycle engine enforces both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    /// Accepting bid commitments.
    Open,
    /// Commitments frozen; accepting reveals.
    Closed,
    /// Winners and clearing price computed; record is read-only.
    Ended,
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

// ---------------------------------------------------------------------------
// Auction
// ---------------------------------------------------------------------------

/// The shared auction record.
///
/// Created externally in status `Open`; every contract operation loads it
/// once, mutates an in-memory copy, and writes it back in a single put.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// The item being sold.
    pub item: String,
    /// Identity of the seller; the only client allowed to close and end.
    pub seller: BidderId,
    /// Total units for sale.
    pub quantity: u64,
    /// Organizations with at least one commitment, in first-commit order.
    /// Append-only; never shrinks.
    pub organizations: Vec<OrgId>,
    /// Published bid commitments, keyed by bid key.
    pub private_bids: BTreeMap<BidKey, BidCommitment>,
    /// Verified cleartext bids, keyed by bid key. Every key here also
    /// exists in `private_bids`.
    pub revealed_bids: BTreeMap<BidKey, RevealedBid>,
    /// Final allocation, written once at end time.
    pub winners: Vec<Winner>,
    /// Uniform clearing price — the marginal admitted bid's price.
    /// `None` until the auction has ended.
    pub price: Option<u64>,
    /// Current lifecycle phase.
    pub status: AuctionStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Auction {
    /// Create a fresh auction record in status `Open`.
    #[must_use]
    pub fn new(item: impl Into<String>, seller: BidderId, quantity: u64) -> Self {
        Self {
            item: item.into(),
            seller,
            quantity,
            organizations: Vec::new(),
            private_bids: BTreeMap::new(),
            revealed_bids: BTreeMap::new(),
            winners: Vec::new(),
            price: None,
            status: AuctionStatus::Open,
            created_at: Utc::now(),
        }
    }

    /// World-state key under which an auction record is stored.
    #[must_use]
    pub fn storage_key(auction_id: &AuctionId) -> String {
        let d = COMPOSITE_KEY_DELIMITER;
        format!("{AUCTION_KEY_NAMESPACE}{d}{auction_id}")
    }

    /// Whether `org` has already published a commitment in this auction.
    #[must_use]
    pub fn is_participant(&self, org: &OrgId) -> bool {
        self.organizations.contains(org)
    }

    /// Record `org` as a participant. Returns `true` if the org was new
    /// (i.e. the endorsement policy needs updating).
    pub fn add_participant(&mut self, org: OrgId) -> bool {
        if self.organizations.contains(&org) {
            return false;
        }
        self.organizations.push(org);
        true
    }

    /// Total units allocated to winners.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.winners.iter().map(|w| w.quantity).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
