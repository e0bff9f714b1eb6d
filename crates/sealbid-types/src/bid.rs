//! Bid model for the commit-reveal protocol.
//!
//! A bid lives in three representations over its lifetime:
//!
//! 1. [`SealedBid`] — the cleartext payload, lodged only in the bidder
//!    org's private store during the open phase.
//! 2. [`BidCommitment`] — the hex-encoded SHA-256 of that payload, published
//!    into the shared auction record so the commitment is tamper-evident.
//! 3. [`RevealedBid`] — the cleartext admitted into the public record after
//!    the auction closes and every reveal check passes.
//!
//! The hash is always computed over the payload's canonical JSON bytes
//! (serde field declaration order), so commit and reveal derive the exact
//! same digest from the exact same content.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{BidderId, OrgId, Result};

// ---------------------------------------------------------------------------
// SealedBid — the cleartext payload
// ---------------------------------------------------------------------------

/// The cleartext content of one bid.
///
/// Never written to the shared ledger directly: during the open phase only
/// its hash leaves the bidder org's private store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedBid {
    /// Units of the item the bidder wants.
    pub quantity: u64,
    /// Price per unit the bidder is willing to pay.
    pub price: u64,
    /// The bidder's organization.
    pub org: OrgId,
    /// The bidder's client identity. Must match the revealing caller.
    pub buyer: BidderId,
}

impl SealedBid {
    #[must_use]
    pub fn new(quantity: u64, price: u64, org: OrgId, buyer: BidderId) -> Self {
        Self {
            quantity,
            price,
            org,
            buyer,
        }
    }

    /// Canonical byte encoding of this bid — the exact bytes the commitment
    /// hash is computed over. JSON with fields in declaration order, so the
    /// encoding is byte-deterministic for identical content.
    pub fn to_canonical_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// SHA-256 digest of the canonical byte encoding.
    pub fn digest(&self) -> Result<[u8; 32]> {
        let bytes = self.to_canonical_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hasher.finalize().into())
    }
}

// ---------------------------------------------------------------------------
// BidCommitment — the published hash
// ---------------------------------------------------------------------------

/// A commitment slot in the public auction record.
///
/// Records which organization lodged the bid and the hex-encoded SHA-256
/// of its cleartext, fetched from that org's private store at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidCommitment {
    /// Organization that lodged the private bid.
    pub org: OrgId,
    /// Hex-encoded SHA-256 of the sealed bid's canonical bytes.
    pub hash: String,
}

impl BidCommitment {
    #[must_use]
    pub fn new(org: OrgId, hash: [u8; 32]) -> Self {
        Self {
            org,
            hash: hex::encode(hash),
        }
    }
}

// ---------------------------------------------------------------------------
// RevealedBid — the admitted cleartext
// ---------------------------------------------------------------------------

/// A bid admitted into the public record after all reveal checks passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedBid {
    /// Units of the item the bidder wants.
    pub quantity: u64,
    /// Price per unit the bidder is willing to pay.
    pub price: u64,
    /// The bidder's organization.
    pub org: OrgId,
    /// The bidder's client identity.
    pub buyer: BidderId,
}

impl From<SealedBid> for RevealedBid {
    fn from(bid: SealedBid) -> Self {
        Self {
            quantity: bid.quantity,
            price: bid.price,
            org: bid.org,
            buyer: bid.buyer,
        }
    }
}

// ---------------------------------------------------------------------------
// Winner
// ---------------------------------------------------------------------------

/// One entry in the final allocation: a buyer and the units they won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The winning bidder's identity.
    pub buyer: BidderId,
    /// Units allocated to this bidder (may be below their requested
    /// quantity for the marginal winner).
    pub quantity: u64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
