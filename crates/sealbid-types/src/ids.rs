//! Identifiers used throughout the sealbid auction contract.
//!
//! `OrgId` and `BidderId` are opaque, already-authenticated values supplied
//! by the surrounding platform — the contract never resolves identity itself.
//! `SubmissionRef` uses UUIDv7 for time-ordered lexicographic sorting, and
//! `BidKey` is the composite key that uniquely names one commitment slot.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{BID_KEY_NAMESPACE, COMPOSITE_KEY_DELIMITER};

// ---------------------------------------------------------------------------
// AuctionId
// ---------------------------------------------------------------------------

/// Identifier of one auction record. Externally assigned; opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AuctionId(pub String);

impl AuctionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// OrgId
// ---------------------------------------------------------------------------

/// Identifier of a participating organization (consortium member).
///
/// Produced by the platform's identity layer; the contract treats it as an
/// opaque, already-authenticated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrgId(pub String);

impl OrgId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// BidderId
// ---------------------------------------------------------------------------

/// Unique identity string of one client (a bidder or the seller).
///
/// Like [`OrgId`], this arrives pre-authenticated from the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BidderId(pub String);

impl BidderId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BidderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SubmissionRef
// ---------------------------------------------------------------------------

/// Reference to the transaction that lodged a private bid.
///
/// Uses UUIDv7 so references sort by submission time. Each bid a client
/// lodges gets its own reference; the same reference always derives the
/// same [`BidKey`], which is what makes commitment publication idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SubmissionRef(pub Uuid);

impl SubmissionRef {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for SubmissionRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// BidKey
// ---------------------------------------------------------------------------

/// Composite key naming one commitment slot within one auction.
///
/// Layout: `\u{0}bid\u{0}<auction-id>\u{0}<submission-ref>\u{0}` — the leading
/// delimiter keeps composite keys out of the flat key namespace, and the
/// per-segment delimiters make the key collision-free across bidders.
/// Deriving the same `(auction, submission)` pair twice yields the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct BidKey(pub String);

impl BidKey {
    /// Derive the bid key for a `(auction, submission)` pair.
    #[must_use]
    pub fn derive(auction_id: &AuctionId, submission_ref: &SubmissionRef) -> Self {
        let d = COMPOSITE_KEY_DELIMITER;
        Self(format!(
            "{d}{BID_KEY_NAMESPACE}{d}{auction_id}{d}{submission_ref}{d}"
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delimiters are unprintable; show segments dot-separated instead.
        let printable: Vec<&str> = self
            .0
            .split(COMPOSITE_KEY_DELIMITER)
            .filter(|s| !s.is_empty())
            .collect();
        write!(f, "{}", printable.join("."))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
