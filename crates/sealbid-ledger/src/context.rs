//! The per-transaction caller context.
//!
//! The platform authenticates every transaction before the contract runs;
//! what reaches the contract are three opaque facts: which organization is
//! calling, which client identity within it, and the submission reference
//! of the transaction. The contract never performs identity resolution.

use sealbid_types::{BidderId, OrgId, SubmissionRef};

/// Already-authenticated caller facts for one transaction.
#[derive(Debug, Clone)]
pub struct TransactionContext {
    org: OrgId,
    identity: BidderId,
    submission_ref: SubmissionRef,
}

impl TransactionContext {
    /// Build a context with a fresh submission reference.
    #[must_use]
    pub fn new(org: OrgId, identity: BidderId) -> Self {
        Self {
            org,
            identity,
            submission_ref: SubmissionRef::new(),
        }
    }

    /// Build a context for a specific submission reference (used when the
    /// caller refers back to an earlier lodging transaction).
    #[must_use]
    pub fn with_submission_ref(
        org: OrgId,
        identity: BidderId,
        submission_ref: SubmissionRef,
    ) -> Self {
        Self {
            org,
            identity,
            submission_ref,
        }
    }

    /// The caller's organization identifier.
    #[must_use]
    pub fn org(&self) -> &OrgId {
        &self.org
    }

    /// The caller's unique client identity.
    #[must_use]
    pub fn identity(&self) -> &BidderId {
        &self.identity
    }

    /// The submission reference of this transaction.
    #[must_use]
    pub fn submission_ref(&self) -> SubmissionRef {
        self.submission_ref
    }
}
