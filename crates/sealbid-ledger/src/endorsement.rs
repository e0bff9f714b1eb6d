//! The endorsement-policy seam.
//!
//! Whenever a new organization joins an auction, the contract must widen
//! the set of organizations whose endorsement is required to mutate that
//! auction's record — otherwise an org that has bid could be locked out of
//! endorsing the close/end transactions. Policy evaluation itself is the
//! platform's job; the contract only issues the update.

use sealbid_types::{AuctionId, OrgId, Result};

/// Side-effecting call into the platform's policy configuration.
pub trait EndorsementPolicy {
    /// Require endorsement from exactly `orgs` for future writes to
    /// `auction_id`'s record. Called with the full, current org set every
    /// time membership grows.
    fn set_required_endorsers(&mut self, auction_id: &AuctionId, orgs: &[OrgId]) -> Result<()>;
}

/// Records every policy update it receives. The integration suite asserts
/// that the endorser set tracks auction membership exactly.
#[derive(Debug, Default)]
pub struct RecordingPolicy {
    updates: Vec<(AuctionId, Vec<OrgId>)>,
}

impl RecordingPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All updates received so far, oldest first.
    #[must_use]
    pub fn updates(&self) -> &[(AuctionId, Vec<OrgId>)] {
        &self.updates
    }

    /// The most recent endorser set for `auction_id`, if any update was
    /// ever issued for it.
    #[must_use]
    pub fn current_endorsers(&self, auction_id: &AuctionId) -> Option<&[OrgId]> {
        self.updates
            .iter()
            .rev()
            .find(|(id, _)| id == auction_id)
            .map(|(_, orgs)| orgs.as_slice())
    }
}

impl EndorsementPolicy for RecordingPolicy {
    fn set_required_endorsers(&mut self, auction_id: &AuctionId, orgs: &[OrgId]) -> Result<()> {
        self.updates.push((auction_id.clone(), orgs.to_vec()));
        Ok(())
    }
}
