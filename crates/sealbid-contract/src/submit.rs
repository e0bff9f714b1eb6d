//! Bid Commitment Manager — publishes private commitments into the record.
//!
//! A bidder first lodges their cleartext bid in their own org's private
//! store (outside this operation), then calls `submit_commitment` with the
//! submission reference of that lodging transaction. The operation never
//! creates the private commitment; it only publishes its hash, so the
//! shared record becomes the tamper-evident registry of who committed to
//! what — without revealing anything.

use sealbid_ledger::{EndorsementPolicy, PrivateStore, TransactionContext, WorldState};
use sealbid_types::{
    AuctionId, AuctionStatus, BidCommitment, BidKey, Result, SealbidError, SubmissionRef,
};
use tracing::{debug, info};

use crate::AuctionContract;

impl<L, P, E> AuctionContract<L, P, E>
where
    L: WorldState,
    P: PrivateStore,
    E: EndorsementPolicy,
{
    /// Publish the caller org's private commitment for `submission_ref`
    /// into the auction record.
    ///
    /// Re-submitting the same `(auction, submission)` pair overwrites the
    /// same slot, never creates a duplicate. The first commitment from an
    /// organization also appends it to the participant set and pushes the
    /// widened org set to the endorsement policy.
    ///
    /// # Errors
    /// - [`SealbidError::AuctionNotFound`] if no such auction exists
    /// - [`SealbidError::AuctionNotOpen`] unless the auction is open
    /// - [`SealbidError::CommitmentNotFound`] if nothing was lodged in the
    ///   caller org's private store under the derived bid key
    pub fn submit_commitment(
        &mut self,
        ctx: &TransactionContext,
        auction_id: &AuctionId,
        submission_ref: &SubmissionRef,
    ) -> Result<()> {
        let mut auction = self.load_auction(auction_id)?;

        if auction.status != AuctionStatus::Open {
            return Err(SealbidError::AuctionNotOpen {
                auction: auction_id.clone(),
                actual: auction.status,
            });
        }

        let bid_key = BidKey::derive(auction_id, submission_ref);

        // Only the caller's own private store is consulted; the hash must
        // already be there from the earlier lodging transaction.
        let hash = self
            .private_store()
            .commitment_hash(ctx.org(), &bid_key)?
            .ok_or_else(|| SealbidError::CommitmentNotFound(bid_key.clone()))?;

        auction
            .private_bids
            .insert(bid_key.clone(), BidCommitment::new(ctx.org().clone(), hash));

        if auction.add_participant(ctx.org().clone()) {
            debug!(auction = %auction_id, org = %ctx.org(), "new participant org");
            let orgs = auction.organizations.clone();
            self.policy_mut().set_required_endorsers(auction_id, &orgs)?;
        }

        self.store_auction(auction_id, &auction)?;
        info!(
            auction = %auction_id,
            org = %ctx.org(),
            bid_key = %bid_key,
            "bid commitment recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sealbid_ledger::{MemoryLedger, MemoryPrivateStore, RecordingPolicy};
    use sealbid_types::{Auction, BidderId, OrgId, SealedBid};

    use super::*;

    fn contract() -> AuctionContract<MemoryLedger, MemoryPrivateStore, RecordingPolicy> {
        AuctionContract::new(
            MemoryLedger::new(),
            MemoryPrivateStore::new(),
            RecordingPolicy::new(),
        )
    }

    fn seed(
        c: &mut AuctionContract<MemoryLedger, MemoryPrivateStore, RecordingPolicy>,
        id: &AuctionId,
        quantity: u64,
    ) {
        let auction = Auction::new("painting", BidderId::new("seller"), quantity);
        c.seed_auction(id, &auction).unwrap();
    }

    fn lodge(
        c: &mut AuctionContract<MemoryLedger, MemoryPrivateStore, RecordingPolicy>,
        ctx: &TransactionContext,
        id: &AuctionId,
        sref: &SubmissionRef,
        bid: &SealedBid,
    ) {
        let key = BidKey::derive(id, sref);
        let bytes = bid.to_canonical_bytes().unwrap();
        c.private_store_mut()
            .put_commitment(ctx.org(), &key, &bytes)
            .unwrap();
    }

    fn ctx(org: &str, identity: &str) -> TransactionContext {
        TransactionContext::new(OrgId::new(org), BidderId::new(identity))
    }

    #[test]
    fn missing_auction_fails() {
        let mut c = contract();
        let caller = ctx("Org1MSP", "alice");
        let err = c
            .submit_commitment(&caller, &AuctionId::new("nope"), &SubmissionRef::new())
            .unwrap_err();
        assert!(matches!(err, SealbidError::AuctionNotFound(_)));
    }

    #[test]
    fn missing_private_commitment_fails() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        seed(&mut c, &id, 10);

        let caller = ctx("Org1MSP", "alice");
        let err = c
            .submit_commitment(&caller, &id, &SubmissionRef::new())
            .unwrap_err();
        assert!(matches!(err, SealbidError::CommitmentNotFound(_)));
    }

    #[test]
    fn records_commitment_and_participant() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        seed(&mut c, &id, 10);

        let caller = ctx("Org1MSP", "alice");
        let sref = SubmissionRef::new();
        let bid = SealedBid::new(4, 12, OrgId::new("Org1MSP"), BidderId::new("alice"));
        lodge(&mut c, &caller, &id, &sref, &bid);

        c.submit_commitment(&caller, &id, &sref).unwrap();

        let auction = c.load_auction(&id).unwrap();
        let key = BidKey::derive(&id, &sref);
        let slot = auction.private_bids.get(&key).unwrap();
        assert_eq!(slot.org, OrgId::new("Org1MSP"));
        assert_eq!(slot.hash, hex::encode(bid.digest().unwrap()));
        assert_eq!(auction.organizations, vec![OrgId::new("Org1MSP")]);
    }

    #[test]
    fn policy_updated_on_first_commit_only() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        seed(&mut c, &id, 10);

        let caller = ctx("Org1MSP", "alice");
        let bid = SealedBid::new(4, 12, OrgId::new("Org1MSP"), BidderId::new("alice"));
        for _ in 0..2 {
            let sref = SubmissionRef::new();
            lodge(&mut c, &caller, &id, &sref, &bid);
            c.submit_commitment(&caller, &id, &sref).unwrap();
        }

        // Second commit from the same org does not widen the policy again.
        assert_eq!(c.policy().updates().len(), 1);
        assert_eq!(
            c.policy().current_endorsers(&id),
            Some(&[OrgId::new("Org1MSP")][..])
        );
    }

    #[test]
    fn resubmission_overwrites_same_slot() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        seed(&mut c, &id, 10);

        let caller = ctx("Org1MSP", "alice");
        let sref = SubmissionRef::new();
        let bid = SealedBid::new(4, 12, OrgId::new("Org1MSP"), BidderId::new("alice"));
        lodge(&mut c, &caller, &id, &sref, &bid);

        c.submit_commitment(&caller, &id, &sref).unwrap();
        c.submit_commitment(&caller, &id, &sref).unwrap();

        let auction = c.load_auction(&id).unwrap();
        assert_eq!(auction.private_bids.len(), 1);
    }

    #[test]
    fn closed_auction_rejects_commitments() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        let mut auction = Auction::new("painting", BidderId::new("seller"), 10);
        auction.status = AuctionStatus::Closed;
        c.seed_auction(&id, &auction).unwrap();

        let caller = ctx("Org1MSP", "alice");
        let err = c
            .submit_commitment(&caller, &id, &SubmissionRef::new())
            .unwrap_err();
        assert!(matches!(
            err,
            SealbidError::AuctionNotOpen {
                actual: AuctionStatus::Closed,
                ..
            }
        ));

        // Failed operation leaves the record untouched.
        assert_eq!(c.load_auction(&id).unwrap(), auction);
    }
}
