//! Reveal Verifier — admits cleartext bids after the auction closes.
//!
//! Four checks, all required, each with a distinct failure kind:
//!
//! 1. **Existence** — the commitment is still retrievable, both from the
//!    caller org's private store and from the public record
//! 2. **Authenticity** — the cleartext re-hashes to the private-store
//!    commitment, byte for byte (the caller is not lying about the bid)
//! 3. **Immutability** — the private-store hash still equals the hash
//!    published at submit time (the bid was not swapped after publication)
//! 4. **Ownership** — the payload's buyer is the calling identity (only
//!    the original bidder may reveal their own bid)
//!
//! Only then does the cleartext enter `revealed_bids`. Re-revealing an
//! already-verified bid overwrites the slot with identical content.

use sealbid_ledger::{EndorsementPolicy, PrivateStore, TransactionContext, WorldState};
use sealbid_types::{
    AuctionId, AuctionStatus, BidKey, Result, RevealedBid, SealbidError, SealedBid, SubmissionRef,
};
use tracing::info;

use crate::AuctionContract;

impl<L, P, E> AuctionContract<L, P, E>
where
    L: WorldState,
    P: PrivateStore,
    E: EndorsementPolicy,
{
    /// Reveal the cleartext of a previously committed bid.
    ///
    /// # Errors
    /// - [`SealbidError::AuctionNotFound`] if no such auction exists
    /// - [`SealbidError::NotParticipant`] if the caller's org never
    ///   committed a bid in this auction
    /// - [`SealbidError::AuctionNotClosed`] unless the auction is closed
    /// - [`SealbidError::CommitmentNotFound`] if the commitment is gone
    ///   from the private store or was never published into the record
    /// - [`SealbidError::RevealMismatch`] if the cleartext does not hash
    ///   to the private-store commitment
    /// - [`SealbidError::CommitmentTampered`] if the private commitment
    ///   diverged from the published hash
    /// - [`SealbidError::NotBidOwner`] if the caller is not the buyer
    pub fn reveal_bid(
        &mut self,
        ctx: &TransactionContext,
        auction_id: &AuctionId,
        submission_ref: &SubmissionRef,
        bid: &SealedBid,
    ) -> Result<()> {
        let mut auction = self.load_auction(auction_id)?;

        if !auction.is_participant(ctx.org()) {
            return Err(SealbidError::NotParticipant {
                auction: auction_id.clone(),
                org: ctx.org().clone(),
            });
        }

        // Reveals are only meaningful between close and end: earlier they
        // would leak the bid, later they could not affect the allocation.
        if auction.status != AuctionStatus::Closed {
            return Err(SealbidError::AuctionNotClosed {
                auction: auction_id.clone(),
                actual: auction.status,
            });
        }

        let bid_key = BidKey::derive(auction_id, submission_ref);

        // Check 1: the commitment must exist on both sides of the seam.
        let private_hash = self
            .private_store()
            .commitment_hash(ctx.org(), &bid_key)?
            .ok_or_else(|| SealbidError::CommitmentNotFound(bid_key.clone()))?;
        let published = auction
            .private_bids
            .get(&bid_key)
            .ok_or_else(|| SealbidError::CommitmentNotFound(bid_key.clone()))?;

        // Check 2: the cleartext must re-derive the private commitment.
        let computed = bid.digest()?;
        if computed != private_hash {
            return Err(SealbidError::RevealMismatch {
                computed: hex::encode(computed),
                committed: hex::encode(private_hash),
            });
        }

        // Check 3: the private commitment must still match what was
        // published at submit time. The published hash is the basis for
        // the allocation's auditability, so divergence is fatal.
        let private_hex = hex::encode(private_hash);
        if private_hex != published.hash {
            return Err(SealbidError::CommitmentTampered {
                private: private_hex,
                published: published.hash.clone(),
            });
        }

        // Check 4: only the original bidder may reveal.
        if bid.buyer != *ctx.identity() {
            return Err(SealbidError::NotBidOwner {
                caller: ctx.identity().clone(),
                owner: bid.buyer.clone(),
            });
        }

        auction
            .revealed_bids
            .insert(bid_key.clone(), RevealedBid::from(bid.clone()));

        self.store_auction(auction_id, &auction)?;
        info!(
            auction = %auction_id,
            org = %ctx.org(),
            bid_key = %bid_key,
            "bid revealed and verified"
        );
        Ok(())
    }
}
