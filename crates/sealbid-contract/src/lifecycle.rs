//! Lifecycle & Allocation Engine — seller-driven phase transitions.
//!
//! The seller invokes this engine exactly twice per auction: `close` stops
//! new commitments and opens the reveal window, `end` runs the allocation
//! over everything revealed. Phases are strictly monotonic
//! (open → closed → ended); a failed transition writes nothing.

use sealbid_allocation::{allocate, sort_bids, verify_all_revealed};
use sealbid_ledger::{EndorsementPolicy, PrivateStore, TransactionContext, WorldState};
use sealbid_types::{Auction, AuctionId, AuctionStatus, Result, SealbidError};
use tracing::{info, warn};

use crate::AuctionContract;

impl<L, P, E> AuctionContract<L, P, E>
where
    L: WorldState,
    P: PrivateStore,
    E: EndorsementPolicy,
{
    /// Close the auction: commitments freeze, reveals may begin.
    ///
    /// # Errors
    /// - [`SealbidError::AuctionNotFound`] if no such auction exists
    /// - [`SealbidError::NotSeller`] unless the caller is the seller
    /// - [`SealbidError::AuctionNotOpen`] unless the auction is open
    pub fn close_auction(&mut self, ctx: &TransactionContext, auction_id: &AuctionId) -> Result<()> {
        let mut auction = self.load_auction(auction_id)?;
        Self::require_seller(ctx, auction_id, &auction)?;

        if auction.status != AuctionStatus::Open {
            return Err(SealbidError::AuctionNotOpen {
                auction: auction_id.clone(),
                actual: auction.status,
            });
        }

        auction.status = AuctionStatus::Closed;
        self.store_auction(auction_id, &auction)?;
        info!(
            auction = %auction_id,
            commitments = auction.private_bids.len(),
            "auction closed"
        );
        Ok(())
    }

    /// End the auction: allocate winners, fix the clearing price, and make
    /// the record read-only.
    ///
    /// The allocation admits bidders best-price-first (ties: smaller
    /// quantity first) until supply runs out; every winner pays the
    /// marginal admitted bid's price. Before anything is written, every
    /// published commitment must have a corresponding reveal — an
    /// unrevealed commitment is a bid of unknowable value that could have
    /// outranked the clearing price, so it blocks ending.
    ///
    /// # Errors
    /// - [`SealbidError::AuctionNotFound`] if no such auction exists
    /// - [`SealbidError::NotSeller`] unless the caller is the seller
    /// - [`SealbidError::AuctionNotClosed`] unless the auction is closed
    /// - [`SealbidError::NoRevealedBids`] if nothing was revealed
    /// - [`SealbidError::UnresolvedHigherBid`] if any commitment lacks a
    ///   reveal; the auction stays closed
    pub fn end_auction(&mut self, ctx: &TransactionContext, auction_id: &AuctionId) -> Result<()> {
        let mut auction = self.load_auction(auction_id)?;
        Self::require_seller(ctx, auction_id, &auction)?;

        if auction.status != AuctionStatus::Closed {
            return Err(SealbidError::AuctionNotClosed {
                auction: auction_id.clone(),
                actual: auction.status,
            });
        }

        if auction.revealed_bids.is_empty() {
            return Err(SealbidError::NoRevealedBids(auction_id.clone()));
        }

        // BTreeMap value order gives the stable sort a canonical input, so
        // the allocation is identical on every node.
        let bids = sort_bids(auction.revealed_bids.values().cloned().collect());
        let allocation = allocate(auction_id, auction.quantity, &bids)?;

        if let Err(err) = verify_all_revealed(&auction.private_bids, &auction.revealed_bids) {
            warn!(auction = %auction_id, %err, "ending blocked by unrevealed commitments");
            return Err(err);
        }

        auction.winners = allocation.winners;
        auction.price = Some(allocation.clearing_price);
        auction.status = AuctionStatus::Ended;
        self.store_auction(auction_id, &auction)?;
        info!(
            auction = %auction_id,
            winners = auction.winners.len(),
            price = allocation.clearing_price,
            allocated = allocation.allocated,
            "auction ended"
        );
        Ok(())
    }

    fn require_seller(
        ctx: &TransactionContext,
        auction_id: &AuctionId,
        auction: &Auction,
    ) -> Result<()> {
        if auction.seller != *ctx.identity() {
            return Err(SealbidError::NotSeller {
                auction: auction_id.clone(),
                caller: ctx.identity().clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sealbid_ledger::{MemoryLedger, MemoryPrivateStore, RecordingPolicy};
    use sealbid_types::{BidKey, BidderId, OrgId, RevealedBid, Winner};

    use super::*;

    type Contract = AuctionContract<MemoryLedger, MemoryPrivateStore, RecordingPolicy>;

    fn contract() -> Contract {
        AuctionContract::new(
            MemoryLedger::new(),
            MemoryPrivateStore::new(),
            RecordingPolicy::new(),
        )
    }

    fn seller() -> TransactionContext {
        TransactionContext::new(OrgId::new("SellerMSP"), BidderId::new("seller"))
    }

    fn reveal(buyer: &str, quantity: u64, price: u64) -> RevealedBid {
        RevealedBid {
            quantity,
            price,
            org: OrgId::new("Org1MSP"),
            buyer: BidderId::new(buyer),
        }
    }

    /// Seed a closed auction whose revealed bids all have matching
    /// commitments (hashes are irrelevant to the lifecycle engine).
    fn seed_closed(
        c: &mut Contract,
        id: &AuctionId,
        supply: u64,
        reveals: BTreeMap<BidKey, RevealedBid>,
    ) {
        let mut auction = Auction::new("painting", BidderId::new("seller"), supply);
        auction.status = AuctionStatus::Closed;
        for (key, bid) in &reveals {
            auction.add_participant(bid.org.clone());
            auction.private_bids.insert(
                key.clone(),
                sealbid_types::BidCommitment {
                    org: bid.org.clone(),
                    hash: "ab".repeat(32),
                },
            );
        }
        auction.revealed_bids = reveals;
        c.seed_auction(id, &auction).unwrap();
    }

    #[test]
    fn close_requires_seller() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        c.seed_auction(&id, &Auction::new("painting", BidderId::new("seller"), 10))
            .unwrap();

        let intruder = TransactionContext::new(OrgId::new("Org1MSP"), BidderId::new("alice"));
        let err = c.close_auction(&intruder, &id).unwrap_err();
        assert!(matches!(err, SealbidError::NotSeller { .. }));
        assert_eq!(c.load_auction(&id).unwrap().status, AuctionStatus::Open);
    }

    #[test]
    fn close_transitions_open_to_closed() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        c.seed_auction(&id, &Auction::new("painting", BidderId::new("seller"), 10))
            .unwrap();

        c.close_auction(&seller(), &id).unwrap();
        assert_eq!(c.load_auction(&id).unwrap().status, AuctionStatus::Closed);
    }

    #[test]
    fn close_is_not_reentrant() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        c.seed_auction(&id, &Auction::new("painting", BidderId::new("seller"), 10))
            .unwrap();

        c.close_auction(&seller(), &id).unwrap();
        let err = c.close_auction(&seller(), &id).unwrap_err();
        assert!(matches!(
            err,
            SealbidError::AuctionNotOpen {
                actual: AuctionStatus::Closed,
                ..
            }
        ));
    }

    #[test]
    fn end_requires_closed() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        c.seed_auction(&id, &Auction::new("painting", BidderId::new("seller"), 10))
            .unwrap();

        let err = c.end_auction(&seller(), &id).unwrap_err();
        assert!(matches!(
            err,
            SealbidError::AuctionNotClosed {
                actual: AuctionStatus::Open,
                ..
            }
        ));
    }

    #[test]
    fn end_requires_at_least_one_reveal() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        let mut auction = Auction::new("painting", BidderId::new("seller"), 10);
        auction.status = AuctionStatus::Closed;
        // A commitment exists, but nothing was revealed.
        auction.private_bids.insert(
            BidKey("k1".into()),
            sealbid_types::BidCommitment {
                org: OrgId::new("Org1MSP"),
                hash: "ab".repeat(32),
            },
        );
        c.seed_auction(&id, &auction).unwrap();

        let err = c.end_auction(&seller(), &id).unwrap_err();
        assert!(matches!(err, SealbidError::NoRevealedBids(_)));
        assert_eq!(c.load_auction(&id).unwrap().status, AuctionStatus::Closed);
    }

    #[test]
    fn end_computes_allocation_and_price() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        let mut reveals = BTreeMap::new();
        reveals.insert(BidKey("k1".into()), reveal("big", 5, 10));
        reveals.insert(BidKey("k2".into()), reveal("small", 3, 10));
        reveals.insert(BidKey("k3".into()), reveal("low", 10, 8));
        seed_closed(&mut c, &id, 6, reveals);

        c.end_auction(&seller(), &id).unwrap();

        let auction = c.load_auction(&id).unwrap();
        assert_eq!(auction.status, AuctionStatus::Ended);
        assert_eq!(auction.price, Some(10));
        assert_eq!(
            auction.winners,
            vec![
                Winner {
                    buyer: BidderId::new("small"),
                    quantity: 3
                },
                Winner {
                    buyer: BidderId::new("big"),
                    quantity: 3
                },
            ]
        );
        assert_eq!(auction.allocated(), 6);
    }

    #[test]
    fn end_blocked_by_unrevealed_commitment() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        let mut reveals = BTreeMap::new();
        reveals.insert(BidKey("k1".into()), reveal("alice", 4, 12));
        seed_closed(&mut c, &id, 4, reveals);

        // A second commitment with no reveal.
        let mut auction = c.load_auction(&id).unwrap();
        auction.private_bids.insert(
            BidKey("k2".into()),
            sealbid_types::BidCommitment {
                org: OrgId::new("Org2MSP"),
                hash: "cd".repeat(32),
            },
        );
        c.seed_auction(&id, &auction).unwrap();

        let err = c.end_auction(&seller(), &id).unwrap_err();
        assert!(matches!(err, SealbidError::UnresolvedHigherBid { .. }));

        // Not transitioned, nothing allocated.
        let after = c.load_auction(&id).unwrap();
        assert_eq!(after.status, AuctionStatus::Closed);
        assert!(after.winners.is_empty());
        assert_eq!(after.price, None);
    }

    #[test]
    fn ended_auction_is_final() {
        let mut c = contract();
        let id = AuctionId::new("a1");
        let mut reveals = BTreeMap::new();
        reveals.insert(BidKey("k1".into()), reveal("alice", 4, 12));
        seed_closed(&mut c, &id, 4, reveals);

        c.end_auction(&seller(), &id).unwrap();

        // No transition out of ended, in either direction.
        let err = c.close_auction(&seller(), &id).unwrap_err();
        assert!(matches!(err, SealbidError::AuctionNotOpen { .. }));
        let err = c.end_auction(&seller(), &id).unwrap_err();
        assert!(matches!(err, SealbidError::AuctionNotClosed { .. }));
    }
}
