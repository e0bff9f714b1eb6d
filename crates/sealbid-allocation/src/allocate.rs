//! Greedy winner allocation with a uniform clearing price.
//!
//! Given the revealed bids and the auction's total supply, the algorithm
//! admits bidders from the best-priced bid downwards until supply runs out.
//! Every admitted bidder pays the same price — the price of the *last*
//! (marginal) bid admitted — regardless of what they bid themselves.
//!
//! # Determinism Contract
//!
//! Given the same bids in the same input order, every node produces the
//! same winner list and clearing price. The sort is stable, so callers that
//! feed bids in a canonical order (the auction record's `BTreeMap` bid-key
//! order) get fully deterministic tie-breaking even for bids with equal
//! price and equal quantity.

use sealbid_types::{AuctionId, RevealedBid, Result, SealbidError, Winner};

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Winners in admission order. The last entry is the marginal winner
    /// and may hold less than its requested quantity.
    pub winners: Vec<Winner>,
    /// The uniform clearing price: the marginal admitted bid's price.
    pub clearing_price: u64,
    /// Total units allocated; never exceeds the supply.
    pub allocated: u64,
}

/// Sort bids for allocation: descending price, then ascending quantity.
///
/// Smaller bids are satisfied first among equally-priced bids, which
/// maximizes the number of distinct winners at the marginal price. The
/// sort is stable, so remaining ties keep their input order.
#[must_use]
pub fn sort_bids(mut bids: Vec<RevealedBid>) -> Vec<RevealedBid> {
    bids.sort_by(|a, b| {
        b.price
            .cmp(&a.price)
            .then_with(|| a.quantity.cmp(&b.quantity))
    });
    bids
}

/// Run the greedy allocation over bids already sorted by [`sort_bids`].
///
/// Walks the list maintaining the remaining supply. A bid whose quantity
/// fits is admitted in full; the first bid that does not fit is admitted
/// for exactly the remainder and the walk stops. The clearing price tracks
/// the price of each admitted bid, so at termination it is the marginal
/// winner's price.
///
/// # Errors
/// Returns [`SealbidError::NoRevealedBids`] if `bids` is empty.
pub fn allocate(auction_id: &AuctionId, supply: u64, bids: &[RevealedBid]) -> Result<Allocation> {
    if bids.is_empty() {
        return Err(SealbidError::NoRevealedBids(auction_id.clone()));
    }

    let mut winners = Vec::new();
    let mut clearing_price = 0;
    let mut remaining = supply;

    for bid in bids {
        if remaining == 0 {
            break;
        }
        let granted = bid.quantity.min(remaining);
        winners.push(Winner {
            buyer: bid.buyer.clone(),
            quantity: granted,
        });
        clearing_price = bid.price;
        remaining -= granted;
    }

    Ok(Allocation {
        winners,
        clearing_price,
        allocated: supply - remaining,
    })
}
