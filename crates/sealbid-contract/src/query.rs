//! Read-only queries over the public auction state.
//!
//! Queries are snapshot reads: they do not participate in the write path
//! and never mutate the record. Commitment hashes are public by design —
//! what stays private until reveal time is the cleartext behind them.

use sealbid_ledger::{EndorsementPolicy, PrivateStore, WorldState};
use sealbid_types::{
    Auction, AuctionId, Result,
    constants::{AUCTION_KEY_NAMESPACE, COMPOSITE_KEY_DELIMITER},
};

use crate::AuctionContract;

impl<L, P, E> AuctionContract<L, P, E>
where
    L: WorldState,
    P: PrivateStore,
    E: EndorsementPolicy,
{
    /// Read-only snapshot of one auction record.
    ///
    /// # Errors
    /// Returns [`sealbid_types::SealbidError::AuctionNotFound`] if no
    /// record exists under `auction_id`.
    pub fn query_auction(&self, auction_id: &AuctionId) -> Result<Auction> {
        self.load_auction(auction_id)
    }

    /// All auction records currently on the ledger, in key order.
    ///
    /// A range scan over the auction namespace; other namespaces (composite
    /// bid keys and anything else) fall outside the scanned bounds.
    pub fn list_auctions(&self) -> Result<Vec<Auction>> {
        let d = COMPOSITE_KEY_DELIMITER;
        let start = format!("{AUCTION_KEY_NAMESPACE}{d}");
        // One code point above the delimiter bounds the namespace exactly.
        let end = format!("{AUCTION_KEY_NAMESPACE}\u{1}");

        let mut auctions = Vec::new();
        for (_, bytes) in self.ledger().range(&start, &end)? {
            auctions.push(serde_json::from_slice(&bytes)?);
        }
        Ok(auctions)
    }
}
