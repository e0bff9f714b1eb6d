//! The contract aggregate and its record access helpers.
//!
//! [`AuctionContract`] owns handles to the three collaborator seams and
//! exposes one method per ledger transaction. The helpers here implement
//! the read-modify-write discipline every operation shares: exactly one
//! `get` to load the record, exactly one `put` to store the mutated copy.

use sealbid_ledger::{EndorsementPolicy, PrivateStore, WorldState};
use sealbid_types::{Auction, AuctionId, Result, SealbidError};

/// The sealed-bid auction contract over pluggable collaborators.
///
/// `L` is the shared world state, `P` the per-org private stores, `E` the
/// platform's endorsement-policy configuration. Production embeddings wire
/// the platform's adapters; tests use the in-memory implementations from
/// `sealbid-ledger`.
pub struct AuctionContract<L, P, E> {
    ledger: L,
    private_store: P,
    policy: E,
}

impl<L, P, E> AuctionContract<L, P, E>
where
    L: WorldState,
    P: PrivateStore,
    E: EndorsementPolicy,
{
    /// Wire a contract over the given collaborators.
    pub fn new(ledger: L, private_store: P, policy: E) -> Self {
        Self {
            ledger,
            private_store,
            policy,
        }
    }

    /// The world state, read-only.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable world-state access, for embedders that manage records the
    /// contract does not own.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// The private stores. Mutable access exists for the pre-submit
    /// lodging step, which happens outside the contract's operations.
    pub fn private_store_mut(&mut self) -> &mut P {
        &mut self.private_store
    }

    /// The endorsement-policy collaborator, read-only.
    pub fn policy(&self) -> &E {
        &self.policy
    }

    /// Store a freshly created auction record.
    ///
    /// Auction creation is external to the protocol core (records arrive
    /// on the ledger already `Open`); this helper is the serialize-and-put
    /// embedders and the test suite use to seed one.
    pub fn seed_auction(&mut self, auction_id: &AuctionId, auction: &Auction) -> Result<()> {
        self.store_auction(auction_id, auction)
    }

    /// Load the auction record for `auction_id` from the world state.
    pub(crate) fn load_auction(&self, auction_id: &AuctionId) -> Result<Auction> {
        let key = Auction::storage_key(auction_id);
        let bytes = self
            .ledger
            .get(&key)?
            .ok_or_else(|| SealbidError::AuctionNotFound(auction_id.clone()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write the full record back. The single mutation point of every
    /// operation: nothing below this call is partial.
    pub(crate) fn store_auction(&mut self, auction_id: &AuctionId, auction: &Auction) -> Result<()> {
        let key = Auction::storage_key(auction_id);
        let bytes = serde_json::to_vec(auction)?;
        self.ledger.put(&key, bytes)
    }

    pub(crate) fn private_store(&self) -> &P {
        &self.private_store
    }

    pub(crate) fn policy_mut(&mut self) -> &mut E {
        &mut self.policy
    }
}
