//! End-of-auction integrity check against unrevealed commitments.
//!
//! A commitment whose cleartext was never revealed is a bid of unknowable
//! value: had it been revealed, it could have outranked the computed
//! clearing price and changed the allocation. The check is therefore
//! conservative — ending is blocked while *any* published commitment lacks
//! a corresponding reveal, regardless of the clearing price. The seller
//! must wait for the missing reveal or reconcile out of band.

use std::collections::BTreeMap;

use sealbid_types::{BidCommitment, BidKey, OrgId, Result, RevealedBid, SealbidError};

/// Verify that every published commitment has a corresponding reveal.
///
/// # Errors
/// Returns [`SealbidError::UnresolvedHigherBid`] naming the number of
/// unrevealed slots and the organizations holding them.
pub fn verify_all_revealed(
    private_bids: &BTreeMap<BidKey, BidCommitment>,
    revealed_bids: &BTreeMap<BidKey, RevealedBid>,
) -> Result<()> {
    let mut orgs: Vec<OrgId> = Vec::new();
    let mut unrevealed = 0;

    for (key, commitment) in private_bids {
        if revealed_bids.contains_key(key) {
            continue;
        }
        unrevealed += 1;
        if !orgs.contains(&commitment.org) {
            orgs.push(commitment.org.clone());
        }
    }

    if unrevealed > 0 {
        return Err(SealbidError::UnresolvedHigherBid { unrevealed, orgs });
    }
    Ok(())
}
