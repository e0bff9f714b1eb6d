//! The per-organization private-store seam.
//!
//! Each organization operates a private data store the other organizations
//! cannot read. The shared ledger only ever carries the *hash* of private
//! content, which is exactly the interface exposed here: the contract can
//! ask "what is the commitment hash for key K under org O" but can never
//! retrieve the cleartext through this seam.
//!
//! The in-memory implementation stores only the SHA-256 of each lodged
//! payload, mirroring what the contract could observe on the real platform.

use std::collections::BTreeMap;

use sealbid_types::{BidKey, OrgId, Result};
use sha2::{Digest, Sha256};

/// Read access to commitment hashes in a bidder org's private store, plus
/// the pre-submit lodging step used by embedders and tests.
pub trait PrivateStore {
    /// The SHA-256 of the payload lodged under `key` in `org`'s store,
    /// or `None` if nothing was lodged.
    fn commitment_hash(&self, org: &OrgId, key: &BidKey) -> Result<Option<[u8; 32]>>;

    /// Lodge `payload` under `key` in `org`'s store. Happens before
    /// `submit_commitment` and is not part of the contract core.
    fn put_commitment(&mut self, org: &OrgId, key: &BidKey, payload: &[u8]) -> Result<()>;
}

/// In-memory private stores, one namespace per organization.
///
/// Keyed by `(org, bid key)`, so one org's entries are unreachable from
/// another org's namespace by construction.
#[derive(Debug, Default)]
pub struct MemoryPrivateStore {
    hashes: BTreeMap<(OrgId, BidKey), [u8; 32]>,
}

impl MemoryPrivateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a lodged commitment. Only exists to exercise the contract's
    /// defensive tamper checks in tests; the real platform forbids this
    /// while an auction references the entry.
    pub fn remove_commitment(&mut self, org: &OrgId, key: &BidKey) {
        self.hashes.remove(&(org.clone(), key.clone()));
    }

    /// Number of lodged commitments across all organizations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl PrivateStore for MemoryPrivateStore {
    fn commitment_hash(&self, org: &OrgId, key: &BidKey) -> Result<Option<[u8; 32]>> {
        Ok(self.hashes.get(&(org.clone(), key.clone())).copied())
    }

    fn put_commitment(&mut self, org: &OrgId, key: &BidKey, payload: &[u8]) -> Result<()> {
        let digest: [u8; 32] = Sha256::digest(payload).into();
        self.hashes.insert((org.clone(), key.clone()), digest);
        Ok(())
    }
}
