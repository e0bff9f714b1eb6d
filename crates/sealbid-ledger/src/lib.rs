//! # sealbid-ledger
//!
//! **State Plane**: the narrow seams between the auction contract and its
//! external collaborators, plus in-memory implementations for embedding
//! and tests.
//!
//! ## Architecture
//!
//! The contract core never talks to the platform directly; it only sees:
//! 1. **WorldState**: get/put/range over the shared, replicated key space
//! 2. **PrivateStore**: per-organization private data, exposed to the
//!    contract only as commitment hashes
//! 3. **EndorsementPolicy**: "update required endorsers for object X"
//! 4. **TransactionContext**: the already-authenticated caller facts
//!
//! ## Isolation model
//!
//! Cross-organization secrecy is structural, not lock-based: a private
//! store is addressed by the owning organization, and the contract only
//! ever passes the *caller's* organization. Concurrency control (optimistic
//! read-set validation between conflicting transactions) belongs to the
//! platform and is not reimplemented here.

pub mod context;
pub mod endorsement;
pub mod private_store;
pub mod world_state;

pub use context::TransactionContext;
pub use endorsement::{EndorsementPolicy, RecordingPolicy};
pub use private_store::{MemoryPrivateStore, PrivateStore};
pub use world_state::{MemoryLedger, WorldState};
