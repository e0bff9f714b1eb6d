//! The shared world-state seam.
//!
//! The contract reads one record, mutates it in memory, and writes it back
//! with a single `put` per operation. Transaction ordering and conflict
//! rejection between concurrent writers are the platform's responsibility;
//! this trait is deliberately too narrow to express anything else.

use std::collections::BTreeMap;

use sealbid_types::Result;

/// Byte-oriented key/value access to the shared, replicated ledger.
pub trait WorldState {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// All `(key, value)` pairs with `start <= key < end`, in key order.
    fn range(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>>;
}

/// In-memory world state over a `BTreeMap`, giving the same ordered-range
/// semantics as the real ledger. Used for embedding and by every test.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl WorldState for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.state.insert(key.to_string(), value);
        Ok(())
    }

    fn range(&self, start: &str, end: &str) -> Result<Vec<(String, Vec<u8>)>> {
        Ok(self
            .state
            .range(start.to_string()..end.to_string())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
