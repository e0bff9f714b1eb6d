//! System-wide constants for the sealbid auction contract.

/// Namespace component of composite bid keys (first segment of every bid key).
pub const BID_KEY_NAMESPACE: &str = "bid";

/// Namespace prefix for auction records in the public world state.
pub const AUCTION_KEY_NAMESPACE: &str = "auction";

/// Delimiter between composite-key segments. A zero byte cannot appear in
/// auction identifiers or submission references, so segments never bleed
/// into each other and range scans over a prefix stay exact.
pub const COMPOSITE_KEY_DELIMITER: char = '\u{0}';

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Sealbid";
