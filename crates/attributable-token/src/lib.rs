//! Asset-side half of the attributable protocol.
//!
//! [`Token`] is a minimal non-fungible ledger that carries the
//! authoritative [`AttributeStore`]: per `(token, owner)` pair, an
//! ordered array of raw slot words and a one-time consent flag. Writes
//! only land through the `Attributable` trait after the admission checks
//! pass; every durable transition is appended to the token's audit
//! journal and traced.

mod store;
mod token;

pub use store::AttributeStore;
pub use token::{LedgerError, Token, ATTRIBUTABLE_INTERFACE};
