//! Shared surface of the attributable protocol.
//!
//! Two independently deployed, mutually distrusting components share this
//! crate: the asset holds the storage and consent state behind the
//! [`Attributable`] trait, and any number of attribute owners consume the
//! trait polymorphically, each with its own private schema table. The
//! crate also carries the audit [`Journal`] the asset appends to and the
//! ERC-165-style [`Probe`] used to discover protocol support before use.

mod attributable;
mod events;
mod interface;
mod types;

pub use attributable::{Attributable, AttributeError};
pub use events::{AttributeEvent, EventKind, Journal};
pub use interface::{selector, InterfaceId, Probe};
pub use types::TokenId;

// Ledger primitive re-exports so downstream crates share one source.
pub use alloy_primitives::{Address, U256};
