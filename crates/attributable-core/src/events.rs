//! Audit events and the append-only journal.
//!
//! Events are immutable, ordered entries and the only durable history of
//! attribute writes — there is no other record of who touched a pair.

use crate::types::TokenId;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// One durable audit entry emitted by the asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeEvent {
    /// The holder consented to `owner` using this pair.
    AttributesInitialized {
        /// The token.
        token_id: TokenId,
        /// The attribute owner the consent names.
        owner: Address,
    },
    /// `owner` replaced the pair's slot words.
    AttributesUpdated {
        /// The token.
        token_id: TokenId,
        /// The attribute owner that wrote.
        owner: Address,
    },
}

impl AttributeEvent {
    /// The event's kind tag, for filtering.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::AttributesInitialized { .. } => EventKind::Initialized,
            Self::AttributesUpdated { .. } => EventKind::Updated,
        }
    }
}

/// Kind tag for [`AttributeEvent`] filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Holder consent was recorded.
    Initialized,
    /// Slots were replaced.
    Updated,
}

/// Append-only, in-order event log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    events: Vec<AttributeEvent>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Entries are never mutated or removed.
    pub fn record(&mut self, event: AttributeEvent) {
        self.events.push(event);
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over all events in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeEvent> {
        self.events.iter()
    }

    /// All events of one kind, in emission order.
    pub fn of_kind(&self, kind: EventKind) -> Vec<&AttributeEvent> {
        self.events.iter().filter(|e| e.kind() == kind).collect()
    }
}
