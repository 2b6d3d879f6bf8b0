//! The authoritative attribute storage.
//!
//! One entry per `(token, owner)` pair: a consent flag and the raw slot
//! words. Entries come into being implicitly (reading an absent entry
//! yields zero words) and are never destroyed while the asset exists.
//! The store enforces the consent half of the admission rule; caller
//! identity is checked one layer up, where the ledger lives.

use attributable_core::{Address, AttributeError, TokenId, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct AttributeEntry {
    initialized: bool,
    slots: Vec<U256>,
}

/// Slot-word storage keyed by `(token, owner)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeStore {
    entries: BTreeMap<(TokenId, Address), AttributeEntry>,
}

impl AttributeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw read of one slot word; the zero word when never written.
    pub fn read(&self, token_id: TokenId, owner: Address, slot_index: usize) -> U256 {
        self.entries
            .get(&(token_id, owner))
            .and_then(|entry| entry.slots.get(slot_index))
            .copied()
            .unwrap_or(U256::ZERO)
    }

    /// Whether the holder has consented for this pair.
    pub fn is_initialized(&self, token_id: TokenId, owner: Address) -> bool {
        self.entries
            .get(&(token_id, owner))
            .is_some_and(|entry| entry.initialized)
    }

    /// Record the holder's one-time consent.
    ///
    /// Irreversible; a repeat call errors and leaves the slots untouched.
    pub fn initialize(&mut self, token_id: TokenId, owner: Address) -> Result<(), AttributeError> {
        let entry = self.entries.entry((token_id, owner)).or_default();
        if entry.initialized {
            return Err(AttributeError::AlreadyInitialized { token_id, owner });
        }
        entry.initialized = true;
        Ok(())
    }

    /// Replace the pair's slot words wholesale.
    ///
    /// Admitted only once the pair is initialized; the write carries the
    /// full slot array, so stale higher-index words never linger.
    pub fn write(
        &mut self,
        token_id: TokenId,
        owner: Address,
        slots: Vec<U256>,
    ) -> Result<(), AttributeError> {
        let entry = self
            .entries
            .get_mut(&(token_id, owner))
            .filter(|entry| entry.initialized)
            .ok_or(AttributeError::NotAuthorized { token_id, owner })?;
        if slots.is_empty() {
            return Err(AttributeError::EmptySlots);
        }
        entry.slots = slots;
        Ok(())
    }
}
