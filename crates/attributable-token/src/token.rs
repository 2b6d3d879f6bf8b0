//! The asset component: mint/holder bookkeeping plus the gated store.

use crate::store::AttributeStore;
use attributable_core::{
    Address, Attributable, AttributeError, AttributeEvent, InterfaceId, Journal, Probe, TokenId,
    U256,
};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Interface id of the asset-side attribute surface.
pub static ATTRIBUTABLE_INTERFACE: Lazy<InterfaceId> = Lazy::new(|| {
    InterfaceId::of(&[
        "attributesOf(uint256,address,uint256)",
        "initializeAttributesFor(uint256,address)",
        "updateAttributesOf(uint256,address,uint256[])",
    ])
});

/// Failures of the asset bookkeeping operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The named token was never minted.
    #[error("unknown token {token_id}")]
    UnknownToken {
        /// The missing token.
        token_id: TokenId,
    },

    /// Only the current holder may move a token.
    #[error("{caller} does not hold token {token_id}")]
    NotHolder {
        /// The token.
        token_id: TokenId,
        /// The caller that is not the holder.
        caller: Address,
    },
}

/// A non-fungible collection carrying attributable storage.
///
/// Holder bookkeeping here is deliberately minimal — enough to anchor the
/// consent rule ("the current holder initializes") and the transfer
/// semantics. The attribute store and its audit journal are the
/// substance.
#[derive(Debug, Clone)]
pub struct Token {
    address: Address,
    name: String,
    symbol: String,
    next_id: u64,
    holders: BTreeMap<TokenId, Address>,
    store: AttributeStore,
    journal: Journal,
}

impl Token {
    /// Create an empty collection deployed at `address`.
    pub fn new(address: Address, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
            symbol: symbol.into(),
            next_id: 1,
            holders: BTreeMap::new(),
            store: AttributeStore::new(),
            journal: Journal::new(),
        }
    }

    /// The component's deployed address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Mint the next token to `to`. Ids are sequential from 1.
    pub fn mint(&mut self, to: Address) -> TokenId {
        let token_id = TokenId::new(self.next_id);
        self.next_id += 1;
        self.holders.insert(token_id, to);
        tracing::info!(%token_id, holder = %to, "token minted");
        token_id
    }

    /// Current holder of a token.
    pub fn owner_of(&self, token_id: TokenId) -> Result<Address, LedgerError> {
        self.holders
            .get(&token_id)
            .copied()
            .ok_or(LedgerError::UnknownToken { token_id })
    }

    /// Move a token to a new holder.
    ///
    /// Attribute entries are untouched: consent and slots belong to the
    /// asset and travel with it.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), LedgerError> {
        let holder = self.owner_of(token_id)?;
        if holder != caller {
            return Err(LedgerError::NotHolder { token_id, caller });
        }
        self.holders.insert(token_id, to);
        tracing::info!(%token_id, from = %caller, %to, "token transferred");
        Ok(())
    }

    /// The audit journal: the only durable history of attribute writes.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}

impl Attributable for Token {
    fn attributes_of(&self, token_id: TokenId, owner: Address, slot_index: usize) -> U256 {
        self.store.read(token_id, owner, slot_index)
    }

    fn initialize_attributes_for(
        &mut self,
        caller: Address,
        token_id: TokenId,
        owner: Address,
    ) -> Result<(), AttributeError> {
        let holder = self
            .holders
            .get(&token_id)
            .copied()
            .ok_or(AttributeError::UnknownToken { token_id })?;
        if holder != caller {
            tracing::warn!(%token_id, %caller, "initialize rejected: caller is not the holder");
            return Err(AttributeError::NotHolder { token_id, caller });
        }
        self.store.initialize(token_id, owner)?;
        self.journal
            .record(AttributeEvent::AttributesInitialized { token_id, owner });
        tracing::info!(%token_id, %owner, "attributes initialized");
        Ok(())
    }

    fn update_attributes_of(
        &mut self,
        owner: Address,
        token_id: TokenId,
        slots: Vec<U256>,
    ) -> Result<(), AttributeError> {
        if let Err(error) = self.store.write(token_id, owner, slots) {
            tracing::warn!(%token_id, %owner, %error, "attribute write rejected");
            return Err(error);
        }
        self.journal
            .record(AttributeEvent::AttributesUpdated { token_id, owner });
        tracing::info!(%token_id, %owner, "attributes updated");
        Ok(())
    }
}

impl Probe for Token {
    fn interface_ids(&self) -> Vec<InterfaceId> {
        vec![*ATTRIBUTABLE_INTERFACE]
    }
}
