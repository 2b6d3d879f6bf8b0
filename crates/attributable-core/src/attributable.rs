//! The asset-side storage and authorization surface.

use crate::types::TokenId;
use alloy_primitives::{Address, U256};

/// Failures of the asset-side attribute operations.
///
/// Every variant aborts the whole invocation before any state changes;
/// there is no partial commit to clean up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The named token was never minted.
    #[error("unknown token {token_id}")]
    UnknownToken {
        /// The missing token.
        token_id: TokenId,
    },

    /// Consent can only be given by the token's current holder.
    #[error("{caller} does not hold token {token_id}")]
    NotHolder {
        /// The token whose holder must consent.
        token_id: TokenId,
        /// The caller that is not the holder.
        caller: Address,
    },

    /// Consent was already given for this `(token, owner)` pair.
    ///
    /// Reported as an error rather than a silent success so callers can
    /// tell "already done" apart from "just done"; the existing slots are
    /// untouched.
    #[error("attributes of token {token_id} already initialized for {owner}")]
    AlreadyInitialized {
        /// The token.
        token_id: TokenId,
        /// The attribute owner the pair names.
        owner: Address,
    },

    /// A write arrived before the holder consented for this pair.
    #[error("owner {owner} not authorized for token {token_id}")]
    NotAuthorized {
        /// The token.
        token_id: TokenId,
        /// The attribute owner attempting the write.
        owner: Address,
    },

    /// A write carried no slot words.
    #[error("attribute write must carry at least one slot word")]
    EmptySlots,
}

/// Abstract capability an asset exposes to attribute owners.
///
/// The asset is the authoritative store: it keeps one ordered slot array
/// and one consent flag per `(token, owner)` pair and enforces the
/// admission rules. Owner components receive `&mut dyn Attributable` (or
/// an `impl`) and never see each other's layouts.
pub trait Attributable {
    /// Raw read of one slot word.
    ///
    /// Public and unconditional: returns the zero word for slots that
    /// were never written, whether or not the pair is initialized.
    fn attributes_of(&self, token_id: TokenId, owner: Address, slot_index: usize) -> U256;

    /// The token holder's one-time consent for `owner` to use this pair.
    ///
    /// `caller` must currently hold the token; a repeat call fails with
    /// [`AttributeError::AlreadyInitialized`]. Emits one
    /// `AttributesInitialized` audit event on success.
    fn initialize_attributes_for(
        &mut self,
        caller: Address,
        token_id: TokenId,
        owner: Address,
    ) -> Result<(), AttributeError>;

    /// Replace the pair's slot words wholesale.
    ///
    /// `owner` is the calling owner component's address; the pair must be
    /// initialized. Emits one `AttributesUpdated` audit event on success.
    fn update_attributes_of(
        &mut self,
        owner: Address,
        token_id: TokenId,
        slots: Vec<U256>,
    ) -> Result<(), AttributeError>;
}
