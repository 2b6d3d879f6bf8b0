//! The attribute-owner component.

use crate::error::PlayerError;
use attributable_codec::{peek_version, FieldValue, Schema};
use attributable_core::{Address, Attributable, InterfaceId, Probe, TokenId};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Interface id of the owner-side attribute surface.
pub static ATTRIBUTABLE_PLAYER_INTERFACE: Lazy<InterfaceId> = Lazy::new(|| {
    InterfaceId::of(&[
        "attributesOf(address,uint256)",
        "updateAttributesOf(address,uint256,uint256[])",
    ])
});

/// An attribute owner: private schema table, one bound operator.
///
/// The operator binding and schema table are explicit per-component
/// configuration — set at deploy/admin time, read on every write — not
/// ambient state. Schemas are append-only: versions already written to
/// asset storage must stay resolvable, so registered schemas cannot be
/// replaced.
#[derive(Debug, Clone)]
pub struct Player {
    address: Address,
    admin: Address,
    name: String,
    operator: Option<Address>,
    schemas: BTreeMap<u8, Schema>,
}

impl Player {
    /// Create an owner component deployed at `address`, administered by
    /// `admin`, with an empty schema table and no operator bound.
    pub fn new(address: Address, admin: Address, name: impl Into<String>) -> Self {
        Self {
            address,
            admin,
            name: name.into(),
            operator: None,
            schemas: BTreeMap::new(),
        }
    }

    /// The component's deployed address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The administrative account.
    pub fn admin(&self) -> Address {
        self.admin
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound operator, if any.
    pub fn operator(&self) -> Option<Address> {
        self.operator
    }

    /// Bind (or rebind) the single account allowed to submit writes.
    ///
    /// Admin only; not asset-specific.
    pub fn set_operator(&mut self, caller: Address, operator: Address) -> Result<(), PlayerError> {
        if caller != self.admin {
            tracing::warn!(%caller, "operator binding rejected: caller is not the admin");
            return Err(PlayerError::NotAdmin { caller });
        }
        self.operator = Some(operator);
        tracing::info!(player = %self.address, %operator, "operator bound");
        Ok(())
    }

    /// Register the schema for a new version.
    pub fn register_schema(&mut self, schema: Schema) -> Result<(), PlayerError> {
        let version = schema.version();
        if self.schemas.contains_key(&version) {
            return Err(PlayerError::DuplicateSchema { version });
        }
        self.schemas.insert(version, schema);
        Ok(())
    }

    /// The schema registered for `version`, if any.
    pub fn schema(&self, version: u8) -> Option<&Schema> {
        self.schemas.get(&version)
    }

    /// Pack a record under the given schema version and write it to the
    /// asset's attribute storage.
    ///
    /// Admission order is significant and preserved: an unbound or wrong
    /// operator fails here with [`PlayerError::NotOperator`] before the
    /// asset is consulted; a bound operator writing before the holder's
    /// consent surfaces the asset's `NotAuthorized`.
    pub fn update_attributes_of(
        &self,
        caller: Address,
        token: &mut dyn Attributable,
        token_id: TokenId,
        version: u8,
        values: &[FieldValue],
    ) -> Result<(), PlayerError> {
        if self.operator != Some(caller) {
            tracing::warn!(player = %self.address, %caller, "write rejected: not the operator");
            return Err(PlayerError::NotOperator { caller });
        }
        let schema = self
            .schemas
            .get(&version)
            .ok_or(PlayerError::UnknownVersion { version })?;
        let slots = schema.pack(values)?;
        token.update_attributes_of(self.address, token_id, slots)?;
        tracing::info!(player = %self.address, %token_id, version, "attributes written");
        Ok(())
    }

    /// Read and render the record stored for `token_id`.
    ///
    /// Self-describing: resolves the schema from the version tag embedded
    /// in slot 0. Returns the empty string when the storage was never
    /// written (version tag 0), and fails loudly when the tag names a
    /// version this owner does not recognize.
    pub fn attributes_of(
        &self,
        token: &dyn Attributable,
        token_id: TokenId,
    ) -> Result<String, PlayerError> {
        let first = token.attributes_of(token_id, self.address, 0);
        let version = peek_version(&[first]).unwrap_or_default();
        if version == 0 {
            return Ok(String::new());
        }
        let schema = self
            .schemas
            .get(&version)
            .ok_or(PlayerError::UnknownVersion { version })?;
        let slots: Vec<_> = (0..schema.slot_count())
            .map(|index| token.attributes_of(token_id, self.address, index))
            .collect();
        Ok(schema.format(&slots)?)
    }
}

impl Probe for Player {
    fn interface_ids(&self) -> Vec<InterfaceId> {
        vec![*ATTRIBUTABLE_PLAYER_INTERFACE]
    }
}
