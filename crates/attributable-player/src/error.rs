//! Owner-side error types.

use attributable_codec::CodecError;
use attributable_core::{Address, AttributeError};

/// Failures of the owner component's operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// Operator binding is reserved to the component's admin.
    #[error("{caller} is not the admin")]
    NotAdmin {
        /// The rejected caller.
        caller: Address,
    },

    /// The write did not come from the bound operator.
    ///
    /// Also raised while no operator is bound at all — the remediation
    /// path (owner-side admin action) is the same either way, and it is
    /// distinct from the asset-holder remediation behind
    /// [`AttributeError::NotAuthorized`].
    #[error("{caller} is not the operator")]
    NotOperator {
        /// The rejected caller.
        caller: Address,
    },

    /// A schema for this version is already registered.
    #[error("schema version {version} already registered")]
    DuplicateSchema {
        /// The colliding version tag.
        version: u8,
    },

    /// No schema is registered for the requested version.
    ///
    /// On reads this means the raw slots reference a version this owner
    /// never (or no longer) recognizes; decoding stops loudly instead of
    /// guessing a layout.
    #[error("no schema registered for version {version}")]
    UnknownVersion {
        /// The unresolvable version tag.
        version: u8,
    },

    /// The asset side rejected the operation.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// The record could not be packed or unpacked.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
