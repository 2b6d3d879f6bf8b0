//! ERC-165-style capability discovery.
//!
//! An interface id is the XOR of the 4-byte keccak selectors of the
//! operations it names. Callers probe a component with
//! [`Probe::supports_interface`] before relying on the protocol, so a
//! mismatched deployment fails fast instead of mis-writing storage.

use alloy_primitives::keccak256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitXor;

/// First 4 bytes of the keccak-256 hash of a canonical operation
/// signature, e.g. `attributesOf(uint256,address,uint256)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Discovery id for a set of operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceId(pub [u8; 4]);

impl InterfaceId {
    /// Fold a signature set into its interface id.
    pub fn of(signatures: &[&str]) -> Self {
        signatures
            .iter()
            .map(|sig| Self(selector(sig)))
            .fold(Self([0; 4]), BitXor::bitxor)
    }

    /// The raw id bytes.
    pub const fn as_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl BitXor for InterfaceId {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        let mut out = [0u8; 4];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.0[i] ^ rhs.0[i];
        }
        Self(out)
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Capability probe a protocol component answers.
pub trait Probe {
    /// Every interface id this component implements.
    fn interface_ids(&self) -> Vec<InterfaceId>;

    /// Whether this component implements the probed interface.
    fn supports_interface(&self, id: InterfaceId) -> bool {
        self.interface_ids().contains(&id)
    }
}
