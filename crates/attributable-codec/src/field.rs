//! Field kinds, values, and the single-field bit codec primitives.

use crate::error::SchemaError;
use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of one slot word in bits.
pub const WORD_BITS: usize = 256;

/// Fixed width of an address field, independent of the word width.
pub const ADDRESS_BITS: usize = 160;

/// Width of the leading version tag.
pub const VERSION_BITS: usize = 8;

/// Static type of one field: an unsigned integer of a declared width, or
/// a 160-bit address.
///
/// The kind set is closed by design; widths are fixed when the schema is
/// authored. The canonical text (`uint8`, `address`, ...) doubles as the
/// config syntax and as the prefix of the formatted rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldKind {
    /// Unsigned integer, `bits` wide.
    Uint {
        /// Declared width, 1..=256.
        bits: usize,
    },
    /// 160-bit account address.
    Address,
}

impl FieldKind {
    /// Unsigned-integer kind of the given width. Width bounds are checked
    /// when the schema is built, not here.
    pub const fn uint(bits: usize) -> Self {
        Self::Uint { bits }
    }

    /// Bits this kind occupies in a slot word.
    pub const fn bits(self) -> usize {
        match self {
            Self::Uint { bits } => bits,
            Self::Address => ADDRESS_BITS,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint { bits } => write!(f, "uint{bits}"),
            Self::Address => f.write_str("address"),
        }
    }
}

impl FromStr for FieldKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "address" {
            return Ok(Self::Address);
        }
        let unknown = || SchemaError::UnknownKind { text: s.to_string() };
        let digits = s.strip_prefix("uint").ok_or_else(unknown)?;
        // Reject "uint007"-style spellings so Display/FromStr round-trip.
        if digits.is_empty() || digits.starts_with('0') {
            return Err(unknown());
        }
        let bits: usize = digits.parse().map_err(|_| unknown())?;
        Ok(Self::Uint { bits })
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.to_string()
    }
}

impl TryFrom<String> for FieldKind {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A runtime value for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Unsigned integer value; masked to the field's declared width on encode.
    Uint(U256),
    /// Account address value.
    Address(Address),
}

impl FieldValue {
    /// Unsigned-integer value.
    pub fn uint<T>(value: T) -> Self
    where
        U256: alloy_primitives::ruint::UintTryFrom<T>,
    {
        Self::Uint(U256::from(value))
    }

    /// Address value.
    pub const fn address(value: Address) -> Self {
        Self::Address(value)
    }

    /// Whether this value can be encoded under the given kind.
    pub fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Uint(_), FieldKind::Uint { .. }) | (Self::Address(_), FieldKind::Address)
        )
    }

    /// The value as a raw word, ready for shifting into position.
    pub fn to_word(self) -> U256 {
        match self {
            Self::Uint(value) => value,
            Self::Address(address) => U256::from_be_bytes(address.into_word().0),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(value) => write!(f, "{value}"),
            Self::Address(address) => write!(f, "0x{}", hex::encode(address.as_slice())),
        }
    }
}

/// One decoded field: declared shape plus the extracted value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name from the schema.
    pub name: String,
    /// Declared kind.
    pub kind: FieldKind,
    /// Extracted value.
    pub value: FieldValue,
}

impl Field {
    pub(crate) fn from_word(name: &str, kind: FieldKind, raw: U256) -> Self {
        let value = match kind {
            FieldKind::Uint { .. } => FieldValue::Uint(raw),
            FieldKind::Address => FieldValue::Address(Address::from_word(B256::from(raw))),
        };
        Self {
            name: name.to_string(),
            kind,
            value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.kind, self.name, self.value)
    }
}

/// Low mask covering `bits` bits of a word.
pub(crate) fn mask(bits: usize) -> U256 {
    if bits >= WORD_BITS {
        U256::MAX
    } else {
        (U256::from(1u8) << bits) - U256::from(1u8)
    }
}
