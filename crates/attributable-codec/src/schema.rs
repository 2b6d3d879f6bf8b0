//! Versioned record schemas: authoring-time validation and the
//! pack/unpack/format engine.

use crate::error::{CodecError, SchemaError};
use crate::field::{mask, Field, FieldKind, FieldValue, VERSION_BITS, WORD_BITS};
use crate::record::{SlotReader, SlotWriter};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Name of the leading version field every schema carries.
pub const VERSION_FIELD: &str = "version";

/// Static shape of one field: name plus kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within the schema.
    pub name: String,
    /// Declared kind.
    pub kind: FieldKind,
}

impl FieldDef {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// An ordered, versioned field layout owned by one attribute owner.
///
/// The version tag is itself field 0 of the layout — an 8-bit unsigned
/// integer named `version`, inserted by the constructor — so every packed
/// record is self-describing. Field order is significant: reordering
/// fields between versions is schema-incompatible and requires a new
/// version tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    version: u8,
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Build a schema from the fields that follow the version tag.
    ///
    /// Fails on the fatal authoring errors of [`SchemaError`]: reserved
    /// version 0, a uint width outside `1..=256`, an empty or duplicate
    /// field name.
    pub fn new(version: u8, fields: Vec<FieldDef>) -> Result<Self, SchemaError> {
        if version == 0 {
            return Err(SchemaError::ReservedVersion);
        }
        let mut all = Vec::with_capacity(fields.len() + 1);
        all.push(FieldDef::new(VERSION_FIELD, FieldKind::uint(VERSION_BITS)));
        all.extend(fields);

        let mut names = BTreeSet::new();
        for def in &all {
            if def.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if let FieldKind::Uint { bits } = def.kind {
                if bits == 0 || bits > WORD_BITS {
                    return Err(SchemaError::WidthOutOfRange { bits });
                }
            }
            if !names.insert(def.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: def.name.clone(),
                });
            }
        }
        Ok(Self {
            version,
            fields: all,
        })
    }

    /// The schema's version tag.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// All fields in packing order, the version field included.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Slot words one packed record of this schema occupies.
    ///
    /// Deterministic and minimal: fields fill each word until the next
    /// field would cross the boundary, which opens a new word.
    pub fn slot_count(&self) -> usize {
        let mut slots = 1;
        let mut bit = 0;
        for def in &self.fields {
            let bits = def.kind.bits();
            if bit + bits > WORD_BITS {
                slots += 1;
                bit = 0;
            }
            bit += bits;
        }
        slots
    }

    /// Pack one record into slot words.
    ///
    /// `values` supplies every field after the version tag, in schema
    /// order; the tag is packed from the schema itself. Unsigned values
    /// wider than their declared field are masked to the low bits —
    /// truncation, not rejection — so callers must range-check upstream
    /// when wrapping is unacceptable.
    pub fn pack(&self, values: &[FieldValue]) -> Result<Vec<U256>, CodecError> {
        let expected = self.fields.len() - 1;
        if values.len() != expected {
            return Err(CodecError::Arity {
                expected,
                actual: values.len(),
            });
        }
        let mut writer = SlotWriter::new();
        writer.put(VERSION_BITS, U256::from(self.version));
        for (def, value) in self.fields[1..].iter().zip(values) {
            if !value.matches(def.kind) {
                return Err(CodecError::KindMismatch {
                    field: def.name.clone(),
                    expected: def.kind,
                });
            }
            writer.put(def.kind.bits(), value.to_word());
        }
        Ok(writer.finish())
    }

    /// Unpack slot words produced by this schema version.
    ///
    /// Verifies the embedded version tag before decoding anything else;
    /// a mismatch means the caller resolved the wrong historical schema
    /// and must not trust any extraction.
    pub fn unpack(&self, slots: &[U256]) -> Result<Vec<Field>, CodecError> {
        let needed = self.slot_count();
        if slots.len() < needed {
            return Err(CodecError::Truncated {
                needed,
                provided: slots.len(),
            });
        }
        match peek_version(slots) {
            Some(actual) if actual == self.version => {}
            actual => {
                return Err(CodecError::VersionMismatch {
                    expected: self.version,
                    actual: actual.unwrap_or_default(),
                })
            }
        }
        let mut reader = SlotReader::new(slots);
        let mut fields = Vec::with_capacity(self.fields.len());
        for def in &self.fields {
            let raw = reader.take(def.kind.bits())?;
            fields.push(Field::from_word(&def.name, def.kind, raw));
        }
        Ok(fields)
    }

    /// Render slot words as `<kind> <name>:<value>` segments joined by
    /// `;`, in schema order.
    pub fn format(&self, slots: &[U256]) -> Result<String, CodecError> {
        let fields = self.unpack(slots)?;
        Ok(render(&fields))
    }
}

/// Join decoded fields into the canonical text rendering.
pub fn render(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Read the version tag from bits 0..8 of slot 0 without a schema.
///
/// Returns `None` for an empty slot sequence. A result of 0 means the
/// storage was never written: version 0 is unschedulable by construction.
pub fn peek_version(slots: &[U256]) -> Option<u8> {
    slots
        .first()
        .map(|word| (*word & mask(VERSION_BITS)).as_limbs()[0] as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use assert_matches::assert_matches;

    fn player_schema() -> Schema {
        Schema::new(
            1,
            vec![
                FieldDef::new("level", FieldKind::uint(8)),
                FieldDef::new("stamina", FieldKind::uint(32)),
                FieldDef::new("winner", FieldKind::Address),
            ],
        )
        .unwrap()
    }

    #[test]
    fn version_field_is_always_first() {
        let schema = player_schema();
        assert_eq!(schema.fields()[0].name, VERSION_FIELD);
        assert_eq!(schema.fields()[0].kind, FieldKind::uint(8));
        assert_eq!(schema.fields().len(), 4);
    }

    #[test]
    fn authoring_errors_are_caught_at_construction() {
        assert_matches!(Schema::new(0, vec![]), Err(SchemaError::ReservedVersion));
        assert_matches!(
            Schema::new(1, vec![FieldDef::new("x", FieldKind::uint(257))]),
            Err(SchemaError::WidthOutOfRange { bits: 257 })
        );
        assert_matches!(
            Schema::new(1, vec![FieldDef::new("x", FieldKind::uint(0))]),
            Err(SchemaError::WidthOutOfRange { bits: 0 })
        );
        assert_matches!(
            Schema::new(1, vec![FieldDef::new("", FieldKind::uint(8))]),
            Err(SchemaError::EmptyFieldName)
        );
        assert_matches!(
            Schema::new(1, vec![FieldDef::new("version", FieldKind::uint(8))]),
            Err(SchemaError::DuplicateField { .. })
        );
    }

    #[test]
    fn round_trip_preserves_values() {
        let schema = player_schema();
        let winner = address!("426eb88af949cd5bd8a272031badc2f80330e766");
        let values = [
            FieldValue::uint(2u64),
            FieldValue::uint(123_432u64),
            FieldValue::address(winner),
        ];
        let slots = schema.pack(&values).unwrap();
        assert_eq!(slots.len(), 1);

        let fields = schema.unpack(&slots).unwrap();
        assert_eq!(fields[0].value, FieldValue::uint(1u64));
        assert_eq!(fields[1].value, values[0]);
        assert_eq!(fields[2].value, values[1]);
        assert_eq!(fields[3].value, values[2]);
    }

    #[test]
    fn formats_in_schema_order() {
        let schema = player_schema();
        let slots = schema
            .pack(&[
                FieldValue::uint(2u64),
                FieldValue::uint(123_432u64),
                FieldValue::address(address!("426eb88af949cd5bd8a272031badc2f80330e766")),
            ])
            .unwrap();
        assert_eq!(
            schema.format(&slots).unwrap(),
            "uint8 version:1;uint8 level:2;uint32 stamina:123432;\
             address winner:0x426eb88af949cd5bd8a272031badc2f80330e766"
        );
    }

    #[test]
    fn truncation_masks_to_declared_width() {
        let schema = Schema::new(3, vec![FieldDef::new("counter", FieldKind::uint(8))]).unwrap();
        let slots = schema.pack(&[FieldValue::uint(0x1_02u64)]).unwrap();
        let fields = schema.unpack(&slots).unwrap();
        // 258 wraps to 2 under the 8-bit mask; the record itself survives.
        assert_eq!(fields[1].value, FieldValue::uint(2u64));
    }

    #[test]
    fn multi_word_schema_pads_instead_of_splitting() {
        let schema = Schema::new(
            2,
            vec![
                FieldDef::new("a", FieldKind::uint(200)),
                FieldDef::new("b", FieldKind::uint(128)),
            ],
        )
        .unwrap();
        // 8 + 200 = 208; b would end at 336 > 256, so it pads to slot 1.
        assert_eq!(schema.slot_count(), 2);

        let slots = schema
            .pack(&[FieldValue::uint(U256::MAX), FieldValue::uint(5u64)])
            .unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1], U256::from(5u64));

        let fields = schema.unpack(&slots).unwrap();
        assert_eq!(fields[2].value, FieldValue::uint(5u64));
    }

    #[test]
    fn arity_and_kind_are_checked() {
        let schema = player_schema();
        assert_matches!(
            schema.pack(&[FieldValue::uint(1u64)]),
            Err(CodecError::Arity {
                expected: 3,
                actual: 1
            })
        );
        assert_matches!(
            schema.pack(&[
                FieldValue::uint(2u64),
                FieldValue::uint(3u64),
                FieldValue::uint(4u64),
            ]),
            Err(CodecError::KindMismatch { expected: FieldKind::Address, .. })
        );
    }

    #[test]
    fn unpack_rejects_foreign_version() {
        let v1 = player_schema();
        let v2 = Schema::new(
            2,
            vec![
                FieldDef::new("level", FieldKind::uint(8)),
                FieldDef::new("stamina", FieldKind::uint(32)),
                FieldDef::new("winner", FieldKind::Address),
            ],
        )
        .unwrap();
        let slots = v1
            .pack(&[
                FieldValue::uint(2u64),
                FieldValue::uint(3u64),
                FieldValue::address(address!("426eb88af949cd5bd8a272031badc2f80330e766")),
            ])
            .unwrap();
        assert_matches!(
            v2.unpack(&slots),
            Err(CodecError::VersionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn peek_version_reads_the_tag_without_a_schema() {
        let schema = player_schema();
        let slots = schema
            .pack(&[
                FieldValue::uint(0u64),
                FieldValue::uint(0u64),
                FieldValue::address(address!("0000000000000000000000000000000000000000")),
            ])
            .unwrap();
        assert_eq!(peek_version(&slots), Some(1));
        assert_eq!(peek_version(&[]), None);
        assert_eq!(peek_version(&[U256::ZERO]), Some(0));
    }
}
