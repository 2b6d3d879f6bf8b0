//! Property tests for the record codec: round-trip fidelity, truncation
//! determinism, and minimal slot layout over arbitrary uint schemas.

use alloy_primitives::U256;
use attributable_codec::{FieldDef, FieldKind, FieldValue, Schema, WORD_BITS};
use proptest::collection::vec;
use proptest::prelude::*;

fn low_mask(bits: usize) -> U256 {
    if bits >= WORD_BITS {
        U256::MAX
    } else {
        (U256::from(1u8) << bits) - U256::from(1u8)
    }
}

fn schema_of(widths: &[usize]) -> Schema {
    let fields = widths
        .iter()
        .enumerate()
        .map(|(i, bits)| FieldDef::new(format!("f{i}"), FieldKind::uint(*bits)))
        .collect();
    Schema::new(7, fields).expect("widths are generated in range")
}

proptest! {
    #[test]
    fn unpack_inverts_pack_for_in_range_values(
        entries in vec((1usize..=256, any::<u128>()), 1..8)
    ) {
        let widths: Vec<usize> = entries.iter().map(|(w, _)| *w).collect();
        let schema = schema_of(&widths);

        // Pre-mask so every value is within its declared width.
        let values: Vec<FieldValue> = entries
            .iter()
            .map(|(w, v)| FieldValue::Uint(U256::from(*v) & low_mask(*w)))
            .collect();

        let slots = schema.pack(&values).unwrap();
        prop_assert_eq!(slots.len(), schema.slot_count());

        let fields = schema.unpack(&slots).unwrap();
        prop_assert_eq!(fields[0].value, FieldValue::uint(7u64));
        for (field, value) in fields[1..].iter().zip(&values) {
            prop_assert_eq!(&field.value, value);
        }
    }

    #[test]
    fn truncation_is_masking(
        width in 1usize..=128,
        value in any::<u128>()
    ) {
        let schema = schema_of(&[width]);
        let slots = schema.pack(&[FieldValue::uint(value)]).unwrap();
        let fields = schema.unpack(&slots).unwrap();
        prop_assert_eq!(
            fields[1].value,
            FieldValue::Uint(U256::from(value) & low_mask(width))
        );
    }

    #[test]
    fn packing_is_deterministic(
        entries in vec((1usize..=256, any::<u128>()), 1..8)
    ) {
        let widths: Vec<usize> = entries.iter().map(|(w, _)| *w).collect();
        let schema = schema_of(&widths);
        let values: Vec<FieldValue> = entries
            .iter()
            .map(|(_, v)| FieldValue::uint(*v))
            .collect();
        prop_assert_eq!(schema.pack(&values).unwrap(), schema.pack(&values).unwrap());
    }

    #[test]
    fn slot_count_is_minimal(
        widths in vec(1usize..=256, 1..8)
    ) {
        let schema = schema_of(&widths);
        // Greedy fill is minimal when fields may not split or reorder.
        let mut expected = 1usize;
        let mut bit = 8; // version tag
        for w in &widths {
            if bit + w > WORD_BITS {
                expected += 1;
                bit = 0;
            }
            bit += w;
        }
        prop_assert_eq!(schema.slot_count(), expected);
    }
}
