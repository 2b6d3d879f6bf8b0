//! Codec error types.
//!
//! [`SchemaError`] covers schema-authoring mistakes and is surfaced at
//! definition time; [`CodecError`] covers pack/unpack failures at use
//! time. Value-wider-than-field is deliberately *not* an error — encoding
//! masks to the declared width (see `Schema::pack`).

use crate::field::FieldKind;

/// Fatal schema-definition errors, caught when a schema is authored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Version 0 marks uninitialized storage and cannot tag a schema.
    #[error("schema version 0 is reserved for uninitialized storage")]
    ReservedVersion,

    /// An unsigned field was declared wider than a slot word or zero bits wide.
    #[error("uint width out of range: {bits} bits (expected 1..=256)")]
    WidthOutOfRange {
        /// The declared width.
        bits: usize,
    },

    /// A field was declared with an empty name.
    #[error("field names must be non-empty")]
    EmptyFieldName,

    /// Two fields share a name, which would make the text rendering ambiguous.
    #[error("duplicate field name: {name}")]
    DuplicateField {
        /// The repeated name.
        name: String,
    },

    /// A kind string could not be parsed back into a [`FieldKind`].
    #[error("unknown field kind: {text}")]
    UnknownKind {
        /// The unparseable text.
        text: String,
    },
}

/// Pack/unpack failures for a well-formed schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The caller supplied the wrong number of values for the schema.
    #[error("expected {expected} field values, got {actual}")]
    Arity {
        /// Number of values the schema requires (version excluded).
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A value's kind does not agree with the field's declared kind.
    #[error("value for field `{field}` does not match declared kind {expected}")]
    KindMismatch {
        /// Name of the offending field.
        field: String,
        /// The kind the schema declares.
        expected: FieldKind,
    },

    /// The embedded version tag names a different schema than the decoder's.
    #[error("slot words carry version {actual}, schema decodes version {expected}")]
    VersionMismatch {
        /// Version of the decoding schema.
        expected: u8,
        /// Version embedded in slot 0.
        actual: u8,
    },

    /// Fewer slot words were supplied than the schema occupies.
    #[error("record needs {needed} slot words, got {provided}")]
    Truncated {
        /// Slot words the schema occupies.
        needed: usize,
        /// Slot words supplied.
        provided: usize,
    },
}
