//! Bit-packed, versioned attribute records over fixed-width slot words.
//!
//! An attribute owner declares a [`Schema`]: an ordered list of named,
//! typed fields behind a non-zero 8-bit version tag. [`Schema::pack`]
//! serializes one record into as few 256-bit words as fit without ever
//! splitting a field across a word boundary; [`Schema::unpack`] is the
//! exact inverse and [`Schema::format`] renders the canonical text form.
//!
//! The version tag is physically the first field of every record, so a
//! reader holding only raw words can recover the producing schema version
//! with [`peek_version`] before committing to a decode.

mod error;
mod field;
mod record;
mod schema;

pub use error::{CodecError, SchemaError};
pub use field::{Field, FieldKind, FieldValue, ADDRESS_BITS, VERSION_BITS, WORD_BITS};
pub use record::{SlotReader, SlotWriter};
pub use schema::{peek_version, FieldDef, Schema, VERSION_FIELD};
