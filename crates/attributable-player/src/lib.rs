//! Owner-side half of the attributable protocol.
//!
//! A [`Player`] owns a private version→schema table and a single bound
//! operator account. Writes pack a typed record with the resolved schema
//! and pass through the asset's `Attributable` surface; reads resolve the
//! schema from the version tag embedded in slot 0, so callers hand over
//! nothing but the asset and token id.

mod config;
mod error;
mod player;

pub use config::{ConfigError, PlayerConfig, SchemaConfig};
pub use error::PlayerError;
pub use player::{Player, ATTRIBUTABLE_PLAYER_INTERFACE};
