//! TOML-loadable owner configuration.
//!
//! A player's identity and schema table are deploy-time configuration.
//! Field kinds appear in config as their canonical text (`"uint8"`,
//! `"address"`), the same spelling the formatter emits.
//!
//! ```toml
//! name = "my player"
//! address = "0x9999999999999999999999999999999999999999"
//! admin = "0x0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a"
//!
//! [[schemas]]
//! version = 1
//! fields = [
//!     { name = "level", kind = "uint8" },
//!     { name = "stamina", kind = "uint32" },
//!     { name = "winner", kind = "address" },
//! ]
//! ```

use crate::player::Player;
use attributable_codec::{FieldDef, Schema, SchemaError};
use attributable_core::Address;
use serde::{Deserialize, Serialize};

/// Declaration of one schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Version tag, non-zero.
    pub version: u8,
    /// Fields after the implicit version tag, in packing order.
    pub fields: Vec<FieldDef>,
}

/// Deploy-time configuration of one owner component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    pub name: String,
    /// The component's deployed address.
    pub address: Address,
    /// The administrative account.
    pub admin: Address,
    /// Schema table, one entry per version.
    #[serde(default)]
    pub schemas: Vec<SchemaConfig>,
}

/// Failures while loading a player from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document did not parse.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A declared schema failed authoring validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Two schema declarations share a version tag.
    #[error("schema version {version} declared twice")]
    DuplicateVersion {
        /// The colliding version tag.
        version: u8,
    },
}

impl Player {
    /// Build a player from parsed configuration.
    pub fn from_config(config: PlayerConfig) -> Result<Self, ConfigError> {
        let mut player = Player::new(config.address, config.admin, config.name);
        for declared in config.schemas {
            let version = declared.version;
            let schema = Schema::new(version, declared.fields)?;
            if player.register_schema(schema).is_err() {
                return Err(ConfigError::DuplicateVersion { version });
            }
        }
        Ok(player)
    }

    /// Parse a TOML document and build the player it declares.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::from_config(toml::from_str(text)?)
    }
}
