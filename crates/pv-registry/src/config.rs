//! Configuration for the registry.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PV_ADMIN` | (required) | Principal installed as admin at deployment |
//! | `PV_GENESIS_HEIGHT` | `0` | Initial logical clock reading |
//! | `PV_MAX_ADDRESS_LEN` | `256` | Longest accepted street address, in bytes |
//! | `PV_MAX_DOCUMENTS_HASH_LEN` | `130` | Longest accepted documents hash, in chars |
//! | `PV_MAX_EVENT_LOG_LEN` | `10000` | Events retained by the in-memory event log |

use crate::domain::{BlockHeight, Principal, ValueError};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use thiserror::Error;

pub const DEFAULT_MAX_ADDRESS_LEN: usize = 256;
/// 64-byte digest in hex with a `0x` prefix.
pub const DEFAULT_MAX_DOCUMENTS_HASH_LEN: usize = 130;
pub const DEFAULT_MAX_EVENT_LOG_LEN: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("Invalid admin principal: {0}")]
    Admin(#[from] ValueError),
}

/// Deployment-time registry settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Admin installed at deployment.
    pub initial_admin: Principal,
    /// Initial logical clock reading.
    pub genesis_height: BlockHeight,
    /// Longest accepted street address (bytes).
    pub max_address_len: usize,
    /// Longest accepted documents hash (characters, including any prefix).
    pub max_documents_hash_len: usize,
    /// Events kept by `InMemoryEventLog`; the oldest are dropped first.
    pub max_event_log_len: usize,
}

impl RegistryConfig {
    pub fn new(initial_admin: Principal) -> Self {
        Self {
            initial_admin,
            genesis_height: 0,
            max_address_len: DEFAULT_MAX_ADDRESS_LEN,
            max_documents_hash_len: DEFAULT_MAX_DOCUMENTS_HASH_LEN,
            max_event_log_len: DEFAULT_MAX_EVENT_LOG_LEN,
        }
    }

    /// Read configuration from `PV_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, VarError>,
    ) -> Result<Self, ConfigError> {
        let admin = read_var(&lookup, "PV_ADMIN")?.ok_or(ConfigError::Missing("PV_ADMIN"))?;
        let mut config = Self::new(Principal::new(admin)?);

        if let Some(height) = parse_var(&lookup, "PV_GENESIS_HEIGHT")? {
            config.genesis_height = height;
        }
        if let Some(len) = parse_var(&lookup, "PV_MAX_ADDRESS_LEN")? {
            config.max_address_len = len;
        }
        if let Some(len) = parse_var(&lookup, "PV_MAX_DOCUMENTS_HASH_LEN")? {
            config.max_documents_hash_len = len;
        }
        if let Some(len) = parse_var(&lookup, "PV_MAX_EVENT_LOG_LEN")? {
            config.max_event_log_len = len;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_address_len == 0 {
            return Err(ConfigError::Invalid {
                key: "max_address_len",
                reason: "must be greater than 0".to_string(),
            });
        }

        // Room for at least one hex byte.
        if self.max_documents_hash_len < 2 {
            return Err(ConfigError::Invalid {
                key: "max_documents_hash_len",
                reason: "must be at least 2".to_string(),
            });
        }

        if self.max_event_log_len == 0 {
            return Err(ConfigError::Invalid {
                key: "max_event_log_len",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn with_genesis_height(mut self, height: BlockHeight) -> Self {
        self.genesis_height = height;
        self
    }

    pub fn with_max_address_len(mut self, len: usize) -> Self {
        self.max_address_len = len;
        self
    }

    pub fn with_max_documents_hash_len(mut self, len: usize) -> Self {
        self.max_documents_hash_len = len;
        self
    }

    pub fn with_max_event_log_len(mut self, len: usize) -> Self {
        self.max_event_log_len = len;
        self
    }
}

/// `Ok(None)` only when the variable is unset.
fn read_var(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    key: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(key) {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::Invalid {
            key,
            reason: "value is not valid unicode".to_string(),
        }),
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = read_var(lookup, key)? else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        })
}
