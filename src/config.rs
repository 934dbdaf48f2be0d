//! Runtime configuration for [`InventorySystem`](crate::lifecycle::InventorySystem).
//!
//! Only channel capacities are configurable. Log filtering is handled separately
//! through `RUST_LOG` (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use thiserror::Error;

pub const STORE_BUFFER_VAR: &str = "PRODUCT_DIALOG_STORE_BUFFER";
pub const DIALOG_BUFFER_VAR: &str = "PRODUCT_DIALOG_DIALOG_BUFFER";

const DEFAULT_BUFFER: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidBuffer { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Capacity of the store actor's request channel.
    pub store_buffer: usize,
    /// Capacity of the dialog actor's request channel.
    pub dialog_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_buffer: DEFAULT_BUFFER,
            dialog_buffer: DEFAULT_BUFFER,
        }
    }
}

impl Config {
    /// Reads overrides from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            store_buffer: parse_buffer(STORE_BUFFER_VAR, lookup(STORE_BUFFER_VAR))?
                .unwrap_or(defaults.store_buffer),
            dialog_buffer: parse_buffer(DIALOG_BUFFER_VAR, lookup(DIALOG_BUFFER_VAR))?
                .unwrap_or(defaults.dialog_buffer),
        })
    }
}

fn parse_buffer(var: &'static str, value: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<usize>();
    match parsed {
        Ok(size) if size > 0 => Ok(Some(size)),
        _ => Err(ConfigError::InvalidBuffer { var, value }),
    }
}
