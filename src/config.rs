//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! A missing file falls back to the built-in defaults; a present but
//! malformed file is an error.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::types::NassauError;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// Money per point.
    #[serde(default = "default_bet_unit")]
    pub bet_unit: Decimal,
    /// Symbol printed in front of money amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_bet_unit() -> Decimal {
    dec!(5)
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bet_unit: default_bet_unit(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NassauError> {
        if self.game.bet_unit <= Decimal::ZERO {
            return Err(NassauError::InvalidBetUnit(self.game.bet_unit));
        }
        if self.game.currency.is_empty() {
            return Err(NassauError::Config("currency symbol is empty".into()));
        }
        Ok(())
    }
}
