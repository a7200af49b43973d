//! Configuration for memdb
//!
//! Centralized configuration with sensible defaults.

use crate::error::{MemDbError, Result};

/// Main configuration for a memdb table and its workload driver
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // MemTable Configuration
    // -------------------------------------------------------------------------
    /// Default insert policy for `MemTable::insert`:
    /// `true` replaces a row with the same key (upsert),
    /// `false` rejects it with `MemDbError::DuplicateKey`
    pub allow_update: bool,

    // -------------------------------------------------------------------------
    // Workload Configuration
    // -------------------------------------------------------------------------
    /// Number of rows the workload driver generates
    pub row_count: usize,

    /// Random key values are drawn from `0..key_space`
    pub key_space: i32,

    /// Length of generated string columns
    pub name_len: usize,

    /// RNG seed (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_update: true,
            row_count: 100_000,
            key_space: 10_000,
            name_len: 20,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the workload settings describe something runnable
    pub fn validate(&self) -> Result<()> {
        if self.row_count == 0 {
            return Err(MemDbError::Config("row_count must be positive".to_string()));
        }
        if self.key_space <= 0 {
            return Err(MemDbError::Config(format!(
                "key_space must be positive, got {}",
                self.key_space
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the default insert policy (true = upsert)
    pub fn allow_update(mut self, allow: bool) -> Self {
        self.config.allow_update = allow;
        self
    }

    /// Set the number of generated rows
    pub fn row_count(mut self, count: usize) -> Self {
        self.config.row_count = count;
        self
    }

    /// Set the range random keys are drawn from
    pub fn key_space(mut self, space: i32) -> Self {
        self.config.key_space = space;
        self
    }

    /// Set the length of generated strings
    pub fn name_len(mut self, len: usize) -> Self {
        self.config.name_len = len;
        self
    }

    /// Set a fixed RNG seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
