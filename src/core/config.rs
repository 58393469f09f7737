//! Game configuration.
//!
//! The caller owns these settings (pile count, pile size range, difficulty,
//! seed) and passes them through; the engine only validates them.
//! Configs can also be loaded from TOML:
//!
//! ```toml
//! pile_count = 3
//! min_size = 1
//! max_size = 7
//! difficulty = "Hard"
//! seed = 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::Difficulty;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of piles (at least 1).
    pub pile_count: usize,

    /// Smallest initial pile size (inclusive).
    pub min_size: u32,

    /// Largest initial pile size (inclusive, at least 1).
    pub max_size: u32,

    /// Opponent difficulty tier.
    pub difficulty: Difficulty,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pile_count: 4,
            min_size: 1,
            max_size: 10,
            difficulty: Difficulty::Normal,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with explicit pile settings.
    pub fn new(pile_count: usize, min_size: u32, max_size: u32, difficulty: Difficulty) -> Self {
        Self {
            pile_count,
            min_size,
            max_size,
            difficulty,
            seed: None,
        }
    }

    /// Set the pile count.
    #[must_use]
    pub fn with_pile_count(mut self, pile_count: usize) -> Self {
        self.pile_count = pile_count;
        self
    }

    /// Set the initial pile size range.
    #[must_use]
    pub fn with_size_range(mut self, min_size: u32, max_size: u32) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// `max_size` must be at least 1 so a freshly rolled board always has
    /// something to take.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pile_count == 0 {
            return Err(ConfigError::Validation(
                "pile_count must be at least 1".into(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::Validation(format!(
                "min_size {} is greater than max_size {}",
                self.min_size, self.max_size
            )));
        }
        if self.max_size == 0 {
            return Err(ConfigError::Validation(
                "max_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
