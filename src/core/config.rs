//! Engine configuration.
//!
//! The move limit is the only adjustable rule. Unit tables, the starting
//! layout and the tie-break are fixed.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of actions before the game is decided for the Defender.
pub const DEFAULT_MAX_TURNS: u32 = 100;

/// Rules configuration.
///
/// ```
/// use ai_wargame::core::RulesConfig;
///
/// let config = RulesConfig::from_toml_str("max_turns = 30").unwrap();
/// assert_eq!(config.max_turns, 30);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Accepted actions (both players combined) before the game ends.
    pub max_turns: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl RulesConfig {
    /// Set the move limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Reject limits that would end the game before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::InvalidMaxTurns(self.max_turns));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
