use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::{MAX_SEATS, MIN_PLAYERS};

pub const DEFAULT_STARTING_STACK: u32 = 1000;
pub const DEFAULT_BIG_BLIND: u32 = 50;

/// Table settings for one game.
///
/// `seed` fixes the shuffle; `None` draws a fresh seed from the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_stack: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub max_seats: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_stack: DEFAULT_STARTING_STACK,
            big_blind: DEFAULT_BIG_BLIND,
            seed: None,
            max_seats: MAX_SEATS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind < 2 {
            return Err(GameError::InvalidConfig(format!(
                "big_blind must be at least 2, got {}",
                self.big_blind
            )));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting_stack must be positive".to_string(),
            ));
        }
        if !(MIN_PLAYERS..=MAX_SEATS).contains(&self.max_seats) {
            return Err(GameError::InvalidConfig(format!(
                "max_seats must be between {MIN_PLAYERS} and {MAX_SEATS}, got {}",
                self.max_seats
            )));
        }
        // Every chip at a full table has to fit in a u32.
        let table_chips = u64::from(self.starting_stack) * self.max_seats as u64;
        if table_chips > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "starting_stack {} across {} seats exceeds {} chips",
                self.starting_stack,
                self.max_seats,
                u32::MAX
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_oversized_table() {
        let cfg = GameConfig {
            max_seats: 11,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_unsplittable_blind() {
        let cfg = GameConfig {
            big_blind: 1,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn table_total_must_fit_in_chip_type() {
        let at_limit = GameConfig {
            starting_stack: u32::MAX / 10,
            max_seats: 10,
            ..GameConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let over = GameConfig {
            starting_stack: u32::MAX / 10 + 1,
            max_seats: 10,
            ..GameConfig::default()
        };
        assert!(matches!(over.validate(), Err(GameError::InvalidConfig(_))));

        let heads_up = GameConfig {
            starting_stack: 3_000_000_000,
            max_seats: 2,
            ..GameConfig::default()
        };
        assert!(heads_up.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"big_blind": 100}"#).unwrap();
        assert_eq!(cfg.big_blind, 100);
        assert_eq!(cfg.starting_stack, DEFAULT_STARTING_STACK);
    }
}
