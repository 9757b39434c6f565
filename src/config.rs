//! Game configuration: board size, fleet composition and the strike rule.

use alloc::vec::Vec;

use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [2, 3, 3, 4, 5];

/// Consecutive misses that add up to one strike in the strikes variant.
pub const DEFAULT_MISS_STRIKE_THRESHOLD: u32 = 5;
/// Strikes that lose the game in the strikes variant.
pub const DEFAULT_STRIKE_LIMIT: u32 = 3;

/// Random placement tries per ship before the ship is left out of the fleet.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Rules for a single game.
///
/// `None` for either threshold disables that rule: with no miss threshold
/// strikes never accumulate, and with no strike limit the game can only end
/// by sinking the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet_lengths: Vec<usize>,
    pub miss_strike_threshold: Option<u32>,
    pub strike_limit: Option<u32>,
}

impl GameConfig {
    /// Misses accumulate into strikes; three strikes lose the game.
    pub fn strikes() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet_lengths: FLEET_LENGTHS.to_vec(),
            miss_strike_threshold: Some(DEFAULT_MISS_STRIKE_THRESHOLD),
            strike_limit: Some(DEFAULT_STRIKE_LIMIT),
        }
    }

    /// The game ends only when every ship is sunk.
    pub fn simple() -> Self {
        Self {
            miss_strike_threshold: None,
            strike_limit: None,
            ..Self::strikes()
        }
    }

    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_fleet(mut self, lengths: &[usize]) -> Self {
        self.fleet_lengths = lengths.to_vec();
        self
    }

    pub fn with_miss_strike_threshold(mut self, threshold: Option<u32>) -> Self {
        self.miss_strike_threshold = threshold;
        self
    }

    pub fn with_strike_limit(mut self, limit: Option<u32>) -> Self {
        self.strike_limit = limit;
        self
    }

    /// Total number of cells the full fleet occupies.
    pub fn fleet_cells(&self) -> usize {
        self.fleet_lengths.iter().sum()
    }

    /// Check the configuration before a board is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.fleet_lengths.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for (index, &length) in self.fleet_lengths.iter().enumerate() {
            if length == 0 {
                return Err(ConfigError::ZeroLengthShip { index });
            }
            if length > self.board_size {
                return Err(ConfigError::ShipTooLong {
                    index,
                    length,
                    board_size: self.board_size,
                });
            }
        }
        if self.miss_strike_threshold == Some(0) {
            return Err(ConfigError::ZeroMissThreshold);
        }
        if self.strike_limit == Some(0) {
            return Err(ConfigError::ZeroStrikeLimit);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::strikes()
    }
}

