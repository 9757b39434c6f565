//! Common types for the game engine: shot outcomes, game status and errors.

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot missed every ship, or landed outside the board.
    Miss,
    /// Shot struck the last intact segment of a ship.
    Sunk { index: usize, length: usize },
    /// Miss that completed a run of consecutive misses, carrying the new strike count.
    Strike { strikes: u32 },
    /// Miss that brought the strike count to the limit.
    GameLost,
    /// Cell was already targeted earlier in this game.
    AlreadyFired,
}

impl FireOutcome {
    /// `true` for shots that struck a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, FireOutcome::Hit | FireOutcome::Sunk { .. })
    }

    /// `true` for shots that landed in open water, including strike outcomes.
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            FireOutcome::Miss | FireOutcome::Strike { .. } | FireOutcome::GameLost
        )
    }
}

impl core::fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FireOutcome::Hit => write!(f, "Hit!"),
            FireOutcome::Miss => write!(f, "Miss"),
            FireOutcome::Sunk { length, .. } => write!(f, "Ship sunk! (length {})", length),
            FireOutcome::Strike { strikes } => write!(f, "Miss, strike {}", strikes),
            FireOutcome::GameLost => write!(f, "Miss, out of strikes"),
            FireOutcome::AlreadyFired => write!(f, "Already fired there"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What a rendering shell should paint for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Unfired,
    Miss,
    Hit,
    /// Hit cell belonging to a ship that has been sunk.
    Sunk,
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard,
    EmptyFleet,
    ZeroLengthShip { index: usize },
    ShipTooLong {
        index: usize,
        length: usize,
        board_size: usize,
    },
    ZeroMissThreshold,
    ZeroStrikeLimit,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "board size must be at least 1"),
            ConfigError::EmptyFleet => write!(f, "fleet must contain at least one ship"),
            ConfigError::ZeroLengthShip { index } => {
                write!(f, "ship {} has zero length", index)
            }
            ConfigError::ShipTooLong {
                index,
                length,
                board_size,
            } => write!(
                f,
                "ship {} has length {} which does not fit a {}x{} board",
                index, length, board_size, board_size
            ),
            ConfigError::ZeroMissThreshold => {
                write!(f, "miss strike threshold must be at least 1")
            }
            ConfigError::ZeroStrikeLimit => write!(f, "strike limit must be at least 1"),
        }
    }
}

/// Errors returned by `GameBoard` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Configuration rejected at construction.
    InvalidConfig(ConfigError),
    /// Ship placement extends past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Shot submitted after the game already ended.
    GameOver(GameStatus),
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::InvalidConfig(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidConfig(e) => write!(f, "invalid configuration: {}", e),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::GameOver(status) => {
                write!(f, "Game is already over ({:?}), reset to play again", status)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}
