//! Game board state: the hidden fleet, the shots fired at it and the
//! hit/miss/strike counters that decide the game.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{BoardError, CellView, ConfigError, FireOutcome, GameStatus};
use crate::config::GameConfig;
use crate::placement::FleetLayoutGenerator;
use crate::ship::{ShipPlacement, ShipSnapshot};

/// Aggregate counters of a board, serializable for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub shots: usize,
    pub hits: u32,
    pub misses: u32,
    pub consecutive_misses: u32,
    pub strikes: u32,
    pub ships_sunk: usize,
    pub ships: usize,
}

/// One game session: the opponent's fleet and the player's shots against it.
///
/// The board owns its random source so that [`GameBoard::reset`] can lay out
/// a fresh fleet. Once the game is won or lost every further shot on the
/// board is rejected with [`BoardError::GameOver`] until it is reset.
pub struct GameBoard<R = SmallRng> {
    config: GameConfig,
    rng: R,
    fleet: Vec<ShipPlacement>,
    fired: BTreeSet<(usize, usize)>,
    total_hits: u32,
    total_misses: u32,
    consecutive_misses: u32,
    strikes: u32,
    won: bool,
    lost: bool,
}

impl GameBoard<SmallRng> {
    /// Board with a random fleet drawn from a fresh, OS-seeded generator.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(config, SmallRng::from_rng(&mut seed_rng))
    }

    /// Board whose fleet layouts are reproducible from `seed`.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameBoard<R> {
    /// Validate `config` and lay out a random fleet using `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, BoardError> {
        config.validate()?;
        let fleet = FleetLayoutGenerator::from_config(&config).generate(&mut rng);
        Ok(Self::assemble(config, fleet, rng))
    }

    /// Build a board around an explicit fleet. Placements are re-checked
    /// against the configured board size and each other, and start unhit.
    /// `rng` is only used by later resets.
    pub fn with_fleet(
        config: GameConfig,
        fleet: Vec<ShipPlacement>,
        rng: R,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        if fleet.is_empty() {
            return Err(ConfigError::EmptyFleet.into());
        }
        let mut placed: Vec<ShipPlacement> = Vec::with_capacity(fleet.len());
        for ship in &fleet {
            let (row, col) = ship.origin();
            let fresh = ShipPlacement::new(
                ship.length(),
                row,
                col,
                ship.orientation(),
                config.board_size,
            )?;
            if placed.iter().any(|other| other.overlaps(&fresh)) {
                return Err(BoardError::ShipOverlaps);
            }
            placed.push(fresh);
        }
        Ok(Self::assemble(config, placed, rng))
    }

    fn assemble(config: GameConfig, fleet: Vec<ShipPlacement>, rng: R) -> Self {
        debug!(
            "new {}x{} board with {} ships",
            config.board_size,
            config.board_size,
            fleet.len()
        );
        Self {
            config,
            rng,
            fleet,
            fired: BTreeSet::new(),
            total_hits: 0,
            total_misses: 0,
            consecutive_misses: 0,
            strikes: 0,
            won: false,
            lost: false,
        }
    }

    /// Clear all shots, counters and flags and lay out a new fleet.
    pub fn reset(&mut self) {
        self.fleet = FleetLayoutGenerator::from_config(&self.config).generate(&mut self.rng);
        self.fired.clear();
        self.total_hits = 0;
        self.total_misses = 0;
        self.consecutive_misses = 0;
        self.strikes = 0;
        self.won = false;
        self.lost = false;
        info!("board reset with {} ships", self.fleet.len());
    }

    /// Fire at (`row`, `col`) and report the outcome.
    ///
    /// Shots off the board report `Miss` without touching any state, even
    /// once the game is over. Any other shot at a finished game fails with
    /// [`BoardError::GameOver`].
    pub fn fire(&mut self, row: i32, col: i32) -> Result<FireOutcome, BoardError> {
        let Some((r, c)) = self.locate(row, col) else {
            debug!("shot at ({}, {}) is off the board", row, col);
            return Ok(FireOutcome::Miss);
        };
        if self.is_over() {
            return Err(BoardError::GameOver(self.status()));
        }
        if !self.fired.insert((r, c)) {
            return Ok(FireOutcome::AlreadyFired);
        }
        let outcome = match self.ship_index_at(r, c) {
            Some(index) => self.register_hit(index, r, c),
            None => self.register_miss(),
        };
        debug!("shot at ({}, {}) -> {:?}", r, c, outcome);
        Ok(outcome)
    }

    fn register_hit(&mut self, index: usize, row: usize, col: usize) -> FireOutcome {
        let ship = &mut self.fleet[index];
        ship.record_hit(row, col);
        self.total_hits += 1;
        self.consecutive_misses = 0;
        if !ship.is_sunk() {
            return FireOutcome::Hit;
        }
        let length = ship.length();
        self.won = self.fleet.iter().all(ShipPlacement::is_sunk);
        if self.won {
            info!(
                "fleet destroyed after {} shots ({} hits, {} misses)",
                self.fired.len(),
                self.total_hits,
                self.total_misses
            );
        }
        FireOutcome::Sunk { index, length }
    }

    fn register_miss(&mut self) -> FireOutcome {
        self.total_misses += 1;
        self.consecutive_misses += 1;
        let Some(threshold) = self.config.miss_strike_threshold else {
            return FireOutcome::Miss;
        };
        if self.consecutive_misses < threshold {
            return FireOutcome::Miss;
        }
        self.consecutive_misses = 0;
        self.strikes += 1;
        match self.config.strike_limit {
            Some(limit) if self.strikes >= limit => {
                self.lost = true;
                info!(
                    "game lost on strike {} after {} shots",
                    self.strikes,
                    self.fired.len()
                );
                FireOutcome::GameLost
            }
            _ => FireOutcome::Strike {
                strikes: self.strikes,
            },
        }
    }
}

impl<R> GameBoard<R> {
    /// What [`GameBoard::fire`] would report for (`row`, `col`) right now,
    /// without mutating anything. Never reports `Sunk`, `Strike` or `GameLost`.
    pub fn peek(&self, row: i32, col: i32) -> FireOutcome {
        match self.locate(row, col) {
            None => FireOutcome::Miss,
            Some(cell) if self.fired.contains(&cell) => FireOutcome::AlreadyFired,
            Some((r, c)) if self.ship_index_at(r, c).is_some() => FireOutcome::Hit,
            Some(_) => FireOutcome::Miss,
        }
    }

    fn locate(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        let size = self.config.board_size;
        let r = usize::try_from(row).ok().filter(|&r| r < size)?;
        let c = usize::try_from(col).ok().filter(|&c| c < size)?;
        Some((r, c))
    }

    fn ship_index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.fleet.iter().position(|ship| ship.contains(row, col))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.lost {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn total_hits(&self) -> u32 {
        self.total_hits
    }

    pub fn total_misses(&self) -> u32 {
        self.total_misses
    }

    /// Misses since the last hit or the last strike.
    pub fn consecutive_misses(&self) -> u32 {
        self.consecutive_misses
    }

    pub fn strike_count(&self) -> u32 {
        self.strikes
    }

    /// Number of distinct on-board cells fired at.
    pub fn shots_fired(&self) -> usize {
        self.fired.len()
    }

    pub fn has_fired(&self, row: i32, col: i32) -> bool {
        self.locate(row, col)
            .is_some_and(|cell| self.fired.contains(&cell))
    }

    /// Ships actually on the board; may be fewer than configured.
    pub fn ship_count(&self) -> usize {
        self.fleet.len()
    }

    pub fn ships_sunk_count(&self) -> usize {
        self.fleet.iter().filter(|ship| ship.is_sunk()).count()
    }

    /// Detached copies of the fleet in layout order.
    pub fn fleet_snapshot(&self) -> Vec<ShipSnapshot> {
        self.fleet.iter().map(ShipPlacement::snapshot).collect()
    }

    /// Paint state of a cell, or `None` when it is off the board.
    pub fn cell_view(&self, row: i32, col: i32) -> Option<CellView> {
        let (r, c) = self.locate(row, col)?;
        if !self.fired.contains(&(r, c)) {
            return Some(CellView::Unfired);
        }
        let view = match self.ship_index_at(r, c) {
            Some(i) if self.fleet[i].is_sunk() => CellView::Sunk,
            Some(_) => CellView::Hit,
            None => CellView::Miss,
        };
        Some(view)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            shots: self.fired.len(),
            hits: self.total_hits,
            misses: self.total_misses,
            consecutive_misses: self.consecutive_misses,
            strikes: self.strikes,
            ships_sunk: self.ships_sunk_count(),
            ships: self.fleet.len(),
        }
    }
}

impl<R> fmt::Debug for GameBoard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameBoard")
            .field("config", &self.config)
            .field("status", &self.status())
            .field("stats", &self.stats())
            .field("fleet", &self.fleet)
            .finish_non_exhaustive()
    }
}
