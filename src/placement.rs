//! Random fleet layout.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::config::{GameConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipPlacement};

/// Produces non-overlapping random placements for a fleet.
///
/// Each ship gets up to [`MAX_PLACEMENT_ATTEMPTS`] random tries. A ship that
/// still cannot be fitted is left out, so a dense configuration may yield a
/// fleet with fewer ships than requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetLayoutGenerator {
    board_size: usize,
    lengths: Vec<usize>,
}

impl FleetLayoutGenerator {
    pub fn new(board_size: usize, lengths: &[usize]) -> Self {
        Self {
            board_size,
            lengths: lengths.to_vec(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, &config.fleet_lengths)
    }

    /// Lay out the fleet in the configured order of lengths.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ShipPlacement> {
        let mut fleet = Vec::with_capacity(self.lengths.len());
        let mut occupied = BTreeSet::new();
        for &length in &self.lengths {
            match self.random_placement(rng, length, &occupied) {
                Some(ship) => {
                    debug!("placed {:?}", ship);
                    occupied.extend(ship.cells());
                    fleet.push(ship);
                }
                None => warn!(
                    "no room for ship of length {} after {} attempts, leaving it out",
                    length, MAX_PLACEMENT_ATTEMPTS
                ),
            }
        }
        fleet
    }

    /// Returns a random in-bounds placement for `length` avoiding `occupied`.
    fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        occupied: &BTreeSet<(usize, usize)>,
    ) -> Option<ShipPlacement> {
        if length == 0 || length > self.board_size {
            return None;
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical {
                self.board_size - length
            } else {
                self.board_size - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                self.board_size - length
            } else {
                self.board_size - 1
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = ShipPlacement::new(length, r, c, orient, self.board_size).ok()?;
            if !ship.cells().any(|cell| occupied.contains(&cell)) {
                return Some(ship);
            }
        }
        None
    }
}

