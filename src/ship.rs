//! Ship placements and per-segment hit tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Cells covered by a ship of `length` starting at `origin`, in segment order.
fn footprint(
    origin: (usize, usize),
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (row, col) = origin;
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (row, col + i),
        Orientation::Vertical => (row + i, col),
    })
}

/// A ship placed on the board, with one hit flag per occupied cell.
///
/// Segments run left to right for horizontal ships and top to bottom for
/// vertical ones; the hit flag at index `i` belongs to the `i`-th cell
/// yielded by [`ShipPlacement::cells`].
#[derive(Clone, PartialEq, Eq)]
pub struct ShipPlacement {
    length: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
    hits: Vec<bool>,
}

impl ShipPlacement {
    /// Place a ship of `length` at (`row`, `col`) on a `board_size`×`board_size` board.
    pub fn new(
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
        board_size: usize,
    ) -> Result<Self, BoardError> {
        // A zero-length ship has no footprint to place.
        if length == 0 || row >= board_size || col >= board_size {
            return Err(BoardError::ShipOutOfBounds);
        }
        let end = match orientation {
            Orientation::Horizontal => col + length,
            Orientation::Vertical => row + length,
        };
        if end > board_size {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self {
            length,
            row,
            col,
            orientation,
            hits: vec![false; length],
        })
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells in segment order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        footprint(self.origin(), self.orientation, self.length)
    }

    /// Position of (`row`, `col`) within the ship's segments, if it is occupied.
    pub fn segment_index(&self, row: usize, col: usize) -> Option<usize> {
        self.cells().position(|cell| cell == (row, col))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.segment_index(row, col).is_some()
    }

    /// Returns `true` if the two ships share at least one cell.
    pub fn overlaps(&self, other: &ShipPlacement) -> bool {
        self.cells().any(|(r, c)| other.contains(r, c))
    }

    /// Register a hit at (`row`, `col`).
    /// Returns `true` if the cell belongs to this ship.
    pub fn record_hit(&mut self, row: usize, col: usize) -> bool {
        match self.segment_index(row, col) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Whether the segment at (`row`, `col`) has been hit.
    pub fn is_hit_at(&self, row: usize, col: usize) -> bool {
        self.segment_index(row, col)
            .map(|i| self.hits[i])
            .unwrap_or(false)
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Read-only copy of the ship's public state.
    pub fn snapshot(&self) -> ShipSnapshot {
        ShipSnapshot {
            length: self.length,
            origin: self.origin(),
            orientation: self.orientation,
            sunk: self.is_sunk(),
            hits: self.hit_count(),
        }
    }
}

impl fmt::Debug for ShipPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: ({}, {}), orientation: {:?}, hits: {}, sunk: {} }}",
            self.length,
            self.row,
            self.col,
            self.orientation,
            self.hit_count(),
            self.is_sunk(),
        )
    }
}

/// Detached view of a ship, safe to hand to rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSnapshot {
    pub length: usize,
    pub origin: (usize, usize),
    pub orientation: Orientation,
    pub sunk: bool,
    pub hits: usize,
}

impl ShipSnapshot {
    /// Occupied cells in segment order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        footprint(self.origin, self.orientation, self.length)
    }
}
