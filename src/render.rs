#![cfg(feature = "std")]

//! Plain-text rendering of a board for terminal shells.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::string::String;

use crate::{CellView, GameBoard};

/// Column label: `A`..`Z`, then the 1-based column number for wider boards.
pub fn column_label(col: usize) -> String {
    if col < 26 {
        ((b'A' + col as u8) as char).to_string()
    } else {
        (col + 1).to_string()
    }
}

/// Human-readable name of a cell, e.g. `B7` for row 6, column 1.
pub fn coord_to_string(row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), row + 1)
}

/// Parse `B7` (column letter, 1-based row) or `6 1` (0-based row and
/// column) into a zero-based (row, col). Coordinates are not bounds checked
/// so off-board shots reach the engine.
pub fn parse_coord(input: &str) -> Option<(i32, i32)> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    if let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) {
        return Some((r.parse().ok()?, c.parse().ok()?));
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as i32;
    let row: i32 = chars.as_str().parse().ok()?;
    Some((row.checked_sub(1)?, col))
}

/// Draw the board. `.` unfired, `o` miss, `X` hit, `#` sunk; with `reveal`
/// unfired ship cells show as `S`.
pub fn render_board<R>(board: &GameBoard<R>, reveal: bool) -> String {
    let size = board.board_size();
    let ships: BTreeSet<(usize, usize)> = if reveal {
        board
            .fleet_snapshot()
            .iter()
            .flat_map(|ship| ship.cells())
            .collect()
    } else {
        BTreeSet::new()
    };

    let mut out = String::new();
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, " {}", column_label(c));
    }
    out.push('\n');
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..size {
            let ch = match board.cell_view(r as i32, c as i32) {
                Some(CellView::Miss) => 'o',
                Some(CellView::Hit) => 'X',
                Some(CellView::Sunk) => '#',
                _ if ships.contains(&(r, c)) => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// One-line summary of the counters, e.g. for a status bar.
pub fn status_line<R>(board: &GameBoard<R>) -> String {
    let stats = board.stats();
    let mut line = format!(
        "Hits: {}  Misses: {}  Sunk: {}/{}",
        stats.hits, stats.misses, stats.ships_sunk, stats.ships
    );
    if let Some(limit) = board.config().strike_limit {
        let _ = write!(line, "  Strikes: {}/{}", stats.strikes, limit);
    }
    if let Some(threshold) = board.config().miss_strike_threshold {
        let _ = write!(
            line,
            "  Miss streak: {}/{}",
            stats.consecutive_misses, threshold
        );
    }
    line
}
