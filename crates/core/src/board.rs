//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a
//! locked block. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Collision treats rows above the top edge as open space so pieces can spawn
//! and rotate partially off-board.

use arrayvec::ArrayVec;

use crate::pieces::ShapeMatrix;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;

/// Number of board rows, usable as a const generic.
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// Row-major 2D copy of the board.
pub type BoardRows = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from a 2D grid.
    pub fn from_rows(rows: &BoardRows) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i16 || y < 0 || y >= BOARD_HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x as i16, y as i16).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x as i16, y as i16) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Fill every cell of row `y` with `color`.
    pub fn fill_row(&mut self, y: usize, color: Color) {
        if y < ROWS {
            self.cells[y * WIDTH..(y + 1) * WIDTH].fill(Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        self.cells[y * WIDTH..(y + 1) * WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Whether `shape` placed with its top-left corner at (x, y) collides.
    ///
    /// A cell collides when it lies left or right of the board, below the
    /// bottom row, or on an occupied cell. Cells in rows above the top never
    /// collide.
    pub fn collides(&self, shape: &ShapeMatrix, x: i8, y: i8) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let bx = x as i16 + dx as i16;
            let by = y as i16 + dy as i16;
            if bx < 0 || bx >= BOARD_WIDTH as i16 || by >= BOARD_HEIGHT as i16 {
                return true;
            }
            match Self::index(bx, by) {
                Some(idx) => self.cells[idx].is_some(),
                None => false,
            }
        })
    }

    /// Write `color` into every board cell covered by `shape` at (x, y).
    ///
    /// Does not check for collisions; cells outside the board are dropped.
    pub fn merge(&mut self, shape: &ShapeMatrix, x: i8, y: i8, color: Color) {
        for &(dx, dy) in shape.cells().iter() {
            if let Some(idx) = Self::index(x as i16 + dx as i16, y as i16 + dy as i16) {
                self.cells[idx] = Some(color);
            }
        }
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Rows above a cleared row shift down and empty rows appear at the top.
    /// A single pass handles any number of full rows, adjacent or not.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = ROWS;

        for read_y in (0..ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
                }
            }
        }

        // Rows freed at the top.
        self.cells[..write_y * WIDTH].fill(None);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// 2D copy of the board for snapshots.
    pub fn rows(&self) -> BoardRows {
        let mut out = [[None; WIDTH]; ROWS];
        self.write_rows(&mut out);
        out
    }

    /// Copy the board into an existing 2D grid.
    pub fn write_rows(&self, out: &mut BoardRows) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * WIDTH..(y + 1) * WIDTH]);
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
