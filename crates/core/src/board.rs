//! Board module - manages the game grid
//!
//! The board is a 10x21 grid where each cell can be empty or filled with a
//! block color. Row 0 is the hidden sentinel row: pieces spawn into it, and a
//! locked cell left there means the stack has topped out. Rows 1..=20 are the
//! visible playfield. Uses a flat array for better cache locality and
//! zero-allocation. Coordinates: (x, y) where x ranges 0..=9 (left to right),
//! y ranges 0..=20 (top to bottom).

use crate::types::{BlockColor, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 21 rows using flat array storage
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

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board, sentinel row included
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
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

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove a row: everything between the sentinel and `y` shifts down one,
    /// and a fresh empty row appears directly below the sentinel.
    ///
    /// The sentinel row itself never shifts, so a cell locked there stays put
    /// no matter how many rows clear. Removing the sentinel row (only
    /// reachable when a driver keeps locking after game over) empties it in
    /// place.
    pub fn remove_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // Shift rows 1..y down by one; copy_within handles overlap
        for row in (2..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        // Blank the vacated row (row 1, or row 0 itself in the sentinel case)
        let blank = y.min(1);
        let start = blank * width;
        for cell in &mut self.cells[start..start + width] {
            *cell = None;
        }
    }

    /// Write a locked piece's cells onto the board
    ///
    /// Callers check collision and bounds before committing, so every cell is
    /// expected to land inside the grid; anything else is silently dropped by
    /// `set`.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], color: BlockColor) {
        for &(x, y) in cells {
            self.set(x, y, Some(color));
        }
    }

    /// Check if any sentinel-row cell is filled (top-out condition)
    pub fn is_sentinel_occupied(&self) -> bool {
        self.cells[..BOARD_WIDTH as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a caller-owned 2D grid without allocating
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }

}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
