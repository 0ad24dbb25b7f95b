//! Board module - the occupancy seam pieces are checked against
//!
//! Piece logic only ever reads the field through [`Playfield`]. [`Board`] is the stock
//! 10x20 implementation: a flat array for better cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of a playing field
pub trait Playfield {
    /// Number of columns
    fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Number of rows
    fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Occupancy of a cell. Only called with `x < width()` and `y < height()`.
    fn cell(&self, x: u8, y: u8) -> Cell;
}

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

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

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
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

    /// Fill a whole row, leaving the listed columns open
    pub fn fill_row(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Write a piece's blocks into the grid.
    ///
    /// Returns false, leaving the board untouched, if any block is off the board or
    /// lands on a filled cell.
    pub fn lock_piece(&mut self, piece: &Piece) -> bool {
        let fits = piece
            .blocks()
            .iter()
            .all(|block| matches!(self.get(block.x, block.y), Some(None)));
        if !fits {
            return false;
        }

        for block in piece.blocks() {
            self.set(block.x, block.y, block.cell);
        }
        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Playfield for Board {
    #[inline]
    fn cell(&self, x: u8, y: u8) -> Cell {
        self.cells[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)]
    }
}
