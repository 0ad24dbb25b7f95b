//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the falling-piece core.
//! All types are plain data with no behavior beyond small conversions, so they can be
//! shared between the core logic and whatever renders or drives it.
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, growing downward)
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{Direction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, parsed);
//!
//! // Rotation deltas wrap around in both directions
//! assert_eq!(Rotation::North.rotated(1), Rotation::East);
//! assert_eq!(Rotation::North.rotated(-1), Rotation::West);
//! assert_eq!(Rotation::North.rotated(6), Rotation::South);
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of canonical piece kinds
pub const PIECE_KINDS: usize = 7;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in table order.
    pub const ALL: [PieceKind; PIECE_KINDS] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position of this kind in per-kind lookup tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`PieceKind::index`]. Anything past the last kind is not a piece.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Rotation states (North = spawn orientation), stored as quarter turns clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        self.rotated(1)
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        self.rotated(-1)
    }

    /// Apply `delta` quarter turns (positive is clockwise), wrapping modulo 4
    pub fn rotated(self, delta: i8) -> Self {
        let turns = (self.index() as i16 + delta as i16).rem_euclid(4);
        Self::from_index(turns as usize)
    }

    /// Quarter turns from North, in `0..4`
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Build from a quarter-turn count (taken modulo 4)
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Lowercase name, as used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Unit moves a piece can make on the board.
///
/// `Up` is never produced by gameplay input; it exists so a `Down` step can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    /// (dx, dy) of a single step; y grows downward
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }

    /// The step that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }
}

/// Cell occupancy tag (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How a block is painted: foreground, background and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Color {
    pub const fn new(fg: Rgb, bg: Rgb, bold: bool) -> Self {
        Self { fg, bg, bold }
    }

    /// Solid block: same foreground and background
    pub const fn solid(rgb: Rgb) -> Self {
        Self::new(rgb, rgb, false)
    }

    /// Bold white on white, used to mark a piece's pivot block
    pub const WHITE_HIGHLIGHT: Color = Color::new(
        Rgb::new(255, 255, 255),
        Rgb::new(255, 255, 255),
        true,
    );
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0), false)
    }
}
