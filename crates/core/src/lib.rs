//! Falling-piece core - pure, deterministic, and testable
//!
//! This crate holds the rules that govern the active piece of a block-stacking game:
//! spawning, SRS rotation with wall and floor kicks, translation, collision checks,
//! and the piece randomizer. It has no dependencies on UI, timing, or I/O:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Atomic**: Guarded moves either apply completely or not at all
//! - **Board-agnostic**: Pieces read the field only through [`Playfield`]
//!
//! # Module Structure
//!
//! - [`geometry`]: Shape masks, spawn offsets and SRS kick tables
//! - [`config`]: Colors, glyphs and flags passed to piece creation and rotation
//! - [`piece`]: The active piece, its blocks, and all moves
//! - [`board`]: The [`Playfield`] seam and a stock 10x20 [`Board`]
//! - [`rng`]: Fair-bag and uniform piece generation
//!
//! # Example
//!
//! ```
//! use stackfall_core::{Board, Piece, PieceConfig, PieceRandomizer, RandomAlgorithm};
//! use stackfall_core::types::Direction;
//!
//! let config = PieceConfig::default();
//! let board = Board::new();
//! let mut bag = PieceRandomizer::new(RandomAlgorithm::FairBag, 12345);
//!
//! let mut piece = Piece::new(bag.next_kind(), &config);
//! assert!(piece.is_valid_position(&board));
//!
//! piece.try_translate(&board, Direction::Left);
//! piece.try_rotate(&board, 1, &config);
//! piece.hard_drop(&board);
//!
//! // Resting on the floor
//! assert!(!piece.can_move(&board, Direction::Down));
//! ```

pub mod board;
pub mod config;
pub mod geometry;
pub mod piece;
pub mod rng;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Playfield};
pub use config::{ConfigError, Glyphs, PieceConfig, RandomAlgorithm};
pub use piece::{Block, Piece, PIECE_BLOCKS};
pub use rng::{PieceRandomizer, SimpleRng};
