//! Piece appearance and generation settings
//!
//! Hosts build a [`PieceConfig`] once (usually by deserializing their own config file)
//! and pass it by reference to piece creation and rotation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Color, PieceKind, Rgb, PIECE_KINDS};

/// Errors raised when converting external settings into typed values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown random algorithm selector {0} (expected 0 = uniform or 1 = fair bag)")]
    UnknownRandomAlgorithm(u8),
    #[error("piece glyphs must be exactly two characters, got {0:?}")]
    InvalidGlyphs(String),
}

/// How the next piece kind is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RandomAlgorithm {
    /// Every kind equally likely on every draw
    Uniform,
    /// Deal shuffled bags of all seven kinds
    #[default]
    FairBag,
}

impl TryFrom<u8> for RandomAlgorithm {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RandomAlgorithm::Uniform),
            1 => Ok(RandomAlgorithm::FairBag),
            other => Err(ConfigError::UnknownRandomAlgorithm(other)),
        }
    }
}

impl From<RandomAlgorithm> for u8 {
    fn from(value: RandomAlgorithm) -> Self {
        match value {
            RandomAlgorithm::Uniform => 0,
            RandomAlgorithm::FairBag => 1,
        }
    }
}

/// The two characters a block is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Glyphs(pub [char; 2]);

impl Glyphs {
    pub const BLANK: Glyphs = Glyphs([' ', ' ']);
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::BLANK
    }
}

impl TryFrom<String> for Glyphs {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Ok(Glyphs([a, b])),
            _ => Err(ConfigError::InvalidGlyphs(value)),
        }
    }
}

impl From<Glyphs> for String {
    fn from(value: Glyphs) -> Self {
        value.0.iter().collect()
    }
}

/// Appearance table and flags consumed by piece creation and the randomizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceConfig {
    /// Per-kind colors, in `PieceKind::ALL` order
    pub colors: [Color; PIECE_KINDS],
    /// Color used when colors are disabled and for the dummy piece
    pub no_color: Color,
    /// Per-kind glyph pairs, in `PieceKind::ALL` order
    pub glyphs: [Glyphs; PIECE_KINDS],
    /// Paint each kind with its own color
    pub has_colors: bool,
    /// Repaint the pivot block with `pivot_color`
    pub show_pivot: bool,
    pub pivot_color: Color,
    pub random_algorithm: RandomAlgorithm,
}

impl PieceConfig {
    /// Color for a kind, honouring `has_colors`. `None` is the dummy piece.
    pub fn color_for(&self, kind: Option<PieceKind>) -> Color {
        match kind {
            Some(kind) if self.has_colors => self.colors[kind.index()],
            _ => self.no_color,
        }
    }

    /// Glyphs for a kind. The dummy piece keeps blank glyphs.
    pub fn glyphs_for(&self, kind: Option<PieceKind>) -> Glyphs {
        kind.map(|kind| self.glyphs[kind.index()]).unwrap_or_default()
    }
}

impl Default for PieceConfig {
    fn default() -> Self {
        let solid = |r, g, b| Color::solid(Rgb::new(r, g, b));
        Self {
            colors: [
                solid(0, 200, 220),  // I
                solid(230, 200, 0),  // O
                solid(160, 60, 200), // T
                solid(40, 190, 60),  // S
                solid(220, 40, 40),  // Z
                solid(40, 80, 220),  // J
                solid(240, 140, 20), // L
            ],
            no_color: Color::default(),
            glyphs: [Glyphs(['[', ']']); PIECE_KINDS],
            has_colors: true,
            show_pivot: false,
            pivot_color: Color::WHITE_HIGHLIGHT,
            random_algorithm: RandomAlgorithm::FairBag,
        }
    }
}
