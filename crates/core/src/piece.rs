//! Piece module - the active falling piece and every move it can make
//!
//! A [`Piece`] owns its anchor, rotation and the four [`Block`]s it covers on the board.
//! Blocks are always rebuilt from the geometry tables when the piece is created or
//! rotated, and shifted together with the anchor when it moves.
//!
//! Guarded moves (`try_translate`, `try_rotate`) work on a copy and only replace the
//! piece when the copy lands on a valid position, so a failed move never leaves a
//! half-applied state behind.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::board::Playfield;
use crate::config::{Glyphs, PieceConfig};
use crate::geometry::{self, CLOCKWISE, COUNTER_CLOCKWISE, FAMILY_I, FAMILY_JLSTZ};
use crate::types::{Cell, Color, Direction, PieceKind, Rotation, BOARD_WIDTH};

/// Number of blocks in a tetromino
pub const PIECE_BLOCKS: usize = 4;

/// Largest anchor coordinate whose whole 4x4 box still fits in an `i8`
const ANCHOR_MAX: i16 = i8::MAX as i16 - (geometry::MASK_SIZE as i16 - 1);

/// One cell covered by a piece, in absolute board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: i8,
    pub y: i8,
    /// Occupancy tag written to the board when the piece locks
    pub cell: Cell,
    pub glyphs: Glyphs,
    pub color: Color,
}

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// `None` marks the dummy "no piece" sentinel
    kind: Option<PieceKind>,
    rotation: Rotation,
    /// Top-left corner of the 4x4 geometry box
    x: i8,
    y: i8,
    color: Color,
    glyphs: Glyphs,
    blocks: ArrayVec<Block, PIECE_BLOCKS>,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position
    pub fn new(kind: PieceKind, config: &PieceConfig) -> Self {
        Self::create(Some(kind), config)
    }

    /// Create the "no piece" sentinel. It has no blocks and is never drawn.
    pub fn dummy(config: &PieceConfig) -> Self {
        Self::create(None, config)
    }

    /// Create a piece from a raw table index; unknown indices give the dummy piece
    pub fn from_index(index: usize, config: &PieceConfig) -> Self {
        Self::create(PieceKind::from_index(index), config)
    }

    fn create(kind: Option<PieceKind>, config: &PieceConfig) -> Self {
        let mut piece = Self {
            kind,
            rotation: Rotation::North,
            x: 0,
            y: 0,
            color: config.color_for(kind),
            glyphs: config.glyphs_for(kind),
            blocks: ArrayVec::new(),
        };

        let Some(kind) = kind else {
            return piece;
        };

        let (dx, dy) = geometry::spawn_offset(kind, piece.rotation);
        piece.x = (BOARD_WIDTH / 2) as i8 + dx;
        piece.y = dy;
        piece.materialize(config);
        piece
    }

    /// Rebuild all blocks from the mask of the current kind and rotation
    fn materialize(&mut self, config: &PieceConfig) {
        self.blocks.clear();
        let Some(kind) = self.kind else {
            return;
        };

        for (col, row, pivot) in geometry::cells(kind, self.rotation) {
            let color = if pivot && config.show_pivot {
                config.pivot_color
            } else {
                self.color
            };
            self.blocks.push(Block {
                x: self.x + col,
                y: self.y + row,
                cell: Some(kind),
                glyphs: self.glyphs,
                color,
            });
        }
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.kind
    }

    /// True for the seven canonical shapes, false for the dummy piece
    pub fn is_valid(&self) -> bool {
        self.kind.is_some()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    /// Blocks in mask scan order (empty for the dummy piece)
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Turn by `delta` quarter turns (negative is counter-clockwise) without any checks
    pub fn rotate(&mut self, delta: i8, config: &PieceConfig) {
        self.rotation = self.rotation.rotated(delta);
        self.materialize(config);
    }

    /// Move one step without checking the field.
    ///
    /// Returns false, leaving the piece where it was, if the anchor would leave the range
    /// coordinates can represent.
    pub fn translate(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.shift(dx.into(), dy.into())
    }

    /// Move the anchor to (x, y), carrying the blocks along. Same range rule as `translate`.
    pub fn place_at(&mut self, x: i8, y: i8) -> bool {
        self.shift(
            i16::from(x) - i16::from(self.x),
            i16::from(y) - i16::from(self.y),
        )
    }

    fn shift(&mut self, dx: i16, dy: i16) -> bool {
        let anchor_range = i16::from(i8::MIN)..=ANCHOR_MAX;
        let x = i16::from(self.x) + dx;
        let y = i16::from(self.y) + dy;
        if !anchor_range.contains(&x) || !anchor_range.contains(&y) {
            return false;
        }

        // Every block sits at most MASK_SIZE - 1 past the anchor, so these stay in range
        for block in &mut self.blocks {
            block.x = (i16::from(block.x) + dx) as i8;
            block.y = (i16::from(block.y) + dy) as i8;
        }
        self.x = x as i8;
        self.y = y as i8;
        true
    }

    /// Check that every block is inside the field and on an empty cell.
    ///
    /// Blocks above the top row (y < 0) count as free, so pieces may spawn or
    /// rotate partly off the top of the field. Neither the piece nor the field is
    /// written: each [`Block::cell`] keeps its `Some(kind)` tag.
    pub fn is_valid_position<P: Playfield + ?Sized>(&self, field: &P) -> bool {
        let width = field.width() as i16;
        let height = field.height() as i16;

        self.blocks.iter().all(|block| {
            let (x, y) = (block.x as i16, block.y as i16);
            if x < 0 || x >= width || y >= height {
                return false;
            }
            if block.y < 0 {
                return true;
            }
            field.cell(block.x as u8, block.y as u8).is_none()
        })
    }

    /// Check whether one step in `direction` would land on a valid position
    pub fn can_move<P: Playfield + ?Sized>(&self, field: &P, direction: Direction) -> bool {
        let mut moved = self.clone();
        moved.translate(direction) && moved.is_valid_position(field)
    }

    /// Move one step if the destination is valid; returns whether the piece moved
    pub fn try_translate<P: Playfield + ?Sized>(
        &mut self,
        field: &P,
        direction: Direction,
    ) -> bool {
        let mut moved = self.clone();
        if !moved.translate(direction) || !moved.is_valid_position(field) {
            return false;
        }
        *self = moved;
        true
    }

    /// Drop straight down as far as possible; returns the number of rows fallen
    pub fn hard_drop<P: Playfield + ?Sized>(&mut self, field: &P) -> u32 {
        // Without blocks nothing ever collides
        if self.blocks.is_empty() {
            return 0;
        }

        let mut rows = 0;
        while self.try_translate(field, Direction::Down) {
            rows += 1;
        }
        rows
    }

    /// Where this piece would land if hard dropped now
    pub fn ghost<P: Playfield + ?Sized>(&self, field: &P) -> Piece {
        let mut ghost = self.clone();
        ghost.hard_drop(field);
        ghost
    }

    /// Try to rotate by `delta` quarter turns using SRS wall kicks.
    ///
    /// The plain rotation is tried first. If it collides, the five kick offsets for
    /// the piece family and direction are tried in order and the first one that fits
    /// is kept. Returns false, leaving the piece untouched, when nothing fits.
    pub fn try_rotate<P: Playfield + ?Sized>(
        &mut self,
        field: &P,
        delta: i8,
        config: &PieceConfig,
    ) -> bool {
        let mut rotated = self.clone();
        rotated.rotate(delta, config);
        if rotated.is_valid_position(field) {
            *self = rotated;
            return true;
        }

        // I rows follow the rotation it leaves, the other kinds the one they enter
        let (family, row) = match self.kind {
            Some(PieceKind::O) => return true,
            Some(PieceKind::I) => (FAMILY_I, self.rotation),
            _ => (FAMILY_JLSTZ, rotated.rotation),
        };
        let direction = if delta > 0 {
            CLOCKWISE
        } else {
            COUNTER_CLOCKWISE
        };

        for (attempt, &(dx, dy)) in geometry::kick_row(family, direction, row)
            .iter()
            .enumerate()
        {
            let mut kicked = rotated.clone();
            if kicked.shift(dx.into(), dy.into()) && kicked.is_valid_position(field) {
                trace!(
                    kind = ?self.kind,
                    from = self.rotation.as_str(),
                    to = kicked.rotation.as_str(),
                    dx,
                    dy,
                    attempt,
                    "rotation kicked"
                );
                *self = kicked;
                return true;
            }
        }

        trace!(
            kind = ?self.kind,
            from = self.rotation.as_str(),
            delta,
            "rotation blocked"
        );
        false
    }
}
