//! Geometry tables - tetromino masks, spawn offsets and SRS wall kick data
//!
//! Every shape lives in a 4x4 box whose top-left corner is the piece anchor.
//! Masks are authored row by row (`MASKS[kind][rotation][row][col]`) and read
//! column-major, so block order is stable across creation and rotation.
//! Reference: https://tetris.wiki/SRS

use crate::types::{PieceKind, Rotation, PIECE_KINDS};

/// Side of the square box every mask is authored in
pub const MASK_SIZE: usize = 4;

/// Mask value for an empty cell
pub const EMPTY: u8 = 0;

/// Mask value for a filled cell
pub const FILLED: u8 = 1;

/// Mask value for the filled cell a piece turns around
pub const PIVOT: u8 = 2;

/// 4x4 occupancy mask for one (kind, rotation)
pub type Mask = [[u8; MASK_SIZE]; MASK_SIZE];

/// Candidate offsets tried, in order, when a plain rotation collides
pub type KickRow = [(i8, i8); 5];

/// Kick table layout: `[family][direction][rotation][attempt]`
pub type KickTable = [[[KickRow; 4]; 2]; 2];

const O_MASK: Mask = [[0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];

/// Occupancy masks indexed by `[kind][rotation]`, kinds in `PieceKind::ALL` order.
#[rustfmt::skip]
pub static MASKS: [[Mask; 4]; PIECE_KINDS] = [
    // I: rotates about the centre of its box, so the pivot walks around the middle 2x2
    [
        [[0, 0, 0, 0], [1, 2, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
        [[0, 0, 1, 0], [0, 0, 2, 0], [0, 0, 1, 0], [0, 0, 1, 0]],
        [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 2, 1], [0, 0, 0, 0]],
        [[0, 1, 0, 0], [0, 1, 0, 0], [0, 2, 0, 0], [0, 1, 0, 0]],
    ],
    // O: no pivot cell
    [O_MASK, O_MASK, O_MASK, O_MASK],
    // T
    [
        [[0, 1, 0, 0], [1, 2, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        [[0, 1, 0, 0], [0, 2, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        [[0, 0, 0, 0], [1, 2, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        [[0, 1, 0, 0], [1, 2, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ],
    // S
    [
        [[0, 1, 1, 0], [1, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        [[0, 1, 0, 0], [0, 2, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
        [[0, 0, 0, 0], [0, 2, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
        [[1, 0, 0, 0], [1, 2, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ],
    // Z
    [
        [[1, 1, 0, 0], [0, 2, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        [[0, 0, 1, 0], [0, 2, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        [[0, 0, 0, 0], [1, 2, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
        [[0, 1, 0, 0], [1, 2, 0, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
    ],
    // J
    [
        [[1, 0, 0, 0], [1, 2, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        [[0, 1, 1, 0], [0, 2, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
        [[0, 0, 0, 0], [1, 2, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
        [[0, 1, 0, 0], [0, 2, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
    ],
    // L
    [
        [[0, 0, 1, 0], [1, 2, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        [[0, 1, 0, 0], [0, 2, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
        [[0, 0, 0, 0], [1, 2, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
        [[1, 1, 0, 0], [0, 2, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ],
];

/// Anchor offsets at spawn, indexed by `[kind][rotation]`.
///
/// x is relative to the middle column of the board, y is absolute.
/// With a 10-wide board, I and O take columns 3-6 and the 3-wide shapes take 3-5.
/// The I bar sits on row 1 of its box, so it is lifted one row to appear on row 0.
#[rustfmt::skip]
pub static SPAWN_OFFSETS: [[(i8, i8); 4]; PIECE_KINDS] = [
    [(-2, -1), (-2, -1), (-2, -1), (-2, -1)], // I
    [(-2, 0), (-2, 0), (-2, 0), (-2, 0)],     // O
    [(-2, 0), (-2, 0), (-2, 0), (-2, 0)],     // T
    [(-2, 0), (-2, 0), (-2, 0), (-2, 0)],     // S
    [(-2, 0), (-2, 0), (-2, 0), (-2, 0)],     // Z
    [(-2, 0), (-2, 0), (-2, 0), (-2, 0)],     // J
    [(-2, 0), (-2, 0), (-2, 0), (-2, 0)],     // L
];

/// Kick family shared by J, L, S, T and Z
pub const FAMILY_JLSTZ: usize = 0;

/// Kick family of the I bar
pub const FAMILY_I: usize = 1;

/// Direction index for clockwise turns
pub const CLOCKWISE: usize = 0;

/// Direction index for counter-clockwise turns
pub const COUNTER_CLOCKWISE: usize = 1;

/// SRS wall kicks, with y growing downward.
///
/// JLSTZ rows are indexed by the rotation the piece ends up in, I rows by the
/// rotation it starts from. The first attempt is always the unshifted rotation.
#[rustfmt::skip]
pub static SRS_KICKS: KickTable = [
    // JLSTZ, by target rotation
    [
        // clockwise
        [
            [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // W->N
            [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // N->E
            [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // E->S
            [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // S->W
        ],
        // counter-clockwise
        [
            [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // E->N
            [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // S->E
            [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // W->S
            [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // N->W
        ],
    ],
    // I, by source rotation
    [
        // clockwise
        [
            [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],   // N->E
            [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],   // E->S
            [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],   // S->W
            [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],   // W->N
        ],
        // counter-clockwise
        [
            [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],   // N->W
            [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],   // E->N
            [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],   // S->E
            [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],   // W->S
        ],
    ],
];

/// Get the occupancy mask for a piece kind and rotation
#[inline]
pub fn mask(kind: PieceKind, rotation: Rotation) -> &'static Mask {
    &MASKS[kind.index()][rotation.index()]
}

/// Get the spawn offset for a piece kind and rotation
#[inline]
pub fn spawn_offset(kind: PieceKind, rotation: Rotation) -> (i8, i8) {
    SPAWN_OFFSETS[kind.index()][rotation.index()]
}

/// Get a row of the kick table
#[inline]
pub fn kick_row(family: usize, direction: usize, rotation: Rotation) -> &'static KickRow {
    &SRS_KICKS[family][direction][rotation.index()]
}

/// Filled cells of a mask as `(col, row, is_pivot)`, column by column
pub fn cells(kind: PieceKind, rotation: Rotation) -> impl Iterator<Item = (i8, i8, bool)> {
    let mask = mask(kind, rotation);
    (0..MASK_SIZE).flat_map(move |col| {
        (0..MASK_SIZE).filter_map(move |row| match mask[row][col] {
            EMPTY => None,
            value => Some((col as i8, row as i8, value == PIVOT)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn test_every_mask_has_four_cells() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let filled = cells(kind, rotation).count();
                assert_eq!(filled, 4, "{:?} {:?} should have 4 minos", kind, rotation);

                let pivots = cells(kind, rotation).filter(|c| c.2).count();
                assert!(pivots <= 1, "{:?} {:?} has {} pivots", kind, rotation, pivots);
            }
        }
    }

    #[test]
    fn test_mask_values_in_range() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                for row in mask(kind, rotation) {
                    for &value in row {
                        assert!(value == EMPTY || value == FILLED || value == PIVOT);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pivot_present_except_o() {
        for kind in PieceKind::ALL {
            let expected = if kind == PieceKind::O { 0 } else { 1 };
            for rotation in ROTATIONS {
                let pivots = cells(kind, rotation).filter(|c| c.2).count();
                assert_eq!(pivots, expected, "{:?} {:?}", kind, rotation);
            }
        }
    }

    #[test]
    fn test_cells_column_major() {
        // T north: (1,0) (0,1) (1,1) (2,1) read column by column
        let order: Vec<(i8, i8)> = cells(PieceKind::T, Rotation::North)
            .map(|(c, r, _)| (c, r))
            .collect();
        assert_eq!(order, vec![(0, 1), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_o_mask_identical_in_all_rotations() {
        for rotation in ROTATIONS {
            assert_eq!(mask(PieceKind::O, rotation), &O_MASK);
        }
    }

    #[test]
    fn test_kick_rows_start_unshifted() {
        for family in SRS_KICKS.iter() {
            for direction in family.iter() {
                for row in direction.iter() {
                    assert_eq!(row[0], (0, 0));
                }
            }
        }
    }

    #[test]
    fn test_jlstz_kicks_mirror_between_directions() {
        // The cw kick into a state negates x of the ccw kick out of the mirrored state:
        // N->E (cw, target E) and N->W (ccw, target W) are horizontal mirrors.
        let cw = kick_row(FAMILY_JLSTZ, CLOCKWISE, Rotation::East);
        let ccw = kick_row(FAMILY_JLSTZ, COUNTER_CLOCKWISE, Rotation::West);
        for (a, b) in cw.iter().zip(ccw.iter()) {
            assert_eq!((a.0, a.1), (-b.0, b.1));
        }
    }

    #[test]
    fn test_i_kicks_reverse_of_each_other() {
        // I: N->E (cw from N) is the negation of E->N (ccw from E)
        let forward = kick_row(FAMILY_I, CLOCKWISE, Rotation::North);
        let back = kick_row(FAMILY_I, COUNTER_CLOCKWISE, Rotation::East);
        for (a, b) in forward.iter().zip(back.iter()) {
            assert_eq!((a.0, a.1), (-b.0, -b.1));
        }
    }
}
