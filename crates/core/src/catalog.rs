//! Piece catalog: the seven tetromino shape tables.
//!
//! Each kind carries an ordered list of 4x4 rotation matrices as static
//! data, indexed `shape[row][col]`. The same convention is used everywhere
//! a matrix is read (collision, merge, ghost projection). Matrices hold the
//! kind's color code in occupied cells, so a merged shape is its own paint.

use blockfall_types::{PieceKind, Shape};

/// Number of distinct rotation states for a kind.
///
/// O is rotation-symmetric, I/S/Z flip between two states, T/J/L have four.
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotations(kind).len() as u8
}

/// The matrix for `kind` at `rotation`, as a fresh copy.
///
/// Callers own the returned value outright; catalog data cannot be mutated
/// through it. `rotation` must be below [`rotation_count`].
pub fn shape(kind: PieceKind, rotation: u8) -> Shape {
    let table = rotations(kind);
    assert!(
        (rotation as usize) < table.len(),
        "rotation {} out of range for {:?}",
        rotation,
        kind
    );
    table[rotation as usize]
}

/// The spawn-orientation matrix, used for hold and next-piece previews.
pub fn preview_shape(kind: PieceKind) -> Shape {
    rotations(kind)[0]
}

fn rotations(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_ROTATIONS,
        PieceKind::O => &O_ROTATIONS,
        PieceKind::T => &T_ROTATIONS,
        PieceKind::S => &S_ROTATIONS,
        PieceKind::Z => &Z_ROTATIONS,
        PieceKind::J => &J_ROTATIONS,
        PieceKind::L => &L_ROTATIONS,
    }
}

const I_ROTATIONS: [Shape; 2] = [
    [
        [0, 0, 0, 0],
        [1, 1, 1, 1],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 0, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 1, 0],
    ],
];

// The square sits on rows 1-2 so a spawn at y = -1 leaves it fully visible.
const O_ROTATIONS: [Shape; 1] = [[
    [0, 0, 0, 0],
    [0, 2, 2, 0],
    [0, 2, 2, 0],
    [0, 0, 0, 0],
]];

const T_ROTATIONS: [Shape; 4] = [
    [
        [0, 0, 0, 0],
        [3, 3, 3, 0],
        [0, 3, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 3, 0, 0],
        [3, 3, 0, 0],
        [0, 3, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 3, 0, 0],
        [3, 3, 3, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 3, 0, 0],
        [0, 3, 3, 0],
        [0, 3, 0, 0],
        [0, 0, 0, 0],
    ],
];

const S_ROTATIONS: [Shape; 2] = [
    [
        [0, 0, 0, 0],
        [0, 4, 4, 0],
        [4, 4, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 4, 0, 0],
        [0, 4, 4, 0],
        [0, 0, 4, 0],
        [0, 0, 0, 0],
    ],
];

const Z_ROTATIONS: [Shape; 2] = [
    [
        [0, 0, 0, 0],
        [5, 5, 0, 0],
        [0, 5, 5, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 0, 5, 0],
        [0, 5, 5, 0],
        [0, 5, 0, 0],
        [0, 0, 0, 0],
    ],
];

const J_ROTATIONS: [Shape; 4] = [
    [
        [0, 0, 0, 0],
        [6, 6, 6, 0],
        [0, 0, 6, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 6, 0, 0],
        [0, 6, 0, 0],
        [6, 6, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [6, 0, 0, 0],
        [6, 6, 6, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 6, 6, 0],
        [0, 6, 0, 0],
        [0, 6, 0, 0],
        [0, 0, 0, 0],
    ],
];

const L_ROTATIONS: [Shape; 4] = [
    [
        [0, 0, 0, 0],
        [7, 7, 7, 0],
        [7, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [7, 7, 0, 0],
        [0, 7, 0, 0],
        [0, 7, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 0, 7, 0],
        [7, 7, 7, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ],
    [
        [0, 7, 0, 0],
        [0, 7, 0, 0],
        [0, 7, 7, 0],
        [0, 0, 0, 0],
    ],
];
