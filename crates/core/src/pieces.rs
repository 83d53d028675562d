//! Pieces module - tetromino catalog and shape matrices
//!
//! Shapes are square bitmask matrices (side 2, 3 or 4). Rotation turns the whole
//! matrix, so a piece's cells move inside its bounding box the same way the
//! classic browser versions of the game do it.

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind, BOARD_WIDTH, MAX_SHAPE_SIZE};

/// Offset of a single occupied cell relative to the piece origin, as (dx, dy).
pub type CellOffset = (i8, i8);

/// Occupied offsets of a shape; at most `MAX_SHAPE_SIZE²` entries.
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square occupancy matrix, stored as a bitmask.
///
/// Bit `y * MAX_SHAPE_SIZE + x` is set when cell (x, y) is occupied. This is a
/// `Copy` value, so every piece owns its own matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    mask: u16,
}

impl ShapeMatrix {
    /// Build from literal rows (non-zero = occupied).
    ///
    /// ```
    /// use tui_blocks_core::ShapeMatrix;
    ///
    /// let t = ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
    /// assert_eq!(t.size(), 3);
    /// assert_eq!(t.count(), 4);
    /// assert!(t.is_filled(1, 0));
    /// ```
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE);
        let mut mask = 0u16;
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                if rows[y][x] != 0 {
                    mask |= 1 << (y * MAX_SHAPE_SIZE + x);
                }
                x += 1;
            }
            y += 1;
        }
        Self {
            size: N as u8,
            mask,
        }
    }

    /// Build from a raw mask. `size` is clamped to `1..=4` and bits outside the
    /// `size x size` square are dropped.
    pub fn from_mask(size: u8, mask: u16) -> Self {
        let size = size.clamp(1, MAX_SHAPE_SIZE as u8);
        let mut kept = 0u16;
        for y in 0..size as usize {
            for x in 0..size as usize {
                let bit = 1 << (y * MAX_SHAPE_SIZE + x);
                kept |= mask & bit;
            }
        }
        Self { size, mask: kept }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Bounding-box width (the matrix is square, so this is the side length).
    pub fn width(&self) -> i8 {
        self.size as i8
    }

    pub fn mask(&self) -> u16 {
        self.mask
    }

    #[inline(always)]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.mask & (1 << (y * MAX_SHAPE_SIZE + x)) != 0
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Occupied offsets in row-major order.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.size() {
            for x in 0..self.size() {
                if self.is_filled(x, y) {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// 90° clockwise rotation: transpose, then reverse every row.
    ///
    /// Four rotations give back the starting matrix.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size();
        let mut mask = 0u16;
        for y in 0..n {
            for x in 0..n {
                // Transposed cell (x, y) is the source (y, x); reversing the row
                // reads it from column n - 1 - x.
                if self.is_filled(y, n - 1 - x) {
                    mask |= 1 << (y * MAX_SHAPE_SIZE + x);
                }
            }
        }
        Self {
            size: self.size,
            mask,
        }
    }
}

/// Immutable catalog entry for one tetromino kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
}

static CATALOG: [Tetromino; 7] = [
    Tetromino {
        kind: PieceKind::I,
        shape: ShapeMatrix::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::from_hex(0x00f0f0),
    },
    Tetromino {
        kind: PieceKind::O,
        shape: ShapeMatrix::from_rows([[1, 1], [1, 1]]),
        color: Color::from_hex(0xf0f000),
    },
    Tetromino {
        kind: PieceKind::T,
        shape: ShapeMatrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::from_hex(0xa000f0),
    },
    Tetromino {
        kind: PieceKind::L,
        shape: ShapeMatrix::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: Color::from_hex(0xf0a000),
    },
    Tetromino {
        kind: PieceKind::J,
        shape: ShapeMatrix::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::from_hex(0x0000f0),
    },
    Tetromino {
        kind: PieceKind::S,
        shape: ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: Color::from_hex(0x00f000),
    },
    Tetromino {
        kind: PieceKind::Z,
        shape: ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: Color::from_hex(0xf00000),
    },
];

/// Catalog entry for a kind.
pub fn tetromino(kind: PieceKind) -> &'static Tetromino {
    let idx = match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::L => 3,
        PieceKind::J => 4,
        PieceKind::S => 5,
        PieceKind::Z => 6,
    };
    &CATALOG[idx]
}

/// Spawn origin for new pieces: horizontally centred, top row.
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8 - 1, 0);

/// The falling piece.
///
/// `shape` starts as a copy of the catalog matrix and is rotated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Fresh piece of `kind` at the spawn origin.
    pub fn spawn(kind: PieceKind) -> Self {
        let def = tetromino(kind);
        Self {
            kind,
            shape: def.shape,
            color: def.color,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Absolute board coordinates of the occupied cells.
    pub fn board_cells(&self) -> ArrayVec<(i16, i16), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        self.shape
            .cells()
            .iter()
            .map(|&(dx, dy)| (self.x as i16 + dx as i16, self.y as i16 + dy as i16))
            .collect()
    }
}
