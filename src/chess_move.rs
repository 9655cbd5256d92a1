//! A candidate move as the shell proposes it: four board coordinates.
//!
//! The engine does not implement pawn promotion, so the move carries no
//! promotion field; the persisted move record keeps a `promote_to` column
//! for schema compatibility (see `move_ledger`).

/// `(from_row, from_col, to_row, to_col)`, legal domain `[0,8)` each.
/// Out-of-range values are rejected by the general legality gate rather
/// than causing a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl Move {
    pub const fn new(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Move { from_row, from_col, to_row, to_col }
    }

    /// Displacement as `(d_row, d_col)`.
    #[inline]
    pub const fn vector(&self) -> (i8, i8) {
        (
            self.to_row as i8 - self.from_row as i8,
            self.to_col as i8 - self.from_col as i8,
        )
    }

    /// The four castling moves: a two-square king move along the back rank
    /// (the king starts on column 3 in this board layout).
    #[inline]
    pub fn is_castling_shape(&self) -> bool {
        matches!(
            (self.from_row, self.from_col, self.to_row, self.to_col),
            (0, 3, 0, 1) | (0, 3, 0, 5) | (7, 3, 7, 1) | (7, 3, 7, 5)
        )
    }
}
