//! The fixed tile-code alphabet.
//!
//! Boards are persisted as 64-character strings, one tile code per square.
//! This module owns the 13-entry mapping between a tile code and its
//! `(color, kind, glyph)` semantics. The table is a process-lifetime
//! constant and is never mutated.

/// One symbol of the persisted board alphabet (`'0'` empty, `'1'..'6'`
/// white, `'7'..'9','A'..'C'` black).
pub type TileCode = char;

/// Tile code for an empty square.
pub const EMPTY_TILE: TileCode = '0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Vertical direction this color's pawns advance in (row 0 is white's
    /// back rank).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

/// A decoded occupant of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

/// The full alphabet as `(code, occupant, glyph)` rows, in persisted-code
/// order. Kept alongside the `match`-based accessors below so callers that
/// need to enumerate the alphabet (renderers, validators) have one source.
pub const PIECE_TABLE: [(TileCode, Option<Piece>, char); 13] = [
    ('0', None, ' '),
    ('1', Some(Piece { color: PieceColor::White, kind: PieceKind::King }), '\u{2654}'),
    ('2', Some(Piece { color: PieceColor::White, kind: PieceKind::Queen }), '\u{2655}'),
    ('3', Some(Piece { color: PieceColor::White, kind: PieceKind::Bishop }), '\u{2657}'),
    ('4', Some(Piece { color: PieceColor::White, kind: PieceKind::Knight }), '\u{2658}'),
    ('5', Some(Piece { color: PieceColor::White, kind: PieceKind::Rook }), '\u{2656}'),
    ('6', Some(Piece { color: PieceColor::White, kind: PieceKind::Pawn }), '\u{2659}'),
    ('7', Some(Piece { color: PieceColor::Black, kind: PieceKind::King }), '\u{265A}'),
    ('8', Some(Piece { color: PieceColor::Black, kind: PieceKind::Queen }), '\u{265B}'),
    ('9', Some(Piece { color: PieceColor::Black, kind: PieceKind::Bishop }), '\u{265D}'),
    ('A', Some(Piece { color: PieceColor::Black, kind: PieceKind::Knight }), '\u{265E}'),
    ('B', Some(Piece { color: PieceColor::Black, kind: PieceKind::Rook }), '\u{265C}'),
    ('C', Some(Piece { color: PieceColor::Black, kind: PieceKind::Pawn }), '\u{265F}'),
];

/// Decode a tile code to its occupant. `None` for the empty code and for
/// any character outside the alphabet; boundary parsers that must
/// distinguish the two use [`is_tile_code`] first.
#[inline]
pub const fn decode_tile(code: TileCode) -> Option<Piece> {
    match code {
        '1' => Some(Piece { color: PieceColor::White, kind: PieceKind::King }),
        '2' => Some(Piece { color: PieceColor::White, kind: PieceKind::Queen }),
        '3' => Some(Piece { color: PieceColor::White, kind: PieceKind::Bishop }),
        '4' => Some(Piece { color: PieceColor::White, kind: PieceKind::Knight }),
        '5' => Some(Piece { color: PieceColor::White, kind: PieceKind::Rook }),
        '6' => Some(Piece { color: PieceColor::White, kind: PieceKind::Pawn }),
        '7' => Some(Piece { color: PieceColor::Black, kind: PieceKind::King }),
        '8' => Some(Piece { color: PieceColor::Black, kind: PieceKind::Queen }),
        '9' => Some(Piece { color: PieceColor::Black, kind: PieceKind::Bishop }),
        'A' => Some(Piece { color: PieceColor::Black, kind: PieceKind::Knight }),
        'B' => Some(Piece { color: PieceColor::Black, kind: PieceKind::Rook }),
        'C' => Some(Piece { color: PieceColor::Black, kind: PieceKind::Pawn }),
        _ => None,
    }
}

/// Encode an occupant back to its tile code.
#[inline]
pub const fn encode_tile(piece: Piece) -> TileCode {
    match (piece.color, piece.kind) {
        (PieceColor::White, PieceKind::King) => '1',
        (PieceColor::White, PieceKind::Queen) => '2',
        (PieceColor::White, PieceKind::Bishop) => '3',
        (PieceColor::White, PieceKind::Knight) => '4',
        (PieceColor::White, PieceKind::Rook) => '5',
        (PieceColor::White, PieceKind::Pawn) => '6',
        (PieceColor::Black, PieceKind::King) => '7',
        (PieceColor::Black, PieceKind::Queen) => '8',
        (PieceColor::Black, PieceKind::Bishop) => '9',
        (PieceColor::Black, PieceKind::Knight) => 'A',
        (PieceColor::Black, PieceKind::Rook) => 'B',
        (PieceColor::Black, PieceKind::Pawn) => 'C',
    }
}

/// Whether the character belongs to the 13-entry alphabet.
#[inline]
pub const fn is_tile_code(code: char) -> bool {
    matches!(code, '0'..='9' | 'A' | 'B' | 'C')
}

/// Unicode glyph for a tile code, a space for the empty square or any
/// foreign character.
pub fn tile_glyph(code: TileCode) -> char {
    PIECE_TABLE
        .iter()
        .find(|(entry, _, _)| *entry == code)
        .map(|&(_, _, glyph)| glyph)
        .unwrap_or(' ')
}
