use std::fmt::{self, Display, Formatter};

use crate::{
    board::PieceStorage,
    color::Color,
    coord::{Move, Position},
    error::InvalidByte,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}
impl PieceKind {
    // order of the per-kind bitsets in `BitBoard`
    pub const ALL: [Self; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    pub fn uppercase(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
    pub fn lowercase(self) -> char {
        self.uppercase().to_ascii_lowercase()
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "king")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Pawn => write!(f, "pawn")?,
        }
        Ok(())
    }
}
impl TryFrom<u8> for PieceKind {
    type Error = InvalidByte;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PieceKind::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(InvalidByte)
    }
}
impl From<PieceKind> for u8 {
    fn from(value: PieceKind) -> Self {
        value as u8
    }
}

/// A piece standing on a particular square.
///
/// Pieces never move in place; [`Piece::apply_position`] produces the piece
/// as it stands after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}
impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            color,
            position,
        }
    }
    pub fn apply_position(self, position: Position) -> Self {
        Piece { position, ..self }
    }
    /// Whether the shape of `movement` suits this kind of piece.
    ///
    /// Only the movement geometry and, for sliding pieces and pawns, the
    /// occupancy of the board are considered. Bounds, the piece standing on
    /// the start square, and the color of a captured piece are left to
    /// [`check_move`](crate::legality::check_move).
    pub fn check_move<S>(self, movement: Move, storage: &S) -> bool
    where
        S: PieceStorage + ?Sized,
    {
        match self.kind {
            PieceKind::King => king_move(movement),
            PieceKind::Queen => rook_move(movement, storage) || bishop_move(movement, storage),
            PieceKind::Rook => rook_move(movement, storage),
            PieceKind::Bishop => bishop_move(movement, storage),
            PieceKind::Knight => knight_move(movement),
            PieceKind::Pawn => pawn_move(self.color, movement, storage),
        }
    }
    pub fn fen(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
    pub fn figurine(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)?;
        Ok(())
    }
}

fn king_move(movement: Move) -> bool {
    movement.file_steps() <= 1 && movement.rank_steps() <= 1
}
fn knight_move(movement: Move) -> bool {
    matches!(
        (movement.file_steps(), movement.rank_steps()),
        (1, 2) | (2, 1)
    )
}
fn rook_move<S>(movement: Move, storage: &S) -> bool
where
    S: PieceStorage + ?Sized,
{
    let Move { start, finish } = movement;
    let vacant = |position: Position| storage.piece(position).is_none();
    match (movement.file_steps(), movement.rank_steps()) {
        (0, 0) => false,
        (0, _) => exclusive_range(start.rank, finish.rank)
            .all(|rank| vacant(Position::new(start.file, rank))),
        (_, 0) => exclusive_range(start.file, finish.file)
            .all(|file| vacant(Position::new(file, start.rank))),
        _ => false,
    }
}
// Diagonal movement is not part of this rule set: bishops never move and
// queens move as rooks.
fn bishop_move<S>(_movement: Move, _storage: &S) -> bool
where
    S: PieceStorage + ?Sized,
{
    false
}
fn pawn_move<S>(color: Color, movement: Move, storage: &S) -> bool
where
    S: PieceStorage + ?Sized,
{
    if movement.rank_delta() != color.forward() {
        return false;
    }
    if storage.piece(movement.finish).is_some() {
        movement.file_steps() == 1
    } else {
        movement.file_steps() == 0
    }
}
fn exclusive_range(a: i32, b: i32) -> std::ops::Range<i32> {
    (Ord::min(a, b) + 1)..Ord::max(a, b)
}
