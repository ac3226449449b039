use crate::{
    color::Color,
    coord::{Move, Position, Size},
    error::{InvalidBoard, MoveError},
    legality,
    piece::Piece,
};

/// The minimal contract every storage engine supplies.
pub trait PieceStorage {
    fn size(&self) -> Size;
    /// The piece on `position`, or `None` for an empty or off-board square.
    fn piece(&self, position: Position) -> Option<Piece>;
    /// Returns the board after `movement`, leaving `self` untouched.
    ///
    /// The move is not checked; call [`Board::check_move`] first. Moving from
    /// an empty square returns an unchanged board.
    #[must_use]
    fn apply_move(&self, movement: Move) -> Self
    where
        Self: Sized;
}

/// The full board contract.
///
/// Engines that only implement [`PieceStorage`] get this through
/// [`Complete`].
pub trait Board: PieceStorage {
    /// Every piece on the board, rank by rank, files ascending.
    fn pieces(&self) -> Vec<Piece>;
    fn check_move(&self, movement: Move) -> Result<(), MoveError>;

    fn pieces_of(&self, color: Color) -> Vec<Piece> {
        let mut pieces = self.pieces();
        pieces.retain(|piece| piece.color == color);
        pieces
    }
}

/// Collects pieces by walking every square of the board in row-major order.
pub fn collect_pieces<S>(storage: &S) -> Vec<Piece>
where
    S: PieceStorage + ?Sized,
{
    storage
        .size()
        .positions()
        .filter_map(|position| storage.piece(position))
        .collect()
}

/// Derives [`Board`] for a storage engine that only implements
/// [`PieceStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complete<S>(S);

impl<S> Complete<S> {
    pub fn new(storage: S) -> Self {
        Complete(storage)
    }
    pub fn storage(&self) -> &S {
        &self.0
    }
    pub fn into_storage(self) -> S {
        self.0
    }
}
impl<S> PieceStorage for Complete<S>
where
    S: PieceStorage,
{
    fn size(&self) -> Size {
        self.0.size()
    }
    fn piece(&self, position: Position) -> Option<Piece> {
        self.0.piece(position)
    }
    fn apply_move(&self, movement: Move) -> Self {
        Complete(self.0.apply_move(movement))
    }
}
impl<S> Board for Complete<S>
where
    S: PieceStorage,
{
    fn pieces(&self) -> Vec<Piece> {
        collect_pieces(&self.0)
    }
    fn check_move(&self, movement: Move) -> Result<(), MoveError> {
        legality::check_move(&self.0, movement)
    }
}

/// Rejects sizes without any square.
pub(crate) fn validate_size(size: Size) -> Result<(), InvalidBoard> {
    if size.is_valid() {
        Ok(())
    } else {
        Err(InvalidBoard::InvalidSize(size))
    }
}
/// Rejects initial pieces placed outside the board.
pub(crate) fn validate_piece(size: Size, piece: Piece) -> Result<(), InvalidBoard> {
    if size.has_position(piece.position) {
        Ok(())
    } else {
        Err(InvalidBoard::OutOfSize(piece.position))
    }
}

#[cfg(test)]
mod test {
    use crate::{
        board::{Board, Complete, PieceStorage},
        color::Color,
        coord::{Move, Position, Size},
        error::MoveError,
        map_board::MapBoard,
        piece::{Piece, PieceKind},
    };

    #[test]
    fn derived_pieces_are_row_major() {
        let board = Complete::new(
            MapBoard::new(
                Size::new(3, 3),
                [
                    Piece::new(PieceKind::Rook, Color::White, Position::new(2, 2)),
                    Piece::new(PieceKind::King, Color::Black, Position::new(0, 1)),
                    Piece::new(PieceKind::Pawn, Color::White, Position::new(1, 0)),
                    Piece::new(PieceKind::Knight, Color::Black, Position::new(2, 1)),
                ],
            )
            .unwrap(),
        );
        let positions: Vec<_> = board.pieces().iter().map(|piece| piece.position).collect();
        assert_eq!(
            positions,
            [
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        let black: Vec<_> = board
            .pieces_of(Color::Black)
            .iter()
            .map(|piece| piece.kind)
            .collect();
        assert_eq!(black, [PieceKind::King, PieceKind::Knight]);
    }
    #[test]
    fn derived_check_move_uses_legality_rules() {
        let board = Complete::new(
            MapBoard::new(
                Size::new(4, 4),
                [Piece::new(PieceKind::Rook, Color::White, Position::new(0, 0))],
            )
            .unwrap(),
        );
        let up = Move::new(Position::new(0, 0), Position::new(0, 3));
        assert_eq!(board.check_move(up), Ok(()));
        assert_eq!(
            board.check_move(Move::new(Position::new(0, 0), Position::new(1, 1))),
            Err(MoveError::IllegalMove)
        );
        let moved = board.apply_move(up);
        assert_eq!(
            moved.piece(Position::new(0, 3)).map(|piece| piece.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(moved.storage().size(), Size::new(4, 4));
    }
}
