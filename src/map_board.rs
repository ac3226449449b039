use rustc_hash::FxHashMap;

use crate::{
    board::{self, PieceStorage},
    coord::{Move, Position, Size},
    error::InvalidBoard,
    piece::Piece,
};

/// Sparse storage keyed by position; an absent key is an empty square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapBoard {
    size: Size,
    pieces: FxHashMap<Position, Piece>,
}
impl MapBoard {
    pub fn new(size: Size, pieces: impl IntoIterator<Item = Piece>) -> Result<Self, InvalidBoard> {
        board::validate_size(size)?;
        let mut map = FxHashMap::default();
        for piece in pieces {
            board::validate_piece(size, piece)?;
            if map.insert(piece.position, piece).is_some() {
                return Err(InvalidBoard::Occupied(piece.position));
            }
        }
        Ok(MapBoard { size, pieces: map })
    }
    pub fn len(&self) -> usize {
        self.pieces.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
impl PieceStorage for MapBoard {
    fn size(&self) -> Size {
        self.size
    }
    fn piece(&self, position: Position) -> Option<Piece> {
        self.pieces.get(&position).copied()
    }
    fn apply_move(&self, movement: Move) -> Self {
        let Some(piece) = self.pieces.get(&movement.start) else {
            return self.clone();
        };
        let mut pieces: FxHashMap<_, _> = self
            .pieces
            .iter()
            .filter(|(position, _)| **position != movement.start && **position != movement.finish)
            .map(|(position, piece)| (*position, *piece))
            .collect();
        pieces.insert(movement.finish, piece.apply_position(movement.finish));
        MapBoard {
            size: self.size,
            pieces,
        }
    }
}
