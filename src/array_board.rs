use std::ops::Index;

use crate::{
    board::{self, Board, PieceStorage},
    coord::{Move, Position, Size},
    error::{InvalidBoard, MoveError},
    legality,
    piece::Piece,
};

/// Dense storage: one slot per square, indexed by
/// [`Size::position_index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayBoard {
    size: Size,
    cells: Box<[Option<Piece>]>,
}
impl ArrayBoard {
    pub fn new(size: Size, pieces: impl IntoIterator<Item = Piece>) -> Result<Self, InvalidBoard> {
        board::validate_size(size)?;
        let mut cells = vec![None; size.position_count()].into_boxed_slice();
        for piece in pieces {
            board::validate_piece(size, piece)?;
            let cell = &mut cells[size.position_index(piece.position)];
            if cell.is_some() {
                return Err(InvalidBoard::Occupied(piece.position));
            }
            *cell = Some(piece);
        }
        Ok(ArrayBoard { size, cells })
    }
}
impl PieceStorage for ArrayBoard {
    fn size(&self) -> Size {
        self.size
    }
    fn piece(&self, position: Position) -> Option<Piece> {
        if self.size.has_position(position) {
            self[position]
        } else {
            None
        }
    }
    fn apply_move(&self, movement: Move) -> Self {
        debug_assert!(self.size.has_move(movement), "{movement} leaves {}", self.size);
        let Some(piece) = self.piece(movement.start) else {
            return self.clone();
        };
        let mut cells = self.cells.clone();
        cells[self.size.position_index(movement.start)] = None;
        cells[self.size.position_index(movement.finish)] =
            Some(piece.apply_position(movement.finish));
        ArrayBoard {
            size: self.size,
            cells,
        }
    }
}
impl Board for ArrayBoard {
    // the slots are already in row-major order
    fn pieces(&self) -> Vec<Piece> {
        self.cells.iter().copied().flatten().collect()
    }
    fn check_move(&self, movement: Move) -> Result<(), MoveError> {
        legality::check_move(self, movement)
    }
}
impl Index<Position> for ArrayBoard {
    type Output = Option<Piece>;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[self.size.position_index(index)]
    }
}
