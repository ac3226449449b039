use std::fmt::{self, Debug, Formatter};

use crate::{
    bitset::BitSet,
    board::{self, PieceStorage},
    color::Color,
    coord::{Move, Position, Size},
    error::InvalidBoard,
    piece::{Piece, PieceKind},
};

/// Rebuilds a piece from the (kind, color) bitset a square was found in.
pub type PieceFactory = fn(PieceKind, Color, Position) -> Piece;

/// Packed storage: one bitset per (color, kind) pair, with a bit per square
/// at [`Size::position_index`].
///
/// Bitsets store no piece values, so lookups go through a [`PieceFactory`].
/// A lookup scans all twelve bitsets in a fixed order.
#[derive(Clone)]
pub struct BitBoard {
    size: Size,
    sets: Box<[BitSet]>,
    factory: PieceFactory,
}
fn slot(color: Color, kind: PieceKind) -> usize {
    usize::from(u8::from(color)) * PieceKind::ALL.len() + usize::from(u8::from(kind))
}
fn slots() -> impl Iterator<Item = (Color, PieceKind)> {
    Color::ALL
        .into_iter()
        .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| (color, kind)))
}
impl BitBoard {
    pub fn new(size: Size, pieces: impl IntoIterator<Item = Piece>) -> Result<Self, InvalidBoard> {
        BitBoard::with_factory(size, pieces, Piece::new)
    }
    pub fn with_factory(
        size: Size,
        pieces: impl IntoIterator<Item = Piece>,
        factory: PieceFactory,
    ) -> Result<Self, InvalidBoard> {
        board::validate_size(size)?;
        let mut board = BitBoard {
            size,
            sets: vec![BitSet::new(size.position_count()); Color::ALL.len() * PieceKind::ALL.len()]
                .into_boxed_slice(),
            factory,
        };
        for piece in pieces {
            board::validate_piece(size, piece)?;
            let index = size.position_index(piece.position);
            if board.owner(index).is_some() {
                return Err(InvalidBoard::Occupied(piece.position));
            }
            board.sets[slot(piece.color, piece.kind)].insert(index);
        }
        Ok(board)
    }
    /// Squares holding a piece of the given color and kind.
    pub fn bitset(&self, color: Color, kind: PieceKind) -> &BitSet {
        &self.sets[slot(color, kind)]
    }
    fn owner(&self, index: usize) -> Option<(Color, PieceKind)> {
        slots().find(|(color, kind)| self.sets[slot(*color, *kind)].contains(index))
    }
}
impl PieceStorage for BitBoard {
    fn size(&self) -> Size {
        self.size
    }
    fn piece(&self, position: Position) -> Option<Piece> {
        if !self.size.has_position(position) {
            return None;
        }
        let (color, kind) = self.owner(self.size.position_index(position))?;
        Some((self.factory)(kind, color, position))
    }
    fn apply_move(&self, movement: Move) -> Self {
        debug_assert!(self.size.has_move(movement), "{movement} leaves {}", self.size);
        let start = self.size.position_index(movement.start);
        let finish = self.size.position_index(movement.finish);
        let Some((color, kind)) = self.owner(start) else {
            return self.clone();
        };
        let mut sets = self.sets.clone();
        sets[slot(color, kind)].remove(start);
        for set in sets.iter_mut() {
            set.remove(finish);
        }
        sets[slot(color, kind)].insert(finish);
        BitBoard {
            size: self.size,
            sets,
            factory: self.factory,
        }
    }
}
impl PartialEq for BitBoard {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.sets == other.sets
    }
}
impl Eq for BitBoard {}
impl Debug for BitBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (color, kind) in slots() {
            let set = self.bitset(color, kind);
            if !set.is_empty() {
                map.entry(&format_args!("{color} {kind}"), set);
            }
        }
        map.finish()
    }
}
