use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;

use crate::{
    array_board::ArrayBoard,
    bit_board::BitBoard,
    board::{Board, Complete, PieceStorage},
    coord::{Move, Position, Size},
    error::{InvalidBoard, MoveError, ParseStorageKindError},
    map_board::MapBoard,
    piece::Piece,
};

/// Storage engine selected when a board is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageKind {
    #[default]
    Array,
    Map,
    Bits,
}
impl StorageKind {
    pub const ALL: [Self; 3] = [StorageKind::Array, StorageKind::Map, StorageKind::Bits];
}
impl Display for StorageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Array => write!(f, "array")?,
            StorageKind::Map => write!(f, "map")?,
            StorageKind::Bits => write!(f, "bits")?,
        }
        Ok(())
    }
}
impl FromStr for StorageKind {
    type Err = ParseStorageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "array" | "dense" => StorageKind::Array,
            "map" | "sparse" => StorageKind::Map,
            "bits" | "bitset" | "packed" => StorageKind::Bits,
            _ => return Err(ParseStorageKindError(s.to_owned())),
        };
        Ok(kind)
    }
}

/// A board backed by whichever engine was chosen at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyBoard {
    Array(ArrayBoard),
    Map(Complete<MapBoard>),
    Bits(Complete<BitBoard>),
}
impl AnyBoard {
    pub fn new(
        kind: StorageKind,
        size: Size,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<Self, InvalidBoard> {
        let board = match kind {
            StorageKind::Array => AnyBoard::Array(ArrayBoard::new(size, pieces)?),
            StorageKind::Map => AnyBoard::Map(Complete::new(MapBoard::new(size, pieces)?)),
            StorageKind::Bits => AnyBoard::Bits(Complete::new(BitBoard::new(size, pieces)?)),
        };
        debug!(
            "built {kind} board of size {size} with {} pieces",
            board.pieces().len()
        );
        Ok(board)
    }
    pub fn kind(&self) -> StorageKind {
        match self {
            AnyBoard::Array(_) => StorageKind::Array,
            AnyBoard::Map(_) => StorageKind::Map,
            AnyBoard::Bits(_) => StorageKind::Bits,
        }
    }
}
impl PieceStorage for AnyBoard {
    fn size(&self) -> Size {
        match self {
            AnyBoard::Array(board) => board.size(),
            AnyBoard::Map(board) => board.size(),
            AnyBoard::Bits(board) => board.size(),
        }
    }
    fn piece(&self, position: Position) -> Option<Piece> {
        match self {
            AnyBoard::Array(board) => board.piece(position),
            AnyBoard::Map(board) => board.piece(position),
            AnyBoard::Bits(board) => board.piece(position),
        }
    }
    fn apply_move(&self, movement: Move) -> Self {
        match self {
            AnyBoard::Array(board) => AnyBoard::Array(board.apply_move(movement)),
            AnyBoard::Map(board) => AnyBoard::Map(board.apply_move(movement)),
            AnyBoard::Bits(board) => AnyBoard::Bits(board.apply_move(movement)),
        }
    }
}
impl Board for AnyBoard {
    fn pieces(&self) -> Vec<Piece> {
        match self {
            AnyBoard::Array(board) => board.pieces(),
            AnyBoard::Map(board) => board.pieces(),
            AnyBoard::Bits(board) => board.pieces(),
        }
    }
    fn check_move(&self, movement: Move) -> Result<(), MoveError> {
        match self {
            AnyBoard::Array(board) => board.check_move(movement),
            AnyBoard::Map(board) => board.check_move(movement),
            AnyBoard::Bits(board) => board.check_move(movement),
        }
    }
}
