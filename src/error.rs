use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::coord::{Move, Position, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidByte;

impl Display for InvalidByte {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid byte")?;
        Ok(())
    }
}
impl Error for InvalidByte {}

/// Reason a move was rejected.
///
/// Variants are listed in the order they are checked; when a move qualifies
/// for several of them, the first one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    NoMove,
    OutOfSize,
    NoPiece,
    FriendlyTarget,
    IllegalMove,
    /// The move is otherwise legal but captures the opposing king.
    KingCapture,
}
impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoMove => write!(f, "start and finish are the same square")?,
            MoveError::OutOfSize => write!(f, "move leaves the board")?,
            MoveError::NoPiece => write!(f, "no piece on the start square")?,
            MoveError::FriendlyTarget => write!(f, "finish square holds a piece of the same color")?,
            MoveError::IllegalMove => write!(f, "piece cannot move that way")?,
            MoveError::KingCapture => write!(f, "move captures a king")?,
        }
        Ok(())
    }
}
impl Error for MoveError {}

/// Move generation found a move that captures a king, meaning the position
/// being enumerated is already illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KingCapture {
    pub movement: Move,
}
impl Display for KingCapture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} captures a king", self.movement)?;
        Ok(())
    }
}
impl Error for KingCapture {}
impl From<KingCapture> for MoveError {
    fn from(_: KingCapture) -> Self {
        MoveError::KingCapture
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidBoard {
    InvalidSize(Size),
    OutOfSize(Position),
    Occupied(Position),
}
impl Display for InvalidBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidBoard::InvalidSize(size) => {
                write!(f, "board size {size} must have positive dimensions")?;
            }
            InvalidBoard::OutOfSize(position) => {
                write!(f, "piece on {position} lies outside the board")?;
            }
            InvalidBoard::Occupied(position) => {
                write!(f, "found more than one piece on {position}")?;
            }
        }
        Ok(())
    }
}
impl Error for InvalidBoard {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseStorageKindError(pub String);
impl Display for ParseStorageKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found `{}`, expected one of `array`, `map`, or `bits`",
            self.0
        )?;
        Ok(())
    }
}
impl Error for ParseStorageKindError {}
