use std::{
    fmt::{self, Display, Formatter},
    iter::FusedIterator,
};

/// A square on the board, zero-based.
///
/// A `Position` carries no bounds of its own; whether it lies on the board is
/// decided by a [`Size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub file: i32,
    pub rank: i32,
}
impl Position {
    pub const fn new(file: i32, rank: i32) -> Self {
        Position { file, rank }
    }
}
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.file) {
            Ok(file @ 0..26) if self.rank >= 0 => {
                write!(f, "{}{}", (b'a' + file) as char, self.rank + 1)?;
            }
            _ => write!(f, "({}, {})", self.file, self.rank)?,
        }
        Ok(())
    }
}
impl From<(i32, i32)> for Position {
    fn from((file, rank): (i32, i32)) -> Self {
        Position::new(file, rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Position,
    pub finish: Position,
}
impl Move {
    pub const fn new(start: Position, finish: Position) -> Self {
        Move { start, finish }
    }
    /// An empty move leaves the piece where it is and is never legal.
    pub fn is_empty(self) -> bool {
        self.start == self.finish
    }
    pub fn file_steps(self) -> i32 {
        (self.finish.file - self.start.file).abs()
    }
    pub fn rank_steps(self) -> i32 {
        (self.finish.rank - self.start.rank).abs()
    }
    pub fn rank_delta(self) -> i32 {
        self.finish.rank - self.start.rank
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.finish)?;
        Ok(())
    }
}

/// Dimensions of a board. Defines the coordinate space every `Position`
/// is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}
impl Size {
    pub const STANDARD: Self = Size::new(8, 8);

    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
    pub fn has_position(self, position: Position) -> bool {
        (0..self.width).contains(&position.file) && (0..self.height).contains(&position.rank)
    }
    pub fn has_move(self, movement: Move) -> bool {
        self.has_position(movement.start) && self.has_position(movement.finish)
    }
    /// Row-major index of an in-bounds position.
    #[allow(
        clippy::cast_sign_loss,
        reason = "callers only pass positions inside the board"
    )]
    pub fn position_index(self, position: Position) -> usize {
        debug_assert!(self.has_position(position), "{position} is outside {self}");
        self.width as usize * position.rank as usize + position.file as usize
    }
    /// Inverse of [`Size::position_index`].
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        reason = "indices below `position_count` fit the board dimensions"
    )]
    pub fn position_at(self, index: usize) -> Position {
        debug_assert!(index < self.position_count());
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }
    #[allow(
        clippy::cast_sign_loss,
        reason = "invalid sizes are rejected before any board is built"
    )]
    pub fn position_count(self) -> usize {
        if self.is_valid() {
            self.width as usize * self.height as usize
        } else {
            0
        }
    }
    /// Every position of the board, rank by rank, files ascending.
    pub fn positions(self) -> Positions {
        Positions {
            size: self,
            front: 0,
            back: self.position_count(),
        }
    }
    /// Visits positions in the order of [`Size::positions`], stopping at the
    /// first error the visitor returns.
    pub fn try_for_each_position<E>(
        self,
        visitor: impl FnMut(Position) -> Result<(), E>,
    ) -> Result<(), E> {
        self.positions().try_for_each(visitor)
    }
}
impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Positions {
    size: Size,
    front: usize,
    back: usize,
}
impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let position = self.size.position_at(self.front);
            self.front += 1;
            Some(position)
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}
impl DoubleEndedIterator for Positions {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.size.position_at(self.back))
        } else {
            None
        }
    }
}
impl ExactSizeIterator for Positions {}
impl FusedIterator for Positions {}

#[cfg(test)]
mod test {
    use crate::coord::{Move, Position, Size};

    #[test]
    fn bounds() {
        let size = Size::new(5, 3);
        assert!(size.has_position(Position::new(0, 0)));
        assert!(size.has_position(Position::new(4, 2)));
        assert!(!size.has_position(Position::new(5, 0)));
        assert!(!size.has_position(Position::new(0, 3)));
        assert!(!size.has_position(Position::new(-1, 1)));
        assert!(!size.has_move(Move::new(Position::new(1, 1), Position::new(1, 3))));
        assert!(size.has_move(Move::new(Position::new(1, 1), Position::new(4, 0))));
    }
    #[test]
    fn index_is_a_bijection() {
        let size = Size::new(7, 4);
        assert_eq!(size.position_count(), 28);
        for (index, position) in size.positions().enumerate() {
            assert_eq!(size.position_index(position), index);
            assert_eq!(size.position_at(index), position);
        }
        assert_eq!(size.position_index(Position::new(3, 2)), 17);
    }
    #[test]
    fn positions_are_row_major() {
        let positions: Vec<_> = Size::new(2, 2).positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
        let last = Size::new(2, 2).positions().next_back();
        assert_eq!(last, Some(Position::new(1, 1)));
        assert_eq!(Size::new(3, 5).positions().len(), 15);
    }
    #[test]
    fn visitor_stops_at_first_error() {
        let mut visited = 0;
        let result = Size::STANDARD.try_for_each_position(|position| {
            visited += 1;
            if position == Position::new(2, 1) {
                Err(position)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(Position::new(2, 1)));
        assert_eq!(visited, 11);
    }
    #[test]
    fn invalid_size_has_no_positions() {
        assert!(!Size::new(0, 8).is_valid());
        assert_eq!(Size::new(-2, 3).positions().count(), 0);
    }
    #[test]
    fn empty_move() {
        let position = Position::new(3, 3);
        assert!(Move::new(position, position).is_empty());
        let movement = Move::new(position, Position::new(1, 6));
        assert!(!movement.is_empty());
        assert_eq!(movement.file_steps(), 2);
        assert_eq!(movement.rank_steps(), 3);
        assert_eq!(movement.rank_delta(), 3);
    }
    #[test]
    fn display() {
        assert_eq!(Position::new(4, 3).to_string(), "e4");
        assert_eq!(Position::new(-1, 3).to_string(), "(-1, 3)");
        assert_eq!(
            Move::new(Position::new(4, 1), Position::new(4, 2)).to_string(),
            "e2e3"
        );
        assert_eq!(Size::STANDARD.to_string(), "8x8");
    }
}
