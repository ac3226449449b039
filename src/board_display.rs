use std::fmt::{self, Display, Formatter};

use crate::{
    board::PieceStorage,
    color::Color,
    coord::Position,
    piece::Piece,
};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

/// Renders a board as text, highest rank first.
///
/// Plain output uses FEN letters and `.` for empty squares; colored output
/// uses figurines on a checkered background.
pub struct BoardDisplay<'a, T: ?Sized> {
    pub board: &'a T,
    pub view: Color,
    pub highlighted: &'a [Position],
    pub colored: bool,
}
impl<'a, T> BoardDisplay<'a, T>
where
    T: PieceStorage + ?Sized,
{
    pub fn new(board: &'a T) -> Self {
        BoardDisplay {
            board,
            view: Color::White,
            highlighted: &[],
            colored: false,
        }
    }
}
fn file_label(file: i32) -> char {
    u8::try_from(file)
        .ok()
        .filter(|file| *file < 26)
        .map_or('?', |file| (b'a' + file) as char)
}
impl<T> Display for BoardDisplay<'_, T>
where
    T: PieceStorage + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        let ranks: Box<dyn Iterator<Item = i32>> = match self.view {
            Color::White => Box::new((0..size.height).rev()),
            Color::Black => Box::new(0..size.height),
        };
        let files = || -> Box<dyn Iterator<Item = i32>> {
            match self.view {
                Color::White => Box::new(0..size.width),
                Color::Black => Box::new((0..size.width).rev()),
            }
        };
        for rank in ranks {
            for file in files() {
                let position = Position::new(file, rank);
                let piece = self.board.piece(position);
                if self.colored {
                    let background = if self.highlighted.contains(&position) {
                        HIGHLIGHTED
                    } else if (file + rank) % 2 == 0 {
                        BLACK
                    } else {
                        WHITE
                    };
                    let figurine = piece.map_or(' ', Piece::figurine);
                    write!(f, "{background}{figurine} {RESET}")?;
                } else {
                    let letter = if self.highlighted.contains(&position) {
                        piece.map_or('*', Piece::fen)
                    } else {
                        piece.map_or('.', Piece::fen)
                    };
                    write!(f, "{letter} ")?;
                }
            }
            writeln!(f, "{}", rank + 1)?;
        }
        for file in files() {
            write!(f, "{} ", file_label(file))?;
        }
        writeln!(f)?;
        Ok(())
    }
}
