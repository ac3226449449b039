#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::str::FromStr;

use chess_storage::{
    AnyBoard, Board, BoardDisplay, Color, Move, Piece, PieceKind, PieceStorage, Position, Size,
    StorageKind, moves_for_color,
};

pub const KINGS: &str = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";
pub const ROOKS: &str = "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1";
pub const PAWNS_AND_KNIGHT: &str = "4k3/8/8/3n4/8/8/PPP5/4K3 w - - 0 1";
pub const ROOK_ENDING: &str = "4k3/8/8/8/8/8/8/4K2R b - - 0 1";

fn kind(piece: chess::Piece) -> PieceKind {
    match piece {
        chess::Piece::Pawn => PieceKind::Pawn,
        chess::Piece::Knight => PieceKind::Knight,
        chess::Piece::Bishop => PieceKind::Bishop,
        chess::Piece::Rook => PieceKind::Rook,
        chess::Piece::Queen => PieceKind::Queen,
        chess::Piece::King => PieceKind::King,
    }
}
fn color(color: chess::Color) -> Color {
    match color {
        chess::Color::White => Color::White,
        chess::Color::Black => Color::Black,
    }
}
/// Decodes a FEN into the pieces of a standard board and the side to move.
pub fn decode(fen: &str) -> (Vec<Piece>, Color) {
    let board = chess::Board::from_str(fen).unwrap();
    let pieces = chess::ALL_SQUARES
        .iter()
        .filter_map(|square| {
            let position = Position::new(
                square.get_file().to_index().try_into().unwrap(),
                square.get_rank().to_index().try_into().unwrap(),
            );
            Some(Piece::new(
                kind(board.piece_on(*square)?),
                color(board.color_on(*square)?),
                position,
            ))
        })
        .collect();
    (pieces, color(board.side_to_move()))
}
/// The position built once with every storage engine.
pub fn boards(fen: &str) -> (Vec<AnyBoard>, Color) {
    let (pieces, color) = decode(fen);
    let boards = StorageKind::ALL
        .into_iter()
        .map(|kind| AnyBoard::new(kind, Size::STANDARD, pieces.iter().copied()).unwrap())
        .collect();
    (boards, color)
}
/// Asserts every engine holds the same position and generates the same
/// moves.
pub fn assert_same_position(boards: &[AnyBoard], color: Color) -> Option<Vec<Move>> {
    let (first, rest) = boards.split_first().unwrap();
    let pieces = first.pieces();
    let moves = moves_for_color(first, color);
    for board in rest {
        assert_eq!(
            board.pieces(),
            pieces,
            "{} disagrees with {} on\n{}",
            board.kind(),
            first.kind(),
            BoardDisplay::new(first)
        );
        for position in first.size().positions() {
            assert_eq!(board.piece(position), first.piece(position));
        }
        assert_eq!(
            moves_for_color(board, color),
            moves,
            "{} disagrees with {} on moves for {color}\n{}",
            board.kind(),
            first.kind(),
            BoardDisplay::new(first)
        );
    }
    moves.ok()
}
/// Walks the move tree of every engine in lock-step and returns the number
/// of positions compared.
pub fn compare_tree(boards: &[AnyBoard], color: Color, depth: u32) -> u64 {
    let Some(moves) = assert_same_position(boards, color) else {
        return 1;
    };
    if depth == 0 {
        return 1;
    }
    let mut compared = 1;
    for movement in moves {
        let next: Vec<_> = boards
            .iter()
            .map(|board| board.apply_move(movement))
            .collect();
        compared += compare_tree(&next, !color, depth - 1);
    }
    compared
}
/// Asserts every engine returns the same verdict for every move between
/// two squares, including squares just off the board.
pub fn assert_same_verdicts(boards: &[AnyBoard]) {
    let (first, rest) = boards.split_first().unwrap();
    let size = first.size();
    let squares: Vec<_> = (-1..=size.height)
        .flat_map(|rank| (-1..=size.width).map(move |file| Position::new(file, rank)))
        .collect();
    for start in &squares {
        for finish in &squares {
            let movement = Move::new(*start, *finish);
            let verdict = first.check_move(movement);
            for board in rest {
                assert_eq!(
                    board.check_move(movement),
                    verdict,
                    "{} disagrees with {} on {movement}\n{}",
                    board.kind(),
                    first.kind(),
                    BoardDisplay::new(first)
                );
            }
        }
    }
}
