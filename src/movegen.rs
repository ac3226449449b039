use log::{debug, trace};

use crate::{
    board::Board,
    color::Color,
    coord::{Move, Position},
    error::{KingCapture, MoveError},
};

/// Legal moves of the piece on `start`, finish squares in row-major order.
///
/// If any move would capture a king, enumeration stops and no moves are
/// returned for the square.
pub fn moves_for_position<B>(board: &B, start: Position) -> Result<Vec<Move>, KingCapture>
where
    B: Board + ?Sized,
{
    let mut moves = Vec::new();
    board.size().try_for_each_position(|finish| {
        let movement = Move::new(start, finish);
        match board.check_move(movement) {
            Ok(()) => moves.push(movement),
            Err(MoveError::KingCapture) => {
                trace!("{movement} captures a king");
                return Err(KingCapture { movement });
            }
            Err(_) => (),
        }
        Ok(())
    })?;
    Ok(moves)
}
/// Legal moves of every piece of `color`, in board enumeration order.
pub fn moves_for_color<B>(board: &B, color: Color) -> Result<Vec<Move>, KingCapture>
where
    B: Board + ?Sized,
{
    let mut moves = Vec::new();
    for piece in board.pieces_of(color) {
        moves.extend(moves_for_position(board, piece.position)?);
    }
    Ok(moves)
}
/// Counts the positions reachable in exactly `depth` moves with `color` to
/// move first.
///
/// A position where the side to move can capture a king counts as zero.
pub fn perft<B>(board: &B, color: Color, depth: u32) -> u64
where
    B: Board,
{
    perft_with(board, color, depth, &mut |_, _, _| ())
}
/// [`perft`], calling `handler(movement, count, depth)` after each subtree is
/// counted, at every level of the tree.
pub fn perft_with<B, F>(board: &B, color: Color, depth: u32, handler: &mut F) -> u64
where
    B: Board,
    F: FnMut(Move, u64, u32),
{
    let Ok(moves) = moves_for_color(board, color) else {
        return 0;
    };
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for movement in moves {
        let count = perft_with(&board.apply_move(movement), !color, depth - 1, handler);
        handler(movement, count, depth);
        nodes += count;
    }
    nodes
}
/// Node counts below each root move.
pub fn perft_divide<B>(board: &B, color: Color, depth: u32) -> Vec<(Move, u64)>
where
    B: Board,
{
    if depth == 0 {
        return Vec::new();
    }
    let Ok(moves) = moves_for_color(board, color) else {
        return Vec::new();
    };
    moves
        .into_iter()
        .map(|movement| {
            let count = perft(&board.apply_move(movement), !color, depth - 1);
            debug!("{movement}: {count}");
            (movement, count)
        })
        .collect()
}
