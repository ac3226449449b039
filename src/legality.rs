use crate::{board::PieceStorage, coord::Move, error::MoveError, piece::PieceKind};

/// Decides whether `movement` is legal on `storage`.
///
/// Conditions are checked in the order of the [`MoveError`] variants and the
/// first failing one is reported. A king capture is only reported for a move
/// that passes every other check.
pub fn check_move<S>(storage: &S, movement: Move) -> Result<(), MoveError>
where
    S: PieceStorage + ?Sized,
{
    if movement.is_empty() {
        return Err(MoveError::NoMove);
    }
    if !storage.size().has_move(movement) {
        return Err(MoveError::OutOfSize);
    }
    let piece = storage.piece(movement.start).ok_or(MoveError::NoPiece)?;
    let target = storage.piece(movement.finish);
    if target.is_some_and(|target| target.color == piece.color) {
        return Err(MoveError::FriendlyTarget);
    }
    if !piece.check_move(movement, storage) {
        return Err(MoveError::IllegalMove);
    }
    if target.is_some_and(|target| target.kind == PieceKind::King) {
        return Err(MoveError::KingCapture);
    }
    Ok(())
}
