use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Coord, Player, CELL_COUNT, DIRECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    CellOccupied,
    NoCapture,
    GameOver,
}

/// Generates every legal move for `mover`, in row-major destination order.
///
/// Candidates are restricted to empty cells adjacent to at least one
/// opponent piece. That is a pruning step only: any destination it skips
/// cannot bracket an opponent run, so the result matches a full scan.
/// Row-major order pins which move wins score ties under pruning.
#[must_use]
pub fn legal_moves(board: &Board, mover: Player) -> MoveList {
    let opponent = mover.opposite();

    let mut candidate = [false; CELL_COUNT];
    for at in Board::coords() {
        if board.get(at) != Some(opponent) {
            continue;
        }
        for (dr, dc) in DIRECTIONS {
            if let Some(next) = at.offset(dr, dc) {
                if board.get(next).is_none() {
                    if let Some(slot) = candidate.get_mut(next.index()) {
                        *slot = true;
                    }
                }
            }
        }
    }

    let mut moves = MoveList::new();
    for at in Board::coords() {
        if !candidate.get(at.index()).copied().unwrap_or(false) {
            continue;
        }
        let flips = captures_from(board, mover, at);
        if !flips.is_empty() {
            moves.push(Move { to: at, flips });
        }
    }
    moves
}

/// Checks a single destination and builds its move. Unlike `legal_moves`
/// this reports why the placement is illegal.
pub fn validate_move(board: &Board, mover: Player, to: Coord) -> Result<Move, MoveError> {
    if board.get(to).is_some() {
        return Err(MoveError::CellOccupied);
    }
    let flips = captures_from(board, mover, to);
    if flips.is_empty() {
        return Err(MoveError::NoCapture);
    }
    Ok(Move { to, flips })
}

/// Walks all 8 directions from `at` and collects the opponent runs that a
/// `mover` disc placed there would flip. A run counts only when it ends on
/// a mover piece; the board edge or an empty cell discards it.
fn captures_from(board: &Board, mover: Player, at: Coord) -> Vec<Coord> {
    let opponent = mover.opposite();
    let mut flips = Vec::new();
    for (dr, dc) in DIRECTIONS {
        let mut run = Vec::new();
        let mut cursor = at.offset(dr, dc);
        while let Some(cell) = cursor {
            match board.get(cell) {
                Some(piece) if piece == opponent => {
                    run.push(cell);
                    cursor = cell.offset(dr, dc);
                }
                Some(_) => {
                    // Own piece closes the bracket; an empty run flips nothing.
                    flips.append(&mut run);
                    break;
                }
                None => break,
            }
        }
    }
    flips
}
