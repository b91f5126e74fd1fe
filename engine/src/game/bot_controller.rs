use crate::log;
use super::board::Board;
use super::error::EngineError;
use super::game_state::GameState;
use super::session_rng::CoordinateSource;
use super::types::{Mark, Position, Side};
use super::win_detector::check_win;

/// Picks and commits the next move for `bot_side`.
///
/// Rules in priority order: take an immediate win, block the other side's
/// immediate win, otherwise a uniformly random empty cell. Look-ahead only
/// ever touches a scratch copy of the board.
pub fn select_opponent_move<R: CoordinateSource>(
    game: &mut GameState,
    bot_side: Side,
    rng: &mut R,
) -> Result<Position, EngineError> {
    if game.status().is_over() {
        return Err(EngineError::GameAlreadyOver);
    }

    let mut scratch = game.board().clone();

    let pos = if let Some(pos) = find_winning_cell(&mut scratch, bot_side) {
        log!("{:?} takes winning cell {}", bot_side, pos);
        pos
    } else if let Some(pos) = find_winning_cell(&mut scratch, bot_side.other()) {
        log!("{:?} blocks {:?} at {}", bot_side, bot_side.other(), pos);
        pos
    } else {
        let pos = pick_random_cell(game.board(), rng);
        log!("{:?} plays random cell {}", bot_side, pos);
        pos
    };

    game.place_mark(pos, bot_side)?;
    Ok(pos)
}

/// First empty cell, in row-major order, where `side` would complete a run.
/// The scratch board is restored before returning.
fn find_winning_cell(scratch: &mut Board, side: Side) -> Option<Position> {
    for pos in scratch.empty_cells() {
        scratch.set(pos, side.mark());
        let wins = check_win(scratch, side);
        scratch.set(pos, Mark::Empty);

        if wins {
            return Some(pos);
        }
    }
    None
}

/// Reject-and-resample until an empty cell comes up. The caller guarantees
/// the board is not full; a full board is always a finished game.
fn pick_random_cell<R: CoordinateSource>(board: &Board, rng: &mut R) -> Position {
    loop {
        let x = rng.next_coordinate(board.width());
        let y = rng.next_coordinate(board.height());
        let pos = Position::new(x, y);
        if board.is_empty_cell(pos) {
            return pos;
        }
    }
}
