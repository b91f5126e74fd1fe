use super::board::Board;
use super::types::{Position, Side, WinningLine};

/// Scan order for each origin cell. The first qualifying run wins.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (1, 1), (0, 1), (1, -1)];

pub fn check_win(board: &Board, side: Side) -> bool {
    check_win_with_line(board, side).is_some()
}

pub fn check_win_with_line(board: &Board, side: Side) -> Option<WinningLine> {
    let win_length = board.win_length();
    if win_length == 0 || win_length > board.width().max(board.height()) {
        return None;
    }
    let len = isize::try_from(win_length).ok()?;

    for x in 0..board.width() {
        for y in 0..board.height() {
            for (dx, dy) in DIRECTIONS {
                if let Some(end) = check_line(board, x, y, dx, dy, len, side) {
                    return Some(WinningLine::new(side, Position::new(x, y), end));
                }
            }
        }
    }

    None
}

/// Returns the far endpoint when `len` cells starting at `(x, y)` in
/// direction `(dx, dy)` all carry the side's mark. `len` is at least 1 and
/// no longer than the board's longer side.
fn check_line(
    board: &Board,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    len: isize,
    side: Side,
) -> Option<Position> {
    let span = len - 1;
    let end = offset(x, y, dx * span, dy * span)?;
    if !board.is_valid_cell(end) {
        return None;
    }

    let mark = side.mark();
    for i in 0..len {
        let pos = offset(x, y, dx * i, dy * i)?;
        if board.get(pos) != Some(mark) {
            return None;
        }
    }
    Some(end)
}

fn offset(x: usize, y: usize, dx: isize, dy: isize) -> Option<Position> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    Some(Position::new(nx, ny))
}
