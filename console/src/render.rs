use xo_engine::game::{Board, GameStatus, Mark, Side};

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::Empty => '.',
        Mark::Human => 'X',
        Mark::Opponent => 'O',
    }
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for x in 0..board.width() {
        out.push_str(&format!("{:>3}", x));
    }
    out.push('\n');

    for (y, row) in board.rows().enumerate() {
        out.push_str(&format!("{:>3}", y));
        for &mark in row {
            out.push_str(&format!("{:>3}", mark_char(mark)));
        }
        out.push('\n');
    }
    out
}

pub fn game_over_banner(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some("Draw"),
        GameStatus::Won(Side::Human) => Some("Human wins"),
        GameStatus::Won(Side::Opponent) => Some("AI wins"),
    }
}
