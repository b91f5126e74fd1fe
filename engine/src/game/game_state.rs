use crate::log;
use super::board::Board;
use super::error::EngineError;
use super::types::{GameStatus, Mark, Position, Side, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// One game of N-in-a-row. The grid is only mutated through [`GameState::place_mark`].
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    last_move: Option<Position>,
}

impl GameState {
    pub fn start_new_game(
        width: usize,
        height: usize,
        win_length: usize,
    ) -> Result<Self, EngineError> {
        let too_large = width
            .checked_mul(height)
            .is_none_or(|count| count > isize::MAX as usize);
        if width == 0 || height == 0 || too_large {
            return Err(EngineError::InvalidConfiguration { width, height });
        }

        log!(
            "Starting new game: {}x{}, win length {}",
            width,
            height,
            win_length
        );

        Ok(Self {
            board: Board::new(width, height, win_length),
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_board(board: Board) -> Self {
        let mut state = Self {
            board,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        };
        state.update_status();
        state
    }

    pub fn place_mark(&mut self, pos: Position, side: Side) -> Result<GameStatus, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameAlreadyOver);
        }

        match self.board.get(pos) {
            None => return Err(EngineError::InvalidCell(pos)),
            Some(Mark::Empty) => {}
            Some(_) => return Err(EngineError::CellOccupied(pos)),
        }

        self.board.set(pos, side.mark());
        self.last_move = Some(pos);
        self.update_status();

        if self.status.is_over() {
            log!("Game over: {:?}", self.status);
        }

        Ok(self.status)
    }

    fn update_status(&mut self) {
        for side in [Side::Human, Side::Opponent] {
            if let Some(line) = check_win_with_line(&self.board, side) {
                self.status = GameStatus::Won(side);
                self.winning_line = Some(line);
                return;
            }
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn check_win(&self, side: Side) -> bool {
        check_win(&self.board, side)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(width: usize, height: usize, win_length: usize) -> GameState {
        GameState::start_new_game(width, height, win_length).unwrap()
    }

    fn snapshot(state: &GameState) -> Vec<Mark> {
        state.board().rows().flatten().copied().collect()
    }

    #[test]
    fn test_new_game_is_empty_and_in_progress() {
        for (width, height, win_length) in [(1, 1, 1), (3, 3, 3), (7, 4, 4), (10, 2, 0)] {
            let state = new_game(width, height, win_length);
            assert_eq!(state.status(), GameStatus::InProgress);
            assert!(snapshot(&state).iter().all(|&m| m == Mark::Empty));
            assert_eq!(state.winning_line(), None);
            assert_eq!(state.last_move(), None);
        }
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            GameState::start_new_game(0, 3, 3).unwrap_err(),
            EngineError::InvalidConfiguration { width: 0, height: 3 }
        );
        assert!(GameState::start_new_game(3, 0, 3).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        let sizes = [
            (usize::MAX, 2),
            (2, usize::MAX),
            (usize::MAX, usize::MAX),
            (usize::MAX, 1),
        ];
        for (width, height) in sizes {
            assert_eq!(
                GameState::start_new_game(width, height, 3).unwrap_err(),
                EngineError::InvalidConfiguration { width, height }
            );
        }
    }

    #[test]
    fn test_huge_win_length_is_accepted_but_unwinnable() {
        for win_length in [usize::MAX, 1usize << (usize::BITS - 1)] {
            let mut state = new_game(3, 3, win_length);
            assert_eq!(
                state.place_mark(Position::new(2, 2), Side::Opponent),
                Ok(GameStatus::InProgress)
            );
            assert_eq!(
                state.place_mark(Position::new(0, 0), Side::Human),
                Ok(GameStatus::InProgress)
            );
            assert!(!state.check_win(Side::Human));
            assert!(!state.check_win(Side::Opponent));
        }
    }

    #[test]
    fn test_zero_win_length_is_accepted_but_unwinnable() {
        let mut state = new_game(2, 1, 0);
        assert_eq!(state.place_mark(Position::new(0, 0), Side::Human), Ok(GameStatus::InProgress));
        assert_eq!(state.place_mark(Position::new(1, 0), Side::Human), Ok(GameStatus::Draw));
    }

    #[test]
    fn test_place_mark_out_of_bounds() {
        let mut state = new_game(3, 3, 3);
        let before = snapshot(&state);
        let pos = Position::new(3, 0);
        assert_eq!(
            state.place_mark(pos, Side::Human),
            Err(EngineError::InvalidCell(pos))
        );
        assert_eq!(snapshot(&state), before);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_place_mark_occupied() {
        let mut state = new_game(3, 3, 3);
        let pos = Position::new(1, 1);
        state.place_mark(pos, Side::Human).unwrap();
        let before = snapshot(&state);
        assert_eq!(
            state.place_mark(pos, Side::Opponent),
            Err(EngineError::CellOccupied(pos))
        );
        assert_eq!(snapshot(&state), before);
        assert_eq!(state.board().get(pos), Some(Mark::Human));
    }

    #[test]
    fn test_place_mark_changes_exactly_one_cell() {
        let mut state = new_game(4, 4, 3);
        let moves = [
            (Position::new(0, 0), Side::Human),
            (Position::new(3, 2), Side::Opponent),
            (Position::new(1, 3), Side::Human),
        ];
        for (pos, side) in moves {
            let before = snapshot(&state);
            state.place_mark(pos, side).unwrap();
            let after = snapshot(&state);
            let changed = before.iter().zip(&after).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 1);
            assert_eq!(state.board().get(pos), Some(side.mark()));
            assert_eq!(state.last_move(), Some(pos));
        }
    }

    #[test]
    fn test_three_in_a_row_wins() {
        let mut state = new_game(3, 3, 3);
        assert_eq!(state.place_mark(Position::new(0, 0), Side::Human), Ok(GameStatus::InProgress));
        assert_eq!(state.place_mark(Position::new(1, 0), Side::Human), Ok(GameStatus::InProgress));
        assert_eq!(
            state.place_mark(Position::new(2, 0), Side::Human),
            Ok(GameStatus::Won(Side::Human))
        );
        let line = state.winning_line().unwrap();
        assert_eq!(line.side, Side::Human);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
        assert!(state.check_win(Side::Human));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // H O H
        // H O O
        // O H H
        let mut state = new_game(3, 3, 3);
        let moves = [
            (0, 0, Side::Human),
            (1, 0, Side::Opponent),
            (2, 0, Side::Human),
            (1, 1, Side::Opponent),
            (0, 1, Side::Human),
            (2, 1, Side::Opponent),
            (1, 2, Side::Human),
            (0, 2, Side::Opponent),
        ];
        for (x, y, side) in moves {
            assert_eq!(
                state.place_mark(Position::new(x, y), side),
                Ok(GameStatus::InProgress)
            );
        }
        assert_eq!(
            state.place_mark(Position::new(2, 2), Side::Human),
            Ok(GameStatus::Draw)
        );
        assert!(state.is_full());
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_winning_last_cell_is_a_win_not_a_draw() {
        let board = Board::from_rows(&["HOH", "OHO", "OH."], 3);
        let mut state = GameState::from_board(board);
        assert_eq!(
            state.place_mark(Position::new(2, 2), Side::Human),
            Ok(GameStatus::Won(Side::Human))
        );
        assert!(state.is_full());
    }

    #[test]
    fn test_place_after_win_is_rejected() {
        let mut state = new_game(3, 3, 3);
        for x in 0..3 {
            state.place_mark(Position::new(x, 0), Side::Human).unwrap();
        }
        let before = snapshot(&state);
        assert_eq!(
            state.place_mark(Position::new(0, 2), Side::Opponent),
            Err(EngineError::GameAlreadyOver)
        );
        assert_eq!(snapshot(&state), before);
        assert_eq!(state.status(), GameStatus::Won(Side::Human));
    }

    #[test]
    fn test_place_after_draw_is_rejected() {
        let board = Board::from_rows(&["HO", "OH"], 3);
        let mut state = GameState::from_board(board);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(
            state.place_mark(Position::new(0, 0), Side::Human),
            Err(EngineError::GameAlreadyOver)
        );
    }
}
