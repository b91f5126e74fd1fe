//! Rules for N-in-a-row on a rectangular grid: placement, win and draw
//! detection, and the two-ply opponent.

mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::select_opponent_move;
pub use error::EngineError;
pub use game_state::GameState;
pub use session::LocalSession;
pub use session_rng::{CoordinateSource, SessionRng};
pub use types::{GameMode, GameStatus, Mark, Position, Side, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
