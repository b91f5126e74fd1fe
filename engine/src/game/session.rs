use crate::config::GameConfig;
use super::bot_controller::select_opponent_move;
use super::error::EngineError;
use super::game_state::GameState;
use super::session_rng::CoordinateSource;
use super::types::{GameMode, GameStatus, Position, Side};

/// Turn flow for one local game, as seen from the presentation layer.
pub struct LocalSession<R: CoordinateSource> {
    config: GameConfig,
    game: GameState,
    current_side: Side,
    rng: R,
}

impl<R: CoordinateSource> LocalSession<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        let game = GameState::start_new_game(config.width, config.height, config.win_length)?;
        Ok(Self {
            config,
            game,
            current_side: Side::Human,
            rng,
        })
    }

    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.game = GameState::start_new_game(
            self.config.width,
            self.config.height,
            self.config.win_length,
        )?;
        self.current_side = Side::Human;
        Ok(())
    }

    /// Places the current side's mark at `pos`. In `HumanVsAi` mode the
    /// opponent answers before this returns.
    pub fn handle_cell(&mut self, pos: Position) -> Result<GameStatus, EngineError> {
        let status = self.game.place_mark(pos, self.current_side)?;

        match self.config.mode {
            GameMode::HumanVsHuman => {
                if !status.is_over() {
                    self.current_side = self.current_side.other();
                }
                Ok(status)
            }
            GameMode::HumanVsAi => {
                if status.is_over() {
                    return Ok(status);
                }
                select_opponent_move(&mut self.game, Side::Opponent, &mut self.rng)?;
                Ok(self.game.status())
            }
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }
}
