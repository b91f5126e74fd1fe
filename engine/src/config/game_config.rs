use serde::{Deserialize, Serialize};

use super::Validate;
use crate::game::GameMode;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Zero or anything longer than the board is accepted; such a game can
    /// only end in a draw.
    pub win_length: usize,
    pub mode: GameMode,
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Board dimensions must be at least 1x1, got {}x{}",
                self.width, self.height
            ));
        }
        let too_large = self
            .width
            .checked_mul(self.height)
            .is_none_or(|count| count > isize::MAX as usize);
        if too_large {
            return Err(format!(
                "Board dimensions {}x{} are too large",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            win_length: 3,
            mode: GameMode::HumanVsAi,
            seed: None,
        }
    }
}
