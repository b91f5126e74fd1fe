use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidConfiguration { width: usize, height: usize },
    InvalidCell(Position),
    CellOccupied(Position),
    GameAlreadyOver,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidConfiguration { width, height } => {
                write!(f, "Invalid board configuration: {}x{}", width, height)
            }
            EngineError::InvalidCell(pos) => write!(f, "Position {} is out of bounds", pos),
            EngineError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
            EngineError::GameAlreadyOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for EngineError {}
