use super::board::Mark;

pub type GameResult<T> = Result<T, GameError>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("cell {index} is occupied")]
    CellIsOccupied { index: usize },
    #[error("invalid cell index (expected: 0-{max_expected}, found: {found})")]
    CellOutOfRange { max_expected: usize, found: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("other player's turn (expected: {expected}, found: {found})")]
    NotYourTurn { expected: Mark, found: Mark },
    #[error("bot moves are disabled in player vs player mode")]
    BotDisabled,
}

impl GameError {
    pub fn cell_is_occupied(index: usize) -> Self {
        Self::CellIsOccupied { index }
    }

    pub fn cell_out_of_range(max_expected: usize, found: usize) -> Self {
        Self::CellOutOfRange {
            max_expected,
            found,
        }
    }

    pub fn not_your_turn(expected: Mark, found: Mark) -> Self {
        Self::NotYourTurn { expected, found }
    }
}
