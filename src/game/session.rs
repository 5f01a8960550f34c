use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{Board, Cell, Mark, BOARD_CELLS};
use super::bot::{calculate_move, Strategy};
use super::error::{GameError, GameResult};
use super::rules::{evaluate, Outcome};

/// The automated player always takes the second mark.
pub const BOT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    PlayerVsPlayer,
    PlayerVsBot,
}

/// Derived from the board after every accepted move, never mutated directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won { mark: Mark, line: [usize; 3] },
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Snapshot of everything the presentation layer needs after any input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameView {
    pub board: [Cell; BOARD_CELLS],
    pub turn: Mark,
    pub status: GameStatus,
    pub mode: Mode,
}

/// Owns one game: board, whose turn it is and the derived status.
///
/// Moves are strictly serialized through `&mut self`; no two sessions share
/// a board. The `try_*` operations report rejections as [`GameError`], the
/// `*_clicked`/`*_requested` boundary methods swallow them so the caller can
/// feed UI events through without checking preconditions first.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    turn: Mark,
    status: GameStatus,
    mode: Mode,
    strategy: Strategy,
    rng: StdRng,
}

impl GameSession {
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }

    /// Deterministic session for tests and replays.
    pub fn with_seed(mode: Mode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: Mode, rng: StdRng) -> Self {
        Self {
            board: Board::default(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            mode,
            strategy: Strategy::default(),
            rng,
        }
    }

    /// Puts the current turn's mark into the cell at `index`,
    /// recomputes the status and flips the turn if the game goes on.
    pub fn try_apply_move(&mut self, index: usize) -> GameResult<GameStatus> {
        if self.status.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        if index >= BOARD_CELLS {
            return Err(GameError::cell_out_of_range(BOARD_CELLS - 1, index));
        }
        if self.board.get(index).is_some() {
            return Err(GameError::cell_is_occupied(index));
        }

        self.board.set(index, self.turn);
        self.status = derive_status(&self.board);
        match self.status {
            GameStatus::InProgress => self.turn = self.turn.opponent(),
            finished => info!(status = ?finished, "game finished"),
        }
        Ok(self.status)
    }

    /// Lets the bot pick and apply its move. Only valid in
    /// [`Mode::PlayerVsBot`] while the game is running and it's O's turn.
    pub fn try_bot_move(&mut self) -> GameResult<GameStatus> {
        if self.mode != Mode::PlayerVsBot {
            return Err(GameError::BotDisabled);
        }
        if self.status.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        if self.turn != BOT_MARK {
            return Err(GameError::not_your_turn(self.turn, BOT_MARK));
        }

        match calculate_move(self.strategy, &self.board, BOT_MARK, &mut self.rng) {
            Some(index) => {
                debug!(index, strategy = ?self.strategy, "bot selected move");
                self.try_apply_move(index)
            }
            // full board, terminal status was derived when it filled up
            None => Ok(self.status),
        }
    }

    /// Resets board, turn and status; mode and strategy are preserved.
    pub fn restart(&mut self) {
        self.board.clear();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.restart();
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.cells(),
            turn: self.turn,
            status: self.status,
            mode: self.mode,
        }
    }

    // Boundary inputs. Rejections leave the state untouched and are only
    // visible as debug events.

    pub fn cell_clicked(&mut self, index: usize) {
        if let Err(err) = self.try_apply_move(index) {
            debug!(index, %err, "click ignored");
        }
    }

    pub fn bot_turn(&mut self) {
        if let Err(err) = self.try_bot_move() {
            debug!(%err, "bot trigger ignored");
        }
    }

    pub fn restart_requested(&mut self) {
        self.restart();
    }

    pub fn mode_selected(&mut self, mode: Mode) {
        self.set_mode(mode);
    }
}

fn derive_status(board: &Board) -> GameStatus {
    match evaluate(board) {
        Outcome::Winner { mark, line } => GameStatus::Won { mark, line },
        Outcome::NoWinner if board.is_full() => GameStatus::Draw,
        Outcome::NoWinner => GameStatus::InProgress,
    }
}
