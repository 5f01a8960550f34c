//! Pure Tic-Tac-Toe engine behind a browser-rendered (or any other) UI:
//! a 3x3 board, strict turn alternation, win/draw detection and a
//! fixed-priority rule-based opponent. No I/O, no rendering; the
//! presentation layer feeds inputs into a [`GameSession`] and reads the
//! serializable [`GameView`] back.

pub mod game;

pub use game::board::{Board, Cell, Mark, BOARD_CELLS, BOARD_SIDE};
pub use game::bot::{select_move, select_random_move, Strategy};
pub use game::error::{GameError, GameResult};
pub use game::rules::{evaluate, is_draw, Outcome, WIN_LINES};
pub use game::session::{GameSession, GameStatus, GameView, Mode, BOT_MARK};
