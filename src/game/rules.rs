use serde::Serialize;

use super::board::{Board, Mark};

/// The 8 ways to win: rows top to bottom, columns left to right,
/// main diagonal, anti-diagonal. Scan order doubles as the tie-break for
/// malformed boards where several lines are complete.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    NoWinner,
    Winner { mark: Mark, line: [usize; 3] },
}

/// Reports the first completed line on `board`, if any.
///
/// Pure and idempotent; safe to call on partial or terminal boards. In a
/// legally played game at most one mark can complete a line.
pub fn evaluate(board: &Board) -> Outcome {
    for line in WIN_LINES {
        if let (Some(m1), Some(m2), Some(m3)) = (
            board.get(line[0]),
            board.get(line[1]),
            board.get(line[2]),
        ) {
            if m1 == m2 && m2 == m3 {
                return Outcome::Winner { mark: m1, line };
            }
        }
    }
    Outcome::NoWinner
}

/// A draw is a full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate(board) == Outcome::NoWinner
}
