use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::{Board, Mark};
use super::rules::{evaluate, Outcome};

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// How the automated player picks its moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    Heuristic,
    Random,
}

pub fn calculate_move<R: Rng>(
    strategy: Strategy,
    board: &Board,
    bot_mark: Mark,
    rng: &mut R,
) -> Option<usize> {
    match strategy {
        Strategy::Heuristic => select_move(board, bot_mark),
        Strategy::Random => select_random_move(board, rng),
    }
}

/// Picks a cell for `bot_mark` by fixed priorities: win now, block the
/// other player's win, take the center, take a corner, take an edge.
/// Ties inside a priority go to the lowest cell index (corners and edges
/// follow their declared scan order).
///
/// Returns [`None`] only when the board is full. Win and block probes look
/// a single move ahead, so a double threat can still slip through; that
/// behavior is intentional and pinned down by tests.
pub fn select_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    if let Some(index) = winning_cell(board, bot_mark, &empty) {
        return Some(index);
    }
    if let Some(index) = winning_cell(board, bot_mark.opponent(), &empty) {
        return Some(index);
    }
    if board.get(CENTER).is_none() {
        return Some(CENTER);
    }
    if let Some(&index) = CORNERS.iter().find(|&&index| board.get(index).is_none()) {
        return Some(index);
    }
    EDGES
        .iter()
        .copied()
        .find(|&index| board.get(index).is_none())
}

/// Picks a uniformly random empty cell.
pub fn select_random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}

/// Lowest-index empty cell that would complete a line for `mark`.
/// Each probe runs on a copy, the real board is never touched.
fn winning_cell(board: &Board, mark: Mark, empty: &[usize]) -> Option<usize> {
    empty.iter().copied().find(|&index| {
        let mut probe = board.clone();
        probe.set(index, mark);
        matches!(evaluate(&probe), Outcome::Winner { mark: winner, .. } if winner == mark)
    })
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::super::board::Cell;
    use super::*;

    const X: Cell = Some(Mark::X);
    const O: Cell = Some(Mark::O);
    const E: Cell = None;

    fn board_from(marks: [Cell; 9]) -> Board {
        let mut board = Board::default();
        for (index, mark) in marks.into_iter().enumerate() {
            if let Some(mark) = mark {
                board.set(index, mark);
            }
        }
        board
    }

    #[test]
    fn test_takes_center_on_empty_board() {
        assert_eq!(select_move(&Board::default(), Mark::O), Some(CENTER));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X is about to complete the top row
        let board = board_from([X, X, E, E, E, E, E, E, E]);
        assert_eq!(select_move(&board, Mark::O), Some(2));
    }

    #[test]
    fn test_win_beats_block() {
        // both sides threaten at index 2 and 5, winning comes first
        let board = board_from([O, O, E, X, X, E, E, E, E]);
        assert_eq!(select_move(&board, Mark::O), Some(2));
    }

    #[test]
    fn test_wins_on_lowest_index_among_ties() {
        // O can finish the top row at 1, the left column at 3
        // or either diagonal at 4; the lowest index wins
        let board = board_from([O, E, O, E, E, E, O, X, O]);
        assert_eq!(select_move(&board, Mark::O), Some(1));
    }

    #[test]
    fn test_blocks_lowest_index_threat_first() {
        // X forked: threats at 2 (top row) and 6 (left column),
        // the single-ply policy only covers the first one
        let board = board_from([X, X, E, X, O, E, E, E, O]);
        assert_eq!(select_move(&board, Mark::O), Some(2));
    }

    #[test]
    fn test_corner_priority_order() {
        let board = board_from([E, E, E, E, O, E, E, E, E]);
        assert_eq!(select_move(&board, Mark::O), Some(0));

        let board = board_from([X, E, E, E, O, E, E, E, E]);
        assert_eq!(select_move(&board, Mark::O), Some(2));

        // 0 and 2 taken, no win or block available for X, 6 is next
        let board = board_from([X, O, X, E, O, E, E, X, E]);
        assert_eq!(select_move(&board, Mark::X), Some(6));
    }

    #[test]
    fn test_edge_priority_order() {
        // center and all corners taken, no win or block; edge 1 is
        // occupied so the scan lands on 3
        let board = board_from([X, O, X, E, X, E, O, X, O]);
        assert_eq!(select_move(&board, Mark::O), Some(3));
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let board = board_from([X, O, X, O, X, O, E, E, E]);
        for mark in [Mark::X, Mark::O] {
            let index = select_move(&board, mark).unwrap();
            assert_eq!(board.get(index), None);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from([X, X, O, O, O, X, X, O, X]);
        assert_eq!(select_move(&board, Mark::O), None);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(select_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_strategy_is_seeded() {
        let board = board_from([X, E, E, E, O, E, E, E, E]);
        let mut first = ChaCha8Rng::seed_from_u64(42);
        let mut second = ChaCha8Rng::seed_from_u64(42);
        let index = calculate_move(Strategy::Random, &board, Mark::O, &mut first);
        assert_eq!(
            index,
            calculate_move(Strategy::Random, &board, Mark::O, &mut second)
        );
        assert_eq!(board.get(index.unwrap()), None);
    }
}
