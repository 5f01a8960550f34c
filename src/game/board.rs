use std::fmt::{Display, Formatter};

use generic_array::typenum::U3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Grid, GridIndex};

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Mark placed by one of the two players. [`Mark::X`] always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

pub type Cell = Option<Mark>;

/// 3x3 playing field addressed by flat cell indices 0-8 in row-major order
/// (row 0: 0,1,2; row 1: 3,4,5; row 2: 6,7,8).
///
/// Cells only ever go from empty to marked; the board is cleared as a whole
/// on session reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board(Grid<Cell, U3, U3>);

impl Board {
    /// Returns the content of the cell at `index`.
    ///
    /// Panics if `index` is outside 0-8; callers validate indices coming from
    /// the outside before touching the board.
    pub fn get(&self, index: usize) -> Cell {
        self.0[Self::grid_index(index)]
    }

    /// Puts `mark` into the cell at `index`, overwriting whatever was there.
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.0[Self::grid_index(index)] = Some(mark);
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.0 = Grid::default();
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> SmallVec<[usize; BOARD_CELLS]> {
        self.0
            .all_indexed()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index.row() * BOARD_SIDE + index.col())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.0.all().all(|cell| cell.is_some())
    }

    /// Cell contents in row-major order, for boundary snapshots.
    pub fn cells(&self) -> [Cell; BOARD_CELLS] {
        let mut cells = [None; BOARD_CELLS];
        for (i, cell) in self.0.all().enumerate() {
            cells[i] = *cell;
        }
        cells
    }

    fn grid_index(index: usize) -> GridIndex {
        GridIndex::new(index / BOARD_SIDE, index % BOARD_SIDE)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIDE {
            for col in 0..BOARD_SIDE {
                match self.get(row * BOARD_SIDE + col) {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => f.write_str(".")?,
                }
            }
            if row + 1 < BOARD_SIDE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
