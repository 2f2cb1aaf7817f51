use chrono::prelude::*;
use chrono::TimeDelta;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One position on the card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub tile: TileDef,
    pub spotted: bool,
    pub pos: Pos,
}

impl GridCell {
    pub fn new(tile: TileDef, pos: Pos) -> Self {
        Self {
            tile,
            spotted: false,
            pos,
        }
    }

    /// The center cell, spotted from creation.
    pub fn free(tile: TileDef) -> Self {
        Self {
            tile,
            spotted: true,
            pos: CENTER_POS,
        }
    }
}

/// Outcome of toggling a cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use ToggleOutcome::*;
        match self {
            NoChange => false,
            Toggled => true,
            Won => true,
        }
    }
}

/// The live game. Becomes terminal the moment a winning line is detected and
/// stays that way until the host starts a new game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    cells: Vec<GridCell>,
    mode: GameMode,
    won: bool,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(cells: Vec<GridCell>, mode: GameMode) -> Self {
        debug_assert_eq!(cells.len(), GRID_CELLS);
        Self {
            cells,
            mode,
            won: false,
            started_at: Utc::now(),
        }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn cell_at(&self, pos: Pos) -> Result<&GridCell> {
        if in_bounds(pos) {
            Ok(&self.cells[pos as usize])
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn spotted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.spotted).count()
    }

    /// How long this game has been running, zero if the clock went backwards.
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        (now - self.started_at).max(TimeDelta::zero())
    }

    /// Flip the cell at `pos` and re-check the whole card for a winning line.
    ///
    /// A won session is sticky: further toggles are ignored without touching
    /// the card or re-running win detection. The free center cell cannot be
    /// unmarked.
    pub fn toggle(&mut self, pos: Pos) -> Result<ToggleOutcome> {
        use ToggleOutcome::*;

        if !in_bounds(pos) {
            return Err(GameError::InvalidPosition);
        }
        if self.won {
            return Ok(NoChange);
        }
        if pos == CENTER_POS {
            return Ok(NoChange);
        }

        let cell = &mut self.cells[pos as usize];
        cell.spotted = !cell.spotted;
        log::trace!("Toggled {:?} at {}, spotted: {}", cell.tile.id, pos, cell.spotted);

        if check_win(&self.cells, self.mode.win_length()) {
            self.won = true;
            log::debug!("Winning line completed at {}", pos);
            Ok(Won)
        } else {
            Ok(Toggled)
        }
    }
}

/// Whether any row, column, or diagonal (both directions) contains a
/// contiguous run of `win_length` spotted cells. Pure sliding-window scan,
/// short-circuits on the first match.
pub fn check_win(cells: &[GridCell], win_length: usize) -> bool {
    debug_assert_eq!(cells.len(), GRID_CELLS);
    debug_assert!(matches!(win_length, 3 | 4));

    let spotted = Array2::from_shape_fn((GRID_SIDE, GRID_SIDE), |(row, col)| {
        cells[to_pos(row, col) as usize].spotted
    });
    // valid window start offsets per line
    let windows = GRID_SIDE - win_length + 1;

    for row in 0..GRID_SIDE {
        for start in 0..windows {
            if (0..win_length).all(|i| spotted[(row, start + i)]) {
                return true;
            }
        }
    }

    for col in 0..GRID_SIDE {
        for start in 0..windows {
            if (0..win_length).all(|i| spotted[(start + i, col)]) {
                return true;
            }
        }
    }

    // down-right diagonals
    for row in 0..windows {
        for col in 0..windows {
            if (0..win_length).all(|i| spotted[(row + i, col + i)]) {
                return true;
            }
        }
    }

    // down-left diagonals
    for row in 0..windows {
        for col in (win_length - 1)..GRID_SIDE {
            if (0..win_length).all(|i| spotted[(row + i, col - i)]) {
                return true;
            }
        }
    }

    false
}
