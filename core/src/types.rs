/// Row-major cell position on the card, `0..=24`.
pub type Pos = u8;

/// Linear dimension of the square card.
pub const GRID_SIDE: usize = 5;

/// Total number of cells on the card.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Position of the always-spotted free cell at the card center.
pub const CENTER_POS: Pos = 12;

pub const fn in_bounds(pos: Pos) -> bool {
    (pos as usize) < GRID_CELLS
}

pub const fn to_pos(row: usize, col: usize) -> Pos {
    (row * GRID_SIDE + col) as Pos
}

pub const fn to_row_col(pos: Pos) -> (usize, usize) {
    (pos as usize / GRID_SIDE, pos as usize % GRID_SIDE)
}
