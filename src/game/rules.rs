use super::grid::Grid;
use super::grid::Position;
use super::grid::Symbol;
use super::grid::COLS;
use super::grid::ROWS;

pub const ALIGN: usize = 4;

// (row, col) steps: horizontal, vertical, rising and falling diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

fn step(pos: Position, (dr, dc): (isize, isize), n: isize) -> Option<Position> {
    let row = pos.row as isize + dr * n;
    let col = pos.col as isize + dc * n;
    if (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col) {
        Some(Position {
            row: row as usize,
            col: col as usize,
        })
    } else {
        None
    }
}

/// Number of consecutive `symbol` cells after `origin` along `dir`, origin excluded.
fn run_length(grid: &Grid, origin: Position, dir: (isize, isize), symbol: Symbol) -> usize {
    (1..)
        .map_while(|n| step(origin, dir, n))
        .take_while(|pos| grid.get(pos.row, pos.col).symbol() == Some(symbol))
        .count()
}

/// Scans the whole grid and returns the owner of the first four-in-a-row
/// found, bottom-left first.
pub fn check_winner(grid: &Grid) -> Option<Symbol> {
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| Position { row, col }))
        .find_map(|origin| {
            let symbol = grid.get(origin.row, origin.col).symbol()?;
            DIRECTIONS
                .iter()
                .any(|&dir| 1 + run_length(grid, origin, dir, symbol) >= ALIGN)
                .then_some(symbol)
        })
}

/// Checks only the lines through `last`, walking both ways along each axis.
pub fn check_winner_at(grid: &Grid, last: Position) -> Option<Symbol> {
    let symbol = grid.get(last.row, last.col).symbol()?;
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| {
            let forward = run_length(grid, last, (dr, dc), symbol);
            let backward = run_length(grid, last, (-dr, -dc), symbol);
            1 + forward + backward >= ALIGN
        })
        .then_some(symbol)
}

pub fn is_draw(grid: &Grid) -> bool {
    grid.is_full() && check_winner(grid).is_none()
}
