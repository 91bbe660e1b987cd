pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    PlayerA,
    PlayerB,
}

impl Symbol {
    pub fn other(self) -> Symbol {
        match self {
            Symbol::PlayerA => Symbol::PlayerB,
            Symbol::PlayerB => Symbol::PlayerA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Symbol::PlayerA),
            Cell::PlayerB => Some(Symbol::PlayerB),
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerA => 'A',
            Cell::PlayerB => 'B',
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::PlayerA => Cell::PlayerA,
            Symbol::PlayerB => Cell::PlayerB,
        }
    }
}

/// Coordinates of a placed token. Row 0 is the bottom of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// 6x7 playing grid, stored bottom row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        !self.cells[ROWS - 1][col].is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Lands `symbol` in the lowest empty row of `col`. The caller checks the
    /// column bounds.
    pub(crate) fn drop_token(&mut self, col: usize, symbol: Symbol) -> Option<Position> {
        let row = (0..ROWS).rev().take_while(|&row| self.cells[row][col].is_empty()).last()?;
        self.cells[row][col] = symbol.into();
        Some(Position { row, col })
    }

    /// Board as text, top row first, one line per row.
    pub fn board_to_str(&self) -> String {
        self.cells
            .iter()
            .rev()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parses the text form produced by `board_to_str`: `A`, `B` and `.`, top
    /// row first. Surrounding whitespace on each line is ignored, unknown
    /// characters read as empty. Gravity is not enforced.
    pub fn board_from_str(board: &str) -> Self {
        let mut grid = Self::new();
        let lines = board
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(ROWS)
            .collect::<Vec<_>>();
        for (i, line) in lines.iter().enumerate() {
            let row = lines.len() - 1 - i;
            for (col, c) in line.chars().take(COLS).enumerate() {
                grid.cells[row][col] = match c {
                    'A' => Cell::PlayerA,
                    'B' => Cell::PlayerB,
                    _ => Cell::Empty,
                };
            }
        }
        grid
    }
}
