mod grid;
mod player;
mod rules;

use thiserror::Error;

pub use grid::Cell;
pub use grid::Grid;
pub use grid::Position;
pub use grid::Symbol;
pub use grid::COLS;
pub use grid::ROWS;
pub use player::parse_players;
pub use player::Color;
pub use player::ConfigError;
pub use player::Player;
pub use player::DEFAULT_PLAYERS;
pub use rules::check_winner;
pub use rules::check_winner_at;
pub use rules::is_draw;
pub use rules::ALIGN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("column {0} does not exist")]
    InvalidColumn(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Symbol),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// One game session: the grid, whose turn it is, and who is playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    turn: Symbol,
    last_move: Option<Position>,
    players: [Player; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            turn: Symbol::PlayerA,
            last_move: None,
            players: Player::defaults(),
        }
    }

    /// Fresh grid for the same players.
    pub fn rematch(&self) -> Self {
        Self {
            players: self.players.clone(),
            ..Self::new()
        }
    }

    #[cfg(test)]
    pub fn from_board(board: &str, turn: Symbol) -> Self {
        Self {
            grid: Grid::board_from_str(board),
            turn,
            ..Self::new()
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Symbol {
        self.turn
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn configure_players(
        &mut self,
        name1: &str,
        color1: &str,
        name2: &str,
        color2: &str,
    ) -> Result<(), ConfigError> {
        self.players = parse_players(name1, color1, name2, color2)?;
        Ok(())
    }

    pub fn player_for(&self, symbol: Symbol) -> &Player {
        match symbol {
            Symbol::PlayerA => &self.players[0],
            Symbol::PlayerB => &self.players[1],
        }
    }

    pub fn current_player(&self) -> &Player {
        self.player_for(self.turn)
    }

    pub fn check_winner(&self) -> Option<Symbol> {
        match self.last_move {
            Some(last) => check_winner_at(&self.grid, last),
            None => check_winner(&self.grid),
        }
    }

    pub fn is_draw(&self) -> bool {
        is_draw(&self.grid)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.check_winner() {
            GameStatus::Won(winner)
        } else if self.grid.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Zero-based columns that still accept a token.
    pub fn valid_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return vec![];
        }
        (0..COLS)
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    /// Drops the current player's token in the zero-based `col`.
    pub fn play(&mut self, col: usize) -> Result<Position, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let pos = self
            .grid
            .drop_token(col, self.turn)
            .ok_or(MoveError::ColumnFull(col))?;
        self.last_move = Some(pos);
        if check_winner_at(&self.grid, pos).is_none() {
            self.turn = self.turn.other();
        }
        Ok(pos)
    }

    pub fn outcome_message(&self) -> String {
        match self.status() {
            GameStatus::InProgress => format!("{} to play", self.current_player().name),
            GameStatus::Won(symbol) => format!("{} wins!", self.player_for(symbol).name),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }
}
