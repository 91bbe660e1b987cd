use std::io::Write;

use crossterm::style::style;
use crossterm::style::Attribute;
use crossterm::style::Color;
use crossterm::style::PrintStyledContent;
use crossterm::style::Stylize;
use crossterm::QueueableCommand;

use crate::game::Cell;
use crate::game::GameState;
use crate::game::Position;
use crate::game::Symbol;
use crate::game::COLS;
use crate::game::ROWS;

const TOKEN: &str = "O";

fn token_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::PlayerA => 'X',
        Cell::PlayerB => 'O',
    }
}

fn player_color(game: &GameState, symbol: Symbol) -> Color {
    let (r, g, b) = game.player_for(symbol).color.rgb();
    Color::Rgb { r, g, b }
}

/// Writes the grid top row first with 1-based column numbers, followed by the
/// players, the status line and the playable columns. With `colored` the
/// tokens are painted with the players' colors and the last move is
/// highlighted, otherwise `X`/`O` stand for the players and the last move is
/// bracketed.
pub fn render<W: Write>(out: &mut W, game: &GameState, colored: bool) -> std::io::Result<()> {
    let numbers: String = (1..=COLS).map(|c| format!(" {c} ")).collect();
    writeln!(out, "{numbers}")?;
    for row in (0..ROWS).rev() {
        for col in 0..COLS {
            let cell = game.grid().get(row, col);
            let is_last = game.last_move() == Some(Position { row, col });
            if colored {
                let content = match cell.symbol() {
                    Some(symbol) => style(TOKEN).with(player_color(game, symbol)),
                    None => style(TOKEN).with(Color::DarkBlue),
                };
                let content = if is_last {
                    content.attribute(Attribute::Bold).attribute(Attribute::Underlined)
                } else {
                    content
                };
                out.queue(PrintStyledContent(style(" ").on(Color::DarkBlue)))?
                    .queue(PrintStyledContent(content.on(Color::DarkBlue)))?
                    .queue(PrintStyledContent(style(" ").on(Color::DarkBlue)))?;
            } else if is_last {
                write!(out, "[{}]", token_char(cell))?;
            } else {
                write!(out, " {} ", token_char(cell))?;
            }
        }
        writeln!(out)?;
    }

    for (symbol, player) in [Symbol::PlayerA, Symbol::PlayerB]
        .into_iter()
        .zip(game.players())
    {
        let marker = if symbol == game.turn() && !game.is_over() {
            ">"
        } else {
            " "
        };
        if colored {
            write!(out, "{marker} ")?;
            out.queue(PrintStyledContent(
                style(TOKEN).with(player_color(game, symbol)),
            ))?;
            writeln!(out, " {} ({})", player.name, player.color)?;
        } else {
            let cell = Cell::from(symbol);
            writeln!(
                out,
                "{marker} {} {} ({})",
                token_char(cell),
                player.name,
                player.color
            )?;
        }
    }

    writeln!(out, "{}", game.outcome_message())?;
    let columns = game.valid_columns();
    if !columns.is_empty() {
        let columns = columns
            .iter()
            .map(|c| (c + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "Playable columns: {columns}")?;
    }
    out.flush()
}
