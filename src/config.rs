use clap::Parser;

use crate::game::parse_players;
use crate::game::ConfigError;
use crate::game::Player;
use crate::game::DEFAULT_PLAYERS;

#[derive(Parser, Debug)]
#[command(about)]
pub struct Args {
    /// name of the first player (plays first)
    #[arg(long, default_value = DEFAULT_PLAYERS[0].0)]
    pub name1: String,
    /// color of the first player, #RGB or #RRGGBB
    #[arg(long, default_value = DEFAULT_PLAYERS[0].1)]
    pub color1: String,
    /// name of the second player
    #[arg(long, default_value = DEFAULT_PLAYERS[1].0)]
    pub name2: String,
    /// color of the second player, #RGB or #RRGGBB
    #[arg(long, default_value = DEFAULT_PLAYERS[1].1)]
    pub color2: String,
    /// print the grid without terminal colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn players(&self) -> Result<[Player; 2], ConfigError> {
        parse_players(&self.name1, &self.color1, &self.name2, &self.color2)
    }
}
