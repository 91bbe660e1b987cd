use std::fmt;

use regex::Regex;
use thiserror::Error;

pub const DEFAULT_PLAYERS: [(&str, &str); 2] = [("Player 1", "#FF0000"), ("Player 2", "#FFFF00")];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player {0} needs a name")]
    EmptyName(usize),
    #[error("'{0}' is not a color, expected #RGB or #RRGGBB")]
    InvalidColor(String),
    #[error("both players cannot use the color {0}")]
    DuplicateColor(String),
}

/// A `#RGB` or `#RRGGBB` color code, kept as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn parse(code: &str) -> Result<Self, ConfigError> {
        let code = code.trim();
        let valid = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
            .map(|re| re.is_match(code))
            .unwrap_or(false);
        if !valid {
            return Err(ConfigError::InvalidColor(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = self.0.trim_start_matches('#');
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or_default();
        if digits.len() == 3 {
            let mut nibbles = digits
                .chars()
                .map(|c| channel(&c.to_string()) * 0x11);
            (
                nibbles.next().unwrap_or_default(),
                nibbles.next().unwrap_or_default(),
                nibbles.next().unwrap_or_default(),
            )
        } else {
            (channel(&digits[0..2]), channel(&digits[2..4]), channel(&digits[4..6]))
        }
    }

    /// Same color regardless of case and shorthand: `#f00` matches `#FF0000`.
    pub fn same_as(&self, other: &Color) -> bool {
        self.rgb() == other.rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    /// `index` is the 1-based player number used in error messages.
    pub fn parse(index: usize, name: &str, color: &str) -> Result<Self, ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName(index));
        }
        Ok(Self {
            name: name.to_string(),
            color: Color::parse(color)?,
        })
    }

    pub fn defaults() -> [Player; 2] {
        DEFAULT_PLAYERS.map(|(name, color)| Player {
            name: name.to_string(),
            color: Color(color.to_string()),
        })
    }
}

/// Validates a full setup form: both players, then the color clash.
pub fn parse_players(
    name1: &str,
    color1: &str,
    name2: &str,
    color2: &str,
) -> Result<[Player; 2], ConfigError> {
    let first = Player::parse(1, name1, color1)?;
    let second = Player::parse(2, name2, color2)?;
    if first.color.same_as(&second.color) {
        return Err(ConfigError::DuplicateColor(second.color.to_string()));
    }
    Ok([first, second])
}
