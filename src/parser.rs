use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Cell;
use crate::grid::Grid;
use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    NoPlayer,
    MultiplePlayers,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses (a subset of) the XSB format described
/// [here](http://www.sokobano.de/wiki/index.php?title=Level_format).
///
/// Row lengths are kept as-is. The walled border is an input invariant and
/// is not validated.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily,
    // but only newlines - trailing spaces are real floor cells
    let level = level.trim_matches('\n');

    let mut rows = Vec::new();
    let mut player_found = false;
    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let cell = Cell::from_char(cur_char).ok_or(ParserErr::Pos(r, c))?;
            if cell.is_player() {
                if player_found {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_found = true;
            }
            row.push(cell);
        }
        rows.push(row);
    }

    if !player_found {
        return Err(ParserErr::NoPlayer);
    }

    Ok(Level::new(Grid::new(rows)))
}
