// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod formatter;
pub mod grid;
pub mod level;
pub mod moves;
pub mod parser;
pub mod search;
pub mod state;

mod fs;

use std::error::Error;
use std::path::Path;

use crate::config::Strategy;
use crate::level::Level;
use crate::search::{SearchErr, SearchReport};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<T: AsRef<Path>> LoadLevel for T {
    /// Reads a puzzle file. The original file format carries a dimension
    /// hint as the first line - a bare integer - which is skipped; files
    /// without it load the same way.
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let contents = fs::read_file(self)?;

        let grid_text = match contents.find('\n') {
            Some(split) if contents[..split].trim().parse::<usize>().is_ok() => {
                &contents[split + 1..]
            }
            _ => &contents[..],
        };

        let level = grid_text.parse()?;
        Ok(level)
    }
}

pub trait Solve {
    fn solve(&self, strategy: Strategy, print_status: bool) -> Result<SearchReport, SearchErr>;
}
