use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Cell, Pos};

/// A row-major cell matrix. Rows keep the lengths they were parsed with -
/// no padding - so the textual encoding is also the canonical fingerprint:
/// two grids are equal iff their encodings are byte-identical.
///
/// Indexing outside the declared rows is a precondition violation; the
/// playable area is assumed to be surrounded by walls (a puzzle-file
/// invariant, not validated here).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid(Vec<Vec<Cell>>);

impl Grid {
    pub(crate) fn new(rows: Vec<Vec<Cell>>) -> Grid {
        Grid(rows)
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Unchecked lookup - only valid inside the walled border.
    pub(crate) fn at(&self, pos: Pos) -> Cell {
        self.0[pos.r as usize][pos.c as usize]
    }

    /// Checked lookup for probes that may legitimately leave short rows.
    pub(crate) fn get(&self, pos: Pos) -> Option<Cell> {
        if pos.r < 0 || pos.c < 0 {
            return None;
        }
        self.0
            .get(pos.r as usize)
            .and_then(|row| row.get(pos.c as usize))
            .copied()
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.0[pos.r as usize][pos.c as usize] = cell;
    }

    pub(crate) fn is_wall(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Cell::Wall)
    }

    pub(crate) fn find_player(&self) -> Option<Pos> {
        for (r, row) in self.0.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_player() {
                    return Some(Pos::new(r as i32, c as i32));
                }
            }
        }
        None
    }

    /// Iterate over all cells with their positions, row-major.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.0.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &cell)| (Pos::new(r as i32, c as i32), cell))
        })
    }

    /// The canonical encoding - rows newline-terminated.
    pub fn encode(&self) -> String {
        let mut ret = String::new();
        for row in &self.0 {
            for &cell in row {
                ret.push(cell.to_char());
            }
            ret.push('\n');
        }
        ret
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
