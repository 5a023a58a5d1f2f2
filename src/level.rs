use std::fmt::{self, Debug, Display, Formatter};

use crate::grid::Grid;

/// A parsed puzzle - the initial grid. The search turns it into the root
/// state; the level itself never changes.
#[derive(Clone)]
pub struct Level {
    pub grid: Grid,
}

impl Level {
    pub(crate) fn new(grid: Grid) -> Self {
        Level { grid }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
