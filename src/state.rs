use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::Cell;
use crate::grid::Grid;
use crate::moves::Moves;

/// One configuration of the puzzle plus the bookkeeping describing how the
/// search reached it. States are pure values - the successor generator
/// creates them and nothing mutates them afterwards.
///
/// Equality and hashing consider the grid only (the fingerprint); two states
/// reached by different paths are the same state.
#[derive(Clone)]
pub struct State {
    pub grid: Grid,
    pub move_list: Moves,
    /// Transitions from the root; always `moves + pushes`.
    pub depth: u32,
    pub moves: u32,
    pub pushes: u32,
    /// Accumulated path cost; meaningful only for cost-sensitive strategies.
    pub total_cost: i32,
    /// Heuristic evaluation; for A* strategies includes `total_cost`.
    pub hscore: i32,
}

impl State {
    /// The root state - all counters zero, heuristic never evaluated.
    pub fn initial(grid: Grid) -> State {
        State {
            grid,
            move_list: Moves::default(),
            depth: 0,
            moves: 0,
            pushes: 0,
            total_cost: 0,
            hscore: 0,
        }
    }

    /// True iff every goal is exactly covered by a box: no unfilled goal,
    /// no player standing on a goal and no box off a goal.
    pub fn is_goal(&self) -> bool {
        self.grid.cells().all(|(_, cell)| match cell {
            Cell::Goal | Cell::PlayerOnGoal | Cell::Box => false,
            _ => true,
        })
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.grid.hash(hasher);
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "depth {} (moves {}, pushes {}), cost {}, hscore {}",
            self.depth, self.moves, self.pushes, self.total_cost, self.hscore
        )?;
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    use super::*;

    fn state(text: &str) -> State {
        let level: Level = text.parse().unwrap();
        State::initial(level.grid)
    }

    #[test]
    fn goal_state() {
        assert!(state(
            "\
#####
#@ *#
#####
"
        )
        .is_goal());
    }

    #[test]
    fn box_off_goal_is_not_goal() {
        assert!(!state(
            "\
######
#@$.*#
######
"
        )
        .is_goal());
    }

    #[test]
    fn unfilled_goal_is_not_goal() {
        assert!(!state(
            "\
#####
#@ .#
#####
"
        )
        .is_goal());
    }

    #[test]
    fn player_on_goal_is_not_goal() {
        assert!(!state(
            "\
#####
#+ *#
#####
"
        )
        .is_goal());
    }

    #[test]
    fn equality_ignores_path() {
        let a = state(
            "\
#####
#@$.#
#####
",
        );
        let mut b = a.clone();
        b.depth = 7;
        b.total_cost = 3;
        assert_eq!(a, b);
    }
}
