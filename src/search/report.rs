use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

/// The outcome of one search invocation. `goal` is `None` when the frontier
/// was exhausted without reaching a goal - a normal terminal outcome, not an
/// error.
pub struct SearchReport {
    pub goal: Option<State>,
    /// Distinct states created, the root included.
    pub generated: usize,
    /// Candidate children discarded because their fingerprint was already
    /// in the frontier or the explored set.
    pub duplicates: usize,
    /// Frontier length at the moment the search stopped.
    pub frontier: usize,
    /// States popped and expanded, the goal state included.
    pub explored: usize,
}

impl SearchReport {
    pub(crate) fn solved(
        goal: State,
        generated: usize,
        duplicates: usize,
        frontier: usize,
        explored: usize,
    ) -> Self {
        SearchReport {
            goal: Some(goal),
            generated,
            duplicates,
            frontier,
            explored,
        }
    }

    pub(crate) fn exhausted(generated: usize, duplicates: usize, explored: usize) -> Self {
        SearchReport {
            goal: None,
            generated,
            duplicates,
            frontier: 0,
            explored,
        }
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States generated: {}", self.generated.separated_string())?;
        writeln!(
            f,
            "Duplicates reached: {}",
            self.duplicates.separated_string()
        )?;
        writeln!(
            f,
            "Frontier at termination: {}",
            self.frontier.separated_string()
        )?;
        writeln!(f, "States explored: {}", self.explored.separated_string())
    }
}

impl Debug for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.goal {
            None => writeln!(f, "No solution")?,
            Some(ref goal) => writeln!(
                f,
                "Solved at depth {} ({} moves, {} pushes, cost {})",
                goal.depth, goal.moves, goal.pushes, goal.total_cost
            )?,
        }
        write!(f, "{}", self)
    }
}
