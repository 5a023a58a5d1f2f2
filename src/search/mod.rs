mod expand;
mod frontier;
mod heuristic;
mod report;

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;
use separator::Separatable;

use crate::config::Strategy;
use crate::level::Level;
use crate::state::State;
use crate::Solve;

use self::expand::expand;
use self::frontier::Frontier;

pub use self::report::SearchReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErr {
    /// No player cell in a grid handed to the successor generator - always
    /// a caller bug, never a reachable state of a well-formed puzzle.
    MalformedState,
}

impl Display for SearchErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SearchErr::MalformedState => write!(f, "Malformed state - no player cell in grid"),
        }
    }
}

impl Error for SearchErr {}

impl Solve for Level {
    fn solve(&self, strategy: Strategy, print_status: bool) -> Result<SearchReport, SearchErr> {
        search(&State::initial(self.grid.clone()), strategy, print_status)
    }
}

/// The generic graph-search loop. The strategy decides the frontier's
/// insertion order and the generator's cost/heuristic accounting; everything
/// else - goal testing, fingerprint deduplication, statistics - is shared.
///
/// Sokoban state spaces are not depth-bounded, so the fingerprint set over
/// frontier and explored states is what guarantees termination on finite
/// grids. It only ever grows - memory is traded for dedup correctness.
pub fn search(
    initial: &State,
    strategy: Strategy,
    print_status: bool,
) -> Result<SearchReport, SearchErr> {
    debug!("searching with {}", strategy);

    let mode = strategy.mode();
    let mut frontier = Frontier::new(strategy);
    let mut seen = FnvHashSet::default();

    let mut generated = 1;
    let mut duplicates = 0;
    let mut explored = 0;

    seen.insert(initial.grid.clone());
    frontier.extend(vec![initial.clone()]);

    while let Some(current) = frontier.pop() {
        explored += 1;
        if print_status && explored % 5000 == 0 {
            println!("...explored {} states...", explored.separated_string());
        }

        if current.is_goal() {
            debug!("solved at depth {}", current.depth);
            return Ok(SearchReport::solved(
                current,
                generated,
                duplicates,
                frontier.len(),
                explored,
            ));
        }

        let mut fresh = Vec::new();
        for child in expand(&current, mode)? {
            if seen.contains(&child.grid) {
                duplicates += 1;
            } else {
                seen.insert(child.grid.clone());
                generated += 1;
                fresh.push(child);
            }
        }
        frontier.extend(fresh);
    }

    debug!("frontier exhausted");
    Ok(SearchReport::exhausted(generated, duplicates, explored))
}
