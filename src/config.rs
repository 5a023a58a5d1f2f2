use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The seven named search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    GreedyH1,
    GreedyH2,
    AStarH1,
    AStarH2,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Ucs,
        Strategy::GreedyH1,
        Strategy::GreedyH2,
        Strategy::AStarH1,
        Strategy::AStarH2,
    ];

    pub const NAMES: [&'static str; 7] = [
        "bfs",
        "dfs",
        "ucs",
        "greedy-h1",
        "greedy-h2",
        "astar-h1",
        "astar-h2",
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "Breadth-first search",
            Strategy::Dfs => "Depth-first search",
            Strategy::Ucs => "Uniform-cost search",
            Strategy::GreedyH1 => "Greedy best-first search (H1)",
            Strategy::GreedyH2 => "Greedy best-first search (H2)",
            Strategy::AStarH1 => "A* search (H1)",
            Strategy::AStarH2 => "A* search (H2)",
        }
    }

    /// How the successor generator accounts costs and scores children
    /// under this strategy.
    pub(crate) fn mode(self) -> Mode {
        match self {
            Strategy::Bfs | Strategy::Dfs => Mode {
                costed: false,
                heuristic: None,
                combined: false,
            },
            Strategy::Ucs => Mode {
                costed: true,
                heuristic: None,
                combined: false,
            },
            Strategy::GreedyH1 => Mode {
                costed: false,
                heuristic: Some(Heuristic::H1),
                combined: false,
            },
            Strategy::GreedyH2 => Mode {
                costed: false,
                heuristic: Some(Heuristic::H2),
                combined: false,
            },
            Strategy::AStarH1 => Mode {
                costed: true,
                heuristic: Some(Heuristic::H1),
                combined: true,
            },
            Strategy::AStarH2 => Mode {
                costed: true,
                heuristic: Some(Heuristic::H2),
                combined: true,
            },
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::Ucs => write!(f, "ucs"),
            Strategy::GreedyH1 => write!(f, "greedy-h1"),
            Strategy::GreedyH2 => write!(f, "greedy-h2"),
            Strategy::AStarH1 => write!(f, "astar-h1"),
            Strategy::AStarH2 => write!(f, "astar-h2"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Strategy::NAMES.iter().position(|&name| name == s) {
            Some(i) => Ok(Strategy::ALL[i]),
            None => Err(format!("unknown strategy: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Heuristic {
    H1,
    H2,
}

/// Mode passed to the successor generator: whether path cost is tracked
/// (moves cost 1, pushes 2), which heuristic scores children (if any) and
/// whether the score folds the path cost in (A*).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mode {
    pub(crate) costed: bool,
    pub(crate) heuristic: Option<Heuristic>,
    pub(crate) combined: bool,
}
