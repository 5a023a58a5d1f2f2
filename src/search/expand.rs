use crate::config::{Heuristic, Mode};
use crate::data::{Cell, Dir, Pos, DIRECTIONS};
use crate::state::State;

use super::heuristic::{h1, h2};
use super::SearchErr;

const MOVE_COST: i32 = 1;
const PUSH_COST: i32 = 2;

/// Produces every state reachable from `state` by one legal player move or
/// push, one candidate per direction in up, right, down, left order.
///
/// Cost and heuristic bookkeeping on the children follows `mode`. A grid
/// without a player cell is a caller bug and is surfaced as an error rather
/// than an empty expansion.
pub(crate) fn expand(state: &State, mode: Mode) -> Result<Vec<State>, SearchErr> {
    let player = state.grid.find_player().ok_or(SearchErr::MalformedState)?;

    let mut new_states = Vec::new();
    for &dir in &DIRECTIONS {
        if let Some(new_state) = step(state, player, dir, mode) {
            new_states.push(new_state);
        }
    }
    Ok(new_states)
}

/// One move or push attempt in direction `dir`; `None` when the grid
/// geometry makes it illegal.
fn step(state: &State, player: Pos, dir: Dir, mode: Mode) -> Option<State> {
    let target_pos = player + dir;
    let target = state.grid.at(target_pos);

    let is_push = match target {
        Cell::Wall => return None,
        Cell::Floor | Cell::Goal => false,
        Cell::Box | Cell::BoxOnGoal => {
            let beyond = state.grid.at(target_pos + dir);
            match beyond {
                Cell::Floor | Cell::Goal => true,
                // wall or another box behind it
                _ => return None,
            }
        }
        // a second player - never produced by legal transitions
        Cell::Player | Cell::PlayerOnGoal => return None,
    };

    let mut grid = state.grid.clone();
    if is_push {
        let beyond_pos = target_pos + dir;
        grid.set(beyond_pos, grid.at(beyond_pos).with_box());
    }
    grid.set(target_pos, target.with_player());
    grid.set(player, state.grid.at(player).without_player());

    let mut new_state = State {
        grid,
        move_list: state.move_list.clone(),
        depth: state.depth + 1,
        moves: state.moves,
        pushes: state.pushes,
        total_cost: state.total_cost,
        hscore: 0,
    };
    new_state.move_list.add(dir);
    if is_push {
        new_state.pushes += 1;
    } else {
        new_state.moves += 1;
    }
    if mode.costed {
        new_state.total_cost += if is_push { PUSH_COST } else { MOVE_COST };
    }
    if let Some(heuristic) = mode.heuristic {
        new_state.hscore = match heuristic {
            Heuristic::H1 => h1(&new_state),
            Heuristic::H2 => h2(&new_state),
        };
        if mode.combined {
            new_state.hscore += new_state.total_cost;
        }
    }

    Some(new_state)
}

#[cfg(test)]
mod tests {
    use crate::config::Strategy;
    use crate::data::Cell;
    use crate::level::Level;

    use super::*;

    fn initial(level: &str) -> State {
        let level: Level = level.parse().unwrap();
        State::initial(level.grid)
    }

    fn expand_with(level: &str, strategy: Strategy) -> Vec<State> {
        expand(&initial(level), strategy.mode()).unwrap()
    }

    fn count_cells(state: &State, pred: fn(Cell) -> bool) -> usize {
        state.grid.cells().filter(|&(_, cell)| pred(cell)).count()
    }

    #[test]
    fn no_player_is_an_error() {
        // the parser refuses player-less grids, so build one by hand
        let grid = crate::grid::Grid::new(vec![
            vec![Cell::Wall, Cell::Wall, Cell::Wall],
            vec![Cell::Wall, Cell::Floor, Cell::Wall],
            vec![Cell::Wall, Cell::Wall, Cell::Wall],
        ]);
        let state = State::initial(grid);
        assert_eq!(
            expand(&state, Strategy::Bfs.mode()).unwrap_err(),
            SearchErr::MalformedState
        );
    }

    #[test]
    fn moves_in_all_open_directions() {
        let children = expand_with(
            r"
#####
#   #
# @ #
#   #
#####
",
            Strategy::Bfs,
        );
        assert_eq!(children.len(), 4);
        // expansion order is up, right, down, left
        assert_eq!(children[0].move_list.to_string(), "up");
        assert_eq!(children[1].move_list.to_string(), "right");
        assert_eq!(children[2].move_list.to_string(), "down");
        assert_eq!(children[3].move_list.to_string(), "left");
        for child in &children {
            assert_eq!(child.depth, 1);
            assert_eq!(child.moves, 1);
            assert_eq!(child.pushes, 0);
        }
    }

    #[test]
    fn walls_and_blocked_pushes_prune() {
        // up: wall, right: box against wall, down: wall, left: box
        // against box - no successors at all
        let children = expand_with(
            r"
#######
#$$@$##
#######
",
            Strategy::Bfs,
        );
        assert_eq!(children.len(), 0);
    }

    #[test]
    fn push_onto_floor_and_goal() {
        let children = expand_with(
            r"
#####
#   #
# $ #
# @ #
# $ #
# . #
#####
",
            Strategy::Bfs,
        );
        assert_eq!(children.len(), 4);

        // up: push onto floor
        assert_eq!(children[0].pushes, 1);
        assert_eq!(
            children[0].grid.encode(),
            "\
#####
# $ #
# @ #
#   #
# $ #
# . #
#####
"
        );

        // down: push onto the goal
        assert_eq!(children[2].pushes, 1);
        assert_eq!(
            children[2].grid.encode(),
            "\
#####
#   #
# $ #
#   #
# @ #
# * #
#####
"
        );

        // right and left are plain moves
        assert_eq!(children[1].moves, 1);
        assert_eq!(children[3].moves, 1);
    }

    #[test]
    fn push_marks_box_on_goal() {
        let children = expand_with(
            r"
######
#@$. #
######
",
            Strategy::Bfs,
        );
        // the push right is the only legal transition
        assert_eq!(children.len(), 1);
        let child = &children[0];
        assert_eq!(child.pushes, 1);
        assert_eq!(child.moves, 0);
        assert_eq!(
            child.grid.encode(),
            "\
######
# @* #
######
"
        );
    }

    #[test]
    fn player_leaves_goal_behind() {
        let children = expand_with(
            r"
#####
#+$ #
#####
",
            Strategy::Bfs,
        );
        assert_eq!(children.len(), 1);
        assert_eq!(
            children[0].grid.encode(),
            "\
#####
#.@$#
#####
"
        );
    }

    #[test]
    fn conservation_and_depth_additivity() {
        let root = initial(
            r"
#######
#     #
# $ . #
#@    #
#######
",
        );
        let boxes = count_cells(&root, Cell::is_box);
        let goals = count_cells(&root, Cell::is_goal);

        let mut layer = vec![root];
        for depth in 1..=3 {
            let mut next = Vec::new();
            for state in &layer {
                for child in expand(state, Strategy::Bfs.mode()).unwrap() {
                    assert_eq!(child.depth, state.depth + 1);
                    assert_eq!(child.depth, depth);
                    assert_eq!(child.moves + child.pushes, child.depth);
                    assert_eq!(count_cells(&child, Cell::is_box), boxes);
                    assert_eq!(count_cells(&child, Cell::is_goal), goals);
                    next.push(child);
                }
            }
            layer = next;
        }
    }

    #[test]
    fn fingerprints_are_deterministic() {
        let root = initial(
            r"
#######
#     #
# $ . #
#@    #
#######
",
        );
        let first: Vec<_> = expand(&root, Strategy::AStarH1.mode())
            .unwrap()
            .iter()
            .map(|s| (s.grid.encode(), s.total_cost, s.hscore))
            .collect();
        let second: Vec<_> = expand(&root, Strategy::AStarH1.mode())
            .unwrap()
            .iter()
            .map(|s| (s.grid.encode(), s.total_cost, s.hscore))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn cost_accounting_per_mode() {
        let level = r"
######
#@$ .#
######
";
        // pushes are free of cost tracking for uninformed breadth/depth
        let children = expand_with(level, Strategy::Bfs);
        assert_eq!(children[0].total_cost, 0);
        assert_eq!(children[0].hscore, 0);

        // ucs: push costs 2
        let children = expand_with(level, Strategy::Ucs);
        assert_eq!(children[0].total_cost, 2);
        assert_eq!(children[0].hscore, 0);

        // greedy: raw heuristic, no cost
        let children = expand_with(level, Strategy::GreedyH1);
        assert_eq!(children[0].total_cost, 0);
        assert_eq!(children[0].hscore, 2);

        // a*: heuristic plus cost
        let children = expand_with(level, Strategy::AStarH1);
        assert_eq!(children[0].total_cost, 2);
        assert_eq!(children[0].hscore, 4);
    }

    #[test]
    fn move_cost_is_one() {
        let level = r"
######
#@ $.#
######
";
        let children = expand_with(level, Strategy::Ucs);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].moves, 1);
        assert_eq!(children[0].total_cost, 1);
    }
}
