use crate::data::{Cell, Dir, Pos, DIRECTIONS};
use crate::state::State;

/// Reward for a box already sitting on a goal. Large enough to dominate any
/// distance sum on realistic grids; also the seed for the player-to-box
/// distance so a state with no loose box cancels exactly one bonus.
const ON_GOAL_BONUS: i32 = 1000;

/// Penalty for a box in a position it can never be pushed out of.
const DEADLOCK_PENALTY: i32 = 1000;

/// Distance heuristic. Sums the Manhattan distance over every (box, goal)
/// pair - deliberately not an optimal assignment, so not admissible - adds
/// the distance from the player to its nearest box and subtracts a large
/// bonus per box already on a goal. Lower is more promising.
pub(crate) fn h1(state: &State) -> i32 {
    let mut boxes = Vec::new();
    let mut goals = Vec::new();
    let mut player = None;
    let mut score = 0;

    for (pos, cell) in state.grid.cells() {
        match cell {
            Cell::Player => player = Some(pos),
            Cell::PlayerOnGoal => {
                // the goal under the player still needs a box
                player = Some(pos);
                goals.push(pos);
            }
            Cell::Box => boxes.push(pos),
            Cell::Goal => goals.push(pos),
            Cell::BoxOnGoal => score -= ON_GOAL_BONUS,
            _ => {}
        }
    }

    for &box_pos in &boxes {
        for &goal_pos in &goals {
            score += box_pos.dist(goal_pos);
        }
    }

    let mut closest_box = ON_GOAL_BONUS;
    if let Some(player_pos) = player {
        for &box_pos in &boxes {
            let dist = player_pos.dist(box_pos);
            if dist < closest_box {
                closest_box = dist;
            }
        }
    }
    score + closest_box
}

/// Deadlock heuristic. Computes no distances at all - it only penalizes
/// boxes that can never reach a goal again: boxes wedged into a goal-less
/// corner and boxes pinned against an unbroken wall that ends in corners on
/// both sides with no goal along it. Boxes already on goals are ignored.
pub(crate) fn h2(state: &State) -> i32 {
    let mut score = 0;

    for (box_pos, cell) in state.grid.cells() {
        if cell != Cell::Box {
            continue;
        }

        let walls: Vec<Dir> = DIRECTIONS
            .iter()
            .cloned()
            .filter(|&dir| state.grid.is_wall(box_pos + dir))
            .collect();

        let corner = walls
            .iter()
            .any(|&dir| walls.contains(&dir.perpendicular()[0]) || walls.contains(&dir.perpendicular()[1]));
        if corner {
            score += DEADLOCK_PENALTY;
            continue;
        }

        // each flanking wall is judged on its own
        for &wall_dir in &walls {
            if wall_run_dead(state, box_pos, wall_dir) {
                score += DEADLOCK_PENALTY;
            }
        }
    }

    score
}

/// Scans outward from the box in both directions parallel to the wall at
/// `wall_dir`. The run is dead only if both scans reach a closing corner
/// without first meeting a goal cell or a break in the wall. Boxes and the
/// player along the run count as accessible - they can move away.
fn wall_run_dead(state: &State, box_pos: Pos, wall_dir: Dir) -> bool {
    for &scan_dir in &wall_dir.perpendicular() {
        let mut pos = box_pos + scan_dir;
        loop {
            let cell = match state.grid.get(pos) {
                Some(cell) => cell,
                // ran off a short row - there is no wall here to pin the box
                None => return false,
            };
            if cell.is_goal() {
                return false;
            }
            if !state.grid.is_wall(pos + wall_dir) {
                return false;
            }
            if cell == Cell::Wall {
                // closing corner on this side
                break;
            }
            pos = pos + scan_dir;
        }
    }
    true
}
