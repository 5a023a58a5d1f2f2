use assert_cmd::prelude::*;
use difference::Changeset;
use std::process::Command;

/// Runs the binary and returns stdout with the (nondeterministic) run time
/// line chopped off.
fn run(args: &[&str]) -> String {
    let output = Command::main_binary()
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "binary failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    match stdout.find("Run time:") {
        Some(i) => stdout[..i].to_string(),
        None => stdout,
    }
}

fn assert_output(actual: &str, expected: &str) {
    if actual != expected {
        println!("{}", Changeset::new(expected, actual, "\n"));
        panic!("output mismatch");
    }
}

#[test]
fn run_bfs_corridor() {
    let expected = "\
Solving levels/corridor.txt:
######
#@$ .#
######

Breadth-first search:
Solution: right, right
Moves: 0
Pushes: 2
Total cost: 0
States generated: 4
Duplicates reached: 0
Frontier at termination: 1
States explored: 3
";

    assert_output(&run(&["-s", "bfs", "levels/corridor.txt"]), expected);
}

#[test]
fn run_ucs_corridor() {
    let expected = "\
Solving levels/corridor.txt:
######
#@$ .#
######

Uniform-cost search:
Solution: right, right
Moves: 0
Pushes: 2
Total cost: 4
States generated: 4
Duplicates reached: 1
Frontier at termination: 0
States explored: 4
";

    assert_output(&run(&["-s", "ucs", "levels/corridor.txt"]), expected);
}

#[test]
fn run_no_solution() {
    let expected = "\
Solving levels/corner-trap.txt:
######
#@$ ##
## .##
######

Depth-first search:
No solution
States generated: 5
Duplicates reached: 3
Frontier at termination: 0
States explored: 5
";

    assert_output(&run(&["-s", "dfs", "levels/corner-trap.txt"]), expected);
}

#[test]
fn run_all_prints_comparison_table() {
    let stdout = run(&["--all", "levels/detour.txt"]);
    for name in &[
        "bfs",
        "dfs",
        "ucs",
        "greedy-h1",
        "greedy-h2",
        "astar-h1",
        "astar-h2",
    ] {
        assert!(stdout.contains(name), "missing {} in:\n{}", name, stdout);
    }
    assert!(stdout.contains("Generated"));
    assert!(stdout.contains("Explored"));
}

#[test]
fn run_conflicting_flags() {
    // --strategy and --all exclude each other
    Command::main_binary()
        .unwrap()
        .arg("--strategy")
        .arg("bfs")
        .arg("--all")
        .arg("levels/corridor.txt")
        .assert()
        .failure()
        .stdout("");
}
