use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgGroup};

use sokoban_search::config::Strategy;
use sokoban_search::formatter::comparison_table;
use sokoban_search::level::Level;
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .about("Solves Sokoban levels, comparing uninformed and informed search strategies")
        .arg(
            Arg::with_name("strategy")
                .short("-s")
                .long("--strategy")
                .takes_value(true)
                .possible_values(&Strategy::NAMES)
                .help("run a single strategy"),
        )
        .arg(
            Arg::with_name("all")
                .short("-a")
                .long("--all")
                .help("run every strategy and print a comparison table"),
        )
        .group(ArgGroup::with_name("mode").arg("strategy").arg("all"))
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let level = path.load_level().unwrap_or_else(|err| {
        println!("Can't load level {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}:", path);
    print!("{}", level);
    println!();

    if matches.is_present("all") {
        run_all(&level);
    } else if let Some(name) = matches.value_of("strategy") {
        // clap has already restricted the value to a known name
        let strategy = name.parse().unwrap_or_else(|err| {
            println!("{}", err);
            process::exit(1);
        });
        run_one(&level, strategy);
    } else {
        menu(&level);
    }
}

fn run_one(level: &Level, strategy: Strategy) {
    println!("{}:", strategy.label());

    let started = Instant::now();
    let report = level.solve(strategy, true).unwrap_or_else(|err| {
        println!("Search failed: {}", err);
        process::exit(1);
    });
    let elapsed = started.elapsed();

    match report.goal {
        Some(ref goal) => {
            println!("Solution: {}", goal.move_list);
            println!("Moves: {}", goal.moves);
            println!("Pushes: {}", goal.pushes);
            println!("Total cost: {}", goal.total_cost);
        }
        None => println!("No solution"),
    }
    print!("{}", report);
    println!("Run time: {:.6} seconds", elapsed.as_secs_f64());
}

fn run_all(level: &Level) {
    let mut runs = Vec::new();
    for &strategy in &Strategy::ALL {
        println!("Running {}...", strategy.label());
        let started = Instant::now();
        let report = level.solve(strategy, true).unwrap_or_else(|err| {
            println!("Search failed: {}", err);
            process::exit(1);
        });
        runs.push((strategy, report, started.elapsed()));
    }
    println!();
    comparison_table(&runs).printstd();
}

fn menu(level: &Level) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Menu:");
        println!("  1) Breadth-first search");
        println!("  2) Depth-first search");
        println!("  3) Uniform-cost search");
        println!("  4) Greedy best-first search");
        println!("  5) A* search");

        let choice = match read_choice(&mut lines) {
            Some(choice) => choice,
            None => return,
        };
        let strategy = match choice.as_str() {
            "1" => Strategy::Bfs,
            "2" => Strategy::Dfs,
            "3" => Strategy::Ucs,
            "4" | "5" => {
                print!("Choose heuristic 1 or 2: ");
                let _ = io::stdout().flush();
                let heuristic = match read_choice(&mut lines) {
                    Some(heuristic) => heuristic,
                    None => return,
                };
                match (choice.as_str(), heuristic.as_str()) {
                    ("4", "1") => Strategy::GreedyH1,
                    ("4", "2") => Strategy::GreedyH2,
                    ("5", "1") => Strategy::AStarH1,
                    ("5", "2") => Strategy::AStarH2,
                    _ => {
                        println!("Invalid heuristic choice.");
                        continue;
                    }
                }
            }
            _ => {
                println!("Invalid choice. Please choose again.");
                continue;
            }
        };

        run_one(level, strategy);

        print!("Run another search? [y/n]: ");
        let _ = io::stdout().flush();
        match read_choice(&mut lines) {
            Some(ref answer) if answer == "y" || answer == "Y" => continue,
            _ => return,
        }
    }
}

fn read_choice(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        // EOF or a broken pipe - stop asking
        _ => None,
    }
}
