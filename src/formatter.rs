use std::time::Duration;

use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::config::Strategy;
use crate::search::SearchReport;

/// One comparison table over every strategy's run - solution shape, the
/// four search statistics and wall-clock time side by side.
pub fn comparison_table(runs: &[(Strategy, SearchReport, Duration)]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(
        [
            "Strategy",
            "Depth",
            "Moves",
            "Pushes",
            "Cost",
            "Generated",
            "Duplicates",
            "Frontier",
            "Explored",
            "Time [s]",
        ]
        .iter()
        .map(|header| Cell::new(header))
        .collect(),
    ));

    for (strategy, report, duration) in runs {
        let (depth, moves, pushes, cost) = match report.goal {
            Some(ref goal) => (
                goal.depth.to_string(),
                goal.moves.to_string(),
                goal.pushes.to_string(),
                goal.total_cost.to_string(),
            ),
            None => {
                let na = "-".to_string();
                (na.clone(), na.clone(), na.clone(), na)
            }
        };
        table.add_row(Row::new(vec![
            Cell::new(&strategy.to_string()),
            Cell::new(&depth),
            Cell::new(&moves),
            Cell::new(&pushes),
            Cell::new(&cost),
            Cell::new(&report.generated.separated_string()),
            Cell::new(&report.duplicates.separated_string()),
            Cell::new(&report.frontier.separated_string()),
            Cell::new(&report.explored.separated_string()),
            Cell::new(&format!("{:.3}", duration.as_secs_f64())),
        ]));
    }

    table
}
