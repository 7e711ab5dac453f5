//! Output formatting for solver results

use dp_solver::StrategyOutcome;

/// Format one strategy's labeled result line
pub fn strategy_line(outcome: &StrategyOutcome) -> String {
    match &outcome.result {
        Ok(result) => format!("{}: {}", outcome.label, result.answer),
        Err(e) => format!("{}: Error - {}", outcome.label, e),
    }
}

/// Format the indices of the items an optimal packing uses
pub fn selection_line(selected: &[usize]) -> String {
    format!("Selected items: {:?}", selected)
}

/// Format the subset-sum verdict
pub fn subset_sum_line(target: u64, exists: bool) -> String {
    format!("Subset sum {} exists: {}", target, exists)
}

/// Print successful strategy lines to stdout and failed ones to stderr
pub fn print_outcomes(outcomes: &[StrategyOutcome]) {
    for outcome in outcomes {
        if outcome.result.is_ok() {
            println!("{}", strategy_line(outcome));
        } else {
            eprintln!("{}", strategy_line(outcome));
        }
    }
}
