//! Demo runner - solves the bundled knapsack and subset-sum examples

mod error;
mod output;
mod samples;

use dp_solver::{
    DpTable, ItemSet, KnapsackProblem, Memoized, Recursive, RegistryBuilder, SolverRegistry,
    StrategyOutcome, Tabulated, subset_sum_exists,
};
use error::CliError;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let items = ItemSet::new(&samples::WEIGHTS, &samples::PROFITS)?;
    let problem = KnapsackProblem::new(items, samples::CAPACITY, samples::WEIGHTS.len())?;

    let registry = build_registry()?;
    let outcomes = registry.solve_all(&problem);
    report_strategies(&outcomes)?;

    let table = DpTable::build(problem.items(), problem.capacity(), problem.count())?;
    println!("{}", output::selection_line(&table.selected_items()));

    let exists = subset_sum_exists(
        &samples::SUBSET_VALUES,
        samples::SUBSET_VALUES.len(),
        samples::SUBSET_TARGET,
    )?;
    println!("{}", output::subset_sum_line(samples::SUBSET_TARGET, exists));

    Ok(())
}

/// Register the strategies in the order their lines are printed
fn build_registry() -> Result<SolverRegistry, CliError> {
    Ok(RegistryBuilder::new()
        .register::<Recursive>()?
        .register::<Memoized>()?
        .register::<Tabulated>()?
        .build())
}

/// Print each strategy's line and return the answer they all agree on
///
/// A failed strategy or a disagreement between strategies is an error.
fn report_strategies(outcomes: &[StrategyOutcome]) -> Result<u64, CliError> {
    output::print_outcomes(outcomes);
    Ok(SolverRegistry::agreed_answer(outcomes)?)
}
