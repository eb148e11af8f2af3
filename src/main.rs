mod application;
mod domain;
mod infrastructure;
mod interfaces;

use anyhow::Result;
use console::style;

use crate::application::use_cases::generate_test_inserts::GenerateTestInsertsUseCase;
use crate::interfaces::cli::collect_generate_command;

fn main() -> Result<()> {
    env_logger::init();

    let command = collect_generate_command()?;
    let use_case = GenerateTestInsertsUseCase::default();

    eprintln!("{}", style("Generating test inserts...").cyan());
    let result = use_case.execute(command)?;

    eprintln!(
        "{} {} ({} rows, {} statements)",
        style("Generated SQL has been written to").green(),
        style(&result.output).bold(),
        result.row_count,
        result.statement_count,
    );
    Ok(())
}
