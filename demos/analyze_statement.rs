use chrono::Local;
use recurrent_payments::{AnalysisOptions, StatementBuilder, find_recurrent_payments};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let Some(file_path) = args.get(1) else {
        eprintln!("usage: analyze_statement <operations.csv>");
        std::process::exit(2);
    };

    let outcome = StatementBuilder::new().filename(file_path).parse()?;

    println!("Parsed {} transactions", outcome.transactions.len());
    if !outcome.is_valid() {
        println!("{} rows rejected, showing what was parsed anyway\n", outcome.errors.len());
    }

    let options = AnalysisOptions::default().with_only_active(false);
    let payments = find_recurrent_payments(&outcome.transactions, &options, Local::now().date_naive());

    println!("{}", serde_json::to_string_pretty(&payments)?);

    Ok(())
}
