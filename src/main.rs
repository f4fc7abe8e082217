//! find_political_donors: aggregate political contribution records.
//!
//! Usage: find_political_donors <INPUT> <ZIP_OUTPUT> <DATE_OUTPUT>

use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::process;

use political_donors::commands::{DateReportCommand, ZipReportCommand};
use political_donors::record::Result;

#[derive(Parser)]
#[command(name = "find_political_donors")]
#[command(version)]
#[command(
    about = "Aggregate political contribution records by recipient/zip and recipient/date",
    long_about = None
)]
struct Cli {
    /// Input file of pipe-delimited itemized contribution records
    input: PathBuf,

    /// Output file for the report grouped by recipient and zip code
    zip_output: PathBuf,

    /// Output file for the report grouped by recipient and transaction date
    date_output: PathBuf,

    /// Print processing statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Each report opens its own reader: the input is read once per engine,
    // never shared as one cursor.
    let mut zip_out = File::create(&cli.zip_output)?;
    let zip_stats = ZipReportCommand::new().run(&cli.input, &mut zip_out)?;
    if cli.stats {
        eprintln!("Zip report stats: {}", zip_stats);
    }

    let mut date_out = File::create(&cli.date_output)?;
    let date_stats = DateReportCommand::new().run(&cli.input, &mut date_out)?;
    if cli.stats {
        eprintln!("Date report stats: {}", date_stats);
    }

    Ok(())
}
