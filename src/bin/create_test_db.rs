use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use billed_rs::bill::{BillRecord, create_bill_table, insert_bill, sample_bills};

/// A utility for creating a test database for the billed_rs web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// A JSON file with an array of bills to insert instead of the sample bills.
    #[arg(long)]
    bills_path: Option<String>,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let bills: Vec<BillRecord> = match &args.bills_path {
        Some(bills_path) => serde_json::from_str(&fs::read_to_string(bills_path)?)?,
        None => sample_bills(),
    };

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    create_bill_table(&conn)?;

    println!("Inserting {} bills...", bills.len());

    for bill in &bills {
        insert_bill(bill, &conn)?;
    }

    println!("Success!");

    Ok(())
}
