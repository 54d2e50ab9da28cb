//! # bookstore CLI
//!
//! Initializes a bookstore, runs it for a number of ticks and prints the
//! inventory, purchases, income and message log.

use std::path::PathBuf;

use bookstore_sim::core::report::StoreReport;
use bookstore_sim::{BookSpec, BookstoreSession, SimulationConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of customer agents
    #[arg(long, default_value_t = 6)]
    customers: usize,

    /// Number of employee agents
    #[arg(long, default_value_t = 2)]
    employees: usize,

    /// Ticks to run
    #[arg(long, default_value_t = 5)]
    steps: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Extra book as TITLE[:GENRE[:PRICE[:QTY]]] (repeatable)
    #[arg(long = "book", value_parser = parse_book)]
    books: Vec<BookSpec>,

    /// JSON file with a list of books to add
    #[arg(long = "books")]
    books_file: Option<PathBuf>,

    /// Start without the default catalogue
    #[arg(long)]
    no_defaults: bool,

    /// Write the ontology as RDF/XML to this path
    #[arg(long)]
    owl: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_book(raw: &str) -> Result<BookSpec, String> {
    let mut parts = raw.splitn(4, ':');
    let title = parts.next().unwrap_or_default().trim();
    let genre = parts.next().map(str::trim).filter(|g| !g.is_empty()).unwrap_or("Unknown");
    let price = match parts.next() {
        Some(p) => p.trim().parse::<f64>().map_err(|e| format!("bad price '{}': {}", p, e))?,
        None => 10.0,
    };
    let quantity = match parts.next() {
        Some(q) => q.trim().parse::<u32>().map_err(|e| format!("bad quantity '{}': {}", q, e))?,
        None => 5,
    };
    Ok(BookSpec::new(title, genre, price, quantity))
}

fn print_report(report: &StoreReport) {
    println!("Inventory (tick {}):", report.tick);
    for row in &report.inventory {
        let flag = if row.needs_restock { "  <- low" } else { "" };
        println!(
            "  {:<45} {:<16} {:>7} {:>4}{}",
            row.book, row.genre, row.price, row.quantity, flag
        );
    }

    println!("Purchases:");
    for row in &report.purchases {
        println!("  {}: {}", row.customer, row.purchases);
    }
    println!("Total income: ${:.2}", report.total_income);

    println!("Message log:");
    if report.messages.is_empty() {
        println!("  No messages yet.");
    }
    for msg in &report.messages {
        println!("  {}", msg);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let config = SimulationConfig::new().with_random_seed(cli.seed);
    let mut session = BookstoreSession::new(config);
    if cli.no_defaults {
        session = session.without_default_catalog();
    }

    if let Some(path) = &cli.books_file {
        let raw = std::fs::read_to_string(path)?;
        let books: Vec<BookSpec> = serde_json::from_str(&raw)?;
        for book in books {
            session.add_book(book)?;
        }
    }
    for book in cli.books {
        session.add_book(book)?;
    }

    session.initialize(cli.customers, cli.employees)?;
    session.run_steps(cli.steps)?;

    let report = session.report()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = &cli.owl {
        session.save_owl(path)?;
    }

    Ok(())
}
