//! # Shopkeep CLI Entry Point
//!
//! A single-user, interactive inventory and sales tracker.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Shopkeep CLI                                │
//! │                                                                     │
//! │  main.rs ────► parses options, sets up logging, loads both stores   │
//! │                                                                     │
//! │  loop: "Enter a command:"                                           │
//! │     add-product ───► commands::product::add                         │
//! │     list-products ─► commands::product::list                        │
//! │     register-sale ─► commands::sale::register                       │
//! │     show-profits ──► commands::profit::show                         │
//! │     show-help ─────► help text                                      │
//! │     quit ──────────► farewell, clean exit                           │
//! │     anything else ─► "invalid command" + help text                  │
//! │                                                                     │
//! │  In-memory Inventory + SalesLedger are the single source of truth;  │
//! │  every mutation is flushed to its backing file before the next      │
//! │  prompt is shown.                                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Parse command-line options (file locations, verbosity)
//! 2. Initialize tracing (logging to stderr, operator text to stdout)
//! 3. Load the inventory and sales files (absent files load as empty)
//! 4. Enter the command loop
//!
//! Interactive errors never terminate the process. The only fatal
//! errors are storage failures (permissions, disk full), which
//! propagate out of `main`.

mod commands;
mod output;
mod prompt;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shopkeep_store::Store;

use crate::commands::Command;
use crate::output::Output;

/// Shopkeep - track inventory and sales from your terminal
#[derive(Parser)]
#[command(name = "shopkeep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Location of the inventory data file
    #[arg(long, default_value = "products.txt")]
    inventory_file: PathBuf,

    /// Location of the sales data file
    #[arg(long, default_value = "sales.txt")]
    sales_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = Store::open(&cli.inventory_file, &cli.sales_file);
    let mut inventory = store
        .inventory()
        .load()
        .context("failed to load the inventory file")?;
    let mut ledger = store
        .sales()
        .load()
        .context("failed to load the sales file")?;

    debug!(
        products = inventory.len(),
        sales = ledger.len(),
        "Stores loaded"
    );

    let out = Output::new();
    out.help();

    loop {
        let raw = prompt::raw_line("Enter a command")?;

        match Command::parse(&raw) {
            Some(Command::AddProduct) => {
                commands::product::add(&mut inventory, &store, &out)?;
            }
            Some(Command::ListProducts) => {
                commands::product::list(&inventory, &out);
            }
            Some(Command::RegisterSale) => {
                commands::sale::register(&mut inventory, &mut ledger, &store, &out)?;
            }
            Some(Command::ShowProfits) => {
                commands::profit::show(&ledger, &inventory, &out);
            }
            Some(Command::ShowHelp) => {
                out.help();
            }
            Some(Command::Quit) => {
                out.info("Bye!");
                break;
            }
            None => {
                out.error("invalid command");
                out.help();
            }
        }
    }

    Ok(())
}

/// Sets up the tracing subscriber.
///
/// Logs go to stderr so they never interleave with the operator-facing
/// prompts and tables on stdout. `--verbose` forces debug level;
/// otherwise `RUST_LOG` decides (silent by default).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
