//! # Output Formatting
//!
//! Operator-facing output for the CLI. Everything here writes to
//! stdout/stderr directly; structured logs go through `tracing`
//! elsewhere and never mix with this.

use console::style;

use shopkeep_core::StockListing;

/// Output handler for CLI messages.
#[derive(Debug, Clone, Default)]
pub struct Output;

impl Output {
    /// Creates a new output handler.
    pub fn new() -> Self {
        Output
    }

    /// Prints an info message.
    pub fn info(&self, msg: &str) {
        println!("{msg}");
    }

    /// Prints a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    /// Prints a warning message.
    pub fn warn(&self, msg: &str) {
        println!("{} {}", style("⚠").yellow(), msg);
    }

    /// Prints an error notice. Interactive errors are conversational,
    /// so they go to stdout with the rest of the dialogue.
    pub fn error(&self, msg: &str) {
        println!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Prints the command reference.
    pub fn help(&self) {
        println!("Available commands:");
        println!("  {} - add stock for a product", style("add-product").bold());
        println!("  {} - list products in stock", style("list-products").bold());
        println!("  {} - record a completed sale", style("register-sale").bold());
        println!("  {} - show gross and net profits", style("show-profits").bold());
        println!("  {} - show this command reference", style("show-help").bold());
        println!("  {} - exit the program", style("quit").bold());
    }

    /// Renders the stock listing as a box-drawn table.
    ///
    /// ## Shape
    /// ```text
    /// ╒═════════╤══════════╤═══════╕
    /// │ PRODUCT │ QUANTITY │ PRICE │
    /// ╞═════════╪══════════╪═══════╡
    /// │ Widget  │ 10       │ €5.00 │
    /// ╘═════════╧══════════╧═══════╛
    /// ```
    pub fn stock_table(&self, listing: &[StockListing]) {
        const HEADERS: [&str; 3] = ["PRODUCT", "QUANTITY", "PRICE"];

        let rows: Vec<[String; 3]> = listing
            .iter()
            .map(|entry| {
                [
                    entry.name.clone(),
                    entry.quantity.to_string(),
                    entry.sale_price.to_string(),
                ]
            })
            .collect();

        // Column widths fit the widest cell, headers included
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        println!("{}", rule(&widths, '╒', '╤', '╕'));
        print_row(&widths, &HEADERS.map(String::from));
        println!("{}", rule(&widths, '╞', '╪', '╡'));
        for row in &rows {
            print_row(&widths, row);
        }
        println!("{}", rule(&widths, '╘', '╧', '╛'));
    }
}

fn rule(widths: &[usize; 3], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "═".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&mid.to_string()))
}

fn print_row(widths: &[usize; 3], cells: &[String; 3]) {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells.iter())
        .map(|(&width, cell)| format!(" {cell:<width$} "))
        .collect();
    println!("│{}│", padded.join("│"));
}
