//! # Command Dispatch
//!
//! The six commands of the interactive loop, plus their handler
//! modules. Tokens are case-insensitive; anything unrecognized falls
//! through to the "invalid command" path in `main`.

pub mod product;
pub mod profit;
pub mod sale;

/// The command surface of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddProduct,
    ListProducts,
    RegisterSale,
    ShowProfits,
    ShowHelp,
    Quit,
}

impl Command {
    /// Parses an operator-entered token. Case-insensitive; surrounding
    /// whitespace is ignored. Returns `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Command> {
        match raw.trim().to_lowercase().as_str() {
            "add-product" => Some(Command::AddProduct),
            "list-products" => Some(Command::ListProducts),
            "register-sale" => Some(Command::RegisterSale),
            "show-profits" => Some(Command::ShowProfits),
            "show-help" => Some(Command::ShowHelp),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}
