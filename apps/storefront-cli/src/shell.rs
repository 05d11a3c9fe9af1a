//! # Shell
//!
//! Line-oriented storefront: one command per line in, rendered text out.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line ──► Command::from_str ──► execute ──► commands::* ──► DTO  │
//! │                      │                   │                        │     │
//! │                      ▼                   ▼                        ▼     │
//! │               UNKNOWN_COMMAND        ApiError              write_*()   │
//! │                      └───────────────────┴──► "Error: ..." line         │
//! │                                                                         │
//! │  `quit` or end of input ends the loop.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::commands::cart::{self, CartResponse};
use crate::commands::catalog::{self, ProductDto};
use crate::commands::checkout::{self, CheckoutResponse, ReceiptResponse};
use crate::error::{ApiError, ErrorCode};
use crate::state::{AppState, BankDetails, ConfigState};
use storefront_core::{CheckoutStatus, Money};

pub const HELP: &str = "\
Commands:
  products [query]     List products, optionally filtered by title
  add <id>             Add one unit of a product to the cart
  remove <id>          Remove a product from the cart
  qty <id> <n>         Set the quantity of a cart line (n >= 1)
  inc <id>             Increase a cart line by one
  dec <id>             Decrease a cart line by one
  cart                 Show the cart
  open                 Open the checkout panel
  close                Close the checkout panel
  status               Show the checkout status without changing it
  method <cod|bank|card>
                       Choose the payment method
  pay                  Pay now
  confirm              Confirm a bank transfer
  new                  Start a new order
  state                Print the session as JSON
  help                 Show this help
  quit                 Leave the store";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products(Option<String>),
    Add(String),
    Remove(String),
    Quantity(String, i64),
    Increment(String),
    Decrement(String),
    Cart,
    Open,
    Close,
    Status,
    Method(String),
    Pay,
    Confirm,
    New,
    State,
    Help,
    Quit,
}

fn required<'a>(arg: Option<&'a str>, usage: &str) -> Result<&'a str, ApiError> {
    arg.ok_or_else(|| ApiError::validation(format!("Usage: {}", usage)))
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or("").to_lowercase();
        let rest: Vec<&str> = words.collect();
        let first = rest.first().copied();

        let command = match name.as_str() {
            "products" | "ls" => {
                let query = rest.join(" ");
                Command::Products((!query.is_empty()).then_some(query))
            }
            "add" => Command::Add(required(first, "add <id>")?.to_string()),
            "remove" | "rm" => Command::Remove(required(first, "remove <id>")?.to_string()),
            "qty" => {
                let id = required(first, "qty <id> <n>")?;
                let raw = required(rest.get(1).copied(), "qty <id> <n>")?;
                let quantity = raw.parse::<i64>().map_err(|_| {
                    ApiError::validation(format!("Quantity must be a whole number, got '{}'", raw))
                })?;
                Command::Quantity(id.to_string(), quantity)
            }
            "inc" | "+" => Command::Increment(required(first, "inc <id>")?.to_string()),
            "dec" | "-" => Command::Decrement(required(first, "dec <id>")?.to_string()),
            "cart" => Command::Cart,
            "open" | "checkout" => Command::Open,
            "close" => Command::Close,
            "status" => Command::Status,
            "method" => {
                required(first, "method <cod|bank|card>")?;
                Command::Method(rest.join(" "))
            }
            "pay" => Command::Pay,
            "confirm" => Command::Confirm,
            "new" | "reset" => Command::New,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ApiError::new(
                    ErrorCode::UnknownCommand,
                    format!("Unknown command '{}'. Type 'help' for the list of commands.", other),
                ))
            }
        };

        Ok(command)
    }
}

/// Failures inside one shell step.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Shown to the user; the loop continues.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Output closed or input unreadable; the loop stops.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// Loop
// =============================================================================

/// Runs the shell until `quit` or end of input.
pub fn run_shell<R, W>(app: &mut AppState, input: R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Welcome to {}! {} products available. Type 'help' for commands.",
        app.config.store_name,
        app.catalog.len()
    )?;
    if app.catalog.is_empty() {
        writeln!(out, "The catalog could not be loaded; the shelves are empty.")?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => execute(app, command, out),
            Err(e) => Err(ShellError::Api(e)),
        };

        match result {
            Ok(()) => {}
            Err(ShellError::Api(e)) => writeln!(out, "Error: {}", e)?,
            Err(ShellError::Io(e)) => return Err(e),
        }
        out.flush()?;
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

/// Executes one command against the app state.
pub fn execute<W: Write>(app: &mut AppState, command: Command, out: &mut W) -> Result<(), ShellError> {
    let config = &app.config;
    let state = &mut app.session;

    match command {
        Command::Products(query) => {
            let products = catalog::list_products(&app.catalog, query.as_deref());
            write_products(out, config, &products)?;
        }
        Command::Add(id) => {
            let cart = cart::add_to_cart(&app.catalog, state, &id)?;
            write_cart(out, config, &cart)?;
        }
        Command::Remove(id) => write_cart(out, config, &cart::remove_from_cart(state, &id)?)?,
        Command::Quantity(id, n) => {
            write_cart(out, config, &cart::update_cart_item(state, &id, n)?)?
        }
        Command::Increment(id) => write_cart(out, config, &cart::increment_item(state, &id)?)?,
        Command::Decrement(id) => write_cart(out, config, &cart::decrement_item(state, &id)?)?,
        Command::Cart => write_cart(out, config, &cart::get_cart(state))?,
        Command::Open => write_checkout(out, config, &checkout::open_checkout(state, config))?,
        Command::Close => write_checkout(out, config, &checkout::close_checkout(state, config))?,
        Command::Status => write_checkout(out, config, &checkout::get_checkout(state, config))?,
        Command::Method(name) => {
            write_checkout(out, config, &checkout::select_method(state, config, &name)?)?
        }
        Command::Pay => write_checkout(out, config, &checkout::pay(state, config)?)?,
        Command::Confirm => write_checkout(out, config, &checkout::confirm_payment(state, config)?)?,
        Command::New => {
            writeln!(out, "Started a new order.")?;
            write_checkout(out, config, &checkout::new_order(state, config))?;
        }
        Command::State => {
            let json = serde_json::to_string_pretty(&checkout::snapshot(state))
                .map_err(|e| ApiError::internal(e.to_string()))?;
            writeln!(out, "{}", json)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }

    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

fn money(config: &ConfigState, cents: i64) -> String {
    config.format_currency(Money::from_cents(cents))
}

fn write_products<W: Write>(out: &mut W, config: &ConfigState, products: &[ProductDto]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products found.");
    }

    writeln!(out, "Products ({}):", products.len())?;
    for product in products {
        writeln!(
            out,
            "  [{}] {} - {}",
            product.id,
            product.title,
            money(config, product.price_cents)
        )?;
    }
    Ok(())
}

fn write_cart<W: Write>(out: &mut W, config: &ConfigState, cart: &CartResponse) -> io::Result<()> {
    let totals = &cart.totals;

    if cart.items.is_empty() {
        writeln!(out, "Your cart is empty.")?;
    } else {
        writeln!(
            out,
            "Cart ({} {}, {} units):",
            totals.item_count,
            if totals.item_count == 1 { "item" } else { "items" },
            totals.total_quantity
        )?;
        for line in &cart.items {
            writeln!(
                out,
                "  [{}] {} x{} @ {} = {}",
                line.id,
                line.title,
                line.quantity,
                money(config, line.unit_price_cents),
                money(config, line.line_total_cents)
            )?;
        }
    }

    writeln!(out, "Total: {}", money(config, totals.total_cents))
}

fn write_checkout<W: Write>(
    out: &mut W,
    config: &ConfigState,
    checkout: &CheckoutResponse,
) -> io::Result<()> {
    writeln!(
        out,
        "Checkout {}. Status: {}",
        if checkout.panel_open { "open" } else { "closed" },
        checkout.status
    )?;
    writeln!(out, "Payment method: {}", checkout.method)?;
    writeln!(out, "Total: {}", money(config, checkout.total_cents))?;

    if let Some(bank) = &checkout.bank_details {
        write_bank_details(out, config, bank, checkout.total_cents)?;
    }
    if let Some(receipt) = &checkout.receipt {
        write_receipt(out, config, receipt)?;
    } else if checkout.status == CheckoutStatus::Completed {
        writeln!(out, "Order complete. Type 'new' to start another order.")?;
    }
    Ok(())
}

fn write_bank_details<W: Write>(
    out: &mut W,
    config: &ConfigState,
    bank: &BankDetails,
    amount_cents: i64,
) -> io::Result<()> {
    writeln!(out, "Bank Transfer Details")?;
    writeln!(out, "  Bank: {}", bank.bank_name)?;
    writeln!(out, "  Account No: {}", bank.account_number)?;
    writeln!(out, "  IFSC: {}", bank.ifsc)?;
    writeln!(out, "  Amount: {}", money(config, amount_cents))?;
    writeln!(out, "Type 'confirm' once you have made the transfer.")
}

fn write_receipt<W: Write>(
    out: &mut W,
    config: &ConfigState,
    receipt: &ReceiptResponse,
) -> io::Result<()> {
    writeln!(out, "Payment successful! Thank you for your order.")?;
    writeln!(out, "Receipt {}", receipt.receipt_id)?;
    writeln!(out, "{} - {}", receipt.store_name, receipt.timestamp)?;
    for item in &receipt.items {
        writeln!(
            out,
            "  {} x{} = {}",
            item.title,
            item.quantity,
            money(config, item.line_total_cents)
        )?;
    }
    writeln!(out, "Total: {}", money(config, receipt.total_cents))?;
    writeln!(out, "Paid by: {}", receipt.payment.method)
}
