use std::io;
use std::sync::Arc;

use clap::Parser;

use umarket_cart_rs::cli::{Cli, Command, OutputFormat};
use umarket_cart_rs::error::{MarketError, Result};
use umarket_cart_rs::interface::{
    display_foods, display_things, food_rows, shop, thing_rows, write_balance_json, write_csv,
    write_json, ListingRow,
};
use umarket_cart_rs::logging;
use umarket_cart_rs::market::{Cart, Catalog};
use umarket_cart_rs::models::{Category, Food};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    let catalog = Catalog::new();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Catalog { category } => cmd_catalog(&catalog, category.into(), cli.format),
        Command::Nth { index, category } => cmd_nth(&catalog, category.into(), index, cli.format),
        Command::Balance { items, category } => {
            cmd_balance(&catalog, category.into(), &items, cli.format)
        }
        Command::Shop { category } => cmd_shop(&catalog, category.into()),
    }
}

/// List every catalog entry of a category.
fn cmd_catalog(catalog: &Catalog, category: Category, format: OutputFormat) -> Result<()> {
    emit(format, &thing_rows(&catalog.find_all(category)), || {
        catalog.print_listing(category)
    })
}

/// Show a single catalog entry by its 1-based position.
fn cmd_nth(catalog: &Catalog, category: Category, index: usize, format: OutputFormat) -> Result<()> {
    let Some(thing) = catalog.find_nth(category, index) else {
        // Absent is a valid outcome: nothing to print.
        return Ok(());
    };

    emit(format, &thing_rows(&[thing]), || display_things(&[thing]))
}

/// Build a cart from named foods, then balance it.
fn cmd_balance(
    catalog: &Catalog,
    category: Category,
    items: &[String],
    format: OutputFormat,
) -> Result<()> {
    let mut cart = Cart::new(category, catalog);
    for name in items {
        cart.add(resolve_food(catalog, name)?)?;
    }

    if format != OutputFormat::Text {
        let report = cart.balance();
        let rows = food_rows(cart.list());
        match format {
            OutputFormat::Json => write_balance_json(io::stdout().lock(), &report, &rows)?,
            _ => {
                eprintln!("{}", report.summary());
                emit(format, &rows, || {})?;
            }
        }
        return report.ensure_balanced();
    }

    if cart.is_empty() {
        println!("The cart is empty.");
    } else {
        println!("Cart:");
        display_foods(cart.list());
    }

    let report = cart.print_balance();
    if !report.added().is_empty() {
        println!();
        println!("Cart after balancing:");
        cart.print_listing();
    }

    report.ensure_balanced()
}

/// Interactive shopping session.
fn cmd_shop(catalog: &Catalog, category: Category) -> Result<()> {
    let mut cart = Cart::new(category, catalog);
    shop(&mut cart)
}

fn resolve_food(catalog: &Catalog, name: &str) -> Result<Arc<Food>> {
    let thing = catalog
        .find_by_name(name)
        .ok_or_else(|| MarketError::ItemNotFound(name.to_string()))?;

    thing
        .as_food()
        .cloned()
        .ok_or_else(|| MarketError::NotFood(thing.name().to_string()))
}

/// Write `rows` in a structured format, or run `print_text` for plain text.
fn emit(format: OutputFormat, rows: &[ListingRow], print_text: impl FnOnce()) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text();
            Ok(())
        }
        OutputFormat::Json => write_json(io::stdout().lock(), rows),
        OutputFormat::Csv => write_csv(io::stdout().lock(), rows),
    }
}
