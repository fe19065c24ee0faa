use clap::{Parser, Subcommand, ValueEnum};

use crate::models::{Category, FoodGroup};

/// U-Market: browse a fixed catalog and balance a food cart by proteins, fats and carbohydrates.
#[derive(Parser, Debug)]
#[command(name = "umarket")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for listings.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog entries of a category.
    Catalog {
        #[arg(short, long, value_enum, default_value_t = CategoryArg::Thing)]
        category: CategoryArg,
    },

    /// Show the Nth (1-based) catalog entry of a category.
    Nth {
        index: usize,

        #[arg(short, long, value_enum, default_value_t = CategoryArg::Thing)]
        category: CategoryArg,
    },

    /// Fill a cart with the named foods and balance it from the catalog.
    Balance {
        /// Catalog food to put in the cart first (repeatable, fuzzy matched).
        #[arg(short, long = "item")]
        items: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = CategoryArg::Food)]
        category: CategoryArg,
    },

    /// Pick foods into a cart interactively.
    Shop {
        #[arg(short, long, value_enum, default_value_t = CategoryArg::Food)]
        category: CategoryArg,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Catalog {
            category: CategoryArg::Thing,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Command-line spelling of a [`Category`].
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    Thing,
    Food,
    Healthy,
    Snack,
    SemiFinished,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Thing => Category::Thing,
            CategoryArg::Food => Category::Food,
            CategoryArg::Healthy => Category::Group(FoodGroup::Healthy),
            CategoryArg::Snack => Category::Group(FoodGroup::Snack),
            CategoryArg::SemiFinished => Category::Group(FoodGroup::SemiFinished),
        }
    }
}
