pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod market;
pub mod models;

pub use error::{MarketError, Result};
pub use market::{BalanceReport, BalanceStatus, Cart, Catalog, Resolution};
pub use models::{Category, Food, FoodGroup, Nutrient, Thing};
