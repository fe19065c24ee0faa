pub mod balance;
pub mod cart;
pub mod catalog;
pub mod constants;

pub use balance::{BalanceReport, BalanceStatus, Resolution};
pub use cart::Cart;
pub use catalog::Catalog;
pub use constants::*;
