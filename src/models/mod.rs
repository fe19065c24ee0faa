mod food;
mod thing;

pub use food::{Food, FoodGroup, Nutrient};
pub use thing::{Category, Thing};
