use std::sync::Arc;

use serde::Serialize;

use crate::market::constants::yes_no;
use crate::models::{Food, Thing};

/// Listing line for a food at a 1-based position.
pub fn food_line(index: usize, food: &Food) -> String {
    format!(
        "[{}] {} (Proteins: {} Fats: {} Carbohydrates: {})",
        index,
        food.name(),
        yes_no(food.has_proteins()),
        yes_no(food.has_fats()),
        yes_no(food.has_carbohydrates())
    )
}

/// Listing line for any catalog entry at a 1-based position.
pub fn thing_line(index: usize, thing: &Thing) -> String {
    match thing {
        Thing::Food(food) => food_line(index, food),
        Thing::Plain { name } => format!("[{}] {}", index, name),
    }
}

/// Listing lines for catalog entries, numbered from 1.
pub fn thing_lines(things: &[&Thing]) -> Vec<String> {
    things
        .iter()
        .enumerate()
        .map(|(i, thing)| thing_line(i + 1, thing))
        .collect()
}

/// Listing lines for foods, numbered from 1.
pub fn food_lines(foods: &[Arc<Food>]) -> Vec<String> {
    foods
        .iter()
        .enumerate()
        .map(|(i, food)| food_line(i + 1, food))
        .collect()
}

/// Print catalog entries. Prints nothing for an empty slice.
pub fn display_things(things: &[&Thing]) {
    for line in thing_lines(things) {
        println!("{}", line);
    }
}

/// Print foods. Prints nothing for an empty slice.
pub fn display_foods(foods: &[Arc<Food>]) {
    for line in food_lines(foods) {
        println!("{}", line);
    }
}

/// Flat, serializable form of a listing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub index: usize,
    pub name: String,
    pub kind: &'static str,
    pub group: Option<String>,
    pub proteins: Option<bool>,
    pub fats: Option<bool>,
    pub carbohydrates: Option<bool>,
}

impl ListingRow {
    pub fn from_food(index: usize, food: &Food) -> Self {
        Self {
            index,
            name: food.name().to_string(),
            kind: "food",
            group: Some(food.group().to_string()),
            proteins: Some(food.has_proteins()),
            fats: Some(food.has_fats()),
            carbohydrates: Some(food.has_carbohydrates()),
        }
    }

    pub fn from_thing(index: usize, thing: &Thing) -> Self {
        match thing {
            Thing::Food(food) => Self::from_food(index, food),
            Thing::Plain { name } => Self {
                index,
                name: name.clone(),
                kind: "plain",
                group: None,
                proteins: None,
                fats: None,
                carbohydrates: None,
            },
        }
    }
}

pub fn thing_rows(things: &[&Thing]) -> Vec<ListingRow> {
    things
        .iter()
        .enumerate()
        .map(|(i, thing)| ListingRow::from_thing(i + 1, thing))
        .collect()
}

pub fn food_rows(foods: &[Arc<Food>]) -> Vec<ListingRow> {
    foods
        .iter()
        .enumerate()
        .map(|(i, food)| ListingRow::from_food(i + 1, food))
        .collect()
}
