use thiserror::Error;

use crate::models::{Category, Nutrient};

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("{0} is not a food item")]
    NotFood(String),

    #[error("{name} does not belong to the {category} category")]
    CategoryMismatch { name: String, category: Category },

    #[error("Cart cannot be balanced, no catalog food provides: {}", join_nutrients(.0))]
    BalanceImpossible(Vec<Nutrient>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn join_nutrients(nutrients: &[Nutrient]) -> String {
    nutrients
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, MarketError>;
