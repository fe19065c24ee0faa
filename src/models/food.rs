use std::fmt;

use serde::{Deserialize, Serialize};

/// The macro-nutrients a balanced cart must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Proteins,
    Fats,
    Carbohydrates,
}

impl Nutrient {
    /// Every nutrient, in the order balancing resolves them.
    pub const ALL: [Nutrient; 3] = [Nutrient::Proteins, Nutrient::Fats, Nutrient::Carbohydrates];

    /// Capitalised label used in listing lines.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Proteins => "Proteins",
            Nutrient::Fats => "Fats",
            Nutrient::Carbohydrates => "Carbohydrates",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// Shelf the market files a food under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodGroup {
    Healthy,
    Snack,
    SemiFinished,
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoodGroup::Healthy => "healthy",
            FoodGroup::Snack => "snack",
            FoodGroup::SemiFinished => "semi-finished",
        };
        f.write_str(name)
    }
}

/// A food item with its macro-nutrient flags.
///
/// Flags are fixed at construction, so foods are shared freely between the
/// catalog and any number of carts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    name: String,
    group: FoodGroup,
    proteins: bool,
    fats: bool,
    carbohydrates: bool,
}

impl Food {
    pub fn new(
        name: impl Into<String>,
        group: FoodGroup,
        proteins: bool,
        fats: bool,
        carbohydrates: bool,
    ) -> Self {
        Self {
            name: name.into(),
            group,
            proteins,
            fats,
            carbohydrates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> FoodGroup {
        self.group
    }

    pub fn has_proteins(&self) -> bool {
        self.proteins
    }

    pub fn has_fats(&self) -> bool {
        self.fats
    }

    pub fn has_carbohydrates(&self) -> bool {
        self.carbohydrates
    }

    /// Whether this food provides the given nutrient.
    #[inline]
    pub fn provides(&self, nutrient: Nutrient) -> bool {
        match nutrient {
            Nutrient::Proteins => self.proteins,
            Nutrient::Fats => self.fats,
            Nutrient::Carbohydrates => self.carbohydrates,
        }
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}] P:{} F:{} C:{}",
            self.name, self.group, self.proteins, self.fats, self.carbohydrates
        )
    }
}
