use std::fmt;
use std::sync::Arc;

use super::food::{Food, FoodGroup};

/// A catalog entry: either a plain named item or a food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thing {
    Plain { name: String },
    Food(Arc<Food>),
}

impl Thing {
    pub fn plain(name: impl Into<String>) -> Self {
        Thing::Plain { name: name.into() }
    }

    pub fn food(food: Food) -> Self {
        Thing::Food(Arc::new(food))
    }

    pub fn name(&self) -> &str {
        match self {
            Thing::Plain { name } => name,
            Thing::Food(food) => food.name(),
        }
    }

    /// The food behind this entry, if it is one.
    pub fn as_food(&self) -> Option<&Arc<Food>> {
        match self {
            Thing::Food(food) => Some(food),
            Thing::Plain { .. } => None,
        }
    }

    /// Whether this entry falls under `category`.
    pub fn is_in(&self, category: Category) -> bool {
        category.admits(self)
    }
}

/// Filter used by catalog queries and to bind a cart.
///
/// Categories nest: every food is a `Thing`, every grouped food is a `Food`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Thing,
    Food,
    Group(FoodGroup),
}

impl Category {
    pub fn admits(self, thing: &Thing) -> bool {
        match thing {
            Thing::Plain { .. } => self == Category::Thing,
            Thing::Food(food) => self.admits_food(food),
        }
    }

    pub fn admits_food(self, food: &Food) -> bool {
        match self {
            Category::Thing | Category::Food => true,
            Category::Group(group) => food.group() == group,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Thing => f.write_str("thing"),
            Category::Food => f.write_str("food"),
            Category::Group(group) => write!(f, "{}", group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_only_in_thing_category() {
        let pen = Thing::plain("Pen");
        assert!(pen.is_in(Category::Thing));
        assert!(!pen.is_in(Category::Food));
        assert!(!pen.is_in(Category::Group(FoodGroup::Healthy)));
        assert!(pen.as_food().is_none());
    }

    #[test]
    fn test_food_is_covariant() {
        let chicken = Thing::food(Food::new("Chicken", FoodGroup::Healthy, true, false, false));
        assert!(chicken.is_in(Category::Thing));
        assert!(chicken.is_in(Category::Food));
        assert!(chicken.is_in(Category::Group(FoodGroup::Healthy)));
        assert!(!chicken.is_in(Category::Group(FoodGroup::Snack)));
        assert_eq!(chicken.name(), "Chicken");
    }
}
