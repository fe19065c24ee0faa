use std::sync::Arc;

use strsim::jaro_winkler;
use tracing::debug;

use crate::interface::render;
use crate::market::constants::FUZZY_MATCH_THRESHOLD;
use crate::models::{Category, Food, FoodGroup, Nutrient, Thing};

/// The market's fixed, read-only inventory.
#[derive(Debug, Clone)]
pub struct Catalog {
    things: Vec<Thing>,
}

impl Catalog {
    /// Create the catalog stocked with the market's default entries.
    pub fn new() -> Self {
        Self::from_things(default_things())
    }

    /// Create a catalog from arbitrary entries, keeping their order.
    pub fn from_things(things: Vec<Thing>) -> Self {
        debug!(entries = things.len(), "catalog initialised");
        Self { things }
    }

    /// Every entry in catalog order.
    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    /// All entries satisfying `category`, in catalog order.
    pub fn find_all(&self, category: Category) -> Vec<&Thing> {
        self.things.iter().filter(|t| t.is_in(category)).collect()
    }

    /// The `index`-th entry (1-based) among those satisfying `category`.
    pub fn find_nth(&self, category: Category, index: usize) -> Option<&Thing> {
        let position = index.checked_sub(1)?;
        self.things
            .iter()
            .filter(|t| t.is_in(category))
            .nth(position)
    }

    /// Food entries satisfying `category`, in catalog order.
    pub fn foods(&self, category: Category) -> Vec<Arc<Food>> {
        self.things
            .iter()
            .filter(|t| t.is_in(category))
            .filter_map(Thing::as_food)
            .cloned()
            .collect()
    }

    /// First food of `category` providing `nutrient`.
    pub fn first_food_with(&self, category: Category, nutrient: Nutrient) -> Option<Arc<Food>> {
        self.things
            .iter()
            .filter(|t| t.is_in(category))
            .filter_map(Thing::as_food)
            .find(|f| f.provides(nutrient))
            .cloned()
    }

    /// Look up an entry by name.
    ///
    /// Exact (case-insensitive) matches win; otherwise the closest name by
    /// Jaro-Winkler similarity is returned if it clears the fuzzy threshold.
    pub fn find_by_name(&self, name: &str) -> Option<&Thing> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        if let Some(exact) = self
            .things
            .iter()
            .find(|t| t.name().to_lowercase() == wanted)
        {
            return Some(exact);
        }

        let mut best: Option<(&Thing, f64)> = None;
        for thing in &self.things {
            let score = jaro_winkler(&thing.name().to_lowercase(), &wanted);
            if score >= FUZZY_MATCH_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
                best = Some((thing, score));
            }
        }

        if let Some((thing, score)) = best {
            debug!(query = name, matched = thing.name(), score, "fuzzy name match");
        }
        best.map(|(thing, _)| thing)
    }

    /// Print a 1-indexed listing of entries satisfying `category`.
    pub fn print_listing(&self, category: Category) {
        render::display_things(&self.find_all(category));
    }

    pub fn len(&self) -> usize {
        self.things.len()
    }

    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn default_things() -> Vec<Thing> {
    use FoodGroup::*;

    vec![
        Thing::plain("Pen"),
        Thing::plain("Notebook"),
        Thing::food(Food::new("Chicken", Healthy, true, false, false)),
        Thing::food(Food::new("Fruit", Healthy, false, false, true)),
        Thing::food(Food::new("Olive oil", Healthy, false, true, false)),
        Thing::food(Food::new("Balyk cheese", Snack, true, true, false)),
        Thing::food(Food::new("Crisps", Snack, false, true, true)),
        Thing::food(Food::new("Chocolate bar", Snack, false, true, true)),
        Thing::food(Food::new("Frozen berries", SemiFinished, false, false, true)),
        Thing::food(Food::new("Meat dumplings", SemiFinished, true, true, true)),
        Thing::food(Food::new("Cheburek", SemiFinished, true, true, true)),
    ]
}
