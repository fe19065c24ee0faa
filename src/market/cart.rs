use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{MarketError, Result};
use crate::interface::render;
use crate::market::balance::{BalanceReport, Resolution};
use crate::market::catalog::Catalog;
use crate::models::{Category, Food, Nutrient};

/// A caller-owned cart of foods, bound to a category and a catalog.
///
/// The catalog is only consulted when balancing. Entries are shared with the
/// catalog rather than copied.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    category: Category,
    catalog: &'a Catalog,
    foodstuffs: Vec<Arc<Food>>,
}

impl<'a> Cart<'a> {
    /// Create an empty cart.
    pub fn new(category: Category, catalog: &'a Catalog) -> Self {
        Self {
            category,
            catalog,
            foodstuffs: Vec::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Foods in the cart, in the order they were added.
    pub fn list(&self) -> &[Arc<Food>] {
        &self.foodstuffs
    }

    /// Append a food. Fails if the food lies outside the cart's category.
    pub fn add(&mut self, food: Arc<Food>) -> Result<()> {
        if !self.category.admits_food(&food) {
            return Err(MarketError::CategoryMismatch {
                name: food.name().to_string(),
                category: self.category,
            });
        }

        debug!(food = %food.debug_string(), "added to cart");
        self.foodstuffs.push(food);
        Ok(())
    }

    /// Whether some food in the cart provides `nutrient`.
    pub fn covers(&self, nutrient: Nutrient) -> bool {
        self.foodstuffs.iter().any(|f| f.provides(nutrient))
    }

    /// Nutrients no food in the cart provides yet.
    pub fn missing_nutrients(&self) -> Vec<Nutrient> {
        Nutrient::ALL
            .into_iter()
            .filter(|n| !self.covers(*n))
            .collect()
    }

    /// Whether the cart covers every nutrient. Does not mutate.
    pub fn is_balanced(&self) -> bool {
        self.missing_nutrients().is_empty()
    }

    /// Ensure the cart holds at least one food per nutrient.
    ///
    /// Nutrients are resolved in order against the cart as it grows, so a food
    /// added for proteins also counts for fats if it provides them. Additions
    /// made before an unavailable nutrient are kept.
    ///
    /// Missing nutrients are pulled only from catalog foods inside the cart's
    /// category. A `Category::Food` cart may draw on every catalog food; a cart
    /// bound to a food group stays within that group and reports a nutrient the
    /// group lacks as unavailable.
    pub fn balance(&mut self) -> BalanceReport {
        let mut resolutions = Vec::with_capacity(Nutrient::ALL.len());

        for nutrient in Nutrient::ALL {
            let resolution = if self.covers(nutrient) {
                debug!(%nutrient, "already covered");
                Resolution::AlreadySatisfied
            } else {
                match self.catalog.first_food_with(self.category, nutrient) {
                    Some(food) => {
                        info!(%nutrient, food = food.name(), "adding food to balance cart");
                        self.foodstuffs.push(Arc::clone(&food));
                        Resolution::Added(food)
                    }
                    None => {
                        warn!(%nutrient, category = %self.category, "no catalog food provides nutrient");
                        Resolution::Unavailable
                    }
                }
            };
            resolutions.push((nutrient, resolution));
        }

        BalanceReport::new(resolutions)
    }

    /// Balance the cart and print the one-line summary.
    pub fn print_balance(&mut self) -> BalanceReport {
        let report = self.balance();
        println!();
        println!("{}", report.summary());
        report
    }

    /// Print a 1-indexed listing of the cart's contents.
    pub fn print_listing(&self) {
        render::display_foods(&self.foodstuffs);
    }

    pub fn len(&self) -> usize {
        self.foodstuffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foodstuffs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;
    use crate::market::balance::BalanceStatus;
    use crate::models::{FoodGroup, Thing};

    fn food_named(catalog: &Catalog, name: &str) -> Arc<Food> {
        catalog
            .find_by_name(name)
            .and_then(Thing::as_food)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let catalog = Catalog::new();
        let cart = Cart::new(Category::Food, &catalog);
        assert!(cart.is_empty());
        assert_eq!(cart.missing_nutrients(), Nutrient::ALL.to_vec());
        assert!(!cart.is_balanced());
    }

    #[test]
    fn test_add_rejects_other_group() {
        let catalog = Catalog::new();
        let mut cart = Cart::new(Category::Group(FoodGroup::Healthy), &catalog);

        assert!(cart.add(food_named(&catalog, "Chicken")).is_ok());
        let err = cart.add(food_named(&catalog, "Crisps")).unwrap_err();
        assert!(matches!(err, MarketError::CategoryMismatch { .. }));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_balance_empty_cart_adds_first_matches() {
        logging::init_test();
        let catalog = Catalog::new();
        let mut cart = Cart::new(Category::Food, &catalog);

        let report = cart.balance();
        assert_eq!(report.status(), BalanceStatus::NowBalanced);

        let names: Vec<&str> = cart.list().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Chicken", "Olive oil", "Fruit"]);
    }

    #[test]
    fn test_balance_shares_catalog_entries() {
        let catalog = Catalog::new();
        let mut cart = Cart::new(Category::Food, &catalog);
        cart.balance();

        let chicken = food_named(&catalog, "Chicken");
        assert!(Arc::ptr_eq(&cart.list()[0], &chicken));
    }

    #[test]
    fn test_balance_group_bound_cart() {
        let catalog = Catalog::new();
        let mut cart = Cart::new(Category::Group(FoodGroup::SemiFinished), &catalog);

        let report = cart.balance();
        assert_eq!(report.status(), BalanceStatus::NowBalanced);

        // Meat dumplings cover all three, so only one item is pulled.
        let names: Vec<&str> = cart.list().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Meat dumplings"]);
    }

    #[test]
    fn test_group_bound_cart_ignores_foods_outside_group() {
        let catalog = Catalog::from_things(vec![
            Thing::food(Food::new("Chicken", FoodGroup::Healthy, true, false, false)),
            Thing::food(Food::new("Crisps", FoodGroup::Snack, false, true, true)),
        ]);
        let mut cart = Cart::new(Category::Group(FoodGroup::Snack), &catalog);

        let report = cart.balance();

        assert_eq!(report.status(), BalanceStatus::CannotBalance);
        assert_eq!(report.missing(), vec![Nutrient::Proteins]);
        let names: Vec<&str> = cart.list().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Crisps"]);

        // The same catalog balances a cart bound to every food.
        let mut food_cart = Cart::new(Category::Food, &catalog);
        assert_eq!(food_cart.balance().status(), BalanceStatus::NowBalanced);
    }
}
