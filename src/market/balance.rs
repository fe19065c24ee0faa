use std::sync::Arc;

use serde::Serialize;

use crate::error::{MarketError, Result};
use crate::market::constants::{ALREADY_BALANCED_MSG, CANNOT_BALANCE_MSG, NOW_BALANCED_MSG};
use crate::models::{Food, Nutrient};

/// How a single nutrient was settled during balancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The cart already held a food providing the nutrient.
    AlreadySatisfied,
    /// This catalog food was appended to cover the nutrient.
    Added(Arc<Food>),
    /// No catalog food in the cart's category provides the nutrient.
    Unavailable,
}

impl Resolution {
    pub fn is_satisfied(&self) -> bool {
        !matches!(self, Resolution::Unavailable)
    }
}

/// Overall outcome of a balance attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceStatus {
    AlreadyBalanced,
    NowBalanced,
    CannotBalance,
}

/// Per-nutrient record of a balance attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    resolutions: Vec<(Nutrient, Resolution)>,
}

impl BalanceReport {
    pub(crate) fn new(resolutions: Vec<(Nutrient, Resolution)>) -> Self {
        Self { resolutions }
    }

    pub fn resolutions(&self) -> &[(Nutrient, Resolution)] {
        &self.resolutions
    }

    /// Resolution recorded for `nutrient`.
    pub fn resolution(&self, nutrient: Nutrient) -> Option<&Resolution> {
        self.resolutions
            .iter()
            .find(|(n, _)| *n == nutrient)
            .map(|(_, r)| r)
    }

    /// Foods appended to the cart, in the order they were added.
    pub fn added(&self) -> Vec<&Arc<Food>> {
        self.resolutions
            .iter()
            .filter_map(|(_, r)| match r {
                Resolution::Added(food) => Some(food),
                _ => None,
            })
            .collect()
    }

    /// Nutrients the catalog could not cover.
    pub fn missing(&self) -> Vec<Nutrient> {
        self.resolutions
            .iter()
            .filter(|(_, r)| !r.is_satisfied())
            .map(|(n, _)| *n)
            .collect()
    }

    pub fn status(&self) -> BalanceStatus {
        if self.resolutions.iter().any(|(_, r)| !r.is_satisfied()) {
            BalanceStatus::CannotBalance
        } else if self
            .resolutions
            .iter()
            .all(|(_, r)| *r == Resolution::AlreadySatisfied)
        {
            BalanceStatus::AlreadyBalanced
        } else {
            BalanceStatus::NowBalanced
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() != BalanceStatus::CannotBalance
    }

    /// Turn a failed attempt into `MarketError::BalanceImpossible`.
    pub fn ensure_balanced(&self) -> Result<()> {
        match self.status() {
            BalanceStatus::CannotBalance => Err(MarketError::BalanceImpossible(self.missing())),
            _ => Ok(()),
        }
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        match self.status() {
            BalanceStatus::AlreadyBalanced => ALREADY_BALANCED_MSG.to_string(),
            BalanceStatus::NowBalanced => NOW_BALANCED_MSG.to_string(),
            BalanceStatus::CannotBalance => {
                let missing: Vec<String> = self.missing().iter().map(|n| n.to_string()).collect();
                format!("{} {}.", CANNOT_BALANCE_MSG, missing.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodGroup;

    fn fruit() -> Arc<Food> {
        Arc::new(Food::new("Fruit", FoodGroup::Healthy, false, false, true))
    }

    #[test]
    fn test_status_already_balanced() {
        let report = BalanceReport::new(
            Nutrient::ALL
                .iter()
                .map(|n| (*n, Resolution::AlreadySatisfied))
                .collect(),
        );
        assert_eq!(report.status(), BalanceStatus::AlreadyBalanced);
        assert!(report.added().is_empty());
        assert_eq!(report.summary(), ALREADY_BALANCED_MSG);
    }

    #[test]
    fn test_status_now_balanced() {
        let report = BalanceReport::new(vec![
            (Nutrient::Proteins, Resolution::AlreadySatisfied),
            (Nutrient::Fats, Resolution::AlreadySatisfied),
            (Nutrient::Carbohydrates, Resolution::Added(fruit())),
        ]);
        assert_eq!(report.status(), BalanceStatus::NowBalanced);
        assert_eq!(report.added().len(), 1);
        assert!(report.is_success());
        assert!(report.ensure_balanced().is_ok());
    }

    #[test]
    fn test_cannot_balance_names_missing() {
        let report = BalanceReport::new(vec![
            (Nutrient::Proteins, Resolution::Unavailable),
            (Nutrient::Fats, Resolution::AlreadySatisfied),
            (Nutrient::Carbohydrates, Resolution::Unavailable),
        ]);
        assert_eq!(report.status(), BalanceStatus::CannotBalance);
        assert_eq!(
            report.missing(),
            vec![Nutrient::Proteins, Nutrient::Carbohydrates]
        );
        assert_eq!(
            report.summary(),
            "The cart cannot be balanced: no food in the catalog provides proteins, carbohydrates."
        );

        let err = report.ensure_balanced().unwrap_err();
        assert!(matches!(
            err,
            MarketError::BalanceImpossible(ref missing)
                if *missing == vec![Nutrient::Proteins, Nutrient::Carbohydrates]
        ));
        assert_eq!(
            err.to_string(),
            "Cart cannot be balanced, no catalog food provides: proteins, carbohydrates"
        );
    }
}
