use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::interface::render::ListingRow;
use crate::market::{BalanceReport, BalanceStatus};
use crate::models::Nutrient;

/// Structured form of a balance attempt: outcome plus the resulting cart.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceExport<'a> {
    pub status: BalanceStatus,
    pub summary: String,
    pub missing: Vec<Nutrient>,
    pub cart: &'a [ListingRow],
}

impl<'a> BalanceExport<'a> {
    pub fn new(report: &BalanceReport, cart: &'a [ListingRow]) -> Self {
        Self {
            status: report.status(),
            summary: report.summary(),
            missing: report.missing(),
            cart,
        }
    }
}

/// Write listing rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, rows: &[ListingRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a balance outcome and the cart it produced as a JSON object.
pub fn write_balance_json<W: Write>(
    mut writer: W,
    report: &BalanceReport,
    cart: &[ListingRow],
) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &BalanceExport::new(report, cart))?;
    writeln!(writer)?;
    Ok(())
}

/// Write listing rows as CSV with a header line.
///
/// An empty listing still produces the header.
pub fn write_csv<W: Write>(writer: W, rows: &[ListingRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record([
        "index",
        "name",
        "kind",
        "group",
        "proteins",
        "fats",
        "carbohydrates",
    ])?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::render::{food_rows, thing_rows};
    use crate::market::{Cart, Catalog};
    use crate::models::{Category, Food, FoodGroup, Thing};

    fn sample() -> Vec<Thing> {
        vec![
            Thing::plain("Pen"),
            Thing::food(Food::new("Chicken", FoodGroup::Healthy, true, false, false)),
        ]
    }

    #[test]
    fn test_csv_output() {
        let things = sample();
        let refs: Vec<&Thing> = things.iter().collect();
        let mut out = Vec::new();
        write_csv(&mut out, &thing_rows(&refs)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,name,kind,group,proteins,fats,carbohydrates");
        assert_eq!(lines[1], "1,Pen,plain,,,,");
        assert_eq!(lines[2], "2,Chicken,food,healthy,true,false,false");
    }

    #[test]
    fn test_csv_empty_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "index,name,kind,group,proteins,fats,carbohydrates\n"
        );
    }

    #[test]
    fn test_json_output() {
        let things = sample();
        let refs: Vec<&Thing> = things.iter().collect();
        let mut out = Vec::new();
        write_json(&mut out, &thing_rows(&refs)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "Pen");
        assert!(value[0]["proteins"].is_null());
        assert_eq!(value[1]["group"], "healthy");
        assert_eq!(value[1]["proteins"], true);
    }

    #[test]
    fn test_balance_json_reports_missing_carbohydrates() {
        let catalog = Catalog::from_things(vec![
            Thing::food(Food::new("Chicken", FoodGroup::Healthy, true, false, false)),
            Thing::food(Food::new("Olive oil", FoodGroup::Healthy, false, true, false)),
        ]);
        let mut cart = Cart::new(Category::Food, &catalog);
        let report = cart.balance();

        let mut out = Vec::new();
        write_balance_json(&mut out, &report, &food_rows(cart.list())).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "cannot-balance");
        assert_eq!(value["missing"], serde_json::json!(["carbohydrates"]));
        assert_eq!(value["cart"].as_array().unwrap().len(), 2);
        assert_eq!(value["cart"][1]["name"], "Olive oil");
        assert!(report.ensure_balanced().is_err());
    }

    #[test]
    fn test_balance_json_now_balanced() {
        let catalog = Catalog::new();
        let mut cart = Cart::new(Category::Food, &catalog);
        let report = cart.balance();

        let mut out = Vec::new();
        write_balance_json(&mut out, &report, &food_rows(cart.list())).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "now-balanced");
        assert_eq!(value["missing"], serde_json::json!([]));
    }
}
