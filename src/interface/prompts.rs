use dialoguer::{Confirm, Select};

use crate::error::{MarketError, Result};
use crate::market::Cart;

const DONE_LABEL: &str = "Done";

/// Prompt for a yes/no answer.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Let the user pick catalog foods into the cart until they choose "Done".
///
/// Returns the number of foods picked.
pub fn pick_foods(cart: &mut Cart<'_>) -> Result<usize> {
    let foods = cart.catalog().foods(cart.category());
    if foods.is_empty() {
        return Err(MarketError::InvalidInput(format!(
            "no foods in the {} category",
            cart.category()
        )));
    }

    let mut items: Vec<String> = foods.iter().map(|f| f.name().to_string()).collect();
    items.push(DONE_LABEL.to_string());

    let mut picked = 0;
    loop {
        let choice = Select::new()
            .with_prompt("Add a food to the cart")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;

        let Some(food) = foods.get(choice) else {
            break;
        };

        cart.add(food.clone())?;
        picked += 1;
        println!("Added: {}", food.name());
    }

    Ok(picked)
}

/// Run an interactive shopping session: pick foods, show the cart, and
/// optionally balance it.
pub fn shop(cart: &mut Cart<'_>) -> Result<()> {
    let picked = pick_foods(cart)?;

    println!();
    println!("Cart ({} items):", picked);
    cart.print_listing();

    if cart.is_balanced() {
        cart.print_balance();
        return Ok(());
    }

    let missing: Vec<String> = cart.missing_nutrients().iter().map(|n| n.to_string()).collect();
    println!();
    println!("Missing: {}", missing.join(", "));

    if prompt_yes_no("Balance the cart from the catalog?", true)? {
        let report = cart.print_balance();
        if !report.added().is_empty() {
            println!();
            cart.print_listing();
        }
    }

    Ok(())
}
