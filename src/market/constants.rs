/// Rendering of a set nutrient flag in listings.
pub const YES: &str = "Yes";

/// Rendering of an unset nutrient flag in listings.
pub const NO: &str = "No";

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Summary printed when every nutrient was covered before balancing.
pub const ALREADY_BALANCED_MSG: &str =
    "The cart is already balanced by proteins, fats and carbohydrates.";

/// Summary printed when balancing had to add foods and succeeded.
pub const NOW_BALANCED_MSG: &str = "The cart is now balanced by proteins, fats and carbohydrates.";

/// Prefix of the summary printed when the catalog cannot cover a nutrient.
pub const CANNOT_BALANCE_MSG: &str =
    "The cart cannot be balanced: no food in the catalog provides";

/// Render a nutrient flag for display.
#[inline]
pub fn yes_no(flag: bool) -> &'static str {
    if flag { YES } else { NO }
}
