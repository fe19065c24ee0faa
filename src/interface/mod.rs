pub mod export;
pub mod prompts;
pub mod render;

pub use export::{BalanceExport, write_balance_json, write_csv, write_json};
pub use prompts::{pick_foods, prompt_yes_no, shop};
pub use render::{
    display_foods, display_things, food_line, food_lines, food_rows, thing_line, thing_lines,
    thing_rows, ListingRow,
};
