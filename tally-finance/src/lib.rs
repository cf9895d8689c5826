//! tally-finance: keyword category rules and suggestion backfill

pub mod backfill;
pub mod category_rules;

pub use backfill::{backfill_suggestions, suggest_for_transaction};
pub use category_rules::{CATEGORY_RULES, all_categories, category_for_keyword, suggest_category};
