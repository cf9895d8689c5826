//! Backfill suggested categories onto imported rows and transactions.

use tally_core::{Record, Transaction};
use tracing::debug;

use crate::category_rules::suggest_category;

/// Fill `category` on rows that lack one, flagging it as suggested.
///
/// Rows that already carry a non-empty category are left alone. Returns how
/// many rows received a suggestion.
pub fn backfill_suggestions(rows: &mut [Record]) -> usize {
    let mut filled = 0;
    for row in rows.iter_mut() {
        let has_category = row.get("category").is_some_and(|v| !v.to_string().is_empty());
        if has_category {
            continue;
        }
        let description = row.get("description").map(|v| v.to_string()).unwrap_or_default();
        if let Some(category) = suggest_category(&description) {
            row.insert("category", category);
            row.insert("categorySuggested", "true");
            filled += 1;
        }
    }
    debug!(rows = rows.len(), filled, "backfilled suggested categories");
    filled
}

/// Apply a suggestion to an uncategorized transaction. Returns true if one was applied.
pub fn suggest_for_transaction(txn: &mut Transaction) -> bool {
    if txn.category.as_deref().is_some_and(|c| !c.is_empty()) {
        return false;
    }
    match suggest_category(&txn.description) {
        Some(category) => {
            txn.category = Some(category.to_string());
            txn.category_suggested = Some(true);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfill_only_uncategorized() {
        let mut rows = vec![
            Record::new()
                .with("id", "a")
                .with("description", "NETFLIX.COM")
                .with("category", ""),
            Record::new()
                .with("id", "b")
                .with("description", "NETFLIX.COM")
                .with("category", "Family"),
            Record::new().with("id", "c").with("description", "CORNER STORE"),
        ];

        assert_eq!(backfill_suggestions(&mut rows), 1);
        assert_eq!(rows[0].text("category"), Some("Entertainment"));
        assert_eq!(rows[0].text("categorySuggested"), Some("true"));
        assert_eq!(rows[1].text("category"), Some("Family"));
        assert!(!rows[1].contains_key("categorySuggested"));
        assert!(!rows[2].contains_key("category"));
    }

    #[test]
    fn test_suggest_for_transaction() {
        let mut txn = Transaction::new("t1", "2024-04-01", "Chipotle 0421", -11.8);
        assert!(suggest_for_transaction(&mut txn));
        assert_eq!(txn.category.as_deref(), Some("Fast Food"));
        assert!(txn.is_category_suggested());

        let mut confirmed =
            Transaction::new("t2", "2024-04-01", "Chipotle 0421", -11.8).with_category("Dining");
        assert!(!suggest_for_transaction(&mut confirmed));
        assert_eq!(confirmed.category.as_deref(), Some("Dining"));
    }
}
