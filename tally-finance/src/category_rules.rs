//! Deterministic keyword rules mapping transaction descriptions to
//! spending categories.
//!
//! Matching is a case-insensitive substring scan in table order; the first
//! keyword found wins. Order matters: "UBER" sits ahead of "UBER EATS", so
//! food delivery charges resolve to Transportation.

use std::collections::BTreeSet;

/// Keyword → category, in match-precedence order. Keywords are uppercase.
pub const CATEGORY_RULES: &[(&str, &str)] = &[
    ("STARBUCKS", "Coffee"),
    ("COFFEE BEAN", "Coffee"),
    ("DUNKIN DONUTS", "Coffee"),
    ("WHOLE FOODS", "Groceries"),
    ("SAFEWAY", "Groceries"),
    ("TRADER JOES", "Groceries"),
    ("KROGER", "Groceries"),
    ("COSTCO", "Groceries"),
    ("TARGET", "Shopping"),
    ("AMAZON", "Shopping"),
    ("BEST BUY", "Electronics"),
    ("HOME DEPOT", "Home & Garden"),
    ("SHELL", "Gas"),
    ("CHEVRON", "Gas"),
    ("UBER", "Transportation"),
    ("LYFT", "Transportation"),
    ("NETFLIX", "Entertainment"),
    ("SPOTIFY", "Entertainment"),
    ("ADOBE", "Software"),
    ("STEAM", "Entertainment"),
    ("MCDONALDS", "Fast Food"),
    ("CHIPOTLE", "Fast Food"),
    ("DOMINOS", "Fast Food"),
    ("UBER EATS", "Food Delivery"),
    ("CVS", "Health & Pharmacy"),
    ("VERIZON", "Utilities"),
    ("ELECTRIC BILL", "Utilities"),
    ("RENT", "Housing"),
    ("SALARY", "Income"),
    ("PAYPAL", "Transfer"),
    ("FLOWERS", "Gifts"),
];

/// Suggest a category for a free-text description.
///
/// Returns `None` when no keyword occurs; that is a normal outcome.
pub fn suggest_category(description: &str) -> Option<&'static str> {
    let desc = description.to_uppercase();
    CATEGORY_RULES
        .iter()
        .find(|(keyword, _)| desc.contains(keyword))
        .map(|(_, category)| *category)
}

/// Every distinct category label, sorted ascending.
pub fn all_categories() -> Vec<&'static str> {
    CATEGORY_RULES
        .iter()
        .map(|(_, category)| *category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Exact lookup of a single keyword (case-insensitive).
pub fn category_for_keyword(keyword: &str) -> Option<&'static str> {
    let keyword = keyword.trim().to_uppercase();
    CATEGORY_RULES
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starbucks_is_coffee() {
        assert_eq!(suggest_category("I bought coffee at STARBUCKS today"), Some("Coffee"));
        assert_eq!(suggest_category("i bought coffee at starbucks today"), Some("Coffee"));
    }

    #[test]
    fn test_unknown_merchant_is_none() {
        assert_eq!(suggest_category("no known merchant here"), None);
        assert_eq!(suggest_category(""), None);
    }

    #[test]
    fn test_first_defined_keyword_wins() {
        // UBER is defined before UBER EATS
        assert_eq!(suggest_category("UBER EATS ORDER 991"), Some("Transportation"));
        // SHELL precedes the later FLOWERS rule
        assert_eq!(suggest_category("Shell station flowers"), Some("Gas"));
    }

    #[test]
    fn test_substring_not_word_match() {
        // "CURRENT" contains RENT
        assert_eq!(suggest_category("current account fee"), Some("Housing"));
        assert_eq!(suggest_category("Targeted ad refund"), Some("Shopping"));
    }

    #[test]
    fn test_all_categories_sorted_unique() {
        let cats = all_categories();
        for w in cats.windows(2) {
            assert!(w[0] < w[1], "{} !< {}", w[0], w[1]);
        }
        for c in &cats {
            assert!(CATEGORY_RULES.iter().any(|(_, v)| v == c));
        }
        assert_eq!(cats.first(), Some(&"Coffee"));
        assert_eq!(cats.last(), Some(&"Utilities"));
        assert_eq!(cats.len(), 17);
    }

    #[test]
    fn test_keywords_are_uppercase() {
        for (keyword, _) in CATEGORY_RULES {
            assert_eq!(*keyword, keyword.to_uppercase());
        }
    }

    #[test]
    fn test_category_for_keyword() {
        assert_eq!(category_for_keyword("best buy"), Some("Electronics"));
        assert_eq!(category_for_keyword("BEST"), None);
    }
}
