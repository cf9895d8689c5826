//! Transaction record shared by the import/export and categorization layers

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::coerce::coerce_number;
use crate::record::{FieldValue, Record};

/// A single ledger entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique within whatever collection holds it; never reassigned
    pub id: String,
    /// Calendar date as text (YYYY-MM-DD)
    pub date: String,
    /// Free-text description, usually the merchant line from a statement
    pub description: String,
    /// Positive = inflow, negative = outflow
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Set when `category` was inferred rather than confirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_suggested: Option<bool>,
}

impl Transaction {
    /// Create a new uncategorized Transaction
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            description: description.into(),
            amount,
            category: None,
            category_suggested: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_suggested_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self.category_suggested = Some(true);
        self
    }

    /// User confirmation: the category becomes authoritative.
    pub fn confirm_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
        self.category_suggested = None;
    }

    /// True if the current category came from a suggestion
    pub fn is_category_suggested(&self) -> bool {
        self.category.is_some() && self.category_suggested == Some(true)
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Flatten into a row for CSV export.
    ///
    /// Absent optional fields are left out entirely rather than written empty.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new()
            .with("id", self.id.as_str())
            .with("date", self.date.as_str())
            .with("description", self.description.as_str())
            .with("amount", self.amount);
        if let Some(category) = &self.category {
            record.insert("category", category.as_str());
        }
        if let Some(flag) = self.category_suggested {
            record.insert("categorySuggested", flag.to_string());
        }
        record
    }

    /// Materialize an imported row.
    ///
    /// Missing `date`/`description` become empty text; `id` and an `amount`
    /// that passes [`coerce_number`] are required.
    pub fn from_record(record: &Record) -> Result<Self> {
        let id = match record.get("id") {
            Some(v) if v.is_truthy() => v.to_string(),
            _ => bail!("record has no id"),
        };

        let amount = match record.get("amount") {
            Some(FieldValue::Number(n)) => *n,
            Some(FieldValue::Text(s)) => coerce_number(s)
                .with_context(|| format!("record {id}: amount '{s}' is not numeric"))?,
            None => bail!("record {id}: missing amount"),
        };

        let category = record
            .text("category")
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let category_suggested = match record.get("categorySuggested") {
            None => None,
            Some(v) => match v.to_string().as_str() {
                "" => None,
                "true" => Some(true),
                "false" => Some(false),
                other => {
                    return Err(anyhow!("record {id}: categorySuggested '{other}' is not a flag"));
                }
            },
        };

        Ok(Self {
            date: record.get("date").map(|v| v.to_string()).unwrap_or_default(),
            description: record
                .get("description")
                .map(|v| v.to_string())
                .unwrap_or_default(),
            id,
            amount,
            category,
            category_suggested,
        })
    }
}
