//! The module contains the `Expense` type and its input shapes.

use chrono::NaiveDate;

use crate::{Category, Money};

/// A stored expense record.
///
/// Field order matters: it is the canonical order used by the HTTP layer for
/// both JSON responses and CSV rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
    pub tags: Vec<String>,
    pub receipt_note: String,
    pub recurring: bool,
}

impl Expense {
    /// Returns `true` if any tag matches `tag` case-insensitively.
    ///
    /// Uses the same `to_lowercase` folding as description search, so
    /// non-ASCII tags compare the same way descriptions do.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Input for creating a new expense. The identifier is assigned by the
/// engine.
#[derive(Clone, Debug)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub description: String,
    pub tags: Vec<String>,
    pub receipt_note: String,
    pub recurring: bool,
}

/// Partial update for an existing expense. `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct ExpensePatch {
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub receipt_note: Option<String>,
    pub recurring: Option<bool>,
}

impl ExpensePatch {
    /// Applies the supplied fields onto `expense`, leaving the rest as-is.
    pub(crate) fn apply(self, expense: &mut Expense) {
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(description) = self.description {
            expense.description = description;
        }
        if let Some(tags) = self.tags {
            expense.tags = tags;
        }
        if let Some(receipt_note) = self.receipt_note {
            expense.receipt_note = receipt_note;
        }
        if let Some(recurring) = self.recurring {
            expense.recurring = recurring;
        }
    }
}
