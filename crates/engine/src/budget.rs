//! Per-category budget limits and breach detection.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{Category, Money, expense::Expense, query};

/// Builds the warning attached to a create response when the freshly
/// recorded expense pushes its category over the configured limit.
///
/// Spend is computed over canonical records only; recurring instances never
/// count towards a breach even though they count towards totals. The warning
/// is response-only and never stored.
pub(crate) fn breach_warning(
    expenses: &[Expense],
    budgets: &HashMap<Category, Money>,
    category: Category,
    today: NaiveDate,
) -> Option<String> {
    let limit = *budgets.get(&category)?;
    let spent: Money = query::current_month(expenses, today)
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum();

    if spent > limit {
        Some(format!(
            "Budget exceeded for {category}: spent {spent} of {limit} this month"
        ))
    } else {
        None
    }
}
