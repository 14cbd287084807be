//! Linear-scan queries over expense lists.
//!
//! Every query walks the full list; at this scale an index would not pay for
//! itself. Callers go through these helpers instead of iterating raw state so
//! a future indexed store only has to change this module.

use chrono::{Datelike, NaiveDate};

use crate::expense::Expense;

/// Returns `true` if `date` falls in the same calendar month as `today`.
pub(crate) fn in_current_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Expenses whose date falls in the current calendar month.
pub(crate) fn current_month<'a>(
    expenses: &'a [Expense],
    today: NaiveDate,
) -> impl Iterator<Item = &'a Expense> {
    expenses
        .iter()
        .filter(move |e| in_current_month(e.date, today))
}

/// Expenses within an inclusive date range; a missing bound is unbounded.
pub(crate) fn date_range<'a>(
    expenses: &'a [Expense],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> impl Iterator<Item = &'a Expense> {
    expenses.iter().filter(move |e| {
        start.is_none_or(|s| e.date >= s) && end.is_none_or(|s| e.date <= s)
    })
}

/// Case-insensitive substring match on descriptions. An empty keyword
/// matches everything.
pub(crate) fn search_description<'a>(
    expenses: &'a [Expense],
    keyword: &str,
) -> impl Iterator<Item = &'a Expense> {
    let keyword = keyword.to_lowercase();
    expenses
        .iter()
        .filter(move |e| e.description.to_lowercase().contains(&keyword))
}

/// Case-insensitive exact match against any tag of each expense.
pub(crate) fn with_tag<'a>(
    expenses: &'a [Expense],
    tag: &'a str,
) -> impl Iterator<Item = &'a Expense> {
    expenses.iter().filter(move |e| e.has_tag(tag))
}
