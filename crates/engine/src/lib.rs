//! In-memory expense tracking engine.
//!
//! The engine owns all state: the canonical expense list, the recurring
//! snapshot set, the identifier counter and the budget map. It performs no
//! I/O and exposes plain `Result`-returning methods; the HTTP layer decides
//! how to serialize them.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

pub use categories::Category;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::EngineError;
pub use expense::{Expense, ExpenseDraft, ExpensePatch};
pub use money::Money;

mod budget;
mod categories;
mod clock;
mod error;
mod expense;
mod money;
mod query;

type ResultEngine<T> = Result<T, EngineError>;

/// Holds every expense, recurring snapshot and budget for the process.
///
/// State lives only as long as the process; there is no persistence.
pub struct Engine {
    expenses: Vec<Expense>,
    recurring: Vec<Expense>,
    next_id: u64,
    budgets: HashMap<Category, Money>,
    clock: Box<dyn Clock>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn expense_mut(&mut self, id: u64) -> ResultEngine<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EngineError::NotFound(id))
    }

    /// Validates and stores a new expense, returning the stored record and,
    /// when the category's budget limit is now exceeded, a warning message.
    ///
    /// Identifiers start at 1 and are never reused, including after deletes.
    /// A draft flagged `recurring` is additionally snapshotted into the
    /// recurring set; later edits to the stored record do not touch the
    /// snapshot.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> ResultEngine<(Expense, Option<String>)> {
        if !draft.amount.is_positive() {
            return Err(EngineError::Validation(
                "Amount must be positive".to_string(),
            ));
        }

        let expense = Expense {
            id: self.next_id,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            description: draft.description,
            tags: draft.tags,
            receipt_note: draft.receipt_note,
            recurring: draft.recurring,
        };
        self.next_id += 1;

        self.expenses.push(expense.clone());
        if expense.recurring {
            self.recurring.push(expense.clone());
        }

        let warning = budget::breach_warning(
            &self.expenses,
            &self.budgets,
            expense.category,
            self.clock.today(),
        );
        Ok((expense, warning))
    }

    /// Canonical records only; recurring instances are added by
    /// [`Engine::current_month_recurring`].
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Canonical records plus this month's recurring instances, the set every
    /// listing/filtering read operates on.
    pub fn visible_expenses(&self) -> Vec<Expense> {
        let mut all = self.expenses.clone();
        all.extend(self.current_month_recurring());
        all
    }

    /// Applies only the fields present in `patch` to the expense with the
    /// given identifier and returns the updated record.
    ///
    /// The amount is not rechecked for positivity here; only creation
    /// validates it.
    pub fn update_expense(&mut self, id: u64, patch: ExpensePatch) -> ResultEngine<Expense> {
        let expense = self.expense_mut(id)?;
        patch.apply(expense);
        Ok(expense.clone())
    }

    /// Removes the expense and, if present, its recurring snapshot.
    ///
    /// A leftover snapshot without a canonical record cannot be deleted on
    /// its own; only a canonical match makes the operation succeed.
    pub fn delete_expense(&mut self, id: u64) -> ResultEngine<()> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Err(EngineError::NotFound(id));
        }
        self.recurring.retain(|e| e.id != id);
        Ok(())
    }

    /// Materializes this month's virtual instances of recurring expenses.
    ///
    /// The membership probe is the first day of the current month, which is
    /// always inside the current month, so every snapshot is returned on
    /// every call regardless of its stored date. Callers rely on recurring
    /// items showing up every month.
    pub fn current_month_recurring(&self) -> Vec<Expense> {
        let today = self.clock.today();
        let probe = first_of_month(today);

        self.recurring
            .iter()
            .filter(|_| query::in_current_month(probe, today))
            .cloned()
            .collect()
    }

    /// Sum of current-month canonical spending plus all recurring instances.
    pub fn monthly_total(&self) -> Money {
        let today = self.clock.today();
        let canonical: Money = query::current_month(&self.expenses, today)
            .map(|e| e.amount)
            .sum();
        let recurring: Money = self.current_month_recurring().iter().map(|e| e.amount).sum();
        canonical + recurring
    }

    /// Current-month spending accumulated per category, combining canonical
    /// records with recurring instances. Categories with zero spend are
    /// omitted.
    pub fn category_breakdown(&self) -> HashMap<Category, Money> {
        let today = self.clock.today();
        let mut breakdown = HashMap::new();

        for expense in query::current_month(&self.expenses, today) {
            *breakdown.entry(expense.category).or_insert(Money::ZERO) += expense.amount;
        }
        for instance in self.current_month_recurring() {
            *breakdown.entry(instance.category).or_insert(Money::ZERO) += instance.amount;
        }
        breakdown
    }

    /// Expenses whose date lies in the inclusive `[start, end]` range; a
    /// missing bound leaves that side unbounded.
    pub fn filter_by_date(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<Expense> {
        query::date_range(&self.visible_expenses(), start, end)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search on descriptions; an empty keyword
    /// matches everything.
    pub fn search_description(&self, keyword: &str) -> Vec<Expense> {
        query::search_description(&self.visible_expenses(), keyword)
            .cloned()
            .collect()
    }

    /// Expenses carrying `tag` (case-insensitive exact match on any tag).
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Expense> {
        query::with_tag(&self.visible_expenses(), tag)
            .cloned()
            .collect()
    }

    /// Sets or overwrites the budget limit for a category.
    pub fn set_budget(&mut self, category: Category, limit: Money) -> ResultEngine<(Category, Money)> {
        if !limit.is_positive() {
            return Err(EngineError::Validation(
                "Budget limit must be positive".to_string(),
            ));
        }
        self.budgets.insert(category, limit);
        Ok((category, limit))
    }

    /// Configured budget limits per category.
    pub fn budgets(&self) -> &HashMap<Category, Money> {
        &self.budgets
    }
}

fn first_of_month(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// Builder for [`Engine`]. The only knob is the clock; everything else
/// starts empty.
pub struct EngineBuilder {
    clock: Box<dyn Clock>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }
}

impl EngineBuilder {
    /// Replaces the time source; tests use [`FixedClock`] to pin "today".
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            expenses: Vec::new(),
            recurring: Vec::new(),
            next_id: 1,
            budgets: HashMap::new(),
            clock: self.clock,
        }
    }
}
