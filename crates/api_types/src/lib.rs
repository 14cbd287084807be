//! Wire types shared between the server and its clients.
//!
//! Amounts travel as plain JSON decimal numbers; the engine converts them to
//! integer cents at the boundary.

use serde::{Deserialize, Serialize};

/// Spending category as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
}

impl Category {
    /// Every known category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
    ];
}

pub mod expense {
    use chrono::NaiveDate;

    use super::*;

    /// Request body for creating an expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub amount: f64,
        pub category: Category,
        pub date: NaiveDate,
        pub description: String,
        #[serde(default)]
        pub tags: Vec<String>,
        #[serde(default)]
        pub receipt_note: String,
        #[serde(default)]
        pub recurring: bool,
    }

    /// Request body for a partial update; absent fields are left untouched.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub amount: Option<f64>,
        pub category: Option<Category>,
        pub date: Option<NaiveDate>,
        pub description: Option<String>,
        pub tags: Option<Vec<String>>,
        pub receipt_note: Option<String>,
        pub recurring: Option<bool>,
    }

    /// An expense as returned to clients. Field order is part of the API.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: u64,
        pub amount: f64,
        pub category: Category,
        pub date: NaiveDate,
        pub description: String,
        pub tags: Vec<String>,
        pub receipt_note: String,
        pub recurring: bool,
    }

    /// Create response: the stored record plus an optional budget warning.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        #[serde(flatten)]
        pub expense: ExpenseView,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub warning: Option<String>,
    }
}

pub mod budget {
    use super::*;

    /// Request body for setting a category budget limit.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetSet {
        pub category: Category,
        pub limit: f64,
    }

    /// Response body after a limit has been stored.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetView {
        pub category: Category,
        pub limit: f64,
    }
}

pub mod stats {
    use super::*;

    /// Current-month total spend.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Total {
        pub total: f64,
    }
}
