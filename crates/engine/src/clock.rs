//! Time source abstraction.
//!
//! "Current month" queries depend on today's date. Handing the engine a
//! [`Clock`] instead of calling [`chrono::Local`] directly lets tests pin the
//! date deterministically.

use chrono::{Local, NaiveDate};

/// Source of the engine's notion of "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time in the local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date. Intended for tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
