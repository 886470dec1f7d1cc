//! Expense file contents
//!
//! Parses the `ID|timestamp|item|amount` lines expense files carry so lookup
//! can report how many entries an archived file holds and what they add up to.

mod entry;
mod money;

pub use entry::{ExpenseEntry, ExpenseSummary};
pub use money::Money;
