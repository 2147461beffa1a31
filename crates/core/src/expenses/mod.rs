//! Expense records - user-entered spending events.

mod expenses_model;


pub use expenses_model::{Expense, NewExpense};
