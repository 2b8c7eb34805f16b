//! Expenses - movements, per-concept summaries and month grouping.

mod expenses_model;
mod expenses_service;
mod expenses_traits;


pub use expenses_model::{
    group_by_month_and_concept, ConceptMonthTotal, ConceptSummary, Expense, MonthKey, NewExpense,
};
pub use expenses_service::{ConceptDetail, ExpenseService};
pub use expenses_traits::{ExpenseApiTrait, ExpenseServiceTrait};
