//! Budgets - limits per concept, progress cards and activation.

mod budgets_model;
mod budgets_service;
mod budgets_traits;


pub use budgets_model::{
    present_budget_errors, Budget, BudgetInput, BudgetProgress, BudgetTone, FieldIssue,
};
pub use budgets_service::{BudgetBoard, BudgetCard, BudgetService};
pub use budgets_traits::{BudgetApiTrait, BudgetServiceTrait};
