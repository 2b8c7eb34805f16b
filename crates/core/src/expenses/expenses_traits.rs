use crate::errors::Result;
use crate::expenses::expenses_model::{ConceptMonthTotal, ConceptSummary, Expense, MonthKey, NewExpense};
use crate::expenses::expenses_service::ConceptDetail;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Remote operations on expenses (`/api/movimientos/egresos`).
#[async_trait]
pub trait ExpenseApiTrait: Send + Sync {
    async fn list_expenses(&self) -> Result<Vec<Expense>>;
    async fn get_expense(&self, id: i64) -> Result<Expense>;
    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense>;
    async fn update_expense(&self, id: i64, expense: &NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, id: i64) -> Result<()>;
    async fn concept_summaries(&self) -> Result<Vec<ConceptSummary>>;
    async fn expenses_by_concept(&self, concept_id: i64) -> Result<Vec<Expense>>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn list_expenses(&self) -> Result<Vec<Expense>>;
    async fn get_expense(&self, id: i64) -> Result<Expense>;
    async fn concept_summaries(&self) -> Result<Vec<ConceptSummary>>;
    async fn concept_detail(&self, concept_id: i64) -> Result<ConceptDetail>;
    async fn record_expense(&self, expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, id: i64, expense: NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, id: i64) -> Result<()>;
    /// Reloads all expenses and totals them per concept for one month.
    async fn month_totals(&self, month: MonthKey) -> Result<BTreeMap<i64, ConceptMonthTotal>>;
}
