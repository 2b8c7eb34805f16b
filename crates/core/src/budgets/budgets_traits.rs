use crate::budgets::budgets_model::{Budget, BudgetInput};
use crate::budgets::budgets_service::BudgetBoard;
use crate::concepts::Concept;
use crate::errors::Result;
use async_trait::async_trait;

/// Remote operations on budgets (`/api/presupuestos`).
#[async_trait]
pub trait BudgetApiTrait: Send + Sync {
    async fn list_budgets(&self) -> Result<Vec<Budget>>;
    /// Budgets with `gastado`/`porcentaje` filled in by the server.
    async fn budgets_with_progress(&self) -> Result<Vec<Budget>>;
    async fn get_budget(&self, id: i64) -> Result<Budget>;
    async fn create_budget(&self, budget: &BudgetInput) -> Result<Budget>;
    async fn update_budget(&self, id: i64, budget: &BudgetInput) -> Result<Budget>;
    async fn delete_budget(&self, id: i64) -> Result<()>;
    /// `Error::Conflict` when another budget of the same concept is already active.
    async fn activate_budget(&self, id: i64) -> Result<Budget>;
    async fn budget_concepts(&self) -> Result<Vec<Concept>>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn load_board(&self) -> Result<BudgetBoard>;
    async fn list_budgets(&self) -> Result<Vec<Budget>>;
    async fn get_budget(&self, id: i64) -> Result<Budget>;
    async fn create_budget(&self, budget: BudgetInput) -> Result<Budget>;
    async fn update_budget(&self, id: i64, budget: BudgetInput) -> Result<Budget>;
    async fn delete_budget(&self, id: i64) -> Result<()>;
    async fn activate_budget(&self, id: i64) -> Result<Budget>;
    async fn search_concepts(&self, query: &str) -> Result<Vec<Concept>>;
}
