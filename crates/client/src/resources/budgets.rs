use async_trait::async_trait;
use log::info;

use gastu_core::budgets::{Budget, BudgetApiTrait, BudgetInput};
use gastu_core::concepts::Concept;
use gastu_core::errors::Result;

use crate::client::GastuApiClient;
use crate::routes;

#[async_trait]
impl BudgetApiTrait for GastuApiClient {
    async fn list_budgets(&self) -> Result<Vec<Budget>> {
        self.get(routes::BUDGETS).await
    }

    async fn budgets_with_progress(&self) -> Result<Vec<Budget>> {
        self.get(routes::BUDGET_PROGRESS).await
    }

    async fn get_budget(&self, id: i64) -> Result<Budget> {
        self.get(&routes::budget(id)).await
    }

    async fn create_budget(&self, budget: &BudgetInput) -> Result<Budget> {
        self.post(routes::BUDGETS, budget).await
    }

    async fn update_budget(&self, id: i64, budget: &BudgetInput) -> Result<Budget> {
        self.put(&routes::budget(id), budget).await
    }

    async fn delete_budget(&self, id: i64) -> Result<()> {
        self.delete(&routes::budget(id)).await
    }

    async fn activate_budget(&self, id: i64) -> Result<Budget> {
        let budget: Budget = self.patch_as_user(&routes::activate_budget(id)).await?;
        info!("[GastuApi] Budget {} activated", budget.id);
        Ok(budget)
    }

    async fn budget_concepts(&self) -> Result<Vec<Concept>> {
        self.get(routes::BUDGET_CONCEPTS).await
    }
}
