use crate::errors::Result;
use crate::savings::savings_model::{
    Contribution, GoalStatus, Installment, NewSavingsGoal, SavingsGoal, SavingsGoalUpdate,
};
use crate::savings::savings_service::{InstallmentPlan, SavingsBoard};
use async_trait::async_trait;

/// Remote operations on savings goals and installments.
#[async_trait]
pub trait SavingsApiTrait: Send + Sync {
    async fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<SavingsGoal>>;
    async fn get_goal(&self, id: i64) -> Result<SavingsGoal>;
    async fn create_goal(&self, goal: &NewSavingsGoal) -> Result<SavingsGoal>;
    async fn update_goal(&self, id: i64, goal: &SavingsGoalUpdate) -> Result<SavingsGoal>;
    async fn delete_goal(&self, id: i64) -> Result<()>;
    async fn list_installments(&self, goal_id: i64) -> Result<Vec<Installment>>;
    /// `Error::NotFound` when no installment is open.
    async fn next_installment(&self, goal_id: i64) -> Result<Installment>;
    async fn contribute(
        &self,
        goal_id: i64,
        installment_id: i64,
        contribution: &Contribution,
    ) -> Result<Installment>;
}

/// Trait for savings service operations
#[async_trait]
pub trait SavingsServiceTrait: Send + Sync {
    async fn load_board(&self, status: Option<GoalStatus>) -> Result<SavingsBoard>;
    async fn get_goal(&self, id: i64) -> Result<SavingsGoal>;
    async fn create_goal(&self, goal: NewSavingsGoal) -> Result<SavingsGoal>;
    async fn update_goal(&self, id: i64, goal: SavingsGoalUpdate) -> Result<SavingsGoal>;
    async fn delete_goal(&self, id: i64) -> Result<()>;
    async fn installment_plan(&self, goal_id: i64) -> Result<InstallmentPlan>;
    async fn next_installment(&self, goal_id: i64) -> Result<Option<Installment>>;
    async fn contribute(
        &self,
        goal_id: i64,
        installment_id: i64,
        contribution: Contribution,
    ) -> Result<Installment>;
}
