use async_trait::async_trait;
use log::info;

use gastu_core::errors::Result;
use gastu_core::savings::{
    Contribution, GoalStatus, Installment, NewSavingsGoal, SavingsApiTrait, SavingsGoal,
    SavingsGoalUpdate,
};

use crate::client::GastuApiClient;
use crate::routes;

#[async_trait]
impl SavingsApiTrait for GastuApiClient {
    async fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<SavingsGoal>> {
        self.get(&routes::goals(status)).await
    }

    async fn get_goal(&self, id: i64) -> Result<SavingsGoal> {
        self.get(&routes::goal(id)).await
    }

    async fn create_goal(&self, goal: &NewSavingsGoal) -> Result<SavingsGoal> {
        self.post(routes::GOALS, goal).await
    }

    async fn update_goal(&self, id: i64, goal: &SavingsGoalUpdate) -> Result<SavingsGoal> {
        self.put(&routes::goal(id), goal).await
    }

    async fn delete_goal(&self, id: i64) -> Result<()> {
        self.delete(&routes::goal(id)).await
    }

    async fn list_installments(&self, goal_id: i64) -> Result<Vec<Installment>> {
        self.get(&routes::installments(goal_id)).await
    }

    /// The backend answers 404 when every installment is settled.
    async fn next_installment(&self, goal_id: i64) -> Result<Installment> {
        self.get(&routes::next_installment(goal_id)).await
    }

    async fn contribute(
        &self,
        goal_id: i64,
        installment_id: i64,
        contribution: &Contribution,
    ) -> Result<Installment> {
        let installment: Installment = self
            .post(&routes::contribution(goal_id, installment_id), contribution)
            .await?;
        info!(
            "[GastuApi] Registered contribution of {} on installment {} of goal {}",
            contribution.aporte, installment_id, goal_id
        );
        Ok(installment)
    }
}
