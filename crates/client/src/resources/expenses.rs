use async_trait::async_trait;

use gastu_core::errors::Result;
use gastu_core::expenses::{ConceptSummary, Expense, ExpenseApiTrait, NewExpense};

use crate::client::GastuApiClient;
use crate::routes;

#[async_trait]
impl ExpenseApiTrait for GastuApiClient {
    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.get(routes::EXPENSES).await
    }

    async fn get_expense(&self, id: i64) -> Result<Expense> {
        self.get(&routes::expense(id)).await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense> {
        self.post(routes::EXPENSES, expense).await
    }

    async fn update_expense(&self, id: i64, expense: &NewExpense) -> Result<Expense> {
        self.put(&routes::expense(id), expense).await
    }

    async fn delete_expense(&self, id: i64) -> Result<()> {
        self.delete(&routes::expense(id)).await
    }

    async fn concept_summaries(&self) -> Result<Vec<ConceptSummary>> {
        self.get(routes::EXPENSE_SUMMARIES).await
    }

    async fn expenses_by_concept(&self, concept_id: i64) -> Result<Vec<Expense>> {
        self.get(&routes::expenses_by_concept(concept_id)).await
    }
}
