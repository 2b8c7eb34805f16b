use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::expenses_model::{
    group_by_month_and_concept, ConceptMonthTotal, ConceptSummary, Expense, MonthKey, NewExpense,
};
use super::expenses_traits::{ExpenseApiTrait, ExpenseServiceTrait};
use crate::errors::Result;

/// Expenses of one concept, newest first as the server returns them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptDetail {
    pub concept_id: i64,
    pub expenses: Vec<Expense>,
    pub total: Decimal,
}

pub struct ExpenseService {
    api: Arc<dyn ExpenseApiTrait>,
}

impl ExpenseService {
    pub fn new(api: Arc<dyn ExpenseApiTrait>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.api.list_expenses().await
    }

    async fn get_expense(&self, id: i64) -> Result<Expense> {
        self.api.get_expense(id).await
    }

    async fn concept_summaries(&self) -> Result<Vec<ConceptSummary>> {
        self.api.concept_summaries().await
    }

    async fn concept_detail(&self, concept_id: i64) -> Result<ConceptDetail> {
        let expenses = self.api.expenses_by_concept(concept_id).await?;
        let total = expenses.iter().map(|e| e.monto).sum();
        Ok(ConceptDetail {
            concept_id,
            expenses,
            total,
        })
    }

    async fn record_expense(&self, expense: NewExpense) -> Result<Expense> {
        expense.validate()?;
        let created = self.api.create_expense(&expense).await?;
        info!(
            "Recorded expense {} of {} under concept {}",
            created.id, created.monto, created.concepto_id
        );
        Ok(created)
    }

    async fn update_expense(&self, id: i64, expense: NewExpense) -> Result<Expense> {
        expense.validate()?;
        self.api.update_expense(id, &expense).await
    }

    async fn delete_expense(&self, id: i64) -> Result<()> {
        self.api.delete_expense(id).await?;
        info!("Deleted expense {}", id);
        Ok(())
    }

    async fn month_totals(&self, month: MonthKey) -> Result<BTreeMap<i64, ConceptMonthTotal>> {
        let expenses = self.api.list_expenses().await?;
        debug!("Grouping {} expense(s) for {}", expenses.len(), month);
        Ok(group_by_month_and_concept(&expenses)
            .into_iter()
            .filter(|((m, _), _)| *m == month)
            .map(|((_, concept), totals)| (concept, totals))
            .collect())
    }
}
