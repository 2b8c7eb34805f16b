use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::budgets_model::{Budget, BudgetInput, BudgetProgress};
use super::budgets_traits::{BudgetApiTrait, BudgetServiceTrait};
use crate::concepts::{search_concepts, Concept};
use crate::constants::ACTIVE_BUDGET_CONFLICT_MESSAGE;
use crate::errors::{Error, Result};

/// A budget prepared for the card grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCard {
    pub id: i64,
    pub concept_name: String,
    pub limit: Decimal,
    pub progress: BudgetProgress,
    pub active: bool,
    /// Only inactive budgets offer activation.
    pub can_activate: bool,
    pub starts: Option<NaiveDate>,
    pub ends: Option<NaiveDate>,
}

impl BudgetCard {
    pub fn build(budget: &Budget) -> Self {
        Self {
            id: budget.id,
            concept_name: budget
                .concepto_nombre
                .clone()
                .unwrap_or_else(|| format!("Concepto {}", budget.concepto_id)),
            limit: budget.limite,
            progress: budget.progress(),
            active: budget.activo,
            can_activate: !budget.activo,
            starts: budget.fecha_inicio,
            ends: budget.fecha_fin,
        }
    }
}

/// Budgets with progress from the last load, plus their cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetBoard {
    pub budgets: Vec<Budget>,
    pub cards: Vec<BudgetCard>,
}

impl BudgetBoard {
    pub fn build(budgets: Vec<Budget>) -> Self {
        let cards = budgets.iter().map(BudgetCard::build).collect();
        Self { budgets, cards }
    }

    /// Case-insensitive filter on concept name.
    pub fn search(&self, query: &str) -> Vec<&BudgetCard> {
        let query = query.trim().to_lowercase();
        self.cards
            .iter()
            .filter(|c| query.is_empty() || c.concept_name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn card(&self, id: i64) -> Option<&BudgetCard> {
        self.cards.iter().find(|c| c.id == id)
    }
}

pub struct BudgetService {
    api: Arc<dyn BudgetApiTrait>,
}

impl BudgetService {
    pub fn new(api: Arc<dyn BudgetApiTrait>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn load_board(&self) -> Result<BudgetBoard> {
        let budgets = self.api.budgets_with_progress().await?;
        debug!("Loaded {} budget(s) with progress", budgets.len());
        Ok(BudgetBoard::build(budgets))
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>> {
        self.api.list_budgets().await
    }

    async fn get_budget(&self, id: i64) -> Result<Budget> {
        self.api.get_budget(id).await
    }

    async fn create_budget(&self, budget: BudgetInput) -> Result<Budget> {
        budget.validate()?;
        let created = self.api.create_budget(&budget).await?;
        info!("Created budget {} for concept {}", created.id, created.concepto_id);
        Ok(created)
    }

    async fn update_budget(&self, id: i64, budget: BudgetInput) -> Result<Budget> {
        budget.validate()?;
        self.api.update_budget(id, &budget).await
    }

    async fn delete_budget(&self, id: i64) -> Result<()> {
        self.api.delete_budget(id).await?;
        info!("Deleted budget {}", id);
        Ok(())
    }

    async fn activate_budget(&self, id: i64) -> Result<Budget> {
        let current = self.api.get_budget(id).await?;
        if current.activo {
            return Err(Error::Conflict(format!("El presupuesto {} ya está activo", id)));
        }

        match self.api.activate_budget(id).await {
            Ok(budget) => {
                info!("Activated budget {}", id);
                Ok(budget)
            }
            Err(Error::Conflict(detail)) => {
                warn!("Activation of budget {} rejected: {}", id, detail);
                Err(Error::Conflict(ACTIVE_BUDGET_CONFLICT_MESSAGE.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn search_concepts(&self, query: &str) -> Result<Vec<Concept>> {
        let concepts = self.api.budget_concepts().await?;
        Ok(search_concepts(&concepts, query).into_iter().cloned().collect())
    }
}
