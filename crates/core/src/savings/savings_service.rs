use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::savings_model::{
    Contribution, GoalProgress, GoalStatus, Installment, InstallmentStatus, NewSavingsGoal,
    SavingsGoal, SavingsGoalUpdate,
};
use super::savings_traits::{SavingsApiTrait, SavingsServiceTrait};
use crate::concepts::{ConceptApiTrait, ConceptDirectory, ConceptKind};
use crate::constants::DEFAULT_GOAL_TITLE;
use crate::errors::{Error, Result};
use crate::utils::time_utils::{days_until, local_today};

/// Nearest deadline among goals still in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextDeadline {
    None,
    InDays(i64),
    Overdue,
}

impl NextDeadline {
    pub fn label(&self) -> String {
        match self {
            NextDeadline::None => "-".to_string(),
            NextDeadline::InDays(days) => format!("{} días", days),
            NextDeadline::Overdue => "Vencida".to_string(),
        }
    }
}

/// Header statistics of the savings page.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsDashboard {
    pub total_saved: Decimal,
    pub goal_count: usize,
    pub completed_count: usize,
    pub next_deadline: NextDeadline,
}

impl SavingsDashboard {
    pub fn compute(goals: &[SavingsGoal], today: NaiveDate) -> Self {
        let total_saved = goals.iter().map(|g| g.total_acumulado).sum();
        let completed_count = goals.iter().filter(|g| g.is_completed()).count();

        let nearest = goals
            .iter()
            .filter(|g| !g.is_completed())
            .filter_map(|g| g.fecha_meta)
            .min();
        let next_deadline = match nearest {
            None => NextDeadline::None,
            Some(date) => match days_until(date, today) {
                days if days > 0 => NextDeadline::InDays(days),
                _ => NextDeadline::Overdue,
            },
        };

        Self {
            total_saved,
            goal_count: goals.len(),
            completed_count,
            next_deadline,
        }
    }
}

/// A goal prepared for the card grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: GoalStatus,
    pub accumulated: Decimal,
    pub target: Decimal,
    pub progress: GoalProgress,
    pub deadline: Option<NaiveDate>,
}

impl GoalCard {
    pub fn build(goal: &SavingsGoal, concepts: &ConceptDirectory) -> Self {
        Self {
            id: goal.id,
            title: concepts
                .name_or(goal.concepto_id, DEFAULT_GOAL_TITLE)
                .to_string(),
            description: goal.descripcion.clone().unwrap_or_default(),
            status: goal.estado,
            accumulated: goal.total_acumulado,
            target: goal.monto_meta,
            progress: goal.progress(),
            deadline: goal.fecha_meta,
        }
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Goals, their cards and the dashboard from one load.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsBoard {
    pub goals: Vec<SavingsGoal>,
    pub concepts: ConceptDirectory,
    pub cards: Vec<GoalCard>,
    pub dashboard: SavingsDashboard,
}

impl SavingsBoard {
    pub fn build(goals: Vec<SavingsGoal>, concepts: ConceptDirectory, today: NaiveDate) -> Self {
        let cards = goals.iter().map(|g| GoalCard::build(g, &concepts)).collect();
        let dashboard = SavingsDashboard::compute(&goals, today);
        Self {
            goals,
            concepts,
            cards,
            dashboard,
        }
    }

    /// Case-insensitive filter over card title and description.
    pub fn search(&self, query: &str) -> Vec<&GoalCard> {
        self.cards.iter().filter(|c| c.matches(query)).collect()
    }
}

/// One row of the installment table.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentRow {
    pub id: i64,
    pub deadline: Option<NaiveDate>,
    pub assigned: Decimal,
    pub contributed: Option<Decimal>,
    pub status: InstallmentStatus,
    pub label: &'static str,
    pub payable: bool,
}

/// Installment table of a goal plus the assigned-vs-accumulated comparison.
///
/// The comparison is informational; nothing enforces that the assigned
/// amounts add up to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentPlan {
    pub goal: SavingsGoal,
    pub rows: Vec<InstallmentRow>,
    pub assigned_total: Decimal,
    pub contributed_total: Decimal,
}

impl InstallmentPlan {
    pub fn build(goal: SavingsGoal, installments: &[Installment]) -> Self {
        let rows: Vec<InstallmentRow> = installments
            .iter()
            .map(|i| InstallmentRow {
                id: i.id,
                deadline: i.fecha_limite,
                assigned: i.aporte_asignado,
                contributed: i.aporte,
                status: i.estado,
                label: i.estado.label(),
                payable: i.estado.is_payable(),
            })
            .collect();
        let assigned_total = installments.iter().map(|i| i.aporte_asignado).sum();
        let contributed_total = installments.iter().filter_map(|i| i.aporte).sum();
        Self {
            goal,
            rows,
            assigned_total,
            contributed_total,
        }
    }

    /// Whether contributions recorded on installments match the goal's accumulated total.
    pub fn is_reconciled(&self) -> bool {
        self.contributed_total == self.goal.total_acumulado
    }
}

pub struct SavingsService {
    api: Arc<dyn SavingsApiTrait>,
    concepts: Arc<dyn ConceptApiTrait>,
}

impl SavingsService {
    pub fn new(api: Arc<dyn SavingsApiTrait>, concepts: Arc<dyn ConceptApiTrait>) -> Self {
        Self { api, concepts }
    }

    async fn concept_directory(&self) -> ConceptDirectory {
        match self.concepts.concepts_by_kind(ConceptKind::Ahorro).await {
            Ok(concepts) => ConceptDirectory::from_concepts(&concepts),
            Err(e) => {
                warn!("Could not load savings concepts, cards use the default title: {}", e);
                ConceptDirectory::default()
            }
        }
    }
}

#[async_trait]
impl SavingsServiceTrait for SavingsService {
    async fn load_board(&self, status: Option<GoalStatus>) -> Result<SavingsBoard> {
        let (goals, concepts) =
            futures::join!(self.api.list_goals(status), self.concept_directory());
        let goals = goals?;
        debug!("Loaded {} savings goal(s)", goals.len());
        Ok(SavingsBoard::build(goals, concepts, local_today()))
    }

    async fn get_goal(&self, id: i64) -> Result<SavingsGoal> {
        self.api.get_goal(id).await
    }

    async fn create_goal(&self, goal: NewSavingsGoal) -> Result<SavingsGoal> {
        goal.validate()?;
        let created = self.api.create_goal(&goal).await?;
        info!("Created savings goal {}", created.id);
        Ok(created)
    }

    async fn update_goal(&self, id: i64, goal: SavingsGoalUpdate) -> Result<SavingsGoal> {
        goal.validate()?;
        self.api.update_goal(id, &goal).await
    }

    async fn delete_goal(&self, id: i64) -> Result<()> {
        self.api.delete_goal(id).await?;
        info!("Deleted savings goal {}", id);
        Ok(())
    }

    async fn installment_plan(&self, goal_id: i64) -> Result<InstallmentPlan> {
        let goal = self.api.get_goal(goal_id).await?;
        let installments = self.api.list_installments(goal_id).await?;
        Ok(InstallmentPlan::build(goal, &installments))
    }

    async fn next_installment(&self, goal_id: i64) -> Result<Option<Installment>> {
        match self.api.next_installment(goal_id).await {
            Ok(installment) => Ok(Some(installment)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn contribute(
        &self,
        goal_id: i64,
        installment_id: i64,
        contribution: Contribution,
    ) -> Result<Installment> {
        contribution.validate()?;
        let installment = self
            .api
            .contribute(goal_id, installment_id, &contribution)
            .await?;
        info!(
            "Registered contribution of {} on installment {} of goal {}",
            contribution.aporte, installment_id, goal_id
        );
        Ok(installment)
    }
}
