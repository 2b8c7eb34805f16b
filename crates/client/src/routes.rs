//! REST paths of the Gastu backend.

use std::fmt;
use std::str::FromStr;

use gastu_core::concepts::ConceptKind;
use gastu_core::errors::Error;
use gastu_core::savings::GoalStatus;

pub(crate) const USER: &str = "/api/usuario";
pub(crate) const CHANGE_PASSWORD: &str = "/api/usuario/cambiar-password";

pub(crate) const PREFERENCES: &str = "/api/movimientos/preferencias";
pub(crate) const PREFERENCES_RESET: &str = "/api/movimientos/preferencias/reset";

pub(crate) const NOTIFICATIONS: &str = "/api/notificaciones";
pub(crate) const UNREAD_NOTIFICATIONS: &str = "/api/notificaciones/no-leidas";
pub(crate) const UNREAD_COUNT: &str = "/api/notificaciones/no-leidas/count";

pub(crate) const GOALS: &str = "/api/ahorros";

pub(crate) const EXPENSES: &str = "/api/movimientos/egresos";
pub(crate) const EXPENSE_SUMMARIES: &str = "/api/movimientos/egresos/resumen-conceptos";

pub(crate) const BUDGETS: &str = "/api/presupuestos";
pub(crate) const BUDGET_PROGRESS: &str = "/api/presupuestos/progreso";
pub(crate) const BUDGET_CONCEPTS: &str = "/api/presupuestos/conceptos";

pub(crate) const CONCEPTS: &str = "/api/conceptos";

pub(crate) fn goals(status: Option<GoalStatus>) -> String {
    match status {
        Some(status) => format!("{}?estado={}", GOALS, urlencoding::encode(status.as_str())),
        None => GOALS.to_string(),
    }
}

pub(crate) fn goal(id: i64) -> String {
    format!("{}/{}", GOALS, id)
}

pub(crate) fn installments(goal_id: i64) -> String {
    format!("{}/cuotas/{}", GOALS, goal_id)
}

pub(crate) fn next_installment(goal_id: i64) -> String {
    format!("{}/cuotas/proxima/{}", GOALS, goal_id)
}

pub(crate) fn contribution(goal_id: i64, installment_id: i64) -> String {
    format!("{}/{}/cuotas/{}", GOALS, goal_id, installment_id)
}

pub(crate) fn expense(id: i64) -> String {
    format!("{}/{}", EXPENSES, id)
}

pub(crate) fn expenses_by_concept(concept_id: i64) -> String {
    format!("{}/concepto/{}", EXPENSES, concept_id)
}

pub(crate) fn budget(id: i64) -> String {
    format!("{}/{}", BUDGETS, id)
}

pub(crate) fn activate_budget(id: i64) -> String {
    format!("{}/activar/{}", BUDGETS, id)
}

pub(crate) fn concept(id: i64) -> String {
    format!("{}/{}", CONCEPTS, id)
}

pub(crate) fn concepts_by_kind(kind: ConceptKind) -> String {
    format!("{}/tipo/{}", CONCEPTS, kind.as_str())
}

/// Which mark-as-read route the backend exposes.
///
/// Deployments differ: current ones use `/{id}/marcar-leida`, older ones `/{id}/leida`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkReadRoute {
    #[default]
    MarcarLeida,
    Leida,
}

impl MarkReadRoute {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkReadRoute::MarcarLeida => "marcar-leida",
            MarkReadRoute::Leida => "leida",
        }
    }

    pub(crate) fn path(self, id: i64) -> String {
        format!("{}/{}/{}", NOTIFICATIONS, id, self.as_str())
    }
}

impl fmt::Display for MarkReadRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkReadRoute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_lowercase().as_str() {
            "marcar-leida" => Ok(MarkReadRoute::MarcarLeida),
            "leida" => Ok(MarkReadRoute::Leida),
            other => Err(Error::Config(format!(
                "unknown mark-read route '{}', expected 'marcar-leida' or 'leida'",
                other
            ))),
        }
    }
}
