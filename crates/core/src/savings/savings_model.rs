//! Savings goals (ahorros) and their installments (cuotas).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::utils::decimal_utils::percent_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoalFrequency {
    Diaria,
    Semanal,
    Quincenal,
    Mensual,
    Trimestral,
    Semestral,
    Anual,
}

impl GoalFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalFrequency::Diaria => "DIARIA",
            GoalFrequency::Semanal => "SEMANAL",
            GoalFrequency::Quincenal => "QUINCENAL",
            GoalFrequency::Mensual => "MENSUAL",
            GoalFrequency::Trimestral => "TRIMESTRAL",
            GoalFrequency::Semestral => "SEMESTRAL",
            GoalFrequency::Anual => "ANUAL",
        }
    }
}

impl fmt::Display for GoalFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoalStatus {
    #[serde(rename = "SININICIAR")]
    NotStarted,
    #[serde(rename = "ACTIVO")]
    Active,
    #[serde(rename = "COMPLETADO")]
    Completed,
    #[serde(rename = "ABANDONADO")]
    Abandoned,
}

impl GoalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "SININICIAR",
            GoalStatus::Active => "ACTIVO",
            GoalStatus::Completed => "COMPLETADO",
            GoalStatus::Abandoned => "ABANDONADO",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SININICIAR" => Ok(GoalStatus::NotStarted),
            "ACTIVO" => Ok(GoalStatus::Active),
            "COMPLETADO" => Ok(GoalStatus::Completed),
            "ABANDONADO" => Ok(GoalStatus::Abandoned),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "unknown goal status '{}'",
                other
            )))),
        }
    }
}

impl FromStr for GoalFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DIARIA" => Ok(GoalFrequency::Diaria),
            "SEMANAL" => Ok(GoalFrequency::Semanal),
            "QUINCENAL" => Ok(GoalFrequency::Quincenal),
            "MENSUAL" => Ok(GoalFrequency::Mensual),
            "TRIMESTRAL" => Ok(GoalFrequency::Trimestral),
            "SEMESTRAL" => Ok(GoalFrequency::Semestral),
            "ANUAL" => Ok(GoalFrequency::Anual),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "unknown frequency '{}'",
                other
            )))),
        }
    }
}

/// A savings goal as returned by `/api/ahorros`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    #[serde(alias = "ahorroId")]
    pub id: i64,
    pub concepto_id: i64,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub monto_meta: Decimal,
    #[serde(default)]
    pub total_acumulado: Decimal,
    pub frecuencia: GoalFrequency,
    #[serde(default)]
    pub fecha_creacion: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_meta: Option<NaiveDate>,
    #[serde(default)]
    pub cantidad_cuotas: Option<i32>,
    pub estado: GoalStatus,
}

impl SavingsGoal {
    pub fn progress(&self) -> GoalProgress {
        GoalProgress::new(self.total_acumulado, self.monto_meta)
    }

    /// Completed by status or by reaching the target.
    pub fn is_completed(&self) -> bool {
        self.estado == GoalStatus::Completed || self.total_acumulado >= self.monto_meta
    }
}

/// Payload for creating a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub concepto_id: i64,
    pub descripcion: Option<String>,
    pub monto_meta: Decimal,
    pub frecuencia: GoalFrequency,
    pub fecha_meta: Option<NaiveDate>,
    pub cantidad_cuotas: Option<i32>,
}

impl NewSavingsGoal {
    pub fn validate(&self) -> crate::errors::Result<()> {
        validate_target(self.monto_meta)
    }
}

/// Payload for editing a goal. The concept cannot change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalUpdate {
    pub descripcion: Option<String>,
    pub monto_meta: Decimal,
    pub frecuencia: GoalFrequency,
    pub fecha_meta: Option<NaiveDate>,
    pub cantidad_cuotas: Option<i32>,
}

impl SavingsGoalUpdate {
    pub fn validate(&self) -> crate::errors::Result<()> {
        validate_target(self.monto_meta)
    }
}

fn validate_target(target: Decimal) -> crate::errors::Result<()> {
    if target <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "montoMeta must be greater than zero".to_string(),
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstallmentStatus {
    Aportado,
    Perdido,
    Pendiente,
}

impl InstallmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            InstallmentStatus::Aportado => "Pagado",
            InstallmentStatus::Pendiente => "Pendiente",
            InstallmentStatus::Perdido => "Vencido",
        }
    }

    /// Only rows not yet contributed offer the pay action.
    pub fn is_payable(self) -> bool {
        self != InstallmentStatus::Aportado
    }
}

/// One installment of a goal's plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    #[serde(rename = "aporteAhorroId", alias = "id")]
    pub id: i64,
    pub meta_id: i64,
    #[serde(default)]
    pub aporte_asignado: Decimal,
    #[serde(default)]
    pub aporte: Option<Decimal>,
    #[serde(default)]
    pub fecha_limite: Option<NaiveDate>,
    pub estado: InstallmentStatus,
    #[serde(default)]
    pub fecha_registro: Option<NaiveDate>,
}

/// Body of a contribution to one installment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub aporte: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

impl Contribution {
    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.aporte <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "aporte must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }
}

/// Progress of a goal towards its target.
///
/// `raw_percent` is the unclamped ratio; `display_percent` is what bars show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalProgress {
    pub raw_percent: Decimal,
    pub display_percent: Decimal,
}

impl GoalProgress {
    pub fn new(accumulated: Decimal, target: Decimal) -> Self {
        let raw_percent = percent_of(accumulated, target);
        Self {
            raw_percent,
            display_percent: raw_percent.clamp(Decimal::ZERO, dec!(100)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_goal_with_backend_id_name() {
        let json = r#"{
            "ahorroId": 7,
            "conceptoId": 2,
            "descripcion": "Viaje",
            "montoMeta": 1000.0,
            "totalAcumulado": 250.5,
            "frecuencia": "MENSUAL",
            "fechaCreacion": "2024-01-10",
            "fechaMeta": "2024-12-31",
            "estado": "SININICIAR",
            "cantidadCuotas": 12
        }"#;
        let goal: SavingsGoal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.id, 7);
        assert_eq!(goal.estado, GoalStatus::NotStarted);
        assert_eq!(goal.total_acumulado, dec!(250.5));
        assert_eq!(goal.fecha_meta, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn unknown_status_fails_decoding() {
        let json = r#"{"id": 1, "conceptoId": 2, "montoMeta": 10, "frecuencia": "MENSUAL", "estado": "PAUSADO"}"#;
        assert!(serde_json::from_str::<SavingsGoal>(json).is_err());
    }

    #[test]
    fn installment_accepts_both_id_spellings() {
        let a: Installment = serde_json::from_str(
            r#"{"aporteAhorroId": 5, "metaId": 7, "aporteAsignado": 100, "estado": "PENDIENTE"}"#,
        )
        .unwrap();
        let b: Installment = serde_json::from_str(
            r#"{"id": 5, "metaId": 7, "aporteAsignado": 100, "estado": "APORTADO"}"#,
        )
        .unwrap();
        assert_eq!(a.id, b.id);
        assert!(a.estado.is_payable());
        assert!(!b.estado.is_payable());
        assert_eq!(InstallmentStatus::Perdido.label(), "Vencido");
    }

    #[test]
    fn zero_target_progress_is_zero() {
        let progress = GoalProgress::new(dec!(50), Decimal::ZERO);
        assert_eq!(progress.raw_percent, Decimal::ZERO);
        assert_eq!(progress.display_percent, Decimal::ZERO);
    }

    #[test]
    fn overfunded_goal_clamps_display_but_keeps_raw() {
        let progress = GoalProgress::new(dec!(150), dec!(100));
        assert_eq!(progress.raw_percent, dec!(150));
        assert_eq!(progress.display_percent, dec!(100));
    }

    #[test]
    fn huge_accumulated_amount_saturates_instead_of_overflowing() {
        let progress = GoalProgress::new(Decimal::from_i128_with_scale(10i128.pow(27), 0), dec!(1));
        assert_eq!(progress.raw_percent, Decimal::MAX);
        assert_eq!(progress.display_percent, dec!(100));
    }

    #[test]
    fn contribution_must_be_positive() {
        let c = Contribution {
            aporte: Decimal::ZERO,
            descripcion: None,
        };
        assert!(c.validate().is_err());
    }
}
