use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, FieldErrors, Result, ValidationError};
use crate::utils::decimal_utils::percent_of;

/// A spending budget for one concept (presupuesto).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub concepto_id: i64,
    #[serde(default)]
    pub concepto_nombre: Option<String>,
    pub limite: Decimal,
    pub activo: bool,
    #[serde(default)]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    /// Filled by the server on `/progreso` only.
    #[serde(default)]
    pub gastado: Option<Decimal>,
    #[serde(default)]
    pub porcentaje: Option<i32>,
    #[serde(default)]
    pub fecha_creacion: Option<NaiveDateTime>,
}

impl Budget {
    pub fn progress(&self) -> BudgetProgress {
        BudgetProgress::new(self.gastado.unwrap_or_default(), self.limite)
    }
}

/// Payload for creating or replacing a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInput {
    pub concepto_id: i64,
    pub limite: Decimal,
    pub activo: bool,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
}

impl BudgetInput {
    pub fn validate(&self) -> Result<()> {
        let mut fields = FieldErrors::new();
        if self.limite <= Decimal::ZERO {
            fields.insert("limite", "El límite debe ser mayor que cero.");
        }
        if let (Some(start), Some(end)) = (self.fecha_inicio, self.fecha_fin) {
            if end < start {
                fields.insert(
                    "fechaFin",
                    "La fecha final no puede ser anterior a la fecha de inicio.",
                );
            }
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(ValidationError::Fields(fields)))
        }
    }
}

/// Colour band of a budget progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetTone {
    Success,
    Warning,
    Danger,
}

impl BudgetTone {
    pub fn for_percent(percent: Decimal) -> Self {
        if percent < dec!(70) {
            BudgetTone::Success
        } else if percent < dec!(100) {
            BudgetTone::Warning
        } else {
            BudgetTone::Danger
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            BudgetTone::Success => "success",
            BudgetTone::Warning => "warning",
            BudgetTone::Danger => "danger",
        }
    }
}

/// Spent share of the limit, capped at 100 and rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetProgress {
    pub spent: Decimal,
    pub percent: Decimal,
    pub tone: BudgetTone,
}

impl BudgetProgress {
    pub fn new(spent: Decimal, limit: Decimal) -> Self {
        let percent = if limit > Decimal::ZERO {
            percent_of(spent, limit).min(dec!(100)).round_dp(2)
        } else {
            Decimal::ZERO
        };
        Self {
            spent,
            percent,
            tone: BudgetTone::for_percent(percent),
        }
    }
}

/// Display label and message for one rejected budget field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub label: String,
    pub message: String,
}

/// Rewrites backend field errors with the budget form's labels and messages.
///
/// Fields without a known label keep their key and the backend message.
pub fn present_budget_errors(fields: &FieldErrors) -> Vec<FieldIssue> {
    fields
        .iter()
        .map(|(field, message)| {
            let (label, friendly) = match budget_field_text(field) {
                Some((label, friendly)) => (label.to_string(), friendly.to_string()),
                None => (field.to_string(), message.to_string()),
            };
            FieldIssue {
                field: field.to_string(),
                label,
                message: friendly,
            }
        })
        .collect()
}

fn budget_field_text(field: &str) -> Option<(&'static str, &'static str)> {
    let text = match field {
        "conceptoId" => ("Concepto", "Es obligatorio seleccionar un concepto."),
        "limite" => (
            "Límite",
            "El valor del límite excede la cantidad permitida (máximo 12 cifras).",
        ),
        "fechaInicio" => (
            "Fecha de Inicio",
            "La fecha de inicio no puede ser posterior a la fecha actual.",
        ),
        "fechaFin" => (
            "Fecha Final",
            "La fecha de finalización no puede ser anterior a la fecha actual.",
        ),
        "activo" => ("Estado", "El estado indicado no es válido."),
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_progress_payload() {
        let json = r#"{
            "id": 4,
            "conceptoId": 3,
            "conceptoNombre": "Transporte",
            "limite": 200.0,
            "activo": true,
            "fechaInicio": "2024-05-01",
            "fechaFin": "2024-05-31",
            "gastado": 150.0,
            "porcentaje": 75
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.gastado, Some(dec!(150)));
        let progress = budget.progress();
        assert_eq!(progress.percent, dec!(75));
        assert_eq!(progress.tone, BudgetTone::Warning);
    }

    #[test]
    fn progress_of_a_tiny_limit_saturates_to_danger() {
        let progress = BudgetProgress::new(Decimal::MAX, Decimal::new(1, 28));
        assert_eq!(progress.percent, dec!(100));
        assert_eq!(progress.tone, BudgetTone::Danger);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let progress = BudgetProgress::new(dec!(260), dec!(200));
        assert_eq!(progress.percent, dec!(100));
        assert_eq!(progress.tone, BudgetTone::Danger);
    }

    #[test]
    fn tone_thresholds() {
        assert_eq!(BudgetTone::for_percent(dec!(69.99)), BudgetTone::Success);
        assert_eq!(BudgetTone::for_percent(dec!(70)), BudgetTone::Warning);
        assert_eq!(BudgetTone::for_percent(dec!(99.99)), BudgetTone::Warning);
        assert_eq!(BudgetTone::for_percent(dec!(100)), BudgetTone::Danger);
    }

    #[test]
    fn zero_limit_reads_as_zero_percent() {
        let progress = BudgetProgress::new(dec!(50), Decimal::ZERO);
        assert_eq!(progress.percent, Decimal::ZERO);
        assert_eq!(progress.tone, BudgetTone::Success);
    }

    #[test]
    fn percent_is_rounded_to_two_places() {
        let progress = BudgetProgress::new(dec!(1), dec!(3));
        assert_eq!(progress.percent, dec!(33.33));
    }

    #[test]
    fn friendly_messages_replace_known_fields_only() {
        let mut fields = FieldErrors::new();
        fields.insert("limite", "must be less than 1e12");
        fields.insert("nota", "demasiado larga");
        let issues = present_budget_errors(&fields);

        assert_eq!(issues[0].label, "Límite");
        assert_eq!(
            issues[0].message,
            "El valor del límite excede la cantidad permitida (máximo 12 cifras)."
        );
        assert_eq!(issues[1].label, "nota");
        assert_eq!(issues[1].message, "demasiado larga");
    }

    #[test]
    fn input_validation_collects_field_errors() {
        let input = BudgetInput {
            concepto_id: 1,
            limite: dec!(0),
            activo: true,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 5, 10),
            fecha_fin: NaiveDate::from_ymd_opt(2024, 5, 1),
        };
        match input.validate() {
            Err(Error::Validation(ValidationError::Fields(fields))) => {
                assert_eq!(fields.len(), 2);
                assert!(fields.get("fechaFin").is_some());
            }
            other => panic!("expected field errors, got {:?}", other),
        }
    }
}
